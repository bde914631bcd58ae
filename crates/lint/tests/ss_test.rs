//! Table-driven tests for the `ss` linter.
//!
//! Expected failures are written as markup patterns: the offending bytes of
//! the input are bracketed with `*`, so `"0*x*"` means "the span covering
//! the `x` at offset 1".

use gs1_lint::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn assert_fails(data: &str, kind: LintErrorKind, pattern: &str) {
    let (expected_data, expected_span) =
        ErrorSpan::from_markup(pattern).expect("pattern must hold exactly two markers");
    assert_eq!(expected_data, data, "pattern does not describe the input");

    let err = lint_ss(data).unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!(err.span, expected_span);
    assert_eq!(err.markup(data), pattern);
}

// ============================================================================
// PASS
// ============================================================================

#[rstest]
#[case("00")]
#[case("09")]
#[case("10")]
#[case("30")]
#[case("59")]
fn passes(#[case] data: &str) {
    assert_eq!(lint_ss(data), Ok(()));
}

// ============================================================================
// FAIL
// ============================================================================

#[rstest]
#[case("60", LintErrorKind::IllegalSecond, "*60*")]
#[case("99", LintErrorKind::IllegalSecond, "*99*")]
#[case("x0", LintErrorKind::NonDigitCharacter, "*x*0")]
#[case("0x", LintErrorKind::NonDigitCharacter, "0*x*")]
#[case("-1", LintErrorKind::NonDigitCharacter, "*-*1")]
#[case(" 1", LintErrorKind::NonDigitCharacter, "* *1")]
#[case("", LintErrorKind::SecondTooShort, "**")]
#[case("1", LintErrorKind::SecondTooShort, "*1*")]
#[case("111", LintErrorKind::SecondTooLong, "*111*")]
#[case("0000", LintErrorKind::SecondTooLong, "*0000*")]
fn fails(#[case] data: &str, #[case] kind: LintErrorKind, #[case] pattern: &str) {
    assert_fails(data, kind, pattern);
}

// ============================================================================
// ENTRY POINTS AGREE
// ============================================================================

#[rstest]
#[case("00")]
#[case("60")]
#[case("x0")]
#[case("")]
#[case("123")]
fn struct_and_function_agree(#[case] data: &str) {
    assert_eq!(Seconds.lint(data), lint_ss(data));
    assert_eq!(seconds().lint(data), lint_ss(data));
}

#[test]
fn lint_each_over_fields() {
    let fields = ["00", "60", "5", "59", "x9"];
    let failures = lint_each(&Seconds, fields);

    let summary: Vec<_> = failures
        .iter()
        .map(|(i, err)| (*i, err.kind, err.markup(fields[*i])))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, LintErrorKind::IllegalSecond, "*60*".to_owned()),
            (2, LintErrorKind::SecondTooShort, "*5*".to_owned()),
            (4, LintErrorKind::NonDigitCharacter, "*x*9".to_owned()),
        ]
    );
}
