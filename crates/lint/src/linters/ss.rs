//! The `ss` linter: seconds within a minute.
//!
//! Accepts exactly two ASCII digits with a value from `00` to `59`. Leap
//! seconds and time zones are not considered.

use crate::foundation::{Lint, LintError, LintErrorKind, LintResult};

const MAX_SECOND: u8 = 59;

// ============================================================================
// SECONDS LINTER
// ============================================================================

/// Validates an AI component in `SS` format.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. length must be exactly two (`SECOND_TOO_SHORT` / `SECOND_TOO_LONG`,
///    span covering the whole field)
/// 2. both characters must be digits (`NON_DIGIT_CHARACTER`, span covering
///    the first offending character)
/// 3. the value must not exceed 59 (`ILLEGAL_SECOND`, span covering both
///    digits)
///
/// # Examples
///
/// ```
/// use gs1_lint::foundation::{ErrorSpan, Lint, LintErrorKind};
/// use gs1_lint::linters::Seconds;
///
/// assert!(Seconds.lint("59").is_ok());
///
/// let err = Seconds.lint("0x").unwrap_err();
/// assert_eq!(err.kind, LintErrorKind::NonDigitCharacter);
/// assert_eq!(err.span, ErrorSpan::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seconds;

impl Lint for Seconds {
    fn name(&self) -> &'static str {
        "ss"
    }

    fn lint(&self, data: &str) -> LintResult {
        lint_ss(data)
    }
}

/// Creates a new [`Seconds`] linter.
#[must_use]
pub const fn seconds() -> Seconds {
    Seconds
}

/// Lints `data` as a seconds field; see [`Seconds`] for the rules.
pub fn lint_ss(data: &str) -> LintResult {
    let digits = match data.as_bytes() {
        &[tens, units] => [tens, units],
        other => {
            let kind = if other.len() < 2 {
                LintErrorKind::SecondTooShort
            } else {
                LintErrorKind::SecondTooLong
            };
            return Err(LintError::at(kind, 0, other.len()));
        }
    };

    if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
        return Err(LintError::at(LintErrorKind::NonDigitCharacter, pos, 1));
    }

    let [tens, units] = digits.map(|b| b - b'0');
    if tens * 10 + units > MAX_SECOND {
        return Err(LintError::at(LintErrorKind::IllegalSecond, 0, 2));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
