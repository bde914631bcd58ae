//! Shared linter vocabulary
//!
//! - **Trait**: [`Lint`]
//! - **Errors**: [`LintErrorKind`], [`LintError`]
//! - **Spans**: [`ErrorSpan`] and its `*...*` markup
//!
//! A linter receives the bytes of one field, borrowed from the caller, and
//! either accepts them or returns the first violation together with the span
//! a diagnostic should underline.

pub mod error;
pub mod span;
pub mod traits;

pub use error::{LintError, LintErrorKind};
pub use span::{ErrorSpan, MARKER};
pub use traits::Lint;

/// Outcome of linting a single field.
pub type LintResult = Result<(), LintError>;

/// Runs `linter` over every field, collecting the failures with their index.
///
/// # Examples
///
/// ```
/// use gs1_lint::foundation::lint_each;
/// use gs1_lint::linters::Seconds;
///
/// let failures = lint_each(&Seconds, ["00", "60", "59"]);
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].0, 1);
/// ```
pub fn lint_each<'a, L, I>(linter: &L, fields: I) -> Vec<(usize, LintError)>
where
    L: Lint + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .enumerate()
        .filter_map(|(i, data)| linter.lint(data).err().map(|e| (i, e)))
        .collect()
}
