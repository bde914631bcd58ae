//! The trait every linter implements

use crate::foundation::LintResult;

/// A field-format linter.
///
/// Linters are stateless, so the trait is object safe and requires
/// `Send + Sync`: a single instance can be shared by every thread that
/// checks fields.
///
/// # Examples
///
/// ```
/// use gs1_lint::foundation::{Lint, LintError, LintErrorKind, LintResult};
///
/// struct NotEmpty;
///
/// impl Lint for NotEmpty {
///     fn name(&self) -> &'static str {
///         "notempty"
///     }
///
///     fn lint(&self, data: &str) -> LintResult {
///         if data.is_empty() {
///             return Err(LintError::at(LintErrorKind::SecondTooShort, 0, 0));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(NotEmpty.lint("x").is_ok());
/// ```
pub trait Lint: Send + Sync {
    /// Name under which the data dictionary refers to this linter, e.g. `"ss"`.
    fn name(&self) -> &'static str;

    /// Checks `data`, reporting the first violation found.
    fn lint(&self, data: &str) -> LintResult;
}

impl<L: Lint + ?Sized> Lint for &L {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn lint(&self, data: &str) -> LintResult {
        (**self).lint(data)
    }
}

impl<L: Lint + ?Sized> Lint for Box<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn lint(&self, data: &str) -> LintResult {
        (**self).lint(data)
    }
}
