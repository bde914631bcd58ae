//! Prelude module for convenient imports.
//!
//! ```rust
//! use gs1_lint::prelude::*;
//!
//! assert!(Seconds.lint("07").is_ok());
//! ```

pub use crate::foundation::{ErrorSpan, Lint, LintError, LintErrorKind, LintResult, lint_each};

pub use crate::linters::{Seconds, lint_ss, seconds};

#[cfg(feature = "registry")]
pub use crate::registry::{LinterRegistry, RegistryError};
