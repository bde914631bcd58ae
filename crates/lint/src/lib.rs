//! # gs1-lint
//!
//! Field-format linters for GS1 Application Identifier data.
//!
//! A linter checks one component of an AI value (a date, a check digit, a
//! seconds field, ...) and reports the first violation it finds together
//! with the span of bytes a diagnostic should underline.
//!
//! ## Quick Start
//!
//! ```rust
//! use gs1_lint::prelude::*;
//!
//! assert!(lint_ss("59").is_ok());
//!
//! let err = lint_ss("60").unwrap_err();
//! assert_eq!(err.kind, LintErrorKind::IllegalSecond);
//! assert_eq!(err.markup("60"), "*60*");
//! ```
//!
//! ## Built-in Linters
//!
//! - **Time**: [`Seconds`](linters::Seconds) (`ss`)
//!
//! ## Features
//!
//! - `serde` (default): serialize errors, [`LintError::to_json_value`](foundation::LintError::to_json_value)
//! - `registry` (default): [`LinterRegistry`](registry::LinterRegistry) name lookup and dispatch

pub mod foundation;
pub mod linters;
pub mod prelude;
#[cfg(feature = "registry")]
pub mod registry;
