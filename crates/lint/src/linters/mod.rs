//! Built-in linters
//!
//! Each linter checks one field format from the GS1 data dictionary and is
//! exposed both as a zero-sized type implementing
//! [`Lint`](crate::foundation::Lint) and as a plain `lint_*` function.
//!
//! | Name | Type | Function |
//! |------|------|----------|
//! | `ss` | [`Seconds`] | [`lint_ss`] |

// Time component linters
pub mod ss;

pub use ss::{Seconds, lint_ss, seconds};
