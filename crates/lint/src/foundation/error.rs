//! Error types for lint failures
//!
//! Every linter in the crate reports failures with the same two pieces of
//! information: a [`LintErrorKind`] drawn from one shared enumeration, and an
//! [`ErrorSpan`] pointing at the bytes of the field that caused it.

use std::fmt;

use crate::foundation::span::ErrorSpan;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Failure kinds shared across all linters.
///
/// Success is not a kind: a passing lint returns `Ok(())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[non_exhaustive]
pub enum LintErrorKind {
    /// Seconds field is shorter than two characters.
    SecondTooShort,
    /// Seconds field is longer than two characters.
    SecondTooLong,
    /// A character other than `0`-`9` was found where a digit is required.
    NonDigitCharacter,
    /// Two digits were given but their value exceeds 59.
    IllegalSecond,
}

impl LintErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::SecondTooShort,
        Self::SecondTooLong,
        Self::NonDigitCharacter,
        Self::IllegalSecond,
    ];

    /// Stable machine-readable code, e.g. `"SECOND_TOO_SHORT"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SecondTooShort => "SECOND_TOO_SHORT",
            Self::SecondTooLong => "SECOND_TOO_LONG",
            Self::NonDigitCharacter => "NON_DIGIT_CHARACTER",
            Self::IllegalSecond => "ILLEGAL_SECOND",
        }
    }

    /// Human-readable description suitable for diagnostics.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SecondTooShort => "The second is too short for SS format.",
            Self::SecondTooLong => "The second is too long for SS format.",
            Self::NonDigitCharacter => "A non-digit character was found where a digit is expected.",
            Self::IllegalSecond => "The second is not a valid number of seconds within a minute.",
        }
    }

    /// Looks a kind up by its [`code`](Self::code).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for LintErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// LINT ERROR
// ============================================================================

/// A lint failure: what went wrong and where.
///
/// # Examples
///
/// ```
/// use gs1_lint::foundation::{ErrorSpan, LintError, LintErrorKind};
///
/// let err = LintError::new(LintErrorKind::IllegalSecond, ErrorSpan::new(0, 2));
/// assert_eq!(err.markup("60"), "*60*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{} (offset {}, length {})", .kind.message(), .span.offset, .span.length)]
pub struct LintError {
    /// The failure kind.
    pub kind: LintErrorKind,
    /// Bytes of the linted data responsible for the failure.
    pub span: ErrorSpan,
}

impl LintError {
    /// Creates a new lint error.
    #[must_use]
    pub const fn new(kind: LintErrorKind, span: ErrorSpan) -> Self {
        Self { kind, span }
    }

    /// Shorthand for a span starting at `offset` covering `length` bytes.
    #[must_use]
    pub const fn at(kind: LintErrorKind, offset: usize, length: usize) -> Self {
        Self::new(kind, ErrorSpan::new(offset, length))
    }

    /// Renders `data` with the offending span bracketed by `*`.
    #[must_use]
    pub fn markup(&self, data: &str) -> String {
        self.span.markup(data)
    }

    /// Converts the error to a JSON structure for reporting layers.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.kind.code(),
            "message": self.kind.message(),
            "offset": self.span.offset,
            "length": self.span.length,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
