//! Error spans and the `*...*` markup used to display them
//!
//! A span is measured in bytes of the linted data. GS1 field data is ASCII,
//! so byte offsets and character offsets coincide for every valid input.

use std::fmt;
use std::ops::Range;

/// Marker placed on either side of the offending bytes by [`ErrorSpan::markup`].
pub const MARKER: char = '*';

const MARKER_BYTE: u8 = b'*';

/// The `(offset, length)` pair locating the bytes responsible for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorSpan {
    /// Start of the offending bytes.
    pub offset: usize,
    /// Number of offending bytes; zero for an empty field.
    pub length: usize,
}

impl ErrorSpan {
    /// Creates a new span.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// A span covering all of `data`.
    #[must_use]
    pub const fn whole(data: &str) -> Self {
        Self::new(0, data.len())
    }

    /// One past the last offending byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// The span as a byte range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Returns `true` if the span lies within `data`.
    #[must_use]
    pub const fn fits(&self, data: &str) -> bool {
        self.end() <= data.len()
    }

    /// Renders `data` with the span bracketed by [`MARKER`].
    ///
    /// Spans reaching past the end of `data` are clamped to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_lint::foundation::ErrorSpan;
    ///
    /// assert_eq!(ErrorSpan::new(1, 1).markup("0x"), "0*x*");
    /// assert_eq!(ErrorSpan::new(0, 0).markup(""), "**");
    /// ```
    #[must_use]
    pub fn markup(&self, data: &str) -> String {
        let bytes = data.as_bytes();
        let start = self.offset.min(bytes.len());
        let end = self.end().min(bytes.len());

        let mut out = Vec::with_capacity(bytes.len() + 2);
        out.extend_from_slice(&bytes[..start]);
        out.push(MARKER_BYTE);
        out.extend_from_slice(&bytes[start..end]);
        out.push(MARKER_BYTE);
        out.extend_from_slice(&bytes[end..]);

        // Only splits inside a multi-byte character can make this lossy.
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Parses a markup pattern back into the plain data and its span.
    ///
    /// Returns `None` unless the pattern holds exactly two markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_lint::foundation::ErrorSpan;
    ///
    /// let (data, span) = ErrorSpan::from_markup("*x*0").unwrap();
    /// assert_eq!(data, "x0");
    /// assert_eq!(span, ErrorSpan::new(0, 1));
    /// ```
    #[must_use]
    pub fn from_markup(pattern: &str) -> Option<(String, Self)> {
        let mut markers = pattern.match_indices(MARKER).map(|(i, _)| i);
        let open = markers.next()?;
        let close = markers.next()?;
        if markers.next().is_some() {
            return None;
        }

        let data = pattern.replace(MARKER, "");
        Some((data, Self::new(open, close - open - 1)))
    }
}

impl fmt::Display for ErrorSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}

impl From<ErrorSpan> for Range<usize> {
    fn from(span: ErrorSpan) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_brackets_span() {
        assert_eq!(ErrorSpan::new(0, 2).markup("60"), "*60*");
        assert_eq!(ErrorSpan::new(0, 1).markup("x0"), "*x*0");
        assert_eq!(ErrorSpan::new(0, 3).markup("111"), "*111*");
    }

    #[test]
    fn markup_clamps_out_of_range() {
        assert_eq!(ErrorSpan::new(1, 10).markup("ab"), "a*b*");
        assert_eq!(ErrorSpan::new(5, 1).markup("ab"), "ab**");
    }

    #[test]
    fn from_markup_rejects_wrong_marker_count() {
        assert_eq!(ErrorSpan::from_markup("60"), None);
        assert_eq!(ErrorSpan::from_markup("*60"), None);
        assert_eq!(ErrorSpan::from_markup("*6*0*"), None);
    }

    #[test]
    fn from_markup_empty_span() {
        assert_eq!(
            ErrorSpan::from_markup("**"),
            Some((String::new(), ErrorSpan::new(0, 0)))
        );
    }

    #[test]
    fn range_and_display() {
        let span = ErrorSpan::new(1, 1);
        assert_eq!(span.range(), 1..2);
        assert_eq!(span.to_string(), "1..2");
        assert!(span.fits("0x"));
        assert!(!span.fits("0"));
    }

    #[test]
    fn whole_covers_data() {
        assert_eq!(ErrorSpan::whole("111"), ErrorSpan::new(0, 3));
    }
}
