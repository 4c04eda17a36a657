//! Source location tracking for error reporting.
//!
//! Binding expressions live inside template attributes, so a [`Span`] is a
//! half-open byte range into the expression source rather than a
//! line/column pair.

use std::fmt;

/// A byte range `start..end` within a binding expression's source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: u32,
    /// Offset one past the last byte.
    pub end: u32,
}

impl Span {
    /// Create a new span from a start and end offset.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(3, 15);
        assert_eq!(format!("{}", span), "3..15");
        assert_eq!(format!("{:?}", span), "3..15");
    }

    #[test]
    fn span_default_is_origin() {
        assert_eq!(Span::default(), Span::new(0, 0));
    }
}
