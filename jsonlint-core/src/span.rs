use serde::Serialize;

/// A [`Span`] represents a contiguous region of the input, measured in characters. It is how a
/// [`Diagnostic`](crate::Diagnostic) is mapped onto an editor annotation. An invariant to be
/// maintained is that `lo <= hi`; a span with `lo == hi` is a zero-width marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    /// Construct a new span. Will panic if `lo > hi`. Prefer this constructor to construct a new
    /// [`Span`] over using direct struct initialization.
    pub const fn new(lo: usize, hi: usize) -> Self {
        assert!(lo <= hi, "`lo` must not be larger than `hi`");
        Span { lo, hi }
    }

    /// A zero-width span sitting at `pos`.
    pub const fn point(pos: usize) -> Self {
        Span { lo: pos, hi: pos }
    }

    pub const fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    pub fn into_range(self) -> std::ops::Range<usize> {
        self.lo..self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_zero_width() {
        let sp = Span::point(7);
        assert!(sp.is_empty());
        assert_eq!(sp.into_range(), 7..7);
    }

    #[test]
    #[should_panic(expected = "`lo` must not be larger than `hi`")]
    fn inverted_span_panics() {
        let _ = Span::new(3, 2);
    }
}
