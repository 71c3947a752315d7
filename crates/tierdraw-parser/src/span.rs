//! Byte ranges into the parsed source text.

use std::ops::Range;

/// A half-open byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Locate a 1-based line/column position in `source`.
    ///
    /// The resulting span covers one byte, or is empty when the position
    /// lies at or past the end of the source.
    pub fn from_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let start = (line_start + column.saturating_sub(1)).min(source.len());
        let end = (start + 1).min(source.len());
        Self::new(start..end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let span = Span::new(3..7);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_from_line_column() {
        let source = "{\n  \"nodes\": x\n}";
        let span = Span::from_line_column(source, 2, 12);

        assert_eq!(&source[span.start()..span.end()], "x");
    }

    #[test]
    fn test_from_line_column_past_end() {
        let source = "{\"nodes\": [";
        let span = Span::from_line_column(source, 1, 40);

        assert_eq!(span.start(), source.len());
        assert!(span.is_empty());
    }

    #[test]
    fn test_from_line_column_first_char() {
        let span = Span::from_line_column("oops", 1, 1);
        assert_eq!(span, Span::new(0..1));
    }
}
