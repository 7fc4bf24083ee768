//! Position and range tracking for grammar source text
//!
//! ## Types
//!
//! - [`Position`] - a zero-based line:column position (column counted in bytes)
//! - [`Range`] - a byte span together with its start/end positions
//! - [`SourceText`] - the grammar text plus a line index for byte-to-position conversion
//!
//! ## Line endings
//!
//! ABNF sources are accepted with `\r\n`, `\r` or `\n` line endings, so the line
//! index treats all three as a single line break. Diagnostics print positions
//! one-based, see [`Position::display_one_based`].

use std::fmt;
use std::ops::Range as ByteRange;

/// A line:column position in the grammar source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Render as `line:column` counting from one, the form used in diagnostics.
    pub fn display_one_based(&self) -> String {
        format!("{}:{}", self.line + 1, self.column + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A location in the grammar source (byte span and start/end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Move the end of this range to the end of `other`, keeping the start.
    pub fn extend_to(&mut self, other: &Range) {
        self.span.end = other.span.end;
        self.end = other.end;
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Grammar source text with a line index
///
/// Shared (behind an `Arc`) by the parser builders and the rulelist so that
/// nodes can be created and re-spanned without re-scanning the text.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_starts.push(i + 2);
                    i += 2;
                    continue;
                }
                b'\r' | b'\n' => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Slice of the source covered by `span`; empty if the span is out of bounds.
    pub fn slice(&self, span: &ByteRange<usize>) -> &str {
        self.text.get(span.clone()).unwrap_or("")
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(insert_at) => insert_at - 1,
        };
        Position::new(line, byte_offset - self.line_starts[line])
    }

    /// Convert a byte span to a [`Range`]
    pub fn range(&self, span: ByteRange<usize>) -> Range {
        let start = self.byte_to_position(span.start);
        let end = self.byte_to_position(span.end);
        Range::new(span, start, end)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_lf() {
        let source = SourceText::new("foo = a\nbar = b\n");
        assert_eq!(source.byte_to_position(0), Position::new(0, 0));
        assert_eq!(source.byte_to_position(6), Position::new(0, 6));
        assert_eq!(source.byte_to_position(8), Position::new(1, 0));
        assert_eq!(source.byte_to_position(14), Position::new(1, 6));
    }

    #[test]
    fn test_byte_to_position_crlf_and_cr() {
        let source = SourceText::new("a = b\r\nc = d\re = f");
        assert_eq!(source.line_count(), 3);
        assert_eq!(source.byte_to_position(7), Position::new(1, 0));
        assert_eq!(source.byte_to_position(13), Position::new(2, 0));
        assert_eq!(source.byte_to_position(17), Position::new(2, 4));
    }

    #[test]
    fn test_range_and_slice() {
        let source = SourceText::new("rule = \"ab\"\n");
        let range = source.range(8..10);
        assert_eq!(source.slice(&range.span), "ab");
        assert_eq!(range.start, Position::new(0, 8));
        assert_eq!(range.end, Position::new(0, 10));
        assert_eq!(source.slice(&(40..50)), "");
    }

    #[test]
    fn test_extend_to_keeps_start() {
        let source = SourceText::new("foo = a\nfoo =/ b\n");
        let mut first = source.range(6..7);
        let second = source.range(15..16);
        first.extend_to(&second);
        assert_eq!(first.span, 6..16);
        assert_eq!(first.start, Position::new(0, 6));
        assert_eq!(first.end, Position::new(1, 8));
    }

    #[test]
    fn test_position_display() {
        let pos = Position::new(2, 4);
        assert_eq!(format!("{}", pos), "2:4");
        assert_eq!(pos.display_one_based(), "3:5");
    }
}
