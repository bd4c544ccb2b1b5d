//! Text buffer backed by a rope.
//!
//! ## Why Rope?
//!
//! Bracket scanning asks many small questions ("does `#(` start here?",
//! "which line is this point on?") at arbitrary offsets. A rope answers
//! both in O(log n) without materializing the whole text:
//! - `char_to_line` / `line_to_char` give line extents directly
//! - slices are views into shared chunks, not copies
//!
//! ## Learning: Ownership in Action
//!
//! ```rust,ignore
//! let buffer = TextBuffer::from("(a b)");  // buffer OWNS the rope
//! let text = buffer.text();                // text BORROWS from buffer
//! ```

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use std::path::Path;

use crate::scopes::{LexicalRules, ScopeMap};
use crate::{BufferError, BufferResult, Position, Region, TextSource};

/// A read-mostly text buffer with lexical scope annotations.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Comment/string scopes used to filter bracket matches
    scopes: ScopeMap,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use nestlight_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a buffer from a file.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(Self {
            rope: Rope::from_str(&content),
            scopes: ScopeMap::new(),
        })
    }

    /// Annotates comments and strings using the given rules.
    pub fn annotate(&mut self, rules: &LexicalRules) {
        let text = self.text().into_owned();
        self.scopes = rules.annotate(&text);
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> BufferResult<Cow<'_, str>> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        Ok(self.rope.slice(range).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    // ==================== Position Conversion ====================

    /// Converts a Position (line, column) to a character index.
    pub fn position_to_char_idx(&self, pos: Position) -> BufferResult<usize> {
        if pos.line >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();

        // Allow column to be at end of line (for a cursor after the last char)
        if pos.column > line_len {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        Ok(line_start + pos.column)
    }

    /// Converts a character index to a Position (line, column).
    pub fn char_idx_to_position(&self, char_idx: usize) -> BufferResult<Position> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let line = self.rope.char_to_line(char_idx);
        let column = char_idx - self.rope.line_to_char(line);

        Ok(Position { line, column })
    }
}

impl TextSource for TextBuffer {
    #[inline]
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn scope_name(&self, point: usize) -> String {
        self.scopes.name_at(point)
    }

    fn matches_at(&self, point: usize, needle: &str) -> bool {
        let len = needle.chars().count();
        if point + len > self.len_chars() {
            return false;
        }
        self.rope
            .slice(point..point + len)
            .chars()
            .eq(needle.chars())
    }

    fn line_extent(&self, point: usize) -> Region {
        let point = point.min(self.len_chars());
        let line = self.rope.char_to_line(point);
        let begin = self.rope.line_to_char(line);
        let slice = self.rope.line(line);

        let mut len = slice.len_chars();
        // Trim the line terminator, including a CRLF pair.
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Region::new(begin, begin + len)
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            scopes: ScopeMap::new(),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_at() {
        let buffer = TextBuffer::from("(a #(b))");
        assert!(buffer.matches_at(0, "("));
        assert!(buffer.matches_at(3, "#("));
        assert!(!buffer.matches_at(4, "#("));
        assert!(!buffer.matches_at(7, "))"));
        assert!(buffer.matches_at(6, "))"));
    }

    #[test]
    fn test_matches_at_multibyte() {
        let buffer = TextBuffer::from("«λ»");
        assert_eq!(buffer.len_chars(), 3);
        assert!(buffer.matches_at(0, "«"));
        assert!(buffer.matches_at(2, "»"));
    }

    #[test]
    fn test_line_extent() {
        let buffer = TextBuffer::from("ab\r\ncd\n\nef");
        assert_eq!(buffer.line_extent(0), Region::new(0, 2));
        assert_eq!(buffer.line_extent(2), Region::new(0, 2));
        assert_eq!(buffer.line_extent(5), Region::new(4, 6));
        assert_eq!(buffer.line_extent(7), Region::new(7, 7));
        assert_eq!(buffer.line_extent(10), Region::new(8, 10));
    }

    #[test]
    fn test_position_conversion() {
        let buffer = TextBuffer::from("Line 1\nLine 2\nLine 3");
        assert_eq!(buffer.position_to_char_idx(Position::new(1, 2)).unwrap(), 9);
        assert_eq!(buffer.char_idx_to_position(9).unwrap(), Position::new(1, 2));
        assert!(buffer.position_to_char_idx(Position::new(5, 0)).is_err());
    }

    #[test]
    fn test_annotated_scope_name() {
        let mut buffer = TextBuffer::from("(a ; b)\n(c)");
        buffer.annotate(&LexicalRules::lisp());
        assert_eq!(buffer.scope_name(1), "source");
        assert_eq!(buffer.scope_name(6), "source comment.line");
    }
}
