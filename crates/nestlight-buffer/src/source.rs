//! The read-only view of a text buffer that bracket scanning needs.
//!
//! ## Learning: Traits at the Seams
//!
//! The highlighter never needs to know how text is stored. It asks a
//! handful of questions through `TextSource`, so a host editor can plug
//! in its own buffer type without copying text around.

use crate::Region;

/// Questions the bracket highlighter asks about a buffer.
pub trait TextSource {
    /// Number of characters in the buffer.
    fn len_chars(&self) -> usize;

    /// Space-separated lexical scope names at a point, outermost first
    /// (e.g. `"source comment.line"`).
    fn scope_name(&self, point: usize) -> String;

    /// Returns true if the text starting at `point` equals `needle`.
    fn matches_at(&self, point: usize, needle: &str) -> bool;

    /// Extent of the line containing `point`, excluding the newline.
    fn line_extent(&self, point: usize) -> Region;
}
