//! # Nestlight Buffer
//!
//! Read-only text access for the bracket highlighter.
//!
//! ## Key Concepts for Learning Rust
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope data structure
//! - The highlighter only ever borrows it through `&impl TextSource`
//! - Nothing here mutates text; a pass reads a snapshot and finishes
//!
//! ### Character Offsets
//! - Every offset is a character index, never a byte index
//! - `Region` is half-open, so zero-width regions mark points

mod buffer;
mod cursor;
mod region;
pub mod scopes;
mod source;

pub use buffer::TextBuffer;
pub use cursor::{
    current_lines, expand_cursors_to_regions, merge_adjacent_regions, normalize_cursors,
    ExaminedRegion, Position,
};
pub use region::Region;
pub use scopes::{LexicalRules, ScopeMap};
pub use source::TextSource;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Position {line}:{column} is out of bounds")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Invalid position '{0}', expected LINE:COL")]
    InvalidPosition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
