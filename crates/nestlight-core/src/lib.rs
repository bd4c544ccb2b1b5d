//! # Nestlight Core
//!
//! Bracket nesting classification and highlight compositing.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Highlighter                         │
//! │                                                           │
//! │  bracket ──► index ──► scope ──► colorize                 │
//! │  (locate)   (per cursor,  (pairs,     (spans with         │
//! │              merged)       classes)    background stacks) │
//! │                                          │                │
//! │                    resolve ◄── disjoint ◄┘                │
//! │                (opaque colors) (sweep line)               │
//! │                                                           │
//! │  config: Settings (file) ──resolve──► Configuration       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Module Organization
//!
//! Rust modules map to files:
//! - `mod foo;` looks for `foo.rs` or `foo/mod.rs`
//! - `pub use` re-exports items for cleaner public APIs

pub mod bracket;
pub mod colorize;
pub mod config;
pub mod disjoint;
pub mod highlight;
pub mod index;
pub mod resolve;
pub mod scope;

pub use bracket::{locate_brackets, scope_allowed, Bracket, BracketPair, Side};
pub use colorize::{color_scopes, ColorableSpan, Layer};
pub use config::{ConfigError, Configuration, Settings};
pub use disjoint::split_into_disjoint;
pub use highlight::{Highlighter, PlanEntry, RenderPlan};
pub use index::{index_brackets, merge_bracket_indices, NestingIndex, Outer};
pub use resolve::{compute_span_color, prepend_background, ResolvedColor};
pub use scope::{compute_bracket_scopes, Classification, Scope};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No cursors to merge indices for")]
    NoCursors,

    #[error("Index lists differ in length: expected {expected}, found {found}")]
    IndexLengthMismatch { expected: usize, found: usize },

    #[error("Cursor {cursor} is past the end of the buffer ({len} chars)")]
    CursorOutOfBounds { cursor: usize, len: usize },

    #[error("Buffer error: {0}")]
    Buffer(#[from] nestlight_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
