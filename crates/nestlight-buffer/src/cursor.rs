//! Cursor positions and the regions scanned around them.
//!
//! ## Learning: Newtype Pattern
//!
//! `Position` is a struct that wraps line/column coordinates.
//! This is better than using `(usize, usize)` because:
//! - Type safety: Can't accidentally swap line and column
//! - Named fields: Self-documenting code
//! - Methods: Can add behavior specific to positions
//!
//! Everything else in this module works on plain character offsets,
//! which is what the bracket highlighter consumes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{BufferError, Region, TextSource};

/// A position in the text buffer (line and column).
///
/// Both line and column are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display as 1-indexed for user-facing output
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Parses the 1-indexed `LINE:COL` form produced by `Display`.
impl FromStr for Position {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BufferError::InvalidPosition(s.to_string());
        let (line, column) = s.split_once(':').ok_or_else(invalid)?;
        let line: usize = line.trim().parse().map_err(|_| invalid())?;
        let column: usize = column.trim().parse().map_err(|_| invalid())?;
        if line == 0 || column == 0 {
            return Err(invalid());
        }
        Ok(Self::new(line - 1, column - 1))
    }
}

/// Sorts cursor offsets and drops duplicates.
pub fn normalize_cursors(cursors: &[usize]) -> Vec<usize> {
    let mut sorted = cursors.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Computes the vicinity of every cursor.
///
/// Each region extends `radius` characters to both sides of its cursor,
/// clamped to `[0, len]`.
pub fn expand_cursors_to_regions(cursors: &[usize], radius: usize, len: usize) -> Vec<Region> {
    cursors
        .iter()
        .map(|&cursor| {
            let cursor = cursor.min(len);
            Region::new(
                cursor.saturating_sub(radius),
                cursor.saturating_add(radius).min(len),
            )
        })
        .collect()
}

/// A region to scan together with the cursors it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaminedRegion {
    pub region: Region,
    /// Cursors inside the region, sorted
    pub cursors: Vec<usize>,
}

/// Merges touching or overlapping vicinities and groups their cursors.
///
/// `regions` and `cursors` correspond one to one and must be sorted by
/// cursor, as produced by [`expand_cursors_to_regions`] over
/// [`normalize_cursors`] output. Identical regions (several cursors
/// clamped against the same buffer edge) collapse into one group.
pub fn merge_adjacent_regions(regions: &[Region], cursors: &[usize]) -> Vec<ExaminedRegion> {
    debug_assert_eq!(regions.len(), cursors.len());

    let mut result: Vec<ExaminedRegion> = Vec::new();
    for (&region, &cursor) in regions.iter().zip(cursors) {
        match result.last_mut() {
            Some(current) if current.region.touches(&region) => {
                current.region = Region::span(current.region, region);
                if current.cursors.last() != Some(&cursor) {
                    current.cursors.push(cursor);
                }
            }
            _ => result.push(ExaminedRegion {
                region,
                cursors: vec![cursor],
            }),
        }
    }
    result
}

/// Extents of the lines holding cursors, merged when consecutive.
///
/// Two line extents are consecutive when only the newline separates them.
pub fn current_lines(source: &impl TextSource, cursors: &[usize]) -> Vec<Region> {
    let mut lines: Vec<Region> = Vec::new();
    for &cursor in cursors {
        let line = source.line_extent(cursor.min(source.len_chars()));
        match lines.last_mut() {
            Some(last) if line.begin <= last.end + 1 => {
                *last = Region::span(*last, line);
            }
            _ => lines.push(line),
        }
    }
    lines
}
