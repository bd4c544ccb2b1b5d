//! Half-open text regions.
//!
//! ## Learning: Range Types
//!
//! Rust's standard library has `Range<T>` (exclusive end) and
//! `RangeInclusive<T>` (inclusive end). Regions use exclusive ends
//! because:
//! - Empty regions (begin == end) are natural, which line-break markers need
//! - Easier arithmetic (length = end - begin)
//! - Consistent with slice semantics
//!
//! `Region` is `Copy`, so passing it by value is as cheap as passing
//! two integers.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A region of text, in character offsets.
///
/// A region is never reversed: `begin <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Region {
    /// Start offset (inclusive)
    pub begin: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Region {
    /// Creates a new region.
    ///
    /// # Panics
    /// Panics if `begin > end`; callers always build regions from ordered
    /// offsets, so a reversed region is a logic error.
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "reversed region {begin}..{end}");
        Self { begin, end }
    }

    /// Creates a zero-width region at a point.
    pub fn point(at: usize) -> Self {
        Self { begin: at, end: at }
    }

    /// Returns the region spanning both given regions.
    pub fn span(from: Region, to: Region) -> Self {
        Self::new(from.begin.min(to.begin), from.end.max(to.end))
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns true for a zero-width region.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns true if a point lies inside this region.
    pub fn contains_point(&self, point: usize) -> bool {
        point >= self.begin && point < self.end
    }

    /// Returns true if `other` lies entirely inside this region.
    pub fn contains(&self, other: &Region) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Returns true if this region shares at least one character with another.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// Returns true if the regions overlap or meet end-to-begin.
    pub fn touches(&self, other: &Region) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    /// Converts to a standard range.
    pub fn as_range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_touch() {
        let a = Region::new(0, 5);
        let b = Region::new(5, 8);
        let c = Region::new(4, 6);

        assert!(!a.overlaps(&b));
        assert!(a.touches(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_containment() {
        let outer = Region::new(2, 10);
        assert!(outer.contains(&Region::new(2, 10)));
        assert!(outer.contains(&Region::new(4, 6)));
        assert!(outer.contains(&Region::point(10)));
        assert!(!outer.contains(&Region::new(1, 3)));
        assert!(outer.contains_point(2));
        assert!(!outer.contains_point(10));
    }

    #[test]
    fn test_span() {
        let joined = Region::span(Region::new(3, 4), Region::new(9, 12));
        assert_eq!(joined, Region::new(3, 12));
        assert_eq!(joined.len(), 9);
    }

    #[test]
    #[should_panic]
    fn test_reversed_region_panics() {
        let _ = Region::new(5, 2);
    }
}
