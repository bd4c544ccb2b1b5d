//! Nesting indices of brackets relative to cursors.
//!
//! A nesting index is an `(outer, inner)` pair describing how a bracket
//! sits relative to a cursor. Consider this expression with the cursor
//! marked by a vertical bar:
//!
//! ```text
//!     ((()((())()(|())(()(()))))())
//! ```
//!
//! The brackets receive these indices (`-` is the unreachable outer level):
//!
//! ```text
//!     ( ( ( ) ( ( ( ) ) ( ) ( | ( ) ) ( ( ) ( ( ) ) ) ) ) ( ) )   bracket
//!     3 2 1 1 1 0 0 0 0 0 0 0 - - 0 0 0 0 0 0 0 0 0 1 2 2 2 3   outer
//!     0 0 1 1 0 1 2 2 1 1 1 0 1 1 0 1 2 2 2 3 3 2 1 0 0 1 1 0   inner
//! ```
//!
//! Arranged by layer it reads naturally:
//!
//! ```text
//!                                                               outer  inner
//!     (                      |                              )     3      0
//!       (                    |                        )           2      0
//!                            |                          ( )              1
//!             (              |                      )             1      0
//!         ( )                |                                           1
//!                           (|    )                               0      0
//!               (     ) ( )  |      (             )                      1
//!                 ( )        |        ( ) (     )                        2
//!                            |              ( )                          3
//!                            |( )                                -1      1
//! ```
//!
//! - matching brackets have matching indices
//! - each outer level has at most one pair with inner index zero, the
//!   *mainline* pair, which contains the cursor
//! - the inner index counts the nesting levels between a bracket and
//!   the mainline pair of its outer level
//! - the outer index counts the mainline pairs crossed to reach the
//!   cursor from outside the expression

use crate::bracket::{Bracket, Side};
use crate::{CoreError, CoreResult};

/// Outer nesting level of a bracket.
///
/// `Unreachable` marks brackets off the shortest path between the cursor
/// and the outside of the expression. It is declared last so the derived
/// ordering treats it as greater than every finite level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outer {
    Level(u32),
    Unreachable,
}

impl Outer {
    /// Builds an outer level from the signed depth counter, where `-1`
    /// means unreachable.
    fn from_depth(depth: i64) -> Self {
        u32::try_from(depth).map_or(Outer::Unreachable, Outer::Level)
    }
}

impl std::fmt::Display for Outer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outer::Level(level) => write!(f, "{level}"),
            Outer::Unreachable => f.write_str("-1"),
        }
    }
}

/// The `(outer, inner)` nesting index of a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NestingIndex {
    pub outer: Outer,
    pub inner: u32,
}

impl NestingIndex {
    /// The index of the pair immediately enclosing the cursor.
    pub const PRIMARY: NestingIndex = NestingIndex {
        outer: Outer::Level(0),
        inner: 0,
    };

    pub fn new(outer: Outer, inner: u32) -> Self {
        Self { outer, inner }
    }

    /// Combines indices seen from two cursors by taking the shortest path.
    ///
    /// Both components take the minimum; `Outer::Unreachable` orders above
    /// every finite level, so it only survives when both sides have it.
    pub fn merge(self, other: NestingIndex) -> NestingIndex {
        NestingIndex {
            outer: self.outer.min(other.outer),
            inner: self.inner.min(other.inner),
        }
    }
}

impl std::fmt::Display for NestingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.outer, self.inner)
    }
}

/// Index of the first bracket located to the right of the cursor.
///
/// A multi-character left bracket counts as being to the left only when
/// it lies entirely before the cursor.
fn cursor_insertion_index(brackets: &[Bracket], cursor: usize) -> usize {
    brackets.partition_point(|bracket| {
        let key = match bracket.side {
            Side::Right => bracket.position,
            Side::Left => bracket.position + bracket.len().saturating_sub(1),
        };
        key < cursor
    })
}

/// Walks brackets away from the cursor and indexes them.
///
/// `closing` is the side that leaves a nesting level in the direction of
/// the walk: left brackets when walking leftward, right brackets when
/// walking rightward.
fn index_outward<'a>(
    brackets: impl Iterator<Item = &'a Bracket>,
    closing: Side,
) -> Vec<NestingIndex> {
    let mut outer_depth: i64 = -1;
    let mut next_depth: u32 = 0;

    brackets
        .map(|bracket| {
            let inner = if bracket.side == closing {
                if next_depth == 0 {
                    outer_depth += 1;
                    0
                } else {
                    let inner = next_depth;
                    next_depth -= 1;
                    inner
                }
            } else {
                next_depth += 1;
                next_depth
            };
            NestingIndex::new(Outer::from_depth(outer_depth), inner)
        })
        .collect()
}

/// Assigns nesting indices to brackets relative to one cursor.
///
/// The result has one index per bracket, in bracket order.
pub fn index_brackets(brackets: &[Bracket], cursor: usize) -> Vec<NestingIndex> {
    let split = cursor_insertion_index(brackets, cursor);
    let (before, after) = brackets.split_at(split);

    let mut indices = index_outward(before.iter().rev(), Side::Left);
    indices.reverse();
    indices.extend(index_outward(after.iter(), Side::Right));
    indices
}

/// Merges the index lists computed for several cursors.
///
/// The fold is seeded with the first cursor's list; since
/// [`NestingIndex::merge`] is associative and commutative, cursor order
/// does not matter.
pub fn merge_bracket_indices(per_cursor: &[Vec<NestingIndex>]) -> CoreResult<Vec<NestingIndex>> {
    let (first, rest) = per_cursor.split_first().ok_or(CoreError::NoCursors)?;

    rest.iter().try_fold(first.clone(), |merged, next| {
        if next.len() != merged.len() {
            return Err(CoreError::IndexLengthMismatch {
                expected: merged.len(),
                found: next.len(),
            });
        }
        Ok(merged
            .iter()
            .zip(next)
            .map(|(a, b)| a.merge(*b))
            .collect())
    })
}
