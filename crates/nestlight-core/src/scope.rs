//! Bracket scopes: matched pairs of brackets and their classification.

use std::collections::{HashMap, VecDeque};

use nestlight_buffer::Region;

use crate::bracket::{Bracket, BracketPair};
use crate::index::{NestingIndex, Outer};

/// A pair of matching brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub index: NestingIndex,
    pub left: Bracket,
    pub right: Bracket,
}

impl Scope {
    /// Regions covered by the two brackets.
    pub fn bracket_regions(&self) -> [Region; 2] {
        [self.left.region(), self.right.region()]
    }

    /// Region covered by the whole scope, brackets included.
    pub fn expression_region(&self) -> Region {
        Region::new(self.left.position, self.right.region().end)
    }

    /// Returns true if the cursor touches the left bracket from outside or
    /// sits within it: `begin <= cursor < begin + len(left)`.
    pub fn at_left(&self, cursor: usize) -> bool {
        self.left.region().contains_point(cursor)
    }

    /// Returns true if the cursor sits within the right bracket or right
    /// after it: `end < cursor <= end + len(right)`.
    pub fn at_right(&self, cursor: usize) -> bool {
        let right = self.right.region();
        right.begin < cursor && cursor <= right.end
    }

    /// Returns true if the brackets spell a supported pair.
    pub fn is_consistent(&self, supported: &[BracketPair]) -> bool {
        supported
            .iter()
            .any(|pair| pair.is(&self.left.text, &self.right.text))
    }

    pub fn is_primary(&self) -> bool {
        self.index == NestingIndex::PRIMARY
    }

    pub fn is_secondary(&self) -> bool {
        self.index.inner == 0 && self.index.outer != Outer::Level(0)
    }

    pub fn is_offside(&self) -> bool {
        self.index.inner > 0
    }

    pub fn is_adjacent(&self, cursors: &[usize]) -> bool {
        cursors
            .iter()
            .any(|&cursor| self.at_left(cursor) || self.at_right(cursor))
    }
}

/// Pairs brackets with equal indices into scopes.
///
/// Every left bracket takes the first unclaimed right bracket after it
/// whose index is exactly equal. Brackets without a partner in range
/// belong to no scope. Scopes are returned in left bracket order.
pub fn compute_bracket_scopes(brackets: &[Bracket], indices: &[NestingIndex]) -> Vec<Scope> {
    debug_assert_eq!(brackets.len(), indices.len());

    // Unclaimed right brackets per index, in text order. A right bracket
    // before the current left bracket is useless to every later left
    // bracket too, so queues only ever shrink from the front.
    let mut rights: HashMap<NestingIndex, VecDeque<usize>> = HashMap::new();
    for (i, (bracket, index)) in brackets.iter().zip(indices).enumerate() {
        if bracket.is_right() {
            rights.entry(*index).or_default().push_back(i);
        }
    }

    let mut scopes = Vec::new();
    for (i, (bracket, index)) in brackets.iter().zip(indices).enumerate() {
        if !bracket.is_left() {
            continue;
        }
        let Some(queue) = rights.get_mut(index) else {
            continue;
        };
        while queue.front().is_some_and(|&j| j < i) {
            queue.pop_front();
        }
        if let Some(j) = queue.pop_front() {
            scopes.push(Scope {
                index: *index,
                left: bracket.clone(),
                right: brackets[j].clone(),
            });
        }
    }
    scopes
}

/// The role a scope plays relative to the cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The pair immediately enclosing a cursor
    Primary,
    /// An enclosing pair further out, by outer level (1-based)
    Secondary(u32),
    /// A pair off the mainline, by inner level (1-based)
    Offside(u32),
    /// A pair touching a cursor without enclosing it
    Adjacent,
    /// A pair whose brackets do not form a supported pair
    Inconsistent,
}

impl Classification {
    /// Classifies a scope. The first matching rule wins: inconsistent,
    /// primary, secondary, adjacent, offside.
    ///
    /// # Panics
    /// Panics on an index no rule covers, which means the indexer produced
    /// something impossible.
    pub fn of(scope: &Scope, supported: &[BracketPair], cursors: &[usize]) -> Self {
        if !scope.is_consistent(supported) {
            return Classification::Inconsistent;
        }
        if scope.is_primary() {
            return Classification::Primary;
        }
        if scope.is_secondary() {
            match scope.index.outer {
                Outer::Level(level) => return Classification::Secondary(level),
                Outer::Unreachable => panic!("mainline scope with unreachable outer level: {scope:?}"),
            }
        }
        if scope.is_adjacent(cursors) {
            return Classification::Adjacent;
        }
        if scope.is_offside() {
            return Classification::Offside(scope.index.inner);
        }
        unreachable!("unclassifiable scope {scope:?}")
    }

    /// Settings key of this classification.
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Primary => "primary",
            Classification::Secondary(_) => "secondary",
            Classification::Offside(_) => "offside",
            Classification::Adjacent => "adjacent",
            Classification::Inconsistent => "inconsistent",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Secondary(level) | Classification::Offside(level) => {
                write!(f, "{}({level})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
