//! Bracket occurrences and the scanner that finds them.

use nestlight_buffer::{Region, TextSource};
use serde::{Deserialize, Serialize};

/// Which half of a pair a bracket is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A bracket found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    pub side: Side,
    /// Character offset of the first bracket character
    pub position: usize,
    /// The bracket text, e.g. `(` or `#(`
    pub text: String,
}

impl Bracket {
    pub fn left(position: usize, text: impl Into<String>) -> Self {
        Self {
            side: Side::Left,
            position,
            text: text.into(),
        }
    }

    pub fn right(position: usize, text: impl Into<String>) -> Self {
        Self {
            side: Side::Right,
            position,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.side == Side::Left
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        self.side == Side::Right
    }

    /// Length of the bracket text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// The text covered by this bracket.
    pub fn region(&self) -> Region {
        Region::new(self.position, self.position + self.len())
    }
}

/// A supported pair of bracket strings.
///
/// Serialized as a two-element array: `["(", ")"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct BracketPair {
    pub left: String,
    pub right: String,
}

impl BracketPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Returns true if this pair is spelled `left` ... `right`.
    pub fn is(&self, left: &str, right: &str) -> bool {
        self.left == left && self.right == right
    }
}

impl From<(String, String)> for BracketPair {
    fn from((left, right): (String, String)) -> Self {
        Self { left, right }
    }
}

impl From<BracketPair> for (String, String) {
    fn from(pair: BracketPair) -> Self {
        (pair.left, pair.right)
    }
}

/// Returns true when no blacklisted name occurs in the scope name.
pub fn scope_allowed(scope: &str, blacklist: &[String]) -> bool {
    !blacklist.iter().any(|banned| scope.contains(banned.as_str()))
}

/// Locates all brackets inside `region`.
///
/// Points whose scope is rejected by `suitable` are skipped. Pairs are
/// tried in order and the first matching string wins, so no bracket may
/// be a prefix of another one at the same point.
pub fn locate_brackets<S, F>(
    source: &S,
    region: Region,
    pairs: &[BracketPair],
    suitable: F,
) -> Vec<Bracket>
where
    S: TextSource + ?Sized,
    F: Fn(&str) -> bool,
{
    let mut brackets = Vec::new();
    let end = region.end.min(source.len_chars());

    let mut point = region.begin;
    while point < end {
        let mut step = 1;

        if suitable(&source.scope_name(point)) {
            for pair in pairs {
                if source.matches_at(point, &pair.left) {
                    let bracket = Bracket::left(point, pair.left.as_str());
                    step = bracket.len().max(1);
                    brackets.push(bracket);
                    break;
                }
                if source.matches_at(point, &pair.right) {
                    let bracket = Bracket::right(point, pair.right.as_str());
                    step = bracket.len().max(1);
                    brackets.push(bracket);
                    break;
                }
            }
        }

        point += step;
    }

    brackets
}
