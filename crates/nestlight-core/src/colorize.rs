//! Turns classified scopes into colorable spans.

use nestlight_buffer::Region;

use crate::bracket::BracketPair;
use crate::config::{ColorMode, Configuration};
use crate::scope::{Classification, Scope};

/// One entry of a span's background stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The editor background
    Background,
    /// The background of a line holding a cursor
    CurrentLine,
    /// The background of an enclosing scope painted as an expression
    Scope(Classification),
}

/// A text range with a foreground kind and a stack of background layers.
///
/// The stack is ordered outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorableSpan {
    pub extent: Region,
    pub foreground: Classification,
    pub background: Vec<Layer>,
}

impl ColorableSpan {
    pub fn new(extent: Region, foreground: Classification, background: Vec<Layer>) -> Self {
        Self {
            extent,
            foreground,
            background,
        }
    }

    /// Same colors over a different extent.
    pub fn with_extent(&self, extent: Region) -> Self {
        Self {
            extent,
            foreground: self.foreground,
            background: self.background.clone(),
        }
    }
}

/// Returns false for scopes the configuration rules out.
fn suitable(scope: &Scope, kind: Classification, config: &Configuration, cursors: &[usize]) -> bool {
    match kind {
        Classification::Offside(inner) => config.offside_limit.is_none_or(|limit| inner <= limit),
        Classification::Secondary(outer) => {
            config.secondary_limit.is_none_or(|limit| outer <= limit)
        }
        Classification::Adjacent => {
            let side = config.adjacent_side;
            cursors.iter().any(|&cursor| {
                (side.needs_left() && scope.at_left(cursor))
                    || (side.needs_right() && scope.at_right(cursor))
            })
        }
        _ => true,
    }
}

fn extents_of(scope: &Scope, mode: ColorMode) -> Vec<Region> {
    match mode {
        ColorMode::None => Vec::new(),
        ColorMode::Brackets => scope.bracket_regions().to_vec(),
        ColorMode::Expression => vec![scope.expression_region()],
    }
}

/// Converts scopes, ordered by left bracket, into colorable spans.
///
/// Spans may overlap: a scope painted as an expression becomes part of
/// the background of every span nested inside it.
pub fn color_scopes(
    scopes: &[Scope],
    config: &Configuration,
    cursors: &[usize],
    supported: &[BracketPair],
) -> Vec<ColorableSpan> {
    let mut spans = Vec::new();
    let mut stack: Vec<(Region, Classification)> = Vec::new();

    for scope in scopes {
        let kind = Classification::of(scope, supported, cursors);
        if !suitable(scope, kind, config, cursors) {
            continue;
        }

        let mode = config.modes.of(kind);
        if mode == ColorMode::None {
            continue;
        }

        let expression = scope.expression_region();
        while stack
            .last()
            .is_some_and(|(outer, _)| outer.end < expression.begin)
        {
            stack.pop();
        }

        let background: Vec<Layer> = stack.iter().map(|&(_, kind)| Layer::Scope(kind)).collect();
        for extent in extents_of(scope, mode) {
            spans.push(ColorableSpan::new(extent, kind, background.clone()));
        }

        if mode == ColorMode::Expression {
            stack.push((expression, kind));
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::tests::parens;
    use crate::index::{index_brackets, merge_bracket_indices};
    use crate::scope::compute_bracket_scopes;

    fn spans_for(text: &str, cursors: &[usize], config: &Configuration) -> Vec<ColorableSpan> {
        let brackets = parens(text);
        let per_cursor: Vec<_> = cursors.iter().map(|&c| index_brackets(&brackets, c)).collect();
        let indices = merge_bracket_indices(&per_cursor).unwrap();
        let scopes = compute_bracket_scopes(&brackets, &indices);
        color_scopes(&scopes, config, cursors, &config.brackets)
    }

    #[test]
    fn test_nested_expressions() {
        let config = Configuration::default();
        let spans = spans_for("(a (b) c)", &[5], &config);

        assert_eq!(
            spans,
            vec![
                ColorableSpan::new(Region::new(0, 9), Classification::Secondary(1), vec![]),
                ColorableSpan::new(
                    Region::new(3, 6),
                    Classification::Primary,
                    vec![Layer::Scope(Classification::Secondary(1))]
                ),
            ]
        );
    }

    #[test]
    fn test_brackets_mode_emits_two_spans() {
        let mut config = Configuration::default();
        config.modes.primary = ColorMode::Brackets;
        let spans = spans_for("(ab)", &[2], &config);

        let extents: Vec<_> = spans.iter().map(|s| s.extent).collect();
        assert_eq!(extents, vec![Region::new(0, 1), Region::new(3, 4)]);
    }

    #[test]
    fn test_none_mode_skips_and_does_not_push() {
        let mut config = Configuration::default();
        config.modes.secondary = ColorMode::None;
        let spans = spans_for("(a (b) c)", &[5], &config);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].foreground, Classification::Primary);
        assert!(spans[0].background.is_empty());
    }

    #[test]
    fn test_siblings_pop_the_stack() {
        let config = Configuration::default();
        // Cursor in the first pair; the second one is offside within the outer.
        let spans = spans_for("((x) (y))", &[2], &config);

        let offside: Vec<_> = spans
            .iter()
            .filter(|s| s.foreground == Classification::Offside(1))
            .collect();
        assert_eq!(offside.len(), 2);
        for span in offside {
            assert_eq!(span.background, vec![Layer::Scope(Classification::Secondary(1))]);
        }
    }

    #[test]
    fn test_offside_limit() {
        let mut config = Configuration::default();
        config.offside_limit = Some(1);
        let spans = spans_for("((a) ((b)) |)", &[11], &config);

        assert!(spans.iter().all(|s| s.foreground != Classification::Offside(2)));
        assert!(spans.iter().any(|s| s.foreground == Classification::Offside(1)));
    }

    #[test]
    fn test_secondary_limit() {
        let mut config = Configuration::default();
        config.secondary_limit = Some(1);
        let spans = spans_for("(((a)))", &[4], &config);

        let kinds: Vec<_> = spans.iter().map(|s| s.foreground).collect();
        assert_eq!(kinds, vec![Classification::Secondary(1), Classification::Primary]);
    }

    #[test]
    fn test_adjacent_side() {
        let mut config = Configuration::default();
        // Cursor right after `(a)`.
        let text = "((a) b)";

        let spans = spans_for(text, &[4], &config);
        assert!(spans.iter().any(|s| s.foreground == Classification::Adjacent));

        config.adjacent_side = crate::config::AdjacentSide::Left;
        let spans = spans_for(text, &[4], &config);
        assert!(spans.iter().all(|s| s.foreground != Classification::Adjacent));
    }
}
