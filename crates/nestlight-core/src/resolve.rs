//! Resolving layered spans into concrete colors.

use nestlight_buffer::Region;
use serde::Serialize;

use crate::colorize::{ColorableSpan, Layer};
use crate::config::{Color, ColorPair, ColorTable, Configuration, Rgb};
use crate::scope::Classification;

/// The opaque colors a span is finally drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResolvedColor {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl ResolvedColor {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Deterministic scope name for this color pair, e.g.
    /// `nestlight.FFD700.1E1E1E`.
    pub fn scope_name(&self) -> String {
        format!(
            "nestlight.{:06X}.{:06X}",
            self.foreground.to_u32(),
            self.background.to_u32()
        )
    }
}

/// Puts the base layer under every span's background stack.
///
/// Spans inside one of `lines` get the current-line background, all
/// others the editor background.
pub fn prepend_background(spans: Vec<ColorableSpan>, lines: &[Region]) -> Vec<ColorableSpan> {
    spans
        .into_iter()
        .map(|mut span| {
            let base = if lines.iter().any(|line| line.contains(&span.extent)) {
                Layer::CurrentLine
            } else {
                Layer::Background
            };
            span.background.insert(0, base);
            span
        })
        .collect()
}

/// Picks the `level`-th entry of a cyclic color list (1-based).
///
/// # Panics
/// Panics on an empty list; validated configurations never have one.
fn cycle(colors: &[ColorPair], level: u32) -> ColorPair {
    assert!(!colors.is_empty(), "empty color list");
    colors[(level.saturating_sub(1) as usize) % colors.len()]
}

fn pair_of(kind: Classification, colors: &ColorTable) -> ColorPair {
    match kind {
        Classification::Primary => colors.primary,
        Classification::Secondary(level) => cycle(&colors.secondary, level),
        Classification::Offside(level) => cycle(&colors.offside, level),
        Classification::Adjacent => colors.adjacent,
        Classification::Inconsistent => colors.inconsistent,
    }
}

fn layer_background(layer: &Layer, colors: &ColorTable) -> Color {
    match layer {
        Layer::Background => Color::Opaque(colors.background),
        Layer::CurrentLine => Color::Opaque(colors.current_line),
        Layer::Scope(kind) => pair_of(*kind, colors).background,
    }
}

/// Computes the colors a span is drawn with.
///
/// A transparent foreground shows the theme text color. A transparent
/// background shows the nearest opaque layer below it.
///
/// # Panics
///
/// Panics if no layer of the background stack is opaque, which only
/// happens when the span skipped [`prepend_background`].
pub fn compute_span_color(span: &ColorableSpan, config: &Configuration) -> ResolvedColor {
    let colors = &config.colors;
    let pair = pair_of(span.foreground, colors);

    let foreground = pair.foreground.opaque().unwrap_or(colors.text);
    let background = pair
        .background
        .opaque()
        .or_else(|| {
            span.background
                .iter()
                .rev()
                .find_map(|layer| layer_background(layer, colors).opaque())
        })
        .expect("background stack has no opaque layer; was prepend_background skipped?");

    ResolvedColor::new(foreground, background)
}
