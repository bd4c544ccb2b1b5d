//! The highlighting pipeline.
//!
//! A pass runs these stages over every examined region:
//!
//! ```text
//! locate -> index (per cursor) -> merge -> match scopes -> color
//!        -> split into disjoint spans -> add base layer -> resolve
//! ```
//!
//! and collects the resolved spans into a [`RenderPlan`].

use std::collections::BTreeMap;

use nestlight_buffer::{
    current_lines, expand_cursors_to_regions, merge_adjacent_regions, normalize_cursors,
    ExaminedRegion, Position, Region, TextBuffer, TextSource,
};
use serde::Serialize;

use crate::bracket::{locate_brackets, scope_allowed};
use crate::colorize::color_scopes;
use crate::config::{Configuration, Settings};
use crate::disjoint::split_into_disjoint;
use crate::index::{index_brackets, merge_bracket_indices};
use crate::resolve::{compute_span_color, prepend_background, ResolvedColor};
use crate::scope::compute_bracket_scopes;
use crate::{CoreError, CoreResult};

/// Regions painted with one color pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    /// Scope name a host registers the colors under
    pub scope: String,
    pub color: ResolvedColor,
    /// Sorted, pairwise disjoint
    pub regions: Vec<Region>,
}

/// Everything a host needs to draw one highlighting pass.
///
/// A new plan replaces the previous one as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub entries: Vec<PlanEntry>,
}

impl RenderPlan {
    fn from_groups(groups: BTreeMap<ResolvedColor, Vec<Region>>) -> Self {
        let entries = groups
            .into_iter()
            .map(|(color, mut regions)| {
                regions.sort_unstable();
                PlanEntry {
                    scope: color.scope_name(),
                    color,
                    regions,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct color pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Regions painted with the given colors.
    pub fn regions_for(&self, color: ResolvedColor) -> &[Region] {
        self.entries
            .iter()
            .find(|entry| entry.color == color)
            .map(|entry| entry.regions.as_slice())
            .unwrap_or_default()
    }

    /// All painted regions with their colors, sorted by position.
    pub fn spans(&self) -> Vec<(Region, ResolvedColor)> {
        let mut spans: Vec<_> = self
            .entries
            .iter()
            .flat_map(|entry| entry.regions.iter().map(|&region| (region, entry.color)))
            .collect();
        spans.sort_unstable();
        spans
    }
}

/// Runs highlighting passes with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: Configuration,
}

impl Highlighter {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Validates settings for a syntax and builds a highlighter from them.
    pub fn from_settings(settings: &Settings, syntax: Option<&str>) -> CoreResult<Self> {
        Ok(Self::new(settings.resolve(syntax)?))
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Computes the render plan for a set of cursors.
    ///
    /// Cursors may come in any order and may repeat.
    pub fn highlight<S: TextSource>(&self, source: &S, cursors: &[usize]) -> CoreResult<RenderPlan> {
        if !self.config.enabled {
            tracing::debug!("Highlighting disabled");
            return Ok(RenderPlan::default());
        }

        let len = source.len_chars();
        if let Some(&cursor) = cursors.iter().find(|&&cursor| cursor > len) {
            return Err(CoreError::CursorOutOfBounds { cursor, len });
        }

        let cursors = normalize_cursors(cursors);
        let vicinities = expand_cursors_to_regions(&cursors, self.config.scan_radius, len);
        let examined = merge_adjacent_regions(&vicinities, &cursors);
        let lines = current_lines(source, &cursors);

        let mut groups: BTreeMap<ResolvedColor, Vec<Region>> = BTreeMap::new();
        for region in &examined {
            for (extent, color) in self.highlight_region(source, region, &lines)? {
                groups.entry(color).or_default().push(extent);
            }
        }

        let plan = RenderPlan::from_groups(groups);
        tracing::debug!(
            "Highlighted {} region(s) for {} cursor(s) with {} color pair(s)",
            examined.len(),
            cursors.len(),
            plan.len()
        );
        Ok(plan)
    }

    /// Like [`highlight`](Self::highlight), with cursors given as
    /// line/column positions.
    pub fn highlight_positions(
        &self,
        buffer: &TextBuffer,
        positions: &[Position],
    ) -> CoreResult<RenderPlan> {
        let cursors = positions
            .iter()
            .map(|&position| buffer.position_to_char_idx(position))
            .collect::<Result<Vec<_>, _>>()?;
        self.highlight(buffer, &cursors)
    }

    fn highlight_region<S: TextSource>(
        &self,
        source: &S,
        examined: &ExaminedRegion,
        lines: &[Region],
    ) -> CoreResult<Vec<(Region, ResolvedColor)>> {
        let config = &self.config;
        let ExaminedRegion { region, cursors } = examined;

        let brackets = locate_brackets(source, *region, &config.brackets, |scope| {
            scope_allowed(scope, &config.scope_blacklist)
        });
        tracing::trace!("{}: {} bracket(s)", region, brackets.len());

        let per_cursor: Vec<_> = cursors
            .iter()
            .map(|&cursor| index_brackets(&brackets, cursor))
            .collect();
        let indices = merge_bracket_indices(&per_cursor)?;

        let scopes = compute_bracket_scopes(&brackets, &indices);
        tracing::trace!("{}: {} scope(s)", region, scopes.len());

        let spans = color_scopes(&scopes, config, cursors, &config.brackets);
        let disjoint = split_into_disjoint(&spans, lines);
        let layered = prepend_background(disjoint, lines);
        tracing::trace!("{}: {} disjoint span(s)", region, layered.len());

        Ok(layered
            .iter()
            .map(|span| (span.extent, compute_span_color(span, config)))
            .collect())
    }
}
