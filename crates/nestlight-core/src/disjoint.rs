//! Splitting overlapping spans into disjoint ones.
//!
//! ## Learning: BinaryHeap as a sweep line
//!
//! `std::collections::BinaryHeap` is a max-heap. Wrapping entries in
//! `std::cmp::Reverse` turns it into a min-heap, so `pop()` always yields
//! the leftmost fragment. `peek_mut()` hands out a guard that re-sifts the
//! entry when dropped, which lets us shrink the runner-up in place.

use std::cmp::{Ordering, Reverse};
use std::collections::binary_heap::{BinaryHeap, PeekMut};

use nestlight_buffer::Region;

use crate::colorize::ColorableSpan;

/// A piece of an input span, or a line boundary marker.
#[derive(Debug)]
struct Fragment {
    extent: Region,
    /// Insertion order; breaks ties between equal extents
    seq: usize,
    /// Index of the span the colors come from; `None` for boundaries
    source: Option<usize>,
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fragment {}

impl PartialOrd for Fragment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fragment {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.extent.begin, self.extent.end, self.seq).cmp(&(
            other.extent.begin,
            other.extent.end,
            other.seq,
        ))
    }
}

/// Splits spans into a sorted list of pairwise disjoint spans.
///
/// Where spans overlap, the one starting later wins; among spans starting
/// together, the shorter one wins. Output spans never cross the begin or
/// end of any of `lines`, so each one can later be attributed to a single
/// line.
pub fn split_into_disjoint(spans: &[ColorableSpan], lines: &[Region]) -> Vec<ColorableSpan> {
    if spans.is_empty() {
        return Vec::new();
    }

    let boundaries = lines.iter().flat_map(|line| [line.begin, line.end]);
    let mut heap: BinaryHeap<Reverse<Fragment>> = spans
        .iter()
        .enumerate()
        .map(|(i, span)| (span.extent, Some(i)))
        .chain(boundaries.map(|point| (Region::point(point), None)))
        .enumerate()
        .map(|(seq, (extent, source))| Reverse(Fragment { extent, seq, source }))
        .collect();

    let mut result = Vec::with_capacity(spans.len());
    let mut emit = |extent: Region, source: Option<usize>| {
        if let Some(i) = source {
            result.push(spans[i].with_extent(extent));
        }
    };

    while let Some(Reverse(leftmost)) = heap.pop() {
        // Invariant: `leftmost` is disjoint from everything already emitted.
        let Some(mut next) = heap.peek_mut() else {
            emit(leftmost.extent, leftmost.source);
            break;
        };
        let following = &mut next.0;

        if following.extent.begin >= leftmost.extent.end {
            drop(next);
            emit(leftmost.extent, leftmost.source);
        } else if following.extent.begin == leftmost.extent.begin {
            // The heap order puts the shorter span first.
            let rest = Region::new(leftmost.extent.end, following.extent.end);
            if rest.is_empty() {
                PeekMut::pop(next);
            } else {
                following.extent = rest;
                drop(next);
            }
            heap.push(Reverse(leftmost));
        } else {
            let head = Region::new(leftmost.extent.begin, following.extent.begin);
            let tail = following.extent.end;
            drop(next);

            if tail < leftmost.extent.end {
                heap.push(Reverse(Fragment {
                    extent: Region::new(tail, leftmost.extent.end),
                    ..leftmost
                }));
            }
            emit(head, leftmost.source);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorize::Layer;
    use crate::scope::Classification;
    use proptest::prelude::*;

    fn span(begin: usize, end: usize, kind: Classification) -> ColorableSpan {
        ColorableSpan::new(Region::new(begin, end), kind, vec![])
    }

    fn extents(spans: &[ColorableSpan]) -> Vec<(usize, usize, Classification)> {
        spans
            .iter()
            .map(|s| (s.extent.begin, s.extent.end, s.foreground))
            .collect()
    }

    #[test]
    fn test_nested_spans() {
        use Classification::*;
        let spans = vec![span(0, 9, Secondary(1)), span(3, 6, Primary)];
        let result = split_into_disjoint(&spans, &[Region::new(0, 9)]);

        assert_eq!(
            extents(&result),
            vec![(0, 3, Secondary(1)), (3, 6, Primary), (6, 9, Secondary(1))]
        );
    }

    #[test]
    fn test_same_begin_shorter_wins() {
        use Classification::*;
        let spans = vec![span(0, 9, Secondary(1)), span(0, 1, Offside(1))];
        let result = split_into_disjoint(&spans, &[]);

        assert_eq!(extents(&result), vec![(0, 1, Offside(1)), (1, 9, Secondary(1))]);
    }

    #[test]
    fn test_crossing_spans() {
        use Classification::*;
        let spans = vec![span(0, 6, Primary), span(4, 10, Adjacent)];
        let result = split_into_disjoint(&spans, &[]);

        assert_eq!(extents(&result), vec![(0, 4, Primary), (4, 10, Adjacent)]);
    }

    #[test]
    fn test_split_at_line_boundaries() {
        use Classification::*;
        let spans = vec![span(0, 20, Primary)];
        let lines = [Region::new(5, 9), Region::new(12, 15)];
        let result = split_into_disjoint(&spans, &lines);

        assert_eq!(
            extents(&result),
            vec![
                (0, 5, Primary),
                (5, 9, Primary),
                (9, 12, Primary),
                (12, 15, Primary),
                (15, 20, Primary),
            ]
        );
    }

    #[test]
    fn test_colors_follow_fragments() {
        let background = vec![Layer::Scope(Classification::Secondary(1))];
        let spans = vec![ColorableSpan::new(
            Region::new(2, 8),
            Classification::Primary,
            background.clone(),
        )];
        let result = split_into_disjoint(&spans, &[Region::new(0, 4)]);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.background == background));
    }

    #[test]
    fn test_empty_input() {
        assert!(split_into_disjoint(&[], &[Region::new(0, 4)]).is_empty());
    }

    fn kind_strategy() -> impl Strategy<Value = Classification> {
        prop_oneof![
            Just(Classification::Primary),
            (1u32..4).prop_map(Classification::Secondary),
            (1u32..4).prop_map(Classification::Offside),
            Just(Classification::Adjacent),
        ]
    }

    fn spans_strategy() -> impl Strategy<Value = Vec<ColorableSpan>> {
        prop::collection::vec((0usize..40, 1usize..15, kind_strategy()), 0..10).prop_map(|raw| {
            raw.into_iter()
                .map(|(begin, len, kind)| span(begin, begin + len, kind))
                .collect()
        })
    }

    fn lines_strategy() -> impl Strategy<Value = Vec<Region>> {
        prop::collection::btree_set(0usize..60, 0..8).prop_map(|points| {
            let points: Vec<_> = points.into_iter().collect();
            points
                .chunks_exact(2)
                .map(|pair| Region::new(pair[0], pair[1]))
                .collect()
        })
    }

    fn covered(spans: &[ColorableSpan]) -> std::collections::BTreeSet<usize> {
        spans.iter().flat_map(|s| s.extent.as_range()).collect()
    }

    proptest! {
        #[test]
        fn prop_output_is_sorted_and_disjoint(spans in spans_strategy(), lines in lines_strategy()) {
            let result = split_into_disjoint(&spans, &lines);
            for pair in result.windows(2) {
                prop_assert!(pair[0].extent.end <= pair[1].extent.begin, "{:?}", pair);
            }
            for span in &result {
                prop_assert!(!span.extent.is_empty());
            }
        }

        #[test]
        fn prop_union_is_preserved(spans in spans_strategy(), lines in lines_strategy()) {
            let result = split_into_disjoint(&spans, &lines);
            prop_assert_eq!(covered(&result), covered(&spans));
        }

        #[test]
        fn prop_no_span_crosses_a_line_boundary(spans in spans_strategy(), lines in lines_strategy()) {
            let result = split_into_disjoint(&spans, &lines);
            for point in lines.iter().flat_map(|l| [l.begin, l.end]) {
                for span in &result {
                    prop_assert!(!(span.extent.begin < point && point < span.extent.end));
                }
            }
        }

        #[test]
        fn prop_split_is_idempotent(spans in spans_strategy(), lines in lines_strategy()) {
            let once = split_into_disjoint(&spans, &lines);
            let twice = split_into_disjoint(&once, &lines);
            prop_assert_eq!(once, twice);
        }
    }
}
