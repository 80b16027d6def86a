//! Segment-aware prop sorting and the rewrite plan it produces.
//!
//! Both surfaces the rules care about (JSX attributes and the object
//! literal handed to `styled()`) lower to the same [`PropEntry`] shape, so
//! one sorter and one diff routine serve both. Spread entries are opaque:
//! they never move, and nothing is reordered across them, because a spread's
//! evaluation order is observable.

use std::cmp::Ordering;

use oxc_span::Span;

use crate::diagnostic::TextEdit;
use crate::priority::{classify, PriorityConfig, CLASS_OTHER};

/// One attribute-like entry in source order.
///
/// `Named` entries carry the prop name and the span of the whole
/// attribute/property; `Spread` entries (and object members without a static
/// name, e.g. computed keys) only carry their span and act as immovable
/// barriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropEntry<'a> {
    Named { name: &'a str, span: Span },
    Spread { span: Span },
}

impl<'a> PropEntry<'a> {
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            PropEntry::Named { span, .. } | PropEntry::Spread { span } => *span,
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self {
            PropEntry::Named { name, .. } => Some(name),
            PropEntry::Spread { .. } => None,
        }
    }
}

/// Compare two prop names under the configured priorities.
///
/// Class decides first. Within the "other" class the names themselves break
/// the tie alphabetically; within a known class the table rank does, which
/// deliberately is NOT alphabetical order. The trailing name comparison only
/// exists so the order stays total if one name ever appears twice.
pub fn compare_names(a: &str, b: &str, config: &PriorityConfig) -> Ordering {
    let pa = classify(a, config);
    let pb = classify(b, config);

    if pa.class != pb.class {
        return pa.class.cmp(&pb.class);
    }

    if pa.class == CLASS_OTHER {
        return a.cmp(b);
    }

    match (pa.rank, pb.rank) {
        (Some(ra), Some(rb)) => ra.cmp(&rb).then_with(|| a.cmp(b)),
        // Unreachable for table/first/last classes, but keep the order total
        _ => a.cmp(b),
    }
}

/// Sort a full entry sequence, leaving spreads fixed in place.
///
/// Each maximal run of consecutive named entries is sorted independently;
/// the output is always a permutation of the input.
pub fn sort_entries<'a>(entries: &[PropEntry<'a>], config: &PriorityConfig) -> Vec<PropEntry<'a>> {
    let mut sorted = Vec::with_capacity(entries.len());
    let mut run: Vec<PropEntry<'a>> = Vec::new();

    for entry in entries {
        match entry {
            PropEntry::Named { .. } => run.push(*entry),
            PropEntry::Spread { .. } => {
                flush_run(&mut run, &mut sorted, config);
                sorted.push(*entry);
            }
        }
    }
    flush_run(&mut run, &mut sorted, config);

    sorted
}

fn flush_run<'a>(
    run: &mut Vec<PropEntry<'a>>,
    sorted: &mut Vec<PropEntry<'a>>,
    config: &PriorityConfig,
) {
    if run.is_empty() {
        return;
    }
    run.sort_by(|a, b| match (a.name(), b.name()) {
        (Some(a), Some(b)) => compare_names(a, b, config),
        _ => Ordering::Equal,
    });
    sorted.append(run);
}

/// Index of the first position where the sorted sequence disagrees with the
/// original, or `None` when the list is already in canonical order.
pub fn first_mismatch(original: &[PropEntry], sorted: &[PropEntry]) -> Option<usize> {
    debug_assert_eq!(original.len(), sorted.len());
    original
        .iter()
        .zip(sorted)
        .position(|(a, b)| a.name() != b.name())
}

/// The full rewrite plan: one replacement per position, substituting the
/// verbatim source text of `sorted[i]` at `original[i]`'s span.
///
/// Every position gets an edit, not just mismatched ones, so the applied
/// result is exactly the sorted rendering. Edits are returned last-position
/// first; applying them in that order keeps every remaining span valid.
pub fn reorder_edits(original: &[PropEntry], sorted: &[PropEntry], source: &str) -> Vec<TextEdit> {
    original
        .iter()
        .zip(sorted)
        .rev()
        .map(|(orig, new)| {
            let span = new.span();
            TextEdit::replace(orig.span(), &source[span.start as usize..span.end as usize])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> PropEntry<'_> {
        PropEntry::Named {
            name,
            span: Span::new(0, 0),
        }
    }

    fn spread() -> PropEntry<'static> {
        PropEntry::Spread {
            span: Span::new(0, 0),
        }
    }

    fn names<'a>(entries: &[PropEntry<'a>]) -> Vec<Option<&'a str>> {
        entries.iter().map(PropEntry::name).collect()
    }

    fn sort_names<'a>(input: &[PropEntry<'a>]) -> Vec<Option<&'a str>> {
        names(&sort_entries(input, &PriorityConfig::default()))
    }

    #[test]
    fn test_sort_without_spread() {
        let input = [named("px"), named("m"), named("key"), named("fontSize")];
        assert_eq!(
            sort_names(&input),
            vec![Some("key"), Some("m"), Some("px"), Some("fontSize")]
        );
    }

    #[test]
    fn test_spread_splits_runs() {
        // py may not cross the spread even though it belongs before fontSize's
        // group neighbours in the first run
        let input = [
            named("px"),
            named("m"),
            spread(),
            named("fontSize"),
            named("py"),
        ];
        assert_eq!(
            sort_names(&input),
            vec![Some("m"), Some("px"), None, Some("py"), Some("fontSize")]
        );
    }

    #[test]
    fn test_spread_positions_are_fixed() {
        let input = [spread(), named("m"), spread(), spread(), named("as")];
        let sorted = sort_entries(&input, &PriorityConfig::default());
        for (i, entry) in input.iter().enumerate() {
            if entry.name().is_none() {
                assert!(sorted[i].name().is_none(), "spread moved from index {i}");
            }
        }
    }

    #[test]
    fn test_sorted_is_permutation() {
        let input = [
            named("zzz"),
            named("aaa"),
            spread(),
            named("m"),
            named("key"),
        ];
        let sorted = sort_entries(&input, &PriorityConfig::default());
        let mut before: Vec<_> = names(&input);
        let mut after: Vec<_> = names(&sorted);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_idempotent_on_sorted_input() {
        let input = [named("key"), named("m"), spread(), named("fontSize")];
        let once = sort_entries(&input, &PriorityConfig::default());
        let twice = sort_entries(&once, &PriorityConfig::default());
        assert_eq!(names(&once), names(&twice));
        assert_eq!(first_mismatch(&once, &twice), None);
    }

    #[test]
    fn test_other_props_alphabetical() {
        let input = [named("data-weird-prop"), named("aaaa"), named("data-index")];
        assert_eq!(
            sort_names(&input),
            vec![Some("aaaa"), Some("data-index"), Some("data-weird-prop")]
        );
    }

    #[test]
    fn test_same_group_uses_table_order_not_alphabetical() {
        // Alphabetically userSelect < whiteSpace, but the table lists
        // whiteSpace first; the table is the axis that counts.
        let input = [named("userSelect"), named("whiteSpace")];
        assert_eq!(
            sort_names(&input),
            vec![Some("whiteSpace"), Some("userSelect")]
        );
    }

    #[test]
    fn test_table_order_where_it_coincides_with_alphabetical() {
        let input = [named("visibility"), named("transformOrigin"), named("transform")];
        assert_eq!(
            sort_names(&input),
            vec![Some("transform"), Some("transformOrigin"), Some("visibility")]
        );
    }

    #[test]
    fn test_first_mismatch_reports_earliest_position() {
        let original = [named("key"), named("px"), named("m")];
        let sorted = sort_entries(&original, &PriorityConfig::default());
        assert_eq!(first_mismatch(&original, &sorted), Some(1));
    }

    #[test]
    fn test_reorder_edits_cover_every_position_in_reverse() {
        let source = "a b c";
        let original = [
            PropEntry::Named {
                name: "a",
                span: Span::new(0, 1),
            },
            PropEntry::Named {
                name: "b",
                span: Span::new(2, 3),
            },
            PropEntry::Named {
                name: "c",
                span: Span::new(4, 5),
            },
        ];
        let sorted = [original[2], original[0], original[1]];
        let edits = reorder_edits(&original, &sorted, source);
        assert_eq!(edits.len(), 3);
        // Last position first
        assert_eq!(edits[0].start, 4);
        assert_eq!(edits[0].new_text, "b");
        assert_eq!(edits[2].start, 0);
        assert_eq!(edits[2].new_text, "c");
    }
}
