//! Move resolver: the four pure reordering/move operations.
//!
//! Every operation takes the current snapshot and returns a new one. The
//! input is never mutated; an out-of-range index makes the whole operation a
//! no-op (the input is returned unchanged, cloned). A result that changes the
//! total field count is a contract violation and fails hard — it means a
//! splice bug, not bad user input.

use crate::dnd::DropPosition;
use crate::models::{total_field_count, Section};

fn assert_count_invariant(before: &[Section], after: &[Section]) {
    assert_eq!(
        total_field_count(before),
        total_field_count(after),
        "drag move changed the total field count"
    );
}

/// Reorder sections: remove the section at `from`, reinsert it at `to`.
///
/// Removal happens first, so `to` addresses the post-removal sequence.
/// Identity tokens and field contents ride along untouched.
pub(crate) fn reorder_sections(sections: &[Section], from: usize, to: usize) -> Vec<Section> {
    if from == to || from >= sections.len() || to >= sections.len() {
        return sections.to_vec();
    }

    let mut next = sections.to_vec();
    let moved = next.remove(from);
    next.insert(to.min(next.len()), moved);

    assert_count_invariant(sections, &next);
    next
}

/// Reorder fields within one section, with the same remove-then-insert
/// splice semantics as [`reorder_sections`].
pub(crate) fn reorder_fields(
    sections: &[Section],
    section_ix: usize,
    from: usize,
    to: usize,
) -> Vec<Section> {
    let Some(section) = sections.get(section_ix) else {
        return sections.to_vec();
    };
    if from == to || from >= section.fields.len() || to >= section.fields.len() {
        return sections.to_vec();
    }

    let mut next = sections.to_vec();
    let fields = &mut next[section_ix].fields;
    let moved = fields.remove(from);
    let insert_at = to.min(fields.len());
    fields.insert(insert_at, moved);

    assert_count_invariant(sections, &next);
    next
}

/// Move a field onto a named sibling position, optionally qualified with an
/// explicit before/after placement.
///
/// The insertion index is computed against the target array before the source
/// removal is applied — except when source and target section are the same,
/// where the remove-then-insert ordering of [`reorder_fields`] applies and
/// the index addresses the post-removal array.
pub(crate) fn move_field_to_sibling(
    sections: &[Section],
    source: (usize, usize),
    target: (usize, usize),
    position: Option<DropPosition>,
) -> Vec<Section> {
    let (sp, sc) = source;
    let (tp, tc) = target;

    let source_ok = sections.get(sp).is_some_and(|s| sc < s.fields.len());
    let target_ok = sections.get(tp).is_some_and(|s| tc < s.fields.len());
    if !source_ok || !target_ok {
        return sections.to_vec();
    }

    let offset = usize::from(matches!(position, Some(DropPosition::After)));

    let mut next = sections.to_vec();
    if sp == tp {
        if sc == tc {
            return sections.to_vec();
        }
        let fields = &mut next[sp].fields;
        let moved = fields.remove(sc);
        let insert_at = (tc + offset).min(fields.len());
        fields.insert(insert_at, moved);
    } else {
        // Index against the pre-removal target; removing from a different
        // section cannot shift it.
        let insert_at = (tc + offset).min(next[tp].fields.len());
        let moved = next[sp].fields.remove(sc);
        next[tp].fields.insert(insert_at, moved);
    }

    assert_count_invariant(sections, &next);
    next
}

/// Move a field to a section's end-of-list zone (container drop, no sibling
/// reference). `Before` prepends; `After` or no qualifier appends.
///
/// The append index is the target length before the source-side removal,
/// unless source and target are the same section (then after removal).
pub(crate) fn move_field_to_end(
    sections: &[Section],
    source: (usize, usize),
    target_section: usize,
    position: Option<DropPosition>,
) -> Vec<Section> {
    let (sp, sc) = source;

    let source_ok = sections.get(sp).is_some_and(|s| sc < s.fields.len());
    if !source_ok || target_section >= sections.len() {
        return sections.to_vec();
    }

    let prepend = matches!(position, Some(DropPosition::Before));

    let mut next = sections.to_vec();
    if sp == target_section {
        let fields = &mut next[sp].fields;
        let moved = fields.remove(sc);
        let insert_at = if prepend { 0 } else { fields.len() };
        fields.insert(insert_at, moved);
    } else {
        let insert_at = if prepend { 0 } else { next[target_section].fields.len() };
        let moved = next[sp].fields.remove(sc);
        next[target_section].fields.insert(insert_at, moved);
    }

    assert_count_invariant(sections, &next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    /// `parent1: [child1-1, child1-2]`, `parent2: [child2-1]` — the fixture
    /// most tests below splice.
    fn snapshot() -> Vec<Section> {
        vec![
            Section::new(
                "p1".to_string(),
                "parent1",
                "",
                vec![Field::new("child1-1", ""), Field::new("child1-2", "")],
            ),
            Section::new(
                "p2".to_string(),
                "parent2",
                "",
                vec![Field::new("child2-1", "")],
            ),
        ]
    }

    fn keys(sections: &[Section], ix: usize) -> Vec<&str> {
        sections[ix].fields.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn test_same_section_reorder_swaps_neighbors() {
        let next = reorder_fields(&snapshot(), 0, 0, 1);
        assert_eq!(keys(&next, 0), vec!["child1-2", "child1-1"]);
        assert_eq!(keys(&next, 1), vec!["child2-1"]);
    }

    #[test]
    fn test_move_to_sibling_lands_before_target() {
        let next = move_field_to_sibling(&snapshot(), (0, 0), (1, 0), None);
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child1-1", "child2-1"]);
    }

    #[test]
    fn test_move_to_sibling_after_qualifier() {
        let next = move_field_to_sibling(&snapshot(), (0, 0), (1, 0), Some(DropPosition::After));
        assert_eq!(keys(&next, 1), vec!["child2-1", "child1-1"]);
    }

    #[test]
    fn test_move_to_end_appends() {
        let next = move_field_to_end(&snapshot(), (0, 0), 1, None);
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child2-1", "child1-1"]);
    }

    #[test]
    fn test_move_to_end_before_qualifier_prepends() {
        let next = move_field_to_end(&snapshot(), (0, 1), 1, Some(DropPosition::Before));
        assert_eq!(keys(&next, 1), vec!["child1-2", "child2-1"]);
    }

    #[test]
    fn test_move_to_own_container_sends_field_last() {
        let next = move_field_to_end(&snapshot(), (0, 0), 0, None);
        assert_eq!(keys(&next, 0), vec!["child1-2", "child1-1"]);
    }

    #[test]
    fn test_reorder_sections_keeps_tokens_and_fields() {
        let before = snapshot();
        let next = reorder_sections(&before, 0, 1);

        assert_eq!(next[0].token, "p2");
        assert_eq!(next[1].token, "p1");
        assert_eq!(next[0].fields, before[1].fields);
        assert_eq!(next[1].fields, before[0].fields);
    }

    #[test]
    fn test_reorder_sections_three_way_splice() {
        let mut before = snapshot();
        before.push(Section::new("p3".to_string(), "parent3", "", vec![]));

        // Remove-then-insert: moving index 0 to index 2 places it last.
        let next = reorder_sections(&before, 0, 2);
        let order: Vec<&str> = next.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(order, vec!["p2", "p3", "p1"]);
    }

    #[test]
    fn test_out_of_range_is_a_noop() {
        let before = snapshot();
        assert_eq!(reorder_sections(&before, 0, 9), before);
        assert_eq!(reorder_fields(&before, 0, 0, 9), before);
        assert_eq!(reorder_fields(&before, 9, 0, 1), before);
        assert_eq!(move_field_to_sibling(&before, (0, 5), (1, 0), None), before);
        assert_eq!(move_field_to_sibling(&before, (0, 0), (1, 5), None), before);
        assert_eq!(move_field_to_end(&before, (0, 0), 9, None), before);
    }

    #[test]
    fn test_equal_indices_are_a_noop() {
        let before = snapshot();
        assert_eq!(reorder_sections(&before, 1, 1), before);
        assert_eq!(reorder_fields(&before, 0, 1, 1), before);
        assert_eq!(move_field_to_sibling(&before, (0, 1), (0, 1), None), before);
    }

    #[test]
    fn test_count_invariance_across_operations() {
        let before = snapshot();
        let total = total_field_count(&before);

        for next in [
            reorder_sections(&before, 0, 1),
            reorder_fields(&before, 0, 0, 1),
            move_field_to_sibling(&before, (0, 1), (1, 0), Some(DropPosition::After)),
            move_field_to_end(&before, (0, 0), 1, None),
            move_field_to_end(&before, (1, 0), 0, Some(DropPosition::Before)),
        ] {
            assert_eq!(total_field_count(&next), total);
        }
    }

    #[test]
    fn test_resolver_is_pure_under_recomputed_indices() {
        // Applying the same committed move twice with fresh indices must give
        // the same result each time: no hidden state between calls.
        let first = move_field_to_end(&snapshot(), (0, 0), 1, None);
        let again = move_field_to_end(&first, (0, 0), 1, None);
        assert_eq!(keys(&again, 0), Vec::<&str>::new());
        assert_eq!(keys(&again, 1), vec!["child2-1", "child1-1", "child1-2"]);
    }

    #[test]
    fn test_same_section_sibling_move_with_after_qualifier() {
        let mut before = snapshot();
        before[0].fields.push(Field::new("child1-3", ""));

        // Post-removal ordering: after removing child1-1 the array is
        // [child1-2, child1-3]; "after index 1" lands at the end.
        let next = move_field_to_sibling(&before, (0, 0), (0, 1), Some(DropPosition::After));
        assert_eq!(keys(&next, 0), vec!["child1-2", "child1-3", "child1-1"]);
    }
}
