//! Drag session state machine.
//!
//! One value object tracks the whole gesture: `Idle` → `Dragging` on start,
//! self-looping on hover updates (each recomputing the drop indicator), then
//! back to `Idle` on commit or cancel. The value lives in a signal owned by
//! the app state — never in ambient mutable globals — so the rendering layer
//! observes every transition.

use crate::dnd::classify::{classify, DragKind, OverKind};
use crate::dnd::id::{parse_drag_id, DragId};
use crate::dnd::{resolve, DropPosition};
use crate::models::{Field, Section};

/// Deep-copied snapshot of the dragged entity, taken at gesture start.
///
/// Rendered as the floating overlay chip; structurally independent of the
/// document, so later edits cannot retroactively change what the user sees
/// mid-drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DragPayload {
    Section(Section),
    Field(Field),
}

impl DragPayload {
    pub fn label(&self) -> &str {
        match self {
            DragPayload::Section(s) => &s.key,
            DragPayload::Field(f) => &f.key,
        }
    }
}

/// Transient hover feedback: which target would receive the drop, and where
/// the dragged entity would land relative to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DropIndicator {
    pub target_id: String,
    pub position: DropPosition,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum DragSession {
    #[default]
    Idle,
    Dragging {
        active_id: String,
        payload: Option<DragPayload>,
        indicator: Option<DropIndicator>,
    },
}

impl DragSession {
    /// Enter `Dragging`, deep-copying the dragged entity for the overlay.
    ///
    /// An unresolvable active id still starts a session (the browser already
    /// owns the gesture); commit will reject it with a diagnostic.
    pub fn begin(active_id: &str, sections: &[Section]) -> Self {
        let payload = match parse_drag_id(active_id) {
            Ok(DragId::Field {
                section_ix,
                field_ix,
                ..
            }) => sections
                .get(section_ix)
                .and_then(|s| s.fields.get(field_ix))
                .cloned()
                .map(DragPayload::Field),
            Ok(DragId::Section { token, .. }) => sections
                .iter()
                .find(|s| s.token == token)
                .cloned()
                .map(DragPayload::Section),
            _ => None,
        };

        DragSession::Dragging {
            active_id: active_id.to_string(),
            payload,
            indicator: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { active_id, .. } => Some(active_id),
        }
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { payload, .. } => payload.as_ref(),
        }
    }

    pub fn indicator(&self) -> Option<&DropIndicator> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { indicator, .. } => indicator.as_ref(),
        }
    }

    /// Hover update: recompute the drop indicator against the current
    /// snapshot. A no-op while `Idle`.
    pub fn hover(&mut self, over_id: Option<&str>, sections: &[Section]) {
        let DragSession::Dragging {
            active_id,
            indicator,
            ..
        } = self
        else {
            return;
        };

        *indicator = over_id.and_then(|over| derive_indicator(active_id, over, sections));
    }

    /// Commit the gesture: classify, resolve, and return the new snapshot
    /// (`None` for any no-op outcome). The session returns to `Idle`
    /// unconditionally, indicator and active id cleared, even when the commit
    /// was invalid.
    pub fn commit(
        &mut self,
        over_id: Option<&str>,
        position: Option<DropPosition>,
        sections: &[Section],
    ) -> Option<Vec<Section>> {
        let result = match &*self {
            DragSession::Idle => None,
            DragSession::Dragging { active_id, .. } => {
                commit_drag(active_id, over_id, position, sections)
            }
        };

        *self = DragSession::Idle;
        result
    }

    /// Cancellation: straight back to `Idle`, no resolver involvement.
    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }
}

/// Live drop-indicator derivation for a hover pair.
///
/// `Inside` marks container targets. For sibling targets the placement
/// compares active vs. over position: dragging a lower index onto a higher
/// one lands after it, and vice versa. Invalid pairings (field over a section
/// header, section over anything but a sibling) produce no indicator.
pub(crate) fn derive_indicator(
    active_id: &str,
    over_id: &str,
    sections: &[Section],
) -> Option<DropIndicator> {
    let classified = classify(active_id, Some(over_id), sections);

    let position = match (classified.kind?, classified.over) {
        (DragKind::Field { .. }, OverKind::Container { .. }) => DropPosition::Inside,
        (
            DragKind::Field {
                section_ix: ap,
                field_ix: ac,
            },
            OverKind::SiblingField {
                section_ix: op,
                field_ix: oc,
            },
        ) => {
            if (ap, ac) == (op, oc) {
                // Same position through the other view's prefix: nothing to
                // indicate.
                return None;
            }
            if (ap, ac) < (op, oc) {
                DropPosition::After
            } else {
                DropPosition::Before
            }
        }
        (
            DragKind::Section { section_ix: ap },
            OverKind::SiblingSection { section_ix: op },
        ) => {
            if ap == op {
                return None;
            }
            if ap < op {
                DropPosition::After
            } else {
                DropPosition::Before
            }
        }
        _ => return None,
    };

    Some(DropIndicator {
        target_id: over_id.to_string(),
        position,
    })
}

/// Pure commit: classifier output mapped onto the resolver.
///
/// Emits at most one warning for an invalid gesture and never leaves the
/// snapshot half-updated: the return is either a fully-resolved new snapshot
/// or `None`.
pub(crate) fn commit_drag(
    active_id: &str,
    over_id: Option<&str>,
    position: Option<DropPosition>,
    sections: &[Section],
) -> Option<Vec<Section>> {
    let classified = classify(active_id, over_id, sections);

    if let Some(warning) = &classified.warning {
        leptos::logging::warn!("{warning}");
    }

    match (classified.kind?, classified.over) {
        (DragKind::Section { section_ix }, OverKind::SiblingSection { section_ix: over_ix }) => {
            Some(resolve::reorder_sections(sections, section_ix, over_ix))
        }
        (
            DragKind::Field {
                section_ix,
                field_ix,
            },
            OverKind::SiblingField {
                section_ix: over_section_ix,
                field_ix: over_field_ix,
            },
        ) => {
            if section_ix == over_section_ix && position.is_none() {
                Some(resolve::reorder_fields(
                    sections,
                    section_ix,
                    field_ix,
                    over_field_ix,
                ))
            } else {
                Some(resolve::move_field_to_sibling(
                    sections,
                    (section_ix, field_ix),
                    (over_section_ix, over_field_ix),
                    position,
                ))
            }
        }
        (
            DragKind::Field {
                section_ix,
                field_ix,
            },
            OverKind::Container {
                section_ix: over_section_ix,
            },
        ) => Some(resolve::move_field_to_end(
            sections,
            (section_ix, field_ix),
            over_section_ix,
            position,
        )),
        // Self-drops, missing targets, and every invalid pairing: no-op.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Section};

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
    fn test_begin_deep_copies_the_dragged_field() {
        let mut sections = snapshot();
        let session = DragSession::begin("0-0", &sections);

        // Mutating the document afterwards must not reach the payload.
        sections[0].fields[0].key = "edited".to_string();

        match session.payload() {
            Some(DragPayload::Field(f)) => assert_eq!(f.key, "child1-1"),
            other => panic!("expected field payload, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_with_unknown_id_has_no_payload() {
        let session = DragSession::begin("ghost", &snapshot());
        assert!(session.is_dragging());
        assert!(session.payload().is_none());
    }

    #[test]
    fn test_hover_derives_inside_for_container() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);
        session.hover(Some("p2-container"), &sections);

        let ind = session.indicator().expect("indicator for container hover");
        assert_eq!(ind.target_id, "p2-container");
        assert_eq!(ind.position, DropPosition::Inside);
    }

    #[test]
    fn test_hover_low_onto_high_indicates_after() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);

        session.hover(Some("0-1"), &sections);
        assert_eq!(
            session.indicator().map(|i| i.position),
            Some(DropPosition::After)
        );

        session.hover(Some("1-0"), &sections);
        assert_eq!(
            session.indicator().map(|i| i.position),
            Some(DropPosition::After)
        );
    }

    #[test]
    fn test_hover_high_onto_low_indicates_before() {
        let sections = snapshot();
        let mut session = DragSession::begin("1-0", &sections);
        session.hover(Some("0-0"), &sections);
        assert_eq!(
            session.indicator().map(|i| i.position),
            Some(DropPosition::Before)
        );
    }

    #[test]
    fn test_hover_section_onto_section() {
        let sections = snapshot();
        let mut session = DragSession::begin("p2", &sections);
        session.hover(Some("p1"), &sections);

        let ind = session.indicator().expect("indicator for section hover");
        assert_eq!(ind.target_id, "p1");
        assert_eq!(ind.position, DropPosition::Before);
    }

    #[test]
    fn test_hover_invalid_target_clears_indicator() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);

        session.hover(Some("0-1"), &sections);
        assert!(session.indicator().is_some());

        // Section header is not a valid field target.
        session.hover(Some("p2"), &sections);
        assert!(session.indicator().is_none());

        session.hover(None, &sections);
        assert!(session.indicator().is_none());
    }

    #[test]
    fn test_commit_clears_session_even_when_invalid() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);
        session.hover(Some("p2"), &sections);

        let result = session.commit(Some("p2"), None, &sections);
        assert!(result.is_none());
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_commit_same_section_reorder() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);

        let next = session
            .commit(Some("0-1"), None, &sections)
            .expect("reorder should produce a snapshot");
        assert_eq!(keys(&next, 0), vec!["child1-2", "child1-1"]);
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_commit_cross_section_sibling_move() {
        let sections = snapshot();
        let next = commit_drag("0-0", Some("1-0"), None, &sections)
            .expect("sibling move should produce a snapshot");
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child1-1", "child2-1"]);
    }

    #[test]
    fn test_commit_container_drop_appends() {
        let sections = snapshot();
        let next = commit_drag("0-0", Some("p2-container"), None, &sections)
            .expect("container drop should produce a snapshot");
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child2-1", "child1-1"]);
    }

    #[test]
    fn test_commit_section_reorder() {
        let sections = snapshot();
        let next = commit_drag("p1", Some("p2"), None, &sections)
            .expect("section reorder should produce a snapshot");

        let order: Vec<&str> = next.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(order, vec!["p2", "p1"]);
        assert_eq!(keys(&next, 0), vec!["child2-1"]);
        assert_eq!(keys(&next, 1), vec!["child1-1", "child1-2"]);
    }

    #[test]
    fn test_commit_self_drop_is_a_noop() {
        let sections = snapshot();
        assert!(commit_drag("0-0", Some("0-0"), None, &sections).is_none());
        assert!(commit_drag("p1", Some("p1"), None, &sections).is_none());
    }

    #[test]
    fn test_commit_without_target_is_a_noop() {
        let sections = snapshot();
        assert!(commit_drag("0-0", None, None, &sections).is_none());
    }

    #[test]
    fn test_commit_sidebar_qualified_insertion() {
        let sections = snapshot();
        let next = commit_drag(
            "sidebar-0-0",
            Some("sidebar-1-0"),
            Some(DropPosition::After),
            &sections,
        )
        .expect("qualified sibling move should produce a snapshot");
        assert_eq!(keys(&next, 1), vec!["child2-1", "child1-1"]);
    }

    #[test]
    fn test_cancel_discards_everything() {
        let sections = snapshot();
        let mut session = DragSession::begin("0-0", &sections);
        session.hover(Some("1-0"), &sections);

        session.cancel();
        assert_eq!(session, DragSession::Idle);
        assert!(session.active_id().is_none());
        assert!(session.indicator().is_none());
    }
}
