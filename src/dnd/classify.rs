//! Drag classifier: resolves the raw active/over identifier pair against the
//! current snapshot into entity kinds and a target verdict.
//!
//! This is pure — no logging happens here. Each classification carries at most
//! one [`ClassifyWarning`]; the commit path logs it exactly once, so hover
//! re-classification never spams the console.

use crate::dnd::id::{parse_drag_id, DragId, IdError};
use crate::models::{section_index_of_token, Section};

/// What is being dragged, resolved to current snapshot positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DragKind {
    Section {
        section_ix: usize,
    },
    Field {
        section_ix: usize,
        field_ix: usize,
    },
}

/// What the gesture currently hovers, resolved to snapshot positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OverKind {
    SiblingSection {
        section_ix: usize,
    },
    SiblingField {
        section_ix: usize,
        field_ix: usize,
    },
    /// End-of-list zone of the section at `section_ix`.
    Container {
        section_ix: usize,
    },
    /// Active and over identifiers are equal (no-op gesture).
    SelfTarget,
    /// No target, or an invalid one; commit must no-op.
    None,
}

/// Diagnostic attached to a classification; logged once at commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ClassifyWarning {
    MalformedActive { id: String, error: IdError },
    MalformedOver { id: String, error: IdError },
    /// A field id whose indices no longer exist in the snapshot.
    StalePosition { id: String },
    /// A section/container token no Section owns.
    UnknownToken { token: String },
    /// A field dropped directly on a section header (not its container, not a
    /// sibling field) is an explicitly invalid target.
    FieldOnSectionHeader { id: String },
}

impl std::fmt::Display for ClassifyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyWarning::MalformedActive { id, error } => {
                write!(f, "ignoring drag of `{id}`: {error}")
            }
            ClassifyWarning::MalformedOver { id, error } => {
                write!(f, "ignoring drop on `{id}`: {error}")
            }
            ClassifyWarning::StalePosition { id } => {
                write!(f, "drag id `{id}` points outside the current document")
            }
            ClassifyWarning::UnknownToken { token } => {
                write!(f, "no section owns token `{token}`")
            }
            ClassifyWarning::FieldOnSectionHeader { id } => {
                write!(f, "field dropped on section header `{id}`; use its container")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Classified {
    /// `None` when the active identifier itself cannot be resolved; the whole
    /// gesture is then invalid.
    pub kind: Option<DragKind>,
    pub over: OverKind,
    pub warning: Option<ClassifyWarning>,
}

impl Classified {
    fn invalid(warning: ClassifyWarning) -> Self {
        Self {
            kind: None,
            over: OverKind::None,
            warning: Some(warning),
        }
    }
}

fn resolve_active(active_id: &str, sections: &[Section]) -> Result<DragKind, ClassifyWarning> {
    match parse_drag_id(active_id) {
        Ok(DragId::Field {
            section_ix,
            field_ix,
            ..
        }) => {
            let in_bounds = sections
                .get(section_ix)
                .is_some_and(|s| field_ix < s.fields.len());
            if !in_bounds {
                return Err(ClassifyWarning::StalePosition {
                    id: active_id.to_string(),
                });
            }
            Ok(DragKind::Field {
                section_ix,
                field_ix,
            })
        }
        Ok(DragId::Section { token, .. }) => section_index_of_token(sections, &token)
            .map(|section_ix| DragKind::Section { section_ix })
            .ok_or(ClassifyWarning::UnknownToken { token }),
        // Containers are droppable zones, never drag sources.
        Ok(DragId::Container { .. }) => Err(ClassifyWarning::MalformedActive {
            id: active_id.to_string(),
            error: IdError::Malformed(active_id.to_string()),
        }),
        Err(error) => Err(ClassifyWarning::MalformedActive {
            id: active_id.to_string(),
            error,
        }),
    }
}

/// Classify a gesture's identifier pair against the current snapshot.
pub(crate) fn classify(
    active_id: &str,
    over_id: Option<&str>,
    sections: &[Section],
) -> Classified {
    let kind = match resolve_active(active_id, sections) {
        Ok(kind) => kind,
        Err(warning) => return Classified::invalid(warning),
    };

    let Some(over_id) = over_id else {
        // Dropped outside every target: plain cancellation, not worth a
        // diagnostic.
        return Classified {
            kind: Some(kind),
            over: OverKind::None,
            warning: None,
        };
    };

    // Equal identifiers are a self-drop regardless of shape.
    if over_id == active_id {
        return Classified {
            kind: Some(kind),
            over: OverKind::SelfTarget,
            warning: None,
        };
    }

    let over = match parse_drag_id(over_id) {
        Ok(over) => over,
        Err(error) => {
            return Classified {
                kind: Some(kind),
                over: OverKind::None,
                warning: Some(ClassifyWarning::MalformedOver {
                    id: over_id.to_string(),
                    error,
                }),
            }
        }
    };

    let (over, warning) = match (kind, over) {
        (
            DragKind::Field { .. },
            DragId::Field {
                section_ix,
                field_ix,
                ..
            },
        ) => {
            let in_bounds = sections
                .get(section_ix)
                .is_some_and(|s| field_ix < s.fields.len());
            if in_bounds {
                (
                    OverKind::SiblingField {
                        section_ix,
                        field_ix,
                    },
                    None,
                )
            } else {
                (
                    OverKind::None,
                    Some(ClassifyWarning::StalePosition {
                        id: over_id.to_string(),
                    }),
                )
            }
        }
        (DragKind::Field { .. }, DragId::Container { token, .. }) => {
            match section_index_of_token(sections, &token) {
                Some(section_ix) => (OverKind::Container { section_ix }, None),
                None => (
                    OverKind::None,
                    Some(ClassifyWarning::UnknownToken { token }),
                ),
            }
        }
        // A section header is never a valid field target, resolvable or not.
        (DragKind::Field { .. }, DragId::Section { .. }) => (
            OverKind::None,
            Some(ClassifyWarning::FieldOnSectionHeader {
                id: over_id.to_string(),
            }),
        ),
        (DragKind::Section { .. }, DragId::Section { token, .. }) => {
            match section_index_of_token(sections, &token) {
                Some(section_ix) => (OverKind::SiblingSection { section_ix }, None),
                None => (
                    OverKind::None,
                    Some(ClassifyWarning::UnknownToken { token }),
                ),
            }
        }
        // Section drags only accept sibling sections; fields and containers
        // are silently ignored.
        (DragKind::Section { .. }, DragId::Field { .. } | DragId::Container { .. }) => {
            (OverKind::None, None)
        }
    };

    Classified {
        kind: Some(kind),
        over,
        warning,
    }
}
