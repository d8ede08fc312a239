//! Drag identifier codec.
//!
//! Every draggable/droppable entity is named by a compact string id:
//!
//! - field (primary view):    `"<sectionIndex>-<fieldIndex>"`, both numeric
//! - field (sidebar):         `"sidebar-<sectionIndex>-<fieldIndex>"`
//! - section (primary view):  the section's identity token, verbatim
//! - section (sidebar):       `"sidebar-<token>"`
//! - container:               `"<token>-container"`, with or without the
//!   `"sidebar-"` prefix
//!
//! Decoding is centralized here so the container-vs-section ambiguity is
//! settled in exactly one place: the `-container` suffix check runs BEFORE
//! the loose section-token fallback, because a container id also matches the
//! token pattern.

const SIDEBAR_PREFIX: &str = "sidebar-";
const CONTAINER_SUFFIX: &str = "-container";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DragId {
    /// Positional field id, valid only within the current gesture.
    Field {
        section_ix: usize,
        field_ix: usize,
        sidebar: bool,
    },
    /// End-of-list drop zone of the section owning `token`.
    Container { token: String, sidebar: bool },
    /// A section named by its identity token.
    Section { token: String, sidebar: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum IdError {
    /// Empty or whitespace-only identifier.
    Empty,
    /// Pair-shaped id (`"<digits>-<something>"`) whose segments do not form a
    /// valid index pair.
    InvalidIndexPair(String),
    /// Structurally broken id (e.g. a bare `"sidebar-"` or `"-container"`).
    Malformed(String),
}

impl std::fmt::Display for IdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdError::Empty => write!(f, "empty drag identifier"),
            IdError::InvalidIndexPair(id) => {
                write!(f, "invalid position segment in `{id}`")
            }
            IdError::Malformed(id) => write!(f, "malformed drag identifier `{id}`"),
        }
    }
}

fn strip_sidebar(s: &str) -> (bool, &str) {
    match s.strip_prefix(SIDEBAR_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Classify an arbitrary identifier into exactly one [`DragId`] shape.
pub(crate) fn parse_drag_id(raw: &str) -> Result<DragId, IdError> {
    if raw.trim().is_empty() {
        return Err(IdError::Empty);
    }

    // Container suffix first: `"<token>-container"` also matches the loose
    // section-token fallback below.
    if let Some(rest) = raw.strip_suffix(CONTAINER_SUFFIX) {
        let (sidebar, token) = strip_sidebar(rest);
        if token.is_empty() {
            return Err(IdError::Malformed(raw.to_string()));
        }
        return Ok(DragId::Container {
            token: token.to_string(),
            sidebar,
        });
    }

    let (sidebar, body) = strip_sidebar(raw);
    if body.is_empty() {
        return Err(IdError::Malformed(raw.to_string()));
    }

    // Positional pair: exactly two segments, both numeric. A leading numeric
    // segment commits the id to the pair shape; the second segment must then
    // also parse, or the whole id is rejected.
    if let Some((first, second)) = body.split_once('-') {
        if is_digits(first) {
            let parsed = first.parse::<usize>().ok().zip(if is_digits(second) {
                second.parse::<usize>().ok()
            } else {
                None
            });
            let Some((section_ix, field_ix)) = parsed else {
                return Err(IdError::InvalidIndexPair(raw.to_string()));
            };
            return Ok(DragId::Field {
                section_ix,
                field_ix,
                sidebar,
            });
        }
        // First segment is not numeric: fall through to the token case
        // (tokens are opaque and may in principle contain dashes).
    }

    Ok(DragId::Section {
        token: body.to_string(),
        sidebar,
    })
}

pub(crate) fn field_id(section_ix: usize, field_ix: usize) -> String {
    format!("{section_ix}-{field_ix}")
}

pub(crate) fn sidebar_field_id(section_ix: usize, field_ix: usize) -> String {
    format!("{SIDEBAR_PREFIX}{section_ix}-{field_ix}")
}

pub(crate) fn container_id(token: &str) -> String {
    format!("{token}{CONTAINER_SUFFIX}")
}

pub(crate) fn sidebar_container_id(token: &str) -> String {
    format!("{SIDEBAR_PREFIX}{token}{CONTAINER_SUFFIX}")
}

pub(crate) fn sidebar_section_id(token: &str) -> String {
    format!("{SIDEBAR_PREFIX}{token}")
}
