pub(crate) mod classify;
pub(crate) mod id;
pub(crate) mod resolve;
pub(crate) mod session;

/// Relative placement for a drop: shown by the hover indicator and accepted
/// by the resolver as an explicit insertion qualifier.
///
/// `Inside` only ever names a section container (end-of-list zone).
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum DropPosition {
    Before,
    After,
    Inside,
}
