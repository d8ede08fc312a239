pub(crate) mod form_view;
pub(crate) mod sidebar;
pub(crate) mod ui;

use crate::dnd::session::DragSession;
use crate::dnd::DropPosition;
use crate::state::AppState;
use wasm_bindgen::JsCast;

use leptos::prelude::*;

/// Start a gesture: stash the id in the transfer payload (required for the
/// browser to run the drag at all) and enter `Dragging`.
pub(crate) fn begin_gesture(state: AppState, ev: &web_sys::DragEvent, active_id: &str) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data("text/plain", active_id);
        dt.set_drop_effect("move");
    }
    state
        .drag
        .set(DragSession::begin(active_id, &state.store.snapshot()));
}

/// Hover update for a drop target; recomputes the live indicator.
pub(crate) fn hover_gesture(state: AppState, target_id: &str) {
    let mut session = state.drag.get_untracked();
    if !session.is_dragging() {
        return;
    }
    session.hover(Some(target_id), &state.store.snapshot());
    state.drag.set(session);
}

/// `dragover` must be cancelled for an element to accept drops.
pub(crate) fn allow_drop(ev: &web_sys::DragEvent) {
    ev.prevent_default();
    if let Some(dt) = ev.data_transfer() {
        dt.set_drop_effect("move");
    }
}

/// Commit the in-flight gesture onto `target_id` and write the result
/// through the store. The session always returns to `Idle`.
pub(crate) fn commit_gesture(state: AppState, target_id: &str, position: Option<DropPosition>) {
    let mut session = state.drag.get_untracked();
    if session.active_id().is_none() {
        return;
    }

    let result = session.commit(Some(target_id), position, &state.store.snapshot());
    state.drag.set(session);

    if let Some(next) = result {
        state.store.replace_sections(next);
    }
}

/// `dragend` fires on the source after drop or abort; either way the session
/// is done.
pub(crate) fn end_gesture(state: AppState) {
    state.drag.update(|s| s.cancel());
}

/// Midpoint test: is the pointer in the lower half of the target row?
/// Decides before/after for position-qualified drops.
pub(crate) fn pointer_in_lower_half(ev: &web_sys::DragEvent) -> bool {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect())
        .map(|rect| {
            let mid = rect.top() + rect.height() / 2.0;
            (ev.client_y() as f64) >= mid
        })
        .unwrap_or(true)
}

/// The indicator position for `target_id`, if the live indicator names it.
pub(crate) fn indicator_position(state: AppState, target_id: &str) -> Option<DropPosition> {
    match state.drag.get().indicator() {
        Some(ind) if ind.target_id == target_id => Some(ind.position),
        _ => None,
    }
}

/// Accent classes rendering an indicator position on its target row.
pub(crate) fn indicator_accent(position: Option<DropPosition>) -> &'static str {
    match position {
        Some(DropPosition::Before) => "border-t-2 border-t-primary",
        Some(DropPosition::After) => "border-b-2 border-b-primary",
        Some(DropPosition::Inside) => "bg-primary/10 ring-1 ring-primary/40",
        None => "",
    }
}
