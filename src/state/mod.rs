use crate::dnd::session::DragSession;
use crate::seed::load_initial_sections;
use crate::storage::load_sidebar_collapsed;
use crate::store::FormStore;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Single source of truth for the document; both views read it.
    pub store: FormStore,

    /// Gesture lifecycle. One session at a time; cleared on every commit or
    /// cancellation.
    pub drag: RwSignal<DragSession>,

    /// Global UI state.
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: FormStore::new(load_initial_sections()),
            drag: RwSignal::new(DragSession::Idle),
            sidebar_collapsed: RwSignal::new(load_sidebar_collapsed()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
