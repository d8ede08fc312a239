//! localStorage helpers for UI preferences.
//!
//! Only presentation prefs live here; the document itself is session-local
//! and never persisted.

pub(crate) const SIDEBAR_COLLAPSED_KEY: &str = "nestform_sidebar_collapsed";

pub(crate) fn load_sidebar_collapsed() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(SIDEBAR_COLLAPSED_KEY).ok().flatten())
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

pub(crate) fn save_sidebar_collapsed(collapsed: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SIDEBAR_COLLAPSED_KEY, if collapsed { "1" } else { "0" });
    }
}
