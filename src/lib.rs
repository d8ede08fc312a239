mod app;
mod components;
mod dnd;
mod models;
mod pages;
mod seed;
mod state;
mod storage;
mod store;
mod util;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::storage::{load_sidebar_collapsed, save_sidebar_collapsed};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_sidebar_pref_roundtrip() {
        save_sidebar_collapsed(true);
        assert!(load_sidebar_collapsed());

        save_sidebar_collapsed(false);
        assert!(!load_sidebar_collapsed());
    }
}

// End-to-end gesture flows over the store, one per documented scenario.
#[cfg(test)]
mod tests {
    use crate::dnd::session::{commit_drag, DragSession};
    use crate::dnd::DropPosition;
    use crate::models::{Field, Section};
    use crate::store::FormStore;

    fn initial() -> Vec<Section> {
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
    fn test_full_gesture_swaps_fields_within_a_section() {
        let store = FormStore::new(initial());

        let mut session = DragSession::begin("0-0", &store.snapshot());
        session.hover(Some("0-1"), &store.snapshot());

        let next = session
            .commit(Some("0-1"), None, &store.snapshot())
            .expect("reorder should resolve");
        store.replace_sections(next);

        let doc = store.snapshot();
        assert_eq!(keys(&doc, 0), vec!["child1-2", "child1-1"]);
        assert_eq!(keys(&doc, 1), vec!["child2-1"]);
        assert_eq!(doc, store.mirror_snapshot());
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_explicit_before_places_field_ahead_of_sibling() {
        let next = commit_drag("0-0", Some("1-0"), Some(DropPosition::Before), &initial())
            .expect("sibling move should resolve");
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child1-1", "child2-1"]);
    }

    #[test]
    fn test_container_drop_appends_across_sections() {
        let next = commit_drag("0-0", Some("p2-container"), None, &initial())
            .expect("container drop should resolve");
        assert_eq!(keys(&next, 0), vec!["child1-2"]);
        assert_eq!(keys(&next, 1), vec!["child2-1", "child1-1"]);
    }

    #[test]
    fn test_section_reorder_leaves_fields_untouched() {
        let before = initial();
        let next = commit_drag("p1", Some("p2"), None, &before).expect("reorder should resolve");

        let order: Vec<&str> = next.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(order, vec!["p2", "p1"]);
        assert_eq!(next[0].fields, before[1].fields);
        assert_eq!(next[1].fields, before[0].fields);
    }

    #[test]
    fn test_drop_outside_any_target_commits_nothing() {
        let store = FormStore::new(initial());
        let before = store.snapshot();

        let mut session = DragSession::begin("0-0", &before);
        session.hover(Some("1-0"), &before);

        assert!(session.commit(None, None, &before).is_none());
        assert_eq!(session, DragSession::Idle);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_sidebar_commit_converges_with_the_form_view() {
        let store = FormStore::new(initial());

        // Same gesture through sidebar-prefixed ids, committed over the
        // mirror, still lands in the one store.
        let next = commit_drag(
            "sidebar-0-0",
            Some("sidebar-1-0"),
            Some(DropPosition::After),
            &store.mirror_snapshot(),
        )
        .expect("sidebar move should resolve");
        store.replace_sections(next);

        let doc = store.snapshot();
        assert_eq!(keys(&doc, 1), vec!["child2-1", "child1-1"]);
        assert_eq!(doc, store.mirror_snapshot());
    }
}
