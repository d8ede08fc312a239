//! Ordered data store: the single mutable resource of the app.
//!
//! The canonical document lives in one signal; the sidebar reads a mirrored
//! deep copy that is rebuilt on every write, so the two views can never
//! disagree after a commit settles and transient render state in one view
//! cannot leak into the other. All mutations — drag commits, inline edits,
//! add/remove — replace whole subsequences; nothing is ever patched in place,
//! so reference-based change detection observes every update.

use crate::models::{deep_copy_sections, Field, Section};
use crate::util::next_section_token;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct FormStore {
    sections: RwSignal<Vec<Section>>,
    mirror: RwSignal<Vec<Section>>,
}

impl FormStore {
    pub fn new(initial: Vec<Section>) -> Self {
        let mirror = RwSignal::new(deep_copy_sections(&initial));
        Self {
            sections: RwSignal::new(initial),
            mirror,
        }
    }

    /// Reactive read of the canonical document (primary form view).
    pub fn sections(&self) -> Vec<Section> {
        self.sections.get()
    }

    /// Reactive read of the sidebar mirror.
    pub fn mirror(&self) -> Vec<Section> {
        self.mirror.get()
    }

    /// Non-reactive snapshot for gesture handlers.
    pub fn snapshot(&self) -> Vec<Section> {
        self.sections.get_untracked()
    }

    /// Non-reactive read of the sidebar mirror.
    pub fn mirror_snapshot(&self) -> Vec<Section> {
        self.mirror.get_untracked()
    }

    pub fn section(&self, section_ix: usize) -> Option<Section> {
        self.sections.get_untracked().get(section_ix).cloned()
    }

    fn write(&self, next: Vec<Section>) {
        self.mirror.set(deep_copy_sections(&next));
        self.sections.set(next);
    }

    /// Replace the whole section order (drag commits, add/remove section).
    pub fn replace_sections(&self, next: Vec<Section>) {
        self.write(next);
    }

    /// Replace one section's fields wholesale. Out-of-range writes are
    /// dropped on the floor rather than panicking mid-gesture.
    pub fn replace_fields(&self, section_ix: usize, fields: Vec<Field>) {
        let mut next = self.snapshot();
        let Some(section) = next.get_mut(section_ix) else {
            return;
        };
        section.fields = fields;
        self.write(next);
    }

    pub fn add_section(&self) {
        let mut next = self.snapshot();
        next.push(Section::new(next_section_token(), "", "", vec![]));
        self.write(next);
    }

    pub fn remove_section(&self, section_ix: usize) {
        let mut next = self.snapshot();
        if section_ix >= next.len() {
            return;
        }
        next.remove(section_ix);
        self.write(next);
    }

    pub fn add_field(&self, section_ix: usize) {
        let Some(section) = self.section(section_ix) else {
            return;
        };
        let mut fields = section.fields;
        fields.push(Field::default());
        self.replace_fields(section_ix, fields);
    }

    pub fn remove_field(&self, section_ix: usize, field_ix: usize) {
        let Some(section) = self.section(section_ix) else {
            return;
        };
        let mut fields = section.fields;
        if field_ix >= fields.len() {
            return;
        }
        fields.remove(field_ix);
        self.replace_fields(section_ix, fields);
    }

    pub fn set_section_key(&self, section_ix: usize, key: &str) {
        let mut next = self.snapshot();
        let Some(section) = next.get_mut(section_ix) else {
            return;
        };
        section.key = key.to_string();
        self.write(next);
    }

    pub fn set_section_value(&self, section_ix: usize, value: &str) {
        let mut next = self.snapshot();
        let Some(section) = next.get_mut(section_ix) else {
            return;
        };
        section.value = value.to_string();
        self.write(next);
    }

    pub fn set_field_key(&self, section_ix: usize, field_ix: usize, key: &str) {
        let mut next = self.snapshot();
        let Some(field) = next
            .get_mut(section_ix)
            .and_then(|s| s.fields.get_mut(field_ix))
        else {
            return;
        };
        field.key = key.to_string();
        self.write(next);
    }

    pub fn set_field_value(&self, section_ix: usize, field_ix: usize, value: &str) {
        let mut next = self.snapshot();
        let Some(field) = next
            .get_mut(section_ix)
            .and_then(|s| s.fields.get_mut(field_ix))
        else {
            return;
        };
        field.value = value.to_string();
        self.write(next);
    }
}
