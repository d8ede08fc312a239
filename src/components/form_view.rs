//! Primary form view: editable section cards with draggable field rows.
//!
//! Ids are recomputed from current positions on every render — field rows are
//! positional (`"<sectionIndex>-<fieldIndex>"`), section headers carry their
//! identity token, and each section exposes an end-of-list drop zone
//! (`"<token>-container"`).

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, Input};
use crate::components::{
    allow_drop, begin_gesture, commit_gesture, end_gesture, hover_gesture, indicator_accent,
    indicator_position,
};
use crate::dnd::id::{container_id, field_id};
use crate::models::{Field, Section};
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;

fn grip() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="14"
            height="14"
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <circle cx="9" cy="6" r="1.5" />
            <circle cx="15" cy="6" r="1.5" />
            <circle cx="9" cy="12" r="1.5" />
            <circle cx="15" cy="12" r="1.5" />
            <circle cx="9" cy="18" r="1.5" />
            <circle cx="15" cy="18" r="1.5" />
        </svg>
    }
}

#[component]
pub fn FormView() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;
    let store = state.store;

    view! {
        <div class="space-y-3">
            {move || {
                let sections = store.sections();
                if sections.is_empty() {
                    view! {
                        <div class="rounded-md border border-dashed px-4 py-6 text-center text-xs text-muted-foreground">
                            "No sections yet. Add one to get started."
                        </div>
                    }
                    .into_any()
                } else {
                    let cards = sections
                        .into_iter()
                        .enumerate()
                        .map(|(section_ix, section)| {
                            view! { <SectionCard section_ix=section_ix section=section /> }
                        })
                        .collect_view();

                    view! { <div class="space-y-3">{cards}</div> }.into_any()
                }
            }}

            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                on:click=move |_| store.add_section()
            >
                "Add section"
            </Button>
        </div>
    }
}

#[component]
fn SectionCard(section_ix: usize, section: Section) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;
    let store = state.store;

    let header_id_sv = StoredValue::new(section.token.clone());
    let zone_id_sv = StoredValue::new(container_id(&section.token));

    let header_class = move || {
        let accent = indicator_accent(indicator_position(state, &header_id_sv.get_value()));
        format!("flex items-center gap-2 rounded-md border border-transparent px-3 py-1 {accent}")
    };
    let header_hint =
        move || indicator_position(state, &header_id_sv.get_value()).map(|p| p.to_string());

    let zone_class = move || {
        let accent = indicator_accent(indicator_position(state, &zone_id_sv.get_value()));
        format!(
            "rounded-md border border-dashed px-2 py-1.5 text-xs text-muted-foreground {accent}"
        )
    };
    let zone_hint =
        move || indicator_position(state, &zone_id_sv.get_value()).map(|p| p.to_string());

    let zone_label = if section.fields.is_empty() {
        "Drop fields here"
    } else {
        "Drop here to add to the end"
    };

    let field_rows = section
        .fields
        .iter()
        .enumerate()
        .map(|(field_ix, field)| {
            view! { <FieldRow section_ix=section_ix field_ix=field_ix field=field.clone() /> }
        })
        .collect_view();

    view! {
        <Card class="gap-2 py-3">
            <div
                class=header_class
                data-drop=header_hint
                draggable="true"
                on:dragstart=move |ev: web_sys::DragEvent| {
                    begin_gesture(state, &ev, &header_id_sv.get_value());
                }
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    hover_gesture(state, &header_id_sv.get_value());
                }
                on:dragover=move |ev: web_sys::DragEvent| allow_drop(&ev)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    commit_gesture(state, &header_id_sv.get_value(), None);
                }
                on:dragend=move |_ev: web_sys::DragEvent| end_gesture(state)
            >
                <span class="cursor-grab text-muted-foreground" title="Drag to reorder sections">
                    {grip()}
                </span>

                <Input
                    class="h-7 text-sm font-medium"
                    placeholder="section key"
                    value=section.key.clone()
                    on_commit=Callback::new(move |v: String| store.set_section_key(section_ix, &v))
                />
                <Input
                    class="h-7 text-sm"
                    placeholder="section value"
                    value=section.value.clone()
                    on_commit=Callback::new(move |v: String| store.set_section_value(section_ix, &v))
                />

                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:title="Remove section"
                    on:click=move |_| store.remove_section(section_ix)
                >
                    <X class="size-3.5" />
                </Button>
            </div>

            <CardContent class="px-3">
                <div class="space-y-1">
                    {field_rows}

                    <div
                        class=zone_class
                        data-drop=zone_hint
                        on:dragenter=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            hover_gesture(state, &zone_id_sv.get_value());
                        }
                        on:dragover=move |ev: web_sys::DragEvent| allow_drop(&ev)
                        on:drop=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            commit_gesture(state, &zone_id_sv.get_value(), None);
                        }
                    >
                        {zone_label}
                    </div>
                </div>

                <div class="mt-2">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=move |_| store.add_field(section_ix)
                    >
                        "Add field"
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn FieldRow(section_ix: usize, field_ix: usize, field: Field) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;
    let store = state.store;

    let row_id_sv = StoredValue::new(field_id(section_ix, field_ix));

    let row_class = move || {
        let accent = indicator_accent(indicator_position(state, &row_id_sv.get_value()));
        format!("flex items-center gap-2 rounded-md border border-transparent px-1 py-0.5 {accent}")
    };
    let row_hint = move || indicator_position(state, &row_id_sv.get_value()).map(|p| p.to_string());

    view! {
        <div
            class=row_class
            data-drop=row_hint
            draggable="true"
            on:dragstart=move |ev: web_sys::DragEvent| {
                begin_gesture(state, &ev, &row_id_sv.get_value());
            }
            on:dragenter=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                hover_gesture(state, &row_id_sv.get_value());
            }
            on:dragover=move |ev: web_sys::DragEvent| allow_drop(&ev)
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                commit_gesture(state, &row_id_sv.get_value(), None);
            }
            on:dragend=move |_ev: web_sys::DragEvent| end_gesture(state)
        >
            <span class="cursor-grab text-muted-foreground/70">{grip()}</span>

            <Input
                class="h-7 text-sm"
                placeholder="key"
                value=field.key.clone()
                on_commit=Callback::new(move |v: String| {
                    store.set_field_key(section_ix, field_ix, &v)
                })
            />
            <Input
                class="h-7 text-sm"
                placeholder="value"
                value=field.value.clone()
                on_commit=Callback::new(move |v: String| {
                    store.set_field_value(section_ix, field_ix, &v)
                })
            />

            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:title="Remove field"
                on:click=move |_| store.remove_field(section_ix, field_ix)
            >
                <X class="size-3.5" />
            </Button>
        </div>
    }
}
