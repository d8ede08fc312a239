//! Sidebar outline: a read-mostly rendering of the mirrored snapshot.
//!
//! Every entity carries a `"sidebar-"` prefixed id, so the classifier can
//! resolve drops from this view onto the same snapshot coordinates as the
//! form view. Field drops here are position-qualified: the pointer's half of
//! the target row decides before/after (the form view splices by index
//! instead).

use crate::components::{
    allow_drop, begin_gesture, commit_gesture, end_gesture, hover_gesture, indicator_accent,
    indicator_position, pointer_in_lower_half,
};
use crate::dnd::id::{sidebar_container_id, sidebar_field_id, sidebar_section_id};
use crate::dnd::DropPosition;
use crate::models::{Field, Section};
use crate::state::AppContext;
use icons::{ChevronDown, ChevronRight};
use leptos::prelude::*;

#[component]
pub fn SidebarOutline() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let store = app_state.0.store;

    // Collapsed outline entries, keyed by identity token so the choice
    // survives reorders.
    let collapsed: RwSignal<Vec<String>> = RwSignal::new(vec![]);

    view! {
        <div class="space-y-1 text-xs">
            {move || {
                let sections = store.mirror();
                if sections.is_empty() {
                    view! { <div class="text-muted-foreground">"Empty form"</div> }.into_any()
                } else {
                    let rows = sections
                        .into_iter()
                        .enumerate()
                        .map(|(section_ix, section)| {
                            view! {
                                <SidebarSection
                                    section_ix=section_ix
                                    section=section
                                    collapsed=collapsed
                                />
                            }
                        })
                        .collect_view();

                    view! { <div class="space-y-0.5">{rows}</div> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SidebarSection(
    section_ix: usize,
    section: Section,
    collapsed: RwSignal<Vec<String>>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;

    let token_sv = StoredValue::new(section.token.clone());
    let row_id_sv = StoredValue::new(sidebar_section_id(&section.token));
    let zone_id_sv = StoredValue::new(sidebar_container_id(&section.token));

    let is_collapsed = move || collapsed.get().iter().any(|t| *t == token_sv.get_value());

    let on_toggle = move |_| {
        collapsed.update(|c| {
            let token = token_sv.get_value();
            if let Some(pos) = c.iter().position(|t| t == &token) {
                c.remove(pos);
            } else {
                c.push(token);
            }
        })
    };

    let row_class = move || {
        let accent = indicator_accent(indicator_position(state, &row_id_sv.get_value()));
        format!(
            "flex items-center gap-1 rounded-md border border-transparent px-1 py-0.5 {accent}"
        )
    };
    let row_hint = move || indicator_position(state, &row_id_sv.get_value()).map(|p| p.to_string());

    let header_label = if section.key.trim().is_empty() {
        "(untitled)".to_string()
    } else {
        section.key.clone()
    };
    let field_count = section.fields.len();
    let fields = section.fields.clone();

    view! {
        <div>
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
                <button
                    class="flex h-4 w-4 items-center justify-center text-muted-foreground hover:text-foreground"
                    on:click=on_toggle
                    title=move || if is_collapsed() { "Expand" } else { "Collapse" }
                >
                    {move || {
                        if is_collapsed() {
                            view! { <ChevronRight class="size-3" /> }.into_any()
                        } else {
                            view! { <ChevronDown class="size-3" /> }.into_any()
                        }
                    }}
                </button>

                <span class="cursor-grab truncate font-medium">{header_label}</span>
                <span class="ml-auto text-muted-foreground">{field_count}</span>
            </div>

            {move || {
                if is_collapsed() {
                    return ().into_view().into_any();
                }

                let rows = fields
                    .iter()
                    .enumerate()
                    .map(|(field_ix, field)| {
                        view! {
                            <SidebarFieldRow
                                section_ix=section_ix
                                field_ix=field_ix
                                field=field.clone()
                            />
                        }
                    })
                    .collect_view();

                let zone_class = move || {
                    let accent =
                        indicator_accent(indicator_position(state, &zone_id_sv.get_value()));
                    format!(
                        "rounded-sm border border-dashed border-border/60 px-1.5 py-0.5 text-[10px] text-muted-foreground/70 {accent}"
                    )
                };
                let zone_hint = move || {
                    indicator_position(state, &zone_id_sv.get_value()).map(|p| p.to_string())
                };

                view! {
                    <div class="ml-2 space-y-0.5 border-l border-border/60 pl-2">
                        {rows}

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
                            "end"
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn SidebarFieldRow(section_ix: usize, field_ix: usize, field: Field) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;

    let row_id_sv = StoredValue::new(sidebar_field_id(section_ix, field_ix));

    let row_class = move || {
        let accent = indicator_accent(indicator_position(state, &row_id_sv.get_value()));
        format!(
            "flex items-center gap-1 rounded-md border border-transparent px-1 py-0.5 {accent}"
        )
    };
    let row_hint = move || indicator_position(state, &row_id_sv.get_value()).map(|p| p.to_string());

    let value_label = field.value.clone();

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
                let position = Some(if pointer_in_lower_half(&ev) {
                    DropPosition::After
                } else {
                    DropPosition::Before
                });
                commit_gesture(state, &row_id_sv.get_value(), position);
            }
            on:dragend=move |_ev: web_sys::DragEvent| end_gesture(state)
        >
            <span class="cursor-grab truncate">{field.key.clone()}</span>
            <span class="ml-auto max-w-[8rem] truncate text-muted-foreground">{value_label}</span>
        </div>
    }
}
