use crate::components::form_view::FormView;
use crate::components::sidebar::SidebarOutline;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Separator, SeparatorOrientation,
};
use crate::state::AppContext;
use crate::storage::save_sidebar_collapsed;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen::JsCast;

#[component]
pub fn EditorPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;
    let sidebar_collapsed = state.sidebar_collapsed;
    let drag = state.drag;

    let persist_sidebar = move || save_sidebar_collapsed(sidebar_collapsed.get_untracked());

    let on_toggle_sidebar = move |_| {
        sidebar_collapsed.update(|v| *v = !*v);
        persist_sidebar();
    };

    // Keyboard shortcuts:
    // - Cmd/Ctrl+B: toggle sidebar
    // - Esc: cancel an in-flight drag
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let is_meta = ev.meta_key() || ev.ctrl_key();
        let key = ev.key().to_lowercase();

        // Avoid hijacking shortcuts while typing in inputs.
        let target_tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.tag_name().to_lowercase());

        if let Some(tag) = target_tag {
            if (tag == "input" || tag == "textarea") && key != "escape" {
                return;
            }
        }

        if is_meta && key == "b" {
            ev.prevent_default();
            sidebar_collapsed.update(|v| *v = !*v);
            persist_sidebar();
            return;
        }

        if key == "escape" && drag.get_untracked().is_dragging() {
            drag.update(|s| s.cancel());
        }
    });

    let sidebar_width_class = move || {
        if sidebar_collapsed.get() {
            "w-12"
        } else {
            "w-64"
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex min-h-screen w-full max-w-5xl gap-4 px-4 py-6">
                <aside class=move || format!("{} shrink-0", sidebar_width_class())>
                    <div class="sticky top-6 space-y-3">
                        <div class="flex items-center justify-between">
                            <a href="/" class="text-sm font-medium text-foreground">
                                <Show when=move || !sidebar_collapsed.get() fallback=|| view! { "N" }>
                                    "Nestform"
                                </Show>
                            </a>

                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                on:click=on_toggle_sidebar
                                attr:title="Toggle sidebar"
                                class="h-8 w-8"
                            >
                                <span class="text-xs text-muted-foreground">
                                    {move || if sidebar_collapsed.get() { ">" } else { "<" }}
                                </span>
                            </Button>
                        </div>

                        <Show when=move || !sidebar_collapsed.get() fallback=|| ().into_view()>
                            <Card class="gap-2 py-3">
                                <CardHeader class="px-3">
                                    <CardTitle class="text-xs">"Outline"</CardTitle>
                                    <CardDescription class="text-[10px]">
                                        "Mirrors the form; drag here too."
                                    </CardDescription>
                                </CardHeader>
                                <CardContent class="px-3">
                                    <SidebarOutline />
                                </CardContent>
                            </Card>
                        </Show>
                    </div>
                </aside>

                <Separator orientation=SeparatorOrientation::Vertical class="min-h-full" />

                <main class="min-w-0 flex-1">
                    <div class="mb-4 space-y-1">
                        <h1 class="text-xl font-semibold">"Nestform"</h1>
                        <p class="text-xs text-muted-foreground">
                            "Drag sections to reorder them; drag fields within or across sections. The outline mirrors every change."
                        </p>
                    </div>

                    <FormView />
                </main>
            </div>

            <DragOverlay />
        </div>
    }
}

/// Floating chip naming the dragged entity, rendered from the session's
/// deep-copied payload.
#[component]
fn DragOverlay() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let drag = app_state.0.drag;

    view! {
        {move || {
            let session = drag.get();
            let label = session.payload().map(|p| {
                if p.label().trim().is_empty() {
                    "(unnamed)".to_string()
                } else {
                    p.label().to_string()
                }
            });

            label
                .map(|label| {
                    view! {
                        <div class="pointer-events-none fixed bottom-4 left-1/2 -translate-x-1/2 rounded-md border bg-card px-3 py-1.5 text-xs text-card-foreground shadow-lg">
                            "Moving " <span class="font-medium">{label}</span>
                        </div>
                    }
                    .into_any()
                })
                .unwrap_or_else(|| ().into_view().into_any())
        }}
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    view! { <EditorPage /> }
}
