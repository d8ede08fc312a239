use leptos::prelude::*;
use tw_merge::tw_merge;

/// Commit-on-change text input.
///
/// Nestform rows are re-rendered from store snapshots, so two-way signal
/// binding would fight the render loop; instead the input carries the
/// snapshot value and reports the edited text once on `change` (blur/Enter).
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] value: String,
    #[prop(into)] on_commit: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50",
        "focus-visible:ring-2",
        class
    );

    view! {
        <input
            data-name="Input"
            type="text"
            class=merged_class
            placeholder=placeholder
            prop:value=value
            on:change=move |ev: web_sys::Event| {
                on_commit.run(event_target_value(&ev));
            }
        />
    }
    .into_any()
}
