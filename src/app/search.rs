use std::time::Duration;

use leptos::{html::Input, prelude::*};

use super::glyph::Glyph;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use crate::icons::Icon;

/// Text input that reports its value once typing pauses.
///
/// Notifying `clear` empties the box and drops any pending query.
#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(into)] label: String,
    on_search: Callback<String>,
    clear: Trigger,
) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let debouncer = StoredValue::new(Debouncer::<String>::new());

    Effect::watch(
        move || clear.track(),
        move |_, _, _| {
            debouncer.update_value(|d| d.cancel());
            if let Some(el) = input_ref.get_untracked() {
                el.set_value("");
            }
        },
        false,
    );

    let on_input = move |ev: leptos::ev::Event| {
        let ticket = debouncer
            .try_update_value(|d| d.push(event_target_value(&ev)))
            .unwrap_or_default();
        set_timeout(
            move || {
                if let Some(Some(query)) = debouncer.try_update_value(|d| d.fire(ticket)) {
                    on_search.run(query);
                }
            },
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        );
    };

    view! {
        <div class="relative w-full">
            <Glyph
                icon=Icon::Search
                class="w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-muted pointer-events-none"
            />
            <input
                node_ref=input_ref
                type="search"
                aria-label=label
                placeholder=placeholder
                on:input=on_input
                class="w-full pl-9 pr-4 py-2 rounded-md border border-muted/40 bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan transition-all duration-200"
            />
        </div>
    }
}
