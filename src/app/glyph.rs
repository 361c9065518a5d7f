use leptos::prelude::*;

use crate::icons::Icon;

/// Inline SVG for an [`Icon`], sized by `class` and coloured by the text colour.
#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() { "w-4 h-4".to_string() } else { class };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            class=format!("shrink-0 {class}")
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
