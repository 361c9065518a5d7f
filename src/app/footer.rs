use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::glyph::Glyph;
use super::nav::ANCHORS;
use super::theme::use_theme;
use crate::config::SiteConfig;
use crate::icons::Icon;
use crate::theme::toggle_face;

/// Scroll offset past which the back-to-top button appears.
const BACK_TO_TOP_PX: f64 = 260.0;

fn build_date() -> String {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => "unknown".to_string(),
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    // the stored preference only exists in the browser
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));
    let face = move || toggle_face(mounted.get().then(|| theme.mode()));

    view! {
        <button
            type="button"
            on:click=move |_| theme.toggle()
            aria-label=move || face().1
            class="p-2 rounded-md border border-muted/40 hover:border-cyan hover:text-cyan transition-colors duration-200"
        >
            {move || match face().0 {
                Some(icon) => view! { <Glyph icon=icon /> }.into_any(),
                None => view! { <span class="block w-4 h-4" aria-hidden="true"></span> }.into_any(),
            }}
        </button>
    }
}

#[component]
fn BackToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let shown = Memo::new(move |_| scroll_y.get() > BACK_TO_TOP_PX);

    view! {
        <Show when=move || shown.get()>
            <button
                type="button"
                aria-label="Back to top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                class="fixed bottom-4 left-4 z-40 p-3 rounded-full border border-muted/40 bg-background/90 shadow-lg hover:border-cyan hover:text-cyan transition-colors duration-200"
            >
                <Glyph icon=Icon::ArrowUp />
            </button>
        </Show>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-muted/30 mt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <p class="font-bold text-lg">{config.site_name}</p>
                    <p class="mt-2 text-sm text-muted">{config.tagline}</p>
                </div>
                <nav aria-label="Footer">
                    <ul class="grid grid-cols-2 gap-2 text-sm">
                        {ANCHORS
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <li>
                                        <a href=format!("#{id}") class="text-muted hover:text-foreground">
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="flex flex-col gap-4 md:items-end">
                    <div class="flex items-center gap-2">
                        {config
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="p-2 rounded-md hover:bg-brightBlack/40 hover:text-cyan"
                                    >
                                        <Glyph icon=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <a
                        href=config.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 text-sm text-muted hover:text-cyan"
                    >
                        <Glyph icon=Icon::Code />
                        "Source"
                    </a>
                </div>
            </div>
            <div class="border-t border-muted/20 py-4 text-center text-xs text-muted">
                {format!("© {year} {}. Built {}.", config.owner, build_date())}
            </div>
            <BackToTop />
        </footer>
    }
}
