use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::glyph::Glyph;
use crate::config::SiteConfig;
use crate::icons::Icon;

/// Scroll offset past which the bar gets its solid background.
const SCROLLED_PX: f64 = 12.0;

pub const ANCHORS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_PX);
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        ANCHORS
            .iter()
            .map(|(id, label)| {
                let class = if mobile {
                    "block px-4 py-3 rounded-md text-foreground/80 hover:text-foreground hover:bg-brightBlack/40"
                } else {
                    "px-3 py-2 rounded-md text-sm font-medium text-foreground/80 hover:text-foreground hover:bg-brightBlack/40 transition-colors duration-200"
                };
                view! {
                    <a href=format!("#{id}") class=class on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            aria-label="Primary"
            class=move || {
                format!(
                    "fixed inset-x-0 top-0 z-40 border-b backdrop-blur-md transition-all duration-300 {}",
                    if scrolled.get() {
                        "bg-background/95 border-muted/60 shadow-lg"
                    } else {
                        "bg-background/70 border-transparent"
                    },
                )
            }
        >
            <div class="mx-auto max-w-7xl h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between gap-4">
                <a href="#home" class="font-bold text-lg hover:text-cyan transition-colors duration-200">
                    {config.owner}
                </a>
                <div class="hidden lg:flex items-center gap-1">{links(false)}</div>
                <div class="flex items-center gap-2">
                    <a
                        href=config.resume_url
                        download
                        aria-label="Download résumé"
                        class="inline-flex items-center gap-2 px-3 py-2 rounded-md border border-muted/40 text-sm hover:border-cyan hover:text-cyan transition-colors duration-200"
                    >
                        <Glyph icon=Icon::Download />
                        <span class="hidden sm:inline">"Résumé"</span>
                    </a>
                    <button
                        class="lg:hidden p-2 rounded-md hover:bg-brightBlack/40"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <Glyph icon=icon class="w-5 h-5" /> }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="lg:hidden border-t border-muted/40 bg-background px-4 py-2">{links(true)}</div>
            </Show>
        </nav>
    }
}
