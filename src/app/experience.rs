use chrono::Utc;
use leptos::prelude::*;

use super::glyph::Glyph;
use crate::catalog::{data::EXPERIENCE, filter, EmploymentType, Experience, FilterState, SortMode};
use crate::detail::Accordion;
use crate::icons::Icon;

/// Bullets shown before a card is expanded.
const BULLETS_COLLAPSED: usize = 2;

fn anchor(id: &str) -> String {
    format!("exp-{id}")
}

#[component]
fn ExperienceCard(role: &'static Experience, expanded: RwSignal<Accordion>) -> impl IntoView {
    let is_open = Memo::new(move |_| expanded.with(|a| a.is_expanded(role.id)));
    let today = Utc::now().date_naive();
    let hidden = role.bullets.len().saturating_sub(BULLETS_COLLAPSED);

    view! {
        <li id=anchor(role.id) class="relative pl-8 scroll-mt-24">
            <span
                class="absolute left-0 top-2 w-3 h-3 rounded-full ring-4 ring-background"
                style=format!("background-color: {}", role.accent)
                aria-hidden="true"
            ></span>
            <article class=format!(
                "rounded-lg border bg-brightBlack/20 p-5 {}",
                if role.highlight { "border-cyan/50" } else { "border-muted/30" },
            )>
                <header class="flex flex-col sm:flex-row sm:items-start sm:justify-between gap-2">
                    <div>
                        <h3 class="font-semibold text-lg">{role.role}</h3>
                        <p class="flex items-center gap-2 text-sm text-muted">
                            <Glyph icon=role.company_type.icon() />
                            {match role.link {
                                Some(href) => {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-cyan">
                                            {role.company}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <span>{role.company}</span> }.into_any(),
                            }}
                        </p>
                    </div>
                    <div class="flex flex-col sm:items-end text-xs text-muted">
                        <span class="inline-flex items-center gap-1">
                            <Glyph icon=Icon::Calendar />
                            {role.period()}
                        </span>
                        <span>{role.tenure(today)}</span>
                        <span class="mt-1 inline-flex items-center gap-1 px-2 py-0.5 rounded-full border border-muted/40">
                            <Glyph icon=role.employment_type.icon() />
                            {role.employment_type.label()}
                        </span>
                    </div>
                </header>
                <ul class="mt-4 space-y-2">
                    {move || {
                        let take = if is_open.get() { role.bullets.len() } else { BULLETS_COLLAPSED };
                        role.bullets
                            .iter()
                            .take(take)
                            .map(|bullet| {
                                view! {
                                    <li class="flex items-start gap-2 text-sm">
                                        <span
                                            class="mt-2 h-1.5 w-1.5 rounded-full shrink-0"
                                            style=format!("background-color: {}", role.accent)
                                        ></span>
                                        <span>{*bullet}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <Show when=move || { hidden > 0 }>
                    <button
                        type="button"
                        aria-expanded=move || is_open.get().to_string()
                        class="mt-2 text-sm text-cyan hover:underline"
                        on:click=move |_| expanded.update(|a| a.toggle(role.id))
                    >
                        {move || if is_open.get() { "Show less".to_string() } else { format!("Show {hidden} more") }}
                    </button>
                </Show>
                <div class="mt-4 flex flex-wrap gap-1.5">
                    {role
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="px-2 py-0.5 rounded bg-brightBlack text-xs">{*t}</span> })
                        .collect_view()}
                </div>
            </article>
        </li>
    }
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let filters = RwSignal::new(FilterState::with_sort(SortMode::Newest));
    let expanded = RwSignal::new(Accordion::default());

    let visible = Memo::new(move |_| filters.with(|f| filter(EXPERIENCE.as_slice(), f)));

    let type_button = move |kind: Option<EmploymentType>| {
        let pressed = move || {
            filters.with(|f| match kind {
                Some(kind) => f.is_selected(kind.as_str()),
                None => f.tags.is_empty(),
            })
        };
        view! {
            <button
                type="button"
                aria-pressed=move || pressed().to_string()
                on:click=move |_| filters.update(|f| f.select_only(kind.map(EmploymentType::as_str)))
                class=move || {
                    format!(
                        "inline-flex items-center gap-2 h-8 px-3 rounded-full border text-sm transition-colors duration-200 {}",
                        if pressed() {
                            "border-cyan/60 bg-cyan/15 text-foreground"
                        } else {
                            "border-muted/40 text-muted hover:text-foreground"
                        },
                    )
                }
            >
                {kind.map(|k| view! { <Glyph icon=k.icon() /> })}
                {kind.map(EmploymentType::label).unwrap_or("All")}
            </button>
        }
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-8">
                <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold mb-3">"Experience"</h2>
                <p class="text-muted max-w-2xl mx-auto">
                    "Roles across startups, enterprise teams and open source."
                </p>
            </div>
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3 mb-6">
                <div class="flex flex-wrap gap-2" role="group" aria-label="Employment type">
                    {type_button(None)}
                    {EmploymentType::ALL.into_iter().map(|k| type_button(Some(k))).collect_view()}
                </div>
                <button
                    type="button"
                    class="inline-flex items-center gap-2 h-8 px-3 rounded-md border border-muted/40 text-sm hover:border-cyan hover:text-cyan"
                    on:click=move |_| {
                        filters.update(|f| {
                            let next = if f.sort == SortMode::Newest { SortMode::Oldest } else { SortMode::Newest };
                            f.set_sort(next);
                        })
                    }
                >
                    <Glyph icon=Icon::TrendingUp />
                    {move || filters.with(|f| f.sort.label())}
                </button>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-[12rem_1fr] gap-6">
                <nav aria-label="Roles" class="hidden lg:block">
                    <ul class="sticky top-24 space-y-1 text-sm">
                        <For
                            each=move || visible.get()
                            key=|role| role.id
                            children=|role: &'static Experience| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{}", anchor(role.id))
                                            class="block px-3 py-1.5 rounded-md text-muted hover:text-foreground hover:bg-brightBlack/40 truncate"
                                        >
                                            {role.company}
                                        </a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </nav>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| {
                        view! {
                            <p role="status" class="p-8 rounded-lg border border-muted/30 text-center text-muted">
                                "No roles of that type yet."
                            </p>
                        }
                    }
                >
                    <ol class="relative space-y-6 before:absolute before:left-[5px] before:top-2 before:bottom-2 before:w-px before:bg-muted/30">
                        <For
                            each=move || visible.get()
                            key=|role| role.id
                            children=move |role: &'static Experience| {
                                view! { <ExperienceCard role=role expanded=expanded /> }
                            }
                        />
                    </ol>
                </Show>
            </div>
        </div>
    }
}
