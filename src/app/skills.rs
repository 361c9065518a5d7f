use leptos::prelude::*;

use super::glyph::Glyph;
use super::search::SearchBox;
use crate::catalog::{
    data::SKILLS, filter, ring_offset, FilterState, Paginator, Skill, SkillCategory, SortMode,
};
use crate::detail::Accordion;
use crate::icons::Icon;

const PAGE_SIZE: usize = 6;
const RING_RADIUS: f64 = 8.0;
const NOTES_SHOWN: usize = 3;

#[component]
fn ProficiencyRing(percent: u8) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    view! {
        <svg viewBox="0 0 20 20" class="w-5 h-5 -rotate-90" aria-hidden="true">
            <circle cx="10" cy="10" r=RING_RADIUS.to_string() class="fill-none stroke-muted/30" stroke-width="2.5" />
            <circle
                cx="10"
                cy="10"
                r=RING_RADIUS.to_string()
                class="fill-none stroke-cyan transition-all duration-700"
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-dasharray=circumference.to_string()
                stroke-dashoffset=ring_offset(percent, RING_RADIUS).to_string()
            />
        </svg>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, expanded: RwSignal<Accordion>) -> impl IntoView {
    let is_open = Memo::new(move |_| expanded.with(|a| a.is_expanded(skill.id)));
    let toggle = move || expanded.update(|a| a.toggle(skill.id));

    view! {
        <div
            role="button"
            tabindex="0"
            aria-expanded=move || is_open.get().to_string()
            on:click=move |_| toggle()
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    toggle();
                }
            }
            class="rounded-lg border border-muted/30 bg-brightBlack/20 hover:border-cyan/50 transition-colors duration-200 cursor-pointer focus:outline-none focus:ring-2 focus:ring-cyan"
        >
            <div class="p-4 flex items-start gap-3">
                <div class="p-2 rounded-md bg-cyan/10">
                    <Glyph icon=skill.icon class="w-5 h-5" />
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-start justify-between gap-2">
                        <div class="min-w-0">
                            <h3 class="font-semibold truncate">{skill.name}</h3>
                            <p class="mt-1 text-sm text-muted line-clamp-2">{skill.summary}</p>
                        </div>
                        {skill
                            .badge
                            .map(|badge| {
                                view! {
                                    <span
                                        title=badge.description()
                                        aria-label=format!("Proficiency: {}", badge.label())
                                        class=format!(
                                            "shrink-0 px-2 py-0.5 rounded-full border text-xs {}",
                                            badge.class(),
                                        )
                                    >
                                        {badge.label()}
                                    </span>
                                }
                            })}
                    </div>
                    <div class="mt-3 flex items-center gap-2">
                        <div
                            class="flex-1 h-1.5 rounded-full bg-muted/30 overflow-hidden"
                            role="progressbar"
                            aria-valuenow=skill.percent.to_string()
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-label=format!("{} proficiency {}%", skill.name, skill.percent)
                        >
                            <div
                                class="h-full bg-cyan rounded-full"
                                style=format!("width: {}%", skill.percent)
                            ></div>
                        </div>
                        <Show when=move || skill.is_key()>
                            <ProficiencyRing percent=skill.percent />
                        </Show>
                        <span class="w-10 text-right text-xs tabular-nums font-semibold">
                            {format!("{}%", skill.percent)}
                        </span>
                    </div>
                </div>
            </div>
            <Show when=move || is_open.get()>
                <ul class="px-4 pb-4 pt-2 border-t border-muted/20 space-y-2">
                    {skill
                        .notes
                        .iter()
                        .take(NOTES_SHOWN)
                        .map(|note| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-muted">
                                    <span class="mt-2 h-1.5 w-1.5 rounded-full bg-cyan shrink-0"></span>
                                    <span>{*note}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let filters = RwSignal::new(FilterState::with_sort(SortMode::Impact));
    let pages = RwSignal::new(Paginator::new(PAGE_SIZE));
    let expanded = RwSignal::new(Accordion::default());
    let clear = Trigger::new();

    let matching = Memo::new(move |_| filters.with(|f| filter(SKILLS, f)));
    let shown = Memo::new(move |_| matching.with(|all| pages.with(|p| p.page(all).to_vec())));

    // a new filter starts back at the first page
    Effect::watch(
        move || filters.track(),
        move |_, _, _| pages.update(|p| p.reset()),
        false,
    );

    let clear_filters = move |_: leptos::ev::MouseEvent| {
        filters.update(|f| f.clear());
        clear.notify();
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-8">
                <h2 id="skills-heading" class="text-2xl sm:text-3xl lg:text-4xl font-bold mb-3">
                    "Technical Skills & Expertise"
                </h2>
                <p class="text-muted max-w-2xl mx-auto">
                    "Full-stack development with an AI/ML focus. Open a card for details, or load more to see everything."
                </p>
            </div>
            <div class="flex flex-col gap-4 p-4 rounded-lg border border-muted/30 bg-brightBlack/10 mb-6">
                <div class="flex flex-wrap gap-2" role="group" aria-label="Skill categories">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|cat| {
                            let pressed = move || filters.with(|f| f.is_selected(cat.as_str()));
                            view! {
                                <button
                                    type="button"
                                    aria-pressed=move || pressed().to_string()
                                    aria-label=format!("Filter {}", cat.as_str())
                                    on:click=move |_| filters.update(|f| f.toggle_tag(cat.as_str()))
                                    class=move || {
                                        format!(
                                            "inline-flex items-center gap-2 h-9 px-4 rounded-full border text-sm font-medium transition-colors duration-200 {}",
                                            if pressed() {
                                                "border-cyan/60 bg-cyan/15 text-foreground"
                                            } else {
                                                "border-muted/40 text-muted hover:text-foreground"
                                            },
                                        )
                                    }
                                >
                                    <Glyph icon=cat.icon() />
                                    {cat.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <Show when=move || filters.with(|f| f.is_filtered())>
                        <button
                            type="button"
                            aria-label="Clear filters"
                            on:click=clear_filters
                            class="h-9 px-4 rounded-full border border-muted/40 text-xs font-medium text-muted hover:text-red hover:border-red/40 transition-colors duration-200"
                        >
                            "Clear"
                        </button>
                    </Show>
                </div>
                <SearchBox
                    placeholder="Search skills..."
                    label="Search skills"
                    on_search=Callback::new(move |q: String| filters.update(|f| f.set_query(q)))
                    clear=clear
                />
            </div>
            <Show
                when=move || matching.with(|m| !m.is_empty())
                fallback=|| {
                    view! {
                        <div
                            role="status"
                            aria-live="polite"
                            class="p-8 rounded-lg border border-muted/30 text-center text-muted"
                        >
                            "No skills match your current filters. Try adjusting your search."
                        </div>
                    }
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <For
                        each=move || shown.get()
                        key=|skill| skill.id
                        children=move |skill: &'static Skill| {
                            view! { <SkillCard skill=skill expanded=expanded /> }
                        }
                    />
                </div>
                <Show when=move || matching.with(|m| pages.with(|p| p.has_more(m.len())))>
                    <div class="mt-6 flex justify-center">
                        <button
                            type="button"
                            on:click=move |_| pages.update(|p| p.show_more())
                            class="inline-flex items-center gap-2 px-5 py-2 rounded-md border border-muted/40 hover:border-cyan hover:text-cyan transition-colors duration-200"
                        >
                            <Glyph icon=Icon::ChevronRight />
                            {move || {
                                let remaining = matching.with(|m| m.len())
                                    .saturating_sub(pages.with(|p| p.visible()));
                                format!("Load more ({remaining})")
                            }}
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
