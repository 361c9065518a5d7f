use leptos::{ev, prelude::*};
use leptos::server_fn::codec::GetUrl;
use leptos_use::{use_event_listener, use_window};

use super::glyph::Glyph;
use super::search::SearchBox;
#[cfg(feature = "ssr")]
use crate::case_study::load_case_study;
use crate::case_study::{has_case_study, CaseStudy, GLOBAL_CASE_STUDY_CACHE};
use crate::catalog::{all_tags, data::PROJECTS, filter, FilterState, Project, SortMode};
use crate::detail::{DetailView, Direction, SwipeTracker};
use crate::icons::Icon;

#[server(prefix = "/api", endpoint = "case_study", input = GetUrl)]
pub async fn get_case_study(id: String) -> Result<CaseStudy, ServerFnError> {
    load_case_study(&id).map_err(|e| {
        tracing::warn!("case study request failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[component]
fn ProjectCard(project: &'static Project, detail: RwSignal<DetailView>) -> impl IntoView {
    let (tech, hidden) = project.card_tech();

    view! {
        <article class="flex flex-col rounded-lg border border-muted/30 bg-brightBlack/20 overflow-hidden hover:border-cyan/50 transition-colors duration-200">
            <button
                type="button"
                class="relative aspect-video overflow-hidden text-left"
                aria-label=format!("Open details for {}", project.title)
                on:click=move |_| detail.update(|d| d.open(project.id, project.slide_count()))
            >
                <img
                    src=project.thumbnail
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover hover:scale-105 transition-transform duration-500"
                />
                <Show when=move || project.featured>
                    <span class="absolute top-3 left-3 inline-flex items-center gap-1 px-2 py-0.5 rounded-full bg-yellow/90 text-background text-xs font-semibold">
                        <Glyph icon=Icon::Star />
                        "Featured"
                    </span>
                </Show>
            </button>
            <div class="flex flex-col flex-1 p-4 gap-3">
                <div>
                    <h3 class="font-semibold text-lg">{project.title}</h3>
                    <p class="text-xs text-muted">{format!("{} · {}", project.role, project.year)}</p>
                </div>
                <p class="text-sm text-muted line-clamp-3">{project.summary}</p>
                <div class="flex flex-wrap gap-1.5">
                    {tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-0.5 rounded bg-brightBlack text-xs">{*t}</span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-0.5 rounded bg-brightBlack text-xs text-muted">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
                <div class="mt-auto flex items-center gap-3 text-sm">
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-cyan hover:underline">
                                    <Glyph icon=Icon::ExternalLink />
                                    "Live"
                                </a>
                            }
                        })}
                    {project
                        .repo_url
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 hover:text-cyan">
                                    <Glyph icon=Icon::Github />
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
fn CaseStudyBody(id: String) -> impl IntoView {
    let study = Resource::new(
        move || id.clone(),
        |id| async move {
            if let Some(hit) = GLOBAL_CASE_STUDY_CACHE.get(&id) {
                return Ok(hit.value().clone());
            }
            let study = get_case_study(id.clone()).await;
            // the server keeps its own cache of rendered studies
            #[cfg(feature = "hydrate")]
            if let Ok(s) = &study {
                GLOBAL_CASE_STUDY_CACHE.insert(id, s.clone());
            }
            study
        },
    );

    view! {
        <Suspense fallback=|| {
            view! {
                <div class="space-y-3">
                    <div class="loading-skeleton h-6 rounded w-1/2"></div>
                    <div class="loading-skeleton h-4 rounded"></div>
                    <div class="loading-skeleton h-4 rounded w-5/6"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match study.await {
                    Ok(s) => {
                        view! {
                            <div class="flex flex-wrap gap-x-6 gap-y-1 text-sm text-muted mb-4">
                                <span>{s.role}</span>
                                <span>{s.duration}</span>
                                <span>{format!("Updated {}", s.updated.format("%b %Y"))}</span>
                            </div>
                            <ul class="mb-4 space-y-1">
                                {s
                                    .outcomes
                                    .into_iter()
                                    .map(|o| {
                                        view! {
                                            <li class="flex gap-2 text-sm">
                                                <Glyph icon=Icon::Target class="w-4 h-4 text-green" />
                                                {o}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <article class="prose prose-invert max-w-none">
                                <div inner_html=s.html></div>
                            </article>
                        }
                            .into_any()
                    }
                    Err(_) => {
                        view! {
                            <p class="text-sm text-muted">"The write-up for this project isn't available right now."</p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}

#[component]
fn ProjectModal(detail: RwSignal<DetailView>) -> impl IntoView {
    let project = Memo::new(move |_| detail.with(|d| d.open_id().and_then(find_project)));
    let swipe = StoredValue::new(SwipeTracker::default());

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !detail.with_untracked(|d| d.is_open()) {
            return;
        }
        if ev.key() == "Escape" {
            detail.update(|d| d.close());
        } else if let Some(dir) = Direction::from_key(&ev.key()) {
            ev.prevent_default();
            detail.update(|d| d.advance(dir));
        }
    });

    move || {
        project.get().map(|project| {
            let slides = project.slides();
            let slide_count = slides.len();
            let current = move || slides.get(detail.with(|d| d.slide())).copied().unwrap_or_default();

            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
                    on:click=move |_| detail.update(|d| d.close())
                >
                    <div
                        role="dialog"
                        aria-modal="true"
                        aria-label=project.title
                        class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg border border-muted/40 bg-background shadow-2xl"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            type="button"
                            aria-label="Close"
                            class="absolute top-3 right-3 z-10 p-2 rounded-full bg-black/50 hover:bg-black/80"
                            on:click=move |_| detail.update(|d| d.close())
                        >
                            <Glyph icon=Icon::Close />
                        </button>
                        <div
                            class="relative aspect-video bg-brightBlack/40 select-none touch-pan-y"
                            on:pointerdown=move |ev| {
                                swipe.update_value(|s| s.begin(ev.client_x().into(), ev.client_y().into()))
                            }
                            on:pointerup=move |ev| {
                                let dir = swipe
                                    .try_update_value(|s| s.end(ev.client_x().into(), ev.client_y().into()))
                                    .flatten();
                                if let Some(dir) = dir {
                                    detail.update(|d| d.advance(dir));
                                }
                            }
                            on:pointercancel=move |_| swipe.update_value(|s| s.cancel())
                        >
                            <Show
                                when=move || !detail.with(|d| d.image_failed())
                                fallback=move || {
                                    view! {
                                        <div class="w-full h-full flex flex-col items-center justify-center gap-2 text-muted">
                                            <Glyph icon=Icon::FileText class="w-8 h-8" />
                                            <span class="text-sm">"Image unavailable"</span>
                                        </div>
                                    }
                                }
                            >
                                <img
                                    src=current.clone()
                                    alt=move || {
                                        format!(
                                            "{} screenshot {} of {}",
                                            project.title,
                                            detail.with(|d| d.slide()) + 1,
                                            slide_count,
                                        )
                                    }
                                    draggable="false"
                                    class=move || {
                                        format!(
                                            "w-full h-full object-cover transition-all duration-300 {}",
                                            if detail.with(|d| d.image_loading()) { "blur-md scale-105" } else { "" },
                                        )
                                    }
                                    on:load=move |_| detail.update(|d| d.image_loaded())
                                    on:error=move |_| detail.update(|d| d.image_errored())
                                />
                            </Show>
                            <Show when=move || { slide_count > 1 }>
                                <button
                                    type="button"
                                    aria-label="Previous image"
                                    class="absolute left-3 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 hover:bg-black/80"
                                    on:click=move |_| detail.update(|d| d.advance(Direction::Previous))
                                >
                                    <Glyph icon=Icon::ChevronLeft />
                                </button>
                                <button
                                    type="button"
                                    aria-label="Next image"
                                    class="absolute right-3 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 hover:bg-black/80"
                                    on:click=move |_| detail.update(|d| d.advance(Direction::Next))
                                >
                                    <Glyph icon=Icon::ChevronRight />
                                </button>
                                <div class="absolute bottom-3 inset-x-0 flex justify-center gap-2">
                                    {(0..slide_count)
                                        .map(|i| {
                                            view! {
                                                <button
                                                    type="button"
                                                    aria-label=format!("Go to image {}", i + 1)
                                                    class=move || {
                                                        format!(
                                                            "h-2 rounded-full transition-all duration-200 {}",
                                                            if detail.with(|d| d.slide()) == i {
                                                                "w-6 bg-cyan"
                                                            } else {
                                                                "w-2 bg-foreground/50"
                                                            },
                                                        )
                                                    }
                                                    on:click=move |_| detail.update(|d| d.go_to(i))
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                        <div class="p-6">
                            <h3 class="text-2xl font-bold mb-1">{project.title}</h3>
                            <p class="text-muted mb-4">{project.summary}</p>
                            <div class="flex flex-wrap gap-1.5 mb-6">
                                {project
                                    .tech
                                    .iter()
                                    .map(|t| view! { <span class="px-2 py-0.5 rounded bg-brightBlack text-xs">{*t}</span> })
                                    .collect_view()}
                            </div>
                            {has_case_study(project.id)
                                .then(|| view! { <CaseStudyBody id=project.id.to_string() /> })}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let filters = RwSignal::new(FilterState::default());
    let detail = RwSignal::new(DetailView::new());
    let clear = Trigger::new();
    let tags = all_tags(PROJECTS);

    let visible = Memo::new(move |_| filters.with(|f| filter(PROJECTS, f)));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-8">
                <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold mb-3">"Featured Projects"</h2>
                <p class="text-muted max-w-2xl mx-auto">
                    "AI products and web platforms I've designed and shipped. Open one for screenshots and the full story."
                </p>
            </div>
            <div class="flex flex-col gap-4 mb-6">
                <div class="flex flex-col sm:flex-row gap-3">
                    <SearchBox
                        placeholder="Search projects..."
                        label="Search projects"
                        on_search=Callback::new(move |q: String| filters.update(|f| f.set_query(q)))
                        clear=clear
                    />
                    <select
                        aria-label="Sort projects"
                        class="px-3 py-2 rounded-md border border-muted/40 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan"
                        on:change=move |ev| {
                            if let Ok(mode) = event_target_value(&ev).parse::<SortMode>() {
                                filters.update(|f| f.set_sort(mode));
                            }
                        }
                    >
                        {SortMode::GALLERY
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <option
                                        value=mode.as_str()
                                        selected=move || filters.with(|f| f.sort == mode)
                                    >
                                        {mode.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="flex flex-wrap gap-2" role="group" aria-label="Technologies">
                    <button
                        type="button"
                        aria-pressed=move || filters.with(|f| f.tags.is_empty()).to_string()
                        on:click=move |_| filters.update(|f| f.select_only(None))
                        class=move || chip_class(filters.with(|f| f.tags.is_empty()))
                    >
                        "All"
                    </button>
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let selected = tag.clone();
                            let pressed = move || filters.with(|f| f.is_selected(&selected));
                            let pressed_label = pressed.clone();
                            let toggle = tag.clone();
                            view! {
                                <button
                                    type="button"
                                    aria-pressed=move || pressed_label().to_string()
                                    on:click=move |_| filters.update(|f| f.toggle_tag(&toggle))
                                    class=move || chip_class(pressed())
                                >
                                    {tag}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <div role="status" class="p-8 rounded-lg border border-muted/30 text-center text-muted">
                            <p class="mb-3">"No projects match those filters."</p>
                            <button
                                type="button"
                                class="px-4 py-1.5 rounded-md border border-muted/40 hover:border-cyan hover:text-cyan"
                                on:click=move |_| {
                                    filters.update(|f| f.clear());
                                    clear.notify();
                                }
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || visible.get()
                        key=|p| p.id
                        children=move |project: &'static Project| {
                            view! { <ProjectCard project=project detail=detail /> }
                        }
                    />
                </div>
            </Show>
            <ProjectModal detail=detail />
        </div>
    }
}

fn chip_class(pressed: bool) -> String {
    format!(
        "h-8 px-3 rounded-full border text-sm transition-colors duration-200 {}",
        if pressed {
            "border-cyan/60 bg-cyan/15 text-foreground"
        } else {
            "border-muted/40 text-muted hover:text-foreground"
        },
    )
}
