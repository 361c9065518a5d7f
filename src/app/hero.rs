use std::time::Duration;

use leptos::{html::Div, prelude::*};
use leptos_use::{
    use_element_visibility, use_interval_fn_with_options, UseIntervalFnOptions, utils::Pausable,
};

use super::glyph::Glyph;
use crate::config::SiteConfig;
use crate::icons::Icon;
use crate::ticker::{CountUp, Typewriter, FRAME_MS, TYPE_START_DELAY_MS};

const CODE_LINES: &[&str] = &[
    "# AI Training Pipeline",
    "def train_model(data, config):",
    "    model = create_transformer(config)",
    "    trainer = Trainer(model, data)",
    "    return trainer.train()",
    "",
    "# Deploy to production",
    "model = train_model(dataset, config)",
];

struct Stat {
    label: &'static str,
    target: u32,
    duration_ms: u64,
    icon: Icon,
}

const STATS: &[Stat] = &[
    Stat {
        label: "Years experience",
        target: 6,
        duration_ms: 1200,
        icon: Icon::Calendar,
    },
    Stat {
        label: "Projects shipped",
        target: 150,
        duration_ms: 1400,
        icon: Icon::Rocket,
    },
    Stat {
        label: "Models trained",
        target: 75,
        duration_ms: 1300,
        icon: Icon::Brain,
    },
];

#[component]
fn StatCounter(stat: &'static Stat, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let counter = RwSignal::new(CountUp::new(stat.target, stat.duration_ms));

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            counter.update(|c| {
                c.tick(FRAME_MS);
            });
        },
        FRAME_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible && !counter.with_untracked(|c| c.is_done() || c.is_running()) {
                counter.update(|c| c.start());
                resume();
            }
        },
        true,
    );

    Effect::new(move |_| {
        if counter.with(|c| c.is_done()) {
            pause();
        }
    });

    view! {
        <div class="flex flex-col items-start gap-1 p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
            <Glyph icon=stat.icon class="w-6 h-6 text-cyan" />
            <span class="text-2xl sm:text-3xl font-bold tabular-nums">
                {move || counter.with(|c| c.value())}"+"
            </span>
            <span class="text-xs sm:text-sm text-muted">{stat.label}</span>
        </div>
    }
}

fn schedule_typing(typewriter: RwSignal<Typewriter>, delay_ms: u64) {
    set_timeout(
        move || {
            // a disposed signal means the hero is gone; stop the chain
            let next = typewriter
                .try_update(|t| {
                    if !t.is_running() {
                        return None;
                    }
                    t.tick();
                    Some(t.next_delay_ms())
                })
                .flatten();
            if let Some(next) = next {
                schedule_typing(typewriter, next);
            }
        },
        Duration::from_millis(delay_ms),
    );
}

#[component]
fn CodePreview() -> impl IntoView {
    let preview_ref = NodeRef::<Div>::new();
    let visible = use_element_visibility(preview_ref);
    let typewriter = RwSignal::new(Typewriter::new(CODE_LINES.iter().copied()));

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible && !typewriter.with_untracked(|t| t.is_running()) {
                typewriter.update(|t| t.start());
                schedule_typing(typewriter, TYPE_START_DELAY_MS);
            }
        },
        true,
    );
    on_cleanup(move || {
        typewriter.try_update(|t| t.stop());
    });

    view! {
        <div
            node_ref=preview_ref
            class="rounded-lg border border-muted/30 bg-black/60 p-4 font-mono text-xs sm:text-sm min-h-[14rem]"
            aria-hidden="true"
        >
            <div class="flex gap-1.5 mb-3">
                <span class="w-3 h-3 rounded-full bg-red/70"></span>
                <span class="w-3 h-3 rounded-full bg-yellow/70"></span>
                <span class="w-3 h-3 rounded-full bg-green/70"></span>
            </div>
            <pre class="whitespace-pre-wrap text-green">
                {move || typewriter.with(|t| t.visible().join("\n"))}
                <span class="animate-pulse">"▌"</span>
            </pre>
        </div>
    }
}

#[component]
fn Avatar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (failed, set_failed) = signal(false);
    let initials = config.initials;

    view! {
        <div class="shrink-0 size-20 sm:size-24 lg:size-28 rounded-full overflow-hidden ring-2 ring-muted/40 shadow-xl bg-gradient-to-br from-cyan/20 to-purple/20 flex items-center justify-center">
            {move || match config.avatar {
                Some(src) if !failed.get() => {
                    view! {
                        <img
                            src=src
                            alt=format!("{} avatar", config.owner)
                            class="w-full h-full object-cover"
                            on:error=move |_| set_failed.set(true)
                        />
                    }
                        .into_any()
                }
                _ => view! { <span class="text-2xl lg:text-3xl font-bold">{initials}</span> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let stats_ref = NodeRef::<Div>::new();
    let stats_visible = use_element_visibility(stats_ref);

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 lg:gap-16 items-center">
            <div class="flex flex-col">
                <div class="flex items-center gap-4 sm:gap-6">
                    <Avatar />
                    <div class="min-w-0">
                        <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold leading-tight">
                            {config.owner}
                        </h1>
                        <p class="mt-1 text-sm sm:text-base lg:text-lg text-muted font-medium">
                            {config.headline}
                        </p>
                    </div>
                </div>
                <p class="mt-6 text-base sm:text-lg leading-relaxed text-foreground/90">{config.bio}</p>
                <div class="mt-6 flex flex-col sm:flex-row gap-3">
                    <a
                        href="#projects"
                        class="inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-md bg-cyan text-background font-medium hover:bg-cyan/80 transition-colors duration-200"
                    >
                        "View Projects"
                        <Glyph icon=Icon::ChevronRight />
                    </a>
                    <a
                        href="#contact"
                        class="inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-md border border-muted/40 hover:border-cyan hover:text-cyan transition-colors duration-200"
                    >
                        <Glyph icon=Icon::Mail />
                        "Hire Me"
                    </a>
                </div>
                <div node_ref=stats_ref class="mt-8 grid grid-cols-3 gap-3">
                    {STATS
                        .iter()
                        .map(|stat| view! { <StatCounter stat=stat visible=stats_visible /> })
                        .collect_view()}
                </div>
            </div>
            <CodePreview />
        </div>
    }
}
