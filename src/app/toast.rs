use std::time::Duration;

use leptos::prelude::*;

use super::glyph::Glyph;
use crate::icons::Icon;
use crate::notice::{Notice, NoticeKind, NoticeQueue, NOTICE_TTL_MS};

#[derive(Clone, Copy)]
pub struct Notices(RwSignal<NoticeQueue>);

impl Notices {
    /// Shows `message` and dismisses it again after a few seconds.
    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.0.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.0;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            Duration::from_millis(NOTICE_TTL_MS),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| q.dismiss(id));
    }
}

pub fn provide_notices() -> Notices {
    let notices = Notices(RwSignal::new(NoticeQueue::default()));
    provide_context(notices);
    notices
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "border-green/40 text-green",
        NoticeKind::Error => "border-red/40 text-red",
        NoticeKind::Info => "border-cyan/40 text-cyan",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[90vw]" aria-live="polite">
            <For
                each=move || notices.0.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|n| n.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            role="status"
                            data-kind=notice.kind.as_str()
                            class=format!(
                                "flex items-start justify-between gap-3 p-3 rounded-md border bg-background shadow-lg text-sm {}",
                                kind_class(notice.kind),
                            )
                        >
                            <span>{notice.message}</span>
                            <button
                                class="text-muted hover:text-foreground"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                <Glyph icon=Icon::Close />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
