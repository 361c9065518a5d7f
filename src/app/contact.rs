use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen_futures::JsFuture;

use super::glyph::Glyph;
use super::toast::use_notices;
use super::transport::SiteTransport;
use crate::config::SiteConfig;
use crate::contact::{ContactError, ContactForm, ContactTransport, Field};
use crate::icons::Icon;

const SENT_MESSAGE: &str = "Message sent! I'll get back to you shortly.";
const SPAM_MESSAGE: &str = "Verification failed. Please try again.";
const COPIED_MESSAGE: &str = "Email copied to clipboard";
const COPY_FAILED_MESSAGE: &str = "Could not copy. Please copy it manually.";

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-cyan transition-colors duration-200";

fn input_class(form: RwSignal<ContactForm>, field: Field) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let border = if form.with(|f| f.error(field).is_some()) {
            "border-red"
        } else {
            "border-muted/40"
        };
        format!("{INPUT_CLASS} {border}")
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field)).map(|msg| {
            view! {
                <p id=format!("{}-error", field.as_str()) role="alert" class="mt-1 text-xs text-red">
                    {msg}
                </p>
            }
        })
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let promise = window().navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

#[component]
fn QuickContact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notices = use_notices();
    let email = config.contact_email;

    let copy_email = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            match copy_to_clipboard(email).await {
                Ok(()) => notices.success(COPIED_MESSAGE),
                Err(e) => {
                    log::warn!("clipboard write failed: {e}");
                    notices.error(COPY_FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <aside class="flex flex-col gap-4 p-6 rounded-lg border border-muted/30 bg-brightBlack/20">
            <h3 class="font-semibold text-lg">"Prefer something quicker?"</h3>
            <a
                href=config.mailto()
                class="inline-flex items-center gap-3 text-sm hover:text-cyan transition-colors duration-200"
            >
                <Glyph icon=Icon::Mail />
                {email}
            </a>
            <button
                type="button"
                on:click=copy_email
                class="inline-flex items-center gap-3 text-sm text-left hover:text-cyan transition-colors duration-200"
            >
                <Glyph icon=Icon::Copy />
                "Copy email address"
            </button>
            <a
                href=config.calendly_url
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-3 text-sm hover:text-cyan transition-colors duration-200"
            >
                <Glyph icon=Icon::Calendar />
                "Book a call"
            </a>
            <div class="flex gap-3 pt-2 border-t border-muted/20">
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
            </div>
        </aside>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notices = use_notices();
    let form = RwSignal::new(ContactForm::default());
    let transport = StoredValue::new(SiteTransport::from_config(&config));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let payload = match begun {
            Ok(payload) => payload,
            Err(ContactError::Spam) => {
                notices.error(SPAM_MESSAGE);
                return;
            }
            Err(_) => return,
        };
        spawn_local(async move {
            let transport = transport.get_value();
            let result = transport.send(payload).await;
            match form.try_update(|f| f.finish_submit(result)) {
                Some(Ok(())) => notices.success(SENT_MESSAGE),
                Some(Err(e)) => notices.error(e.to_string()),
                None => {}
            }
        });
    };

    let bind = move |field: Field| move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let value = move |field: Field| move || form.with(|f| f.value(field).to_string());
    let invalid = move |field: Field| move || form.with(|f| f.error(field).is_some()).to_string();

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-8">
                <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold mb-3">"Get In Touch"</h2>
                <p class="text-muted max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hi? My inbox is open."
                </p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-[1fr_18rem] gap-6">
                <form
                    novalidate
                    on:submit=on_submit
                    class="relative flex flex-col gap-4 p-6 rounded-lg border border-muted/30 bg-brightBlack/10"
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label for="contact-name" class="block mb-1 text-sm font-medium">"Name"</label>
                            <input
                                id="contact-name"
                                name=Field::Name.as_str()
                                type="text"
                                autocomplete="name"
                                placeholder="Your name"
                                prop:value=value(Field::Name)
                                on:input=bind(Field::Name)
                                aria-invalid=invalid(Field::Name)
                                aria-describedby="name-error"
                                class=input_class(form, Field::Name)
                            />
                            <FieldError form=form field=Field::Name />
                        </div>
                        <div>
                            <label for="contact-email" class="block mb-1 text-sm font-medium">"Email"</label>
                            <input
                                id="contact-email"
                                name=Field::Email.as_str()
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=value(Field::Email)
                                on:input=bind(Field::Email)
                                aria-invalid=invalid(Field::Email)
                                aria-describedby="email-error"
                                class=input_class(form, Field::Email)
                            />
                            <FieldError form=form field=Field::Email />
                        </div>
                    </div>
                    <div>
                        <label for="contact-subject" class="block mb-1 text-sm font-medium">"Subject"</label>
                        <select
                            id="contact-subject"
                            name=Field::Subject.as_str()
                            on:change=bind(Field::Subject)
                            aria-invalid=invalid(Field::Subject)
                            aria-describedby="subject-error"
                            class=input_class(form, Field::Subject)
                        >
                            <option value="" selected=move || form.with(|f| f.value(Field::Subject).is_empty())>
                                "Choose a subject"
                            </option>
                            {move || {
                                form.with(|f| f.subjects().to_vec())
                                    .into_iter()
                                    .map(|subject| {
                                        let label = subject.clone();
                                        let current = subject.clone();
                                        view! {
                                            <option
                                                value=subject
                                                selected=move || form.with(|f| f.value(Field::Subject) == current)
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <FieldError form=form field=Field::Subject />
                    </div>
                    <div>
                        <label for="contact-message" class="block mb-1 text-sm font-medium">"Message"</label>
                        <textarea
                            id="contact-message"
                            name=Field::Message.as_str()
                            rows="6"
                            placeholder="Tell me about your project..."
                            prop:value=value(Field::Message)
                            on:input=bind(Field::Message)
                            aria-invalid=invalid(Field::Message)
                            aria-describedby="message-error"
                            class=input_class(form, Field::Message)
                        ></textarea>
                        <FieldError form=form field=Field::Message />
                    </div>
                    // honeypot
                    <div class="absolute -left-[9999px] w-px h-px overflow-hidden" aria-hidden="true">
                        <label for="contact-company">"Company"</label>
                        <input
                            id="contact-company"
                            name=Field::Honeypot.as_str()
                            type="text"
                            tabindex="-1"
                            autocomplete="off"
                            prop:value=value(Field::Honeypot)
                            on:input=bind(Field::Honeypot)
                        />
                    </div>
                    {move || {
                        form.with(|f| f.general_error().map(str::to_string))
                            .map(|msg| {
                                view! {
                                    <p role="alert" class="text-sm text-red">{msg}</p>
                                }
                            })
                    }}
                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.is_submitting())
                        class="inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-md bg-cyan text-background font-medium hover:bg-cyan/80 disabled:opacity-60 disabled:cursor-not-allowed transition-colors duration-200"
                    >
                        <Glyph icon=Icon::Mail />
                        {move || if form.with(|f| f.is_submitting()) { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
                <QuickContact />
            </div>
        </div>
    }
}
