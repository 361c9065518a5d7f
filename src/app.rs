mod contact;
mod experience;
mod footer;
mod glyph;
mod hero;
mod nav;
mod projects;
mod search;
mod skills;
mod theme;
mod toast;
mod transport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SiteConfig, FAVICON_PATH};
use contact::Contact;
use experience::ExperienceTimeline;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;
use toast::{provide_notices, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_PATH />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = SiteConfig::from_env();
    let site_name = config.site_name;
    provide_context(config);
    provide_notices();
    theme::provide_theme();

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Meta name="description" content="Portfolio: AI/ML products, full-stack projects, experience and contact." />

        <Router>
            <NavBar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <Toaster />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let section = "scroll-mt-20 py-16 sm:py-20";

    view! {
        <Title text="Portfolio" />
        <section id="home" class="scroll-mt-20 pt-28 pb-16 max-w-7xl mx-auto w-full px-4 sm:px-6 lg:px-8">
            <Hero />
        </section>
        <section id="skills" aria-labelledby="skills-heading" class=section>
            <Skills />
        </section>
        <section id="projects" class=section>
            <Projects />
        </section>
        <section id="experience" class=section>
            <ExperienceTimeline />
        </section>
        <section id="contact" class=section>
            <Contact />
        </section>
    }
}
