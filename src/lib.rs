#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod case_study;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod debounce;
pub mod detail;
#[cfg(feature = "ssr")]
mod highlight;
pub mod icons;
pub mod notice;
pub mod theme;
pub mod ticker;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = option_env!("LOG_LEVEL")
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::Level::Info);
    // a second init (hot reload) keeps the first logger
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
