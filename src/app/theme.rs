use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{PreferenceError, PreferenceStore, ThemeController, ThemeMode, DARK_CLASS, THEME_KEY};

/// Local storage, already bound to the theme key.
#[derive(Debug, Clone, Copy)]
struct LocalThemeStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl PreferenceStore for LocalThemeStore {
    fn load(&self, _key: &str) -> Option<String> {
        let value = self.stored.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn save(&self, _key: &str, value: &str) -> Result<(), PreferenceError> {
        self.set_stored.set(value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: RwSignal<ThemeController<LocalThemeStore>>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.controller.with(|c| c.mode())
    }

    pub fn toggle(&self) {
        self.controller.update(|c| {
            let mode = c.toggle();
            log::debug!("theme switched to {mode}");
        });
    }
}

fn apply_dark_class(dark: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
        log::warn!("could not apply theme class: {e:?}");
    }
}

/// Sets up the theme controller and keeps the document class in sync with it.
pub fn provide_theme() -> ThemeContext {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
    let system_dark = use_preferred_dark();

    let store = LocalThemeStore { stored, set_stored };
    let controller = RwSignal::new(ThemeController::init(store, system_dark.get_untracked()));

    // writes from other tabs arrive through the storage signal
    Effect::watch(
        move || stored.get(),
        move |value, _, _| {
            let value = (!value.is_empty()).then_some(value.as_str());
            controller.maybe_update(|c| c.on_storage_change(value));
        },
        true,
    );

    Effect::watch(
        move || system_dark.get(),
        move |dark, _, _| {
            controller.maybe_update(|c| c.on_system_change(*dark));
        },
        false,
    );

    Effect::new(move |_| {
        apply_dark_class(controller.with(|c| c.mode().is_dark()));
    });

    let ctx = ThemeContext { controller };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
