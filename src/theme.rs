//! Light/dark theme preference.
//!
//! A stored choice always wins over the system colour scheme. Until the
//! visitor picks one, the page follows the system setting live.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::icons::Icon;

pub const THEME_KEY: &str = "theme";
/// Class toggled on the document element.
pub const DARK_CLASS: &str = "dark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("unrecognised theme value {0:?}")]
    Invalid(String),
    #[error("preference storage unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Icon and accessible label for the theme toggle.
///
/// `None` means the client has not mounted yet: the server cannot know the
/// visitor's stored or system preference, so both renders agree on a blank
/// icon and a neutral label until hydration finishes.
pub fn toggle_face(mode: Option<ThemeMode>) -> (Option<Icon>, &'static str) {
    match mode {
        None => (None, "Toggle theme"),
        Some(ThemeMode::Dark) => (Some(Icon::Sun), "Switch to light theme"),
        Some(ThemeMode::Light) => (Some(Icon::Moon), "Switch to dark theme"),
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(PreferenceError::Invalid(other.to_string())),
        }
    }
}

/// Key/value persistence for visitor preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).save(key, value)
    }
}

/// In-process store; used on the server render and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    mode: ThemeMode,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Uses the stored value when it is valid, the system scheme otherwise.
    pub fn init(store: S, system_dark: bool) -> Self {
        let stored = store.load(THEME_KEY).and_then(|v| match v.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        });
        Self {
            store,
            mode: stored.unwrap_or(ThemeMode::from_dark(system_dark)),
            explicit: stored.is_some(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// True once the visitor has chosen a theme.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.explicit = true;
        if let Err(e) = self.store.save(THEME_KEY, mode.as_str()) {
            log::warn!("could not persist theme: {e}");
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    /// Another tab wrote the preference. Returns whether the mode changed.
    pub fn on_storage_change(&mut self, value: Option<&str>) -> bool {
        let Some(Ok(mode)) = value.map(str::parse::<ThemeMode>) else {
            return false;
        };
        self.explicit = true;
        let changed = mode != self.mode;
        self.mode = mode;
        changed
    }

    /// The OS colour scheme changed. Ignored once a preference is stored.
    pub fn on_system_change(&mut self, dark: bool) -> bool {
        if self.explicit {
            return false;
        }
        let mode = ThemeMode::from_dark(dark);
        let changed = mode != self.mode;
        self.mode = mode;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable)
        }
    }

    #[test]
    fn test_stored_value_beats_system() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "light").unwrap();

        let theme = ThemeController::init(&store, true);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(theme.is_explicit());
    }

    #[test]
    fn test_falls_back_to_system() {
        let store = MemoryStore::default();
        assert_eq!(ThemeController::init(&store, true).mode(), ThemeMode::Dark);
        assert_eq!(ThemeController::init(&store, false).mode(), ThemeMode::Light);

        store.save(THEME_KEY, "sepia").unwrap();
        let theme = ThemeController::init(&store, false);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(!theme.is_explicit());
    }

    #[test]
    fn test_system_changes_followed_until_chosen() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::init(&store, false);

        assert!(theme.on_system_change(true));
        assert_eq!(theme.mode(), ThemeMode::Dark);
        // init does not persist the system value
        assert_eq!(store.load(THEME_KEY), None);

        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));

        assert!(!theme.on_system_change(true));
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_cross_tab_changes() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::init(&store, true);

        assert!(!theme.on_storage_change(Some("neon")));
        assert!(!theme.on_storage_change(None));
        assert_eq!(theme.mode(), ThemeMode::Dark);

        assert!(theme.on_storage_change(Some("light")));
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(!theme.on_system_change(true));
    }

    #[test]
    fn test_save_failure_still_switches() {
        let mut theme = ThemeController::init(BrokenStore, true);
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "Dark".parse::<ThemeMode>(),
            Err(PreferenceError::Invalid("Dark".to_string()))
        );
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }

    #[test]
    fn test_toggle_face_neutral_before_mount() {
        let (icon, label) = toggle_face(None);
        assert_eq!(icon, None);
        assert_eq!(label, "Toggle theme");

        // the server render must not depend on the default mode
        assert_ne!(toggle_face(None), toggle_face(Some(ThemeMode::default())));
    }

    #[test]
    fn test_toggle_face_offers_the_other_mode() {
        assert_eq!(
            toggle_face(Some(ThemeMode::Dark)),
            (Some(Icon::Sun), "Switch to light theme")
        );
        assert_eq!(
            toggle_face(Some(ThemeMode::Light)),
            (Some(Icon::Moon), "Switch to dark theme")
        );
    }
}
