//! Theme preference persistence and application.
//!
//! Handles loading and saving the light/dark preference and applying the
//! active palette to the egui context. Storage failures are logged and
//! swallowed here; the application must never fail to render because of a
//! missing or corrupt preference.

use crate::app::AppState;
use anyhow::bail;

/// Namespaced storage key for the saved color-scheme preference.
const THEME_KEY: &str = "@portfolioApp:theme";

/// Coordinates theme persistence and application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the saved color-scheme preference during application startup.
    ///
    /// Returns `None` when no storage backend is available, no value was
    /// saved, or the saved value does not parse — the caller then falls back
    /// to the device appearance seed.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> Option<bool> {
        let raw = storage?.get_string(THEME_KEY)?;
        match parse_preference(&raw) {
            Ok(is_dark) => Some(is_dark),
            Err(err) => {
                log::warn!("ignoring saved theme preference: {err}");
                None
            }
        }
    }

    /// Saves the current color-scheme preference.
    ///
    /// Called on every toggle and during application shutdown. Best-effort:
    /// the write is attempted once and never retried.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, is_dark: bool) {
        storage.set_string(THEME_KEY, preference_token(is_dark).to_string());
        storage.flush();
    }

    /// Applies the active palette to the egui context.
    ///
    /// Called every frame so a toggle or device appearance change takes
    /// effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mut visuals = if state.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        state.theme.palette().apply_to_visuals(&mut visuals);
        ctx.set_visuals(visuals);
    }
}

/// The literal token stored for a preference.
fn preference_token(is_dark: bool) -> &'static str {
    if is_dark { "dark" } else { "light" }
}

/// Parses a stored preference token.
fn parse_preference(raw: &str) -> anyhow::Result<bool> {
    match raw {
        "dark" => Ok(true),
        "light" => Ok(false),
        other => bail!("unrecognized theme token {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn preference_survives_a_restart() {
        let mut storage = MockStorage::new();

        ThemeCoordinator::save_theme_to_storage(&mut storage, true);
        // Simulated restart: a fresh load sees the saved value
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            Some(true)
        );

        ThemeCoordinator::save_theme_to_storage(&mut storage, false);
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            Some(false)
        );
    }

    #[test]
    fn missing_backend_or_value_yields_none() {
        assert_eq!(ThemeCoordinator::load_theme_from_storage(None), None);

        let storage = MockStorage::new();
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), None);
    }

    #[test]
    fn corrupt_value_is_swallowed() {
        let mut storage = MockStorage::new();
        storage.set_string(THEME_KEY, "midnight".to_string());
        // The failure must not propagate; the caller falls back to the seed
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), None);
    }

    #[test]
    fn tokens_are_the_two_literals() {
        assert_eq!(preference_token(true), "dark");
        assert_eq!(preference_token(false), "light");
        assert!(parse_preference("dark").unwrap());
        assert!(!parse_preference("light").unwrap());
        assert!(parse_preference("Dark").is_err());
    }
}
