//! Generic settings persistence coordination.
//!
//! Provides type-safe loading and saving of serializable settings against
//! eframe's persistent storage. Settings are stored as JSON strings; a
//! missing or unreadable value falls back to the type's default.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when no storage
    /// backend is available, the key is missing, or the value fails to
    /// deserialize.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                match serde_json::from_str(&json_str) {
                    Ok(value) => return value,
                    Err(err) => log::warn!("ignoring saved setting {key:?}: {err}"),
                }
            }
        }
        T::default()
    }

    /// Saves a setting as a JSON string. Best-effort, attempted once.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::warn!("failed to serialize setting {key:?}: {err}"),
        }
    }
}
