//! Application-level modules for the Folio GUI.
//!
//! This module contains the centralized state and the coordinators that
//! translate interactions and persistence concerns into state mutations.

mod app_state;
mod application_coordinator;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
