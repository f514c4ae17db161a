//! Centralized application state for the Folio GUI.
//!
//! This module composes focused state components that each manage a specific
//! aspect of the application's state, keeping invariants local and giving the
//! UI borrow-checker friendly access to each aspect.

use crate::state::{ScrollState, SkillsState, ThemeState};
use rfolio::SectionNavigator;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Color scheme state
    pub theme: ThemeState,

    /// Section layout map and active navigation target
    pub navigator: SectionNavigator,

    /// Vertical scroll offset and smooth-scroll animation
    pub scroll: ScrollState,

    /// Skills filter state
    pub skills: SkillsState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            navigator: SectionNavigator::new(),
            scroll: ScrollState::new(),
            skills: SkillsState::new(),
        }
    }

    /// Creates a new AppState from settings loaded at startup.
    pub fn with_settings(theme: ThemeState, skills: SkillsState) -> Self {
        Self {
            theme,
            navigator: SectionNavigator::new(),
            scroll: ScrollState::new(),
            skills,
        }
    }
}
