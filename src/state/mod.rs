//! State management modules for the Folio GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (dark-mode flag, device-sync policy)
//! - Scroll state (offset, smooth-scroll animation)
//! - Skills state (active filter category)

mod scroll;
mod skills_state;
mod theme_state;

pub use scroll::ScrollState;
pub use skills_state::SkillsState;
pub use theme_state::ThemeState;
