//! Application-level coordination.
//!
//! Translates user interactions and frame-loop events into state mutations,
//! wiring the section navigator to the scroll surface and the theme store to
//! its consumers.

use crate::app::AppState;
use rfolio::SectionId;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Handles a navigation-bar click: marks the section active and issues a
    /// smooth-scroll request toward it.
    ///
    /// Fire-and-forget: the request supersedes any in-flight scroll and has
    /// no completion callback.
    pub fn handle_navigate(state: &mut AppState, section: SectionId) {
        let target = state.navigator.navigate(section);
        state.scroll.request(target);
    }

    /// Handles the theme toggle. The in-memory flip always takes effect;
    /// persistence is the caller's concern and may fail independently.
    pub fn handle_theme_toggle(state: &mut AppState) {
        state.theme.toggle();
    }

    /// Feeds the current device appearance into the theme state once per
    /// frame. A `None` appearance (platform cannot report one) is ignored.
    pub fn sync_system_theme(state: &mut AppState, system_dark: Option<bool>) {
        if let Some(dark) = system_dark {
            state.theme.sync_with_system(dark);
        }
    }

    /// Advances the smooth-scroll animation by `dt` seconds.
    ///
    /// Returns true while the scroll offset is still moving, in which case
    /// the caller should request a repaint.
    pub fn advance_scroll(state: &mut AppState, dt: f32) -> bool {
        state.scroll.advance(dt)
    }
}
