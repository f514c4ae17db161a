//! Theme state management.
//!
//! This module encapsulates the dark-mode flag and the policy for keeping it
//! in sync with the device appearance. The concrete colors are always derived
//! from the flag via the library's static palettes.

use rfolio::Palette;

/// State related to the active color scheme.
///
/// Responsibilities:
/// - Tracking the dark-mode flag
/// - Deriving the active palette from it
/// - Deciding whether device appearance changes still apply
///
/// An explicit user toggle (or a previously saved preference) sticks: after
/// either, device appearance changes no longer re-seed the flag.
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// Whether the dark palette is active
    is_dark: bool,
    /// Whether the flag still mirrors the device appearance
    follow_system: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a theme state with the light palette, following the device.
    pub fn new() -> Self {
        Self {
            is_dark: false,
            follow_system: true,
        }
    }

    /// Creates a theme state from the device seed and an optional saved
    /// preference.
    ///
    /// A saved preference overrides the device seed and pins the choice;
    /// otherwise the device seed is used (defaulting to light when the
    /// device appearance is unknown) and the state keeps following the
    /// device.
    pub fn seeded(system_dark: Option<bool>, saved: Option<bool>) -> Self {
        match saved {
            Some(is_dark) => Self {
                is_dark,
                follow_system: false,
            },
            None => Self {
                is_dark: system_dark.unwrap_or(false),
                follow_system: true,
            },
        }
    }

    // ===== Queries =====

    /// Returns whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Returns the palette selected by the dark-mode flag.
    pub fn palette(&self) -> &'static Palette {
        rfolio::palette(self.is_dark)
    }

    /// Returns whether device appearance changes still re-seed the flag.
    pub fn follows_system(&self) -> bool {
        self.follow_system
    }

    // ===== Mutations =====

    /// Flips the dark-mode flag. The explicit choice sticks from here on.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        self.follow_system = false;
    }

    /// Re-seeds the flag from a device appearance change.
    ///
    /// Applies only while no explicit choice has been made.
    pub fn sync_with_system(&mut self, system_dark: bool) {
        if self.follow_system {
            self.is_dark = system_dark;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip_selects_matching_palette() {
        let mut theme = ThemeState::new();
        assert!(!theme.is_dark());
        assert!(std::ptr::eq(theme.palette(), rfolio::palette(false)));

        theme.toggle();
        assert!(theme.is_dark());
        assert!(std::ptr::eq(theme.palette(), rfolio::palette(true)));

        theme.toggle();
        assert!(!theme.is_dark());
        assert!(std::ptr::eq(theme.palette(), rfolio::palette(false)));
    }

    #[test]
    fn saved_preference_overrides_device_seed() {
        let theme = ThemeState::seeded(Some(false), Some(true));
        assert!(theme.is_dark());
        assert!(!theme.follows_system());
    }

    #[test]
    fn device_seed_applies_without_saved_preference() {
        let theme = ThemeState::seeded(Some(true), None);
        assert!(theme.is_dark());
        assert!(theme.follows_system());

        // Unknown device appearance falls back to light
        let theme = ThemeState::seeded(None, None);
        assert!(!theme.is_dark());
    }

    #[test]
    fn system_changes_stop_applying_after_toggle() {
        let mut theme = ThemeState::seeded(Some(false), None);
        theme.sync_with_system(true);
        assert!(theme.is_dark(), "untouched state follows the device");

        theme.toggle();
        assert!(!theme.is_dark());
        theme.sync_with_system(true);
        assert!(!theme.is_dark(), "explicit choice sticks");
    }
}
