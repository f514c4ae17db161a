//! Theme support module for the Folio GUI
//!
//! This module defines the two color palettes (light and dark) used by the
//! portfolio page, along with the mapping from palette roles onto egui visuals.
//! There are exactly two palettes; every themed value in the application is a
//! pure function of the dark-mode flag.
//!
//! # Examples
//!
//! ```
//! use rfolio::theme::palette;
//!
//! let dark = palette(true);
//! println!("Dark background: {:?}", dark.background);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;

/// Complete color palette for one theme, covering all page elements.
///
/// The role set mirrors the portfolio's design tokens: backgrounds, a
/// three-step text hierarchy, accent tints, and hairline colors.
#[derive(Debug, Clone)]
pub struct Palette {
    // Background colors
    pub background: Color32,
    pub surface: Color32,
    pub surface_elevated: Color32,

    // Text hierarchy
    pub text: Color32,
    pub text_secondary: Color32,
    pub text_tertiary: Color32,

    // Accent and tints
    pub accent: Color32,
    pub accent_light: Color32,
    pub accent_lighter: Color32,

    // Hairlines
    pub border: Color32,
    pub divider: Color32,

    // Status colors
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

static LIGHT: Lazy<Palette> = Lazy::new(light_palette);
static DARK: Lazy<Palette> = Lazy::new(dark_palette);

/// Selects one of the two static palettes.
///
/// This is the only way palette colors reach the rest of the application;
/// there is no partial or blended state between the two.
pub fn palette(is_dark: bool) -> &'static Palette {
    if is_dark { &DARK } else { &LIGHT }
}

impl Palette {
    /// Applies this palette's colors to egui visuals.
    ///
    /// The base `Visuals` (light or dark) should match the palette so that
    /// widget roundings, shadows and other unthemed details stay coherent.
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        // Backgrounds
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface_elevated;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.divider;

        // Text
        visuals.override_text_color = Some(self.text);

        // Selection
        visuals.selection.bg_fill = self.accent_light;
        visuals.selection.stroke.color = self.accent;

        // Widgets
        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.hovered.bg_fill = self.divider;
        visuals.widgets.active.bg_fill = self.accent_light;

        // Links and status colors
        visuals.hyperlink_color = self.accent;
        visuals.error_fg_color = self.error;
        visuals.warn_fg_color = self.warning;
    }
}

/// Creates the light palette.
fn light_palette() -> Palette {
    Palette {
        background: hex_to_color32("#FFFFFF"),
        surface: hex_to_color32("#F8F9FA"),
        surface_elevated: hex_to_color32("#FFFFFF"),

        text: hex_to_color32("#1A1A1A"),
        text_secondary: hex_to_color32("#6B7280"),
        text_tertiary: hex_to_color32("#9CA3AF"),

        accent: hex_to_color32("#3B82F6"),
        accent_light: hex_to_color32("#DBEAFE"),
        accent_lighter: hex_to_color32("#EFF6FF"),

        border: hex_to_color32("#E5E7EB"),
        divider: hex_to_color32("#F3F4F6"),

        success: hex_to_color32("#10B981"),
        warning: hex_to_color32("#F59E0B"),
        error: hex_to_color32("#EF4444"),
    }
}

/// Creates the dark palette (slate backgrounds, lightened accent).
fn dark_palette() -> Palette {
    Palette {
        background: hex_to_color32("#0F172A"),
        surface: hex_to_color32("#1E293B"),
        surface_elevated: hex_to_color32("#334155"),

        text: hex_to_color32("#F1F5F9"),
        text_secondary: hex_to_color32("#94A3B8"),
        text_tertiary: hex_to_color32("#64748B"),

        accent: hex_to_color32("#60A5FA"),
        accent_light: hex_to_color32("#1E3A8A"),
        accent_lighter: hex_to_color32("#0C2340"),

        border: hex_to_color32("#334155"),
        divider: hex_to_color32("#1E293B"),

        success: hex_to_color32("#34D399"),
        warning: hex_to_color32("#FBBF24"),
        error: hex_to_color32("#F87171"),
    }
}

/// Converts a hex color string (like "#0F172A") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Spacing scale in layout units, shared by all page sections.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const XXL: f32 = 32.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_distinct_and_stable() {
        let light = palette(false);
        let dark = palette(true);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
        // Repeated selection yields the same static instance
        assert!(std::ptr::eq(light, palette(false)));
        assert!(std::ptr::eq(dark, palette(true)));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#FFFFFF"), Color32::from_rgb(255, 255, 255));
        assert_eq!(hex_to_color32("0F172A"), Color32::from_rgb(15, 23, 42));
        // Malformed input falls back to black
        assert_eq!(hex_to_color32("#FFF"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn visuals_take_palette_colors() {
        let mut visuals = egui::Visuals::dark();
        let dark = palette(true);
        dark.apply_to_visuals(&mut visuals);
        assert_eq!(visuals.panel_fill, dark.background);
        assert_eq!(visuals.override_text_color, Some(dark.text));
        assert_eq!(visuals.hyperlink_color, dark.accent);
    }
}
