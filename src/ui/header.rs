//! Header panel UI rendering
//!
//! Handles the sticky top bar with the identity block and the theme toggle.

use crate::app::AppState;
use egui::{RichText, Stroke};
use rfolio::content;
use rfolio::theme::spacing;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the light/dark toggle
    ThemeToggleClicked,
}

/// Renders the application header with the identity block and theme toggle.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let palette = state.theme.palette();
    let mut interaction = None;

    ui.add_space(spacing::MD);
    ui.horizontal(|ui| {
        ui.add_space(spacing::LG);

        ui.vertical(|ui| {
            ui.label(RichText::new(content::SHORT_NAME).size(20.0).strong().color(palette.text));
            ui.label(RichText::new(content::TAGLINE).size(13.0).color(palette.text_secondary));
        });

        // Toggle pushed to the right edge
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(spacing::LG);

            let (icon, hint) = if state.theme.is_dark() {
                ("☀", "Switch to light mode")
            } else {
                ("🌙", "Switch to dark mode")
            };
            let toggle = egui::Button::new(RichText::new(icon).size(18.0))
                .fill(palette.surface)
                .stroke(Stroke::new(1.5, palette.border))
                .corner_radius(12.0)
                .min_size(egui::vec2(44.0, 44.0));

            if ui.add(toggle).on_hover_text(hint).clicked() {
                interaction = Some(HeaderInteraction::ThemeToggleClicked);
            }
        });
    });
    ui.add_space(spacing::MD);

    interaction
}
