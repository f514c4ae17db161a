//! Navigation bar UI rendering
//!
//! Handles the sticky section-link row. The active link (the last navigation
//! target) renders bold in the accent color with an underline indicator.

use crate::app::AppState;
use egui::{RichText, Sense};
use rfolio::theme::spacing;
use rfolio::{SectionId, NAV_SECTIONS};

/// Width and height of the active-link underline indicator.
const INDICATOR_SIZE: egui::Vec2 = egui::Vec2::new(24.0, 2.0);

/// Renders the navigation links. Returns the section whose link was clicked,
/// if any.
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState) -> Option<SectionId> {
    let palette = state.theme.palette();
    let active = state.navigator.active_section();
    let mut clicked = None;

    ui.add_space(spacing::SM);
    ui.horizontal(|ui| {
        ui.add_space(spacing::LG);
        ui.spacing_mut().item_spacing.x = spacing::XL;

        for section in NAV_SECTIONS {
            let is_active = section == active;
            let text = if is_active {
                RichText::new(section.label()).size(16.0).strong().color(palette.accent)
            } else {
                RichText::new(section.label()).size(16.0).color(palette.text_secondary)
            };

            ui.vertical(|ui| {
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    clicked = Some(section);
                }
                if is_active {
                    let (rect, _) = ui.allocate_exact_size(INDICATOR_SIZE, Sense::hover());
                    ui.painter().rect_filled(rect, 1.0, palette.accent);
                }
            });
        }
    });
    ui.add_space(spacing::SM);

    clicked
}
