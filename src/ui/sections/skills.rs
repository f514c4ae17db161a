//! Skills section: category filter buttons and the skill chip grid.

use crate::state::SkillsState;
use crate::ui::sections::section_title;
use egui::{Color32, RichText, Stroke};
use rfolio::theme::spacing;
use rfolio::{Palette, SkillCategory};

pub fn render(ui: &mut egui::Ui, palette: &Palette, skills: &mut SkillsState) {
    ui.add_space(spacing::XXL);
    section_title(ui, palette, "Technical Skills");

    // Category filter row
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing::MD;
        for category in SkillCategory::ALL_CATEGORIES {
            let is_active = skills.active_category() == category;

            let label = format!("{} {}", category.icon(), category.label());
            let text = if is_active {
                RichText::new(label).color(Color32::WHITE).strong()
            } else {
                RichText::new(label).color(palette.text_secondary)
            };
            let button = egui::Button::new(text)
                .fill(if is_active { palette.accent } else { palette.background })
                .stroke(Stroke::new(
                    1.5,
                    if is_active { palette.accent } else { palette.border },
                ))
                .corner_radius(24.0);

            if ui.add(button).clicked() {
                skills.set_category(category);
            }
        }
    });

    ui.add_space(spacing::XL);

    // Skill chips for the active category
    let current_skills = skills.active_category().skills();
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(spacing::MD, spacing::MD);
        for skill in current_skills {
            egui::Frame::default()
                .fill(palette.accent_light)
                .stroke(Stroke::new(1.0, palette.accent))
                .corner_radius(24.0)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.label(RichText::new(*skill).size(14.0).color(palette.accent));
                });
        }
    });

    ui.add_space(spacing::LG);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("{} skills", current_skills.len()))
                .size(14.0)
                .color(palette.text_tertiary),
        );
    });
    ui.add_space(spacing::XXL);
}
