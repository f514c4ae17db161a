//! Projects section: a horizontally scrollable row of project cards.

use crate::ui::sections::{card_frame, section_title};
use egui::{Color32, RichText};
use rfolio::content;
use rfolio::theme::spacing;
use rfolio::Palette;

const CARD_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(spacing::XXL);
    section_title(ui, palette, "Projects");

    egui::ScrollArea::horizontal()
        .id_salt("projects_scroll")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = spacing::LG;
                for project in content::PROJECTS {
                    card_frame(palette).show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.label(
                            RichText::new(project.title).size(20.0).strong().color(palette.text),
                        );
                        ui.add_space(spacing::MD);
                        ui.label(
                            RichText::new(project.description)
                                .size(14.0)
                                .color(palette.text_secondary),
                        );
                        ui.add_space(spacing::MD);
                        let view = egui::Button::new(
                            RichText::new("View Project").color(Color32::WHITE).strong(),
                        )
                        .fill(palette.accent)
                        .corner_radius(8.0);
                        // Placeholder action, as in the source portfolio
                        let _ = ui.add(view);
                    });
                }
            });
        });

    ui.add_space(spacing::XXL);
}
