//! Contact section: labelled links opening in the system handler.

use crate::ui::sections::section_title;
use egui::{RichText, Sense, Stroke};
use rfolio::content;
use rfolio::theme::spacing;
use rfolio::Palette;

pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(spacing::XXL);

    ui.vertical_centered(|ui| {
        section_title(ui, palette, content::CONTACT_TITLE);
        ui.label(
            RichText::new(content::CONTACT_SUBTITLE)
                .size(16.0)
                .color(palette.text_secondary),
        );
    });

    ui.add_space(spacing::XL);

    for link in content::CONTACT_LINKS {
        let response = egui::Frame::default()
            .fill(palette.accent_lighter)
            .stroke(Stroke::new(1.0, palette.accent))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(link.icon).size(24.0));
                    ui.add_space(spacing::MD);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(link.label).size(12.0).strong().color(palette.text),
                        );
                        ui.label(RichText::new(link.value).size(14.0).color(palette.accent));
                    });
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_text(format!("Opens {}", link.label));

        if response.clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(link.url));
        }

        ui.add_space(spacing::MD);
    }

    ui.add_space(spacing::XL);
}
