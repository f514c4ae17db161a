//! Bio section: the "About Me" card with stat boxes.

use crate::ui::sections::card_frame;
use egui::RichText;
use rfolio::content;
use rfolio::theme::spacing;
use rfolio::Palette;

pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(spacing::XL);

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new("About Me").size(24.0).strong().color(palette.text));
        ui.add_space(spacing::LG);

        for (i, paragraph) in content::BIO_PARAGRAPHS.iter().enumerate() {
            if i > 0 {
                ui.add_space(spacing::MD);
            }
            ui.label(RichText::new(*paragraph).size(16.0).color(palette.text_secondary));
        }

        ui.add_space(spacing::XL);

        ui.columns(content::STATS.len(), |columns| {
            for (column, stat) in columns.iter_mut().zip(content::STATS) {
                egui::Frame::default()
                    .fill(palette.accent_lighter)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 16))
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(stat.value).size(28.0).strong().color(palette.accent),
                            );
                            ui.label(
                                RichText::new(stat.label).size(14.0).color(palette.text_secondary),
                            );
                        });
                    });
            }
        });
    });

    ui.add_space(spacing::XL);
}
