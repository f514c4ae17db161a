//! Page footer: identity recap, link columns, and the copyright line.

use egui::RichText;
use rfolio::content;
use rfolio::theme::spacing;
use rfolio::Palette;

pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    egui::Frame::default()
        .fill(palette.surface)
        .inner_margin(egui::Margin::symmetric(16, 32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(RichText::new(content::NAME).size(20.0).strong().color(palette.text));
            ui.label(
                RichText::new(format!("{} | {}", content::TAGLINE, content::HERO_SUBTITLE))
                    .size(14.0)
                    .color(palette.text_secondary),
            );

            ui.add_space(spacing::XL);
            ui.separator();
            ui.add_space(spacing::XL);

            ui.columns(content::FOOTER_LINK_COLUMNS.len(), |columns| {
                for (column, (title, links)) in
                    columns.iter_mut().zip(content::FOOTER_LINK_COLUMNS)
                {
                    column.label(RichText::new(title).size(12.0).strong().color(palette.text));
                    column.add_space(spacing::MD);
                    for link in links {
                        column.label(RichText::new(link).size(14.0).color(palette.accent));
                        column.add_space(spacing::SM);
                    }
                }
            });

            ui.add_space(spacing::XL);
            ui.separator();
            ui.add_space(spacing::XL);

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(content::COPYRIGHT)
                        .size(14.0)
                        .strong()
                        .color(palette.text_secondary),
                );
                ui.add_space(spacing::SM);
                ui.label(RichText::new(content::CREDIT).size(14.0).color(palette.text_tertiary));
            });
        });
}
