//! Hero section: avatar, name, and tagline.

use egui::{Align2, FontId, RichText, Sense, Stroke};
use rfolio::content;
use rfolio::theme::spacing;
use rfolio::Palette;

const AVATAR_RADIUS: f32 = 60.0;

pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::XXL);

        // Circular avatar with initials
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(AVATAR_RADIUS * 2.0, AVATAR_RADIUS * 2.0),
            Sense::hover(),
        );
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_RADIUS, palette.accent_lighter);
        painter.circle_stroke(rect.center(), AVATAR_RADIUS, Stroke::new(3.0, palette.accent));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            content::INITIALS,
            FontId::proportional(40.0),
            palette.accent,
        );

        ui.add_space(spacing::XL);
        ui.label(RichText::new(content::NAME).size(32.0).strong().color(palette.text));

        ui.add_space(spacing::MD);
        ui.label(
            RichText::new(format!("{}\n{}", content::HERO_SUBTITLE, content::TAGLINE))
                .size(20.0)
                .color(palette.text_secondary),
        );

        ui.add_space(spacing::LG);
        ui.label(RichText::new(content::HERO_BLURB).size(16.0).color(palette.text_tertiary));

        ui.add_space(spacing::XXL);
    });
}
