//! Section renderers for the portfolio page.
//!
//! One module per content block, in page order. Each renderer reads the
//! active palette and the static content; only the skills section carries
//! interactive state.

pub mod bio;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use egui::RichText;
use rfolio::theme::spacing;
use rfolio::Palette;

/// Large section heading.
pub(crate) fn section_title(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(RichText::new(text).size(28.0).strong().color(palette.text));
    ui.add_space(spacing::LG);
}

/// Bordered card on the section surface color.
pub(crate) fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::default()
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(24))
}
