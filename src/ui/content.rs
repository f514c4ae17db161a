//! Scrollable page content rendering.
//!
//! Owns the vertical scroll surface: pins the scroll offset from
//! `ScrollState`, stacks the sections, measures each section's top edge and
//! reports it to the navigator, then adopts whatever offset the scroll area
//! actually applied (user input included).

use crate::app::AppState;
use crate::ui::sections::{bio, contact, footer, hero, projects, skills};
use rfolio::SectionId;

/// Renders the scrollable page inside the central panel.
pub fn render_page(ui: &mut egui::Ui, state: &mut AppState) {
    let output = egui::ScrollArea::vertical()
        .id_salt("page_scroll")
        .auto_shrink([false, false])
        .vertical_scroll_offset(state.scroll.offset())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Section offsets are measured from the top of the scroll
            // content, not the viewport, so scrolling does not shift them.
            let origin = ui.cursor().top();

            for section in SectionId::ALL {
                let y = ui.cursor().top() - origin;
                state.navigator.record_layout(section, y);
                render_section(ui, state, section);
            }
        });

    state.scroll.sync_from_ui(output.state.offset.y);
}

fn render_section(ui: &mut egui::Ui, state: &mut AppState, section: SectionId) {
    let palette = state.theme.palette();

    // The footer is full-bleed; every other section gets gutter margins.
    if section == SectionId::Footer {
        footer::render(ui, palette);
        return;
    }

    egui::Frame::default()
        .inner_margin(egui::Margin::symmetric(16, 0))
        .show(ui, |ui| match section {
            SectionId::Hero => hero::render(ui, palette),
            SectionId::Bio => bio::render(ui, palette),
            SectionId::Skills => skills::render(ui, palette, &mut state.skills),
            SectionId::Projects => projects::render(ui, palette),
            SectionId::Contact => contact::render(ui, palette),
            SectionId::Footer => {}
        });
}
