//! Panel orchestration and layout management.
//!
//! Coordinates the sticky panels (header, navigation bar) and the scrollable
//! page content, and funnels interactions that need coordinator logic back to
//! the application.

use crate::app::AppState;
use crate::ui::{content, header, nav_bar};
use rfolio::SectionId;

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// A navigation-bar link was clicked
    SectionLinkClicked(SectionId),
    /// The theme toggle was clicked
    ThemeToggleClicked,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let palette = state.theme.palette();

        // Sticky identity header
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::default().fill(palette.background))
            .show(ctx, |ui| {
                if let Some(header::HeaderInteraction::ThemeToggleClicked) =
                    header::render_header(ui, state)
                {
                    interaction = Some(PanelInteraction::ThemeToggleClicked);
                }
            });

        // Sticky section navigation
        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::default().fill(palette.background))
            .show(ctx, |ui| {
                if let Some(section) = nav_bar::render_nav_bar(ui, state) {
                    interaction = Some(PanelInteraction::SectionLinkClicked(section));
                }
            });

        // Scrollable page content
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(palette.background))
            .show(ctx, |ui| {
                content::render_page(ui, state);
            });

        interaction
    }
}
