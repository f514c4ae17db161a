//! Folio GUI Application
//!
//! A single-page portfolio viewer built on the egui framework. The page is
//! one vertical scroll surface of named sections (hero, bio, skills,
//! projects, contact, footer) with:
//! - A sticky navigation bar that smooth-scrolls to sections as they report
//!   their measured positions
//! - A light/dark theme seeded from the device appearance, toggled by the
//!   user, and persisted across restarts
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (theme, scroll, skills filter)
//! - `ui/` - Panel rendering and the per-section renderers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use state::{SkillsState, ThemeState};
use ui::panel_manager::PanelManager;

const SKILLS_FILTER_KEY: &str = "@portfolioApp:skillsFilter";

/// Main application entry point that initializes and launches the Folio GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 900.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
    )
}

/// The main Folio application.
///
/// Delegates most functionality: rendering to `PanelManager`, interaction
/// handling to `ApplicationCoordinator`, and persistence to
/// `ThemeCoordinator`/`SettingsCoordinator`.
struct FolioApp {
    /// Centralized application state
    state: AppState,
}

impl FolioApp {
    /// Creates the application with the theme preference and skills filter
    /// loaded from persistent storage.
    ///
    /// The theme seed comes from the device appearance; a saved preference,
    /// if present and valid, overrides it. Storage problems never prevent
    /// startup.
    fn new(cc: &eframe::CreationContext) -> Self {
        let system_dark = cc
            .egui_ctx
            .system_theme()
            .map(|theme| theme == egui::Theme::Dark);
        let saved = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let skills_filter = SettingsCoordinator::load_setting(cc.storage, SKILLS_FILTER_KEY);

        Self {
            state: AppState::with_settings(
                ThemeState::seeded(system_dark, saved),
                SkillsState::with_category(skills_filter),
            ),
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        frame: &mut eframe::Frame,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::SectionLinkClicked(section) => {
                ApplicationCoordinator::handle_navigate(&mut self.state, section);
            }
            ui::panel_manager::PanelInteraction::ThemeToggleClicked => {
                ApplicationCoordinator::handle_theme_toggle(&mut self.state);
                // Persist the choice right away; the in-memory flip above
                // stands even if no storage backend is available.
                if let Some(storage) = frame.storage_mut() {
                    ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.is_dark());
                }
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.is_dark());
        SettingsCoordinator::save_setting(
            storage,
            SKILLS_FILTER_KEY,
            &self.state.skills.active_category(),
        );
    }

    /// Main update loop: syncs the device appearance, applies the theme,
    /// advances the smooth-scroll animation, and renders all panels.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Re-seed from the device appearance while the user hasn't chosen
        if self.state.theme.follows_system() {
            let system_dark = ctx.system_theme().map(|theme| theme == egui::Theme::Dark);
            ApplicationCoordinator::sync_system_theme(&mut self.state, system_dark);
        }

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Advance any in-flight smooth scroll before the page pins its offset
        if self.state.scroll.animating() {
            let dt = ctx.input(|i| i.stable_dt);
            if ApplicationCoordinator::advance_scroll(&mut self.state, dt) {
                ctx.request_repaint();
            }
        }

        // Render all panels and handle the interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, frame);
        }
    }
}
