//! UI rendering modules for the Folio GUI.
//!
//! - `panel_manager` - panel orchestration and interaction funneling
//! - `header` - sticky identity bar with the theme toggle
//! - `nav_bar` - sticky section links with the active indicator
//! - `content` - the vertical scroll surface and section measuring
//! - `sections` - one renderer per page section

pub mod content;
pub mod header;
pub mod nav_bar;
pub mod panel_manager;
pub mod sections;
