//! Section layout tracking and scroll navigation.
//!
//! This module owns the mapping from section identifiers to their measured
//! vertical positions within the scrollable page, plus the most recently
//! requested navigation target. Rendering code reports each section's top
//! edge after layout; the navigation bar asks for a scroll target by section.

use crate::section::SectionId;
use crate::theme::spacing;
use std::collections::HashMap;

/// Fixed offset subtracted from a navigation target so the destination
/// section is not flush against the top of the viewport.
pub const TOP_MARGIN: f32 = spacing::LG;

/// Tracks where each section sits in the scrollable content and which
/// section was last navigated to.
///
/// Responsibilities:
/// - Storing the last reported Y offset per section (every section always
///   has an entry; unreported sections read as 0)
/// - Tracking the active (last navigated-to) section
/// - Computing clamped scroll targets
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    /// Last reported top-edge Y offset per section, in layout units
    offsets: HashMap<SectionId, f32>,
    /// Section most recently requested via `navigate`
    active: SectionId,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    /// Creates a navigator with every section at offset 0 and the first
    /// page section active.
    pub fn new() -> Self {
        let offsets = SectionId::ALL.iter().map(|&s| (s, 0.0)).collect();
        Self {
            offsets,
            active: SectionId::default(),
        }
    }

    // ===== Queries =====

    /// Returns the last reported offset for a section, or 0 if none has
    /// been reported yet.
    pub fn offset(&self, section: SectionId) -> f32 {
        self.offsets.get(&section).copied().unwrap_or(0.0)
    }

    /// Returns the section most recently navigated to.
    ///
    /// This is the last explicit navigation target, not necessarily the
    /// section currently on screen.
    pub fn active_section(&self) -> SectionId {
        self.active
    }

    // ===== Mutations =====

    /// Records a section's measured top-edge Y offset.
    ///
    /// Called whenever the section's geometry is (re-)established. The
    /// stored value is replaced unconditionally; repeated identical calls
    /// are no-ops. Offsets are non-negative, so negative measurements are
    /// clamped to 0.
    pub fn record_layout(&mut self, section: SectionId, y: f32) {
        self.offsets.insert(section, y.max(0.0));
    }

    /// Marks a section active and returns the scroll target that brings it
    /// into view: `max(0, offset - TOP_MARGIN)`.
    ///
    /// Never fails: a section whose layout was never reported resolves via
    /// the stored 0 offset, which scrolls to the top of the page.
    pub fn navigate(&mut self, section: SectionId) -> f32 {
        self.active = section;
        (self.offset(section) - TOP_MARGIN).max(0.0)
    }
}
