//! Skills filter state.
//!
//! Tracks which skill category the user selected in the skills section. The
//! selection is persisted as a setting and restored at startup.

use rfolio::SkillCategory;

/// State of the skills category filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsState {
    active_category: SkillCategory,
}

impl SkillsState {
    /// Creates a skills state showing all skills.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a skills state with a specific category selected.
    pub fn with_category(category: SkillCategory) -> Self {
        Self {
            active_category: category,
        }
    }

    /// Returns the currently selected category.
    pub fn active_category(&self) -> SkillCategory {
        self.active_category
    }

    /// Selects a category.
    pub fn set_category(&mut self, category: SkillCategory) {
        self.active_category = category;
    }
}
