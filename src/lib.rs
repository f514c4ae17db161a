pub mod content;
pub mod navigator;
pub mod section;
pub mod theme;

// Export section model
pub use section::{SectionId, NAV_SECTIONS};

// Export the section navigator
pub use navigator::{SectionNavigator, TOP_MARGIN};

// Export theme support
pub use theme::{hex_to_color32, palette, Palette};

// Export static content
pub use content::{ContactLink, Project, SkillCategory, Stat};
