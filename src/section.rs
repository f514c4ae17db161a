//! Section identifiers for the portfolio page.
//!
//! The page is a fixed vertical stack of named sections. The set is small and
//! closed; the navigation bar exposes a subset of it.

/// Identifier of one vertically-stacked content block on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    Bio,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    /// All sections, in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Bio,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Display label used by the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::Bio => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }
}

/// Sections reachable from the navigation bar, in display order.
pub const NAV_SECTIONS: [SectionId; 4] = [
    SectionId::Bio,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_sections_are_unique() {
        let set: HashSet<_> = SectionId::ALL.iter().collect();
        assert_eq!(set.len(), SectionId::ALL.len());
    }

    #[test]
    fn nav_sections_are_drawn_from_the_full_set() {
        for section in NAV_SECTIONS {
            assert!(SectionId::ALL.contains(&section));
        }
    }

    #[test]
    fn default_section_is_first_in_page_order() {
        assert_eq!(SectionId::default(), SectionId::ALL[0]);
    }
}
