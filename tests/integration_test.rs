use rfolio::{content, hex_to_color32, palette, SectionId, SectionNavigator, SkillCategory};
use rfolio::{NAV_SECTIONS, TOP_MARGIN};
use anyhow::Result;

#[test]
fn test_navigate_before_any_layout_report_targets_top() {
    let mut nav = SectionNavigator::new();

    // Every section in the fixed set resolves to the 0 fallback
    for section in SectionId::ALL {
        let target = nav.navigate(section);
        assert_eq!(target, 0.0, "{section:?} should fall back to the top");
        assert_eq!(nav.active_section(), section);
    }
}

#[test]
fn test_navigation_target_math() {
    let mut nav = SectionNavigator::new();

    // Documented examples: y = 10 clamps to 0, y = 500 lands at 484
    nav.record_layout(SectionId::Skills, 10.0);
    assert_eq!(nav.navigate(SectionId::Skills), 0.0);

    nav.record_layout(SectionId::Skills, 500.0);
    assert_eq!(nav.navigate(SectionId::Skills), 500.0 - TOP_MARGIN);
    assert_eq!(nav.navigate(SectionId::Skills), 484.0);
}

#[test]
fn test_layout_reports_replace_not_merge() {
    let mut nav = SectionNavigator::new();

    nav.record_layout(SectionId::Contact, 100.0);
    nav.record_layout(SectionId::Contact, 200.0);
    assert_eq!(nav.navigate(SectionId::Contact), 200.0 - TOP_MARGIN);

    // Idempotent per identical input
    nav.record_layout(SectionId::Contact, 200.0);
    assert_eq!(nav.navigate(SectionId::Contact), 200.0 - TOP_MARGIN);
}

#[test]
fn test_sections_own_independent_keys() {
    let mut nav = SectionNavigator::new();

    // Reports arriving in arbitrary order never disturb other keys
    nav.record_layout(SectionId::Footer, 2400.0);
    nav.record_layout(SectionId::Hero, 0.0);
    nav.record_layout(SectionId::Projects, 1200.0);

    assert_eq!(nav.offset(SectionId::Footer), 2400.0);
    assert_eq!(nav.offset(SectionId::Projects), 1200.0);
    assert_eq!(nav.offset(SectionId::Bio), 0.0);
}

#[test]
fn test_active_section_tracks_last_request_only() {
    let mut nav = SectionNavigator::new();
    assert_eq!(nav.active_section(), SectionId::Hero);

    nav.navigate(SectionId::Projects);
    nav.navigate(SectionId::Bio);
    assert_eq!(nav.active_section(), SectionId::Bio);

    // A layout report does not change the active section
    nav.record_layout(SectionId::Contact, 800.0);
    assert_eq!(nav.active_section(), SectionId::Bio);
}

#[test]
fn test_palette_selection_is_total_and_pure() {
    let light = palette(false);
    let dark = palette(true);

    // Exactly two palettes, never blended: repeated selection is identical
    assert!(std::ptr::eq(light, palette(false)));
    assert!(std::ptr::eq(dark, palette(true)));
    assert_ne!(light.background, dark.background);

    // Spot-check against the design tokens
    assert_eq!(light.background, hex_to_color32("#FFFFFF"));
    assert_eq!(dark.background, hex_to_color32("#0F172A"));
    assert_eq!(light.accent, hex_to_color32("#3B82F6"));
    assert_eq!(dark.accent, hex_to_color32("#60A5FA"));
}

#[test]
fn test_nav_bar_sections_are_valid_targets() {
    let mut nav = SectionNavigator::new();
    for section in NAV_SECTIONS {
        assert!(SectionId::ALL.contains(&section));
        assert!(!section.label().is_empty());
        nav.navigate(section);
        assert_eq!(nav.active_section(), section);
    }
}

#[test]
fn test_skill_categories_cover_content() -> Result<()> {
    for category in SkillCategory::ALL_CATEGORIES {
        assert!(!category.skills().is_empty());

        // Categories are stable identifiers when persisted
        let json = serde_json::to_string(&category)?;
        let back: SkillCategory = serde_json::from_str(&json)?;
        assert_eq!(back, category);
    }

    for skill in SkillCategory::Frontend.skills() {
        assert!(SkillCategory::All.skills().contains(skill));
    }
    Ok(())
}

#[test]
fn test_static_content_is_complete() {
    assert!(!content::NAME.is_empty());
    assert_eq!(content::PROJECTS.len(), 4);
    assert_eq!(content::CONTACT_LINKS.len(), 3);
    for project in content::PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
    }
}
