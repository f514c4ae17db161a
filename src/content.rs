//! Static page content: profile identity, bio, skills, projects and
//! contact links.
//!
//! Everything here is plain data consumed by the section renderers. The
//! only behavior is skill-category selection, which the GUI persists as a
//! user setting.

use serde::{Deserialize, Serialize};

// ===== Profile =====

pub const NAME: &str = "Eduard King Anterola";
pub const SHORT_NAME: &str = "Eduard King";
pub const TAGLINE: &str = "Aspiring Software Engineer";
pub const HERO_SUBTITLE: &str = "3rd Year Computer Science Student";
pub const HERO_BLURB: &str = "Passionate on developing useful and efficient \
software solutions to make life easier and more enjoyable.";

/// Initials drawn in the hero avatar circle.
pub const INITIALS: &str = "EA";

pub const BIO_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate Computer Science student with a strong foundation in \
     full-stack development. I specialize in creating seamless, user-centric \
     applications using modern technologies like React Native, TypeScript, \
     and Node.js.",
    "My approach combines technical excellence with design thinking, ensuring \
     every solution is both powerful and delightful to use. I'm always eager \
     to learn new technologies and solve challenging problems.",
];

/// One highlighted figure in the bio card.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "5+", label: "Projects" },
    Stat { value: "20+", label: "Skills" },
    Stat { value: "10+", label: "Months Experience" },
];

// ===== Skills =====

/// Skill filter categories shown above the chip grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    All,
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL_CATEGORIES: [SkillCategory; 4] = [
        SkillCategory::All,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::All => "All",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::All => "⭐",
            SkillCategory::Frontend => "🎨",
            SkillCategory::Backend => "⚙",
            SkillCategory::Tools => "🛠",
        }
    }

    /// Skills belonging to this category.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            SkillCategory::All => &ALL_SKILLS,
            SkillCategory::Frontend => &FRONTEND_SKILLS,
            SkillCategory::Backend => &BACKEND_SKILLS,
            SkillCategory::Tools => &TOOL_SKILLS,
        }
    }
}

pub const FRONTEND_SKILLS: [&str; 8] = [
    "React Native",
    "React",
    "TypeScript",
    "JavaScript",
    "CSS-in-JS",
    "Tailwind CSS",
    "UI/UX Design",
    "Figma",
];

pub const BACKEND_SKILLS: [&str; 6] = [
    "Node.js",
    "Express.js",
    "RESTful APIs",
    "MongoDB",
    "C++",
    "Next.js",
];

pub const TOOL_SKILLS: [&str; 6] = [
    "Expo",
    "Git",
    "GitHub",
    "GitHub Workflows",
    "Postman",
    "Bun",
];

pub const ALL_SKILLS: [&str; 20] = [
    "React Native",
    "React",
    "TypeScript",
    "JavaScript",
    "CSS-in-JS",
    "Tailwind CSS",
    "UI/UX Design",
    "Figma",
    "Node.js",
    "Express.js",
    "RESTful APIs",
    "MongoDB",
    "C++",
    "Next.js",
    "Expo",
    "Git",
    "GitHub",
    "GitHub Workflows",
    "Postman",
    "Bun",
];

// ===== Projects =====

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce App",
        description: "A full-featured mobile shopping application with payment integration",
    },
    Project {
        title: "Task Manager",
        description: "Real-time task management app with cloud synchronization",
    },
    Project {
        title: "Social Network",
        description: "Connect with friends, share moments, and build communities",
    },
    Project {
        title: "Fitness Tracker",
        description: "Monitor health metrics and achieve your fitness goals",
    },
];

// ===== Contact =====

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub url: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        icon: "✉",
        value: "eduardkinganterola@gmail.com",
        url: "mailto:eduardkinganterola@gmail.com",
    },
    ContactLink {
        label: "GitHub",
        icon: "🔗",
        value: "Eduard-K-A",
        url: "https://github.com/Eduard-K-A",
    },
    ContactLink {
        label: "LinkedIn",
        icon: "💼",
        value: "Eduard King Anterola",
        url: "https://www.linkedin.com/in/eduard-king-anterola",
    },
];

pub const CONTACT_TITLE: &str = "Get In Touch";
pub const CONTACT_SUBTITLE: &str = "Let's connect and create something amazing together";

// ===== Footer =====

pub const FOOTER_LINK_COLUMNS: [(&str, [&str; 2]); 2] = [
    ("Links", ["GitHub", "LinkedIn"]),
    ("Services", ["Web Development", "UI/UX Design"]),
];

pub const COPYRIGHT: &str = "© 2026 Eduard King. All rights reserved.";
pub const CREDIT: &str = "Designed and built with Rust and egui";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lists_partition_all() {
        // Every category is a non-empty subset of the complete list
        for category in [SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Tools] {
            assert!(!category.skills().is_empty());
            for skill in category.skills() {
                assert!(ALL_SKILLS.contains(skill), "{skill} missing from ALL_SKILLS");
            }
        }
        assert_eq!(
            ALL_SKILLS.len(),
            FRONTEND_SKILLS.len() + BACKEND_SKILLS.len() + TOOL_SKILLS.len()
        );
    }

    #[test]
    fn default_category_is_all() {
        assert_eq!(SkillCategory::default(), SkillCategory::All);
        assert_eq!(SkillCategory::All.skills().len(), ALL_SKILLS.len());
    }

    #[test]
    fn skill_category_round_trips_through_json() {
        for category in SkillCategory::ALL_CATEGORIES {
            let json = serde_json::to_string(&category).unwrap();
            let back: SkillCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn contact_links_have_openable_urls() {
        for link in CONTACT_LINKS {
            assert!(
                link.url.starts_with("https://") || link.url.starts_with("mailto:"),
                "unexpected URL scheme: {}",
                link.url
            );
        }
    }
}
