//! Static site content
//!
//! Everything the pages display lives here as compile-time data, so the
//! rendering layer stays a pure function of page identity.

/// Site name, shown in the header brand and the home headline.
pub const SITE_NAME: &str = "Portfolio";

/// Home hero copy. The headline renders as lead + accent ("Welcome to My"
/// followed by the site name in the accent color).
pub struct Hero {
    pub headline_lead: &'static str,
    pub headline_accent: &'static str,
    pub tagline: &'static str,
}

pub const HERO: Hero = Hero {
    headline_lead: "Welcome to My",
    headline_accent: SITE_NAME,
    tagline: "Full-stack developer passionate about creating beautiful, functional, and scalable web applications.",
};

/// Call-to-action labels on the home page. Display only; they trigger no
/// navigation.
pub const CALLS_TO_ACTION: [&str; 2] = ["View Projects", "Get in Touch"];

/// One numeric highlight card on the home page.
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        value: "5+",
        label: "Years Experience",
    },
    Highlight {
        value: "20+",
        label: "Projects Completed",
    },
    Highlight {
        value: "15+",
        label: "Happy Clients",
    },
];

/// Heading above the outbound links on the home page.
pub const CONNECT_HEADING: &str = "Connect With Me";

/// One outbound link on the home page. Targets are opaque strings, passed
/// through unchanged.
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        label: "Email",
        href: "mailto:contact@example.com",
    },
];

/// Heading and body copy for the single-section pages.
pub struct PageCopy {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const ABOUT: PageCopy = PageCopy {
    heading: "About Me",
    body: "I'm a passionate full-stack developer with expertise in modern web technologies.",
};

pub const CONTACT: PageCopy = PageCopy {
    heading: "Contact Me",
    body: "Get in touch with me for collaboration opportunities.",
};

pub const PROJECTS: PageCopy = PageCopy {
    heading: "My Projects",
    body: "A selection of things I've built recently.",
};

/// One entry on the projects page.
pub struct ProjectEntry {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const PROJECT_ENTRIES: [ProjectEntry; 3] = [
    ProjectEntry {
        name: "Task Tracker",
        summary: "Kanban-style task management with real-time sync.",
    },
    ProjectEntry {
        name: "Weather Dashboard",
        summary: "Location-aware forecasts with interactive charts.",
    },
    ProjectEntry {
        name: "Recipe Finder",
        summary: "Ingredient-based search over a community cookbook.",
    },
];

/// Fallback copy for paths outside the route table.
pub const NOT_FOUND: PageCopy = PageCopy {
    heading: "Page Not Found",
    body: "The path you requested is not part of this site.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_values_are_literal() {
        let values: Vec<&str> = HIGHLIGHTS.iter().map(|h| h.value).collect();
        assert_eq!(values, ["5+", "20+", "15+"]);
        for highlight in &HIGHLIGHTS {
            assert!(!highlight.label.is_empty());
        }
    }

    #[test]
    fn test_social_links_have_targets() {
        assert_eq!(SOCIAL_LINKS.len(), 3);
        for link in &SOCIAL_LINKS {
            assert!(!link.href.is_empty());
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn test_one_link_is_a_mailto_address() {
        assert!(SOCIAL_LINKS.iter().any(|l| l.href.starts_with("mailto:")));
    }

    #[test]
    fn test_site_name() {
        assert_eq!(SITE_NAME, "Portfolio");
        assert_eq!(HERO.headline_accent, SITE_NAME);
    }
}
