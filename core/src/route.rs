//! Route table and page identifiers
//!
//! This module defines the closed set of pages the site can render and the
//! fixed mapping from URL-style paths to those pages.

use serde::Serialize;

/// Closed set of pages addressable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    /// The path this page is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    /// Navigation label for this page.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route {
    /// Path the entry is mounted at
    pub path: &'static str,
    /// Page the path resolves to
    pub page: Page,
    /// Navigation label
    pub label: &'static str,
}

/// The route table: one entry per page, in navigation order.
///
/// Constructed at compile time and never mutated.
pub fn routes() -> [Route; 4] {
    Page::ALL.map(|page| Route {
        path: page.path(),
        page,
        label: page.label(),
    })
}

/// Resolve a path against the route table.
///
/// Paths match exactly; there is no normalization or prefix matching.
pub fn resolve(path: &str) -> Option<Page> {
    Page::ALL.into_iter().find(|page| page.path() == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(resolve("/"), Some(Page::Home));
        assert_eq!(resolve("/about"), Some(Page::About));
        assert_eq!(resolve("/projects"), Some(Page::Projects));
        assert_eq!(resolve("/contact"), Some(Page::Contact));
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(resolve("/blog"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("about"), None);
        assert_eq!(resolve("/about/"), None);
        assert_eq!(resolve("/About"), None);
    }

    #[test]
    fn test_resolve_is_pure() {
        assert_eq!(resolve("/projects"), resolve("/projects"));
    }

    #[test]
    fn test_only_root_resolves_to_home() {
        for route in routes() {
            if route.page == Page::Home {
                assert_eq!(route.path, "/");
            } else {
                assert_ne!(route.path, "/");
            }
        }
    }

    #[test]
    fn test_route_table_paths_are_unique() {
        let table = routes();
        assert_eq!(table.len(), 4);
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_route_labels_are_non_empty() {
        for route in routes() {
            assert!(!route.label.is_empty());
        }
    }
}
