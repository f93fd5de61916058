//! Site header component
//!
//! The header is the navigation collaborator of the shell: it shows the
//! site's own name (pointing at the root path) and one entry per route
//! table entry, with the active page highlighted.

use crate::ui::theme;
use folio_core::content;
use folio_core::route::{routes, Page};
use iocraft::prelude::*;

/// One link the header renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
    pub page: Page,
}

/// Navigation entries, derived 1:1 from the route table, in table order.
pub fn nav_entries() -> Vec<NavEntry> {
    routes()
        .iter()
        .map(|route| NavEntry {
            label: route.label,
            target: route.path,
            page: route.page,
        })
        .collect()
}

/// The brand link: the site's own name, pointing at the root path.
pub fn brand_entry() -> NavEntry {
    NavEntry {
        label: content::SITE_NAME,
        target: Page::Home.path(),
        page: Page::Home,
    }
}

/// Properties for the header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Page to highlight; `None` when the fallback page is mounted
    pub active: Option<Page>,
}

/// Header component with the brand and the navigation entries
#[component]
pub fn Header(_hooks: Hooks, props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let active = props.active;

    element! {
        View(
            key: "site-header",
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
            border_style: BorderStyle::Single,
            border_color: theme::MUTED,
        ) {
            Text(
                content: brand_entry().label,
                weight: Weight::Bold,
                color: theme::ACCENT,
            )
            View(flex_direction: FlexDirection::Row, gap: 3) {
                #(nav_entries().into_iter().enumerate().map(|(i, entry)| {
                    let is_active = active == Some(entry.page);
                    element! {
                        Text(
                            key: entry.target,
                            content: format!("[{}] {}", i + 1, entry.label),
                            color: if is_active { theme::ACCENT } else { theme::TEXT },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_entries_match_route_table() {
        let entries = nav_entries();
        let table = routes();
        assert_eq!(entries.len(), table.len());
        for (entry, route) in entries.iter().zip(table.iter()) {
            assert_eq!(entry.label, route.label);
            assert_eq!(entry.target, route.path);
            assert_eq!(entry.page, route.page);
        }
    }

    #[test]
    fn test_brand_entry_targets_root() {
        let brand = brand_entry();
        assert_eq!(brand.target, "/");
        assert_eq!(brand.label, "Portfolio");
    }

    #[test]
    fn test_nav_entry_labels() {
        let labels: Vec<&str> = nav_entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Home", "About", "Projects", "Contact"]);
    }
}
