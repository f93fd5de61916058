//! Projects page component

use crate::ui::animation::SECTION_STAGGER;
use crate::ui::theme;
use folio_core::content;
use iocraft::prelude::*;

/// Properties for the projects page component
#[derive(Props)]
pub struct ProjectsPageProps {
    /// Entrance animation progress, 1.0 = fully revealed
    pub reveal: f64,
}

impl Default for ProjectsPageProps {
    fn default() -> Self {
        Self { reveal: 1.0 }
    }
}

#[component]
pub fn ProjectsPage(_hooks: Hooks, props: &ProjectsPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "projects-page",
            flex_direction: FlexDirection::Column,
            padding: 2,
            gap: 1,
        ) {
            Text(content: content::PROJECTS.heading, weight: Weight::Bold, color: theme::ACCENT)
            Text(content: content::PROJECTS.body, color: theme::MUTED)
            #(if props.reveal >= SECTION_STAGGER[1] {
                Some(element! {
                    View(flex_direction: FlexDirection::Column, gap: 1, margin_top: 1) {
                        #(content::PROJECT_ENTRIES.iter().map(|entry| {
                            element! {
                                View(
                                    key: entry.name,
                                    flex_direction: FlexDirection::Column,
                                    border_style: BorderStyle::Single,
                                    border_color: theme::MUTED,
                                    padding_left: 1,
                                    padding_right: 1,
                                ) {
                                    Text(content: entry.name, weight: Weight::Bold)
                                    Text(content: entry.summary, color: theme::MUTED)
                                }
                            }
                        }).collect::<Vec<_>>())
                    }
                })
            } else {
                None
            })
        }
    }
}
