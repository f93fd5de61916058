//! About page component

use crate::ui::animation::SECTION_STAGGER;
use crate::ui::theme;
use folio_core::content;
use iocraft::prelude::*;

/// Properties for the about page component
#[derive(Props)]
pub struct AboutPageProps {
    /// Entrance animation progress, 1.0 = fully revealed
    pub reveal: f64,
}

impl Default for AboutPageProps {
    fn default() -> Self {
        Self { reveal: 1.0 }
    }
}

#[component]
pub fn AboutPage(_hooks: Hooks, props: &AboutPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "about-page",
            flex_direction: FlexDirection::Column,
            padding: 2,
            gap: 1,
        ) {
            Text(content: content::ABOUT.heading, weight: Weight::Bold, color: theme::ACCENT)
            #(if props.reveal >= SECTION_STAGGER[1] {
                Some(element! {
                    Text(content: content::ABOUT.body, color: theme::TEXT)
                })
            } else {
                None
            })
        }
    }
}
