//! Contact page component

use crate::ui::animation::SECTION_STAGGER;
use crate::ui::theme;
use folio_core::content;
use iocraft::prelude::*;

/// Properties for the contact page component
#[derive(Props)]
pub struct ContactPageProps {
    /// Entrance animation progress, 1.0 = fully revealed
    pub reveal: f64,
}

impl Default for ContactPageProps {
    fn default() -> Self {
        Self { reveal: 1.0 }
    }
}

#[component]
pub fn ContactPage(_hooks: Hooks, props: &ContactPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "contact-page",
            flex_direction: FlexDirection::Column,
            padding: 2,
            gap: 1,
        ) {
            Text(content: content::CONTACT.heading, weight: Weight::Bold, color: theme::ACCENT)
            #(if props.reveal >= SECTION_STAGGER[1] {
                Some(element! {
                    Text(content: content::CONTACT.body, color: theme::TEXT)
                })
            } else {
                None
            })
        }
    }
}
