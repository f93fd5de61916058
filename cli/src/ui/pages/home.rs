//! Home page component
//!
//! Hero, quick stats, and outbound links. Sections mount in a stagger as the
//! entrance animation progresses.

use crate::ui::animation::SECTION_STAGGER;
use crate::ui::components::Wordmark;
use crate::ui::text::{button_width, pad_center};
use crate::ui::theme;
use folio_core::content;
use iocraft::prelude::*;

/// Properties for the home page component
#[derive(Props)]
pub struct HomePageProps {
    /// Entrance animation progress, 1.0 = fully revealed
    pub reveal: f64,
}

impl Default for HomePageProps {
    fn default() -> Self {
        Self { reveal: 1.0 }
    }
}

/// Home page component with hero, quick stats, and outbound links
#[component]
pub fn HomePage(_hooks: Hooks, props: &HomePageProps) -> impl Into<AnyElement<'static>> {
    let cta_width = button_width(&content::CALLS_TO_ACTION, 3);

    element! {
        View(
            key: "home-page",
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: 2,
            gap: 1,
        ) {
            // Hero section
            Wordmark
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: content::HERO.headline_lead,
                    weight: Weight::Bold,
                    color: theme::TEXT,
                )
                Text(
                    content: content::HERO.headline_accent,
                    weight: Weight::Bold,
                    color: theme::ACCENT,
                )
            }
            Text(content: content::HERO.tagline, color: theme::MUTED)
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(content::CALLS_TO_ACTION.iter().map(|label| {
                    element! {
                        View(
                            key: *label,
                            border_style: BorderStyle::Round,
                            border_color: theme::ACCENT,
                        ) {
                            Text(
                                content: pad_center(label, cta_width),
                                weight: Weight::Bold,
                            )
                        }
                    }
                }).collect::<Vec<_>>())
            }

            // Quick stats
            #(if props.reveal >= SECTION_STAGGER[1] {
                Some(element! {
                    View(
                        key: "quick-stats",
                        flex_direction: FlexDirection::Row,
                        gap: 2,
                        margin_top: 1,
                    ) {
                        #(content::HIGHLIGHTS.iter().map(|highlight| {
                            element! {
                                View(
                                    key: highlight.label,
                                    flex_direction: FlexDirection::Column,
                                    align_items: AlignItems::Center,
                                    border_style: BorderStyle::Single,
                                    border_color: theme::MUTED,
                                    padding_left: 2,
                                    padding_right: 2,
                                ) {
                                    Text(
                                        content: highlight.value,
                                        weight: Weight::Bold,
                                        color: theme::ACCENT,
                                    )
                                    Text(content: highlight.label, color: theme::MUTED)
                                }
                            }
                        }).collect::<Vec<_>>())
                    }
                })
            } else {
                None
            })

            // Outbound links
            #(if props.reveal >= SECTION_STAGGER[2] {
                Some(element! {
                    View(
                        key: "connect",
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        margin_top: 1,
                    ) {
                        Text(content: content::CONNECT_HEADING, weight: Weight::Bold)
                        #(content::SOCIAL_LINKS.iter().map(|link| {
                            element! {
                                View(key: link.label, flex_direction: FlexDirection::Row, gap: 2) {
                                    Text(content: link.label, weight: Weight::Bold)
                                    Text(content: link.href, color: theme::MUTED)
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
