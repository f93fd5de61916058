//! Fallback page for paths outside the route table

use crate::ui::theme;
use folio_core::content;
use folio_core::route::routes;
use iocraft::prelude::*;

/// Properties for the fallback page component
#[derive(Default, Props)]
pub struct NotFoundPageProps {
    /// The path that failed to resolve
    pub path: String,
}

#[component]
pub fn NotFoundPage(_hooks: Hooks, props: &NotFoundPageProps) -> impl Into<AnyElement<'static>> {
    let known: Vec<&str> = routes().iter().map(|route| route.path).collect();

    element! {
        View(
            key: "not-found-page",
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: 2,
            gap: 1,
        ) {
            Text(
                content: content::NOT_FOUND.heading,
                weight: Weight::Bold,
                color: Color::Red,
            )
            Text(content: content::NOT_FOUND.body, color: theme::MUTED)
            #(if props.path.is_empty() {
                None
            } else {
                Some(element! {
                    Text(content: format!("Unknown path: {}", props.path))
                })
            })
            Text(
                content: format!("Known routes: {}", known.join(", ")),
                color: theme::MUTED,
            )
        }
    }
}
