//! folio wordmark component
//!
//! A small block-glyph mark rendered with the accent gradient, shown above
//! the home hero.

use crate::ui::theme;
use iocraft::prelude::*;

// Static wordmark lines with individual colors for gradient effect
pub const WORDMARK_LINES: &[&str] = &[
    "▛▀▀▀▀▘",
    "▛▀▀▀  ",
    "▌     ",
    "▘     ",
];

/// Wordmark component with gradient colors
#[component]
pub fn Wordmark(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "wordmark", flex_direction: FlexDirection::Column) {
            #(WORDMARK_LINES.iter().enumerate().map(|(i, line)| {
                let color = theme::ACCENT_GRADIENT
                    .get(i)
                    .unwrap_or(&(37, 99, 235));
                element! {
                    Text(
                        key: format!("wordmark-{}", i),
                        content: *line,
                        color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                        weight: Weight::Bold,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
