//! Color palette for the UI

use iocraft::prelude::Color;

/// Primary accent, used for the brand, the headline accent, and highlight
/// values.
pub const ACCENT: Color = Color::Rgb {
    r: 59,
    g: 130,
    b: 246,
};

/// Dimmed text for taglines, labels, and key hints.
pub const MUTED: Color = Color::Grey;

/// Body text.
pub const TEXT: Color = Color::White;

// Accent gradient for the wordmark, brightest first
pub const ACCENT_GRADIENT: &[(u8, u8, u8)] = &[
    (147, 197, 253), // Lightest
    (96, 165, 250),  // Light
    (59, 130, 246),  // Base accent
    (37, 99, 235),   // Dark
];
