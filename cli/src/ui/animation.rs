//! Entrance animation for page mounts
//!
//! Pages reveal their sections in a stagger, mirroring the fade-and-rise
//! entrance of the web original. The shell computes a reveal value in
//! [0.0, 1.0] from the time since the last navigation; a section mounts once
//! the eased value passes its offset.

use std::time::Duration;

/// Easing options for the entrance animation
#[derive(Debug, Clone, Copy)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

/// Apply easing function to a normalized time value (0.0 to 1.0)
pub fn apply_easing(easing: Easing, t: f64) -> f64 {
    match easing {
        Easing::Linear => t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Reveal offsets for staggered page sections (hero, then highlights, then
/// outbound links on the home page).
pub const SECTION_STAGGER: [f64; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];

/// Configuration for UI animations
#[derive(Debug, Clone)]
pub struct UiAnimationConfig {
    pub easing: Easing,
    pub frame_interval_ms: u64,
    pub duration_ms: u64,
    pub enabled: bool,
}

impl UiAnimationConfig {
    /// Create new animation config with environment variable overrides
    pub fn from_env() -> Self {
        // Load UI animation config from env (fallback to defaults)
        let easing = std::env::var("FOLIO_UI_EASING")
            .ok()
            .and_then(|v| match v.to_lowercase().as_str() {
                "linear" => Some(Easing::Linear),
                "ease_in_out_cubic" | "easeinoutcubic" | "ease-in-out-cubic" => {
                    Some(Easing::EaseInOutCubic)
                }
                "ease_out_cubic" | "easeoutcubic" | "ease-out-cubic" => Some(Easing::EaseOutCubic),
                _ => None,
            })
            .unwrap_or(Easing::EaseOutCubic);

        let frame_interval_ms = std::env::var("FOLIO_UI_FRAME_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(33);

        let duration_ms = std::env::var("FOLIO_UI_DURATION_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        let enabled = std::env::var("FOLIO_UI_ANIMATION")
            .map(|v| v != "0" && v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            easing,
            frame_interval_ms,
            duration_ms,
            enabled,
        }
    }
}

impl Default for UiAnimationConfig {
    fn default() -> Self {
        Self {
            easing: Easing::EaseOutCubic,
            frame_interval_ms: 33,
            duration_ms: 600,
            enabled: true,
        }
    }
}

/// Eased reveal progress for a navigation that happened `elapsed` ago.
///
/// Returns 1.0 when animation is disabled, so non-interactive rendering is
/// always fully revealed.
pub fn eased_progress(config: &UiAnimationConfig, elapsed: Duration) -> f64 {
    if !config.enabled || config.duration_ms == 0 {
        return 1.0;
    }
    let t = (elapsed.as_millis() as f64 / config.duration_ms as f64).clamp(0.0, 1.0);
    apply_easing(config.easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_linear() {
        assert_eq!(apply_easing(Easing::Linear, 0.0), 0.0);
        assert_eq!(apply_easing(Easing::Linear, 0.5), 0.5);
        assert_eq!(apply_easing(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_easing_ease_out_cubic() {
        let result = apply_easing(Easing::EaseOutCubic, 0.5);
        assert!(result > 0.5); // Should be faster than linear
    }

    #[test]
    fn test_section_stagger_is_ordered() {
        assert!(SECTION_STAGGER.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SECTION_STAGGER[0], 0.0);
        assert!(SECTION_STAGGER[2] < 1.0);
    }

    #[test]
    fn test_eased_progress_clamps() {
        let config = UiAnimationConfig {
            easing: Easing::Linear,
            ..UiAnimationConfig::default()
        };
        assert_eq!(eased_progress(&config, Duration::ZERO), 0.0);
        assert_eq!(eased_progress(&config, Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_eased_progress_when_disabled() {
        let config = UiAnimationConfig {
            enabled: false,
            ..UiAnimationConfig::default()
        };
        assert_eq!(eased_progress(&config, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_animation_config_default() {
        let config = UiAnimationConfig::default();
        assert_eq!(config.frame_interval_ms, 33);
        assert_eq!(config.duration_ms, 600);
        assert!(config.enabled);
    }
}
