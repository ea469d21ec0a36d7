use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Swap animation timing and motion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Easing for swap requests that do not name one.
    #[schemars(title = "Default Easing")]
    pub default_ease: EasingFunction,
    /// Easing used for ghost motion during swaps.
    #[schemars(title = "Swap Easing")]
    pub swap_ease: EasingFunction,
    /// Swaps shorter than this (seconds) are applied without animation.
    #[schemars(title = "Minimum Swap Duration", range(min = 0.0, max = 1.0))]
    pub min_swap_duration: f32,
    /// Height of the ghost arc as a fraction of horizontal travel
    /// (0 keeps ghosts on the baseline).
    #[schemars(title = "Arc Factor", range(min = 0.0, max = 1.0))]
    pub arc_factor: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            default_ease: EasingFunction::QuadraticInOut,
            swap_ease: EasingFunction::ExponentialInOut,
            min_swap_duration: 0.016,
            arc_factor: 0.0,
        }
    }
}

impl AnimationOptions {
    /// Fast-path threshold as a [`Duration`].
    #[must_use]
    pub fn min_swap_duration(&self) -> Duration {
        seconds(self.min_swap_duration)
    }
}

/// Non-negative, finite seconds to a [`Duration`], saturating at
/// [`Duration::MAX`]; anything else is zero.
#[must_use]
fn seconds(secs: f32) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
