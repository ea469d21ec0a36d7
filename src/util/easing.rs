//! Easing functions for animation interpolation.
//!
//! Bar swaps move with [`EasingFunction::ExponentialInOut`], everything else
//! defaults to [`EasingFunction::QuadraticInOut`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in-out (accelerate to the midpoint, then decelerate).
    #[default]
    QuadraticInOut,
    /// Exponential ease-in-out: nearly flat at both ends, steep in the
    /// middle.
    ExponentialInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = 1.0 - t;
                    1.0 - 2.0 * omt * omt
                }
            }
            EasingFunction::ExponentialInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    20.0_f32.mul_add(t, -10.0).exp2() / 2.0
                } else {
                    (2.0 - (-20.0_f32).mul_add(t, 10.0).exp2()) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 3] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticInOut,
        EasingFunction::ExponentialInOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.evaluate(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.evaluate(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_quadratic_in_out_shape() {
        let quad = EasingFunction::QuadraticInOut;
        assert_eq!(quad.evaluate(0.25), 0.125); // 2 * 0.25²
        assert_eq!(quad.evaluate(0.5), 0.5);
        assert_eq!(quad.evaluate(0.75), 0.875); // 1 - 2 * 0.25²
    }

    #[test]
    fn test_exponential_is_flat_at_extremes() {
        let expo = EasingFunction::ExponentialInOut;
        assert!(expo.evaluate(0.1) < 0.01);
        assert!(expo.evaluate(0.9) > 0.99);
        assert!((expo.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = ease.evaluate(step as f32 / 100.0);
                assert!(v >= prev, "{ease:?} decreased at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        for ease in ALL {
            assert_eq!(ease.evaluate(-0.5), 0.0);
            assert_eq!(ease.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_default_is_quadratic() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticInOut);
    }
}
