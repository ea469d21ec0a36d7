use serde::{Deserialize, Serialize};

use crate::util::color::Color;

/// Bar color palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Color of bars with no special role.
    pub default: Color,
    /// Hard color for the two bars of a swap when swaps are not animated.
    pub swapping: Color,
    /// Range bars whose value is greater than the pivot value.
    pub greater: Color,
    /// Range bars whose value is at most the pivot value.
    pub lesser: Color,
    /// The pivot bar while partitioning.
    pub pivot: Color,
    /// Tint target for highlighted (compared) bars.
    pub highlight: Color,
    /// How far a highlighted bar is blended toward `highlight` (0-1).
    pub highlight_strength: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            default: Color::new(0xc4, 0xc8, 0xdb),
            swapping: Color::new(80, 255, 80),
            greater: Color::new(255, 80, 80),
            lesser: Color::new(80, 80, 255),
            pivot: Color::new(255, 160, 80),
            highlight: Color::WHITE,
            highlight_strength: 0.75,
        }
    }
}

impl ColorOptions {
    /// Blend `base` toward the highlight color at the configured strength.
    #[must_use]
    pub fn highlighted(&self, base: Color) -> Color {
        base.lerp(self.highlight, self.highlight_strength)
    }
}
