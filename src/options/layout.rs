use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chart dimensions and bar geometry limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Largest corner radius a bar may have (pixels). Also the largest gap.
    #[schemars(title = "Max Corner Radius", range(min = 0, max = 64))]
    pub max_corner_radius: u32,
    /// Nominal width shared by all bars and gaps (pixels).
    #[schemars(title = "Total Width", range(min = 1))]
    pub total_width: u32,
    /// Nominal chart height (pixels); bar heights are percentages of it.
    #[schemars(title = "Total Height", range(min = 1))]
    pub total_height: u32,
    /// Smallest normalization denominator, so tiny arrays do not fill the
    /// whole height.
    #[schemars(skip)]
    pub height_floor: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_corner_radius: 16,
            total_width: 2000,
            total_height: 200,
            height_floor: 4.0,
        }
    }
}
