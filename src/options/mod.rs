//! Chart configuration with TOML preset support.
//!
//! All fixed parameters of the engine (geometry limits, palette, easing,
//! swap thresholds) are consolidated here. Options serialize to/from TOML so
//! a preset file can override any subset of them.

mod animation;
mod colors;
mod layout;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[colors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ChartOptions {
    /// Chart dimensions and bar geometry limits.
    pub layout: LayoutOptions,
    /// Bar color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Swap animation timing and motion.
    pub animation: AnimationOptions,
}

impl ChartOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ChartOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, ChartError> {
        toml::from_str(content)
            .map_err(|e| ChartError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Io`] if the file cannot be read and
    /// [`ChartError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::OptionsParse`] if serialization fails and
    /// [`ChartError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ChartError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChartError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
