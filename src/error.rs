//! Crate-level error types.

use std::fmt;

/// Errors produced by the sortvis crate.
#[derive(Debug)]
pub enum ChartError {
    /// A collaborator surface is not attached yet.
    Precondition {
        /// Which surface was missing.
        surface: &'static str,
    },
    /// A swap request referenced a bar index that does not exist.
    Lookup {
        /// The offending index.
        index: usize,
        /// Number of bars at the time of the request.
        len: usize,
    },
    /// Malformed color string or snapshot payload.
    Format(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl ChartError {
    /// The bar surface is not attached.
    #[must_use]
    pub const fn missing_bar_surface() -> Self {
        Self::Precondition {
            surface: "bar surface",
        }
    }

    /// The ghost overlay surface is not attached.
    #[must_use]
    pub const fn missing_overlay() -> Self {
        Self::Precondition {
            surface: "overlay surface",
        }
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition { surface } => {
                write!(f, "{surface} not ready")
            }
            Self::Lookup { index, len } => {
                write!(f, "bar {index} not found ({len} bars)")
            }
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_surface() {
        assert_eq!(
            ChartError::missing_overlay().to_string(),
            "overlay surface not ready"
        );
        assert_eq!(
            ChartError::Lookup { index: 7, len: 3 }.to_string(),
            "bar 7 not found (3 bars)"
        );
    }
}
