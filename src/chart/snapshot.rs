//! One discrete state update of the array being sorted.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::ChartError;

/// Array values plus any in-progress compare, swap, or partition.
///
/// On the wire this is a JSON object with the field names below; everything
/// except `values` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Array contents, one bar per value.
    pub values: Vec<f64>,
    /// First highlighted / swapped index.
    pub swap_a: Option<usize>,
    /// Second highlighted / swapped index.
    pub swap_b: Option<usize>,
    /// Whether `swap_a` and `swap_b` are being exchanged (rather than
    /// compared).
    pub swapping: bool,
    /// Whether swaps should be animated with ghosts.
    pub animate_swaps: bool,
    /// Additional pairs swapped together in this step.
    pub bulk_swaps: Vec<(usize, usize)>,
    /// Whether a partition is in progress.
    pub partitioning: bool,
    /// Start of the partition range (inclusive).
    pub range_start: Option<usize>,
    /// End of the partition range (exclusive).
    pub range_end: Option<usize>,
    /// Index of the pivot.
    pub pivot: Option<usize>,
    /// Time budget of this step in seconds; swap animations last this long.
    pub step_duration: f64,
    /// Whether this snapshot may be dropped in favor of a newer one.
    pub allow_coalesce: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            swap_a: None,
            swap_b: None,
            swapping: false,
            animate_swaps: false,
            bulk_swaps: Vec::new(),
            partitioning: false,
            range_start: None,
            range_end: None,
            pivot: None,
            step_duration: 0.0,
            allow_coalesce: true,
        }
    }
}

impl Snapshot {
    /// Plain snapshot of `values` with nothing highlighted.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            ..Self::default()
        }
    }

    /// Parse one JSON snapshot and check its invariants.
    ///
    /// # Errors
    ///
    /// [`ChartError::Format`] if the JSON is malformed or the snapshot fails
    /// [`validate`](Self::validate).
    pub fn from_json(src: &str) -> Result<Self, ChartError> {
        let snapshot: Self = serde_json::from_str(src)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that values are finite and non-negative and that every index
    /// present points into `values`.
    ///
    /// # Errors
    ///
    /// [`ChartError::Format`] describing the first violation.
    pub fn validate(&self) -> Result<(), ChartError> {
        if let Some(bad) =
            self.values.iter().find(|v| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::Format(format!("invalid value {bad}")));
        }
        let len = self.values.len();
        let named = [
            ("swap_a", self.swap_a),
            ("swap_b", self.swap_b),
            ("pivot", self.pivot),
            ("range_start", self.range_start),
        ];
        for (name, index) in named {
            if let Some(index) = index.filter(|&i| i >= len) {
                return Err(ChartError::Format(format!(
                    "{name} {index} out of range for {len} values"
                )));
            }
        }
        if let Some(end) = self.range_end.filter(|&e| e > len) {
            return Err(ChartError::Format(format!(
                "range_end {end} out of range for {len} values"
            )));
        }
        if let Some(&(a, b)) =
            self.bulk_swaps.iter().find(|&&(a, b)| a >= len || b >= len)
        {
            return Err(ChartError::Format(format!(
                "bulk swap ({a}, {b}) out of range for {len} values"
            )));
        }
        if !self.step_duration.is_finite() || self.step_duration < 0.0 {
            return Err(ChartError::Format(format!(
                "invalid step duration {}",
                self.step_duration
            )));
        }
        Ok(())
    }

    /// Highlight `a` and `b` as being swapped.
    #[must_use]
    pub fn with_swap(mut self, a: usize, b: usize) -> Self {
        self.swap_a = Some(a);
        self.swap_b = Some(b);
        self.swapping = true;
        self
    }

    /// Highlight `a` and `b` as being compared.
    #[must_use]
    pub fn with_highlight(mut self, a: usize, b: usize) -> Self {
        self.swap_a = Some(a);
        self.swap_b = Some(b);
        self.swapping = false;
        self
    }

    /// Mark a partition of `start..end` around `pivot`.
    #[must_use]
    pub fn with_partition(mut self, start: usize, end: usize, pivot: usize) -> Self {
        self.partitioning = true;
        self.range_start = Some(start);
        self.range_end = Some(end);
        self.pivot = Some(pivot);
        self
    }

    /// Swap these pairs together in this step.
    #[must_use]
    pub fn with_bulk_swaps(mut self, pairs: impl Into<Vec<(usize, usize)>>) -> Self {
        self.bulk_swaps = pairs.into();
        self
    }

    /// Animate swaps over `seconds`.
    #[must_use]
    pub fn animated(mut self, seconds: f64) -> Self {
        self.animate_swaps = true;
        self.step_duration = seconds;
        self
    }

    /// Never drop this snapshot when newer ones arrive.
    #[must_use]
    pub fn preserved(mut self) -> Self {
        self.allow_coalesce = false;
        self
    }

    /// The focused swap pair, if this snapshot is swapping.
    #[must_use]
    pub fn focused_swap(&self) -> Option<(usize, usize)> {
        if !self.swapping {
            return None;
        }
        self.swap_a.zip(self.swap_b)
    }

    /// Whether `index` is one of the two highlighted indices.
    #[must_use]
    pub fn is_swap_index(&self, index: usize) -> bool {
        self.swap_a == Some(index) || self.swap_b == Some(index)
    }

    /// Whether `index` lies in the partition range.
    #[must_use]
    pub fn in_partition_range(&self, index: usize) -> bool {
        match (self.range_start, self.range_end) {
            (Some(start), Some(end)) => (start..end).contains(&index),
            _ => false,
        }
    }

    /// Step duration as a [`Duration`] (zero when negative or not finite,
    /// [`Duration::MAX`] when too long to represent).
    #[must_use]
    pub fn step_duration(&self) -> Duration {
        if self.step_duration.is_finite() && self.step_duration > 0.0 {
            Duration::try_from_secs_f64(self.step_duration)
                .unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}
