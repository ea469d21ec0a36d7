//! Seeded random data for exercising the chart without a real producer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SnapshotSender;
use crate::chart::snapshot::Snapshot;

/// Smallest generated value.
pub const MIN_VALUE: u32 = 1;
/// Largest generated value.
pub const MAX_VALUE: u32 = 1000;

/// Generates random arrays and partial Fisher-Yates shuffles of them as a
/// stream of snapshots.
///
/// Every swap of the shuffle becomes two snapshots: an animated swap intent
/// over the pre-swap values that must not be coalesced, followed by the
/// post-swap values, which may be.
#[derive(Debug, Clone)]
pub struct ShuffleDemo {
    rng: StdRng,
    values: Vec<f64>,
    strength: f64,
    step: f64,
}

impl ShuffleDemo {
    /// Demo over `len` values, deterministic for a given `seed`.
    #[must_use]
    pub fn new(len: usize, seed: u64) -> Self {
        let mut demo = Self {
            rng: StdRng::seed_from_u64(seed),
            values: Vec::new(),
            strength: 0.1,
            step: 0.1,
        };
        let _ = demo.regenerate(len);
        demo
    }

    /// Probability that each position takes part in a swap (clamped to
    /// [0, 1]).
    #[must_use]
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        self
    }

    /// Seconds each swap animation lasts.
    #[must_use]
    pub fn with_step(mut self, seconds: f64) -> Self {
        self.step = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replace the values with `len` fresh random ones.
    pub fn regenerate(&mut self, len: usize) -> Snapshot {
        self.values = (0..len)
            .map(|_| f64::from(self.rng.random_range(MIN_VALUE..=MAX_VALUE)))
            .collect();
        Snapshot::new(self.values.clone())
    }

    /// Shuffle the current values, returning the snapshots describing it.
    pub fn shuffle(&mut self) -> Vec<Snapshot> {
        let mut snapshots = Vec::new();
        for i in (1..self.values.len()).rev() {
            if self.rng.random::<f64>() > self.strength {
                continue;
            }
            let j = self.rng.random_range(0..=i);
            snapshots.push(
                Snapshot::new(self.values.clone())
                    .with_swap(i, j)
                    .animated(self.step)
                    .preserved(),
            );
            self.values.swap(i, j);
            snapshots.push(Snapshot::new(self.values.clone()));
        }
        snapshots
    }

    /// Send the initial values and one shuffle. Returns how many snapshots
    /// were delivered before the feed closed.
    pub fn run(&mut self, sender: &SnapshotSender) -> usize {
        let first = Snapshot::new(self.values.clone());
        std::iter::once(first)
            .chain(self.shuffle())
            .take_while(|snapshot| sender.send(snapshot.clone()))
            .count()
    }
}
