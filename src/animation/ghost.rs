//! Detached copies of bars that carry a swap's motion.

use glam::Vec2;

use crate::chart::bars::{BarAttributes, BarId};

/// Identifier of a ghost on the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GhostId(pub u64);

/// A transient duplicate of a bar, drawn on the overlay while the bar
/// itself is hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    /// Overlay identifier.
    pub id: GhostId,
    /// The bar this ghost stands in for.
    pub bar: BarId,
    /// Visual state copied when the swap began.
    pub attributes: BarAttributes,
    /// Position of the bar's slot when the swap began (x = left edge,
    /// y = lift above the baseline).
    pub origin: Vec2,
    /// Current translation from `origin`.
    pub offset: Vec2,
}

impl Ghost {
    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.origin + self.offset
    }
}
