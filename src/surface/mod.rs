//! Rendering surfaces the engine draws to.
//!
//! The engine never draws pixels itself. It issues ordered operations against
//! a [`BarSurface`] (the bar row) and an [`OverlaySurface`] (ghosts that carry
//! swap motion). [`recording`] provides in-memory implementations that keep
//! the resulting state and an operation log.

pub mod recording;
pub mod text;

use glam::Vec2;

use crate::animation::ghost::GhostId;
use crate::chart::bars::BarAttributes;

/// The row of bars.
pub trait BarSurface {
    /// Append a new bar at `index` (always the current length).
    fn create_bar(&mut self, index: usize);

    /// Overwrite the attributes of the bar at `index`.
    fn update_bar(&mut self, index: usize, attributes: &BarAttributes);

    /// Remove the bar at `index` (always the last one).
    fn remove_bar(&mut self, index: usize);

    /// Exchange the bars at `a` and `b`.
    fn swap_bars(&mut self, a: usize, b: usize);

    /// Show or hide the bar at `index`.
    fn set_bar_visible(&mut self, index: usize, visible: bool);

    /// Spacing between bars.
    fn set_gap(&mut self, gap: u32);

    /// Height of the row, which bar heights are percentages of.
    fn set_height(&mut self, height: u32);
}

/// Transient layer above the bar row for swap ghosts.
pub trait OverlaySurface {
    /// Create a ghost drawn with `attributes` at `origin`.
    fn spawn_ghost(
        &mut self,
        ghost: GhostId,
        attributes: &BarAttributes,
        origin: Vec2,
    );

    /// Translate a ghost relative to its origin.
    fn move_ghost(&mut self, ghost: GhostId, offset: Vec2);

    /// Remove a ghost.
    fn destroy_ghost(&mut self, ghost: GhostId);
}
