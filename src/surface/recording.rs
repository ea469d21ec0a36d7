//! In-memory surfaces that keep their drawn state and an operation log.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::{BarSurface, OverlaySurface};
use crate::animation::ghost::GhostId;
use crate::chart::bars::BarAttributes;

/// One operation received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum BarOp {
    /// A bar was appended.
    Create(usize),
    /// A bar's attributes were overwritten.
    Update(usize, BarAttributes),
    /// The last bar was removed.
    Remove(usize),
    /// Two bars changed places.
    Swap(usize, usize),
    /// A bar was shown or hidden.
    Visibility(usize, bool),
    /// The gap changed.
    Gap(u32),
    /// The row height changed.
    Height(u32),
}

/// A bar as the surface currently shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnBar {
    /// Last attributes received.
    pub attributes: BarAttributes,
    /// Whether the bar is shown.
    pub visible: bool,
}

/// A [`BarSurface`] that records everything it is told.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    bars: Vec<DrawnBar>,
    gap: u32,
    height: u32,
    ops: Vec<BarOp>,
}

impl RecordingSurface {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bars in display order.
    #[must_use]
    pub fn bars(&self) -> &[DrawnBar] {
        &self.bars
    }

    /// Current gap.
    #[must_use]
    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Current row height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Every operation received so far.
    #[must_use]
    pub fn ops(&self) -> &[BarOp] {
        &self.ops
    }

    /// Drain the operation log.
    pub fn take_ops(&mut self) -> Vec<BarOp> {
        std::mem::take(&mut self.ops)
    }

    /// Heights of all bars, in order.
    #[must_use]
    pub fn heights(&self) -> Vec<u32> {
        self.bars
            .iter()
            .map(|bar| bar.attributes.height_percent)
            .collect()
    }
}

impl BarSurface for RecordingSurface {
    fn create_bar(&mut self, index: usize) {
        debug_assert_eq!(index, self.bars.len());
        self.bars.push(DrawnBar {
            attributes: BarAttributes::default(),
            visible: true,
        });
        self.ops.push(BarOp::Create(index));
    }

    fn update_bar(&mut self, index: usize, attributes: &BarAttributes) {
        if let Some(bar) = self.bars.get_mut(index) {
            bar.attributes = *attributes;
        }
        self.ops.push(BarOp::Update(index, *attributes));
    }

    fn remove_bar(&mut self, index: usize) {
        if index < self.bars.len() {
            let _ = self.bars.remove(index);
        }
        self.ops.push(BarOp::Remove(index));
    }

    fn swap_bars(&mut self, a: usize, b: usize) {
        if a < self.bars.len() && b < self.bars.len() {
            self.bars.swap(a, b);
        }
        self.ops.push(BarOp::Swap(a, b));
    }

    fn set_bar_visible(&mut self, index: usize, visible: bool) {
        if let Some(bar) = self.bars.get_mut(index) {
            bar.visible = visible;
        }
        self.ops.push(BarOp::Visibility(index, visible));
    }

    fn set_gap(&mut self, gap: u32) {
        self.gap = gap;
        self.ops.push(BarOp::Gap(gap));
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
        self.ops.push(BarOp::Height(height));
    }
}

/// A ghost as the overlay currently shows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnGhost {
    /// Attributes copied at spawn time.
    pub attributes: BarAttributes,
    /// Spawn position.
    pub origin: Vec2,
    /// Latest translation.
    pub offset: Vec2,
}

/// An [`OverlaySurface`] that records ghost lifetimes.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    ghosts: FxHashMap<GhostId, DrawnGhost>,
    spawned: u64,
    destroyed: u64,
    moves: u64,
}

impl RecordingOverlay {
    /// Empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live ghost by id.
    #[must_use]
    pub fn ghost(&self, id: GhostId) -> Option<&DrawnGhost> {
        self.ghosts.get(&id)
    }

    /// Number of live ghosts.
    #[must_use]
    pub fn live(&self) -> usize {
        self.ghosts.len()
    }

    /// Total ghosts ever spawned.
    #[must_use]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Total ghosts destroyed.
    #[must_use]
    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }

    /// Total move operations received.
    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }
}

impl OverlaySurface for RecordingOverlay {
    fn spawn_ghost(
        &mut self,
        ghost: GhostId,
        attributes: &BarAttributes,
        origin: Vec2,
    ) {
        self.spawned += 1;
        let _ = self.ghosts.insert(
            ghost,
            DrawnGhost {
                attributes: *attributes,
                origin,
                offset: Vec2::ZERO,
            },
        );
    }

    fn move_ghost(&mut self, ghost: GhostId, offset: Vec2) {
        self.moves += 1;
        if let Some(drawn) = self.ghosts.get_mut(&ghost) {
            drawn.offset = offset;
        }
    }

    fn destroy_ghost(&mut self, ghost: GhostId) {
        if self.ghosts.remove(&ghost).is_some() {
            self.destroyed += 1;
        }
    }
}
