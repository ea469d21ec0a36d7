//! The ordered bar collection the renderer and swap animator share.

use crate::animation::hold::AnimationHold;
use crate::error::ChartError;
use crate::util::color::Color;

/// Stable identity of a bar. Survives reordering; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarId(u64);

/// What the surface draws for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarAttributes {
    /// Width in pixels.
    pub width: u32,
    /// Height as a percentage (0-100) of the chart height.
    pub height_percent: u32,
    /// Fill color.
    pub color: Color,
    /// Corner radius in pixels.
    pub corner_radius: u32,
}

impl BarAttributes {
    /// Fill color as `#rrggbb`.
    #[must_use]
    pub fn color_hex(&self) -> String {
        self.color.to_hex()
    }
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    id: BarId,
    attributes: BarAttributes,
    hold: AnimationHold,
}

impl Bar {
    /// Stable identity.
    #[must_use]
    pub fn id(&self) -> BarId {
        self.id
    }

    /// Attributes from the last render pass.
    #[must_use]
    pub fn attributes(&self) -> &BarAttributes {
        &self.attributes
    }

    /// Number of in-flight swap animations hiding this bar.
    #[must_use]
    pub fn animation_ref_count(&self) -> u32 {
        self.hold.count()
    }

    /// Whether the bar itself (not a ghost) should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.hold.is_visible()
    }

    pub(crate) fn set_attributes(&mut self, attributes: BarAttributes) {
        self.attributes = attributes;
    }

    pub(crate) fn begin_animation(&mut self) -> bool {
        self.hold.begin()
    }

    pub(crate) fn end_animation(&mut self) -> bool {
        self.hold.end()
    }
}

/// Bars in display order, index `i` drawing value `i` of the last snapshot.
#[derive(Debug, Clone, Default)]
pub struct BarSet {
    bars: Vec<Bar>,
    next_id: u64,
}

impl BarSet {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Bars in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// Current index of the bar with `id`, if it still exists.
    #[must_use]
    pub fn position_of(&self, id: BarId) -> Option<usize> {
        self.bars.iter().position(|bar| bar.id == id)
    }

    /// Bar at `index`, or a lookup error.
    ///
    /// # Errors
    ///
    /// [`ChartError::Lookup`] if `index` is out of range.
    pub fn checked(&self, index: usize) -> Result<&Bar, ChartError> {
        self.bars.get(index).ok_or(ChartError::Lookup {
            index,
            len: self.bars.len(),
        })
    }

    pub(crate) fn checked_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Bar, ChartError> {
        let len = self.bars.len();
        self.bars
            .get_mut(index)
            .ok_or(ChartError::Lookup { index, len })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Bar> {
        self.bars.get_mut(index)
    }

    /// Append a fresh, visible bar and return its index.
    pub(crate) fn push_new(&mut self) -> usize {
        let id = BarId(self.next_id);
        self.next_id += 1;
        self.bars.push(Bar {
            id,
            attributes: BarAttributes::default(),
            hold: AnimationHold::Idle,
        });
        self.bars.len() - 1
    }

    /// Remove and return the last bar.
    pub(crate) fn pop(&mut self) -> Option<Bar> {
        self.bars.pop()
    }

    /// Exchange the positions of two bars.
    ///
    /// # Errors
    ///
    /// [`ChartError::Lookup`] if either index is out of range; nothing moves
    /// in that case.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ChartError> {
        let _ = self.checked(a)?;
        let _ = self.checked(b)?;
        self.bars.swap(a, b);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BarSet {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
