//! Bar width and corner radius for a given element count.
//!
//! Geometry is memoized per count for the lifetime of the [`LayoutEngine`],
//! so a chart whose length does not change never jitters between frames.

use rustc_hash::FxHashMap;

use crate::options::LayoutOptions;

/// Width and corner radius shared by every bar of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarGeometry {
    /// Bar width in pixels (at least 1).
    pub bar_width: u32,
    /// Corner radius in pixels.
    pub corner_radius: u32,
}

impl BarGeometry {
    /// Spacing between adjacent bars. Equal to the corner radius.
    #[must_use]
    pub fn gap(&self) -> u32 {
        self.corner_radius
    }

    /// Left edge of bar `index` in a row of `count` bars centred within
    /// `total_width`. Negative when the row overflows.
    #[must_use]
    pub fn slot_x(&self, index: usize, count: usize, total_width: u32) -> f32 {
        let pitch = (self.bar_width + self.gap()) as f32;
        let row = count as f32 * pitch - self.gap() as f32;
        let left = (total_width as f32 - row.max(0.0)) / 2.0;
        left + index as f32 * pitch
    }
}

/// Computes and caches [`BarGeometry`] per element count.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    max_corner_radius: u32,
    total_width: u32,
    total_height: u32,
    cache: FxHashMap<usize, BarGeometry>,
}

impl LayoutEngine {
    /// Engine for the given chart dimensions with an empty cache.
    #[must_use]
    pub fn new(options: &LayoutOptions) -> Self {
        Self {
            max_corner_radius: options.max_corner_radius,
            total_width: options.total_width,
            total_height: options.total_height,
            cache: FxHashMap::default(),
        }
    }

    /// Geometry for `count` bars.
    ///
    /// Starting from the maximum radius, the radius is halved until the bar
    /// width is more than twice the radius. A radius of 0 always satisfies
    /// that, so the loop terminates.
    pub fn compute_layout(&mut self, count: usize) -> BarGeometry {
        if let Some(geometry) = self.cache.get(&count) {
            return *geometry;
        }

        let total = i64::from(self.total_width);
        let n = count as i64;
        let mut radius = i64::from(self.max_corner_radius);
        let mut width = radius * 2;
        while width <= radius * 2 {
            radius /= 2;
            width = (total - radius * (n + 2)).div_euclid(n.max(1)).max(1);
        }

        let geometry = BarGeometry {
            bar_width: width as u32,
            corner_radius: radius as u32,
        };
        log::debug!(
            "layout for {count} bars: width {} radius {}",
            geometry.bar_width,
            geometry.corner_radius
        );
        let _ = self.cache.insert(count, geometry);
        geometry
    }

    /// Previously computed geometry for `count`, if any.
    #[must_use]
    pub fn cached(&self, count: usize) -> Option<BarGeometry> {
        self.cache.get(&count).copied()
    }

    /// Number of distinct counts laid out so far.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Nominal width the bars are distributed over.
    #[must_use]
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Height of the bar row (pixels).
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.total_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LayoutEngine {
        LayoutEngine::new(&LayoutOptions::default())
    }

    #[test]
    fn small_counts_halve_the_radius_once() {
        let mut layout = engine();
        // 32 <= 32, so radius 8: (2000 - 8 * 6) / 4 = 488
        assert_eq!(
            layout.compute_layout(4),
            BarGeometry {
                bar_width: 488,
                corner_radius: 8
            }
        );
    }

    #[test]
    fn repeated_calls_return_identical_geometry() {
        let mut layout = engine();
        for count in [0, 1, 4, 50, 333, 2000, 5000] {
            let first = layout.compute_layout(count);
            let second = layout.compute_layout(count);
            assert_eq!(first, second, "count {count}");
            assert_eq!(layout.cached(count), Some(first));
        }
        assert_eq!(layout.cache_len(), 7);
    }

    #[test]
    fn crowded_charts_shrink_radius_to_zero() {
        let mut layout = engine();
        let geometry = layout.compute_layout(2000);
        assert_eq!(geometry.corner_radius, 0);
        assert_eq!(geometry.bar_width, 1);

        let overflow = layout.compute_layout(5000);
        assert_eq!(overflow.corner_radius, 0);
        assert_eq!(overflow.bar_width, 1);
    }

    #[test]
    fn bar_width_exceeds_twice_the_radius() {
        let mut layout = engine();
        for count in 0..300 {
            let g = layout.compute_layout(count);
            assert!(g.bar_width > 2 * g.corner_radius, "count {count}");
            assert!(g.bar_width >= 1);
        }
    }

    #[test]
    fn empty_chart_uses_a_single_slot() {
        let mut layout = engine();
        // radius 8: (2000 - 16) / 1
        assert_eq!(layout.compute_layout(0).bar_width, 1984);
    }

    #[test]
    fn slots_are_centred() {
        let geometry = BarGeometry {
            bar_width: 10,
            corner_radius: 2,
        };
        // Row is 3 * 12 - 2 = 34 wide, centred in 100.
        assert_eq!(geometry.slot_x(0, 3, 100), 33.0);
        assert_eq!(geometry.slot_x(2, 3, 100), 57.0);
    }
}
