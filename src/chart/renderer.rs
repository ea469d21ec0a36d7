//! Maps a snapshot to bar heights and colors and reconciles the bar set.

use super::bars::{BarAttributes, BarSet};
use super::snapshot::Snapshot;
use crate::layout::{BarGeometry, LayoutEngine};
use crate::options::{ColorOptions, LayoutOptions};
use crate::surface::BarSurface;
use crate::util::color::Color;

/// Turns snapshots into bar attributes.
#[derive(Debug, Clone)]
pub struct BarRenderer {
    colors: ColorOptions,
    height_floor: f64,
}

impl BarRenderer {
    /// Renderer with the given palette and normalization floor.
    #[must_use]
    pub fn new(colors: &ColorOptions, layout: &LayoutOptions) -> Self {
        Self {
            colors: colors.clone(),
            height_floor: layout.height_floor,
        }
    }

    /// Denominator heights are normalized by: the largest value, but never
    /// less than the floor.
    #[must_use]
    pub fn normalization(&self, values: &[f64]) -> f64 {
        values.iter().copied().fold(self.height_floor, f64::max)
    }

    /// Height of `value` as a whole percentage of `denominator`.
    #[must_use]
    pub fn height_percent(value: f64, denominator: f64) -> u32 {
        if denominator <= 0.0 || !value.is_finite() {
            return 0;
        }
        (value.max(0.0) * 100.0 / denominator).floor() as u32
    }

    /// Color of bar `index`.
    #[must_use]
    pub fn bar_color(&self, snapshot: &Snapshot, index: usize) -> Color {
        let base = self.base_color(snapshot, index);
        if !snapshot.is_swap_index(index) {
            return base;
        }
        if snapshot.swapping && !snapshot.animate_swaps {
            self.colors.swapping
        } else {
            self.colors.highlighted(base)
        }
    }

    fn base_color(&self, snapshot: &Snapshot, index: usize) -> Color {
        if !snapshot.partitioning {
            return self.colors.default;
        }
        if snapshot.pivot == Some(index) {
            return self.colors.pivot;
        }
        if !snapshot.in_partition_range(index) {
            return self.colors.default;
        }
        let pivot_value =
            snapshot.pivot.and_then(|p| snapshot.values.get(p)).copied();
        match (pivot_value, snapshot.values.get(index)) {
            (Some(pivot), Some(&value)) if pivot < value => self.colors.greater,
            (Some(_), Some(_)) => self.colors.lesser,
            _ => self.colors.default,
        }
    }

    /// Attributes for every bar of `snapshot` under `geometry`.
    #[must_use]
    pub fn attributes(
        &self,
        snapshot: &Snapshot,
        geometry: BarGeometry,
    ) -> Vec<BarAttributes> {
        let denominator = self.normalization(&snapshot.values);
        snapshot
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| BarAttributes {
                width: geometry.bar_width,
                height_percent: Self::height_percent(value, denominator),
                color: self.bar_color(snapshot, i),
                corner_radius: geometry.corner_radius,
            })
            .collect()
    }

    /// Render `snapshot` into `bars` and mirror the changes on `surface`.
    ///
    /// Bars are created lazily, updated in place (so their animation holds
    /// survive), and trailing excess bars are removed.
    pub fn render(
        &self,
        snapshot: &Snapshot,
        layout: &mut LayoutEngine,
        bars: &mut BarSet,
        surface: &mut dyn BarSurface,
    ) -> BarGeometry {
        let geometry = layout.compute_layout(snapshot.values.len());
        surface.set_gap(geometry.gap());

        for (i, attributes) in
            self.attributes(snapshot, geometry).into_iter().enumerate()
        {
            if i >= bars.len() {
                let index = bars.push_new();
                surface.create_bar(index);
            }
            if let Some(bar) = bars.get_mut(i) {
                bar.set_attributes(attributes);
            }
            surface.update_bar(i, &attributes);
        }

        while bars.len() > snapshot.values.len() {
            let _ = bars.pop();
            surface.remove_bar(bars.len());
        }
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{BarOp, RecordingSurface};

    fn renderer() -> BarRenderer {
        BarRenderer::new(&ColorOptions::default(), &LayoutOptions::default())
    }

    fn colors() -> ColorOptions {
        ColorOptions::default()
    }

    #[test]
    fn heights_are_floored_percentages_of_the_max() {
        let r = renderer();
        let snapshot = Snapshot::new(vec![10.0, 20.0, 5.0, 40.0]);
        assert_eq!(r.normalization(&snapshot.values), 40.0);
        let heights: Vec<u32> = r
            .attributes(&snapshot, LayoutEngine::new(&LayoutOptions::default()).compute_layout(4))
            .iter()
            .map(|a| a.height_percent)
            .collect();
        assert_eq!(heights, vec![25, 50, 12, 100]);
    }

    #[test]
    fn tiny_arrays_use_the_floor() {
        let r = renderer();
        assert_eq!(r.normalization(&[1.0, 2.0]), 4.0);
        assert_eq!(r.normalization(&[]), 4.0);
        assert_eq!(BarRenderer::height_percent(2.0, 4.0), 50);
    }

    #[test]
    fn unanimated_swap_uses_the_swap_color() {
        let r = renderer();
        let snapshot = Snapshot::new(vec![3.0, 1.0, 2.0]).with_swap(0, 1);
        assert_eq!(r.bar_color(&snapshot, 0), colors().swapping);
        assert_eq!(r.bar_color(&snapshot, 1), colors().swapping);
        assert_eq!(r.bar_color(&snapshot, 2), colors().default);
    }

    #[test]
    fn animated_swap_and_comparisons_are_tinted() {
        let r = renderer();
        let tinted = colors().default.lerp(colors().highlight, 0.75);
        let animated =
            Snapshot::new(vec![3.0, 1.0, 2.0]).with_swap(0, 1).animated(0.2);
        assert_eq!(r.bar_color(&animated, 0), tinted);
        let compared = Snapshot::new(vec![3.0, 1.0, 2.0]).with_highlight(1, 2);
        assert_eq!(r.bar_color(&compared, 2), tinted);
        assert_eq!(r.bar_color(&compared, 0), colors().default);
    }

    #[test]
    fn partition_colors_compare_against_the_pivot() {
        let r = renderer();
        // range 0..3, pivot at 4 (value 5)
        let snapshot = Snapshot::new(vec![9.0, 5.0, 1.0, 7.0, 5.0])
            .with_partition(0, 3, 4);
        assert_eq!(r.bar_color(&snapshot, 0), colors().greater);
        assert_eq!(r.bar_color(&snapshot, 1), colors().lesser);
        assert_eq!(r.bar_color(&snapshot, 2), colors().lesser);
        assert_eq!(r.bar_color(&snapshot, 3), colors().default);
        assert_eq!(r.bar_color(&snapshot, 4), colors().pivot);
    }

    #[test]
    fn pivot_inside_range_keeps_pivot_color() {
        let r = renderer();
        let snapshot =
            Snapshot::new(vec![1.0, 2.0, 3.0]).with_partition(0, 3, 1);
        assert_eq!(r.bar_color(&snapshot, 1), colors().pivot);
    }

    #[test]
    fn highlight_tints_partition_colors() {
        let r = renderer();
        let snapshot = Snapshot::new(vec![9.0, 1.0, 5.0])
            .with_partition(0, 2, 2)
            .with_highlight(0, 1);
        assert_eq!(
            r.bar_color(&snapshot, 0),
            colors().greater.lerp(colors().highlight, 0.75)
        );
    }

    #[test]
    fn render_reconciles_in_place() {
        let r = renderer();
        let mut layout = LayoutEngine::new(&LayoutOptions::default());
        let mut bars = BarSet::new();
        let mut surface = RecordingSurface::new();

        let _ = r.render(
            &Snapshot::new(vec![1.0, 2.0, 3.0]),
            &mut layout,
            &mut bars,
            &mut surface,
        );
        let ids: Vec<_> = bars.iter().map(|b| b.id()).collect();
        assert_eq!(surface.bars().len(), 3);

        let _ = surface.take_ops();
        let geometry = r.render(
            &Snapshot::new(vec![4.0, 8.0]),
            &mut layout,
            &mut bars,
            &mut surface,
        );
        assert_eq!(bars.len(), 2);
        assert_eq!(bars.get(0).unwrap().id(), ids[0]);
        assert_eq!(bars.get(1).unwrap().id(), ids[1]);
        assert_eq!(surface.heights(), vec![50, 100]);
        assert_eq!(surface.gap(), geometry.gap());
        let ops = surface.take_ops();
        assert!(ops.contains(&BarOp::Remove(2)));
        assert!(!ops.iter().any(|op| matches!(op, BarOp::Create(_))));
    }
}
