//! Block-character rendering of a [`RecordingSurface`], one column per bar.

use super::recording::RecordingSurface;

const FILLED: char = '█';
const IN_FLIGHT: char = '░';

/// Draw the surface as `rows` lines, top line first.
///
/// Bars hidden behind a swap ghost are drawn with a lighter shade.
#[must_use]
pub fn render_rows(surface: &RecordingSurface, rows: usize) -> Vec<String> {
    let cells: Vec<(usize, char)> = surface
        .bars()
        .iter()
        .map(|bar| {
            let filled = (bar.attributes.height_percent.min(100) as usize * rows
                + 50)
                / 100;
            let glyph = if bar.visible { FILLED } else { IN_FLIGHT };
            (filled, glyph)
        })
        .collect();

    (0..rows)
        .map(|row| {
            let level = rows - row;
            cells
                .iter()
                .map(|&(filled, glyph)| if filled >= level { glyph } else { ' ' })
                .collect::<String>()
                .trim_end()
                .to_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::bars::BarAttributes;
    use crate::surface::BarSurface;

    fn surface_with(heights: &[u32]) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        for (i, &height_percent) in heights.iter().enumerate() {
            surface.create_bar(i);
            surface.update_bar(
                i,
                &BarAttributes {
                    height_percent,
                    ..BarAttributes::default()
                },
            );
        }
        surface
    }

    #[test]
    fn columns_scale_to_rows() {
        let surface = surface_with(&[25, 50, 100, 0]);
        let rows = render_rows(&surface, 4);
        assert_eq!(rows, vec!["  █", "  █", " ██", "███"]);
    }

    #[test]
    fn hidden_bars_use_the_light_shade() {
        let mut surface = surface_with(&[100, 100]);
        surface.set_bar_visible(1, false);
        let rows = render_rows(&surface, 1);
        assert_eq!(rows, vec!["█░"]);
    }
}
