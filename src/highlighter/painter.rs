use gpui::{Bounds, Pixels};
use highlight_primitives::{PixelCanvas, draw_hline, draw_wavy_hline, fill_rect};
use tracing::trace;

use super::annotations::{HighlightStyle, IndexAnnotation};
use super::host::{DrawOffset, TextGeometry};
use crate::config::HighlighterConfig;

/// Rounds half-way values towards positive infinity, so that `-2.5` lands on
/// `-2` like `2.5` lands on `3`.
pub(crate) fn round_px(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Truncates a length towards zero.
fn trunc_px(value: f64) -> i32 {
    value as i32
}

/// Draws resolved annotations for one redraw pass.
pub(crate) struct AnnotationPainter<'a, G> {
    geometry: &'a G,
    config: &'a HighlighterConfig,
    offset: DrawOffset,
    underline_offset: i32,
}

impl<'a, G: TextGeometry> AnnotationPainter<'a, G> {
    pub fn new(
        geometry: &'a G,
        config: &'a HighlighterConfig,
        offset: DrawOffset,
        text_is_empty: bool,
    ) -> Self {
        let underline_offset = if text_is_empty {
            0
        } else {
            // The first glyph's height stands in for the line height.
            geometry
                .character_bounds(0)
                .map(|bounds| {
                    round_px(-bounds.size.height.to_f64() / config.underline_rise_divisor as f64)
                })
                .unwrap_or(0)
        };

        Self {
            geometry,
            config,
            offset,
            underline_offset,
        }
    }

    pub fn underline_offset(&self) -> i32 {
        self.underline_offset
    }

    pub fn paint(&self, canvas: &mut PixelCanvas, annotation: &IndexAnnotation) {
        let Some(bounds) = self.geometry.character_bounds(annotation.index) else {
            trace!(index = annotation.index, "no glyph bounds, skipping annotation");
            return;
        };

        match annotation.style {
            HighlightStyle::Highlight => self.highlight(canvas, bounds, annotation),
            HighlightStyle::Underline => {
                let (x, y, length) = self.underline_geometry(bounds);
                draw_hline(canvas, x, y, length, annotation.color);
            }
            HighlightStyle::WavyUnderline => {
                let (x, y, length) = self.underline_geometry(bounds);
                draw_wavy_hline(canvas, x, y, length, annotation.color);
            }
        }
    }

    fn highlight(&self, canvas: &mut PixelCanvas, bounds: Bounds<Pixels>, annotation: &IndexAnnotation) {
        let inset_top = self.config.highlight_inset_top.to_f64();
        let height_reduction = self.config.highlight_height_reduction.to_f64();

        fill_rect(
            canvas,
            round_px(bounds.left().to_f64() + self.offset.left),
            round_px(bounds.top().to_f64() + self.offset.top + inset_top),
            trunc_px(bounds.size.width.to_f64()),
            trunc_px(bounds.size.height.to_f64() - height_reduction),
            annotation.color,
        );
    }

    fn underline_geometry(&self, bounds: Bounds<Pixels>) -> (i32, i32, i32) {
        (
            round_px(bounds.left().to_f64() + self.offset.left),
            round_px(bounds.bottom().to_f64() + self.offset.top + self.underline_offset as f64),
            trunc_px(bounds.size.width.to_f64()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(2.49), 2);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(-2.51), -3);
        assert_eq!(round_px(-3.0), -3);
    }

    #[test]
    fn lengths_truncate_towards_zero() {
        assert_eq!(trunc_px(7.9), 7);
        assert_eq!(trunc_px(-0.5), 0);
    }

    #[test]
    fn far_coordinates_saturate() {
        assert_eq!(round_px(3.0e9), i32::MAX);
        assert_eq!(round_px(-3.0e9), i32::MIN);
        assert_eq!(trunc_px(f64::INFINITY), i32::MAX);
        assert_eq!(trunc_px(f64::NAN), 0);
    }
}
