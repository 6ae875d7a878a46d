use gpui::{Bounds, Hsla, PaintQuad, Pixels, Point, Window, fill, point, px, size};
use highlight_primitives::{PixelCanvas, PixelRun};

/// Creates a quad covering one run of canvas pixels, offset by `origin`.
pub fn make_run_quad(origin: Point<Pixels>, run: &PixelRun) -> PaintQuad {
    fill(
        Bounds::new(
            point(origin.x + px(run.x as f32), origin.y + px(run.y as f32)),
            size(px(run.len as f32), px(1.)),
        ),
        Hsla::from(run.color),
    )
}

/// A finished highlight canvas prepared for painting behind a text element.
///
/// The canvas is anchored at the content origin and painted once, never tiled.
pub struct HighlightBackground {
    quads: Vec<PaintQuad>,
}

impl HighlightBackground {
    /// Converts `canvas` into quads whose top-left pixel sits at `origin`.
    pub fn new(canvas: &PixelCanvas, origin: Point<Pixels>) -> Self {
        let quads = canvas
            .runs()
            .iter()
            .map(|run| make_run_quad(origin, run))
            .collect();
        Self { quads }
    }

    /// Number of quads that will be painted.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether the canvas had no visible pixels.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Paints the background to the window.
    pub fn paint(self, window: &mut Window) {
        for quad in self.quads {
            window.paint_quad(quad);
        }
    }
}
