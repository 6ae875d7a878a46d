use std::ops::Range;

use gpui::Rgba;

use crate::canvas::PixelCanvas;
use crate::color::RgbaExt;

/// Per-row opacity factors of a wavy line, indexed by `[row][column % 4]`.
///
/// The three rows modulate alpha instead of displacing pixels, which reads as
/// a small sine wave at typical text sizes.
pub const WAVE_OPACITY: [[f32; 4]; 3] = [
    [0.3, 1.0, 0.3, 0.0],
    [1.0, 0.3, 1.0, 0.3],
    [0.3, 0.0, 0.3, 1.0],
];

/// Columns (or rows) of `[start, start + len)` that fall inside `[0, limit)`.
fn clip_span(start: i32, len: i32, limit: u32) -> Range<i32> {
    let first = i64::from(start).max(0);
    let last = (i64::from(start) + i64::from(len.max(0))).min(i64::from(limit));
    if last <= first {
        return 0..0;
    }
    first as i32..last as i32
}

/// Fills `[x, x + width) × [y, y + height)` with `color`.
/// Cells outside the canvas are skipped.
pub fn fill_rect(canvas: &mut PixelCanvas, x: i32, y: i32, width: i32, height: i32, color: Rgba) {
    let columns = clip_span(x, width, canvas.width());
    for row in clip_span(y, height, canvas.height()) {
        for column in columns.clone() {
            canvas.set_pixel(column, row, color);
        }
    }
}

/// Draws a single-pixel-tall line of `length` pixels starting at `(x, y)`.
pub fn draw_hline(canvas: &mut PixelCanvas, x: i32, y: i32, length: i32, color: Rgba) {
    if y < 0 || y >= canvas.height() as i32 {
        return;
    }

    for column in clip_span(x, length, canvas.width()) {
        canvas.set_pixel(column, y, color);
    }
}

/// Draws a three-row dithered wave of `length` pixels whose top row is `y`.
///
/// The pattern phase follows the absolute column, so adjacent calls line up.
/// Cells whose resulting opacity is exactly zero are left untouched.
pub fn draw_wavy_hline(canvas: &mut PixelCanvas, x: i32, y: i32, length: i32, color: Rgba) {
    for column in clip_span(x, length, canvas.width()) {
        let phase = column.rem_euclid(4) as usize;

        for (row, factors) in WAVE_OPACITY.iter().enumerate() {
            let Some(row_y) = y.checked_add(row as i32) else {
                break;
            };
            let shaded = color.fade(factors[phase]);
            if shaded.a == 0.0 {
                continue;
            }
            canvas.set_pixel(column, row_y, shaded);
        }
    }
}
