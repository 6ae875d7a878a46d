#![warn(missing_docs)]

//! Raster primitives for painting text highlights into an off-screen pixel buffer.

/// Off-screen RGBA pixel buffer with clipped writes.
pub mod canvas;

/// Block, line and wavy-line drawing over a [`canvas::PixelCanvas`].
pub mod draw;

/// Substring to character index resolution.
pub mod resolve;

mod color;

pub use canvas::{PixelCanvas, PixelRun};
pub use color::*;
pub use draw::{WAVE_OPACITY, draw_hline, draw_wavy_hline, fill_rect};
pub use resolve::substring_indices;
