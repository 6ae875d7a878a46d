//! Paints highlight blocks, underlines and wavy underlines behind the text of
//! a gpui text area or text field, without touching the text itself.

pub mod config;

pub mod highlighter;
pub use highlighter::*;

mod error;
pub use error::*;

mod presentation;
pub use presentation::*;

pub use highlight_primitives::{
    BlendError, PixelCanvas, PixelRun, RgbaExt, TRANSPARENT, blend, rgb_a,
};
