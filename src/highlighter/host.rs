//! The boundary between the highlighter and the text widget it decorates.

use std::sync::Arc;

use gpui::{Bounds, Pixels, Point, Rgba, SharedString, Size};
use highlight_primitives::PixelCanvas;

use crate::error::{HighlightError, Result};

/// The kind of widget a host reports itself as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// A scrollable, multi-line text area.
    TextArea,
    /// A single-line text field.
    TextField,
    /// Anything else; highlighters refuse to attach to it.
    Other(SharedString),
}

/// Text and glyph geometry of the host's visible content area.
pub trait TextGeometry {
    /// What kind of widget this is.
    fn widget_kind(&self) -> WidgetKind;

    /// The current full text.
    fn text(&self) -> SharedString;

    /// Size of the visible content area, or `None` before it has been laid out.
    fn content_size(&self) -> Option<Size<Pixels>>;

    /// Bounding box of the glyph at `index` (a `char` index), relative to the
    /// content area. `None` beyond the end of the text.
    fn character_bounds(&self, index: usize) -> Option<Bounds<Pixels>>;

    /// Scroll position of a text area.
    fn scroll_offset(&self) -> Point<Pixels>;

    /// Where the content region sits inside a text field.
    fn content_origin(&self) -> Point<Pixels>;
}

/// Read/write access to the host's native selection color.
pub trait SelectionColorProvider {
    /// The color the host paints selections with.
    fn selection_color(&self) -> Rgba;

    /// Replaces the selection color.
    fn set_selection_color(&mut self, color: Rgba);
}

/// Everything a [`crate::Highlighter`] needs from its widget.
pub trait TextInputHost: TextGeometry + SelectionColorProvider {
    /// Receives every finished canvas, to be installed as the content
    /// area's non-repeating background anchored at its origin.
    fn set_background(&mut self, _canvas: Arc<PixelCanvas>) {}
}

/// A host tagged with how its draw offset is derived.
#[derive(Debug)]
pub enum HostKind<H> {
    /// Text areas scroll their content, so the scroll position is the offset.
    MultiLine(H),
    /// Text fields do not scroll independently; the offset undoes the
    /// content region's placement inside the field.
    SingleLine(H),
}

/// Pixel offset applied to every glyph box before drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOffset {
    /// Horizontal offset in pixels.
    pub left: f64,
    /// Vertical offset in pixels.
    pub top: f64,
}

impl<H: TextGeometry> HostKind<H> {
    /// Tags `host` by its reported widget kind.
    pub fn new(host: H) -> Result<Self> {
        match host.widget_kind() {
            WidgetKind::TextArea => Ok(Self::MultiLine(host)),
            WidgetKind::TextField => Ok(Self::SingleLine(host)),
            WidgetKind::Other(name) => Err(HighlightError::invalid_argument(format!(
                "highlighting needs a text area or text field, got {name}"
            ))),
        }
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        match self {
            Self::MultiLine(host) | Self::SingleLine(host) => host,
        }
    }

    /// The wrapped host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        match self {
            Self::MultiLine(host) | Self::SingleLine(host) => host,
        }
    }

    /// Unwraps the host.
    pub fn into_host(self) -> H {
        match self {
            Self::MultiLine(host) | Self::SingleLine(host) => host,
        }
    }

    /// Offset to add to glyph boxes so they land on the canvas.
    pub fn draw_offset(&self) -> DrawOffset {
        match self {
            Self::MultiLine(host) => {
                let scroll = host.scroll_offset();
                DrawOffset {
                    left: scroll.x.to_f64(),
                    top: scroll.y.to_f64(),
                }
            }
            Self::SingleLine(host) => {
                let origin = host.content_origin();
                DrawOffset {
                    left: -origin.x.to_f64(),
                    top: -origin.y.to_f64(),
                }
            }
        }
    }
}
