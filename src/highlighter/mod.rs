//! Rasterizes highlight and underline annotations for a text widget.
//!
//! A [`Highlighter`] owns its host, the pending annotations and the last
//! finished canvas. Every pass paints onto a freshly allocated canvas, so
//! running [`Highlighter::refresh`] twice over unchanged inputs yields identical
//! pixels. Hosts decide when to redraw, either by calling `refresh` after a
//! change or by calling [`Highlighter::refresh_if_stale`] from their render loop.

mod annotations;
pub use annotations::*;

mod host;
pub use host::*;

mod painter;

use std::sync::Arc;

use gpui::{Rgba, SharedString};
use highlight_primitives::{PixelCanvas, RgbaExt, substring_indices};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::HighlighterConfig;
use crate::error::{HighlightError, Result};
use self::painter::AnnotationPainter;

/// Inputs a finished canvas was drawn from.
#[derive(Debug, Clone, PartialEq)]
struct FrameInputs {
    revision: u64,
    text: SharedString,
    content_size: (f64, f64),
    offset: DrawOffset,
}

/// Paints annotations onto a background canvas for a text area or text field.
pub struct Highlighter<H> {
    host: HostKind<H>,
    annotations: AnnotationStore,
    config: HighlighterConfig,
    background: Option<Arc<PixelCanvas>>,
    last_frame: Option<FrameInputs>,
}

impl<H: TextInputHost> Highlighter<H> {
    /// Attaches to `host` with the built-in configuration.
    ///
    /// Fails if the host is neither a text area nor a text field.
    pub fn new(host: H) -> Result<Self> {
        Self::with_config(host, HighlighterConfig::default())
    }

    /// Attaches to `host` and applies `config`'s selection opacity.
    pub fn with_config(host: H, config: HighlighterConfig) -> Result<Self> {
        config.validate()?;
        let host = HostKind::new(host)?;

        let mut this = Self {
            host,
            annotations: AnnotationStore::default(),
            config,
            background: None,
            last_frame: None,
        };
        this.set_selection_opacity(this.config.selection_opacity)?;
        Ok(this)
    }

    /// Marks every occurrence of `substring` and redraws.
    pub fn add_substring(
        &mut self,
        style: HighlightStyle,
        substring: impl Into<SharedString>,
        color: Rgba,
    ) -> Result<()> {
        self.annotations.add_substring(style, substring, color)?;
        self.refresh();
        Ok(())
    }

    /// Marks the character at `index` and redraws.
    pub fn add_index<I>(&mut self, style: HighlightStyle, index: I, color: Rgba) -> Result<()>
    where
        I: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.annotations.add_index(style, index, color)?;
        self.refresh();
        Ok(())
    }

    /// Drops all substring annotations without redrawing.
    pub fn clear_substrings(&mut self) {
        self.annotations.clear_substrings();
    }

    /// Drops all index annotations without redrawing.
    pub fn clear_indices(&mut self) {
        self.annotations.clear_indices();
    }

    /// Pending annotations.
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// The last finished canvas, if any pass has completed.
    pub fn background(&self) -> Option<&Arc<PixelCanvas>> {
        self.background.as_ref()
    }

    /// The decorated widget.
    pub fn host(&self) -> &H {
        self.host.host()
    }

    /// The decorated widget, mutably. Changes made through this are picked up
    /// by the next [`Self::refresh`] or [`Self::refresh_if_stale`].
    pub fn host_mut(&mut self) -> &mut H {
        self.host.host_mut()
    }

    /// Detaches and returns the widget.
    pub fn into_host(self) -> H {
        self.host.into_host()
    }

    /// Active drawing constants.
    pub fn config(&self) -> &HighlighterConfig {
        &self.config
    }

    /// Redraws the background from scratch and hands it to the host.
    ///
    /// Returns `false` without touching the previous background when there is
    /// nothing to draw: no annotations, or a content area that is not laid out
    /// or is less than a pixel wide or tall.
    pub fn refresh(&mut self) -> bool {
        if self.annotations.is_empty() {
            trace!("no annotations, skipping highlight pass");
            return false;
        }

        let geometry = self.host.host();
        let Some(content_size) = geometry.content_size() else {
            trace!("content area not laid out, skipping highlight pass");
            return false;
        };

        let content_width = content_size.width.to_f64();
        let content_height = content_size.height.to_f64();
        if content_width as i32 <= 0 || content_height as i32 <= 0 {
            debug!(
                width = content_width,
                height = content_height,
                "empty content area, skipping highlight pass"
            );
            return false;
        }

        let margin = self.config.canvas_margin.to_f64();
        let mut canvas = PixelCanvas::new(
            (content_width + margin) as u32,
            (content_height + margin) as u32,
        );

        let text = geometry.text();
        let offset = self.host.draw_offset();
        let painter = AnnotationPainter::new(geometry, &self.config, offset, text.is_empty());

        let combined = combined_annotations(&self.annotations, &text);
        debug!(
            width = canvas.width(),
            height = canvas.height(),
            annotations = combined.len(),
            underline_offset = painter.underline_offset(),
            "painting highlight canvas"
        );

        for annotation in &combined {
            painter.paint(&mut canvas, annotation);
        }

        let canvas = Arc::new(canvas);
        self.last_frame = Some(FrameInputs {
            revision: self.annotations.revision(),
            text,
            content_size: (content_width, content_height),
            offset,
        });
        self.background = Some(canvas.clone());
        self.host.host_mut().set_background(canvas);
        true
    }

    /// Redraws only if the annotations, text, content size or draw offset
    /// changed since the last finished pass.
    pub fn refresh_if_stale(&mut self) -> bool {
        let Some(last_frame) = self.last_frame.as_ref() else {
            return self.refresh();
        };

        let geometry = self.host.host();
        let content_size = geometry
            .content_size()
            .map(|size| (size.width.to_f64(), size.height.to_f64()));

        let unchanged = last_frame.revision == self.annotations.revision()
            && Some(last_frame.content_size) == content_size
            && last_frame.offset == self.host.draw_offset()
            && last_frame.text == geometry.text();

        if unchanged {
            trace!("highlight canvas is current");
            return false;
        }
        self.refresh()
    }

    /// Replaces the alpha channel of the host's selection color.
    pub fn set_selection_opacity(&mut self, opacity: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(HighlightError::invalid_argument(format!(
                "selection opacity must be between 0.0 and 1.0, got {opacity}"
            )));
        }

        let host = self.host.host_mut();
        let color = host.selection_color().with_opacity(opacity);
        host.set_selection_color(color);
        Ok(())
    }

    /// Alpha channel of the host's selection color.
    pub fn selection_opacity(&self) -> f32 {
        self.host.host().selection_color().a
    }

    /// The host's selection color.
    pub fn selection_color(&self) -> Rgba {
        self.host.host().selection_color()
    }

    /// Replaces the host's selection color, opacity included.
    pub fn set_selection_color(&mut self, color: Rgba) {
        self.host.host_mut().set_selection_color(color);
    }
}

/// Index annotations first, followed by every substring annotation expanded
/// against `text`. Later entries overwrite earlier ones where they overlap.
fn combined_annotations(
    annotations: &AnnotationStore,
    text: &str,
) -> SmallVec<[IndexAnnotation; 16]> {
    let mut combined: SmallVec<[IndexAnnotation; 16]> =
        annotations.indices().iter().copied().collect();

    for annotation in annotations.substrings() {
        combined.extend(
            substring_indices(text, &annotation.substring)
                .into_iter()
                .map(|index| IndexAnnotation {
                    style: annotation.style,
                    index,
                    color: annotation.color,
                }),
        );
    }

    combined
}
