use std::sync::LazyLock;

use gpui::Pixels;
use serde::{Deserialize, Serialize};

use super::deserializers::{de_pixels, de_unit_interval};
use crate::error::{HighlightError, Result};

/// Built-in configuration, parsed on first use.
pub static DEFAULT_CONFIG: LazyLock<HighlighterConfig> = LazyLock::new(|| {
    HighlighterConfig::from_json(include_str!("../../config/default.json")).unwrap()
});

/// Drawing constants for a [`crate::Highlighter`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HighlighterConfig {
    /// Alpha applied to the host's selection color when a highlighter is attached.
    #[serde(deserialize_with = "de_unit_interval")]
    pub selection_opacity: f32,
    /// Extra width and height given to the canvas beyond the content area.
    #[serde(deserialize_with = "de_pixels")]
    pub canvas_margin: Pixels,
    /// How far highlight blocks start below the top of the glyph box.
    #[serde(deserialize_with = "de_pixels")]
    pub highlight_inset_top: Pixels,
    /// How much shorter highlight blocks are than the glyph box.
    #[serde(deserialize_with = "de_pixels")]
    pub highlight_height_reduction: Pixels,
    /// Underlines are raised by `line_height / underline_rise_divisor`.
    pub underline_rise_divisor: f32,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl HighlighterConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self> {
        let config: HighlighterConfig = serde_json::from_str(str.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants that serde alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.selection_opacity) {
            return Err(HighlightError::invalid_argument(
                "selection opacity must be between 0.0 and 1.0",
            ));
        }
        if !(self.underline_rise_divisor.is_finite() && self.underline_rise_divisor > 0.0) {
            return Err(HighlightError::invalid_argument(
                "underline rise divisor must be a positive number",
            ));
        }
        if self.canvas_margin.to_f64() < 0.0 {
            return Err(HighlightError::invalid_argument(
                "canvas margin must not be negative",
            ));
        }
        Ok(())
    }
}
