use gpui::Rgba;
use thiserror::Error;

/// A fully transparent color.
pub const TRANSPARENT: Rgba = Rgba {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Builds an annotation color from a `0xRRGGBB` value and an opacity.
/// Bits above the low 24 are ignored.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Rgba {
        r: channel(16),
        g: channel(8),
        b: channel(0),
        a,
    }
}

/// Opacity adjustments on annotation and selection colors.
pub trait RgbaExt {
    /// Replaces the opacity channel, leaving RGB untouched.
    fn with_opacity(self, opacity: f32) -> Self;

    /// Scales the opacity channel by `factor`.
    fn fade(self, factor: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn with_opacity(self, opacity: f32) -> Self {
        Rgba { a: opacity, ..self }
    }

    fn fade(self, factor: f32) -> Self {
        Rgba {
            a: self.a * factor,
            ..self
        }
    }
}

/// Error returned by [`blend`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlendError {
    /// Both inputs have zero opacity, so there is no weighting to apply.
    #[error("cannot blend two fully transparent colors")]
    FullyTransparent,
}

/// Combines two translucent colors.
///
/// Each color's RGB channels are weighted by its share of the summed opacity.
/// The resulting opacity is the larger of the two inputs.
pub fn blend(first: Rgba, second: Rgba) -> Result<Rgba, BlendError> {
    let total = first.a + second.a;
    if total == 0.0 {
        return Err(BlendError::FullyTransparent);
    }

    let first_weight = first.a / total;
    let second_weight = second.a / total;

    Ok(Rgba {
        r: first_weight * first.r + second_weight * second.r,
        g: first_weight * first.g + second_weight * second.g,
        b: first_weight * first.b + second_weight * second.b,
        a: first.a.max(second.a),
    })
}
