use gpui::{Pixels, px};
use serde::{Deserialize, Deserializer, de::Error};

/// Accepts a bare number or a string such as `"100px"`.
pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match PixelLength::deserialize(deserializer)? {
        PixelLength::Number(value) => Ok(px(value)),
        PixelLength::Text(text) => text
            .strip_suffix("px")
            .and_then(|value| value.trim().parse::<f32>().ok())
            .map(px)
            .ok_or_else(|| {
                D::Error::custom(format!("expected a pixel length such as \"100px\", got {text:?}"))
            }),
    }
}

pub fn de_unit_interval<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;

    if !(0.0..=1.0).contains(&value) {
        return Err(D::Error::custom(format!(
            "expected a value between 0.0 and 1.0, got {value}"
        )));
    }

    Ok(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PixelLength {
    Number(f32),
    Text(String),
}
