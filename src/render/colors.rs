//! State tag → fill color lookup for the chart.

use crate::errors::{AppError, AppResult};
use crate::models::StateTag;
use std::collections::BTreeMap;

/// RGB color with components in `0.0..=1.0`, as pdf-writer expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

/// Named colors accepted in the configuration (CSS / matplotlib basic names).
fn named_color(name: &str) -> Option<Rgb> {
    let (r, g, b) = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "dimgray" | "dimgrey" => (105, 105, 105),
        "gainsboro" => (220, 220, 220),
        "red" => (255, 0, 0),
        "darkred" => (139, 0, 0),
        "orange" => (255, 165, 0),
        "gold" => (255, 215, 0),
        "yellow" => (255, 255, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "teal" => (0, 128, 128),
        "cyan" | "aqua" => (0, 255, 255),
        "skyblue" => (135, 206, 235),
        "steelblue" => (70, 130, 180),
        "blue" => (0, 0, 255),
        "navy" => (0, 0, 128),
        "midnightblue" => (25, 25, 112),
        "purple" => (128, 0, 128),
        "magenta" | "fuchsia" => (255, 0, 255),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "tan" => (210, 180, 140),
        _ => return None,
    };
    Some(Rgb::from_bytes(r, g, b))
}

/// Parse a color name or `#rrggbb`.
pub fn parse_color(value: &str) -> AppResult<Rgb> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (byte(0), byte(2), byte(4)) {
                return Ok(Rgb::from_bytes(r, g, b));
            }
        }
        return Err(AppError::UnknownColor(value.to_string()));
    }

    named_color(value).ok_or_else(|| AppError::UnknownColor(value.to_string()))
}

/// Resolved color key: one fill color per state tag.
#[derive(Debug, Clone, Default)]
pub struct ColorKey {
    colors: BTreeMap<StateTag, Rgb>,
}

impl ColorKey {
    /// Build from the configuration map (tag key → color name).
    pub fn from_config(map: &BTreeMap<String, String>) -> AppResult<Self> {
        let mut colors = BTreeMap::new();

        for (key, value) in map {
            let tag = StateTag::from_key(key).ok_or_else(|| {
                AppError::Config(format!(
                    "color key '{key}' must be a single state tag character"
                ))
            })?;
            colors.insert(tag, parse_color(value)?);
        }

        Ok(Self { colors })
    }

    pub fn contains(&self, tag: StateTag) -> bool {
        self.colors.contains_key(&tag)
    }

    /// Fill color for a tag; unknown tags are an error, never a default.
    pub fn resolve(&self, tag: StateTag) -> AppResult<Rgb> {
        self.colors
            .get(&tag)
            .copied()
            .ok_or(AppError::UnknownTag(tag.code()))
    }

    /// Fail on the first tag without a color.
    pub fn ensure_covers(&self, tags: &[StateTag]) -> AppResult<()> {
        for tag in tags {
            self.resolve(*tag)?;
        }
        Ok(())
    }
}
