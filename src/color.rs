use egui::Color32;

use crate::error::ThemeError;

/// RGBA color with float components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Outline color of the rubber-band rectangle
    pub const MARQUEE: Color = Color::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(
            to_byte(color.r),
            to_byte(color.g),
            to_byte(color.b),
            to_byte(color.a),
        )
    }
}

/// Parses a `#RRGGBB` string. Alpha is always fully opaque.
pub fn hex_to_color(hex: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidHex(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f32, ThemeError> {
        let value = u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())?;
        Ok(value as f32 / 255.0)
    };

    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
}
