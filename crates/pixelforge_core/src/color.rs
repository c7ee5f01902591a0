//! RGBA colour type used by the renderer and rasterizer.
//!
//! World data stores colours as CSS hex strings (`"#3b82f6"`); this module
//! turns them into four `f32` channels in the 0.0 – 1.0 range.  Values stay
//! in sRGB encoding, exactly as written in the hex string, so a round trip
//! through [`Color::to_rgba8`] gives back the original bytes.
//!
//! # Example
//! ```rust,ignore
//! use pixelforge_core::Color;
//!
//! let blue = Color::from_hex_str("#3b82f6")?;
//! let short = Color::from_hex_str("#fff")?;
//! let glass = Color::from_hex_str("#ffffff80")?;
//!
//! let [r, g, b, a] = blue.to_rgba8();
//! ```

use thiserror::Error;

/// sRGB-encoded RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour `{0}` does not start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 3, 4, 6 or 8 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    // ── Constructors ────────────────────────────────────────────────────────

    /// Opaque colour from red, green, blue components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from all four components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from 8-bit components including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a CSS hex colour: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// Short forms expand each digit (`#f80` is `#ff8800`).
    pub fn from_hex_str(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

        let [r, g, b, a] = match digits.len() {
            3 => [nibble(0) * 17, nibble(1) * 17, nibble(2) * 17, 255],
            4 => [nibble(0) * 17, nibble(1) * 17, nibble(2) * 17, nibble(3) * 17],
            6 => [byte(0), byte(2), byte(4), 255],
            8 => [byte(0), byte(2), byte(4), byte(6)],
            _ => return Err(ColorError::BadLength(s.to_string())),
        };
        Ok(Self::from_rgba8(r, g, b, a))
    }

    // ── Conversions ─────────────────────────────────────────────────────────

    /// Quantise to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    // ── Palette ─────────────────────────────────────────────────────────────

    pub const WHITE:   Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK:   Self = Self::rgb(0.0, 0.0, 0.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_hex() {
        let c = Color::from_hex_str("#3b82f6").unwrap();
        assert_eq!(c.to_rgba8(), [0x3b, 0x82, 0xf6, 0xff]);
    }

    #[test]
    fn short_hex_expands() {
        let c = Color::from_hex_str("#f80").unwrap();
        assert_eq!(c.to_rgba8(), [0xff, 0x88, 0x00, 0xff]);
    }

    #[test]
    fn alpha_hex() {
        let c = Color::from_hex_str("#00000080").unwrap();
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn malformed_hex() {
        assert_eq!(
            Color::from_hex_str("3b82f6"),
            Err(ColorError::MissingHash("3b82f6".into()))
        );
        assert_eq!(
            Color::from_hex_str("#12345"),
            Err(ColorError::BadLength("#12345".into()))
        );
        assert_eq!(
            Color::from_hex_str("#zzzzzz"),
            Err(ColorError::BadDigit("#zzzzzz".into()))
        );
    }

    #[test]
    fn channels_keep_srgb_encoding() {
        // mid grey stays 128/255; a linear conversion would give ~0.216
        let grey = Color::from_hex_str("#808080").unwrap();
        assert_eq!(grey.r, 128.0 / 255.0);
        assert_eq!(grey, Color::from_rgba8(0x80, 0x80, 0x80, 0xff));
    }
}
