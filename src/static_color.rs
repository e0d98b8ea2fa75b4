//! Static colors and construction entry points
//!
//! Supports the following inputs:
//! - Channels: `rgb(r, g, b)`, `rgba(r, g, b, a)`, `argb(a, r, g, b)`
//! - Packed integers: `0xRRGGBB`, `0xAARRGGBB`
//! - HSB: `hsb(h, s, b)`, `hsba(h, s, b, a)`
//! - Hex strings: `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError};
use crate::convert::{rgb_to_hsb, unpack_argb, Hsb};

/// A color whose hue, saturation, and brightness are fixed at construction.
///
/// Equality and hashing compare the derived `(red, green, blue, alpha)`
/// channels, so two values built from different but equivalent HSB triples
/// are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StaticColor {
    alpha: u8,
    hsb: Hsb,
}

impl StaticColor {
    /// Create from an HSB triple and alpha.
    pub fn from_hsb(hsb: Hsb, alpha: u8) -> Self {
        Self { alpha, hsb }
    }

    pub fn hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::hsba(hue, saturation, brightness, 255)
    }

    pub fn hsba(hue: f32, saturation: f32, brightness: f32, alpha: u8) -> Self {
        Self::from_hsb(Hsb::new(hue, saturation, brightness), alpha)
    }

    /// Create from red, green, and blue (alpha = 255).
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_hsb(rgb_to_hsb(red, green, blue), alpha)
    }

    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, alpha)
    }

    /// Create from a packed `0xRRGGBB`. Any top byte is ignored; alpha is 255.
    pub fn from_rgb(packed: u32) -> Self {
        let (_, r, g, b) = unpack_argb(packed);
        Self::rgb(r, g, b)
    }

    /// Create from a packed `0xAARRGGBB`.
    pub fn from_argb(packed: u32) -> Self {
        let (a, r, g, b) = unpack_argb(packed);
        Self::rgba(r, g, b, a)
    }

    /// Create from a packed rgba value. Same layout as [`from_argb`](Self::from_argb):
    /// alpha lives in the top byte.
    pub fn from_rgba(packed: u32) -> Self {
        Self::from_argb(packed)
    }

    /// Snapshot any color into a static value.
    pub fn from_color<C: Color + ?Sized>(color: &C) -> Self {
        let (r, g, b, a) = color.channels();
        Self::rgba(r, g, b, a)
    }

    /// Parse a hex color string.
    ///
    /// The leading `#` is optional. Accepted lengths:
    /// - 3 digits: `RGB`, each digit doubled (`F` -> `FF`), alpha = 255
    /// - 6 digits: `RRGGBB`, alpha = 255
    /// - 8 digits: `AARRGGBB`, alpha first
    ///
    /// # Examples
    ///
    /// ```
    /// use kolor::{Color, StaticColor};
    ///
    /// let red = StaticColor::parse_hex("#F00").unwrap();
    /// assert_eq!(red.channels(), (255, 0, 0, 255));
    ///
    /// let faded = StaticColor::parse_hex("80FF0000").unwrap();
    /// assert_eq!(faded.alpha(), 128);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] for any other length and
    /// [`ColorError::InvalidDigit`] for a non-hexadecimal character.
    pub fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let cleaned = hex.strip_prefix('#').unwrap_or(hex);
        let len = cleaned.chars().count();
        if !matches!(len, 3 | 6 | 8) {
            return Err(ColorError::InvalidLength { input: hex.to_string(), len });
        }

        let digits = cleaned
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| ColorError::InvalidDigit { input: hex.to_string(), digit: c })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let pair = |i: usize| digits[i] * 16 + digits[i + 1];

        Ok(match len {
            3 => Self::rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17),
            6 => Self::rgb(pair(0), pair(2), pair(4)),
            _ => Self::rgba(pair(2), pair(4), pair(6), pair(0)),
        })
    }

    /// A color with uniformly random red, green, and blue.
    pub fn random(alpha: u8) -> Self {
        Self::rgba(fastrand::u8(..), fastrand::u8(..), fastrand::u8(..), alpha)
    }
}

impl Color for StaticColor {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn hue(&self) -> f32 {
        self.hsb.hue
    }

    fn saturation(&self) -> f32 {
        self.hsb.saturation
    }

    fn brightness(&self) -> f32 {
        self.hsb.brightness
    }

    fn to_hsb(&self) -> Hsb {
        self.hsb
    }
}

impl PartialEq for StaticColor {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for StaticColor {}

impl Hash for StaticColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
    }
}

impl Default for StaticColor {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

/// Formats as `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
impl fmt::Display for StaticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(!self.is_opaque()))
    }
}

impl FromStr for StaticColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for StaticColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<StaticColor> for String {
    fn from(color: StaticColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_six_digits() {
        let color = StaticColor::parse_hex("#FF0000").expect("valid hex");
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 0);
        assert_eq!(color.blue(), 0);
        assert_eq!(color.alpha(), 255);
    }

    #[test]
    fn test_parse_hex_eight_digits_alpha_first() {
        let color = StaticColor::parse_hex("#80FF0000").expect("valid hex");
        assert_eq!(color.channels(), (255, 0, 0, 128));
    }

    #[test]
    fn test_parse_hex_three_digits() {
        let color = StaticColor::parse_hex("#F80").expect("valid hex");
        assert_eq!(color.channels(), (255, 136, 0, 255));
    }

    #[test]
    fn test_parse_hex_without_hash_and_lowercase() {
        let color = StaticColor::parse_hex("cc3f3f").expect("valid hex");
        assert_eq!(color.channels(), (0xCC, 0x3F, 0x3F, 255));
    }

    #[test]
    fn test_parse_hex_invalid_length() {
        assert_eq!(
            StaticColor::parse_hex("#12345"),
            Err(ColorError::InvalidLength { input: "#12345".to_string(), len: 5 })
        );
        assert!(matches!(
            StaticColor::parse_hex(""),
            Err(ColorError::InvalidLength { len: 0, .. })
        ));
        // #RGBA is not supported
        assert!(matches!(
            StaticColor::parse_hex("#F00F"),
            Err(ColorError::InvalidLength { len: 4, .. })
        ));
    }

    #[test]
    fn test_parse_hex_invalid_digit() {
        assert_eq!(
            StaticColor::parse_hex("#GG0000"),
            Err(ColorError::InvalidDigit { input: "#GG0000".to_string(), digit: 'G' })
        );
        assert!(matches!(
            StaticColor::parse_hex("+F0"),
            Err(ColorError::InvalidDigit { digit: '+', .. })
        ));
    }

    #[test]
    fn test_error_messages_name_input() {
        let err = StaticColor::parse_hex("#12").expect_err("too short");
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn test_packed_constructors() {
        assert_eq!(StaticColor::from_rgb(0x80FF0000).channels(), (255, 0, 0, 255));
        assert_eq!(StaticColor::from_argb(0x80FF0000).channels(), (255, 0, 0, 128));
        assert_eq!(StaticColor::from_rgba(0x80FF0000), StaticColor::from_argb(0x80FF0000));
        assert_eq!(StaticColor::argb(1, 2, 3, 4).channels(), (2, 3, 4, 1));
    }

    #[test]
    fn test_hsb_constructors() {
        let color = StaticColor::hsba(0.5, 1.0, 1.0, 7);
        assert_eq!(color.channels(), (0, 255, 255, 7));
        assert_eq!(color.hue(), 0.5);
    }

    #[test]
    fn test_equality_by_channels() {
        // hue is irrelevant for grays
        assert_eq!(StaticColor::hsb(0.3, 0.0, 1.0), StaticColor::rgb(255, 255, 255));
        assert_ne!(StaticColor::rgb(1, 1, 1), StaticColor::rgba(1, 1, 1, 0));
    }

    #[test]
    fn test_random_keeps_alpha() {
        for _ in 0..32 {
            assert_eq!(StaticColor::random(12).alpha(), 12);
        }
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(StaticColor::rgb(0xAB, 1, 0).to_string(), "#AB0100");
        assert_eq!(StaticColor::rgba(0xAB, 1, 0, 0x10).to_string(), "#10AB0100");
        let parsed: StaticColor = "#10AB0100".parse().expect("valid hex");
        assert_eq!(parsed, StaticColor::rgba(0xAB, 1, 0, 0x10));
    }

    #[test]
    fn test_red_max_blue_over_green_renders_without_blue() {
        let magenta = StaticColor::parse_hex("#FF00FF").expect("valid hex");
        assert_eq!(magenta.to_string(), "#FF0000");
        assert_eq!(magenta.hue(), 0.0);
        assert_eq!(StaticColor::rgb(0xAB, 0, 1).to_string(), "#AB0000");
        assert_eq!(magenta.name(), Some("fuchsia"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = StaticColor::rgba(255, 0, 0, 128);
        let json = serde_json::to_string(&color).expect("serialize");
        assert_eq!(json, "\"#80FF0000\"");
        let back: StaticColor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, color);
        assert!(serde_json::from_str::<StaticColor>("\"#XYZ\"").is_err());
    }

    #[test]
    fn test_from_color_snapshot() {
        let boxed: Box<dyn Color> = Box::new(StaticColor::rgb(9, 8, 7));
        assert_eq!(StaticColor::from_color(&*boxed), StaticColor::rgb(9, 8, 7));
    }
}
