//! The color contract
//!
//! [`Color`] exposes alpha plus hue/saturation/brightness as the source of
//! truth. Every other channel and property is derived from those on demand,
//! so dynamic variants (blended, themed, animated) are re-evaluated on each
//! read. Derived operations always return a fresh [`StaticColor`].

use std::rc::Rc;

use thiserror::Error;

use crate::convert::{hsb_to_rgb, rgb_to_hsb, unpack_argb, Hsb};
use crate::named::named_colors;
use crate::static_color::StaticColor;

/// Error type for color construction and lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex string is not 3, 6, or 8 digits after the optional '#'
    #[error("invalid hex color '{input}': length {len}, expected 3, 6, or 8")]
    InvalidLength { input: String, len: usize },
    /// Hex string contains a non-hexadecimal character
    #[error("invalid hex color '{input}': '{digit}' is not a hex digit")]
    InvalidDigit { input: String, digit: char },
    /// Nearest-color search over a registry with no entries
    #[error("named color registry is empty")]
    EmptyRegistry,
}

/// A color value with alpha and a hue/saturation/brightness source of truth.
///
/// Implementors only provide [`alpha`](Color::alpha) and the three HSB
/// accessors. Dynamic variants should also override [`to_hsb`](Color::to_hsb)
/// so that a single observation reads one consistent snapshot.
///
/// Packed integers, channels, and every operation below go through one
/// `to_hsb()` call per operation.
pub trait Color {
    /// Alpha channel (0-255). Fixed for the life of the value.
    fn alpha(&self) -> u8;

    /// Hue in `0.0..1.0`.
    fn hue(&self) -> f32;

    /// Saturation in `0.0..=1.0`.
    fn saturation(&self) -> f32;

    /// Brightness in `0.0..=1.0`.
    fn brightness(&self) -> f32;

    /// One consistent HSB observation.
    fn to_hsb(&self) -> Hsb {
        Hsb::new(self.hue(), self.saturation(), self.brightness())
    }

    /// Packed `0xRRGGBB`.
    fn packed_rgb(&self) -> u32 {
        let hsb = self.to_hsb();
        hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness)
    }

    /// Packed `rgb | alpha << 24`.
    fn packed_rgba(&self) -> u32 {
        self.packed_rgb() | ((self.alpha() as u32) << 24)
    }

    /// Packed ARGB as historically computed: the alpha byte is
    /// `(alpha * 255) << 24`, so only the low byte of `alpha * 255` survives.
    /// Opaque colors therefore carry `0x01` in the top byte, not `0xFF`.
    ///
    /// Use [`packed_rgba`](Color::packed_rgba) for a conventional alpha byte.
    fn packed_argb(&self) -> u32 {
        (((self.alpha() as f32 * 255.0) as u32) << 24) | self.packed_rgb()
    }

    /// Red channel, taken from the rgba packing.
    fn red(&self) -> u8 {
        ((self.packed_rgba() >> 16) & 0xFF) as u8
    }

    /// Green channel, taken from the rgba packing.
    fn green(&self) -> u8 {
        ((self.packed_rgba() >> 8) & 0xFF) as u8
    }

    /// Blue channel, taken from the rgba packing.
    fn blue(&self) -> u8 {
        (self.packed_rgba() & 0xFF) as u8
    }

    /// `(red, green, blue, alpha)` from a single observation.
    fn channels(&self) -> (u8, u8, u8, u8) {
        let (a, r, g, b) = unpack_argb(self.packed_rgba());
        (r, g, b, a)
    }

    fn is_opaque(&self) -> bool {
        self.alpha() == 255
    }

    /// Any alpha other than 255. Also true for fully transparent colors.
    fn is_translucent(&self) -> bool {
        self.alpha() != 255
    }

    fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }

    fn is_grayscale(&self) -> bool {
        let (r, g, b, _) = self.channels();
        r == g && g == b
    }

    /// Registered name of this color, if it matches a named color exactly
    /// (alpha included).
    fn name(&self) -> Option<&'static str> {
        named_colors().name_for_channels(self.channels())
    }

    /// Mix with `other` on integer channels (alpha included).
    /// `0.0` keeps this color, `1.0` yields `other`.
    fn mix(&self, other: &dyn Color, ratio: f32) -> StaticColor {
        let ratio = ratio.clamp(0.0, 1.0);
        let inverse = 1.0 - ratio;
        let (r1, g1, b1, a1) = self.channels();
        let (r2, g2, b2, a2) = other.channels();
        let blend = |a: u8, b: u8| (a as f32 * inverse + b as f32 * ratio) as u8;

        StaticColor::rgba(blend(r1, r2), blend(g1, g2), blend(b1, b2), blend(a1, a2))
    }

    /// Move every RGB channel toward 255 by `amount` (`0.0..=1.0`).
    fn lighten(&self, amount: f32) -> StaticColor {
        let amount = amount.clamp(0.0, 1.0);
        let (r, g, b, a) = self.channels();
        let up = |c: u8| (c as u32 + ((255 - c) as f32 * amount) as u32).min(255) as u8;

        StaticColor::rgba(up(r), up(g), up(b), a)
    }

    /// Scale every RGB channel by `1 - amount` (`amount` in `0.0..=1.0`).
    fn darken(&self, amount: f32) -> StaticColor {
        let amount = amount.clamp(0.0, 1.0);
        let (r, g, b, a) = self.channels();
        let down = |c: u8| (c as f32 * (1.0 - amount)) as u8;

        StaticColor::rgba(down(r), down(g), down(b), a)
    }

    /// `255 - channel` on RGB; alpha unchanged.
    fn invert(&self) -> StaticColor {
        let (r, g, b, a) = self.channels();
        StaticColor::rgba(255 - r, 255 - g, 255 - b, a)
    }

    /// Multiply brightness by `factor`, clamped to `0.0..=1.0`.
    fn adjust_brightness(&self, factor: f32) -> StaticColor {
        let (r, g, b, a) = self.channels();
        let mut hsb = rgb_to_hsb(r, g, b);
        hsb.brightness = (hsb.brightness * factor).clamp(0.0, 1.0);

        StaticColor::from_rgb(hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness)).with_alpha(a)
    }

    /// Rotate hue by `degrees`, wrapping into `0.0..1.0` in both directions.
    fn rotate_hue(&self, degrees: f32) -> StaticColor {
        let (r, g, b, a) = self.channels();
        let mut hsb = rgb_to_hsb(r, g, b);
        hsb.hue = ((hsb.hue + degrees / 360.0) % 1.0 + 1.0) % 1.0;

        StaticColor::from_rgb(hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness)).with_alpha(a)
    }

    /// Every RGB channel set to the truncated average of the three.
    fn grayscale(&self) -> StaticColor {
        let (r, g, b, a) = self.channels();
        let gray = ((r as u32 + g as u32 + b as u32) / 3) as u8;
        StaticColor::rgba(gray, gray, gray, a)
    }

    fn with_alpha(&self, alpha: u8) -> StaticColor {
        let (r, g, b, _) = self.channels();
        StaticColor::rgba(r, g, b, alpha)
    }

    /// Replace alpha with `percent * 255`, rounded down.
    fn with_alpha_percentage(&self, percent: f32) -> StaticColor {
        self.with_alpha((percent * 255.0) as u8)
    }

    /// `#RRGGBB`, or `#AARRGGBB` when `include_alpha` is set. Uppercase.
    fn to_hex(&self, include_alpha: bool) -> String {
        let (r, g, b, a) = self.channels();
        if include_alpha {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        }
    }

    /// WCAG relative luminance (0.0 - 1.0).
    fn luminance(&self) -> f32 {
        fn linear(c: u8) -> f32 {
            let s = c as f32 / 255.0;
            if s <= 0.03928 {
                s / 12.92
            } else {
                ((s + 0.055) / 1.055).powf(2.4)
            }
        }

        let (r, g, b, _) = self.channels();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// WCAG contrast ratio, always `>= 1.0` (up to 21.0).
    fn contrast_ratio(&self, other: &dyn Color) -> f32 {
        let lum1 = self.luminance() + 0.05;
        let lum2 = other.luminance() + 0.05;
        if lum1 > lum2 {
            lum1 / lum2
        } else {
            lum2 / lum1
        }
    }

    /// True when every channel, alpha included, differs by at most `tolerance`.
    fn is_similar_to(&self, other: &dyn Color, tolerance: u8) -> bool {
        let (r1, g1, b1, a1) = self.channels();
        let (r2, g2, b2, a2) = other.channels();
        r1.abs_diff(r2) <= tolerance
            && g1.abs_diff(g2) <= tolerance
            && b1.abs_diff(b2) <= tolerance
            && a1.abs_diff(a2) <= tolerance
    }

    /// Euclidean distance over red, green, and blue.
    fn distance_to(&self, other: &dyn Color) -> f32 {
        let (r1, g1, b1, _) = self.channels();
        let (r2, g2, b2, _) = other.channels();
        let dr = r1 as i32 - r2 as i32;
        let dg = g1 as i32 - g2 as i32;
        let db = b1 as i32 - b2 as i32;
        ((dr * dr + dg * dg + db * db) as f32).sqrt()
    }

    /// 50/50 mix.
    fn combine_average(&self, other: &dyn Color) -> StaticColor {
        self.mix(other, 0.5)
    }

    /// Multiply blend: `a * b / 255` on every channel, alpha included.
    fn modulate(&self, other: &dyn Color) -> StaticColor {
        let (r1, g1, b1, a1) = self.channels();
        let (r2, g2, b2, a2) = other.channels();
        let times = |a: u8, b: u8| ((a as f32 * b as f32 / 255.0) as i32).clamp(0, 255) as u8;

        StaticColor::rgba(times(r1, r2), times(g1, g2), times(b1, b2), times(a1, a2))
    }

    /// Alias for [`adjust_brightness`](Color::adjust_brightness).
    fn scale(&self, factor: f32) -> StaticColor {
        self.adjust_brightness(factor)
    }

    /// Alias for [`invert`](Color::invert).
    fn negate(&self) -> StaticColor {
        self.invert()
    }
}

macro_rules! forward_color {
    ($($ty:ty),*) => {
        $(
            impl<C: Color + ?Sized> Color for $ty {
                fn alpha(&self) -> u8 {
                    (**self).alpha()
                }

                fn hue(&self) -> f32 {
                    (**self).hue()
                }

                fn saturation(&self) -> f32 {
                    (**self).saturation()
                }

                fn brightness(&self) -> f32 {
                    (**self).brightness()
                }

                fn to_hsb(&self) -> Hsb {
                    (**self).to_hsb()
                }
            }
        )*
    };
}

forward_color!(&C, Box<C>, Rc<C>);
