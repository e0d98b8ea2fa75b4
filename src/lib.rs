//! Kolor - HSB-first color values
//!
//! This library provides:
//! - A [`Color`] trait with hue/saturation/brightness as the source of truth
//!   and every RGB channel, packing, and operation derived on demand
//! - [`StaticColor`] plus constructors from channels, packed integers, HSB,
//!   and hex strings
//! - Lazily evaluated variants: [`BlendedColor`], [`GradientColor`],
//!   [`ThemedColor`], and [`AnimatedColor`]
//! - The CSS named colors with nearest-color search ([`named_colors`])
//! - A fluent [`ColorTransform`] builder, easing helpers, and TOML themes
//!
//! # Example
//!
//! ```
//! use kolor::{named_colors, Color, StaticColor};
//!
//! let color = StaticColor::parse_hex("#CC3F3F").unwrap();
//! let closest = named_colors().find_closest(&color).unwrap();
//! assert_eq!(closest.name, "indianred");
//! assert_eq!(color.lighten(1.0).to_hex(false), "#FFFFFF");
//! ```

pub mod color;
pub mod convert;
pub mod easing;
pub mod named;
pub mod static_color;
pub mod theme;
pub mod transform;
pub mod variants;

pub use color::{Color, ColorError};
pub use convert::{hsb_to_rgb, rgb_to_hsb, Hsb};
pub use named::{named_colors, NamedColor, NamedColors};
pub use static_color::StaticColor;
pub use theme::{Theme, ThemeError};
pub use transform::ColorTransform;
pub use variants::{AnimatedColor, BlendedColor, GradientColor, GradientType, ThemedColor};
