//! Derived color variants.
//!
//! Each variant implements [`Color`](crate::Color) by producing its HSB
//! values on read instead of storing them:
//! - [`BlendedColor`]: interpolates between two colors by a ratio
//! - [`GradientColor`]: a two-stop blend tagged with a [`GradientType`]
//! - [`ThemedColor`]: resolves a key through a resolver function
//! - [`AnimatedColor`]: resolves a timestamp through an animator function
//!
//! Alpha is always fixed when the variant is constructed.

pub mod animated;
pub mod blended;
pub mod gradient;
pub mod themed;

pub use animated::AnimatedColor;
pub use blended::BlendedColor;
pub use gradient::{GradientColor, GradientType};
pub use themed::ThemedColor;
