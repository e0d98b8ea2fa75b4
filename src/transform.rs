//! Fluent color transforms.
//!
//! # Example
//!
//! ```
//! use kolor::{Color, ColorTransform, StaticColor};
//!
//! let base = StaticColor::rgb(255, 0, 0);
//! let result = ColorTransform::new(&base)
//!     .rotate_hue(120.0)
//!     .darken(0.5)
//!     .with_alpha(128)
//!     .build();
//! assert_eq!(result.channels(), (0, 127, 0, 128));
//! ```

use crate::color::Color;
use crate::static_color::StaticColor;

/// Folds a sequence of color operations into one static value.
///
/// The base is read lazily: it is observed by the first operation, or by
/// [`build`](Self::build) if no operation is applied.
pub struct ColorTransform<'a> {
    current: Current<'a>,
}

enum Current<'a> {
    Base(&'a dyn Color),
    Applied(StaticColor),
}

impl<'a> ColorTransform<'a> {
    pub fn new(base: &'a dyn Color) -> Self {
        Self { current: Current::Base(base) }
    }

    fn apply(self, op: impl FnOnce(&dyn Color) -> StaticColor) -> Self {
        let next = match &self.current {
            Current::Base(base) => op(*base),
            Current::Applied(color) => op(color),
        };
        Self { current: Current::Applied(next) }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.apply(|c| c.lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.apply(|c| c.darken(amount))
    }

    pub fn rotate_hue(self, degrees: f32) -> Self {
        self.apply(|c| c.rotate_hue(degrees))
    }

    pub fn invert(self) -> Self {
        self.apply(|c| c.invert())
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        self.apply(|c| c.with_alpha(alpha))
    }

    /// The final value as a static snapshot.
    pub fn build(self) -> StaticColor {
        match self.current {
            Current::Base(base) => StaticColor::from_color(base),
            Current::Applied(color) => color,
        }
    }
}
