//! Two-stop gradients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::convert::Hsb;
use crate::variants::blended::BlendedColor;

/// How a renderer should lay out a gradient. Not interpreted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// Stops spread along a line
    #[default]
    Linear,
    /// Stops spread outward from a center
    Radial,
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientType::Linear => write!(f, "linear"),
            GradientType::Radial => write!(f, "radial"),
        }
    }
}

/// A blend between two stops, keyed by a position ratio, carrying a
/// [`GradientType`] hint.
///
/// Interpolation and the one-shot override protocol are those of
/// [`BlendedColor`]. Unlike a plain blend, alpha is supplied explicitly.
pub struct GradientColor<F, T> {
    blend: BlendedColor<F, T>,
    gradient_type: GradientType,
    alpha: u8,
}

impl<F: Color, T: Color> GradientColor<F, T> {
    /// Gradient positioned at the first stop until a ratio is supplied.
    pub fn new(first: F, second: T, gradient_type: GradientType, alpha: u8) -> Self {
        Self {
            blend: BlendedColor::with_fixed_ratio(first, second, 0.0),
            gradient_type,
            alpha,
        }
    }

    /// Replace the position provider.
    pub fn with_ratio_provider(self, provider: impl Fn() -> f32 + 'static) -> Self {
        let Self { blend, gradient_type, alpha } = self;
        Self {
            blend: blend.with_provider(provider),
            gradient_type,
            alpha,
        }
    }

    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    pub fn first(&self) -> &F {
        self.blend.from_color()
    }

    pub fn second(&self) -> &T {
        self.blend.to_color()
    }

    /// Snap to `ratio` for the next read only.
    pub fn set_ratio(&self, ratio: f32) {
        self.blend.set_ratio(ratio);
    }

    pub fn has_pending_ratio(&self) -> bool {
        self.blend.has_pending_ratio()
    }
}

impl<F: Color, T: Color> Color for GradientColor<F, T> {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn hue(&self) -> f32 {
        self.to_hsb().hue
    }

    fn saturation(&self) -> f32 {
        self.to_hsb().saturation
    }

    fn brightness(&self) -> f32 {
        self.to_hsb().brightness
    }

    fn to_hsb(&self) -> Hsb {
        self.blend.to_hsb()
    }
}

impl<F: fmt::Debug, T: fmt::Debug> fmt::Debug for GradientColor<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientColor")
            .field("blend", &self.blend)
            .field("gradient_type", &self.gradient_type)
            .field("alpha", &self.alpha)
            .finish()
    }
}
