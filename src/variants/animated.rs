//! Colors driven by a clock.

use std::fmt;

use crate::color::Color;
use crate::convert::Hsb;

/// A color computed as `animator(time_provider())` on every read.
///
/// Alpha follows the same two policies as
/// [`ThemedColor`](crate::ThemedColor): 255 by default, or the animated
/// color's alpha sampled once at construction.
pub struct AnimatedColor<C> {
    time_provider: Box<dyn Fn() -> u64>,
    animator: Box<dyn Fn(u64) -> C>,
    alpha: u8,
}

impl<C: Color> AnimatedColor<C> {
    /// Opaque animated color. Timestamps are opaque to this type; callers
    /// usually supply milliseconds.
    pub fn new(
        time_provider: impl Fn() -> u64 + 'static,
        animator: impl Fn(u64) -> C + 'static,
    ) -> Self {
        Self::with_alpha_value(time_provider, animator, 255)
    }

    pub fn with_alpha_value(
        time_provider: impl Fn() -> u64 + 'static,
        animator: impl Fn(u64) -> C + 'static,
        alpha: u8,
    ) -> Self {
        Self {
            time_provider: Box::new(time_provider),
            animator: Box::new(animator),
            alpha,
        }
    }

    /// Animated color whose alpha is sampled from the animation once, now.
    pub fn with_resolved_alpha(
        time_provider: impl Fn() -> u64 + 'static,
        animator: impl Fn(u64) -> C + 'static,
    ) -> Self {
        let alpha = animator(time_provider()).alpha();
        Self::with_alpha_value(time_provider, animator, alpha)
    }

    /// Sample the animation at the current time.
    pub fn backed_color(&self) -> C {
        (self.animator)((self.time_provider)())
    }
}

impl<C: Color> Color for AnimatedColor<C> {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn hue(&self) -> f32 {
        self.backed_color().hue()
    }

    fn saturation(&self) -> f32 {
        self.backed_color().saturation()
    }

    fn brightness(&self) -> f32 {
        self.backed_color().brightness()
    }

    fn to_hsb(&self) -> Hsb {
        self.backed_color().to_hsb()
    }
}

impl<C> fmt::Debug for AnimatedColor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedColor")
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}
