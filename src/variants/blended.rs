//! Two-color blending with a one-shot ratio override.

use std::cell::Cell;
use std::fmt;

use crate::color::Color;
use crate::convert::Hsb;

/// Interpolates HSB between `from` and `to` as `from + (to - from) * ratio`.
///
/// The ratio comes from a provider function evaluated on every read. A value
/// passed to [`set_ratio`](Self::set_ratio) overrides the provider for
/// exactly one read, after which the provider takes over again.
///
/// One read is one HSB observation: [`to_hsb`](Color::to_hsb), or any
/// derived channel or operation. Calling `hue()`, `saturation()` and
/// `brightness()` separately is three reads.
///
/// The override slot is a plain [`Cell`], so a `BlendedColor` is not `Sync`
/// and must not be shared between a writer and readers on other threads
/// without external synchronization.
pub struct BlendedColor<F, T> {
    from: F,
    to: T,
    alpha: u8,
    ratio_provider: Box<dyn Fn() -> f32>,
    pending_ratio: Cell<Option<f32>>,
}

impl<F: Color, T: Color> BlendedColor<F, T> {
    /// Blend driven by `ratio_provider`. Alpha is taken from `from` once.
    pub fn new(from: F, to: T, ratio_provider: impl Fn() -> f32 + 'static) -> Self {
        let alpha = from.alpha();
        Self {
            from,
            to,
            alpha,
            ratio_provider: Box::new(ratio_provider),
            pending_ratio: Cell::new(None),
        }
    }

    /// Blend with a constant ratio.
    pub fn with_fixed_ratio(from: F, to: T, ratio: f32) -> Self {
        Self::new(from, to, move || ratio)
    }

    /// Replace the ratio provider. A pending override is kept.
    pub fn with_provider(self, ratio_provider: impl Fn() -> f32 + 'static) -> Self {
        Self {
            ratio_provider: Box::new(ratio_provider),
            ..self
        }
    }

    pub fn from_color(&self) -> &F {
        &self.from
    }

    pub fn to_color(&self) -> &T {
        &self.to
    }

    /// Override the ratio for the next read only.
    pub fn set_ratio(&self, ratio: f32) {
        self.pending_ratio.set(Some(ratio));
    }

    /// Whether an override is waiting to be consumed.
    pub fn has_pending_ratio(&self) -> bool {
        self.pending_ratio.get().is_some()
    }

    /// Consume the pending override, or ask the provider.
    pub fn next_ratio(&self) -> f32 {
        self.pending_ratio
            .take()
            .unwrap_or_else(|| (self.ratio_provider)())
    }
}

impl<F: Color, T: Color> Color for BlendedColor<F, T> {
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
        let ratio = self.next_ratio();
        self.from.to_hsb().lerp(&self.to.to_hsb(), ratio)
    }
}

impl<F: fmt::Debug, T: fmt::Debug> fmt::Debug for BlendedColor<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlendedColor")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("alpha", &self.alpha)
            .field("pending_ratio", &self.pending_ratio.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticColor;
    use std::rc::Rc;

    fn black_to_white(ratio: f32) -> BlendedColor<StaticColor, StaticColor> {
        BlendedColor::with_fixed_ratio(
            StaticColor::hsb(0.0, 0.0, 0.0),
            StaticColor::hsb(1.0, 1.0, 1.0),
            ratio,
        )
    }

    #[test]
    fn test_interpolates_hsb() {
        let blend = black_to_white(0.25);
        assert_eq!(blend.to_hsb(), Hsb::new(0.25, 0.25, 0.25));
        assert_eq!(blend.hue(), 0.25);
    }

    #[test]
    fn test_alpha_from_first_color() {
        let blend = BlendedColor::with_fixed_ratio(
            StaticColor::rgba(0, 0, 0, 40),
            StaticColor::rgba(255, 255, 255, 255),
            1.0,
        );
        assert_eq!(blend.alpha(), 40);
        assert_eq!(blend.channels().3, 40);
    }

    #[test]
    fn test_override_consumed_once() {
        let blend = black_to_white(0.8);
        blend.set_ratio(0.3);
        assert!(blend.has_pending_ratio());

        let overridden = blend.to_hsb();
        assert!((overridden.hue - 0.3).abs() < 1e-6);
        assert!((overridden.saturation - 0.3).abs() < 1e-6);
        assert!((overridden.brightness - 0.3).abs() < 1e-6);
        assert!(!blend.has_pending_ratio());

        let resumed = blend.to_hsb();
        assert!((resumed.hue - 0.8).abs() < 1e-6);
        assert!((resumed.brightness - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_separate_accessors_are_separate_reads() {
        let blend = black_to_white(0.8);
        blend.set_ratio(0.3);
        assert!((blend.hue() - 0.3).abs() < 1e-6);
        assert!((blend.saturation() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_provider_called_per_read() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let black = StaticColor::rgb(0, 0, 0);
        let blend = BlendedColor::new(black, black, move || {
            counter.set(counter.get() + 1);
            0.5
        });

        blend.to_hsb();
        blend.red();
        assert_eq!(calls.get(), 2);

        blend.set_ratio(0.1);
        blend.to_hsb();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_live_provider() {
        let ratio = Rc::new(Cell::new(0.0f32));
        let source = Rc::clone(&ratio);
        let blend = BlendedColor::new(
            StaticColor::hsb(0.0, 1.0, 0.0),
            StaticColor::hsb(0.0, 1.0, 1.0),
            move || source.get(),
        );

        assert_eq!(blend.channels(), (0, 0, 0, 255));
        ratio.set(1.0);
        assert_eq!(blend.channels(), (255, 0, 0, 255));
    }

    #[test]
    fn test_nested_blends() {
        let inner = black_to_white(0.5);
        let outer = BlendedColor::with_fixed_ratio(inner, StaticColor::hsb(0.0, 0.0, 0.0), 0.5);
        assert!((outer.brightness() - 0.25).abs() < 1e-6);
        assert!((outer.from_color().brightness() - 0.5).abs() < 1e-6);
    }
}
