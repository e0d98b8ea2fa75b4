//! Easing curves and keyframe color cycling for animated colors
//!
//! [`cycle_animator`] builds an animator function for
//! [`AnimatedColor`](crate::AnimatedColor) that loops through a list of
//! color stops, spending `period` time units on each transition.
//!
//! # Example
//!
//! ```
//! use kolor::easing::{cycle_animator, Easing};
//! use kolor::{Color, StaticColor};
//!
//! let animate = cycle_animator(
//!     vec![StaticColor::rgb(0, 0, 0), StaticColor::rgb(255, 255, 255)],
//!     1000,
//!     Easing::Linear,
//! );
//! assert_eq!(animate(0).channels(), (0, 0, 0, 255));
//! assert_eq!(animate(1000).channels(), (255, 255, 255, 255));
//! assert_eq!(animate(2000).channels(), (0, 0, 0, 255));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::static_color::StaticColor;

/// Timing curve applied to a normalized progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    EaseOut,
    /// Smooth S-curve
    EaseInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            // quadratic
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    /// Parse a curve name such as `"ease-in-out"`.
    pub fn parse(s: &str) -> Option<Easing> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease-in" | "ease_in" | "easein" => Some(Easing::EaseIn),
            "ease-out" | "ease_out" | "easeout" => Some(Easing::EaseOut),
            "ease-in-out" | "ease_in_out" | "easeinout" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

/// A ratio provider that sweeps `0.0..=1.0` once per `period`, eased.
///
/// Useful as a [`BlendedColor`](crate::BlendedColor) or
/// [`GradientColor`](crate::GradientColor) provider. A zero period pins
/// the ratio at `0.0`.
pub fn sweep(
    time_provider: impl Fn() -> u64 + 'static,
    period: u64,
    easing: Easing,
) -> impl Fn() -> f32 + 'static {
    move || {
        if period == 0 {
            return 0.0;
        }
        let phase = (time_provider() % period) as f32 / period as f32;
        easing.apply(phase)
    }
}

/// An animator that loops through `stops`, mixing between neighbors.
///
/// Stop `i` is shown exactly at `t = i * period`; after the last stop the
/// animation blends back into the first. With fewer than two stops or a
/// zero period the output is constant (opaque black when `stops` is empty).
pub fn cycle_animator(
    stops: Vec<StaticColor>,
    period: u64,
    easing: Easing,
) -> impl Fn(u64) -> StaticColor + 'static {
    move |t| {
        let len = stops.len() as u64;
        if len == 0 {
            return StaticColor::default();
        }
        if len == 1 || period == 0 {
            return stops[0];
        }

        let step = (t / period) % len;
        let progress = (t % period) as f32 / period as f32;
        let from = &stops[step as usize];
        let to = &stops[((step + 1) % len) as usize];
        from.mix(to, easing.apply(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} should start at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} should end at 1", easing);
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
    }

    #[test]
    fn test_parse_easing() {
        assert_eq!(Easing::parse("ease-in-out"), Some(Easing::EaseInOut));
        assert_eq!(Easing::parse("EASE_IN"), Some(Easing::EaseIn));
        assert_eq!(Easing::parse("bounce"), None);
    }

    #[test]
    fn test_sweep_wraps() {
        let now = std::rc::Rc::new(std::cell::Cell::new(0u64));
        let clock = std::rc::Rc::clone(&now);
        let ratio = sweep(move || clock.get(), 100, Easing::Linear);
        assert_eq!(ratio(), 0.0);
        now.set(50);
        assert_eq!(ratio(), 0.5);
        now.set(150);
        assert_eq!(ratio(), 0.5);
    }

    #[test]
    fn test_cycle_animator_loops_through_stops() {
        let red = StaticColor::rgb(255, 0, 0);
        let green = StaticColor::rgb(0, 255, 0);
        let blue = StaticColor::rgb(0, 0, 255);
        let animate = cycle_animator(vec![red, green, blue], 100, Easing::Linear);

        assert_eq!(animate(0), red);
        assert_eq!(animate(100), green);
        assert_eq!(animate(200), blue);
        assert_eq!(animate(300), red);
        assert_eq!(animate(50).channels(), (127, 127, 0, 255));
        // last stop blends back into the first; (127, 0, 127) stores hue 0
        assert_eq!(animate(250).channels(), (127, 0, 0, 255));
    }

    #[test]
    fn test_cycle_animator_degenerate_inputs() {
        let red = StaticColor::rgb(255, 0, 0);
        assert_eq!(cycle_animator(vec![], 100, Easing::Linear)(42), StaticColor::default());
        assert_eq!(cycle_animator(vec![red], 100, Easing::Linear)(42), red);
        assert_eq!(cycle_animator(vec![red, StaticColor::default()], 0, Easing::Linear)(42), red);
    }

    #[test]
    fn test_easing_serde_names() {
        let json = serde_json::to_string(&Easing::EaseInOut).expect("serialize");
        assert_eq!(json, "\"ease-in-out\"");
    }
}
