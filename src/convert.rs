//! HSB <-> RGB conversion
//!
//! Pure numeric transforms between hue/saturation/brightness triples and
//! packed 24-bit RGB integers. Rounding is round-half-up (`+0.5` then
//! truncate) on `f32`, so results are reproducible bit-for-bit.

/// A hue/saturation/brightness triple, each component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self { hue, saturation, brightness }
    }

    /// Linear interpolation of every component: `self + (other - self) * ratio`.
    pub fn lerp(&self, other: &Hsb, ratio: f32) -> Hsb {
        Hsb {
            hue: lerp(self.hue, other.hue, ratio),
            saturation: lerp(self.saturation, other.saturation, ratio),
            brightness: lerp(self.brightness, other.brightness, ratio),
        }
    }
}

fn lerp(from: f32, to: f32, ratio: f32) -> f32 {
    from + (to - from) * ratio
}

/// Scale a unit component to a channel, rounding half up.
fn channel(component: f32) -> u32 {
    (component * 255.0 + 0.5) as u32
}

/// Convert an HSB triple to a packed `0xRRGGBB` integer.
///
/// Uses the classic six-sector algorithm. A sector outside `0..=5` cannot
/// happen for a finite hue but yields black.
///
/// # Examples
///
/// ```
/// use kolor::convert::hsb_to_rgb;
///
/// assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), 0xFF0000);
/// assert_eq!(hsb_to_rgb(0.5, 0.0, 1.0), 0xFFFFFF);
/// ```
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> u32 {
    let (r, g, b) = if saturation == 0.0 {
        let v = channel(brightness);
        (v, v, v)
    } else {
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        match h as i32 {
            0 => (channel(brightness), channel(t), channel(p)),
            1 => (channel(q), channel(brightness), channel(p)),
            2 => (channel(p), channel(brightness), channel(t)),
            3 => (channel(p), channel(q), channel(brightness)),
            4 => (channel(t), channel(p), channel(brightness)),
            5 => (channel(brightness), channel(p), channel(q)),
            _ => (0, 0, 0),
        }
    };

    (r << 16) | (g << 8) | b
}

/// Convert 8-bit RGB channels to an HSB triple.
///
/// Hue is 0 for any achromatic input. The red branch wins ties for the
/// maximum channel, then green.
///
/// Negative hues are clamped to 0 rather than wrapped. When red is the
/// maximum and blue exceeds green the hue collapses to 0, so those inputs
/// do not survive a round trip: `#FF00FF` converts back as `#FF0000`.
pub fn rgb_to_hsb(red: u8, green: u8, blue: u8) -> Hsb {
    let cmax = red.max(green).max(blue);
    let cmin = red.min(green).min(blue);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    let hue = if saturation != 0.0 {
        let span = (cmax - cmin) as f32;
        let redc = (cmax - red) as f32 / span;
        let greenc = (cmax - green) as f32 / span;
        let bluec = (cmax - blue) as f32 / span;

        let sector = if cmax == red {
            bluec - greenc
        } else if cmax == green {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };

        // red max with blue > green lands here too
        (sector / 6.0).max(0.0)
    } else {
        0.0
    };

    Hsb { hue, saturation, brightness }
}

/// Pack three channels into `0xRRGGBB`.
pub fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Split a packed `0xAARRGGBB`-style integer into `(alpha, red, green, blue)`.
pub fn unpack_argb(packed: u32) -> (u8, u8, u8, u8) {
    (
        ((packed >> 24) & 0xFF) as u8,
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_to_rgb_primaries() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), 0xFF0000);
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), 0x00FF00);
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), 0x0000FF);
    }

    #[test]
    fn test_hsb_to_rgb_grayscale_fast_path() {
        // hue is ignored when saturation is zero
        assert_eq!(hsb_to_rgb(0.7, 0.0, 0.5), 0x808080);
        assert_eq!(hsb_to_rgb(0.0, 0.0, 0.0), 0x000000);
        assert_eq!(hsb_to_rgb(0.0, 0.0, 1.0), 0xFFFFFF);
    }

    #[test]
    fn test_hsb_to_rgb_hue_wraps() {
        assert_eq!(hsb_to_rgb(1.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(-0.5, 1.0, 1.0), hsb_to_rgb(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_hsb_to_rgb_rounds_half_up() {
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(hsb_to_rgb(0.0, 0.0, 0.5) & 0xFF, 128);
    }

    #[test]
    fn test_rgb_to_hsb_primaries() {
        assert_eq!(rgb_to_hsb(255, 0, 0), Hsb::new(0.0, 1.0, 1.0));
        let green = rgb_to_hsb(0, 255, 0);
        assert!((green.hue - 1.0 / 3.0).abs() < 1e-6);
        let blue = rgb_to_hsb(0, 0, 255);
        assert!((blue.hue - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hsb_achromatic() {
        assert_eq!(rgb_to_hsb(0, 0, 0), Hsb::new(0.0, 0.0, 0.0));
        let gray = rgb_to_hsb(128, 128, 128);
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!((gray.brightness - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hsb_never_negative() {
        // red max with blue > green goes through the clamp
        let hsb = rgb_to_hsb(255, 0, 10);
        assert!(hsb.hue >= 0.0);
        let hsb = rgb_to_hsb(255, 10, 10);
        assert_eq!(hsb.hue, 0.0);
    }

    #[test]
    fn test_rgb_to_hsb_red_max_blue_over_green_collapses() {
        assert_eq!(rgb_to_hsb(255, 0, 255).hue, 0.0);
        let hsb = rgb_to_hsb(255, 0, 255);
        assert_eq!(hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness), 0xFF0000);
        let hsb = rgb_to_hsb(3, 0, 1);
        assert_eq!(hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness), 0x030000);
    }

    #[test]
    fn test_round_trip_all_channels() {
        for r in (0..=255u32).step_by(3) {
            for g in (0..=255u32).step_by(5) {
                for b in 0..=255u32 {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    // collapses to hue 0, see test above
                    if r >= g && r >= b && b > g {
                        continue;
                    }
                    let hsb = rgb_to_hsb(r, g, b);
                    assert_eq!(
                        hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness),
                        pack_rgb(r, g, b),
                        "round trip failed for ({}, {}, {})",
                        r,
                        g,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsb_lerp() {
        let a = Hsb::new(0.0, 0.0, 0.0);
        let b = Hsb::new(1.0, 1.0, 1.0);
        assert_eq!(a.lerp(&b, 0.25), Hsb::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_unpack_argb() {
        assert_eq!(unpack_argb(0x80FF1020), (0x80, 0xFF, 0x10, 0x20));
    }
}
