//! Colors resolved from a theme key.

use std::fmt;

use crate::color::Color;
use crate::convert::Hsb;

/// A color looked up by key on every read.
///
/// The resolved color is never cached, so swapping the theme behind the
/// resolver is visible on the next read. Alpha is fixed at construction:
/// 255 by default, or the resolved color's alpha at that moment with
/// [`with_resolved_alpha`](Self::with_resolved_alpha).
pub struct ThemedColor<K, C> {
    key: K,
    resolver: Box<dyn Fn(&K) -> C>,
    alpha: u8,
}

impl<K, C: Color> ThemedColor<K, C> {
    /// Opaque themed color.
    pub fn new(key: K, resolver: impl Fn(&K) -> C + 'static) -> Self {
        Self::with_alpha_value(key, resolver, 255)
    }

    /// Themed color with a fixed alpha.
    pub fn with_alpha_value(key: K, resolver: impl Fn(&K) -> C + 'static, alpha: u8) -> Self {
        Self {
            key,
            resolver: Box::new(resolver),
            alpha,
        }
    }

    /// Themed color whose alpha is the resolved color's alpha, read once now.
    pub fn with_resolved_alpha(key: K, resolver: impl Fn(&K) -> C + 'static) -> Self {
        let alpha = resolver(&key).alpha();
        Self::with_alpha_value(key, resolver, alpha)
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Resolve the key now.
    pub fn backed_color(&self) -> C {
        (self.resolver)(&self.key)
    }
}

impl<C: Color> ThemedColor<String, C> {
    /// Opaque themed color keyed by name.
    pub fn named(key: impl Into<String>, resolver: impl Fn(&String) -> C + 'static) -> Self {
        Self::new(key.into(), resolver)
    }
}

impl<K, C: Color> Color for ThemedColor<K, C> {
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

impl<K: fmt::Debug, C> fmt::Debug for ThemedColor<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedColor")
            .field("key", &self.key)
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}
