//! Named color registry.
//!
//! Holds the 148 CSS named colors (the 147 classic names plus
//! `rebeccapurple`) in a fixed order. The built-in registry is constructed
//! once by [`named_colors`] and is read-only afterwards. Every entry is also
//! available as a function in [`colors`], e.g. `colors::red()`.

mod table;

pub use table::colors;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::{Color, ColorError};
use crate::static_color::StaticColor;

type Channels = (u8, u8, u8, u8);

/// A single registered name and its color.
#[derive(Debug, Clone)]
pub struct NamedColor {
    pub name: Cow<'static, str>,
    pub color: StaticColor,
}

/// An ordered, immutable mapping between colors and lowercase names.
#[derive(Debug, Clone, Default)]
pub struct NamedColors {
    entries: Vec<NamedColor>,
    by_name: HashMap<String, usize>,
    by_channels: HashMap<Channels, usize>,
}

static BUILTIN: OnceLock<NamedColors> = OnceLock::new();

/// The built-in registry, constructed on first use.
pub fn named_colors() -> &'static NamedColors {
    BUILTIN.get_or_init(NamedColors::builtin)
}

impl NamedColors {
    /// Build the CSS named color registry in declaration order.
    pub fn builtin() -> Self {
        let registry = Self::from_entries(
            table::NAMED_COLORS
                .iter()
                .map(|&(name, rgb)| (Cow::Borrowed(name), StaticColor::from_rgb(rgb))),
        );
        tracing::debug!(entries = registry.len(), "built named color registry");
        registry
    }

    /// Build a registry from `(name, color)` pairs. Names are lowercased.
    /// When a name or a color value repeats, lookups return the first entry.
    pub fn from_entries<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, StaticColor)>,
        N: Into<Cow<'static, str>>,
    {
        let mut registry = Self::default();
        for (name, color) in entries {
            let name: Cow<'static, str> = name.into();
            let name = if name.chars().any(char::is_uppercase) {
                Cow::Owned(name.to_lowercase())
            } else {
                name
            };

            let index = registry.entries.len();
            registry.by_name.entry(name.to_string()).or_insert(index);
            registry.by_channels.entry(color.channels()).or_insert(index);
            registry.entries.push(NamedColor { name, color });
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Name of the first entry equal to `color` (alpha included).
    pub fn color_name<C: Color + ?Sized>(&self, color: &C) -> Option<&str> {
        self.name_for_channels(color.channels())
    }

    pub(crate) fn name_for_channels(&self, channels: Channels) -> Option<&str> {
        self.by_channels
            .get(&channels)
            .map(|&index| self.entries[index].name.as_ref())
    }

    /// Case-insensitive name lookup.
    pub fn color_by_name(&self, name: &str) -> Option<StaticColor> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| self.entries[index].color)
    }

    /// Whether `name` is registered (case-insensitive).
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Whether a registered entry equals `color` (alpha included).
    pub fn contains_color<C: Color + ?Sized>(&self, color: &C) -> bool {
        self.by_channels.contains_key(&color.channels())
    }

    /// The entry closest to `target` by RGB distance, alpha ignored.
    /// Ties go to the earliest registered entry.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyRegistry`] if there are no entries.
    pub fn find_closest<C: Color + ?Sized>(&self, target: &C) -> Result<&NamedColor, ColorError> {
        let (tr, tg, tb, _) = target.channels();
        let distance = |color: &StaticColor| {
            let (r, g, b, _) = color.channels();
            let dr = r as i32 - tr as i32;
            let dg = g as i32 - tg as i32;
            let db = b as i32 - tb as i32;
            dr * dr + dg * dg + db * db
        };

        // min_by_key keeps the last minimum; fold to keep the first
        self.entries
            .iter()
            .fold(None, |best: Option<(&NamedColor, i32)>, entry| {
                let d = distance(&entry.color);
                match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((entry, d)),
                }
            })
            .map(|(entry, _)| entry)
            .ok_or(ColorError::EmptyRegistry)
    }
}
