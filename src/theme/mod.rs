//! Themes: named sets of colors loaded from TOML.
//!
//! A [`Theme`] is the usual resolver behind a [`ThemedColor`]. Keep the
//! theme in an `Rc<RefCell<_>>` and build colors with
//! [`Theme::themed_color`] so that swapping the theme is picked up on the
//! next read.

pub mod loader;
pub mod schema;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub use loader::{load_theme, parse_theme, to_theme_file, ThemeError};
pub use schema::ThemeFile;

use crate::static_color::StaticColor;
use crate::variants::ThemedColor;

/// A validated theme: key -> color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    name: String,
    colors: BTreeMap<String, StaticColor>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
        }
    }

    /// Parse a TOML theme document.
    ///
    /// # Errors
    ///
    /// See [`parse_theme`].
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        parse_theme(content)
    }

    /// Serialize back to TOML, colors as hex.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if TOML encoding fails.
    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string(&to_theme_file(self))?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<StaticColor> {
        self.colors.get(key).copied()
    }

    pub fn color_or(&self, key: &str, fallback: StaticColor) -> StaticColor {
        self.get(key).unwrap_or(fallback)
    }

    /// Add or replace a color, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, color: StaticColor) -> Option<StaticColor> {
        self.colors.insert(key.into(), color)
    }

    /// A themed color that reads `key` from the shared theme on every
    /// access. Missing keys resolve to opaque black.
    pub fn themed_color(
        theme: &Rc<RefCell<Theme>>,
        key: impl Into<String>,
    ) -> ThemedColor<String, StaticColor> {
        let theme = Rc::clone(theme);
        ThemedColor::named(key, move |key: &String| {
            theme.borrow().color_or(key, StaticColor::default())
        })
    }
}
