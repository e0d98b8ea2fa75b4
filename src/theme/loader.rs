//! Theme loading and validation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::schema::ThemeFile;
use super::Theme;
use crate::color::{Color, ColorError};
use crate::named::named_colors;
use crate::static_color::StaticColor;

/// Theme loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
    /// File I/O error
    #[error("Failed to read theme: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error
    #[error("Failed to write theme: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A color value is neither a hex color nor a known color name
    #[error("Invalid color for '{key}': {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorError,
    },
}

/// Load a theme from a TOML file.
///
/// # Errors
///
/// Returns `ThemeError` if the file cannot be read or parsed, or if any
/// color value is invalid.
pub fn load_theme(path: &Path) -> Result<Theme, ThemeError> {
    let content = fs::read_to_string(path)?;
    let theme = parse_theme(&content)?;
    tracing::debug!(
        path = %path.display(),
        name = theme.name(),
        colors = theme.len(),
        "loaded theme"
    );
    Ok(theme)
}

/// Parse and validate a theme document.
pub fn parse_theme(content: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = toml::from_str(content)?;
    validate(file)
}

/// Convert a raw document into a theme, parsing every value.
pub fn validate(file: ThemeFile) -> Result<Theme, ThemeError> {
    let colors = file
        .colors
        .into_iter()
        .map(|(key, value)| match parse_value(&value) {
            Ok(color) => Ok((key, color)),
            Err(source) => Err(ThemeError::InvalidColor { key, source }),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(Theme { name: file.name, colors })
}

/// Hex first, then the CSS color names.
fn parse_value(value: &str) -> Result<StaticColor, ColorError> {
    let value = value.trim();
    match StaticColor::parse_hex(value) {
        Ok(color) => Ok(color),
        Err(err) => named_colors().color_by_name(value).ok_or(err),
    }
}

/// Render a theme back into a document. Colors are written as hex.
pub fn to_theme_file(theme: &Theme) -> ThemeFile {
    ThemeFile {
        name: theme.name.clone(),
        colors: theme
            .colors
            .iter()
            .map(|(key, color)| (key.clone(), color.to_hex(!color.is_opaque())))
            .collect(),
    }
}
