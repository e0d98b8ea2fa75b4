//! Theme file schema
//!
//! ```toml
//! name = "dark"
//!
//! [colors]
//! background = "#1E1E1E"
//! accent = "#80FF0000"   # AARRGGBB
//! link = "cornflowerblue"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw theme document as written on disk. Values are unvalidated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFile {
    /// Theme name
    #[serde(default)]
    pub name: String,
    /// Key -> hex string or CSS color name
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}
