//! Config struct definition and default implementation.

use crate::template::DEFAULT_PLACEHOLDER_PREFIX;
use serde::Deserialize;

/// File name of the config inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration for msgtpl.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Storage
    // =========================================================================
    /// Template store file. Relative paths are resolved against the data
    /// directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    // =========================================================================
    // Authoring
    // =========================================================================
    /// Prefix of the hint generated for each field (`Enter` gives "Enter name").
    #[serde(default = "default_placeholder_prefix")]
    pub placeholder_prefix: String,

    // =========================================================================
    // Display and generation
    // =========================================================================
    /// Characters of content shown per template in `list`.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Refuse to generate while any field is unfilled.
    #[serde(default)]
    pub require_all_fields: bool,
}

fn default_store_file() -> String {
    "templates.json".to_string()
}

fn default_placeholder_prefix() -> String {
    DEFAULT_PLACEHOLDER_PREFIX.to_string()
}

fn default_preview_length() -> usize {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            placeholder_prefix: default_placeholder_prefix(),
            preview_length: default_preview_length(),
            require_all_fields: false,
        }
    }
}
