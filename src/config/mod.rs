//! Display settings for the contributed node kinds
//!
//! Handles loading settings from an optional TOML file and merging with
//! defaults. Every field has a default so a missing file never blocks the
//! host from rendering.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Palette for node rendering, packed 0xRRGGBB to match the host's scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default = "default_type_color")]
    pub type_color: u32,
    #[serde(default = "default_name_color")]
    pub name_color: u32,
    #[serde(default = "default_value_color")]
    pub value_color: u32,
    #[serde(default = "default_offset_color")]
    pub offset_color: u32,
    #[serde(default = "default_comment_color")]
    pub comment_color: u32,
    #[serde(default = "default_address_color")]
    pub address_color: u32,
}

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub colors: ColorScheme,

    /// Upper bound on TArray elements rendered while expanded
    #[serde(default = "default_max_array_elements")]
    pub max_array_elements: usize,

    /// Upper bound on FString characters shown in the value preview
    #[serde(default = "default_max_string_preview")]
    pub max_string_preview: usize,
}

fn default_type_color() -> u32 {
    0x00008B // dark blue
}

fn default_name_color() -> u32 {
    0x000000
}

fn default_value_color() -> u32 {
    0xB22222 // firebrick
}

fn default_offset_color() -> u32 {
    0xFF0000
}

fn default_comment_color() -> u32 {
    0x006400 // dark green
}

fn default_address_color() -> u32 {
    0x808080
}

fn default_max_array_elements() -> usize {
    32
}

fn default_max_string_preview() -> usize {
    64
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            type_color: default_type_color(),
            name_color: default_name_color(),
            value_color: default_value_color(),
            offset_color: default_offset_color(),
            comment_color: default_comment_color(),
            address_color: default_address_color(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            colors: ColorScheme::default(),
            max_array_elements: default_max_array_elements(),
            max_string_preview: default_max_string_preview(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Serializes the settings back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Loads settings from a TOML file, falling back to defaults when absent
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path)?;
    Settings::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_array_elements, 32);
        assert_eq!(settings.max_string_preview, 64);
        assert_eq!(settings.colors.type_color, 0x00008B);
    }

    #[test]
    fn test_partial_toml_merges_with_defaults() {
        let settings = Settings::from_toml("max_array_elements = 8").unwrap();
        assert_eq!(settings.max_array_elements, 8);
        assert_eq!(settings.max_string_preview, 64);
    }

    #[test]
    fn test_nested_color_override() {
        let settings = Settings::from_toml(
            r#"
            [colors]
            value_color = 0xFF00FF
            "#,
        )
        .unwrap();
        assert_eq!(settings.colors.value_color, 0xFF00FF);
        assert_eq!(settings.colors.name_color, 0x000000);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Settings::from_toml("max_array_elements = \"many\"").is_err());
    }

    #[test]
    fn test_load_settings_missing_file_yields_defaults() {
        let settings = load_settings("definitely/not/here.toml").unwrap();
        assert_eq!(settings.max_array_elements, 32);
    }

    #[test]
    fn test_load_settings_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut settings = Settings::default();
        settings.max_string_preview = 16;
        write!(file, "{}", settings.to_toml().unwrap()).unwrap();

        let loaded = load_settings(file.path()).unwrap();
        assert_eq!(loaded.max_string_preview, 16);
        assert_eq!(loaded.colors.comment_color, settings.colors.comment_color);
    }
}
