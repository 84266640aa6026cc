//! Plaque configuration system
//!
//! Loads label and font settings from `plaque.toml` so demos and hosts can
//! adjust rendering without recompiling. Environment variables override
//! file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration structure for plaque.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlaqueConfig {
    /// Font selection settings
    pub font: FontConfig,
    /// Label style settings
    pub label: LabelConfig,
}

/// Font selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Path to a font file (.ttf/.otf) to register before resolving
    pub file: Option<PathBuf>,
    /// Family name to render with
    pub family: String,
}

/// Label style configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Text to render
    pub text: Option<String>,
    /// Font size in logical pixels
    pub size: Option<f32>,
    /// Foreground color (CSS-style string)
    pub color: String,
    /// Background color; omitted means transparent
    pub background: Option<String>,
    /// Padding shorthand: 1, 2 or 4 values
    pub padding: Vec<f32>,
    /// Supersampling scale factor
    pub scale: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            file: None,
            family: "sans-serif".to_string(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: None,
            size: None,
            color: "black".to_string(),
            background: None,
            padding: Vec::new(),
            scale: 1.0,
        }
    }
}

impl PlaqueConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from `plaque.toml` in the current directory, or return defaults
    /// if the file doesn't exist or doesn't parse.
    pub fn load_or_default() -> Self {
        Self::load_from_file("plaque.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over file values, allowing
    /// temporary overrides without editing the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(file) = std::env::var("PLAQUE_FONT") {
            self.font.file = Some(PathBuf::from(file));
        }
        if let Ok(family) = std::env::var("PLAQUE_FAMILY") {
            self.font.family = family;
        }
        if let Ok(text) = std::env::var("PLAQUE_TEXT") {
            self.label.text = Some(text);
        }
        if let Ok(val) = std::env::var("PLAQUE_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.label.size = Some(size);
            }
        }
        if let Ok(color) = std::env::var("PLAQUE_COLOR") {
            self.label.color = color;
        }
        if let Ok(bg) = std::env::var("PLAQUE_BACKGROUND") {
            self.label.background = Some(bg);
        }
        if let Ok(val) = std::env::var("PLAQUE_SCALE") {
            if let Ok(scale) = val.parse::<f32>() {
                self.label.scale = scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let cfg: PlaqueConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.font.family, "sans-serif");
        assert_eq!(cfg.label.color, "black");
        assert_eq!(cfg.label.scale, 1.0);
        assert!(cfg.label.text.is_none());
        assert!(cfg.label.padding.is_empty());
    }

    #[test]
    fn parses_label_table() {
        let cfg: PlaqueConfig = toml::from_str(
            r##"
            [font]
            family = "Inter"

            [label]
            text = "Player One"
            size = 24.0
            color = "#ffffff"
            background = "rgba(0, 0, 0, 0.5)"
            padding = [4.0, 8.0]
            scale = 2.0
            "##,
        )
        .unwrap();
        assert_eq!(cfg.font.family, "Inter");
        assert_eq!(cfg.label.text.as_deref(), Some("Player One"));
        assert_eq!(cfg.label.size, Some(24.0));
        assert_eq!(cfg.label.padding, vec![4.0, 8.0]);
        assert_eq!(cfg.label.scale, 2.0);
    }

    #[test]
    fn load_errors_are_typed() {
        let dir = std::env::temp_dir();

        let path = dir.join("plaque-config-malformed.toml");
        std::fs::write(&path, "[label\ntext =").unwrap();
        match PlaqueConfig::load_from_file(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected a parse error, got {other:?}"),
        }
        std::fs::remove_file(&path).ok();

        match PlaqueConfig::load_from_file(dir.join("plaque-config-does-not-exist.toml")) {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }
}
