//! TOML configuration file support.
//!
//! View settings can be kept in a config file instead of repeating flags:
//!
//! ```toml
//! # fuelmap.toml
//! [view]
//! width = 1024
//! height = 768
//! padding = 40
//! hit_radius_px = 8
//! ```
//!
//! Flags given on the command line override values from the file.

use anyhow::{Context, Result};
use fuelmap::map::{MapFile, SeriesKind, Visibility};
use fuelmap::view::ViewConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ViewArgs;

/// Root configuration structure for fuelmap.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Drawing surface and hit-test settings.
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl ViewArgs {
    /// Settings from the config file (if any) with flag overrides applied.
    pub fn view_config(&self) -> Result<ViewConfig> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?.view,
            None => ViewConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, base: ViewConfig) -> ViewConfig {
        let config = base.with_size(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        );
        match self.padding {
            Some(padding) => config.with_padding(padding),
            None => config,
        }
    }

    /// Series visibility selected by the flags.
    pub fn visibility(&self) -> Visibility {
        Visibility::default()
            .with_series(SeriesKind::Secondary, !self.gasoline_only)
            .with_series(SeriesKind::Primary, !self.gas_only)
    }
}

/// Load every map file, applying the same visibility to each.
pub fn load_all(paths: &[PathBuf], visibility: Visibility) -> Result<Vec<MapFile>> {
    paths
        .iter()
        .map(|path| {
            MapFile::load(path)
                .map(|file| file.with_visibility(visibility))
                .with_context(|| format!("Failed to load map file: {}", path.display()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [view]
            width = 1024
            height = 768
            padding = 20
            hit_radius_px = 8
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.view.width, 1024.0);
        assert_eq!(config.view.height, 768.0);
        assert_eq!(config.view.padding, 20.0);
        assert_eq!(config.view.hit_radius_px, 8.0);
        assert_eq!(config.view.margin_fraction, 0.05);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.view, ViewConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[view]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let args = ViewArgs {
            width: Some(500.0),
            padding: Some(0.0),
            ..Default::default()
        };
        let base = ViewConfig::default().with_size(1024.0, 768.0);
        let config = args.apply(base);
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 768.0);
        assert_eq!(config.padding, 0.0);
    }

    #[test]
    fn test_visibility_flags() {
        let args = ViewArgs {
            gas_only: true,
            ..Default::default()
        };
        let visibility = args.visibility();
        assert!(!visibility.shows(SeriesKind::Primary));
        assert!(visibility.shows(SeriesKind::Secondary));
    }
}
