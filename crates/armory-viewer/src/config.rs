//! Configuration loading and validation

use anyhow::Result;
use armory_core::TerrainParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "Armory".to_string()
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    720.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Starting orbit distance from the focus point
    #[serde(default = "default_distance")]
    pub distance: f32,
    /// Starting angle around the character, radians
    #[serde(default)]
    pub azimuth: f32,
    /// Starting angle above the horizon, radians
    #[serde(default = "default_elevation")]
    pub elevation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: default_distance(),
            azimuth: 0.0,
            elevation: default_elevation(),
        }
    }
}

fn default_distance() -> f32 {
    10.5
}

fn default_elevation() -> f32 {
    0.31
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Layout seed; a random one is drawn (and logged) when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_ground_blocks")]
    pub ground_blocks: usize,
    #[serde(default = "default_trees")]
    pub trees: usize,
    #[serde(default = "default_ground_extent")]
    pub ground_extent: f32,
    #[serde(default = "default_tree_extent")]
    pub tree_extent: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ground_blocks: default_ground_blocks(),
            trees: default_trees(),
            ground_extent: default_ground_extent(),
            tree_extent: default_tree_extent(),
        }
    }
}

impl TerrainConfig {
    /// Convert to TerrainParams
    pub fn params(&self) -> TerrainParams {
        TerrainParams {
            ground_blocks: self.ground_blocks,
            trees: self.trees,
            ground_extent: self.ground_extent,
            tree_extent: self.tree_extent,
        }
    }
}

fn default_ground_blocks() -> usize {
    50
}

fn default_trees() -> usize {
    10
}

fn default_ground_extent() -> f32 {
    20.0
}

fn default_tree_extent() -> f32 {
    15.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a custom equipment catalog TOML; the builtin five-piece
    /// set is used when absent
    #[serde(default)]
    pub path: Option<String>,
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.window.title, "Armory");
        assert_eq!(config.terrain.ground_blocks, 50);
        assert_eq!(config.terrain.trees, 10);
        assert_eq!(config.terrain.seed, None);
        assert_eq!(config.camera.azimuth, 0.0);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.terrain.ground_blocks, 50);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armory.toml");
        std::fs::write(
            &path,
            r#"
[terrain]
seed = 42
trees = 3

[window]
title = "Fitting Room"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.terrain.seed, Some(42));
        assert_eq!(config.terrain.trees, 3);
        assert_eq!(config.terrain.ground_blocks, 50);
        assert_eq!(config.window.title, "Fitting Room");
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armory.toml");
        std::fs::write(&path, "[terrain\nseed = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
