use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::ViewBox;

fn default_width() -> f64 {
    400.0
}
fn default_height() -> f64 {
    240.0
}
fn default_padding() -> f64 {
    0.05
}

/// `[view_box]` table; any missing key takes the stock 400x240 value
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ViewBoxConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Default for ViewBoxConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
        }
    }
}

impl From<ViewBoxConfig> for ViewBox {
    fn from(c: ViewBoxConfig) -> Self {
        ViewBox::new(c.width, c.height, c.padding)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub view_box: ViewBoxConfig,
    #[serde(default)]
    pub simplify: f64,
    #[serde(default)]
    pub notes: Option<PathBuf>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Load the first config file on the search path that parses
    pub fn load() -> Option<Self> {
        get_config_paths()
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| {
                let contents = std::fs::read_to_string(&path).ok()?;
                toml::from_str(&contents)
                    .map_err(|e| log::warn!("Skipping config file {:?}: {}", path, e))
                    .ok()
            })
    }

    /// Load an explicitly requested config file, which must exist and parse
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("trackmap.toml"));
    paths.push(PathBuf::from(".trackmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("trackmap").join("config.toml"));
        paths.push(config_dir.join("trackmap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".trackmap.toml"));
    }

    paths
}
