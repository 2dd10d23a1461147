//! CLI configuration
//!
//! Optional `burdock.toml`, looked up in the working directory and then
//! the user config directory. All fields are optional; command-line flags
//! always win.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default dataset path
    pub data_path: Option<PathBuf>,

    /// Default number of search results
    pub top_k: Option<usize>,

    /// Default traversal depth
    pub max_depth: Option<u32>,
}

impl Config {
    /// Load the first readable, parseable config file; defaults otherwise
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            let Ok(raw) = std::fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str(&raw) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("burdock.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("burdock").join("burdock.toml"));
        }
        paths
    }
}
