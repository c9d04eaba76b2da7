//! Configuration loading for byeol.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing or malformed file falls back to the defaults silently; the
//! renderer never refuses to start over configuration.

use std::fs;
use std::path::PathBuf;

use byeol_core::{FrameRate, METEOR_INTERVAL_MS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User configuration for the sky renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frame rate of the animation loop.
    pub frame_rate: FrameRate,
    /// Minimum interval between meteor spawn events.
    pub meteor_interval_ms: u64,
    /// Fixed star count instead of the width-derived default.
    pub star_count_override: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::default(),
            meteor_interval_ms: METEOR_INTERVAL_MS,
            star_count_override: None,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults on any failure.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Path of the configuration file for this platform, if resolvable.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
