//! Optional `config.toml` layer: layout tunables and storage location.
//!
//! The relax damping constants ship with reference-compatible defaults; the
//! config file exists so they can be tuned without rebuilding.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use sf_core::LayoutParams;

/// Default base directory for all space-field storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".space-field")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[derive(Debug, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct LayoutSection {
    pub token_damping: Option<f64>,
    pub expansion_damping: Option<f64>,
    pub relax_iterations: Option<usize>,
    pub scatter_scale: Option<f64>,
}

impl EngineConfig {
    /// Read `config.toml` under `base`, falling back to defaults when the
    /// file is absent or malformed. A malformed file is a warning, not an
    /// error — the engine must keep running on defaults.
    pub fn load(base: &Path) -> Self {
        let path = base.join("config.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Layout parameters with config overrides applied over the defaults.
    pub fn layout_params(&self) -> LayoutParams {
        let defaults = LayoutParams::default();
        LayoutParams {
            token_damping: self.layout.token_damping.unwrap_or(defaults.token_damping),
            expansion_damping: self
                .layout
                .expansion_damping
                .unwrap_or(defaults.expansion_damping),
            relax_iterations: self
                .layout
                .relax_iterations
                .unwrap_or(defaults.relax_iterations),
            scatter_scale: self.layout.scatter_scale.unwrap_or(defaults.scatter_scale),
        }
    }
}
