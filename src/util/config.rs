//! Configuration file support for jelly-glad.
//!
//! Two configuration file locations are consulted:
//! - Global: `<config dir>/jelly-glad/config.toml` - User-wide defaults
//! - Project: `./jelly-glad.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// API family selected when nothing else is configured.
pub const DEFAULT_API: &str = "gl";

/// Module name written in the output header when nothing else is configured.
pub const DEFAULT_MODULE: &str = "gl";

/// File name of the project-level configuration.
pub const PROJECT_CONFIG_FILE: &str = "jelly-glad.toml";

/// jelly-glad configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator settings
    pub generator: GeneratorConfig,
}

/// Generator-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// API family whose features are emitted (e.g. "gl", "gles2")
    pub api: Option<String>,

    /// Name of the generated Jelly module
    pub module: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.generator.api.is_some() {
            self.generator.api = other.generator.api;
        }
        if other.generator.module.is_some() {
            self.generator.module = other.generator.module;
        }
    }

    /// The configured API family, or [`DEFAULT_API`].
    pub fn api(&self) -> &str {
        self.generator.api.as_deref().unwrap_or(DEFAULT_API)
    }

    /// The configured module name, or [`DEFAULT_MODULE`].
    pub fn module(&self) -> &str {
        self.generator.module.as_deref().unwrap_or(DEFAULT_MODULE)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (./jelly-glad.toml)
/// 2. Global config (<config dir>/jelly-glad/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config path (`<config dir>/jelly-glad/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "jelly-glad")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path (`<dir>/jelly-glad.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}
