//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ntree/ntree.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `NTREE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Traversal used when listing a tree's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    #[default]
    Dfs,
    Bfs,
}

/// How a tree is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One value per line
    #[default]
    List,
    /// ASCII outline
    Tree,
}

/// Unified configuration for ntree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Order for transformed and filtered output (default: dfs)
    pub order: TraversalOrder,
    /// Output style (default: list)
    pub render: RenderStyle,
    /// Colored headers (default: true)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: TraversalOrder::Dfs,
            render: RenderStyle::List,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub order: Option<TraversalOrder>,
    pub render: Option<RenderStyle>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for ntree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ntree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ntree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn parse_value<T: ValueEnum>(key: &str, val: &str) -> Result<T, ApplicationError> {
    T::from_str(val, true).map_err(|e| ApplicationError::Config {
        message: format!("{key}: {e}"),
    })
}

fn parse_bool(key: &str, val: &str) -> Result<bool, ApplicationError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ApplicationError::Config {
            message: format!("{key}: invalid boolean '{val}'"),
        }),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            order: overlay.order.unwrap_or(self.order),
            render: overlay.render.unwrap_or(self.render),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Load from a single file on top of defaults, ignoring global config and env vars.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply NTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("order") {
            settings.order = parse_value("NTREE_ORDER", &val)?;
        }
        if let Ok(val) = config.get_string("render") {
            settings.render = parse_value("NTREE_RENDER", &val)?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = parse_bool("NTREE_COLOR", &val)?;
        }

        Ok(settings)
    }

    /// Render as TOML for `ntree config`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
