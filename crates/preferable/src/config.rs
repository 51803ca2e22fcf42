//! # Configuration
//!
//! Library behavior is configured through [`PreferableConfig`], loaded by
//! [`confique`] from layered sources.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `PREFERABLE_REJECT_INVALID_OPTIONS`, `PREFERABLE_COERCE_ON_READ`.
//! 2. **Project Config**: `preferable.toml` in the directory passed to [`PreferableConfig::load`].
//! 3. **Global Config**: `preferable.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `reject_invalid_options` | `true` | Drop writes whose value is not one of the declared options |
//! | `coerce_on_read` | `true` | Coerce stored values to the declared type on every read |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "preferable.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PreferableConfig {
    /// When false, values outside a preference's options are stored anyway.
    #[config(default = true, env = "PREFERABLE_REJECT_INVALID_OPTIONS")]
    pub reject_invalid_options: bool,

    /// When false, stored values are returned exactly as stored and only
    /// writes are coerced.
    #[config(default = true, env = "PREFERABLE_COERCE_ON_READ")]
    pub coerce_on_read: bool,
}

impl Default for PreferableConfig {
    fn default() -> Self {
        Self {
            reject_invalid_options: true,
            coerce_on_read: true,
        }
    }
}

impl PreferableConfig {
    /// Load configuration from the environment, an optional project
    /// directory and the global config directory. Missing files are skipped.
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = project_dir {
            builder = builder.file(dir.join(CONFIG_FILE_NAME));
        }
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        Ok(builder.load()?)
    }
}

/// Location of the global config file, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "preferable").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
