//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sternbrocot/sternbrocot.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `SB_*` prefix
//!
//! Command line flags override the loaded settings per invocation.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::domain::{Fraction, SbResult};

/// How `tree` output is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing tree
    #[default]
    Tree,
    /// One line per level
    Levels,
    /// Ascending sequence including the boundaries
    List,
}

/// Unified configuration for sternbrocot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default tree depth
    pub depth: i64,
    /// Largest depth the CLI will expand (2^depth - 1 nodes)
    pub max_depth: i64,
    /// Left boundary as `n/d`
    pub left: String,
    /// Right boundary as `n/d`
    pub right: String,
    /// Default layout for `tree`
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth: 3,
            max_depth: 20,
            left: "0/1".into(),
            right: "1/0".into(),
            format: OutputFormat::Tree,
        }
    }
}

/// Get the XDG config directory for sternbrocot.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sternbrocot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sternbrocot.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        Self::load_from(
            global_config_path().as_deref(),
            config_file,
            Environment::with_prefix("SB").try_parsing(true),
        )
    }

    fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> CliResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("depth", defaults.depth)
            .map_err(config_err)?
            .set_default("max_depth", defaults.max_depth)
            .map_err(config_err)?
            .set_default("left", defaults.left.clone())
            .map_err(config_err)?
            .set_default("right", defaults.right.clone())
            .map_err(config_err)?
            .set_default("format", "tree")
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "global config");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            debug!(path = %path.display(), "explicit config");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(env);

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Parse the configured boundary fractions.
    pub fn boundaries(&self) -> SbResult<(Fraction, Fraction)> {
        Ok((self.left.parse()?, self.right.parse()?))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# sternbrocot configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/sternbrocot/sternbrocot.toml
#   Explicit: --config <file>
#   Env:      SB_* environment variables (e.g. SB_DEPTH=5)

# Default depth for `sternbrocot tree`
# depth = 3

# Refuse to expand trees deeper than this
# max_depth = 20

# Boundary fractions, written n/d
# left = "0/1"
# right = "1/0"

# Output layout for `sternbrocot tree`: tree | levels | list
# format = "tree"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
