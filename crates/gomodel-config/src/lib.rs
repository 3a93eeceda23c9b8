//! # gomodel-config
//!
//! Layered configuration loading for gomodel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOMODEL_*` prefix, `__` as separator)
//! 2. Project-level `.gomodel/config.toml`
//! 3. User-level `~/.config/gomodel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOMODEL_SCAN__SUPPRESS_COMMENTS` -> `scan.suppress_comments`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gomodel_config::GoModelConfig;
//!
//! let config = GoModelConfig::load().expect("config");
//! if config.scan.allow_unresolved_imports {
//!     println!("lenient import resolution");
//! }
//! ```

mod error;
mod scan;

pub use error::ConfigError;
pub use scan::{ScanOption, ScanOptions};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".gomodel/config.toml";

/// Prefix of environment variables read by [`GoModelConfig::figment`].
pub const ENV_PREFIX: &str = "GOMODEL_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GoModelConfig {
    #[serde(default)]
    pub scan: ScanOptions,
}

impl GoModelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`GOMODEL_*` prefix)
    /// 2. `.gomodel/config.toml` (project-local)
    /// 3. `~/.config/gomodel/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gomodel").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_suppresses_nothing() {
        let config = GoModelConfig::default();
        assert_eq!(config.scan, ScanOptions::default());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GoModelConfig = GoModelConfig::figment().extract()?;
            assert!(!config.scan.suppress_comments);
            assert!(!config.scan.allow_unresolved_imports);
            Ok(())
        });
    }
}
