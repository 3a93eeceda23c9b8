//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `GOMODEL_*` variable could not be merged or extracted.
    #[error("failed to load gomodel configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed outside figment, such as a scan option key.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
