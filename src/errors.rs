/*!
 * Error types for the mdsplit application.
 *
 * Splitting itself never fails; these errors cover reading and writing
 * documents and loading configuration. They use the thiserror crate for
 * ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be opened or parsed
    #[error("Failed to load config file {path}: {message}")]
    Parse {
        /// Path of the config file
        path: String,
        /// Underlying reason
        message: String,
    },

    /// Ratio threshold outside [0, 1)
    #[error("Secondary ratio threshold must be in [0, 1), got {0}")]
    InvalidThreshold(f64),

    /// Zero bound would make no line primary language
    #[error("Primary-language character bound must be at least 1")]
    InvalidCharacterBound,

    /// An important marker is the empty string
    #[error("Important markers must not be empty")]
    EmptyMarker,

    /// Locale tag without a valid ISO 639 language subtag
    #[error("Invalid locale tag: {0}")]
    InvalidLocaleTag(String),
}

/// Errors reading or writing documents
#[derive(Error, Debug)]
pub enum AppError {
    /// Input document could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
