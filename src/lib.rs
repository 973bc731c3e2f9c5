//! Variant Loader Library
//!
//! A Rust library for loading flat, delimited genomic interval files and
//! normalizing each line into a keyed variant record.
//!
//! This library provides tools for:
//! - Locating the configured data file inside a data folder
//! - Streaming lines lazily with per-line validation and type coercion
//! - Building HGVS-style genomic identifiers (`chr1:g.100_200`)
//! - Skipping comment, blank and malformed lines while keeping an audit trail
//! - Reporting progress and a final skip summary through `tracing`
//!
//! ```no_run
//! use variant_loader::{ParserConfig, VariantParser};
//!
//! # fn main() -> variant_loader::Result<()> {
//! let parser = VariantParser::new(ParserConfig::tab_percentile())?;
//! for record in parser.load_data("data")? {
//!     let record = record?;
//!     println!("{}", record.to_json()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod variant_parser;
    }
}

// Re-export commonly used types
pub use app::models::{Variant, VariantRecord};
pub use app::services::variant_parser::{
    ParseStats, SkipReason, SkippedLine, VariantParser, VariantRecords,
};
pub use config::{ParserConfig, ScoreField};

/// Result type alias for the variant loader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for variant loading operations
///
/// Only failures that stop a whole pass live here. Problems confined to a
/// single line are reported as [`SkipReason`] and never leave the parser.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("Cannot find input file: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Record serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
