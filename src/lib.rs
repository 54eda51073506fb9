//! ZRXP Processor Library
//!
//! A Rust library for parsing ZRXP hydrological time-series exchange files
//! into station records carrying merged metadata and ordered measurement rows.
//!
//! This library provides tools for:
//! - Streaming ZRXP files line by line with bounded memory usage
//! - Decoding the legacy single-byte encoding ZRXP exporters emit
//! - Classifying metadata and data lines and assembling station blocks
//! - Exposing merged station metadata through typed keyword accessors
//! - Command-line inspection and directory scanning utilities

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod stream_reader;
        pub mod zrxp_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataRow, Keyword, MetadataRecord, Station};
pub use app::services::stream_reader::StreamReader;
pub use app::services::zrxp_parser::{ParseResult, ParseStats, ZrxpParser, read_stations};
pub use config::ParserConfig;

/// Result type alias for ZRXP processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ZRXP processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Stream initialization failed (unopenable input or unencodable delimiter)
    #[error("Stream initialization failed for '{path}': {message}")]
    StreamInit { path: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line was handed to the metadata grammar without the line indicator
    #[error("Metadata line format error: {message}")]
    MetadataFormat { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create a stream initialization error with context
    pub fn stream_init(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StreamInit {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a metadata line format error
    pub fn metadata_format(message: impl Into<String>) -> Self {
        Self::MetadataFormat {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error with context
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
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

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
