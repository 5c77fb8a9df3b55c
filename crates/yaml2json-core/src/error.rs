//! Error taxonomy for the conversion pipeline.

use std::path::PathBuf;

/// Result type alias for yaml2json-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting YAML sources to JSON.
///
/// `InputNotFound` and `EmptyDocument` are distinguished so the CLI can map
/// them to their dedicated exit codes; everything else is a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listed input path does not exist.
    #[error("file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The aggregated result was empty and empty output was not permitted.
    #[error("YAML produced no document (use --allow-empty to permit null output)")]
    EmptyDocument,

    /// Malformed YAML in an input source.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: yaml_rust2::ScanError,
    },

    /// Reading an input or writing the output failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
