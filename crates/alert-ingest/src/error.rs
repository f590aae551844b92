//! Ingest Error Types

use thiserror::Error;

/// Errors while loading the alert document
#[derive(Debug, Error)]
pub enum IngestError {
    /// File could not be opened or read
    #[error("failed to read alert file: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or a field failed to parse
    #[error("failed to parse alert document: {0}")]
    Parse(#[from] serde_json::Error),
}
