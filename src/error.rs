//! Error types surfaced to the user

use thiserror::Error;

/// Why a file could not become the current selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Please choose an image file (got {mime})")]
    NotAnImage { mime: String },
    #[error("File is {size} bytes, images must not exceed {limit} bytes (10 MB)")]
    TooLarge { size: u64, limit: u64 },
    #[error("Could not read file: {0}")]
    Read(String),
}

/// Why the analysis service did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Analysis service unreachable: {0}")]
    Network(String),
    #[error("Analysis service returned HTTP {0}")]
    Status(u16),
    #[error("Unexpected response from analysis service: {0}")]
    Decode(String),
    #[error("Could not build the upload request: {0}")]
    Request(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AnalysisError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AnalysisError::Status(status.as_u16())
        } else {
            AnalysisError::Network(e.to_string())
        }
    }
}
