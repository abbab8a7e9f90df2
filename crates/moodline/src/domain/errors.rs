//! Pipeline Errors
//!
//! Error taxonomy for the journal pipeline: validation, gateway failure
//! (network / non-2xx / timeout), parse failure, schema mismatch, storage.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the journal pipeline and its adapters
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("gateway request failed: {0}")]
    Gateway(String),

    #[error("gateway returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("gateway timed out after {0:?}")]
    Timeout(Duration),

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

impl PipelineError {
    /// Whether the error came from the response body rather than transport.
    /// Pattern-insight handling clears state on these, keeps it otherwise.
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            PipelineError::Parse(_) | PipelineError::SchemaMismatch(_)
        )
    }
}
