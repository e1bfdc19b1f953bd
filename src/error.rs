//! Error types for entropy triage.
//!
//! The analysis core itself cannot fail on valid input; these errors come
//! from its collaborators: reading inputs, validating configuration and the
//! request/response worker.

use thiserror::Error;

/// Main error type for entroscan operations.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The byte source could not be read
    #[error("cannot read {source_id}: {source}")]
    InputUnavailable {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// The byte source exceeds the configured read limit
    #[error("{source_id} is too large: {size} bytes (limit: {limit})")]
    InputTooLarge {
        source_id: String,
        size: u64,
        limit: u64,
    },

    /// Invalid configuration, fatal before any analysis starts
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No reply arrived within the bounded wait
    #[error("analysis request timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// The worker was stopped or has gone away
    #[error("analysis server is not running")]
    ServerStopped,

    /// The worker task ended abnormally
    #[error("analysis worker failed: {0}")]
    WorkerFailed(String),
}

impl EntropyError {
    /// True for errors that leave an input without bytes to analyze.
    ///
    /// Batch runs substitute the error sentinel for these and keep going.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(
            self,
            EntropyError::InputUnavailable { .. } | EntropyError::InputTooLarge { .. }
        )
    }
}

/// Result type alias for entroscan operations
pub type Result<T> = std::result::Result<T, EntropyError>;
