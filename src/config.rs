//! Run configuration.
//!
//! Built once from the command line, validated before any input is read and
//! treated as read-only for the rest of the run.

use crate::entropy::blocks::DEFAULT_BLOCK_SIZE;
use crate::entropy::analysis::HIGH_ENTROPY_CUTOFF;
use crate::error::{EntropyError, Result};
use crate::timeout::DEFAULT_TIMEOUT_SECONDS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default block-highlight threshold for block listings.
pub const DEFAULT_DISPLAY_THRESHOLD: f64 = HIGH_ENTROPY_CUTOFF;

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Banner, per-file report and summary
    #[default]
    Text,
    /// One JSON object per file, nothing else on stdout
    Json,
}

/// Master configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Block size in bytes (default: 256).
    pub block_size: usize,
    /// Blocks at or above this are highlighted in block listings (default: 7.0).
    ///
    /// Only affects rendering; the high-entropy block count uses a fixed cutoff.
    pub display_threshold: f64,
    /// Include the per-block listing in text output.
    pub show_blocks: bool,
    pub output: OutputMode,
    pub verbose: bool,
    /// Limits applied when reading inputs.
    pub io: IoLimits,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            display_threshold: DEFAULT_DISPLAY_THRESHOLD,
            show_blocks: false,
            output: OutputMode::Text,
            verbose: false,
            io: IoLimits::default(),
        }
    }
}

impl AnalysisConfig {
    /// Checks the configuration, failing fast on the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(EntropyError::InvalidConfig(
                "block size must be a positive integer".to_string(),
            ));
        }
        if !self.display_threshold.is_finite() {
            return Err(EntropyError::InvalidConfig(format!(
                "threshold must be a finite number, got {}",
                self.display_threshold
            )));
        }
        if self.io.max_file_size == 0 {
            return Err(EntropyError::InvalidConfig(
                "max file size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputMode::Json
    }
}

/// Resource limits for reading inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoLimits {
    /// Inputs larger than this are reported as unavailable (default: 1 GiB).
    pub max_file_size: u64,
}

impl Default for IoLimits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024 * 1024,
        }
    }
}

/// Configuration for the request/response worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Block size every request is analyzed with.
    pub block_size: usize,
    /// Entries kept in the most-recently-used result cache (default: 64).
    pub cache_capacity: usize,
    /// Requests that may wait in the queue (default: 32).
    pub queue_depth: usize,
    /// Bounded wait for a reply (default: 30s).
    pub reply_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            cache_capacity: 64,
            queue_depth: 32,
            reply_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(EntropyError::InvalidConfig(
                "block size must be a positive integer".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(EntropyError::InvalidConfig(
                "cache capacity must be positive".to_string(),
            ));
        }
        if self.queue_depth == 0 {
            return Err(EntropyError::InvalidConfig(
                "queue depth must be positive".to_string(),
            ));
        }
        if self.reply_timeout.is_zero() {
            return Err(EntropyError::InvalidConfig(
                "reply timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
