//! Whole-input analysis: per-block entropy, total entropy and classification.

use crate::entropy::blocks::split_blocks;
use crate::entropy::classify::{classify, Classification};
use crate::entropy::core::calculate_entropy;
use crate::entropy::stats::{indices_at_or_above, BlockStats};
use serde::{Deserialize, Serialize};

/// Blocks at or above this entropy count as high-entropy blocks.
///
/// Fixed; independent of the display threshold used when rendering.
pub const HIGH_ENTROPY_CUTOFF: f64 = 7.0;

/// Outcome of analyzing one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Opaque label for the input, usually its path.
    pub source_identifier: String,
    /// Shannon entropy of the whole input.
    pub total_entropy: f64,
    /// Entropy of each block, in input order.
    pub block_entropies: Vec<f64>,
    pub file_size: u64,
    pub high_entropy_block_count: usize,
    pub classification: Classification,
}

impl AnalysisResult {
    /// Degenerate result for an input whose bytes could not be obtained.
    ///
    /// All numeric fields are zero and the classification is `Error`, which
    /// keeps it distinguishable from a genuine zero-entropy input.
    pub fn unavailable(source_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            total_entropy: 0.0,
            block_entropies: Vec::new(),
            file_size: 0,
            high_entropy_block_count: 0,
            classification: Classification::Error,
        }
    }

    /// True when the input could not be read.
    pub fn is_unavailable(&self) -> bool {
        self.classification.is_error()
    }

    pub fn block_count(&self) -> usize {
        self.block_entropies.len()
    }

    /// Min/max/mean over the block entropies, `None` when there are no blocks.
    pub fn block_stats(&self) -> Option<BlockStats> {
        BlockStats::from_values(&self.block_entropies)
    }
}

/// Analyzes `data` with an empty source identifier.
///
/// # Panics
/// Panics if `block_size` is zero; configuration is validated before this runs.
pub fn analyze(data: &[u8], block_size: usize) -> AnalysisResult {
    analyze_labeled("", data, block_size)
}

/// Analyzes `data`, tagging the result with `source_identifier`.
///
/// # Panics
/// Panics if `block_size` is zero.
pub fn analyze_labeled(
    source_identifier: impl Into<String>,
    data: &[u8],
    block_size: usize,
) -> AnalysisResult {
    let block_entropies: Vec<f64> = split_blocks(data, block_size)
        .map(calculate_entropy)
        .collect();

    // Entropy is not additive across blocks, so the total is computed over
    // the full buffer.
    let total_entropy = calculate_entropy(data);

    let high_entropy_block_count =
        indices_at_or_above(&block_entropies, HIGH_ENTROPY_CUTOFF).len();

    AnalysisResult {
        source_identifier: source_identifier.into(),
        total_entropy,
        block_entropies,
        file_size: data.len() as u64,
        high_entropy_block_count,
        classification: classify(total_entropy),
    }
}
