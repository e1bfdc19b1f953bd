//! Entropy computation and classification engine.
//!
//! This module holds everything needed to turn a byte buffer into an
//! [`AnalysisResult`]:
//!
//! - Block splitting into fixed-size, read-only views
//! - Shannon entropy over a byte slice
//! - Threshold classification of the whole-input entropy
//! - The analyzer that ties these together
//!
//! All of it is pure and synchronous. Reading inputs and rendering results
//! happen elsewhere.
//!
//! # Example
//!
//! ```
//! use entroscan::entropy::{analyze, calculate_entropy, classify, Classification};
//!
//! let data = vec![0u8; 1024];
//! assert_eq!(calculate_entropy(&data), 0.0);
//! assert_eq!(classify(7.6), Classification::Encrypted);
//!
//! let result = analyze(&data, 256);
//! assert_eq!(result.block_entropies.len(), 4);
//! ```

pub mod analysis;
pub mod blocks;
pub mod classify;
pub mod core;
pub mod stats;

pub use self::analysis::{analyze, analyze_labeled, AnalysisResult, HIGH_ENTROPY_CUTOFF};
pub use self::blocks::{block_count, block_spans, split_blocks, BlockSpan, DEFAULT_BLOCK_SIZE};
pub use self::classify::{classify, Classification};
pub use self::core::{calculate_entropy, Histogram};
pub use self::stats::{indices_at_or_above, BlockStats};
