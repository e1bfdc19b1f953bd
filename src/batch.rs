//! Multi-input runs.
//!
//! Every input is analyzed independently, so the work is spread over the
//! rayon pool and gathered back in input order. An unreadable input becomes
//! the error sentinel and never aborts the run.

use crate::config::AnalysisConfig;
use crate::entropy::{analyze_labeled, AnalysisResult, Classification};
use crate::io::read_input;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, warn};

/// Reads and analyzes a single input.
///
/// Read failures are logged and turned into [`AnalysisResult::unavailable`].
pub fn analyze_path<P: AsRef<Path>>(path: P, config: &AnalysisConfig) -> AnalysisResult {
    let path = path.as_ref();
    let label = path.display().to_string();

    match read_input(path, &config.io) {
        Ok(data) => {
            let result = analyze_labeled(label, &data, config.block_size);
            debug!(
                file = %result.source_identifier,
                size = result.file_size,
                entropy = result.total_entropy,
                class = %result.classification,
                "analyzed"
            );
            result
        }
        Err(e) if e.is_input_unavailable() => {
            warn!(file = %label, error = %e, "input unavailable");
            AnalysisResult::unavailable(label)
        }
        Err(e) => {
            error!(file = %label, error = %e, "unexpected failure reading input");
            AnalysisResult::unavailable(label)
        }
    }
}

/// Analyzes all inputs in parallel; results come back in input order.
pub fn analyze_paths<P>(paths: &[P], config: &AnalysisConfig) -> Vec<AnalysisResult>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|p| analyze_path(p, config))
        .collect()
}

/// Run-level counts reported after the per-file output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Inputs processed, readable or not.
    pub files: usize,
    pub encrypted: usize,
    pub compressed: usize,
    /// Inputs that could not be read.
    pub errors: usize,
}

impl RunSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = RunSummary {
            files: results.len(),
            ..Default::default()
        };
        for r in results {
            match r.classification {
                Classification::Encrypted => summary.encrypted += 1,
                Classification::Compressed => summary.compressed += 1,
                Classification::Error => summary.errors += 1,
                Classification::Plaintext | Classification::Native => {}
            }
        }
        summary
    }
}
