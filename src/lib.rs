//! Shannon entropy triage for arbitrary files.
//!
//! The core lives in [`entropy`]: block splitting, entropy calculation,
//! classification and the analysis orchestrator. Everything else (reading
//! inputs, batch runs, rendering, the request/response worker) is a thin
//! collaborator around that core.

/// Entropy calculation, block splitting, classification and analysis
pub mod entropy;

pub mod batch;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod render;
pub mod server;
pub mod timeout;

pub use crate::entropy::{analyze, calculate_entropy, classify, AnalysisResult, Classification};
pub use crate::error::{EntropyError, Result};
