//! entroscan - classify files by Shannon entropy
//!
//! # Usage
//!
//! ```bash
//! # Human-readable report with a per-block listing
//! entroscan --blocks -b 512 suspicious.bin
//!
//! # One JSON object per file
//! entroscan --json /tmp/samples/*
//! ```

use anyhow::Context;
use clap::Parser;
use entroscan::batch::analyze_paths;
use entroscan::config::{AnalysisConfig, IoLimits, OutputMode};
use entroscan::logging::{init_tracing, init_tracing_json};
use entroscan::render::render_run;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "entroscan")]
#[command(author, version)]
#[command(about = "Classify files as plaintext, native code, compressed or encrypted by Shannon entropy")]
struct Cli {
    /// Files to analyze
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Block size in bytes for per-block entropy
    #[arg(short = 'b', value_name = "SIZE", default_value_t = entroscan::entropy::DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Highlight blocks at or above this entropy in the block listing
    #[arg(short = 't', value_name = "THRESHOLD", default_value_t = entroscan::config::DEFAULT_DISPLAY_THRESHOLD)]
    threshold: f64,

    /// Show per-block entropy values
    #[arg(long = "blocks")]
    blocks: bool,

    /// Emit one JSON object per file instead of the text report
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Write stderr log lines as JSON
    #[arg(long = "log-json")]
    log_json: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long = "max-size", value_name = "BYTES", default_value_t = IoLimits::default().max_file_size)]
    max_size: u64,
}

impl Cli {
    fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            block_size: self.block_size,
            display_threshold: self.threshold,
            show_blocks: self.blocks,
            output: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
            verbose: self.verbose,
            io: IoLimits {
                max_file_size: self.max_size,
            },
        }
    }
}

/// Exit status for a configuration rejected before any input is read.
const EXIT_INVALID_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        init_tracing_json(cli.verbose);
    } else {
        init_tracing(cli.verbose);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ExitCode::from(execute(&cli, &mut out))
}

/// Validates the configuration, then analyzes and renders every input.
///
/// Nothing is written to `out` when the configuration is invalid.
fn execute<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    let config = cli.to_config();
    if let Err(e) = config.validate() {
        error!(error = %e, "refusing to start");
        eprintln!("Error: {e}");
        return EXIT_INVALID_CONFIG;
    }

    match run(&cli.files, &config, out) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

fn run<W: Write>(files: &[PathBuf], config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    debug!(files = files.len(), ?config, "starting run");
    let results = analyze_paths(files, config);

    match render_run(out, &results, config).and_then(|_| out.flush()) {
        // Output piped into something like `head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write report"),
    }
}
