//! Text and JSON output for analysis results.

use crate::batch::RunSummary;
use crate::config::AnalysisConfig;
use crate::entropy::{indices_at_or_above, AnalysisResult};
use serde::Serialize;
use std::io::{self, Write};

/// Decimal places shown for entropy values.
pub const ENTROPY_DECIMALS: usize = 4;

/// Rounds an entropy value to four decimal places.
///
/// The value is scaled by 10^4 and rounded half away from zero, so
/// `7.12345` becomes `7.1235`. Text and JSON output both go through this.
#[inline]
pub fn round_entropy(entropy: f64) -> f64 {
    (entropy * 10_000.0).round() / 10_000.0
}

/// Fixed four-decimal text form of [`round_entropy`].
fn fmt_entropy(entropy: f64) -> String {
    format!("{:.prec$}", round_entropy(entropy), prec = ENTROPY_DECIMALS)
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    file: &'a str,
    entropy: f64,
    size: u64,
    class: &'static str,
}

impl<'a> From<&'a AnalysisResult> for JsonRecord<'a> {
    fn from(r: &'a AnalysisResult) -> Self {
        Self {
            file: &r.source_identifier,
            entropy: round_entropy(r.total_entropy),
            size: r.file_size,
            class: r.classification.name(),
        }
    }
}

/// Serializes a result as a single compact JSON object.
pub fn to_json_line(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord::from(result))
}

pub fn write_json<W: Write>(w: &mut W, result: &AnalysisResult) -> io::Result<()> {
    serde_json::to_writer(&mut *w, &JsonRecord::from(result))?;
    writeln!(w)
}

pub fn write_banner<W: Write>(w: &mut W) -> io::Result<()> {
    let title = format!("entroscan {} - file entropy triage", env!("CARGO_PKG_VERSION"));
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(title.len()))?;
    writeln!(w)
}

/// Human-readable report for one input.
pub fn write_text<W: Write>(
    w: &mut W,
    result: &AnalysisResult,
    config: &AnalysisConfig,
) -> io::Result<()> {
    writeln!(w, "File:    {}", result.source_identifier)?;

    if result.is_unavailable() {
        writeln!(w, "Class:   ERROR (could not read input)")?;
        return writeln!(w);
    }

    writeln!(w, "Size:    {} bytes", result.file_size)?;
    writeln!(w, "Entropy: {} bits/byte", fmt_entropy(result.total_entropy))?;
    writeln!(w, "Class:   {}", result.classification)?;
    writeln!(
        w,
        "High-entropy blocks: {}/{}",
        result.high_entropy_block_count,
        result.block_count()
    )?;

    if config.show_blocks {
        write_blocks(w, result, config.display_threshold)?;
    }
    writeln!(w)
}

/// Indexed block listing; blocks at or above `threshold` are marked with `*`.
pub fn write_blocks<W: Write>(
    w: &mut W,
    result: &AnalysisResult,
    threshold: f64,
) -> io::Result<()> {
    writeln!(w, "Blocks (highlight >= {threshold:.2}):")?;
    let width = result.block_count().saturating_sub(1).to_string().len();
    let mut marked = indices_at_or_above(&result.block_entropies, threshold)
        .into_iter()
        .peekable();
    for (i, &e) in result.block_entropies.iter().enumerate() {
        let mark = if marked.next_if_eq(&i).is_some() { " *" } else { "" };
        writeln!(w, "  [{i:>width$}] {}{mark}", fmt_entropy(e))?;
    }
    if let Some(stats) = result.block_stats() {
        writeln!(
            w,
            "  min {}  max {}  mean {}",
            fmt_entropy(stats.min),
            fmt_entropy(stats.max),
            fmt_entropy(stats.mean)
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(w, "Summary")?;
    writeln!(w, "  Files analyzed: {}", summary.files)?;
    writeln!(w, "  Encrypted:      {}", summary.encrypted)?;
    writeln!(w, "  Compressed:     {}", summary.compressed)?;
    if summary.errors > 0 {
        writeln!(w, "  Unreadable:     {}", summary.errors)?;
    }
    Ok(())
}

/// Writes a full run in the configured output mode.
///
/// JSON mode emits one object per line and nothing else.
pub fn render_run<W: Write>(
    w: &mut W,
    results: &[AnalysisResult],
    config: &AnalysisConfig,
) -> io::Result<()> {
    if config.is_json() {
        for r in results {
            write_json(w, r)?;
        }
        return Ok(());
    }

    write_banner(w)?;
    for r in results {
        write_text(w, r, config)?;
    }
    write_summary(w, &RunSummary::from_results(results))
}
