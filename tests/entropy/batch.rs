//! Reading files from disk and rendering whole runs.

use crate::common::test_data::{cycling_bytes, pseudo_random, text};
use crate::common::test_utils::{create_temp_file, create_temp_file_with_size};
use entroscan::batch::{analyze_path, analyze_paths, RunSummary};
use entroscan::config::{AnalysisConfig, IoLimits, OutputMode};
use entroscan::entropy::Classification;
use entroscan::render::render_run;
use std::path::PathBuf;

#[test]
fn test_zero_file_from_disk() {
    let file = create_temp_file_with_size(1024, 0);
    let result = analyze_path(file.path(), &AnalysisConfig::default());

    assert_eq!(result.file_size, 1024);
    assert_eq!(result.block_entropies, vec![0.0; 4]);
    assert_eq!(result.classification, Classification::Plaintext);
    assert!(!result.is_unavailable());
}

#[test]
fn test_block_size_from_config() {
    let file = create_temp_file(&cycling_bytes(1000));
    let config = AnalysisConfig {
        block_size: 300,
        ..Default::default()
    };
    let result = analyze_path(file.path(), &config);
    assert_eq!(result.block_entropies.len(), 4);
}

#[test]
fn test_oversized_input_is_sentinel() {
    let file = create_temp_file_with_size(4096, 0xAB);
    let config = AnalysisConfig {
        io: IoLimits { max_file_size: 1024 },
        ..Default::default()
    };
    let result = analyze_path(file.path(), &config);
    assert!(result.is_unavailable());
    assert_eq!(result.classification, Classification::Error);
}

#[test]
fn test_mixed_run_text_output() {
    let plain = create_temp_file(&text(2048));
    let cipher = create_temp_file(&pseudo_random(8192, 5));
    let missing = PathBuf::from("/nonexistent/entroscan/none.bin");

    let paths = vec![
        plain.path().to_path_buf(),
        missing,
        cipher.path().to_path_buf(),
    ];
    let config = AnalysisConfig {
        show_blocks: true,
        ..Default::default()
    };
    let results = analyze_paths(&paths, &config);
    let summary = RunSummary::from_results(&results);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.encrypted, 1);
    assert_eq!(summary.errors, 1);

    let mut buf = Vec::new();
    render_run(&mut buf, &results, &config).unwrap();
    let out = String::from_utf8(buf).unwrap();

    // Reports appear in input order
    let plain_at = out.find(&plain.path().display().to_string()).unwrap();
    let missing_at = out.find("none.bin").unwrap();
    let cipher_at = out.find(&cipher.path().display().to_string()).unwrap();
    assert!(plain_at < missing_at && missing_at < cipher_at);

    assert!(out.contains("ERROR (could not read input)"));
    assert!(out.contains("Blocks (highlight >= 7.00):"));
    assert!(out.contains("Files analyzed: 3"));
}

#[test]
fn test_json_run_output() {
    let zeros = create_temp_file_with_size(100, 0);
    let cycle = create_temp_file(&cycling_bytes(512));
    let paths = vec![zeros.path().to_path_buf(), cycle.path().to_path_buf()];
    let config = AnalysisConfig {
        output: OutputMode::Json,
        ..Default::default()
    };

    let results = analyze_paths(&paths, &config);
    let mut buf = Vec::new();
    render_run(&mut buf, &results, &config).unwrap();
    let out = String::from_utf8(buf).unwrap();

    let values: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["class"], "plaintext");
    assert_eq!(values[0]["size"], 100);
    assert_eq!(values[0]["entropy"], 0.0);
    assert_eq!(values[1]["class"], "encrypted");
    assert_eq!(values[1]["entropy"], 8.0);
    assert_eq!(values[1]["file"], cycle.path().display().to_string());
}
