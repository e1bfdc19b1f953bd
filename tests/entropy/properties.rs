//! Properties that must hold for any input.

use crate::common::test_data::{pseudo_random, text};
use entroscan::entropy::{analyze, calculate_entropy, classify, split_blocks};

fn inputs() -> Vec<Vec<u8>> {
    vec![
        vec![],
        vec![0x42],
        vec![0u8; 3],
        text(1000),
        pseudo_random(1, 1),
        pseudo_random(255, 2),
        pseudo_random(257, 3),
        pseudo_random(10_000, 4),
        (0..=255u8).rev().collect(),
    ]
}

#[test]
fn test_entropy_within_bounds() {
    for data in inputs() {
        let e = calculate_entropy(&data);
        assert!((0.0..=8.0).contains(&e), "entropy {e} out of range");
    }
}

#[test]
fn test_permutation_invariance() {
    for data in inputs() {
        let mut reversed = data.clone();
        reversed.reverse();
        let mut sorted = data.clone();
        sorted.sort_unstable();

        let base = calculate_entropy(&data);
        let tol = 1e-9 * base.max(1.0);
        assert!((calculate_entropy(&reversed) - base).abs() <= tol);
        assert!((calculate_entropy(&sorted) - base).abs() <= tol);
    }
}

#[test]
fn test_split_reconstructs_and_counts() {
    for data in inputs() {
        for bs in [1usize, 2, 100, 256, 1024] {
            let blocks: Vec<&[u8]> = split_blocks(&data, bs).collect();
            assert_eq!(blocks.len(), data.len().div_ceil(bs));
            assert_eq!(blocks.concat(), data);
            if let Some((last, rest)) = blocks.split_last() {
                assert!(rest.iter().all(|b| b.len() == bs));
                assert!(!last.is_empty() && last.len() <= bs);
            }
        }
    }
}

#[test]
fn test_result_invariants() {
    for data in inputs() {
        for bs in [1usize, 64, 256] {
            let r = analyze(&data, bs);
            assert_eq!(r.file_size, data.len() as u64);
            assert_eq!(r.block_entropies.len(), data.len().div_ceil(bs));
            assert!(r.high_entropy_block_count <= r.block_entropies.len());
            assert_eq!(r.classification, classify(r.total_entropy));
            assert_eq!(r.total_entropy, calculate_entropy(&data));
        }
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let data = pseudo_random(5000, 11);
    assert_eq!(analyze(&data, 256), analyze(&data, 256));
}
