//! End-to-end analysis of known buffers.

use crate::common::test_data::{cycling_bytes, pseudo_random, text};
use entroscan::entropy::{analyze, analyze_labeled, Classification};
use entroscan::render::to_json_line;

#[test]
fn test_all_zero_kilobyte() {
    let result = analyze(&vec![0u8; 1024], 256);

    assert_eq!(result.total_entropy, 0.0);
    assert_eq!(result.block_entropies.len(), 4);
    assert!(result.block_entropies.iter().all(|&e| e == 0.0));
    assert_eq!(result.high_entropy_block_count, 0);
    assert_eq!(result.classification, Classification::Plaintext);
}

#[test]
fn test_two_full_cycles() {
    let result = analyze(&cycling_bytes(512), 256);

    assert_eq!(result.block_entropies, vec![8.0, 8.0]);
    assert_eq!(result.total_entropy, 8.0);
    assert_eq!(result.high_entropy_block_count, 2);
    assert_eq!(result.classification, Classification::Encrypted);
}

#[test]
fn test_text_is_plaintext() {
    let result = analyze_labeled("notes.txt", &text(4096), 256);
    assert_eq!(result.classification, Classification::Plaintext);
    assert_eq!(result.high_entropy_block_count, 0);
}

#[test]
fn test_random_is_encrypted() {
    let result = analyze(&pseudo_random(64 * 1024, 7), 256);
    assert_eq!(result.classification, Classification::Encrypted);
    // 256-byte blocks of random data sit just under 7.2 bits
    assert!(result.high_entropy_block_count > result.block_entropies.len() / 2);
}

#[test]
fn test_mixed_header_and_payload() {
    // Low-entropy header followed by a random payload, like a packed binary
    let mut data = vec![0u8; 1024];
    data.extend(pseudo_random(3072, 99));
    let result = analyze(&data, 256);

    assert_eq!(result.block_entropies.len(), 16);
    assert!(result.block_entropies[..4].iter().all(|&e| e == 0.0));
    assert!(result.block_entropies[4..].iter().all(|&e| e > 6.5));
    assert!(result.total_entropy > result.block_entropies[0]);
}

#[test]
fn test_json_line_for_analyzed_buffer() {
    let result = analyze_labeled("cycle.bin", &cycling_bytes(512), 256);
    assert_eq!(
        to_json_line(&result).unwrap(),
        r#"{"file":"cycle.bin","entropy":8.0,"size":512,"class":"encrypted"}"#
    );
}
