#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the block size so short and odd sizes get covered
    let block_size = data.first().map_or(256, |&b| b as usize + 1);
    let result = entroscan::entropy::analyze(data, block_size);

    assert!((0.0..=8.0).contains(&result.total_entropy));
    assert_eq!(result.block_entropies.len(), data.len().div_ceil(block_size));
    assert!(result.high_entropy_block_count <= result.block_entropies.len());
    assert_eq!(
        result.classification,
        entroscan::entropy::classify(result.total_entropy)
    );
});
