//! Common test utilities and helpers.

pub mod test_utils;

/// Synthetic inputs with known entropy.
pub mod test_data {
    /// `len` bytes cycling through 0..=255.
    pub fn cycling_bytes(len: usize) -> Vec<u8> {
        (0..=255u8).cycle().take(len).collect()
    }

    /// Deterministic pseudo-random bytes from a 64-bit LCG.
    pub fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect()
    }

    /// English-like text, well below the native threshold.
    pub fn text(len: usize) -> Vec<u8> {
        b"to be or not to be, that is the question. "
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect()
    }
}
