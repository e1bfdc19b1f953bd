//! Shannon entropy over byte sequences.
//!
//! Both the per-block and the whole-input values produced by the analyzer
//! come from here.

/// Calculates the Shannon entropy of a byte slice in bits per byte.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 means every byte is the same value (or the input is empty)
/// - 8.0 means all 256 byte values occur equally often
///
/// Only byte values that actually occur contribute to the sum, so no
/// probability is ever zero.
#[inline]
pub fn calculate_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    Histogram::from_bytes(data).entropy()
}

/// Byte frequency table with at most 256 populated bins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice in a single pass.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        hist.extend(data);
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Adds every byte of `data` to the histogram.
    #[inline]
    pub fn extend(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Calculates the entropy of the current histogram.
    #[inline]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        // A single symbol yields -(1.0 * 0.0) == -0.0; rounding may also
        // nudge a near-uniform sum past the 8-bit maximum.
        if entropy == 0.0 {
            0.0
        } else {
            entropy.min(8.0)
        }
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
