//! Summary statistics over block entropies.

/// Min, max and mean of a set of block entropies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl BlockStats {
    /// Computes the summary.
    ///
    /// Returns None if the input is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(BlockStats { min, max, mean })
    }
}

/// Indices of values at or above `threshold`, in order.
pub fn indices_at_or_above(values: &[f64], threshold: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, &v)| v >= threshold)
        .map(|(i, _)| i)
        .collect()
}
