//! Threshold classification of whole-input entropy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the `Native` band.
pub const NATIVE_THRESHOLD: f64 = 4.0;
/// Lower bound (inclusive) of the `Compressed` band.
pub const COMPRESSED_THRESHOLD: f64 = 6.5;
/// Lower bound (inclusive) of the `Encrypted` band.
pub const ENCRYPTED_THRESHOLD: f64 = 7.5;

/// Entropy category of an analyzed input.
///
/// The four data categories are ordered by increasing entropy. `Error` marks
/// an input that could not be read; [`classify`] never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Plaintext,
    Native,
    Compressed,
    Encrypted,
    Error,
}

impl Classification {
    /// Lowercase name used in rendered output.
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Plaintext => "plaintext",
            Classification::Native => "native",
            Classification::Compressed => "compressed",
            Classification::Encrypted => "encrypted",
            Classification::Error => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an entropy value to its category.
///
/// Bands are inclusive on the lower bound and exclusive on the upper:
/// `[-inf, 4.0)` plaintext, `[4.0, 6.5)` native, `[6.5, 7.5)` compressed,
/// `[7.5, +inf)` encrypted.
pub fn classify(entropy: f64) -> Classification {
    if entropy >= ENCRYPTED_THRESHOLD {
        Classification::Encrypted
    } else if entropy >= COMPRESSED_THRESHOLD {
        Classification::Compressed
    } else if entropy >= NATIVE_THRESHOLD {
        Classification::Native
    } else {
        Classification::Plaintext
    }
}
