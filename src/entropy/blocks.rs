//! Fixed-size block segmentation.
//!
//! Blocks are read-only views into the caller's buffer. Every block has
//! exactly `block_size` bytes except the last, which holds the remainder
//! when the input length is not a multiple of the block size.

use std::ops::Range;

/// Default block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 256;

/// Offset/length pair describing one block inside the original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub offset: usize,
    pub len: usize,
}

impl BlockSpan {
    /// Byte range covered by this block.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Borrows the block's bytes out of the buffer it was computed from.
    #[inline]
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.range()]
    }
}

/// Number of blocks `len` bytes split into: `ceil(len / block_size)`.
///
/// # Panics
/// Panics if `block_size` is zero. Callers validate configuration first.
#[inline]
pub fn block_count(len: usize, block_size: usize) -> usize {
    assert!(block_size > 0, "block size must be positive");
    len.div_ceil(block_size)
}

/// Splits `data` into ordered blocks of `block_size` bytes.
///
/// Each block borrows from `data` through its [`BlockSpan`]. Yields nothing
/// for empty input.
///
/// # Panics
/// Panics if `block_size` is zero.
pub fn split_blocks<'a>(
    data: &'a [u8],
    block_size: usize,
) -> impl ExactSizeIterator<Item = &'a [u8]> + 'a {
    block_spans(data.len(), block_size)
        .into_iter()
        .map(move |span| span.slice(data))
}

/// Computes block boundaries as offset/length pairs with an index cursor.
///
/// # Panics
/// Panics if `block_size` is zero.
pub fn block_spans(len: usize, block_size: usize) -> Vec<BlockSpan> {
    let mut spans = Vec::with_capacity(block_count(len, block_size));
    let mut offset = 0;
    while offset < len {
        let span_len = block_size.min(len - offset);
        spans.push(BlockSpan {
            offset,
            len: span_len,
        });
        offset += span_len;
    }
    spans
}
