//! Bounded whole-file reads.
//!
//! This is the byte-buffer provider for analysis: it reads a named input
//! fully into memory or reports why it could not.

use crate::config::IoLimits;
use crate::error::{EntropyError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// A reader that stops returning data after `limit` bytes.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            return Ok(0); // EOF
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

/// File reader that enforces [`IoLimits`] before reading anything.
pub struct SafeFileReader {
    file: File,
    size: u64,
    limits: IoLimits,
    label: String,
}

impl SafeFileReader {
    /// Opens `path`, refusing files larger than the configured limit.
    pub fn open<P: AsRef<Path>>(path: P, limits: IoLimits) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        debug!(path = %label, "opening input");

        let unavailable = |source| EntropyError::InputUnavailable {
            source_id: label.clone(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let metadata = file.metadata().map_err(unavailable)?;
        if metadata.is_dir() {
            return Err(unavailable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )));
        }

        let size = metadata.len();
        if size > limits.max_file_size {
            warn!(
                path = %label,
                size,
                limit = limits.max_file_size,
                "input exceeds size limit"
            );
            return Err(EntropyError::InputTooLarge {
                source_id: label,
                size,
                limit: limits.max_file_size,
            });
        }

        Ok(Self {
            file,
            size,
            limits,
            label,
        })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn limits(&self) -> &IoLimits {
        &self.limits
    }

    /// Reads the whole file, never more than the size limit.
    pub fn read_all(self) -> Result<Vec<u8>> {
        let SafeFileReader {
            file,
            size,
            limits,
            label,
        } = self;

        // One byte past the limit tells a file that grew after open apart
        // from one that is exactly at the limit.
        let mut reader = BoundedReader::new(file, limits.max_file_size.saturating_add(1));
        let mut data = Vec::with_capacity(size as usize);
        reader
            .read_to_end(&mut data)
            .map_err(|source| EntropyError::InputUnavailable {
                source_id: label.clone(),
                source,
            })?;

        if data.len() as u64 > limits.max_file_size {
            return Err(EntropyError::InputTooLarge {
                source_id: label,
                size: data.len() as u64,
                limit: limits.max_file_size,
            });
        }

        debug!(path = %label, bytes = data.len(), "read input");
        Ok(data)
    }
}

/// Reads `path` fully into memory under `limits`.
pub fn read_input<P: AsRef<Path>>(path: P, limits: &IoLimits) -> Result<Vec<u8>> {
    SafeFileReader::open(path, *limits)?.read_all()
}
