use std::io::{self, Write};

use bytes::Bytes;
use tracing::trace;

use crate::error::{BlockError, Result};

/// Capacity allocated by the first growth of an empty block.
pub const MIN_CAPACITY: usize = 8;

/// An owned, append-only sequence of bytes.
///
/// Storage grows by doubling. Growth is reserved fallibly before any byte is
/// written, so a failed append leaves the block exactly as it was.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Block {
    buf: Vec<u8>,
}

impl Block {
    /// Create an empty block. Does not allocate.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty block with room for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|source| BlockError::OutOfMemory {
                requested: capacity,
                source,
            })?;
        Ok(Self { buf })
    }

    /// Append one byte to the end of the block.
    pub fn append(&mut self, byte: u8) -> Result<()> {
        self.reserve_for(1)?;
        self.buf.push(byte);
        Ok(())
    }

    /// Append every byte of `bytes`, in order.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve_for(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of bytes appended so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes the block can hold before it has to grow again.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The appended bytes, in insertion order.
    pub fn snapshot(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the block and hand its storage over without copying.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }

    fn reserve_for(&mut self, additional: usize) -> Result<()> {
        let len = self.buf.len();
        let required = len.saturating_add(additional);
        let capacity = self.buf.capacity();
        if required <= capacity {
            return Ok(());
        }

        let target = next_capacity(capacity, required);
        self.buf
            .try_reserve_exact(target - len)
            .map_err(|source| BlockError::OutOfMemory {
                requested: target,
                source,
            })?;
        trace!(from = capacity, to = self.buf.capacity(), "grew block");
        Ok(())
    }
}

fn next_capacity(current: usize, required: usize) -> usize {
    current
        .saturating_mul(2)
        .max(MIN_CAPACITY)
        .max(required)
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        self.snapshot()
    }
}

impl Write for Block {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
