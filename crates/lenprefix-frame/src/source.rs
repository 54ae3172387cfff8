use std::io::{self, ErrorKind, Read};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// A source of bytes consumed one at a time.
pub trait ByteSource {
    /// Return the next byte, or `Ok(None)` once the source is exhausted.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }
}

/// Adapts any `Read` stream into a [`ByteSource`].
///
/// Reads are issued in chunks so that pulling single bytes does not cost one
/// system call each. Interrupted reads are retried.
pub struct ReadSource<R> {
    inner: R,
    chunk: Box<[u8]>,
    pos: usize,
    filled: usize,
    eof: bool,
}

impl<R: Read> ReadSource<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            chunk: vec![0u8; READ_CHUNK_SIZE].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
        }
    }

    /// Borrow the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the source and return the inner reader.
    ///
    /// Bytes already pulled into the chunk buffer but not yet returned are
    /// discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<()> {
        loop {
            match self.inner.read(&mut self.chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.filled {
            if self.eof {
                return Ok(None);
            }
            self.refill()?;
            if self.eof {
                return Ok(None);
            }
        }

        let byte = self.chunk[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }
}
