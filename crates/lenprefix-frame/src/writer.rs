use std::io::{self, ErrorKind, Write};

use bytes::BytesMut;
use tracing::debug;

use crate::codec::{encode_header, Frame, MAX_HEADER_SIZE};
use crate::error::{FrameError, Result};

/// Writes complete frames to any `Write` sink.
///
/// The header is staged in a small buffer and the payload is written straight
/// from the caller's slice, so the payload is never copied. Only interrupted
/// calls are retried; any other error, `WouldBlock` included, is returned. A
/// failure part way through leaves whatever was already written on the sink.
pub struct FrameWriter<W> {
    inner: W,
    header: BytesMut,
}

impl<W: Write> FrameWriter<W> {
    /// Create a new frame writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            header: BytesMut::with_capacity(MAX_HEADER_SIZE),
        }
    }

    /// Write a complete frame (blocking).
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.send(frame.payload.as_ref())
    }

    /// Frame and send a payload, then flush.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        self.header.clear();
        encode_header(payload.len(), &mut self.header);

        write_all(&mut self.inner, &self.header).map_err(FrameError::Write)?;
        write_all(&mut self.inner, payload).map_err(FrameError::Write)?;
        debug!(payload_len = payload.len(), "wrote frame");

        self.flush()
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Write(err)),
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn write_all<W: Write>(inner: &mut W, buf: &[u8]) -> io::Result<()> {
    let mut offset = 0usize;
    while offset < buf.len() {
        match inner.write(&buf[offset..]) {
            Ok(0) => return Err(io::Error::from(ErrorKind::WriteZero)),
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
