use std::io::Write;

use lenprefix_block::Block;
use tracing::debug;

use crate::codec::{Frame, FrameConfig};
use crate::error::{FrameError, Result};
use crate::source::ByteSource;
use crate::writer::FrameWriter;

/// Buffers an entire input source and writes it out as a single frame.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: FrameConfig,
}

impl Encoder {
    /// Create an encoder with default configuration.
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create an encoder with explicit configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Current encoder configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Read `input` to exhaustion, then write `<len>:<bytes>` to `output`.
    ///
    /// Nothing is written before `input` reports end-of-stream. Returns the
    /// frame that was written.
    pub fn encode<S, W>(&self, input: S, output: W) -> Result<Frame>
    where
        S: ByteSource,
        W: Write,
    {
        let frame = self.read_frame(input)?;
        FrameWriter::new(output).write_frame(&frame)?;
        Ok(frame)
    }

    /// Read `input` to exhaustion and return it as an unwritten frame.
    ///
    /// Callers that must not touch the sink until the input is fully consumed
    /// (for example, when the sink is a file that has to be truncated first)
    /// pair this with [`FrameWriter::write_frame`].
    pub fn read_frame<S: ByteSource>(&self, mut input: S) -> Result<Frame> {
        let block = self.slurp(&mut input)?;
        debug!(len = block.len(), "input exhausted");
        Ok(Frame::new(block.into_bytes()))
    }

    fn slurp<S: ByteSource>(&self, input: &mut S) -> Result<Block> {
        let mut block = if self.config.initial_capacity > 0 {
            Block::with_capacity(self.config.initial_capacity)?
        } else {
            Block::new()
        };

        while let Some(byte) = input.next_byte().map_err(FrameError::Read)? {
            block.append(byte)?;
        }
        Ok(block)
    }
}

/// Encode `input` onto `output` with the default configuration.
pub fn encode<S, W>(input: S, output: W) -> Result<Frame>
where
    S: ByteSource,
    W: Write,
{
    Encoder::new().encode(input, output)
}
