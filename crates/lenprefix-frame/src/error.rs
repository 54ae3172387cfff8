use lenprefix_block::BlockError;

/// Errors that can occur while encoding a stream.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input could not be buffered in memory.
    #[error(transparent)]
    OutOfMemory(#[from] BlockError),

    /// Reading from the input source failed.
    #[error("frame read error: {0}")]
    Read(#[source] std::io::Error),

    /// Writing to the output sink failed.
    #[error("frame write error: {0}")]
    Write(#[source] std::io::Error),
}

impl FrameError {
    /// The underlying I/O error, if this is a read or write failure.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            FrameError::Read(err) | FrameError::Write(err) => Some(err),
            FrameError::OutOfMemory(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
