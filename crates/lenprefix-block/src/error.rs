use std::collections::TryReserveError;

/// Errors that can occur while growing a block.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// The allocator could not provide the requested capacity.
    #[error("out of memory growing block to {requested} bytes: {source}")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, BlockError>;
