//! Frame an input stream as `<length>:<bytes>`.
//!
//! lenprefix reads a byte stream to exhaustion, holds it in memory, and emits
//! it behind its decimal byte count and a `:` separator.
//!
//! # Crate Structure
//!
//! - [`block`]: append-only byte accumulator with amortized growth
//! - [`frame`]: byte sources, header codec, frame writer and the encoder

/// Re-export block types.
pub mod block {
    pub use lenprefix_block::*;
}

/// Re-export frame types.
pub mod frame {
    pub use lenprefix_frame::*;
}

pub use lenprefix_frame::{encode, Encoder, FrameError};
