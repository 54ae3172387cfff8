//! Decimal length-prefixed framing for a fully buffered byte stream.
//!
//! The whole input is staged in a [`Block`](lenprefix_block::Block) and then
//! written out as one frame:
//! - The payload length as decimal ASCII digits, no leading zeros
//! - A single `:` separator
//! - The payload bytes verbatim, with no escaping and no terminator
//!
//! Nothing is written until the input source reports end-of-stream.

pub mod codec;
pub mod encoder;
pub mod error;
pub mod source;
pub mod writer;

pub use codec::{encode_frame, encode_header, Frame, FrameConfig, SEPARATOR};
pub use encoder::{encode, Encoder};
pub use error::{FrameError, Result};
pub use source::{ByteSource, ReadSource};
pub use writer::FrameWriter;
