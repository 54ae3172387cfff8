//! Append-only byte accumulator.
//!
//! This is the lowest layer of lenprefix. A [`Block`] stages an entire input
//! stream in memory before the frame layer encodes it:
//! - Bytes are only ever appended, never removed or reordered
//! - Capacity doubles on growth, so appends are O(1) amortized
//! - Allocation failure is reported as [`BlockError::OutOfMemory`] instead of
//!   aborting, and leaves the existing contents untouched

pub mod block;
pub mod error;

pub use block::{Block, MIN_CAPACITY};
pub use error::{BlockError, Result};
