use std::fmt::Write as _;

use bytes::{BufMut, Bytes, BytesMut};

/// Separator between the decimal length and the payload.
pub const SEPARATOR: u8 = b':';

/// Longest possible header: `usize::MAX` in decimal plus the separator.
pub(crate) const MAX_HEADER_SIZE: usize = 21;

/// A framed message: a payload and its decimal length prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The message payload, carried verbatim.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Number of payload bytes announced by the header.
    pub fn byte_count(&self) -> usize {
        self.payload.len()
    }

    /// Size of the `<digits>:` header.
    pub fn header_len(&self) -> usize {
        decimal_digits(self.byte_count()) + 1
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        self.header_len() + self.byte_count()
    }

    /// Encode this frame into `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        encode_frame(&self.payload, dst);
    }
}

/// Encode the `<decimal-length>:` header for a payload of `len` bytes.
pub fn encode_header(len: usize, dst: &mut BytesMut) {
    dst.reserve(MAX_HEADER_SIZE);
    // Writing into a BytesMut cannot fail.
    let _ = write!(dst, "{len}");
    dst.put_u8(SEPARATOR);
}

/// Encode a complete frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────────┬───────────┬──────────────────┐
/// │ Length           │ Separator │ Payload          │
/// │ decimal ASCII    │ ":"       │ (Length bytes)   │
/// └──────────────────┴───────────┴──────────────────┘
/// ```
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(MAX_HEADER_SIZE + payload.len());
    encode_header(payload.len(), dst);
    dst.put_slice(payload);
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct FrameConfig {
    /// Bytes reserved in the block before reading starts. Default: 0.
    pub initial_capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_frame(payload, &mut buf);
        buf.to_vec()
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(framed(b""), b"0:");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(framed(b"a"), b"1:a");
    }

    #[test]
    fn test_short_payload() {
        assert_eq!(framed(b"abc"), b"3:abc");
    }

    #[test]
    fn test_multi_digit_length() {
        let payload = vec![b'a'; 260];
        let wire = framed(&payload);
        assert_eq!(&wire[..4], b"260:");
        assert_eq!(&wire[4..], payload.as_slice());
    }

    #[test]
    fn test_payload_is_not_escaped() {
        assert_eq!(framed(b"a\x00:b"), b"4:a\x00:b");
    }

    #[test]
    fn test_header_has_no_leading_zeros() {
        for (len, expected) in [
            (0usize, "0:"),
            (9, "9:"),
            (10, "10:"),
            (100, "100:"),
            (usize::MAX, "18446744073709551615:"),
        ] {
            if len == usize::MAX && usize::BITS != 64 {
                continue;
            }
            let mut buf = BytesMut::new();
            encode_header(len, &mut buf);
            assert_eq!(buf.as_ref(), expected.as_bytes());
        }
    }

    #[test]
    fn test_appends_to_existing_buffer() {
        let mut buf = BytesMut::from(&b"xx"[..]);
        encode_frame(b"yy", &mut buf);
        assert_eq!(buf.as_ref(), b"xx2:yy");
    }

    #[test]
    fn test_frame_sizes() {
        let frame = Frame::new(Bytes::from_static(b"test"));
        assert_eq!(frame.byte_count(), 4);
        assert_eq!(frame.header_len(), 2);
        assert_eq!(frame.wire_size(), 6);

        let frame = Frame::new(vec![0u8; 1234]);
        assert_eq!(frame.header_len(), 5);
        assert_eq!(frame.wire_size(), 1239);
    }

    #[test]
    fn test_frame_encode_matches_wire_size() {
        let frame = Frame::new(vec![7u8; 99]);
        let mut buf = BytesMut::new();
        frame.encode(&mut buf);
        assert_eq!(buf.len(), frame.wire_size());
        assert_eq!(&buf[..3], b"99:");
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(999), 3);
        assert_eq!(decimal_digits(1000), 4);
    }
}
