//! DER encoder for the UUIDv7 record
//!
//! # Usage Example
//!
//! ```rust
//! use uuid7der_core::UuidV7Record;
//!
//! let bytes = uuid7der_codec::der::encode(&UuidV7Record::new(0, 1));
//! assert_eq!(bytes, [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x01]);
//! ```

use crate::der::types::{DerLength, DerTag};
use uuid7der_core::UuidV7Record;

/// Encode a record as `SEQUENCE { INTEGER high, INTEGER low }`.
///
/// The output is the unique minimal DER encoding for the record and
/// round-trips through [`decode`](crate::der::decode) to an identical
/// record. Encoding cannot fail: every `UuidV7Record` is in the input
/// domain by construction.
pub fn encode(record: &UuidV7Record) -> Vec<u8> {
    // Worst case: 2 header + 2 * (2 header + 9 contents).
    let mut fields = DerEncoder::with_capacity(22);
    fields.encode_unsigned(record.high());
    fields.encode_unsigned(record.low());

    let mut encoder = DerEncoder::with_capacity(24);
    encoder.encode_sequence(fields.as_bytes());
    encoder.into_bytes()
}

/// Accumulating DER encoder.
///
/// Builds TLV triplets into a byte buffer. Values are appended in order;
/// constructed types take their already-encoded element bytes.
pub struct DerEncoder {
    buffer: Vec<u8>,
}

impl DerEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a new encoder with initial buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Append one TLV triplet: tag byte, minimal length, value bytes.
    fn encode_tlv(&mut self, tag: DerTag, value: &[u8]) {
        self.buffer.push(tag.byte());
        self.buffer.extend_from_slice(&DerLength::new(value.len()).encode());
        self.buffer.extend_from_slice(value);
    }

    /// Append an INTEGER holding an unsigned 64-bit value.
    ///
    /// Contents are the minimal big-endian representation, with a single
    /// 0x00 prepended when the top bit of the minimal unsigned form is
    /// set, so the two's-complement reading stays non-negative.
    pub fn encode_unsigned(&mut self, value: u64) {
        let contents = unsigned_integer_contents(value);
        self.encode_tlv(DerTag::Integer, &contents);
    }

    /// Append a SEQUENCE wrapping already-encoded element TLVs.
    pub fn encode_sequence(&mut self, elements: &[u8]) {
        self.encode_tlv(DerTag::Sequence, elements);
    }

    /// Get the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for DerEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal two's-complement contents for an unsigned 64-bit INTEGER.
fn unsigned_integer_contents(value: u64) -> Vec<u8> {
    let mut contents: Vec<u8> = value
        .to_be_bytes()
        .iter()
        .copied()
        .skip_while(|&byte| byte == 0)
        .collect();

    if contents.is_empty() {
        // Zero still takes one content byte.
        contents.push(0x00);
    }
    if contents[0] & 0x80 != 0 {
        // Sign-disambiguating pad.
        contents.insert(0, 0x00);
    }

    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_vector() {
        let bytes = encode(&UuidV7Record::new(0, 1));
        assert_eq!(bytes, [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_zero_takes_one_content_byte() {
        assert_eq!(unsigned_integer_contents(0), vec![0x00]);
    }

    #[test]
    fn test_no_pad_below_top_bit() {
        assert_eq!(unsigned_integer_contents(0x7F), vec![0x7F]);
    }

    #[test]
    fn test_pad_when_top_bit_set() {
        assert_eq!(unsigned_integer_contents(0x80), vec![0x00, 0x80]);
        assert_eq!(unsigned_integer_contents(0xFF), vec![0x00, 0xFF]);
    }

    #[test]
    fn test_multi_byte_values() {
        assert_eq!(unsigned_integer_contents(0x0100), vec![0x01, 0x00]);
        assert_eq!(unsigned_integer_contents(0x8000), vec![0x00, 0x80, 0x00]);
    }

    #[test]
    fn test_u64_max_takes_nine_bytes() {
        let contents = unsigned_integer_contents(u64::MAX);
        assert_eq!(contents.len(), 9);
        assert_eq!(contents[0], 0x00);
        assert!(contents[1..].iter().all(|&byte| byte == 0xFF));
    }

    #[test]
    fn test_max_record_shape() {
        let bytes = encode(&UuidV7Record::new(u64::MAX, u64::MAX));
        // 30 16 | 02 09 00 FF*8 | 02 09 00 FF*8
        assert_eq!(bytes.len(), 24);
        assert_eq!(bytes[0], 0x30);
        assert_eq!(bytes[1], 0x16);
        assert_eq!(bytes[2], 0x02);
        assert_eq!(bytes[3], 0x09);
    }
}
