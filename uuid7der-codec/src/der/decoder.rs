//! Strict DER decoder for the UUIDv7 record
//!
//! # Usage Example
//!
//! ```rust
//! let bytes = [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x01];
//! let record = uuid7der_codec::der::decode(&bytes).unwrap();
//! assert_eq!(record.low(), 1);
//! ```

use crate::der::types::{DerLength, DerTag};
use crate::error::{DerError, DerResult};
use uuid7der_core::UuidV7Record;

/// Decode one `SEQUENCE { INTEGER high, INTEGER low }` record.
///
/// The input is not assumed well-formed. Validation order:
///
/// 1. the outer tag+length header is present;
/// 2. the outer tag is SEQUENCE (0x30);
/// 3. the outer length, parsed under DER minimality rules, accounts for
///    exactly the remaining bytes (missing bytes are `TruncatedInput`,
///    extra bytes are `TrailingBytes`);
/// 4. exactly two inner TLVs follow, each tagged INTEGER (0x02);
/// 5. each inner length matches the bytes present;
/// 6. each inner contents is a non-negative two's-complement integer
///    fitting 64 bits, with a leading 0x00 only where the sign bit
///    requires it.
///
/// Decoding is all-or-nothing: the first violation aborts the call with
/// the specific [`DerError`] kind and the offending byte offset. A
/// successful decode implies the input was the unique minimal encoding,
/// so `encode(decode(b)) == b`.
pub fn decode(bytes: &[u8]) -> DerResult<UuidV7Record> {
    let mut decoder = DerDecoder::new(bytes);

    decoder.read_tag(DerTag::Sequence)?;
    let body_len = decoder.read_length()?;

    if body_len > decoder.remaining() {
        return Err(DerError::TruncatedInput {
            offset: decoder.position(),
            needed: body_len - decoder.remaining(),
            available: decoder.remaining(),
        });
    }
    if body_len < decoder.remaining() {
        return Err(DerError::TrailingBytes {
            offset: decoder.position() + body_len,
        });
    }
    let body_end = decoder.position() + body_len;

    let high = decoder.read_unsigned()?;
    let low = decoder.read_unsigned()?;

    // A third element inside the SEQUENCE.
    if decoder.position() != body_end {
        return Err(DerError::TrailingBytes {
            offset: decoder.position(),
        });
    }

    Ok(UuidV7Record::new(high, low))
}

/// Positional DER reader.
///
/// Keeps a cursor into the input buffer and advances it as TLV parts are
/// consumed. Every error reports the absolute offset where the violation
/// was found.
pub struct DerDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> DerDecoder<'a> {
    /// Create a decoder over `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current position in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Consume one tag byte, requiring it to match `expected`.
    fn read_tag(&mut self, expected: DerTag) -> DerResult<()> {
        let Some(&actual) = self.buffer.get(self.position) else {
            return Err(DerError::TruncatedInput {
                offset: self.position,
                needed: 1,
                available: 0,
            });
        };
        if actual != expected.byte() {
            return Err(DerError::UnexpectedTag {
                offset: self.position,
                expected: expected.byte(),
                actual,
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Consume a strict DER length field.
    fn read_length(&mut self) -> DerResult<usize> {
        let (length, consumed) =
            DerLength::decode(&self.buffer[self.position..], self.position)?;
        self.position += consumed;
        Ok(length.value())
    }

    /// Consume `count` value bytes.
    fn read_contents(&mut self, count: usize) -> DerResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(DerError::TruncatedInput {
                offset: self.position,
                needed: count - self.remaining(),
                available: self.remaining(),
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..self.position])
    }

    /// Consume one INTEGER TLV holding an unsigned 64-bit value.
    fn read_unsigned(&mut self) -> DerResult<u64> {
        self.read_tag(DerTag::Integer)?;
        let length = self.read_length()?;
        let contents_offset = self.position;
        let contents = self.read_contents(length)?;
        decode_unsigned_contents(contents, contents_offset)
    }
}

/// Interpret INTEGER contents as a canonical unsigned 64-bit value.
///
/// `offset` is the absolute position of the first content byte.
fn decode_unsigned_contents(contents: &[u8], offset: usize) -> DerResult<u64> {
    let Some(&first) = contents.first() else {
        // An empty INTEGER has no value at all.
        return Err(DerError::IntegerOverflow { offset });
    };

    if first & 0x80 != 0 {
        // Two's-complement reading would be negative.
        return Err(DerError::IntegerOverflow { offset });
    }
    if first == 0x00 && contents.len() > 1 && contents[1] & 0x80 == 0 {
        // The pad byte was not needed for sign disambiguation.
        return Err(DerError::NonMinimalLength { offset });
    }
    // At most 8 significant bytes plus one pad byte fit in u64.
    if contents.len() > 9 || (contents.len() == 9 && first != 0x00) {
        return Err(DerError::IntegerOverflow { offset });
    }

    let mut value = 0u64;
    for &byte in contents {
        value = (value << 8) | (byte as u64);
    }
    Ok(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::der::encode;
    use proptest::prelude::*;

    proptest! {
        /// Round-trip law: decode inverts encode for every record.
        #[test]
        fn decode_inverts_encode(high in any::<u64>(), low in any::<u64>()) {
            let record = UuidV7Record::new(high, low);
            prop_assert_eq!(decode(&encode(&record)), Ok(record));
        }

        /// Canonical-form law: any byte soup the decoder accepts is the
        /// unique minimal encoding of the decoded record.
        #[test]
        fn accepted_input_is_canonical(bytes in prop::collection::vec(any::<u8>(), 0..48)) {
            if let Ok(record) = decode(&bytes) {
                prop_assert_eq!(encode(&record), bytes);
            }
        }

        /// Canonical-form law over near-valid inputs: mutate one byte of a
        /// valid encoding and require either rejection or canonicality.
        #[test]
        fn mutated_valid_input_is_canonical_or_rejected(
            high in any::<u64>(),
            low in any::<u64>(),
            index in any::<prop::sample::Index>(),
            new_byte in any::<u8>(),
        ) {
            let mut bytes = encode(&UuidV7Record::new(high, low));
            let at = index.index(bytes.len());
            bytes[at] = new_byte;
            if let Ok(record) = decode(&bytes) {
                prop_assert_eq!(encode(&record), bytes);
            }
        }
    }
}
