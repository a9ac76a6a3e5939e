//! DER encoding types (Tag, Length)

use crate::error::{DerError, DerResult};

/// The two universal tags the fixed UUIDv7 schema uses.
///
/// The schema is closed, so the full BER tag machinery (classes, extended
/// tag numbers, constructed bit handling) collapses to two known bytes:
/// INTEGER (universal primitive 2) and SEQUENCE (universal constructed 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerTag {
    /// Universal, primitive, tag 2.
    Integer,
    /// Universal, constructed, tag 16.
    Sequence,
}

impl DerTag {
    /// The single identifier byte for this tag.
    pub const fn byte(self) -> u8 {
        match self {
            DerTag::Integer => 0x02,
            DerTag::Sequence => 0x30,
        }
    }
}

/// DER length field.
///
/// Encoding always chooses the minimal form: short form for 0-127, long
/// form with the fewest length bytes otherwise. Decoding rejects every
/// alternative (indefinite length, the reserved 0xFF byte, long form with
/// a leading zero byte, long form for a value short form could carry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerLength {
    /// Short form: length 0-127.
    Short(u8),
    /// Long form: length > 127.
    Long(usize),
}

impl DerLength {
    /// Create a length, choosing the minimal form.
    pub fn new(length: usize) -> Self {
        if length < 128 {
            DerLength::Short(length as u8)
        } else {
            DerLength::Long(length)
        }
    }

    /// Get the length value.
    pub fn value(&self) -> usize {
        match self {
            DerLength::Short(l) => *l as usize,
            DerLength::Long(l) => *l,
        }
    }

    /// Encode to the minimal DER length bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            DerLength::Short(length) => vec![*length],
            DerLength::Long(length) => {
                let mut num_bytes = 0;
                let mut temp = *length;
                while temp > 0 {
                    num_bytes += 1;
                    temp >>= 8;
                }

                // First byte: bit 7 set, bits 6-0 = number of length bytes.
                let mut result = vec![0x80 | (num_bytes as u8)];
                for i in (0..num_bytes).rev() {
                    result.push(((*length >> (i * 8)) & 0xFF) as u8);
                }

                result
            }
        }
    }

    /// Decode a strict DER length from `data`.
    ///
    /// `offset` is the absolute position of `data[0]` in the original
    /// input; it is used only to report error locations.
    ///
    /// # Returns
    /// Returns `Ok((DerLength, bytes_consumed))` on success.
    ///
    /// # Errors
    /// - `TruncatedInput` if the length bytes themselves are missing
    /// - `NonMinimalLength` for the indefinite form (0x80), the reserved
    ///   byte 0xFF, a long form with a leading zero byte, or a long form
    ///   whose value would fit a shorter form
    pub fn decode(data: &[u8], offset: usize) -> DerResult<(Self, usize)> {
        let Some(&first_byte) = data.first() else {
            return Err(DerError::TruncatedInput {
                offset,
                needed: 1,
                available: 0,
            });
        };

        if (first_byte & 0x80) == 0 {
            return Ok((DerLength::Short(first_byte), 1));
        }

        if first_byte == 0x80 {
            // Indefinite length: BER-only, never valid DER.
            return Err(DerError::NonMinimalLength { offset });
        }
        if first_byte == 0xFF {
            // Reserved by X.690.
            return Err(DerError::NonMinimalLength { offset });
        }

        let num_bytes = (first_byte & 0x7F) as usize;
        if data.len() < 1 + num_bytes {
            // Count only the length bytes that follow the prefix byte.
            return Err(DerError::TruncatedInput {
                offset,
                needed: 1 + num_bytes - data.len(),
                available: data.len() - 1,
            });
        }

        if data[1] == 0 {
            // A leading zero length byte means a shorter long form exists.
            return Err(DerError::NonMinimalLength { offset });
        }
        if num_bytes > size_of::<usize>() {
            // The leading length byte is nonzero, so the declared length
            // overflows usize and no in-memory buffer can satisfy it.
            return Err(DerError::TruncatedInput {
                offset,
                needed: usize::MAX,
                available: data.len() - 1,
            });
        }

        let mut length = 0usize;
        for &byte in &data[1..1 + num_bytes] {
            length = (length << 8) | (byte as usize);
        }

        if length < 128 {
            // Short form would have sufficed.
            return Err(DerError::NonMinimalLength { offset });
        }

        Ok((DerLength::Long(length), 1 + num_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_bytes() {
        assert_eq!(DerTag::Integer.byte(), 0x02);
        assert_eq!(DerTag::Sequence.byte(), 0x30);
    }

    #[test]
    fn test_length_short_form() {
        let length = DerLength::new(6);
        assert_eq!(length.encode(), vec![0x06]);
        assert_eq!(DerLength::decode(&[0x06], 0).unwrap(), (length, 1));
    }

    #[test]
    fn test_length_boundary_127() {
        assert_eq!(DerLength::new(127).encode(), vec![0x7F]);
        assert_eq!(DerLength::new(128).encode(), vec![0x81, 0x80]);
    }

    #[test]
    fn test_length_long_form_round_trip() {
        let length = DerLength::new(1000);
        let encoded = length.encode();
        assert_eq!(encoded, vec![0x82, 0x03, 0xE8]);
        assert_eq!(
            DerLength::decode(&encoded, 0).unwrap(),
            (DerLength::Long(1000), 3)
        );
    }

    #[test]
    fn test_decode_rejects_indefinite() {
        assert_eq!(
            DerLength::decode(&[0x80], 5),
            Err(DerError::NonMinimalLength { offset: 5 })
        );
    }

    #[test]
    fn test_decode_rejects_reserved_ff() {
        assert_eq!(
            DerLength::decode(&[0xFF], 0),
            Err(DerError::NonMinimalLength { offset: 0 })
        );
    }

    #[test]
    fn test_decode_rejects_long_form_for_small_value() {
        // 0x81 0x01: long form carrying 1, which short form encodes.
        assert_eq!(
            DerLength::decode(&[0x81, 0x01], 2),
            Err(DerError::NonMinimalLength { offset: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_leading_zero_length_byte() {
        assert_eq!(
            DerLength::decode(&[0x82, 0x00, 0x80], 0),
            Err(DerError::NonMinimalLength { offset: 0 })
        );
    }

    #[test]
    fn test_decode_truncated_length_bytes() {
        // Two length bytes declared, one present.
        assert_eq!(
            DerLength::decode(&[0x82, 0x01], 0),
            Err(DerError::TruncatedInput {
                offset: 0,
                needed: 1,
                available: 1,
            })
        );
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert_eq!(
            DerLength::decode(&[], 3),
            Err(DerError::TruncatedInput {
                offset: 3,
                needed: 1,
                available: 0,
            })
        );
    }
}
