use thiserror::Error;

/// Decode errors for the strict DER reader.
///
/// Every variant carries the byte offset at which the violation was detected,
/// so a caller can point at the offending byte in a dump of the input.
/// Decoding is all-or-nothing: any of these errors aborts the whole decode
/// and no partial record is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerError {
    /// The input ended before the declared structure was complete.
    #[error("truncated input at offset {offset}: need {needed} more byte(s), have {available}")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A tag byte did not match the fixed schema.
    #[error("unexpected tag at offset {offset}: expected 0x{expected:02X}, got 0x{actual:02X}")]
    UnexpectedTag {
        offset: usize,
        expected: u8,
        actual: u8,
    },

    /// A length or integer-contents encoding is not in the minimal form DER
    /// requires (long form where short form suffices, indefinite length,
    /// redundant 0x00 padding, ...).
    #[error("non-minimal DER encoding at offset {offset}")]
    NonMinimalLength { offset: usize },

    /// Bytes remain after the declared end of a value.
    #[error("trailing bytes starting at offset {offset}")]
    TrailingBytes { offset: usize },

    /// An INTEGER value is negative or does not fit an unsigned 64-bit word.
    #[error("INTEGER at offset {offset} is not an unsigned 64-bit value")]
    IntegerOverflow { offset: usize },
}

/// Result type alias for DER operations.
pub type DerResult<T> = Result<T, DerError>;

/// Validation errors for UUIDv7 values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidV7Error {
    /// The version bits are not `0b0111` (7).
    #[error("invalid UUID version bits: expected 7, got {0}")]
    InvalidVersion(u8),

    /// The variant bits are not `0b10` (2).
    #[error("invalid UUID variant bits: expected 2, got {0}")]
    InvalidVariant(u8),
}
