use crate::v7::{UnverifiedUuidV7, UuidV7, UuidV7Seeds};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire record for one UUIDv7 value: the two 64-bit halves of the 128-bit
/// UUID, split at the midpoint.
///
/// The concatenation `high‖low` (big-endian) is the 16-byte UUID octet
/// string. The record is immutable once constructed; it is produced by DER
/// decoding or by conversion from one of the UUIDv7 model types, and
/// consumed by the JER projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UuidV7Record {
    high: u64,
    low: u64,
}

impl UuidV7Record {
    /// Create a record from its two halves.
    ///
    /// # Arguments
    ///
    /// * `high` - The upper 64 bits of the UUID
    /// * `low` - The lower 64 bits of the UUID
    pub fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Split a 128-bit UUID value into a record.
    pub fn from_u128(value: u128) -> Self {
        Self {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }

    /// Rejoin the two halves into the 128-bit UUID value.
    pub fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | (self.low as u128)
    }

    /// Get the upper 64 bits.
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Get the lower 64 bits.
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Get the 16-byte big-endian UUID octet string.
    pub fn to_bytes(&self) -> [u8; 16] {
        self.as_u128().to_be_bytes()
    }

    /// Build a record from the 16-byte big-endian UUID octet string.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_be_bytes(bytes))
    }
}

impl From<u128> for UuidV7Record {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<UuidV7Record> for u128 {
    fn from(record: UuidV7Record) -> Self {
        record.as_u128()
    }
}

impl From<Uuid> for UuidV7Record {
    fn from(uuid: Uuid) -> Self {
        Self::from_u128(uuid.as_u128())
    }
}

impl From<UuidV7> for UuidV7Record {
    fn from(uuid: UuidV7) -> Self {
        Self::from_u128(uuid.as_u128())
    }
}

impl From<UnverifiedUuidV7> for UuidV7Record {
    fn from(uuid: UnverifiedUuidV7) -> Self {
        Self::from_u128(uuid.0)
    }
}

impl From<UuidV7Seeds> for UuidV7Record {
    fn from(seeds: UuidV7Seeds) -> Self {
        Self::from_u128(seeds.to_u128())
    }
}

impl fmt::Display for UuidV7Record {
    /// Canonical hyphenated lowercase form, e.g.
    /// `0190163d-8694-7e6f-ae1b-bc2770ef0f1d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.as_u128();
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (value >> 96) as u32,
            (value >> 80) as u16,
            (value >> 64) as u16,
            (value >> 48) as u16,
            value & 0xFFFF_FFFF_FFFF
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_rejoin() {
        let value = 0x0190_163D_8694_7E6F_AE1B_BC27_70EF_0F1D_u128;
        let record = UuidV7Record::from_u128(value);
        assert_eq!(record.high(), 0x0190_163D_8694_7E6F);
        assert_eq!(record.low(), 0xAE1B_BC27_70EF_0F1D);
        assert_eq!(record.as_u128(), value);
    }

    #[test]
    fn test_byte_round_trip() {
        let record = UuidV7Record::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        let bytes = record.to_bytes();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[15], 0x10);
        assert_eq!(UuidV7Record::from_bytes(bytes), record);
    }

    #[test]
    fn test_display_hyphenated() {
        let record = UuidV7Record::from_u128(0x0190_163D_8694_7E6F_AE1B_BC27_70EF_0F1D);
        assert_eq!(record.to_string(), "0190163d-8694-7e6f-ae1b-bc2770ef0f1d");
    }

    #[test]
    fn test_display_zero_padded() {
        let record = UuidV7Record::new(0, 1);
        assert_eq!(record.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::now_v7();
        let record = UuidV7Record::from(uuid);
        assert_eq!(record.as_u128(), uuid.as_u128());
    }
}
