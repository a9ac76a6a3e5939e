//! Field extraction from arbitrary 128-bit values

use serde::{Deserialize, Serialize};

/// Wraps any `u128` and exposes the UUIDv7 field layout without validating
/// it. Useful for inspecting the raw parts of a value that may or may not
/// be a real UUIDv7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnverifiedUuidV7(pub u128);

impl UnverifiedUuidV7 {
    /// The 48-bit Unix timestamp in milliseconds (bits 80-127).
    pub fn unix_ts_ms(&self) -> u64 {
        (self.0 >> 80) as u64
    }

    /// The 4-bit version field (bits 76-79).
    pub fn version(&self) -> u8 {
        ((self.0 >> 76) & 0x0F) as u8
    }

    /// The 12-bit `rand_a` field (bits 64-75).
    pub fn rand_a(&self) -> u16 {
        ((self.0 >> 64) & 0x0FFF) as u16
    }

    /// The 2-bit variant field (bits 62-63).
    pub fn variant(&self) -> u8 {
        ((self.0 >> 62) & 0x03) as u8
    }

    /// The 62-bit `rand_b` field (bits 0-61).
    pub fn rand_b(&self) -> u64 {
        (self.0 & 0x3FFF_FFFF_FFFF_FFFF) as u64
    }
}

impl From<u128> for UnverifiedUuidV7 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

/// The five UUIDv7 fields as a plain struct, for inspection and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUuidV7 {
    /// The 48-bit Unix timestamp in milliseconds.
    pub unix_ts_ms: u64,
    /// The 4-bit version field.
    pub version: u8,
    /// The 12-bit `rand_a` field.
    pub rand_a: u16,
    /// The 2-bit variant field.
    pub variant: u8,
    /// The 62-bit `rand_b` field.
    pub rand_b: u64,
}

impl From<UnverifiedUuidV7> for RawUuidV7 {
    fn from(unverified: UnverifiedUuidV7) -> Self {
        RawUuidV7 {
            unix_ts_ms: unverified.unix_ts_ms(),
            version: unverified.version(),
            rand_a: unverified.rand_a(),
            variant: unverified.variant(),
            rand_b: unverified.rand_b(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_extraction() {
        // 0x0190163D8694 | ver 7 | rand_a 0xE6F | var 2 | rand_b ...
        let value = UnverifiedUuidV7(0x0190_163D_8694_7E6F_AE1B_BC27_70EF_0F1D);
        assert_eq!(value.unix_ts_ms(), 0x0190_163D_8694);
        assert_eq!(value.version(), 7);
        assert_eq!(value.rand_a(), 0xE6F);
        assert_eq!(value.variant(), 2);
        assert_eq!(value.rand_b(), 0x2E1B_BC27_70EF_0F1D);
    }

    #[test]
    fn test_fields_cover_all_128_bits() {
        let value = UnverifiedUuidV7(u128::MAX);
        assert_eq!(value.unix_ts_ms(), 0xFFFF_FFFF_FFFF);
        assert_eq!(value.version(), 0x0F);
        assert_eq!(value.rand_a(), 0x0FFF);
        assert_eq!(value.variant(), 0x03);
        assert_eq!(value.rand_b(), 0x3FFF_FFFF_FFFF_FFFF);
    }

    #[test]
    fn test_raw_parts_conversion() {
        let value = UnverifiedUuidV7(0x0190_163D_8694_7E6F_AE1B_BC27_70EF_0F1D);
        let raw = RawUuidV7::from(value);
        assert_eq!(raw.unix_ts_ms, value.unix_ts_ms());
        assert_eq!(raw.version, value.version());
        assert_eq!(raw.rand_a, value.rand_a());
        assert_eq!(raw.variant, value.variant());
        assert_eq!(raw.rand_b, value.rand_b());
    }
}
