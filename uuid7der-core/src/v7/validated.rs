//! Validated UUIDv7 values and generation

use crate::error::UuidV7Error;
use crate::v7::UnverifiedUuidV7;
use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

/// A `u128` known to carry UUIDv7 version and variant bits.
///
/// The only fallible construction path is `TryFrom<UnverifiedUuidV7>`,
/// which enforces version == 7 and variant == 2. The generation
/// constructors produce conforming values by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UuidV7(u128);

impl UuidV7 {
    /// Generate a fresh UUIDv7 for the current system time.
    pub fn now() -> Self {
        // Uuid::now_v7 stamps version 7 / variant 2 itself.
        Self(Uuid::now_v7().as_u128())
    }

    /// Generate a UUIDv7 pinned to the given Unix millisecond timestamp,
    /// with fresh random bits for the rest of the value.
    pub fn at_unix_ms(unix_ts_ms: u64) -> Self {
        let timestamp = Timestamp::from_unix(
            NoContext,
            unix_ts_ms / 1000,
            ((unix_ts_ms % 1000) * 1_000_000) as u32,
        );
        Self(Uuid::new_v7(timestamp).as_u128())
    }

    /// The inner 128-bit value.
    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl TryFrom<UnverifiedUuidV7> for UuidV7 {
    type Error = UuidV7Error;

    fn try_from(unverified: UnverifiedUuidV7) -> Result<Self, Self::Error> {
        let version = unverified.version();
        if version != 7 {
            return Err(UuidV7Error::InvalidVersion(version));
        }

        let variant = unverified.variant();
        if variant != 2 {
            return Err(UuidV7Error::InvalidVariant(variant));
        }

        Ok(UuidV7(unverified.0))
    }
}

impl TryFrom<u128> for UuidV7 {
    type Error = UuidV7Error;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        UuidV7::try_from(UnverifiedUuidV7(value))
    }
}

impl From<UuidV7> for Uuid {
    fn from(uuid: UuidV7) -> Self {
        Uuid::from_u128(uuid.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v7::UuidV7Seeds;

    #[test]
    fn test_now_is_valid() {
        let uuid = UuidV7::now();
        let unverified = UnverifiedUuidV7(uuid.as_u128());
        assert_eq!(unverified.version(), 7);
        assert_eq!(unverified.variant(), 2);
    }

    #[test]
    fn test_at_unix_ms_pins_timestamp() {
        let uuid = UuidV7::at_unix_ms(1_718_000_000_123);
        let unverified = UnverifiedUuidV7(uuid.as_u128());
        assert_eq!(unverified.unix_ts_ms(), 1_718_000_000_123);
        assert_eq!(unverified.version(), 7);
        assert_eq!(unverified.variant(), 2);
    }

    #[test]
    fn test_validation_accepts_assembled_value() {
        let seeds = UuidV7Seeds::with_fresh_randomness(1_718_000_000_123);
        let unverified = UnverifiedUuidV7(seeds.to_u128());
        assert!(UuidV7::try_from(unverified).is_ok());
    }

    #[test]
    fn test_validation_rejects_wrong_version() {
        // A nil UUID has version 0.
        let result = UuidV7::try_from(0u128);
        assert_eq!(result, Err(crate::error::UuidV7Error::InvalidVersion(0)));
    }

    #[test]
    fn test_validation_rejects_wrong_variant() {
        // Version 7 but variant bits 0b11.
        let value = (7u128 << 76) | (3u128 << 62);
        let result = UuidV7::try_from(value);
        assert_eq!(result, Err(crate::error::UuidV7Error::InvalidVariant(3)));
    }

    #[test]
    fn test_version_checked_before_variant() {
        // Both fields wrong: the version error wins.
        let result = UuidV7::try_from(u128::MAX);
        assert_eq!(result, Err(crate::error::UuidV7Error::InvalidVersion(15)));
    }
}
