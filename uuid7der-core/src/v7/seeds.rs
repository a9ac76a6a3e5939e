//! Seed material for assembling a UUIDv7 value

use serde::{Deserialize, Serialize};

/// The two ingredients of a UUIDv7: a millisecond timestamp and a 128-bit
/// pool of randomness.
///
/// Assembly uses the overwrite strategy: start from the full random pool,
/// then stamp the timestamp, version, and variant bit ranges over it. Every
/// bit not claimed by those three ranges keeps its random value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidV7Seeds {
    /// 48-bit Unix timestamp in milliseconds. Only the low 48 bits are used.
    pub unix_ts_ms: u64,
    /// 128 bits of randomness, typically from a CSPRNG.
    pub random_bytes: u128,
}

impl UuidV7Seeds {
    /// Seeds for the given timestamp with fresh randomness from the thread
    /// RNG.
    pub fn with_fresh_randomness(unix_ts_ms: u64) -> Self {
        Self {
            unix_ts_ms,
            random_bytes: rand::random(),
        }
    }

    /// Assemble the UUIDv7 `u128` value.
    ///
    /// 1. The top 48 bits are replaced with `unix_ts_ms`.
    /// 2. The 4 version bits (76-79) are set to `0b0111` (7).
    /// 3. The 2 variant bits (62-63) are set to `0b10` (2).
    ///
    /// All other bits are preserved from `random_bytes`.
    pub fn to_u128(&self) -> u128 {
        let mut uuid = self.random_bytes;

        // Timestamp: clear the top 48 bits and insert.
        uuid &= u128::MAX >> 48;
        uuid |= ((self.unix_ts_ms & 0xFFFF_FFFF_FFFF) as u128) << 80;

        // Version bits (76-79) := 7.
        uuid &= !(0xFu128 << 76);
        uuid |= 7u128 << 76;

        // Variant bits (62-63) := 2.
        uuid &= !(0x3u128 << 62);
        uuid |= 2u128 << 62;

        uuid
    }
}

impl From<UuidV7Seeds> for u128 {
    fn from(seeds: UuidV7Seeds) -> Self {
        seeds.to_u128()
    }
}
