//! Key types for the reference AES-128 family.

use cbcmac_core::{Block, BLOCK_BYTES};

/// Number of round keys in an expanded AES-128 schedule (10 rounds plus the
/// initial whitening key).
pub const ROUND_KEYS: usize = 11;

/// Flat byte length of an expanded schedule.
pub const SCHEDULE_BYTES: usize = ROUND_KEYS * BLOCK_BYTES;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-128, read-only after expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEYS]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into the contiguous 176-byte layout that
    /// accelerated cipher modules consume from an aligned buffer.
    pub fn as_bytes(&self) -> [u8; SCHEDULE_BYTES] {
        let mut out = [0u8; SCHEDULE_BYTES];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_BYTES).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }

    /// Rebuilds a schedule from its flat 176-byte layout.
    pub fn from_bytes(bytes: &[u8; SCHEDULE_BYTES]) -> Self {
        let mut keys = [[0u8; BLOCK_BYTES]; ROUND_KEYS];
        for (round_key, chunk) in keys.iter_mut().zip(bytes.chunks_exact(BLOCK_BYTES)) {
            round_key.copy_from_slice(chunk);
        }
        Self(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_views_round_trip() {
        let mut keys = [[0u8; BLOCK_BYTES]; ROUND_KEYS];
        for (round, key) in keys.iter_mut().enumerate() {
            for (i, byte) in key.iter_mut().enumerate() {
                *byte = (round * BLOCK_BYTES + i) as u8;
            }
        }
        let schedule = RoundKeys(keys);
        let bytes = schedule.as_bytes();
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[SCHEDULE_BYTES - 1], (SCHEDULE_BYTES - 1) as u8);
        assert_eq!(RoundKeys::from_bytes(&bytes), schedule);
    }
}
