//! Capability traits for the external block-cipher collaborator.

use crate::block::Block;

/// Derives an expanded key schedule from a raw secret key.
///
/// The schedule is produced once per key and consumed read-only by every
/// subsequent block encryption; key length and round count are cipher-family
/// parameters hidden behind the associated types.
pub trait KeyExpander {
    /// Raw secret key accepted by this cipher family.
    type Key;
    /// Expanded per-round key material.
    type Schedule;

    /// Expands `raw_key` into the round-key schedule.
    fn expand_key(&self, raw_key: &Self::Key) -> Self::Schedule;
}

/// Encrypts a single block under a fixed, pre-expanded schedule.
///
/// Implementations must be deterministic and side-effect free: for a fixed
/// schedule, equal plaintext blocks always map to equal ciphertext blocks.
pub trait BlockEncryptor {
    /// Expanded per-round key material consumed by each encryption.
    type Schedule;

    /// Encrypts one block under `schedule`.
    fn encrypt_block(&self, schedule: &Self::Schedule, plaintext: &Block) -> Block;
}
