//! CBC-MAC construction: chained single-block encryption.

use crate::block::{xor_in_place, Block, BLOCK_BYTES};
use crate::cipher::BlockEncryptor;
use crate::error::MacError;

/// Authentication tag: the final chaining value, exactly one block.
pub type Tag = Block;

/// Computes the CBC-MAC tag of `message` under `schedule`.
///
/// The chaining value starts as the all-zero block; each message block is
/// XORed into it and the sum encrypted, and the value left after the last
/// block is the tag, untruncated. No IV parameter exists: this is a keyed
/// MAC, not CBC encryption, and interoperating verifiers assume the zero
/// start.
///
/// `message` must be non-empty and an exact multiple of [`BLOCK_BYTES`]
/// bytes long; anything else is rejected before the first cipher call.
/// Neither `schedule` nor `message` is mutated, and no state survives the
/// call.
pub fn compute_mac<E: BlockEncryptor>(
    cipher: &E,
    schedule: &E::Schedule,
    message: &[u8],
) -> Result<Tag, MacError> {
    if message.is_empty() {
        return Err(MacError::EmptyMessage);
    }
    if message.len() % BLOCK_BYTES != 0 {
        return Err(MacError::MisalignedLength(message.len()));
    }

    let mut chain: Block = [0u8; BLOCK_BYTES];
    for chunk in message.chunks_exact(BLOCK_BYTES) {
        let mut block: Block = [0u8; BLOCK_BYTES];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &chain);
        chain = cipher.encrypt_block(schedule, &block);
    }
    Ok(chain)
}

/// CBC-MAC engine bound to one encryptor and one expanded schedule.
///
/// Binding both at construction keeps repeated MAC computations under the
/// same key free of per-call setup; each [`compute`](CbcMac::compute) call
/// remains independent and stateless.
pub struct CbcMac<E: BlockEncryptor> {
    cipher: E,
    schedule: E::Schedule,
}

impl<E: BlockEncryptor> CbcMac<E> {
    /// Creates an engine from a cipher and a schedule expanded for it.
    pub fn new(cipher: E, schedule: E::Schedule) -> Self {
        Self { cipher, schedule }
    }

    /// Computes the tag of `message`. See [`compute_mac`].
    pub fn compute(&self, message: &[u8]) -> Result<Tag, MacError> {
        compute_mac(&self.cipher, &self.schedule, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::cell::Cell;

    /// Deterministic stand-in cipher: XORs the schedule in, then rotates the
    /// block left by one byte so that block order matters. Counts calls so
    /// tests can pin the no-partial-work contract.
    struct StubCipher {
        calls: Cell<usize>,
    }

    impl StubCipher {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl BlockEncryptor for StubCipher {
        type Schedule = Block;

        fn encrypt_block(&self, schedule: &Block, plaintext: &Block) -> Block {
            self.calls.set(self.calls.get() + 1);
            let mut out = *plaintext;
            xor_in_place(&mut out, schedule);
            out.rotate_left(1);
            out
        }
    }

    const SCHEDULE: Block = [0xa5; BLOCK_BYTES];

    #[test]
    fn empty_message_rejects_without_cipher_calls() {
        let cipher = StubCipher::new();
        let result = compute_mac(&cipher, &SCHEDULE, &[]);
        assert_eq!(result, Err(MacError::EmptyMessage));
        assert_eq!(cipher.calls.get(), 0);
    }

    #[test]
    fn misaligned_length_rejects_without_cipher_calls() {
        let cipher = StubCipher::new();
        for len in [1, 15, 17, 31, 33] {
            let message = vec![0x42u8; len];
            let result = compute_mac(&cipher, &SCHEDULE, &message);
            assert_eq!(result, Err(MacError::MisalignedLength(len)));
        }
        assert_eq!(cipher.calls.get(), 0);
    }

    #[test]
    fn single_block_tag_is_plain_encryption() {
        let cipher = StubCipher::new();
        let block: Block = *b"sixteen byte msg";
        let tag = compute_mac(&cipher, &SCHEDULE, &block).expect("valid message");
        assert_eq!(tag, cipher.encrypt_block(&SCHEDULE, &block));
    }

    #[test]
    fn three_block_chaining_matches_manual_unroll() {
        let cipher = StubCipher::new();
        let b1: Block = [0x11; BLOCK_BYTES];
        let b2: Block = [0x22; BLOCK_BYTES];
        let b3: Block = [0x33; BLOCK_BYTES];

        let mut message = Vec::new();
        message.extend_from_slice(&b1);
        message.extend_from_slice(&b2);
        message.extend_from_slice(&b3);
        let tag = compute_mac(&cipher, &SCHEDULE, &message).expect("valid message");
        assert_eq!(cipher.calls.get(), 3);

        let mut chain = cipher.encrypt_block(&SCHEDULE, &b1);
        xor_in_place(&mut chain, &b2);
        chain = cipher.encrypt_block(&SCHEDULE, &chain);
        xor_in_place(&mut chain, &b3);
        chain = cipher.encrypt_block(&SCHEDULE, &chain);
        assert_eq!(tag, chain);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let cipher = StubCipher::new();
        let mut rng = rand::thread_rng();
        let mut message = vec![0u8; 8 * BLOCK_BYTES];
        rng.fill_bytes(&mut message);

        let first = compute_mac(&cipher, &SCHEDULE, &message).expect("valid message");
        let second = compute_mac(&cipher, &SCHEDULE, &message).expect("valid message");
        assert_eq!(first, second);
    }

    #[test]
    fn block_order_changes_tag() {
        let cipher = StubCipher::new();
        let mut forward = Vec::new();
        forward.extend_from_slice(&[0x01; BLOCK_BYTES]);
        forward.extend_from_slice(&[0x02; BLOCK_BYTES]);
        let mut swapped = Vec::new();
        swapped.extend_from_slice(&[0x02; BLOCK_BYTES]);
        swapped.extend_from_slice(&[0x01; BLOCK_BYTES]);

        let tag_forward = compute_mac(&cipher, &SCHEDULE, &forward).expect("valid message");
        let tag_swapped = compute_mac(&cipher, &SCHEDULE, &swapped).expect("valid message");
        assert_ne!(tag_forward, tag_swapped);
    }

    #[test]
    fn engine_matches_free_function() {
        let message = vec![0x5au8; 4 * BLOCK_BYTES];
        let expected = compute_mac(&StubCipher::new(), &SCHEDULE, &message).expect("valid message");

        let engine = CbcMac::new(StubCipher::new(), SCHEDULE);
        assert_eq!(engine.compute(&message).expect("valid message"), expected);
    }
}
