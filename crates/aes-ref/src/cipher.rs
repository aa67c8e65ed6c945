//! AES-128 key schedule, block encryption, and collaborator-trait impls.

use core::convert::TryInto;

use cbcmac_core::{Block, BlockEncryptor, KeyExpander};

use crate::key::{Aes128Key, RoundKeys, ROUND_KEYS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; 4 * ROUND_KEYS];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in 4..w.len() {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ (u32::from(RCON[i / 4 - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEYS];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, slot) in round_key.chunks_exact_mut(4).enumerate() {
            slot.copy_from_slice(&w[round * 4 + word_idx].to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Portable reference cipher implementing the collaborator capabilities.
///
/// Stateless; a hardware-accelerated module drops in behind the same traits
/// without touching the MAC engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes128;

impl KeyExpander for Aes128 {
    type Key = Aes128Key;
    type Schedule = RoundKeys;

    fn expand_key(&self, raw_key: &Aes128Key) -> RoundKeys {
        expand_key(raw_key)
    }
}

impl BlockEncryptor for Aes128 {
    type Schedule = RoundKeys;

    fn encrypt_block(&self, schedule: &RoundKeys, plaintext: &Block) -> Block {
        encrypt_block(plaintext, schedule)
    }
}
