//! Block representation helpers.

/// Width in bytes of a single cipher block (and of a MAC tag).
pub const BLOCK_BYTES: usize = 16;

/// Cipher block of 16 bytes.
pub type Block = [u8; BLOCK_BYTES];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
