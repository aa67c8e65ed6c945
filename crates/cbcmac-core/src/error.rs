//! MAC error taxonomy.

use thiserror::Error;

use crate::block::BLOCK_BYTES;

/// Errors raised when validating a MAC request.
///
/// Both variants are detected before the first block-cipher call: a rejected
/// message consumes no encryption work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacError {
    /// The message contained no blocks. CBC-MAC defines no tag for an empty
    /// message, so the construction rejects it rather than inventing one.
    #[error("message must contain at least one block")]
    EmptyMessage,
    /// The message length is not an exact multiple of the block size. The
    /// construction never pads or truncates on the caller's behalf.
    #[error("message length {0} is not a multiple of {BLOCK_BYTES} bytes")]
    MisalignedLength(usize),
}
