//! Allocation error taxonomy.

use thiserror::Error;

/// Errors raised by [`AlignedAlloc::allocate`](crate::AlignedAlloc::allocate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The requested alignment is zero or not a power of two. Rejected
    /// before the backing allocator is consulted.
    #[error("alignment {0} is not a power of two")]
    InvalidAlignment(usize),
    /// The backing allocator could not provide the oversized region (or the
    /// request overflowed the address space). Nothing was allocated.
    #[error("backing allocator could not provide {0} bytes")]
    Exhausted(usize),
}
