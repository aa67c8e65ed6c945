//! Custom-alignment allocation for cipher key-schedule buffers.
//!
//! Hardware-accelerated block-cipher instructions require their round-key
//! buffers to start on strict power-of-two boundaries that a general-purpose
//! allocator does not promise. [`AlignedAlloc`] closes that gap: it
//! over-allocates from an ordinary backing allocator, steps forward to the
//! first aligned address past a pointer-sized bookkeeping slot, and records
//! the true allocation origin in that slot so release needs no side table.
//!
//! The returned [`AlignedBuf`] is a linear handle: it is released exactly
//! once, either by passing it to [`AlignedAlloc::release`] or by dropping
//! it, and the borrow checker rules out use after release. The usable region
//! is handed out uninitialized; callers zero or fill it explicitly before
//! taking a safe view of its contents.
//!
//! This is the one crate in the workspace that needs `unsafe`; it is
//! confined to the allocate/release internals and the raw views on
//! [`AlignedBuf`].

#![deny(missing_docs)]

mod aligned;
mod buf;
mod error;

pub use crate::aligned::AlignedAlloc;
pub use crate::buf::AlignedBuf;
pub use crate::error::AllocError;
