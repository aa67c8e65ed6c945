//! Aligned allocation over a general-purpose backing allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::mem;
use std::ptr::NonNull;

use crate::buf::AlignedBuf;
use crate::error::AllocError;

/// Bytes reserved in front of every returned address for the origin record.
pub(crate) const WORD: usize = mem::size_of::<usize>();

/// Alignment requested from the backing allocator. Kept at one byte so the
/// offset computation never leans on the backing allocator's own alignment
/// behavior.
const BACKING_ALIGN: usize = 1;

/// Layout of the oversized backing request: the usable bytes, a full
/// alignment unit on both flanks, and the bookkeeping word. `None` when the
/// request overflows the address space.
fn backing_layout(alignment: usize, size: usize) -> Option<Layout> {
    let total = alignment
        .checked_mul(2)?
        .checked_add(WORD)?
        .checked_add(size)?;
    Layout::from_size_align(total, BACKING_ALIGN).ok()
}

/// Smallest non-negative distance from `addr` to the next multiple of
/// `alignment`. An address already on the boundary maps to zero, never to a
/// full alignment unit.
fn align_offset(addr: usize, alignment: usize) -> usize {
    let rem = addr % alignment;
    if rem == 0 {
        0
    } else {
        alignment - rem
    }
}

/// Allocator handing out buffers that start on caller-chosen power-of-two
/// boundaries, backed by a general-purpose allocator `A`.
///
/// The backing allocator is a type parameter so tests can inject an
/// instrumented one; [`System`] is the default. Thread safety is inherited
/// from `A`: `GlobalAlloc` implementations are required to be safe to call
/// concurrently, and the aligned-allocation algorithm adds no shared state
/// beyond the per-buffer bookkeeping word, written once here and read once
/// at release.
pub struct AlignedAlloc<A: GlobalAlloc = System> {
    backing: A,
}

impl AlignedAlloc<System> {
    /// Creates an allocator backed by [`System`].
    pub const fn new() -> Self {
        Self { backing: System }
    }
}

impl Default for AlignedAlloc<System> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: GlobalAlloc> AlignedAlloc<A> {
    /// Wraps a specific backing allocator instance.
    pub const fn with_backing(backing: A) -> Self {
        Self { backing }
    }

    /// Allocates `size` usable bytes starting at a multiple of `alignment`.
    ///
    /// `alignment` must be a power of two; `size` may be zero, and
    /// `alignment == 1` degenerates to an ordinary allocation. The region is
    /// handed out uninitialized; callers that need zeroed memory call
    /// [`AlignedBuf::zero`] afterwards. On failure nothing was allocated; a
    /// partially valid buffer is never returned.
    pub fn allocate(&self, alignment: usize, size: usize) -> Result<AlignedBuf<'_, A>, AllocError> {
        if !alignment.is_power_of_two() {
            return Err(AllocError::InvalidAlignment(alignment));
        }
        let layout = backing_layout(alignment, size).ok_or(AllocError::Exhausted(size))?;

        // SAFETY: `layout` has a non-zero size; it always includes the
        // bookkeeping word and the alignment margin.
        let origin = unsafe { self.backing.alloc(layout) };
        let Some(origin) = NonNull::new(origin) else {
            return Err(AllocError::Exhausted(layout.size()));
        };

        let candidate = origin.as_ptr() as usize + WORD;
        let offset = align_offset(candidate, alignment);
        // SAFETY: `WORD + offset + size <= layout.size()`: the offset is at
        // most `alignment - 1` and the layout reserves `2 * alignment` bytes
        // beyond `size + WORD`, so the usable region stays inside the block.
        let aligned = unsafe { origin.as_ptr().add(WORD + offset) };
        // SAFETY: the bookkeeping slot spans the `WORD` bytes just before
        // `aligned`, inside the same block. The store is unaligned: for
        // alignments below `WORD` the slot itself need not be word-aligned.
        unsafe {
            (aligned.sub(WORD) as *mut usize).write_unaligned(origin.as_ptr() as usize);
        }
        // SAFETY: `aligned` points `WORD + offset` bytes into a non-null block.
        let ptr = unsafe { NonNull::new_unchecked(aligned) };
        Ok(AlignedBuf::new(ptr, size, alignment, layout, self))
    }

    /// Returns `buf` to the backing allocator.
    ///
    /// The handle is consumed, so double release and use after release do
    /// not compile. An absent buffer is an `Option` holding `None`, and
    /// dropping that `None` is the no-op release of the null case; dropping
    /// a live handle frees it exactly like this call does.
    pub fn release(&self, buf: AlignedBuf<'_, A>) {
        debug_assert!(std::ptr::eq(self, buf.owner()));
        drop(buf);
    }

    pub(crate) fn backing(&self) -> &A {
        &self.backing
    }
}
