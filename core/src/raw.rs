//! The raw buffer behind [`GrowableArray`](crate::GrowableArray).
//!
//! `RawBuf` owns an allocation of `cap` slots and nothing else: it never reads,
//! drops or tracks the elements stored in it. Every capacity change of the array
//! goes through [`RawBuf::try_relocate_with_gap`], which allocates the new block,
//! moves the live prefix across, and only then releases the old block.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    mem,
    ptr::{self, NonNull},
};

use crate::error::ReserveError;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

// SAFETY: `RawBuf` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out shared access to the slots.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// A buffer with no slots and no allocation.
    pub(crate) const fn new() -> Self {
        const { assert!(mem::size_of::<T>() != 0, "zero-sized element types are not supported") };
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, ReserveError> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| ReserveError::CapacityOverflow)?;
        // SAFETY: `cap > 0` and `T` is not zero-sized, so the layout is non-empty.
        let ptr = unsafe { alloc(layout) }.cast::<T>();
        let ptr = NonNull::new(ptr).ok_or(ReserveError::AllocFailed { layout })?;
        Ok(Self { ptr, cap })
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        handle_reserve(Self::try_with_capacity(cap))
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Moves the `live` leading elements into a fresh block of exactly `new_cap`
    /// slots, then releases the old block.
    ///
    /// # Safety
    ///
    /// The first `live` slots must be initialized, and `live <= new_cap`.
    pub(crate) unsafe fn try_relocate(
        &mut self,
        live: usize,
        new_cap: usize,
    ) -> Result<(), ReserveError> {
        // SAFETY: forwarded; an empty gap at `live` is always in range.
        unsafe { self.try_relocate_with_gap(live, new_cap, live, 0) }
    }

    /// Like [`try_relocate`](Self::try_relocate), but leaves `gap` uninitialized
    /// slots at index `at` in the new block: `[0, at)` keeps its place and
    /// `[at, live)` lands at `[at + gap, live + gap)`.
    ///
    /// On error the buffer is left exactly as it was.
    ///
    /// # Safety
    ///
    /// The first `live` slots must be initialized, `at <= live`, and
    /// `live + gap <= new_cap`.
    pub(crate) unsafe fn try_relocate_with_gap(
        &mut self,
        live: usize,
        new_cap: usize,
        at: usize,
        gap: usize,
    ) -> Result<(), ReserveError> {
        debug_assert!(at <= live && live <= self.cap);
        debug_assert!(live + gap <= new_cap);

        let fresh = Self::try_with_capacity(new_cap)?;
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            live,
            "relocating buffer"
        );

        // SAFETY: both blocks are distinct allocations large enough for the copied
        // ranges. The elements are moved bitwise; the old block is released below
        // without dropping anything.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr(), fresh.ptr(), at);
            ptr::copy_nonoverlapping(self.ptr().add(at), fresh.ptr().add(at + gap), live - at);
        }

        *self = fresh;
        Ok(())
    }

    /// Infallible [`try_relocate`](Self::try_relocate).
    ///
    /// # Safety
    ///
    /// Same as [`try_relocate`](Self::try_relocate).
    pub(crate) unsafe fn relocate(&mut self, live: usize, new_cap: usize) {
        // SAFETY: forwarded.
        handle_reserve(unsafe { self.try_relocate(live, new_cap) })
    }

    /// Infallible [`try_relocate_with_gap`](Self::try_relocate_with_gap).
    ///
    /// # Safety
    ///
    /// Same as [`try_relocate_with_gap`](Self::try_relocate_with_gap).
    pub(crate) unsafe fn relocate_with_gap(
        &mut self,
        live: usize,
        new_cap: usize,
        at: usize,
        gap: usize,
    ) {
        // SAFETY: forwarded.
        handle_reserve(unsafe { self.try_relocate_with_gap(live, new_cap, at, gap) })
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 {
            return;
        }
        // SAFETY: the same layout was computed successfully when allocating.
        unsafe {
            let layout = Layout::array::<T>(self.cap).unwrap_unchecked();
            dealloc(self.ptr().cast(), layout);
        }
    }
}

/// Turns a reservation failure into the conventional panic or abort.
#[track_caller]
pub(crate) fn handle_reserve<R>(result: Result<R, ReserveError>) -> R {
    match result {
        Ok(value) => value,
        Err(ReserveError::CapacityOverflow) => panic!("capacity overflow"),
        Err(ReserveError::AllocFailed { layout }) => handle_alloc_error(layout),
    }
}
