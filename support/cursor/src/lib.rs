//! Pointer-like cursors over contiguous buffers.
//!
//! A cursor is a single address into a buffer of `T`. It knows nothing about the
//! container that owns the buffer, so it carries no lifetime and no length:
//!
//! ```text
//! buffer:  [ a | b | c | d | . | . ]
//!            ▲               ▲
//!          begin            end
//! ```
//!
//! Two flavours exist:
//!
//! - [`Cursor<T>`] wraps a `*mut T` and may be used to write through.
//! - [`ConstCursor<T>`] wraps a `*const T` and is read-only.
//!
//! A `Cursor` converts into a `ConstCursor`, never the other way around.
//!
//! # Validity
//!
//! Moving a cursor is always safe: arithmetic wraps instead of asserting that the
//! address stays inside an allocation. Only dereferencing is `unsafe`, and the
//! caller must guarantee the slot is live. Any reallocation of the underlying
//! buffer invalidates every cursor into it.
//!
//! ```
//! use elastic_cursor::Cursor;
//!
//! let mut data = [10, 20, 30];
//! let begin = Cursor::from_ptr(data.as_mut_ptr());
//! let end = begin + 3;
//!
//! assert_eq!(end - begin, 3);
//! // SAFETY: `begin + 1` points at `data[1]`, which is alive.
//! assert_eq!(unsafe { *(begin + 1).as_ref() }, 20);
//! ```

#![no_std]

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr, slice,
};

/// A read/write cursor wrapping a raw `*mut T`.
///
/// See [crate-level docs](crate) for the validity contract.
pub struct Cursor<T> {
    ptr: *mut T,
}

/// A read-only cursor wrapping a raw `*const T`.
pub struct ConstCursor<T> {
    ptr: *const T,
}

static_assertions::assert_eq_size!(Cursor<u8>, usize);
static_assertions::assert_eq_size!(Cursor<[u64; 4]>, usize);
static_assertions::assert_eq_size!(ConstCursor<u8>, usize);
static_assertions::assert_eq_size!(ConstCursor<[u64; 4]>, usize);

/// Number of bytes per slot. Slot arithmetic has no meaning for zero-sized types.
#[inline(always)]
const fn slot_size<T>() -> usize {
    const { assert!(mem::size_of::<T>() != 0, "cursors over zero-sized types are not supported") };
    mem::size_of::<T>()
}

macro_rules! impl_cursor {
    ($name:ident, $raw:ty, $null:path) => {
        impl<T> $name<T> {
            /// A cursor pointing nowhere. Stepping or dereferencing it is a caller error.
            #[inline]
            pub const fn null() -> Self {
                Self { ptr: $null() }
            }

            #[inline]
            pub const fn from_ptr(ptr: $raw) -> Self {
                Self { ptr }
            }

            #[inline]
            pub const fn as_ptr(self) -> $raw {
                self.ptr
            }

            #[inline]
            pub fn is_null(self) -> bool {
                self.ptr.is_null()
            }

            /// Returns a shared reference to the pointed-to slot.
            ///
            /// # Panics
            ///
            /// Panics if the cursor is null.
            ///
            /// # Safety
            ///
            /// The slot must hold a live `T` for all of `'a`, and nothing may mutate it
            /// during that time. In particular the owning buffer must not be reallocated.
            #[inline]
            #[track_caller]
            pub unsafe fn as_ref<'a>(self) -> &'a T {
                assert!(!self.ptr.is_null(), "dereferenced a null cursor");
                // SAFETY: non-null checked above; liveness is the caller's obligation.
                unsafe { &*self.ptr }
            }

            /// Returns a copy of this cursor moved by `n` slots (negative moves backwards).
            #[inline]
            #[must_use]
            pub fn offset(self, n: isize) -> Self {
                Self {
                    ptr: self.ptr.wrapping_offset(n),
                }
            }

            #[inline]
            pub fn advance(&mut self, n: usize) {
                self.ptr = self.ptr.wrapping_add(n);
            }

            #[inline]
            pub fn retreat(&mut self, n: usize) {
                self.ptr = self.ptr.wrapping_sub(n);
            }

            /// Steps forward one slot and returns the updated cursor.
            #[inline]
            pub fn inc(&mut self) -> Self {
                debug_assert!(!self.ptr.is_null(), "stepped a null cursor");
                self.advance(1);
                *self
            }

            /// Steps forward one slot and returns the cursor as it was before the step.
            #[inline]
            pub fn post_inc(&mut self) -> Self {
                let prior = *self;
                self.inc();
                prior
            }

            /// Steps back one slot and returns the updated cursor.
            #[inline]
            pub fn dec(&mut self) -> Self {
                debug_assert!(!self.ptr.is_null(), "stepped a null cursor");
                self.retreat(1);
                *self
            }

            /// Steps back one slot and returns the cursor as it was before the step.
            #[inline]
            pub fn post_dec(&mut self) -> Self {
                let prior = *self;
                self.dec();
                prior
            }

            /// Signed number of slots from `origin` to `self`.
            ///
            /// Only meaningful when both cursors address the same buffer.
            #[inline]
            pub fn offset_from(self, origin: Self) -> isize {
                let bytes = (self.ptr.addr() as isize).wrapping_sub(origin.ptr.addr() as isize);
                bytes / slot_size::<T>() as isize
            }

            /// Views the slots in `[first, last)` as a slice.
            ///
            /// # Panics
            ///
            /// Panics if `last` precedes `first`, or if the range is non-empty and
            /// `first` is null.
            ///
            /// # Safety
            ///
            /// Both cursors must address the same buffer, and every slot in the range
            /// must hold a live `T` that stays unmodified for `'a`.
            #[track_caller]
            pub unsafe fn slice_between<'a>(first: Self, last: Self) -> &'a [T] {
                let len = last.offset_from(first);
                assert!(len >= 0, "cursor range is reversed");
                if len == 0 {
                    return &[];
                }
                assert!(!first.ptr.is_null(), "dereferenced a null cursor");
                // SAFETY: the range is non-empty, non-null and live per the caller's contract.
                unsafe { slice::from_raw_parts(first.ptr, len as usize) }
            }

            /// Returns an adapter printing `[@ <address>: <value> ]`.
            ///
            /// # Safety
            ///
            /// Same contract as [`as_ref`](Self::as_ref).
            pub unsafe fn display<'a>(self) -> CursorDisplay<'a, T>
            where
                T: fmt::Display,
            {
                CursorDisplay {
                    addr: self.ptr as *const T,
                    // SAFETY: forwarded to the caller.
                    value: unsafe { self.as_ref() },
                }
            }
        }

        impl<T> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::null()
            }
        }

        impl<T> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ptr::eq(self.ptr, other.ptr)
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> PartialOrd for $name<T> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T> Ord for $name<T> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                self.ptr.addr().cmp(&other.ptr.addr())
            }
        }

        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.ptr.addr().hash(state);
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.ptr).finish()
            }
        }

        impl<T> Add<isize> for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, n: isize) -> Self {
                self.offset(n)
            }
        }

        impl<T> Add<$name<T>> for isize {
            type Output = $name<T>;

            #[inline]
            fn add(self, cursor: $name<T>) -> $name<T> {
                cursor.offset(self)
            }
        }

        impl<T> Sub<isize> for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, n: isize) -> Self {
                self.offset(n.wrapping_neg())
            }
        }

        impl<T> Sub for $name<T> {
            type Output = isize;

            #[inline]
            fn sub(self, origin: Self) -> isize {
                self.offset_from(origin)
            }
        }

        impl<T> AddAssign<isize> for $name<T> {
            #[inline]
            fn add_assign(&mut self, n: isize) {
                *self = self.offset(n);
            }
        }

        impl<T> SubAssign<isize> for $name<T> {
            #[inline]
            fn sub_assign(&mut self, n: isize) {
                *self = self.offset(n.wrapping_neg());
            }
        }
    };
}

impl_cursor!(Cursor, *mut T, ptr::null_mut);
impl_cursor!(ConstCursor, *const T, ptr::null);

impl<T> Cursor<T> {
    /// Returns an exclusive reference to the pointed-to slot.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is null.
    ///
    /// # Safety
    ///
    /// The slot must hold a live `T` for all of `'a`, and no other reference to it
    /// may exist during that time.
    #[inline]
    #[track_caller]
    pub unsafe fn as_mut<'a>(self) -> &'a mut T {
        assert!(!self.ptr.is_null(), "dereferenced a null cursor");
        // SAFETY: non-null checked above; exclusivity is the caller's obligation.
        unsafe { &mut *self.ptr }
    }

    #[inline]
    pub const fn as_const(self) -> ConstCursor<T> {
        ConstCursor {
            ptr: self.ptr.cast_const(),
        }
    }
}

impl<T> From<Cursor<T>> for ConstCursor<T> {
    #[inline]
    fn from(cursor: Cursor<T>) -> Self {
        cursor.as_const()
    }
}

impl<T> PartialEq<Cursor<T>> for ConstCursor<T> {
    #[inline]
    fn eq(&self, other: &Cursor<T>) -> bool {
        ptr::eq(self.ptr, other.ptr.cast_const())
    }
}

impl<T> PartialEq<ConstCursor<T>> for Cursor<T> {
    #[inline]
    fn eq(&self, other: &ConstCursor<T>) -> bool {
        ptr::eq(self.ptr.cast_const(), other.ptr)
    }
}

/// Diagnostic rendering of a cursor and its pointee. See [`Cursor::display`].
pub struct CursorDisplay<'a, T> {
    addr: *const T,
    value: &'a T,
}

impl<T: fmt::Display> fmt::Display for CursorDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[@ {:p}: {} ]", self.addr, self.value)
    }
}
