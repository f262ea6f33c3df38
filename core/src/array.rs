//! `GrowableArray`: a contiguous, heap-backed, growable sequence.
//!
//! The array owns one [`RawBuf`] and a live length. Slots `[0, len)` hold
//! initialized elements; slots `[len, capacity)` are allocated but hold nothing.
//!
//! Growth follows two policies:
//!
//! - `push_back` and single-element `insert` double the capacity (minimum 1).
//! - `insert_range` grows linearly to `capacity + count`, and `assign*` grows to
//!   exactly the assigned count.
//!
//! Positions are [`Cursor`]s. Any operation that reallocates invalidates every
//! cursor previously obtained from the array.

use core::{
    hash::{Hash, Hasher},
    iter,
    ops::{Index, IndexMut},
    ptr, slice,
};

use elastic_cursor::{ConstCursor, Cursor};

use crate::{
    error::{OutOfRange, ReserveError},
    raw::{RawBuf, handle_reserve},
};

pub struct GrowableArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

static_assertions::assert_eq_size!(GrowableArray<u64>, [usize; 3]);
static_assertions::assert_eq_size!(Option<GrowableArray<u64>>, [usize; 3]);

impl<T> GrowableArray<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty array with exactly `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Creates an array that starts *full*: `len` default values in exactly `len`
    /// slots.
    ///
    /// ```
    /// use elastic_core::GrowableArray;
    ///
    /// let array = GrowableArray::<i32>::with_len(3);
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 3);
    /// assert_eq!(array.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_range((0..len).map(|_| T::default()))
    }

    /// Creates an array holding the items of `values`, allocating exactly as many
    /// slots as the iterator reports.
    pub fn from_range<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let mut array = Self::with_capacity(values.len());
        array.fill_from(values);
        array
    }

    /// Creates an array holding clones of `values`, with capacity `values.len()`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_range(values.iter().cloned())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // Cursors

    /// Cursor to the first slot.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::from_ptr(self.buf.ptr())
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor<T> {
        self.begin() + self.len as isize
    }

    pub fn cbegin(&self) -> ConstCursor<T> {
        self.begin().as_const()
    }

    pub fn cend(&self) -> ConstCursor<T> {
        self.end().as_const()
    }

    /// Index of `position` if it lies within `[begin, end]`.
    pub fn index_of(&self, position: impl Into<ConstCursor<T>>) -> Option<usize> {
        let position = position.into();
        if position < self.cbegin() || position > self.cend() {
            return None;
        }
        Some(position.offset_from(self.cbegin()) as usize)
    }

    /// The live element at `position`, or `None` if the cursor does not address one
    /// of this array's live elements.
    pub fn get_at(&self, position: impl Into<ConstCursor<T>>) -> Option<&T> {
        self.index_of(position).and_then(|index| self.get(index))
    }

    #[track_caller]
    fn position_index(&self, position: impl Into<ConstCursor<T>>) -> usize {
        match self.index_of(position) {
            Some(index) => index,
            None => panic!("cursor does not point into this array"),
        }
    }

    // Element access

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access.
    ///
    /// ```
    /// use elastic_core::{GrowableArray, OutOfRange};
    ///
    /// let array = GrowableArray::from([1, 2, 3]);
    /// assert_eq!(array.at(2), Ok(&3));
    /// assert_eq!(array.at(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.get(index).ok_or(OutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    #[track_caller]
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front() called on an empty array");
        &self[0]
    }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut() called on an empty array");
        &mut self[0]
    }

    #[track_caller]
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back() called on an empty array");
        &self[self.len - 1]
    }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut() called on an empty array");
        let last = self.len - 1;
        &mut self[last]
    }

    // Capacity

    /// Grows the buffer to exactly `new_capacity` slots if it is currently smaller.
    pub fn reserve(&mut self, new_capacity: usize) {
        handle_reserve(self.try_reserve(new_capacity))
    }

    /// Fallible [`reserve`](Self::reserve). On error the array is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        // SAFETY: `[0, len)` is initialized and `len <= capacity < new_capacity`.
        unsafe { self.buf.try_relocate(self.len, new_capacity) }
    }

    /// Reallocates to exactly `len` slots if there is any slack.
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.capacity() {
            return;
        }
        tracing::debug!(released = self.capacity() - self.len, "shrinking to fit");
        // SAFETY: `[0, len)` is initialized.
        unsafe { self.buf.relocate(self.len, self.len) }
    }

    /// Drops the elements at `[len, self.len())`. Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(
            // SAFETY: `len < self.len <= capacity`.
            unsafe { self.buf.ptr().add(len) },
            self.len - len,
        );
        // Shorten first: a panicking destructor must not lead to a double drop.
        self.len = len;
        // SAFETY: the tail was initialized and is no longer reachable.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // Mutation

    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_one(self.len);
        }
        // SAFETY: room for one more was ensured above.
        unsafe { self.push_unchecked(value) }
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now outside `[0, len)`, so it is read once.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Inserts `value` before `position` and returns a cursor to it.
    ///
    /// When the array is full the capacity doubles (minimum 1); otherwise the
    /// suffix shifts one slot to the right in place.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not within `[begin, end]`.
    ///
    /// ```
    /// use elastic_core::growable;
    ///
    /// let mut array = growable![1, 3];
    /// let inserted = array.insert(array.begin() + 1, 2);
    /// assert_eq!(array.as_slice(), &[1, 2, 3]);
    /// assert_eq!(array.get_at(inserted), Some(&2));
    /// ```
    #[track_caller]
    pub fn insert(&mut self, position: impl Into<ConstCursor<T>>, value: T) -> Cursor<T> {
        let index = self.position_index(position);
        if self.len == self.capacity() {
            self.grow_one(index);
        } else {
            // SAFETY: there is a spare slot past the end; `ptr::copy` handles the overlap.
            unsafe {
                let at = self.buf.ptr().add(index);
                ptr::copy(at, at.add(1), self.len - index);
            }
        }
        // SAFETY: slot `index` is vacant after the shift or relocation.
        unsafe { self.buf.ptr().add(index).write(value) };
        self.len += 1;
        self.begin() + index as isize
    }

    /// Inserts every item of `values` before `position` and returns a cursor to the
    /// first inserted element (or to `position` if nothing was inserted).
    ///
    /// If the items do not fit, the buffer grows to exactly
    /// `capacity + values.len()` slots.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not within `[begin, end]`, or with "capacity
    /// overflow" if the new length does not fit in `usize`.
    #[track_caller]
    pub fn insert_range<I>(&mut self, position: impl Into<ConstCursor<T>>, values: I) -> Cursor<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = self.position_index(position);
        let mut values = values.into_iter();
        let count = values.len();
        if count == 0 {
            return self.begin() + index as isize;
        }

        let tail = self.len - index;
        let Some(needed) = self.len.checked_add(count) else {
            panic!("capacity overflow");
        };
        if needed > self.capacity() {
            let new_capacity = match self.capacity().checked_add(count) {
                Some(capacity) => capacity,
                None => panic!("capacity overflow"),
            };
            // SAFETY: `index <= len` and `len + count <= new_capacity`.
            unsafe { self.buf.relocate_with_gap(self.len, new_capacity, index, count) }
        } else {
            // SAFETY: `len + count <= capacity`; `ptr::copy` handles the overlap.
            unsafe {
                let at = self.buf.ptr().add(index);
                ptr::copy(at, at.add(count), tail);
            }
        }

        // The tail now sits at `index + count`. Until it is stitched back in, `len`
        // only covers the prefix and the items written so far, so a panicking
        // iterator leaks the tail instead of dropping uninitialized slots.
        self.len = index;
        let mut written = 0;
        while written < count {
            let Some(value) = values.next() else { break };
            // SAFETY: slot `index + written` lies inside the gap.
            unsafe { self.buf.ptr().add(index + written).write(value) };
            written += 1;
            self.len = index + written;
        }
        if written < count {
            // The iterator came up short; close the remaining gap.
            // SAFETY: both ranges lie within the allocation; `ptr::copy` handles the overlap.
            unsafe {
                let base = self.buf.ptr();
                ptr::copy(base.add(index + count), base.add(index + written), tail);
            }
        }
        self.len = index + written + tail;
        self.begin() + index as isize
    }

    /// Inserts clones of `values` before `position`. See [`insert_range`](Self::insert_range).
    #[track_caller]
    pub fn insert_slice(&mut self, position: impl Into<ConstCursor<T>>, values: &[T]) -> Cursor<T>
    where
        T: Clone,
    {
        self.insert_range(position, values.iter().cloned())
    }

    /// Removes `[first, last)` and returns a cursor to the element that followed the
    /// removed range, now at `first`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors are not within `[begin, end]` or if `last` precedes
    /// `first`.
    #[track_caller]
    pub fn erase_range(
        &mut self,
        first: impl Into<ConstCursor<T>>,
        last: impl Into<ConstCursor<T>>,
    ) -> Cursor<T> {
        let start = self.position_index(first);
        let stop = self.position_index(last);
        assert!(start <= stop, "erase range is reversed");

        let removed = stop - start;
        if removed > 0 {
            let tail = self.len - stop;
            let base = self.buf.ptr();
            // Shorten first: if a destructor panics, the tail leaks instead of
            // being dropped twice.
            self.len = start;
            // SAFETY: `[start, stop)` is initialized and no longer reachable; the
            // tail move stays within the allocation.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), removed));
                ptr::copy(base.add(stop), base.add(start), tail);
            }
            self.len = start + tail;
        }
        self.begin() + start as isize
    }

    /// Removes the element at `position` and returns a cursor to its successor.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not address a live element.
    #[track_caller]
    pub fn erase(&mut self, position: impl Into<ConstCursor<T>>) -> Cursor<T> {
        let index = self.position_index(position);
        assert!(index < self.len, "cannot erase the end cursor");
        let first = self.begin() + index as isize;
        self.erase_range(first, first + 1)
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// ```
    /// use elastic_core::growable;
    ///
    /// let mut array = growable![1, 2, 3, 4];
    /// array.assign(2, 9);
    /// assert_eq!(array.as_slice(), &[9, 9]);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign_range(iter::repeat_n(value, count));
    }

    /// Replaces the contents with the items of `values`. The prior elements are
    /// dropped, never copied; if the items do not fit, the buffer is replaced by one
    /// of exactly `values.len()` slots.
    pub fn assign_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        self.clear();
        if count > self.capacity() {
            // SAFETY: nothing is live, so nothing is moved.
            unsafe { self.buf.relocate(0, count) }
        }
        self.fill_from(values);
    }

    /// Replaces the contents with clones of `values`.
    pub fn assign_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.assign_range(values.iter().cloned());
    }

    /// Exchanges buffers and lengths with `other` without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    // Internals

    /// Doubles the capacity (minimum 1), leaving one vacant slot at `at`.
    #[cold]
    fn grow_one(&mut self, at: usize) {
        debug_assert_eq!(self.len, self.capacity());
        let new_capacity = match self.capacity() {
            0 => 1,
            capacity => match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => panic!("capacity overflow"),
            },
        };
        // SAFETY: `[0, len)` is initialized, `at <= len` and `len < new_capacity`.
        unsafe { self.buf.relocate_with_gap(self.len, new_capacity, at, 1) }
    }

    /// Writes `value` at `len` and bumps the length.
    ///
    /// # Safety
    ///
    /// `len < capacity`.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: the caller guarantees a spare slot.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Appends items from `values` while spare capacity remains. Extra items are
    /// left in the iterator.
    fn fill_from(&mut self, values: impl Iterator<Item = T>) {
        let room = self.capacity() - self.len;
        for value in values.take(room) {
            // SAFETY: at most `room` items are written.
            unsafe { self.push_unchecked(value) }
        }
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: the live elements are dropped once; `RawBuf` then frees the block.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Deep copy of the live elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        copy.fill_from(self.iter().cloned());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = values.into_iter();
        let mut array = Self::with_capacity(values.size_hint().0);
        array.extend(values);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_range(values)
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}
