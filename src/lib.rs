//! Elastic - a contiguous growable array with pointer-like cursors
//!
//! # Overview
//!
//! [`GrowableArray<T>`] manages one heap buffer, its live length and its
//! capacity. It offers the classic sequence-container surface:
//!
//! - Construction from literal lists, ranges and sizes
//! - `push_back` / `pop_back` with doubling growth
//! - Cursor-positioned `insert` / `erase`, single and ranged
//! - `assign`, `reserve`, `shrink_to_fit`, `clear`
//! - Checked (`at`) and unchecked (`[]`) element access
//!
//! # Quick Start
//!
//! ```
//! use elastic::{GrowableArray, growable};
//!
//! let mut array = growable![1, 2, 3];
//! assert_eq!((array.len(), array.capacity()), (3, 3));
//!
//! // Full: the capacity doubles.
//! array.push_back(4);
//! assert_eq!((array.len(), array.capacity()), (4, 6));
//!
//! array.erase(array.begin() + 1);
//! array.insert(array.begin(), 0);
//! assert_eq!(array.as_slice(), &[0, 1, 3, 4]);
//!
//! // Clearing keeps the buffer.
//! array.clear();
//! assert_eq!(array.capacity(), 6);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`ConstCursor`] are addresses into the buffer, not borrows of
//! the array. That lets a cursor be computed from the array and handed back to a
//! mutating call in the same expression. The price is that dereferencing one is
//! `unsafe`; [`GrowableArray::get_at`] is the checked alternative.
//!
//! ```
//! use elastic::growable;
//!
//! let array = growable!['a', 'b', 'c'];
//! let mut cursor = array.cbegin();
//! cursor += 2;
//! assert_eq!(array.get_at(cursor), Some(&'c'));
//! assert_eq!(array.get_at(array.cend()), None);
//! ```
//!
//! # Errors
//!
//! Only [`GrowableArray::at`] reports a recoverable error ([`OutOfRange`]), and
//! [`GrowableArray::try_reserve`] reports allocation failure ([`ReserveError`]).
//! Everything else treats misuse as a bug and panics.

pub use elastic_core::{
    ConstCursor, Cursor, CursorDisplay, GrowableArray, OutOfRange, ReserveError, growable,
};
