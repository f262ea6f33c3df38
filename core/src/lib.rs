//! A contiguous, growable array with pointer-like cursors.
//!
//! [`GrowableArray<T>`] owns a single heap buffer and tracks how many of its slots
//! are live. Positions inside it are [`Cursor`]s: plain addresses with no
//! back-reference to the array, invalidated by any reallocation.
//!
//! ```
//! use elastic_core::{GrowableArray, growable};
//!
//! let mut array = growable![1, 2, 3];
//! array.push_back(4);
//! assert_eq!(array.capacity(), 6);
//!
//! array.erase(array.begin() + 1);
//! array.insert(array.begin(), 0);
//! assert_eq!(array, GrowableArray::from([0, 1, 3, 4]));
//! ```
//!
//! Indexing with `[]`, `front` and `back` treat a bad index as a programming error
//! and panic. [`GrowableArray::at`] is the checked alternative and returns
//! [`OutOfRange`].

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod array;
mod display;
mod error;
mod macros;
mod raw;

pub use array::GrowableArray;
pub use elastic_cursor::{ConstCursor, Cursor, CursorDisplay};
pub use error::{OutOfRange, ReserveError};


/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level, so buffer
    /// relocations show up in the test output.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
