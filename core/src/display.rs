//! Diagnostic formatting for [`GrowableArray`].
//!
//! `Debug` renders the live elements like a slice, which keeps assertion diffs
//! readable. `Display` renders the whole buffer:
//!
//! ```text
//! { 1 2 3 | _ _ _ }, size=3, capacity=6
//! ```
//!
//! Live elements come before the `|`; every reserved slot after it prints as `_`
//! since it holds no value. This is meant for humans and is never parsed back.

use core::fmt;

use crate::GrowableArray;

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for value in self {
            write!(f, "{value} ")?;
        }
        if self.len() < self.capacity() {
            f.write_str("| ")?;
            for _ in self.len()..self.capacity() {
                f.write_str("_ ")?;
            }
        }
        write!(f, "}}, size={}, capacity={}", self.len(), self.capacity())
    }
}
