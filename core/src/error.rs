use core::alloc::Layout;

use thiserror::Error;

/// Returned by [`GrowableArray::at`](crate::GrowableArray::at) when the index is
/// not below the current length. The array is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Failure to obtain a buffer of the requested capacity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReserveError {
    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed { layout: Layout },
}
