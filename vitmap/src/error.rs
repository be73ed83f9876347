use crate::decoding::*;

use thiserror::Error;

use std::io;

///
/// The largest number of elements a single container can hold (the largest count the file format can describe)
///
pub const MAX_ELEMENTS: usize = i32::MAX as usize;

///
/// Errors that can occur while editing, loading or saving a vitmap
///
#[derive(Debug, Error)]
pub enum VitmapError {
    /// A container could not grow (its previous contents are unchanged)
    #[error("could not allocate space for a new element")]
    AllocationFailure,

    /// A handle did not refer to an element of the container it was used with
    #[error("the element does not belong to this container")]
    NotFound,

    /// An index was outside the range of valid indexes for a container
    #[error("index {index} is out of range (length {len})")]
    OutOfRange { index: i64, len: usize },

    /// A file could not be opened, read or written
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The data being decoded was not a valid vitmap or animation
    #[error("corrupt vitmap data: {0}")]
    FormatCorruption(#[from] DecoderError),
}

///
/// Makes space for one more item at the end of a list, leaving the list unchanged if that fails
///
#[inline]
pub (crate) fn reserve_one<T>(list: &mut Vec<T>) -> Result<(), VitmapError> {
    if list.len() >= MAX_ELEMENTS {
        return Err(VitmapError::AllocationFailure);
    }

    list.try_reserve(1).map_err(|_| VitmapError::AllocationFailure)
}

///
/// Releases the storage for a list that has shrunk well below its capacity
///
#[inline]
pub (crate) fn release_unused<T>(list: &mut Vec<T>) {
    if list.len() < list.capacity() / 2 {
        list.shrink_to_fit();
    }
}
