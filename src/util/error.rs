use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index was outside of the range accepted by the operation it was passed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was provided.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The memory layout of a requested capacity would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the [`Display`] message of the contained
    /// error. Used for conditions the caller can't reasonably recover from, such as a capacity
    /// overflow.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
