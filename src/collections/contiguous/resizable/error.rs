use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A search didn't find any element equal to the value it was given.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Element not found!")]
pub struct NotFound;

/// An aggregate such as [`max`](super::ResizableArray::max) was requested from a collection with no
/// elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// A ResizableArray was requested with a capacity of zero.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Initial capacity must be at least 1!")]
pub struct InvalidCapacity;

/// Any of the errors that a [`ResizableArray`](super::ResizableArray) can report, for callers that
/// would rather propagate a single type with `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    IndexOutOfBounds(IndexOutOfBounds),
    NotFound(NotFound),
    EmptyCollection(EmptyCollection),
    InvalidCapacity(InvalidCapacity),
}
