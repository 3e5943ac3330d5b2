//! A module containing [`Buffer`], the raw storage handle behind
//! [`ResizableArray`](super::ResizableArray).
//!
//! A Buffer knows nothing about which of its slots are initialized. That bookkeeping is left to the
//! owning collection, which is also responsible for dropping any live values before the Buffer
//! itself is dropped or relocated.

mod buffer;
mod tests;

pub use buffer::*;
