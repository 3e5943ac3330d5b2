//! Traits shared between collection types. Currently this is only [`Ranked`], the ordering used to
//! pick the greatest and least elements of a collection.

mod rank;
mod tests;

pub use rank::*;
