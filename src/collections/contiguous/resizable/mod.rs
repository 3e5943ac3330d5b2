//! A module containing [`ResizableArray`] and associtated types.
//!
//! Other included types are [`IntoIter`] for owned iteration over a ResizableArray, and the error
//! types reported by its fallible operations. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`ResizableArray`] is also re-exported under the parent module.

mod error;
mod iter;
mod resizable_array;

pub use error::*;
pub use iter::*;
pub use resizable_array::*;
