//! Contiguous collection types. Namely [`ResizableArray`], a growable array, and [`Buffer`], the
//! fixed-size block of storage it grows by replacing.

pub mod buffer;
pub mod resizable;

#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use resizable::*;
