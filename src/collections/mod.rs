//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the mechanics that a standard library normally hides:
//! allocation, capacity growth, shifting elements around and who owns what after a copy.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "traits")]
pub mod traits;
