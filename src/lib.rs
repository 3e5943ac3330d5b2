//! This crate is my attempt at writing a resizable array from scratch, the same kind of container
//! as [`Vec`], but with all of the mechanics out in the open.
//!
//! # Purpose
//! This repo / crate is a learning project.
//! [`ResizableArray`](collections::contiguous::ResizableArray) exposes the things a standard
//! library normally hides: when capacity grows and by how much, how elements get shifted around
//! during insertion and removal, and what it means for a copy to own its own storage.
//!
//! # Method
//! The container sits on top of a [`Buffer`](collections::contiguous::Buffer), a block of
//! uninitialized slots that is allocated and released by hand through [`std::alloc`]. Growing is
//! done by allocating a new Buffer twice the size, moving every live element over and then
//! releasing the old one. Each Buffer has exactly one owner, so memory is released exactly once,
//! whichever way the owner goes out of scope.
//!
//! # Error Handling
//! Everything that the caller can reasonably get wrong is reported through a [`Result`] with a
//! small, strongly typed error: an index out of bounds, a value that can't be found, an aggregate
//! of an empty collection or an initial capacity of zero. These all implement
//! [`Error`](std::error::Error) and can be funnelled into a single
//! [`ArrayError`](collections::contiguous::ArrayError) with `?`.
//!
//! Conditions that can't reasonably be handled, such as a capacity overflow or an allocation
//! failure, panic or abort instead. Nobody wants to handle a capacity overflow every time they push
//! into an array.
//!
//! # Dependencies
//! The crate uses `std`, but not [`Vec`]. It depends on `derive_more` for some error boilerplate
//! and on the `log` facade to report storage events (growth and resets) at debug level. No logger
//! is installed by the crate itself.
#![feature(extend_one)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
