use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{CapacityOverflow, ResultExtension};

/// A fixed number of possibly uninitialized slots for values of type `T`, allocated contiguously in
/// the global allocator and owned exclusively by this handle.
///
/// Dropping a Buffer deallocates its memory exactly once but never drops any of the slots, which
/// are all [`MaybeUninit<T>`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots moved during relocation.
///
/// | Method | Complexity |
/// |-|-|
/// | `new_uninit` | `O(1)` |
/// | `size` | `O(1)` |
/// | `relocate` | `O(n)` |
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a new Buffer with `size` uninitialized slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::new_uninit(5);
    /// assert_eq!(buf.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Buffer<T> {
        let layout = Buffer::<T>::make_layout(size);

        Buffer {
            ptr: Buffer::<T>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the Buffer.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Replaces this Buffer with a freshly allocated one of `new_size` slots, moving the first
    /// `live` slots across in order before the old allocation is released.
    ///
    /// The new allocation is made before the old one is touched, so if allocation fails the
    /// existing contents are left exactly as they were.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`], or if `live` exceeds either the old or the new size.
    pub(crate) fn relocate(&mut self, new_size: usize, live: usize) {
        assert!(
            live <= self.size && live <= new_size,
            "Can't move {live} slots from a Buffer of {} into one of {new_size}!", self.size
        );

        let new_buf = Buffer::<T>::new_uninit(new_size);

        // SAFETY: Both pointers are valid for `live` slots, which was checked above, and properly
        // aligned. The two allocations are distinct so they can't overlap. For zero-sized types
        // this copies nothing.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().cast_const(), new_buf.ptr.as_ptr(), live);
        }

        // The old Buffer is dropped here, releasing its allocation. Its slots are MaybeUninit, so
        // the values that were just moved out aren't dropped along with it.
        *self = new_buf;
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size`
    /// slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(size)
            .map_err(|_| CapacityOverflow)
            .throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Buffer::<T>::make_layout(self.size);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size slots. MaybeUninit<T> doesn't need to be initialized to be referenced.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the &mut self receiver guarantees exclusive access.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it is safe to send when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Buffer<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("size", &self.size)
            .finish()
    }
}
