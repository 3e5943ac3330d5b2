use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use log::debug;

use super::{EmptyCollection, IndexOutOfBounds, InvalidCapacity, NotFound};
use crate::collections::contiguous::Buffer;
use crate::collections::traits::Ranked;
use crate::util::error::{CapacityOverflow, ResultExtension};

/// The capacity used by [`ResizableArray::new`] and restored by [`ResizableArray::reset`].
pub const DEFAULT_CAP: usize = 5;

/// The multiplier applied to the capacity whenever a ResizableArray runs out of room.
pub const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous collection which owns a single [`Buffer`] and doubles it whenever an
/// insertion would exceed the current capacity.
///
/// Unlike [`Vec`], the mechanics are all visible: insertions and removals shift elements one slot
/// at a time, growth always doubles, and the capacity never shrinks unless the ResizableArray is
/// [`reset`](ResizableArray::reset). Every ResizableArray has a capacity of at least 1.
///
/// Cloning produces a deep copy with its own Buffer, of the same capacity as the original, so two
/// instances never observe each other's mutations.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ResizableArray.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second ResizableArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `push_front` | `O(n)` |
/// | `insert_at` | `O(n-i)` |
/// | `pop_back` | `O(1)` |
/// | `pop_front` | `O(n)` |
/// | `remove_at` | `O(n-i)` |
/// | `reset` | `O(n)`** |
/// | `find` / `find_all` | `O(n)` |
/// | `sorted` | `O(n^2)` |
/// | `concat` | `O(n+m)` |
/// | `reversed` | `O(n)` |
/// | `max` / `min` | `O(n)` |
///
/// \* If the ResizableArray doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`. Because the capacity doubles each time, this averages out to `O(1)` per push.
///
/// \** Only because each live element has to be dropped.
pub struct ResizableArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> ResizableArray<T> {
    /// Creates a new, empty ResizableArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::{ResizableArray, DEFAULT_CAP};
    /// let arr: ResizableArray<u8> = ResizableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> ResizableArray<T> {
        ResizableArray::allocate(DEFAULT_CAP)
    }

    /// Creates a new, empty ResizableArray with capacity exactly equal to the provided value,
    /// allowing values to be added without reallocation.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `cap` is zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::{InvalidCapacity, ResizableArray};
    /// let mut arr: ResizableArray<u8> = ResizableArray::with_cap(3).unwrap();
    /// arr.extend([1, 2, 3]);
    /// assert_eq!(arr.cap(), 3);
    ///
    /// assert_eq!(ResizableArray::<u8>::with_cap(0).unwrap_err(), InvalidCapacity);
    /// ```
    pub fn with_cap(cap: usize) -> Result<ResizableArray<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity);
        }

        debug!("allocating ResizableArray with capacity {cap}");
        Ok(ResizableArray::allocate(cap))
    }

    /// Returns the number of elements in the ResizableArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ResizableArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::new();
    /// assert!(arr.is_empty());
    /// arr.push_back(1);
    /// assert!(!arr.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the ResizableArray can hold before it next has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Inserts the provided value at the front of the ResizableArray, shifting every element one
    /// slot towards the back.
    ///
    /// # Panics
    /// Panics if the memory layout of the ResizableArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::new();
    /// arr.push_front(10);
    /// arr.push_front(20);
    /// arr.push_back(30);
    /// assert_eq!(&*arr, &[20, 10, 30]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.shift_in(0, value);
    }

    /// Pushes the provided value onto the end of the ResizableArray, growing it if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the ResizableArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::new();
    /// for i in 0..=5 {
    ///     arr.push_back(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Pushes the provided value onto the end of the ResizableArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`. Using this method on a full
    /// ResizableArray is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that there is a free slot at len, leading to the
        // pointer write being in bounds of the allocation.
        unsafe { self.buf.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Inserts the provided value at the given index, growing and shifting elements towards the
    /// back as necessary. An `index` equal to the length appends the value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the ResizableArray untouched.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::from([10, 20, 30]);
    /// arr.insert_at(1, 99).unwrap();
    /// arr.insert_at(4, 40).unwrap();
    /// assert_eq!(&*arr, &[10, 99, 20, 30, 40]);
    /// assert!(arr.insert_at(6, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        self.shift_in(index, value);
        Ok(())
    }

    /// Removes the first element, shifting every remaining element one slot towards the front.
    /// Returns [`None`] and does nothing if the ResizableArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::from([10, 20, 30]);
    /// assert_eq!(arr.pop_front(), Some(10));
    /// assert_eq!(&*arr, &[20, 30]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.shift_out(0))
        }
    }

    /// Pops the last value off the end of the ResizableArray, without moving any other element.
    /// Returns [`None`] and does nothing if the ResizableArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::from([0, 1, 2]);
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop_back(), Some(i));
    /// }
    /// assert_eq!(arr.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading so the slot is no longer considered live.
            self.len -= 1;

            // SAFETY: The slot at the old len - 1 was initialized. It is now beyond len, so this
            // read moves the value out without it ever being observed or dropped again.
            Some(unsafe { self.buf[self.len].assume_init_read() })
        }
    }

    /// Removes and returns the element at the provided index, shifting all following elements one
    /// slot towards the front to fill the gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr: ResizableArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove_at(1), Ok('e'));
    /// assert_eq!(arr.remove_at(4), Ok(' '));
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.shift_out(index))
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all slots < len are initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at the provided index, allowing it to be
    /// modified in place.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let mut arr = ResizableArray::from([1, 2, 3]);
    /// *arr.at_mut(1).unwrap() *= 10;
    /// assert_eq!(arr.at(1), Ok(&20));
    /// assert!(arr.at_mut(3).is_err());
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all slots < len are initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Returns a reference to the element at the provided index without any bounds checking.
    /// Prefer [`at`](ResizableArray::at) or indexing, which both check the index.
    ///
    /// # Safety
    /// `index` must be less than [`len`](ResizableArray::len). Any other index is undefined
    /// behavior, even if it is within the capacity.
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees index < len, so the slot is in bounds and initialized.
        unsafe { self.buf.ptr.add(index).as_ref().assume_init_ref() }
    }

    /// Returns a mutable reference to the element at the provided index without any bounds
    /// checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](ResizableArray::len). Any other index is undefined
    /// behavior, even if it is within the capacity.
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees index < len, so the slot is in bounds and initialized. The
        // &mut self receiver guarantees that the reference is unique.
        unsafe {
            let mut slot = self.buf.ptr.add(index);
            slot.as_mut().assume_init_mut()
        }
    }

    /// Drops every element and replaces the Buffer with a fresh one of [`DEFAULT_CAP`] slots,
    /// leaving the ResizableArray in the same state as one returned by
    /// [`new`](ResizableArray::new).
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::{ResizableArray, DEFAULT_CAP};
    /// let mut arr: ResizableArray<_> = (0..20).collect();
    /// arr.reset();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), DEFAULT_CAP);
    /// ```
    pub fn reset(&mut self) {
        debug!("resetting ResizableArray of {} elements to capacity {DEFAULT_CAP}", self.len);
        self.drop_live();
        self.buf = Buffer::new_uninit(DEFAULT_CAP);
    }

    /// Returns a new ResizableArray with the same elements in reverse order. The result has the
    /// same capacity as self, which is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let arr = ResizableArray::from([1, 2, 3, 4]);
    /// assert_eq!(&*arr.reversed(), &[4, 3, 2, 1]);
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn reversed(&self) -> ResizableArray<T>
    where
        T: Clone,
    {
        let mut reversed = ResizableArray::allocate(self.cap());

        for value in self.iter().rev() {
            // SAFETY: reversed has the same capacity as self, which holds at least len elements.
            unsafe { reversed.push_unchecked(value.clone()); }
        }

        reversed
    }

    /// Returns a new ResizableArray containing all elements of self followed by all elements of
    /// `other`, in order. Neither input is modified.
    ///
    /// # Panics
    /// Panics if the memory layout of the result would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let a = ResizableArray::from([1, 2, 3]);
    /// let b = ResizableArray::from([4, 5, 6]);
    /// assert_eq!(&*a.concat(&b), &[1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn concat(&self, other: &ResizableArray<T>) -> ResizableArray<T>
    where
        T: Clone,
    {
        let mut merged = self.clone();

        for value in other.iter() {
            merged.push_back(value.clone());
        }

        merged
    }

    /// Returns a sorted copy of the ResizableArray, in non-decreasing order. Self is left
    /// unchanged. See [`sorted_by`](ResizableArray::sorted_by) for types that aren't [`Ord`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let arr = ResizableArray::from([5, 3, 8, 1, 4]);
    /// assert_eq!(&*arr.sorted(), &[1, 3, 4, 5, 8]);
    /// assert_eq!(&*arr, &[5, 3, 8, 1, 4]);
    /// ```
    pub fn sorted(&self) -> ResizableArray<T>
    where
        T: Clone + Ord,
    {
        self.sorted_by(T::cmp)
    }

    /// Returns a copy of the ResizableArray sorted with the provided comparison function, using a
    /// bubble sort. Equal elements aren't guaranteed to keep their relative order.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let arr = ResizableArray::from([2.5_f64, -1.0, 0.5]);
    /// assert_eq!(&*arr.sorted_by(f64::total_cmp), &[-1.0, 0.5, 2.5]);
    /// ```
    pub fn sorted_by<F>(&self, mut compare: F) -> ResizableArray<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = self.clone();
        let len = sorted.len;

        for pass in 0..len.saturating_sub(1) {
            // The largest pass elements have already bubbled to the end.
            for j in 0..len - pass - 1 {
                if compare(&sorted[j], &sorted[j + 1]).is_gt() {
                    sorted.swap(j, j + 1);
                }
            }
        }

        sorted
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::{NotFound, ResizableArray};
    /// let arr = ResizableArray::from([10, 99, 30, 99]);
    /// assert_eq!(arr.find(&99), Ok(1));
    /// assert_eq!(arr.find(&77), Err(NotFound));
    /// ```
    pub fn find(&self, value: &T) -> Result<usize, NotFound>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value).ok_or(NotFound)
    }

    /// Returns the indices of every element equal to `value`, in ascending order. The result is
    /// empty if nothing matches.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let arr = ResizableArray::from([10, 20, 10, 30, 10]);
    /// assert_eq!(&*arr.find_all(&10), &[0, 2, 4]);
    /// assert!(arr.find_all(&999).is_empty());
    /// ```
    pub fn find_all(&self, value: &T) -> ResizableArray<usize>
    where
        T: PartialEq,
    {
        let mut indices = ResizableArray::new();

        for (index, item) in self.iter().enumerate() {
            if item == value {
                indices.push_back(index);
            }
        }

        indices
    }

    /// Returns the greatest element according to its [`Ranked`] implementation. Numbers compare by
    /// value, while strings compare by their length in characters. If several elements are equally
    /// great, the first of them is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the ResizableArray has no elements.
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let words = ResizableArray::from(["hi", "hello", "hey", "howdy"]);
    /// assert_eq!(words.max(), Ok(&"hello"));
    /// assert_eq!(words.min(), Ok(&"hi"));
    /// ```
    pub fn max(&self) -> Result<&T, EmptyCollection>
    where
        T: Ranked,
    {
        self.max_by(T::rank)
    }

    /// Returns the least element according to its [`Ranked`] implementation. If several elements
    /// are equally small, the first of them is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the ResizableArray has no elements.
    pub fn min(&self) -> Result<&T, EmptyCollection>
    where
        T: Ranked,
    {
        self.min_by(T::rank)
    }

    /// Returns the first element that no later element is greater than, using the provided
    /// comparison function.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the ResizableArray has no elements.
    pub fn max_by<F>(&self, mut compare: F) -> Result<&T, EmptyCollection>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (first, rest) = self.split_first().ok_or(EmptyCollection)?;

        Ok(rest.iter().fold(first, |best, item| {
            if compare(item, best).is_gt() { item } else { best }
        }))
    }

    /// Returns the first element that no later element is less than, using the provided
    /// comparison function.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the ResizableArray has no elements.
    pub fn min_by<F>(&self, mut compare: F) -> Result<&T, EmptyCollection>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (first, rest) = self.split_first().ok_or(EmptyCollection)?;

        Ok(rest.iter().fold(first, |best, item| {
            if compare(item, best).is_lt() { item } else { best }
        }))
    }

    /// Replaces the contents of self with a deep copy of `source`, including its capacity. This is
    /// the same as [`Clone::clone_from`].
    ///
    /// # Examples
    /// ```
    /// # use resizable_array::collections::contiguous::ResizableArray;
    /// let source = ResizableArray::from([1, 2, 3]);
    /// let mut arr = ResizableArray::from([9; 12]);
    /// arr.assign(&source);
    /// assert_eq!(arr, source);
    /// assert_eq!(arr.cap(), source.cap());
    /// ```
    pub fn assign(&mut self, source: &ResizableArray<T>)
    where
        T: Clone,
    {
        self.clone_from(source);
    }

    /// Creates an empty ResizableArray with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn allocate(cap: usize) -> ResizableArray<T> {
        ResizableArray {
            buf: Buffer::new_uninit(cap),
            len: 0,
        }
    }

    /// Grows the internal Buffer to allow for the insertion of additional elements. The new
    /// capacity is double the old one, or 1 if the old one was 0. All live elements are moved to
    /// the new Buffer in order before the old one is released.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or the memory layout of the ResizableArray would have a
    /// size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = cmp::max(
            old_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            1,
        );

        debug!(
            "growing ResizableArray from {old_cap} to {new_cap} slots, moving {} elements",
            self.len
        );
        self.buf.relocate(new_cap, self.len);
    }

    /// Places `value` at `index`, which must be <= len, shifting the elements in `index..len` one
    /// slot towards the back.
    fn shift_in(&mut self, index: usize, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        let slots = &mut *self.buf;
        slots[self.len] = MaybeUninit::new(value);

        // Walk from the back so that no element is overwritten before it has been moved. The new
        // value starts at len and is swapped down into place.
        for i in (index + 1..=self.len).rev() {
            slots.swap(i, i - 1);
        }

        self.len += 1;
    }

    /// Moves the element at `index`, which must be < len, out of the ResizableArray, shifting the
    /// elements after it one slot towards the front.
    fn shift_out(&mut self, index: usize) -> T {
        let slots = &mut *self.buf;

        // The removed value travels to the last live slot as everything after it moves forward.
        for i in index..self.len - 1 {
            slots.swap(i, i + 1);
        }

        self.len -= 1;
        // SAFETY: The slot at the new len holds the value that was at index, which was initialized.
        // It is now beyond len, so it won't be read or dropped again.
        unsafe { slots[self.len].assume_init_read() }
    }

    /// Drops every live element in place and sets len to 0. The Buffer itself is left alone.
    fn drop_live(&mut self) {
        let len = self.len;
        // Zero len first so a panicking destructor can't lead to a double drop.
        self.len = 0;

        // SAFETY: All slots below the old len are initialized and, with len zeroed, can't be
        // observed again. The pointer is properly aligned and non-null.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Checks that the provided index refers to a live element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Extend<T> for ResizableArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }

    fn extend_one(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> FromIterator<T> for ResizableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = ResizableArray::allocate(cmp::max(iter.size_hint().0, 1));

        for item in iter {
            arr.push_back(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for ResizableArray<T> {
    fn from(value: [T; N]) -> Self {
        let mut arr = ResizableArray::allocate(cmp::max(N, 1));

        for item in value {
            // SAFETY: arr was created with room for at least N elements.
            unsafe { arr.push_unchecked(item); }
        }

        arr
    }
}

impl<T> Default for ResizableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ResizableArray<T> {
    fn drop(&mut self) {
        self.drop_live();
        // Implicitly drop self.buf, which deallocates the owned memory without touching the slots.
    }
}

impl<T> Deref for ResizableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The ResizableArray is valid as a slice for len values, which are all initialized.
        // The pointer is nonnull, properly aligned and the range entirely contained within the
        // Buffer. The borrow checker enforces that self isn't mutated due to this function taking
        // a &self.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *const T for all values < len.
                self.buf.ptr.as_ptr().cast_const().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for ResizableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the &mut self receiver guarantees exclusive access.
        unsafe {
            slice::from_raw_parts_mut(
                self.buf.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for ResizableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for ResizableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for ResizableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for ResizableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for ResizableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = ResizableArray::allocate(self.cap());

        for value in self.iter() {
            // SAFETY: copy has the same capacity as self, which holds at least len elements.
            unsafe { copy.push_unchecked(value.clone()); }
        }

        copy
    }

    fn clone_from(&mut self, source: &Self) {
        // The borrow checker rules out source and self being the same instance, so it's always
        // safe to clear self before reading from source.
        self.drop_live();

        if self.cap() != source.cap() {
            self.buf = Buffer::new_uninit(source.cap());
        }

        for value in source.iter() {
            // SAFETY: self now has the same capacity as source, which holds at least len elements.
            unsafe { self.push_unchecked(value.clone()); }
        }
    }
}

impl<T: PartialEq> PartialEq for ResizableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ResizableArray<T> {}

impl<T: Hash> Hash for ResizableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ResizableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizableArray")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Renders the elements as `[e1, e2, ..., en]`, or `[]` when empty.
impl<T: Display> Display for ResizableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
