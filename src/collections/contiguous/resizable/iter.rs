use std::fmt::{self, Debug, Formatter};
use std::iter::{FusedIterator, TrustedLen};
use std::mem::ManuallyDrop;
use std::ptr;

use super::ResizableArray;
use crate::collections::contiguous::Buffer;

impl<T> IntoIterator for ResizableArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let arr = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: arr is never dropped, so ownership of the Buffer (and the len initialized
            // values in it) moves into the iterator without being duplicated.
            buf: unsafe { ptr::read(&arr.buf) },
            start: 0,
            end: arr.len,
        }
    }
}

/// An owned iterator over the elements of a [`ResizableArray`]. See
/// [`ResizableArray::into_iter`].
///
/// Elements that haven't been yielded when the iterator is dropped are dropped along with it.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The slots in start..end are initialized and haven't been yielded yet.
        unsafe {
            std::slice::from_raw_parts(
                self.buf.ptr.add(self.start).as_ptr().cast_const().cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Every slot in start..end is initialized and hasn't been moved out yet.
            unsafe { self.buf[i].assume_init_drop(); }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is initialized. Incrementing start next means that it is
            // never read again, so the value is effectively moved out of the Buffer.
            let value = unsafe { self.buf[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the decremented end is initialized and now outside of the
            // remaining range, so it won't be read again.
            Some(unsafe { self.buf[self.end].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// SAFETY: IntoIter::size_hint returns the exact length of the iterator.
unsafe impl<T> TrustedLen for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ResizableArray<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ResizableArray<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
