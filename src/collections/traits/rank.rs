use std::borrow::Cow;
use std::cmp::Ordering;

/// An ordering that decides which of two values is "bigger" when looking for the greatest or least
/// element of a collection, as with [`ResizableArray::max`] and [`ResizableArray::min`].
///
/// This is deliberately separate from [`Ord`]. Numbers rank by value, which matches their usual
/// ordering, but text ranks by its length in characters rather than lexicographically. New element
/// types can opt in by implementing this trait, without the collection needing to know about them.
///
/// # Examples
/// ```
/// # use resizable_array::collections::traits::Ranked;
/// # use std::cmp::Ordering;
/// assert_eq!(3_u8.rank(&7), Ordering::Less);
/// assert_eq!("howdy".rank("hi"), Ordering::Greater);
/// assert_eq!("abc".rank("xyz"), Ordering::Equal);
/// ```
///
/// [`ResizableArray::max`]: crate::collections::contiguous::ResizableArray::max
/// [`ResizableArray::min`]: crate::collections::contiguous::ResizableArray::min
pub trait Ranked {
    /// Compares the rank of self to the rank of `other`.
    fn rank(&self, other: &Self) -> Ordering;
}

macro_rules! rank_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ranked for $t {
                fn rank(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

rank_by_value!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, bool,
);

macro_rules! rank_float {
    ($($t:ty),* $(,)?) => {
        $(
            /// Floats rank by [`total_cmp`](f64::total_cmp), so NaN values rank above infinity
            /// rather than being incomparable.
            impl Ranked for $t {
                fn rank(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

rank_float!(f32, f64);

/// Strings rank by the number of characters they contain, not the number of bytes.
impl Ranked for str {
    fn rank(&self, other: &Self) -> Ordering {
        self.chars().count().cmp(&other.chars().count())
    }
}

impl Ranked for String {
    fn rank(&self, other: &Self) -> Ordering {
        self.as_str().rank(other.as_str())
    }
}

impl Ranked for Box<str> {
    fn rank(&self, other: &Self) -> Ordering {
        (**self).rank(&**other)
    }
}

impl Ranked for Cow<'_, str> {
    fn rank(&self, other: &Self) -> Ordering {
        (**self).rank(&**other)
    }
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn rank(&self, other: &Self) -> Ordering {
        (**self).rank(&**other)
    }
}
