use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A type with no size, so collections of it never allocate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value that increments a shared counter every time one of its clones is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    /// Creates a new counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Returns the number of drops counted so far.
    pub fn drops(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
