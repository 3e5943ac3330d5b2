#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut buf = Buffer::<ZeroSizedType>::new_uninit(5);
    assert_eq!(buf.size(), 5);

    let old_ptr = buf.ptr;
    buf.relocate(30, 5);
    assert_eq!(buf.size(), 30);
    assert_eq!(
        buf.ptr, old_ptr,
        "Pointer shouldn't change when relocating a ZST Buffer."
    );
}

#[test]
fn test_relocate() {
    let mut buf = Buffer::<usize>::new_uninit(4);
    for i in 0..4 {
        buf[i] = MaybeUninit::new(i * 10);
    }

    buf.relocate(8, 4);
    assert_eq!(buf.size(), 8, "Relocating should adopt the new size.");
    for i in 0..4 {
        // SAFETY: The first 4 slots were initialized before relocation and moved across.
        assert_eq!(
            unsafe { buf[i].assume_init() },
            i * 10,
            "Live slots should keep their order when relocated."
        );
    }

    buf.relocate(2, 2);
    // SAFETY: The first 2 slots are still initialized.
    assert_eq!(unsafe { (buf[0].assume_init(), buf[1].assume_init()) }, (0, 10));

    assert_panics!({
        let mut buf = Buffer::<u8>::new_uninit(2);
        buf.relocate(1, 2);
    });
}

#[test]
fn test_capacity_overflow() {
    assert_panics!(
        {
            Buffer::<u64>::new_uninit(isize::MAX as usize);
        },
        contains "Capacity overflow!"
    );
}

#[test]
fn test_slots_are_never_dropped() {
    let counter = CountedDrop::new(0);
    let mut buf = Buffer::<CountedDrop>::new_uninit(3);
    for slot in buf.iter_mut() {
        *slot = MaybeUninit::new(counter.clone());
    }

    buf.relocate(6, 3);
    assert_eq!(counter.drops(), 0, "Relocation should move values without dropping them.");

    for slot in buf.iter_mut().take(3) {
        // SAFETY: The first 3 slots were initialized above and haven't been read since.
        unsafe { slot.assume_init_drop(); }
    }
    drop(buf);
    assert_eq!(
        counter.drops(),
        3,
        "Only the explicit drops should be counted, not the Buffer's own drop."
    );
}
