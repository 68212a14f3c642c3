use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use pretty_assertions::assert_eq;

use super::{make_full_slice, make_slice, make_slice_from, make_slice_until};
use crate::array::{RawArray, RawArrayMut};
use crate::container::ContainerSlice;
use crate::view::{SliceView, SliceViewMut};
use slicekit_bounds::SliceError;

fn collect<V: SliceView>(view: &V) -> Vec<V::Item>
where
    V::Item: Clone,
{
    view.iter().cloned().collect()
}

#[test]
fn test_make_slice_picks_capability_from_borrow() {
    let mut owner = vec![0, 1, 2, 3, 4];

    let read_only = make_slice(&owner, 1, 3).unwrap();
    assert_eq!(collect(&read_only), vec![1, 2]);

    let mut mutable = make_slice(&mut owner, 1, 3).unwrap();
    *mutable.at_mut(0).unwrap() *= 2;
    *mutable.at_mut(1).unwrap() *= 3;
    assert_eq!(owner, vec![0, 2, 6, 3, 4]);
}

#[test]
fn test_make_slice_propagates_errors() {
    let mut owner = vec![0, 1, 2, 3, 4];
    assert_eq!(
        make_slice(&owner, 2, 2).unwrap_err(),
        SliceError::InvalidRange { begin: 2, end: 2 }
    );
    assert_eq!(
        make_slice(&mut owner, 0, 6).unwrap_err(),
        SliceError::EndExceedsOwnerSize { end: 6, size: 5 }
    );
}

#[test]
fn test_make_full_slice() {
    let owner = VecDeque::from(vec!['a', 'b', 'c']);
    let slice = make_full_slice(&owner).unwrap();
    assert_eq!(slice.size(), 3);
    assert_eq!(collect(&slice), vec!['a', 'b', 'c']);

    let empty: Vec<char> = Vec::new();
    assert_eq!(
        make_full_slice(&empty).unwrap_err(),
        SliceError::InvalidRange { begin: 0, end: 0 }
    );
}

#[test]
fn test_make_slice_from() {
    let mut owner = [10, 20, 30, 40];
    let mut slice = make_slice_from(&mut owner, 2).unwrap();
    assert_eq!(slice.bounds().end(), 4);
    for value in slice.iter_mut() {
        *value += 1;
    }
    assert_eq!(owner, [10, 20, 31, 41]);

    assert_eq!(
        make_slice_from(&owner, 4).unwrap_err(),
        SliceError::InvalidRange { begin: 4, end: 4 }
    );
}

#[test]
fn test_make_slice_until() {
    let owner = vec![10, 20, 30, 40];
    let slice = make_slice_until(&owner, 2).unwrap();
    assert_eq!(slice, ContainerSlice::new(&owner, 0, 2).unwrap());
    assert_eq!(
        make_slice_until(&owner, 0).unwrap_err(),
        SliceError::InvalidRange { begin: 0, end: 0 }
    );
    assert_eq!(
        make_slice_until(&owner, 5).unwrap_err(),
        SliceError::EndExceedsOwnerSize { end: 5, size: 4 }
    );
}

#[test]
fn test_pointer_owners() {
    let mut owner = [0u8, 1, 2, 3, 4];

    // SAFETY: every slice below ends at or before 5, the length of `owner`.
    let raw = unsafe { RawArray::new(owner.as_ptr()) };
    assert_eq!(make_slice(raw, 3, 5).unwrap().as_slice(), &[3, 4]);
    assert_eq!(make_slice_until(raw, 2).unwrap().as_slice(), &[0, 1]);
    assert_eq!(
        make_slice(raw, 4, 4).unwrap_err(),
        SliceError::InvalidRange { begin: 4, end: 4 }
    );

    // SAFETY: as above, and `owner` is not accessed while the handle lives.
    let raw = unsafe { RawArrayMut::new(owner.as_mut_ptr()) };
    let mut slice = make_slice_until(raw, 3).unwrap();
    *slice.at_mut(2).unwrap() = 9;
    assert_eq!(owner, [0, 1, 9, 3, 4]);
}

#[test]
fn test_null_raw_array() {
    // SAFETY: null is rejected before any access.
    let raw = unsafe { RawArray::<u32>::new(core::ptr::null()) };
    assert_eq!(make_slice(raw, 0, 1).unwrap_err(), SliceError::NullPointer);
    assert_eq!(make_slice_until(raw, 0).unwrap_err(), SliceError::NullPointer);
}
