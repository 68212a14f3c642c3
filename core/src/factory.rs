//! Constructors that pick the slice kind from the owner's type.
//!
//! | Owner              | Slice                                             |
//! |--------------------|---------------------------------------------------|
//! | `&C`               | [`ContainerSlice`]                                |
//! | `&mut C`           | [`ContainerSliceMut`]                             |
//! | [`RawArray`]       | [`PtrSlice`]                                      |
//! | [`RawArrayMut`]    | [`PtrSliceMut`]                                   |
//!
//! Borrowing the owner mutably is what makes the slice mutable.
//!
//! ```
//! use slicekit_core::{SliceError, SliceView, SliceViewMut, make_slice};
//!
//! let mut owner = vec![0, 1, 2, 3, 4];
//! let mut slice = make_slice(&mut owner, 1, 3)?;
//! *slice.at_mut(0)? *= 2;
//! *slice.at_mut(1)? *= 3;
//! assert_eq!(owner, [0, 2, 6, 3, 4]);
//! # Ok::<(), SliceError>(())
//! ```

use slicekit_bounds::Result;

use crate::array::{PtrSlice, PtrSliceMut, RawArray, RawArrayMut};
use crate::container::{ContainerSlice, ContainerSliceMut};
use crate::owner::{Container, ContainerMut};
use crate::view::SliceView;

/// Anything a slice can be made of.
pub trait SliceOwner: Sized {
    type Slice: SliceView;

    fn into_slice(self, begin: usize, end: usize) -> Result<Self::Slice>;
}

/// An owner that knows its own size, which pointers do not.
pub trait SizedOwner: SliceOwner {
    fn owner_size(&self) -> usize;
}

impl<'a, C: Container + ?Sized> SliceOwner for &'a C {
    type Slice = ContainerSlice<'a, C>;

    fn into_slice(self, begin: usize, end: usize) -> Result<ContainerSlice<'a, C>> {
        ContainerSlice::new(self, begin, end)
    }
}

impl<C: Container + ?Sized> SizedOwner for &C {
    fn owner_size(&self) -> usize {
        (**self).size()
    }
}

impl<'a, C: ContainerMut + ?Sized> SliceOwner for &'a mut C {
    type Slice = ContainerSliceMut<'a, C>;

    fn into_slice(self, begin: usize, end: usize) -> Result<ContainerSliceMut<'a, C>> {
        ContainerSliceMut::new(self, begin, end)
    }
}

impl<C: ContainerMut + ?Sized> SizedOwner for &mut C {
    fn owner_size(&self) -> usize {
        (**self).size()
    }
}

impl<'a, T> SliceOwner for RawArray<'a, T> {
    type Slice = PtrSlice<'a, T>;

    fn into_slice(self, begin: usize, end: usize) -> Result<PtrSlice<'a, T>> {
        // SAFETY: the caller of `RawArray::new` vouched for every `end` a
        // slice of this handle is built with.
        unsafe { PtrSlice::new(self.as_ptr(), begin, end) }
    }
}

impl<'a, T> SliceOwner for RawArrayMut<'a, T> {
    type Slice = PtrSliceMut<'a, T>;

    fn into_slice(self, begin: usize, end: usize) -> Result<PtrSliceMut<'a, T>> {
        // SAFETY: as above, see `RawArrayMut::new`.
        unsafe { PtrSliceMut::new(self.as_mut_ptr(), begin, end) }
    }
}

/// Slice of `owner` covering `[begin, end)`.
#[inline]
pub fn make_slice<O: SliceOwner>(owner: O, begin: usize, end: usize) -> Result<O::Slice> {
    owner.into_slice(begin, end)
}

/// Slice covering the whole owner.
///
/// Fails with [`SliceError::InvalidRange`](crate::SliceError::InvalidRange)
/// for an empty owner. Raw arrays have no size and are rejected at compile
/// time:
///
/// ```compile_fail
/// use slicekit_core::{RawArray, make_full_slice};
///
/// let owner = [1, 2, 3];
/// let raw = unsafe { RawArray::new(owner.as_ptr()) };
/// let _ = make_full_slice(raw);
/// ```
#[inline]
pub fn make_full_slice<O: SizedOwner>(owner: O) -> Result<O::Slice> {
    let size = owner.owner_size();
    owner.into_slice(0, size)
}

/// Slice from `begin` up to the owner's end.
#[inline]
pub fn make_slice_from<O: SizedOwner>(owner: O, begin: usize) -> Result<O::Slice> {
    let size = owner.owner_size();
    owner.into_slice(begin, size)
}

/// Slice from the owner's start up to `end`.
///
/// For a [`RawArray`] the `end` is trusted exactly as in [`RawArray::new`].
#[inline]
pub fn make_slice_until<O: SliceOwner>(owner: O, end: usize) -> Result<O::Slice> {
    owner.into_slice(0, end)
}

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;
