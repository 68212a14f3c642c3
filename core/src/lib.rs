//! Bounds-checked, non-owning slices over containers and raw arrays.
//!
//! A slice is a window `[begin, end)` into an owner that lives somewhere
//! else. Creating one copies nothing and allocates nothing; every access is
//! checked against the window before it reaches the owner.
//!
//! - [`ContainerSlice`] / [`ContainerSliceMut`] watch a borrowed
//!   [`Container`] (a `Vec`, array, boxed slice, `VecDeque`, ...).
//! - [`PtrSlice`] / [`PtrSliceMut`] watch a raw array through its base
//!   pointer. Their construction is `unsafe`: see [`array`] for the one check
//!   they cannot make.
//! - [`make_slice`] and friends pick the right kind from the owner.
//!
//! Read-only and mutable slices are different types: only the latter
//! implement [`SliceViewMut`], and a read-only slice never hands out a mutable
//! one.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod array;
pub mod container;
pub mod factory;
pub mod owner;
pub mod view;

#[cfg(test)]
mod test_support;

pub use array::{PtrSlice, PtrSliceMut, RawArray, RawArrayMut};
pub use container::{ContainerSlice, ContainerSliceMut, Iter, IterMut};
pub use factory::{
    SizedOwner, SliceOwner, make_full_slice, make_slice, make_slice_from, make_slice_until,
};
pub use owner::{Container, ContainerMut};
pub use slicekit_bounds::{Bounds, Result, SliceError};
pub use view::{SliceView, SliceViewMut};
