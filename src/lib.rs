//! Slicekit - bounds-checked views into data you do not own
//!
//! # Overview
//!
//! A slice is a lightweight window `[begin, end)` over a contiguous run of
//! elements held by some other owner. It lets you hand part of a container to
//! a function without copying it and without passing offsets around, while
//! every access is checked against the window.
//!
//! # Quick Start
//!
//! ```
//! use slicekit::prelude::*;
//!
//! let mut owner = vec![0, 1, 2, 3, 4];
//!
//! let mut one_two = make_slice(&mut owner, 1, 3)?;
//! assert_eq!(one_two.size(), 2);
//! assert_eq!((*one_two.at(0)?, *one_two.at(1)?), (1, 2));
//!
//! // Writes go straight to the owner.
//! *one_two.at_mut(0)? *= 2;
//! *one_two.at_mut(1)? *= 3;
//! assert_eq!(owner, [0, 2, 6, 3, 4]);
//!
//! // Iteration visits the window in owner order.
//! let three_four = make_slice(&owner, 3, 5)?;
//! assert_eq!(three_four.iter().copied().collect::<Vec<_>>(), [3, 4]);
//!
//! // Bounds are validated up front.
//! assert_eq!(
//!     make_slice(&owner, 2, 2).unwrap_err(),
//!     SliceError::InvalidRange { begin: 2, end: 2 }
//! );
//! assert_eq!(
//!     make_slice(&owner, 0, 6).unwrap_err(),
//!     SliceError::EndExceedsOwnerSize { end: 6, size: 5 }
//! );
//! # Ok::<(), SliceError>(())
//! ```
//!
//! # Sub-slices
//!
//! A sub-slice is expressed in its parent's own index space and covers the
//! same owner:
//!
//! ```
//! use slicekit::prelude::*;
//!
//! let owner = vec![0, 1, 2, 3, 4];
//! let slice = make_slice(&owner, 1, 4)?;
//! assert_eq!(slice.sub_slice(1, 3)?, make_slice(&owner, 2, 4)?);
//!
//! // `end` may equal the parent's size, `begin` may not.
//! assert!(slice.sub_slice(2, 3).is_ok());
//! assert!(slice.sub_slice(3, 3).is_err());
//! # Ok::<(), SliceError>(())
//! ```
//!
//! # Read-only vs Mutable
//!
//! Whether a slice can write is decided by how the owner was borrowed, and
//! is part of the slice's type. Writing through a read-only slice does not
//! compile:
//!
//! ```compile_fail
//! use slicekit::prelude::*;
//!
//! let owner = vec![0, 1, 2];
//! let mut slice = make_slice(&owner, 0, 2).unwrap();
//! *slice.at_mut(0).unwrap() = 7;
//! ```
//!
//! and neither does getting a mutable sub-slice out of one:
//!
//! ```compile_fail
//! use slicekit::prelude::*;
//!
//! let mut owner = vec![0, 1, 2];
//! let slice = make_slice(&mut owner, 0, 3).unwrap();
//! let read_only = slice.into_read_only();
//! let _ = read_only.sub_slice_mut(0, 1);
//! ```
//!
//! # Raw Arrays
//!
//! [`PtrSlice`] and [`PtrSliceMut`] work from a bare pointer. They check for
//! null and for `begin < end`, but cannot know how long the array really is,
//! so creating one is `unsafe`:
//!
//! ```
//! use slicekit::prelude::*;
//!
//! let owner = [0u8, 1, 2, 3, 4];
//! // SAFETY: `owner` holds 5 elements and outlives `raw`.
//! let raw = unsafe { RawArray::new(owner.as_ptr()) };
//! let slice = make_slice_until(raw, 2)?;
//! assert_eq!(slice.as_slice(), &[0, 1]);
//! # Ok::<(), SliceError>(())
//! ```
//!
//! # Features
//!
//! - `std`: enables `std` support in the dependencies.
//! - `smallvec`: lets [`smallvec::SmallVec`](https://docs.rs/smallvec) act as
//!   an owner.

#![no_std]

// Re-export the slice kinds and their capabilities
pub use slicekit_core::{
    Container, ContainerMut, ContainerSlice, ContainerSliceMut, Iter, IterMut, PtrSlice,
    PtrSliceMut, RawArray, RawArrayMut, SliceView, SliceViewMut,
};

// Re-export the factories
pub use slicekit_core::{
    SizedOwner, SliceOwner, make_full_slice, make_slice, make_slice_from, make_slice_until,
};

// Re-export bounds and errors
pub use slicekit_core::{Bounds, Result, SliceError};

pub use slicekit_core::{array, container, factory, owner, view};

/// Everything needed to create and use slices.
pub mod prelude {
    pub use crate::{
        RawArray, RawArrayMut, SliceError, SliceView, SliceViewMut, make_full_slice, make_slice,
        make_slice_from, make_slice_until,
    };
}
