//! Slices over a borrowed [`Container`].
//!
//! A container-backed slice validates its window against the owner's size when
//! it is created and re-validates every access against that window. The owner
//! stays borrowed for the slice's whole life, so it cannot be resized (or
//! dropped) while a slice watches it.

use core::fmt;
use core::iter::FusedIterator;

use slicekit_bounds::{Bounds, Result, SliceError};

use crate::owner::{Container, ContainerMut};
use crate::view::{SliceView, SliceViewMut, debug_elements, elements_eq};

/// Validates `[begin, end)` against an owner holding `size` elements.
fn owner_bounds(size: usize, begin: usize, end: usize) -> Result<Bounds> {
    let bounds = Bounds::new(begin, end).inspect_err(|err| {
        tracing::trace!(begin, end, size, %err, "Rejected container slice");
    })?;
    if end > size {
        let err = SliceError::EndExceedsOwnerSize { end, size };
        tracing::trace!(begin, end, size, %err, "Rejected container slice");
        return Err(err);
    }
    Ok(bounds)
}

fn sub_bounds(bounds: Bounds, begin: usize, end: usize) -> Result<Bounds> {
    bounds.sub_range(begin, end).inspect_err(|err| {
        tracing::trace!(%bounds, begin, end, %err, "Rejected sub-slice");
    })
}

/// The owner answered `None` for an index inside the validated window.
#[cold]
fn missing(bounds: Bounds, index: usize) -> SliceError {
    SliceError::IndexOutOfRange {
        index,
        size: bounds.size(),
    }
}

/// A read-only window `[begin, end)` over a borrowed container.
///
/// # Example
///
/// ```
/// use slicekit_core::{ContainerSlice, SliceError, SliceView};
///
/// let owner = vec![0, 1, 2, 3, 4];
/// let slice = ContainerSlice::new(&owner, 3, 5)?;
/// assert_eq!(slice.iter().copied().collect::<Vec<_>>(), [3, 4]);
/// assert_eq!(
///     ContainerSlice::new(&owner, 0, 6).unwrap_err(),
///     SliceError::EndExceedsOwnerSize { end: 6, size: 5 }
/// );
/// # Ok::<(), SliceError>(())
/// ```
pub struct ContainerSlice<'a, C: Container + ?Sized> {
    owner: &'a C,
    bounds: Bounds,
}

static_assertions::assert_eq_size!(ContainerSlice<'static, alloc::vec::Vec<u8>>, [usize; 3]);

impl<'a, C: Container + ?Sized> ContainerSlice<'a, C> {
    /// Fails with [`SliceError::InvalidRange`] unless `begin < end`, then with
    /// [`SliceError::EndExceedsOwnerSize`] if `end > owner.size()`.
    pub fn new(owner: &'a C, begin: usize, end: usize) -> Result<Self> {
        let bounds = owner_bounds(owner.size(), begin, end)?;
        Ok(Self { owner, bounds })
    }

    /// The whole owner, including elements outside of this slice.
    #[inline]
    pub fn owner(&self) -> &'a C {
        self.owner
    }
}

impl<C: Container + ?Sized> Clone for ContainerSlice<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Container + ?Sized> Copy for ContainerSlice<'_, C> {}

impl<'a, C: Container + ?Sized> SliceView for ContainerSlice<'a, C> {
    type Item = C::Item;
    type Iter<'s>
        = Iter<'s, C>
    where
        Self: 's;
    type SubSlice<'s>
        = ContainerSlice<'a, C>
    where
        Self: 's;

    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn at(&self, index: usize) -> Result<&C::Item> {
        let absolute = self.bounds.absolute(index)?;
        self.owner
            .element(absolute)
            .ok_or_else(|| missing(self.bounds, index))
    }

    fn iter(&self) -> Iter<'_, C> {
        Iter::new(self.owner, self.bounds)
    }

    fn sub_slice(&self, begin: usize, end: usize) -> Result<ContainerSlice<'a, C>> {
        Ok(ContainerSlice {
            owner: self.owner,
            bounds: sub_bounds(self.bounds, begin, end)?,
        })
    }
}

impl<'a, C: Container + ?Sized> IntoIterator for ContainerSlice<'a, C> {
    type Item = &'a C::Item;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Iter<'a, C> {
        Iter::new(self.owner, self.bounds)
    }
}

impl<'s, C: Container + ?Sized> IntoIterator for &'s ContainerSlice<'_, C> {
    type Item = &'s C::Item;
    type IntoIter = Iter<'s, C>;

    fn into_iter(self) -> Iter<'s, C> {
        self.iter()
    }
}

impl<C, R> PartialEq<R> for ContainerSlice<'_, C>
where
    C: Container + ?Sized,
    R: SliceView,
    C::Item: PartialEq<R::Item>,
{
    fn eq(&self, other: &R) -> bool {
        elements_eq(self, other)
    }
}

impl<C> fmt::Debug for ContainerSlice<'_, C>
where
    C: Container + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

/// A mutable window `[begin, end)` over an exclusively borrowed container.
///
/// Elements can be rewritten through [`SliceViewMut`], but the owner's
/// structure cannot change: there is no way to insert or remove through a
/// slice.
pub struct ContainerSliceMut<'a, C: ContainerMut + ?Sized> {
    owner: &'a mut C,
    bounds: Bounds,
}

static_assertions::assert_eq_size!(ContainerSliceMut<'static, alloc::vec::Vec<u8>>, [usize; 3]);

impl<'a, C: ContainerMut + ?Sized> ContainerSliceMut<'a, C> {
    /// Same validation as [`ContainerSlice::new`].
    pub fn new(owner: &'a mut C, begin: usize, end: usize) -> Result<Self> {
        let bounds = owner_bounds(owner.size(), begin, end)?;
        Ok(Self { owner, bounds })
    }

    #[inline]
    pub fn owner(&self) -> &C {
        &*self.owner
    }

    /// Read-only view of the same window, borrowing this slice.
    pub fn as_read_only(&self) -> ContainerSlice<'_, C> {
        ContainerSlice {
            owner: &*self.owner,
            bounds: self.bounds,
        }
    }

    /// Gives up write access for good, keeping the owner's lifetime.
    pub fn into_read_only(self) -> ContainerSlice<'a, C> {
        ContainerSlice {
            owner: self.owner,
            bounds: self.bounds,
        }
    }

    /// Like [`SliceViewMut::sub_slice_mut`] but consumes `self`, so the result
    /// borrows the owner for the full `'a`.
    pub fn into_sub_slice(self, begin: usize, end: usize) -> Result<ContainerSliceMut<'a, C>> {
        let bounds = sub_bounds(self.bounds, begin, end)?;
        Ok(ContainerSliceMut {
            owner: self.owner,
            bounds,
        })
    }
}

impl<C: ContainerMut + ?Sized> SliceView for ContainerSliceMut<'_, C> {
    type Item = C::Item;
    type Iter<'s>
        = Iter<'s, C>
    where
        Self: 's;
    type SubSlice<'s>
        = ContainerSlice<'s, C>
    where
        Self: 's;

    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn at(&self, index: usize) -> Result<&C::Item> {
        let absolute = self.bounds.absolute(index)?;
        self.owner
            .element(absolute)
            .ok_or_else(|| missing(self.bounds, index))
    }

    fn iter(&self) -> Iter<'_, C> {
        Iter::new(&*self.owner, self.bounds)
    }

    fn sub_slice(&self, begin: usize, end: usize) -> Result<ContainerSlice<'_, C>> {
        Ok(ContainerSlice {
            owner: &*self.owner,
            bounds: sub_bounds(self.bounds, begin, end)?,
        })
    }
}

impl<C: ContainerMut + ?Sized> SliceViewMut for ContainerSliceMut<'_, C> {
    type IterMut<'s>
        = IterMut<'s, C>
    where
        Self: 's;
    type SubSliceMut<'s>
        = ContainerSliceMut<'s, C>
    where
        Self: 's;

    fn at_mut(&mut self, index: usize) -> Result<&mut C::Item> {
        let absolute = self.bounds.absolute(index)?;
        let bounds = self.bounds;
        self.owner
            .element_mut(absolute)
            .ok_or_else(|| missing(bounds, index))
    }

    fn iter_mut(&mut self) -> IterMut<'_, C> {
        IterMut::new(&mut *self.owner, self.bounds)
    }

    fn sub_slice_mut(&mut self, begin: usize, end: usize) -> Result<ContainerSliceMut<'_, C>> {
        let bounds = sub_bounds(self.bounds, begin, end)?;
        Ok(ContainerSliceMut {
            owner: &mut *self.owner,
            bounds,
        })
    }
}

impl<'a, C: ContainerMut + ?Sized> IntoIterator for ContainerSliceMut<'a, C> {
    type Item = &'a mut C::Item;
    type IntoIter = IterMut<'a, C>;

    fn into_iter(self) -> IterMut<'a, C> {
        IterMut::new(self.owner, self.bounds)
    }
}

impl<'s, C: ContainerMut + ?Sized> IntoIterator for &'s ContainerSliceMut<'_, C> {
    type Item = &'s C::Item;
    type IntoIter = Iter<'s, C>;

    fn into_iter(self) -> Iter<'s, C> {
        self.iter()
    }
}

impl<'s, C: ContainerMut + ?Sized> IntoIterator for &'s mut ContainerSliceMut<'_, C> {
    type Item = &'s mut C::Item;
    type IntoIter = IterMut<'s, C>;

    fn into_iter(self) -> IterMut<'s, C> {
        self.iter_mut()
    }
}

impl<C, R> PartialEq<R> for ContainerSliceMut<'_, C>
where
    C: ContainerMut + ?Sized,
    R: SliceView,
    C::Item: PartialEq<R::Item>,
{
    fn eq(&self, other: &R) -> bool {
        elements_eq(self, other)
    }
}

impl<C> fmt::Debug for ContainerSliceMut<'_, C>
where
    C: ContainerMut + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

/// Iterator over a container slice, running through the owner's own iterator
/// from the slice's first absolute index.
pub struct Iter<'a, C: Container + ?Sized + 'a> {
    inner: C::Iter<'a>,
    remaining: usize,
}

impl<'a, C: Container + ?Sized> Iter<'a, C> {
    fn new(owner: &'a C, bounds: Bounds) -> Self {
        Self {
            inner: owner.iter_from(bounds.begin()),
            remaining: bounds.size(),
        }
    }
}

impl<'a, C: Container + ?Sized> Iterator for Iter<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<&'a C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: Container + ?Sized> ExactSizeIterator for Iter<'_, C> {}

impl<C: Container + ?Sized> FusedIterator for Iter<'_, C> {}

impl<'a, C> Clone for Iter<'a, C>
where
    C: Container + ?Sized,
    C::Iter<'a>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

/// Mutable counterpart of [`Iter`].
pub struct IterMut<'a, C: ContainerMut + ?Sized + 'a> {
    inner: C::IterMut<'a>,
    remaining: usize,
}

impl<'a, C: ContainerMut + ?Sized> IterMut<'a, C> {
    fn new(owner: &'a mut C, bounds: Bounds) -> Self {
        Self {
            inner: owner.iter_mut_from(bounds.begin()),
            remaining: bounds.size(),
        }
    }
}

impl<'a, C: ContainerMut + ?Sized> Iterator for IterMut<'a, C> {
    type Item = &'a mut C::Item;

    fn next(&mut self) -> Option<&'a mut C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: ContainerMut + ?Sized> ExactSizeIterator for IterMut<'_, C> {}

impl<C: ContainerMut + ?Sized> FusedIterator for IterMut<'_, C> {}

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;
