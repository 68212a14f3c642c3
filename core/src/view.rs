//! The capability set shared by every slice kind.
//!
//! [`SliceView`] is what a read-only slice can do. [`SliceViewMut`] adds
//! element mutation and is only implemented by slices created from a mutable
//! owner, so trying to write through a read-only slice is a type error rather
//! than a runtime check.

use core::fmt;

use slicekit_bounds::{Bounds, Result};

pub trait SliceView {
    type Item;

    /// Ascending iterator over the visible elements.
    type Iter<'s>: ExactSizeIterator<Item = &'s Self::Item>
    where
        Self: 's;

    /// What [`SliceView::sub_slice`] returns. Always read-only.
    type SubSlice<'s>: SliceView<Item = Self::Item>
    where
        Self: 's;

    /// The absolute window this slice covers in its owner.
    fn bounds(&self) -> Bounds;

    /// Number of visible elements. Never zero.
    #[inline]
    fn size(&self) -> usize {
        self.bounds().size()
    }

    /// Always `false`: an empty slice cannot be constructed.
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    /// The element at relative `index`, or
    /// [`SliceError::IndexOutOfRange`](crate::SliceError::IndexOutOfRange).
    fn at(&self, index: usize) -> Result<&Self::Item>;

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        self.at(index).ok()
    }

    #[inline]
    fn first(&self) -> Option<&Self::Item> {
        self.get(0)
    }

    #[inline]
    fn last(&self) -> Option<&Self::Item> {
        self.get(self.size() - 1)
    }

    fn iter(&self) -> Self::Iter<'_>;

    /// A read-only slice of the relative range `[begin, end)` of this slice,
    /// over the same owner.
    ///
    /// `end == size()` is accepted, `begin == size()` is not.
    fn sub_slice(&self, begin: usize, end: usize) -> Result<Self::SubSlice<'_>>;
}

pub trait SliceViewMut: SliceView {
    type IterMut<'s>: ExactSizeIterator<Item = &'s mut Self::Item>
    where
        Self: 's;

    type SubSliceMut<'s>: SliceViewMut<Item = Self::Item>
    where
        Self: 's;

    /// Mutable access to the element at relative `index`.
    ///
    /// The returned handle can rewrite the element but never widen the slice.
    fn at_mut(&mut self, index: usize) -> Result<&mut Self::Item>;

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item> {
        self.at_mut(index).ok()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Like [`SliceView::sub_slice`] but keeps write access, reborrowing this
    /// slice for as long as the sub-slice lives.
    fn sub_slice_mut(&mut self, begin: usize, end: usize) -> Result<Self::SubSliceMut<'_>>;
}

/// Element-wise equality of two slices of possibly different kinds.
pub(crate) fn elements_eq<A, B>(a: &A, b: &B) -> bool
where
    A: SliceView + ?Sized,
    B: SliceView + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    a.size() == b.size() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

pub(crate) fn debug_elements<V>(view: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    V: SliceView + ?Sized,
    V::Item: fmt::Debug,
{
    f.debug_list().entries(view.iter()).finish()
}
