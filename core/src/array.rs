//! Slices over raw arrays, identified only by a base pointer.
//!
//! # The bounds guarantee is weaker here
//!
//! A pointer carries no length. The constructors can check that the pointer is
//! not null and that `begin < end`, but **they cannot check that `end` lies
//! inside the real allocation**. Every access is still checked against the
//! slice's own window, so a correctly constructed slice never strays outside
//! of it; a slice constructed with an `end` past the real array reads or
//! writes memory it does not own. That obligation is on the caller, which is
//! why every way into this module goes through an `unsafe` function.
//!
//! Prefer [`ContainerSlice`](crate::ContainerSlice) whenever the owner is a
//! Rust container.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use slicekit_bounds::{Bounds, Result, SliceError};

use crate::view::{SliceView, SliceViewMut, debug_elements, elements_eq};

fn pointer_bounds<T>(ptr: *mut T, begin: usize, end: usize) -> Result<(NonNull<T>, Bounds)> {
    let Some(ptr) = NonNull::new(ptr) else {
        tracing::trace!(begin, end, "Rejected pointer slice: null base pointer");
        return Err(SliceError::NullPointer);
    };
    let bounds = Bounds::new(begin, end).inspect_err(|err| {
        tracing::trace!(begin, end, %err, "Rejected pointer slice");
    })?;
    Ok((ptr, bounds))
}

fn sub_bounds(bounds: Bounds, begin: usize, end: usize) -> Result<Bounds> {
    bounds.sub_range(begin, end).inspect_err(|err| {
        tracing::trace!(%bounds, begin, end, %err, "Rejected pointer sub-slice");
    })
}

/// A raw base pointer used as a slice owner.
///
/// Wrapping the pointer once lets the factory functions treat raw arrays like
/// any other owner: the caller's promise about the allocation is made here,
/// in [`RawArray::new`], instead of at every slice.
pub struct RawArray<'a, T> {
    ptr: *const T,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> RawArray<'a, T> {
    /// # Safety
    ///
    /// For every slice later built from this handle, `ptr` (if non-null) must
    /// be valid for reads of `end` consecutive, initialized `T`s for `'a`, and
    /// those elements must not be mutated during `'a`.
    #[inline]
    pub const unsafe fn new(ptr: *const T) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for RawArray<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawArray<'_, T> {}

impl<T> fmt::Debug for RawArray<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawArray").field(&self.ptr).finish()
    }
}

/// Mutable counterpart of [`RawArray`].
pub struct RawArrayMut<'a, T> {
    ptr: *mut T,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> RawArrayMut<'a, T> {
    /// # Safety
    ///
    /// For every slice later built from this handle, `ptr` (if non-null) must
    /// be valid for reads and writes of `end` consecutive, initialized `T`s
    /// for `'a`, and nothing else may access those elements during `'a`.
    #[inline]
    pub const unsafe fn new(ptr: *mut T) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn as_mut_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> fmt::Debug for RawArrayMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawArrayMut").field(&self.ptr).finish()
    }
}

/// A read-only window `[begin, end)` over a raw array.
///
/// See the [module docs](self) for what is and is not checked.
pub struct PtrSlice<'a, T> {
    ptr: NonNull<T>,
    bounds: Bounds,
    _marker: PhantomData<&'a T>,
}

static_assertions::assert_eq_size!(PtrSlice<'static, u64>, [usize; 3]);
static_assertions::assert_eq_size!(RawArray<'static, u64>, usize);

impl<'a, T> PtrSlice<'a, T> {
    /// Fails with [`SliceError::NullPointer`] if `ptr` is null, whatever the
    /// bounds, then with [`SliceError::InvalidRange`] unless `begin < end`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `end` consecutive, initialized `T`s
    /// for `'a`, and those elements must not be mutated during `'a`. This is
    /// **not** checked.
    pub unsafe fn new(ptr: *const T, begin: usize, end: usize) -> Result<Self> {
        let (ptr, bounds) = pointer_bounds(ptr.cast_mut(), begin, end)?;
        Ok(Self {
            ptr,
            bounds,
            _marker: PhantomData,
        })
    }

    /// The window as a native slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: the caller of `new` vouched that `ptr` is valid for `end`
        // elements during `'a`, and `begin + size == end`.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.bounds.size()) }
    }

    /// Pointer to the first element of the window.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        // SAFETY: `begin < end` and the allocation covers `end` elements.
        unsafe { self.ptr.as_ptr().add(self.bounds.begin()) }
    }
}

impl<T> Clone for PtrSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PtrSlice<'_, T> {}

impl<'a, T> SliceView for PtrSlice<'a, T> {
    type Item = T;
    type Iter<'s>
        = slice::Iter<'s, T>
    where
        Self: 's;
    type SubSlice<'s>
        = PtrSlice<'a, T>
    where
        Self: 's;

    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn at(&self, index: usize) -> Result<&T> {
        let absolute = self.bounds.absolute(index)?;
        // SAFETY: `absolute < end`, which the caller of `new` vouched for.
        Ok(unsafe { &*self.ptr.as_ptr().add(absolute) })
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn sub_slice(&self, begin: usize, end: usize) -> Result<PtrSlice<'a, T>> {
        Ok(PtrSlice {
            ptr: self.ptr,
            bounds: sub_bounds(self.bounds, begin, end)?,
            _marker: PhantomData,
        })
    }
}

impl<'a, T> IntoIterator for PtrSlice<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'s, T> IntoIterator for &'s PtrSlice<'_, T> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> slice::Iter<'s, T> {
        self.iter()
    }
}

impl<T, R> PartialEq<R> for PtrSlice<'_, T>
where
    R: SliceView,
    T: PartialEq<R::Item>,
{
    fn eq(&self, other: &R) -> bool {
        elements_eq(self, other)
    }
}

impl<T: fmt::Debug> fmt::Debug for PtrSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

/// A mutable window `[begin, end)` over a raw array.
///
/// See the [module docs](self) for what is and is not checked.
pub struct PtrSliceMut<'a, T> {
    ptr: NonNull<T>,
    bounds: Bounds,
    _marker: PhantomData<&'a mut T>,
}

static_assertions::assert_eq_size!(PtrSliceMut<'static, u64>, [usize; 3]);

impl<'a, T> PtrSliceMut<'a, T> {
    /// Same validation as [`PtrSlice::new`].
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `end` consecutive,
    /// initialized `T`s for `'a`, and nothing else may access those elements
    /// during `'a`. This is **not** checked.
    pub unsafe fn new(ptr: *mut T, begin: usize, end: usize) -> Result<Self> {
        let (ptr, bounds) = pointer_bounds(ptr, begin, end)?;
        Ok(Self {
            ptr,
            bounds,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: see `PtrSlice::as_slice`; `&self` rules out writers.
        unsafe { slice::from_raw_parts(self.window_ptr(), self.bounds.size()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `PtrSlice::as_slice`; `&mut self` makes access exclusive.
        unsafe { slice::from_raw_parts_mut(self.window_ptr(), self.bounds.size()) }
    }

    /// The window as a native slice borrowing the array for the full `'a`.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        // SAFETY: `self` is consumed, so the returned slice is the only access.
        unsafe { slice::from_raw_parts_mut(self.window_ptr(), self.bounds.size()) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.window_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.window_ptr()
    }

    pub fn as_read_only(&self) -> PtrSlice<'_, T> {
        PtrSlice {
            ptr: self.ptr,
            bounds: self.bounds,
            _marker: PhantomData,
        }
    }

    pub fn into_read_only(self) -> PtrSlice<'a, T> {
        PtrSlice {
            ptr: self.ptr,
            bounds: self.bounds,
            _marker: PhantomData,
        }
    }

    /// Like [`SliceViewMut::sub_slice_mut`] but consumes `self`.
    pub fn into_sub_slice(self, begin: usize, end: usize) -> Result<PtrSliceMut<'a, T>> {
        Ok(PtrSliceMut {
            ptr: self.ptr,
            bounds: sub_bounds(self.bounds, begin, end)?,
            _marker: PhantomData,
        })
    }

    #[inline]
    fn window_ptr(&self) -> *mut T {
        // SAFETY: `begin < end` and the allocation covers `end` elements.
        unsafe { self.ptr.as_ptr().add(self.bounds.begin()) }
    }
}

impl<T> SliceView for PtrSliceMut<'_, T> {
    type Item = T;
    type Iter<'s>
        = slice::Iter<'s, T>
    where
        Self: 's;
    type SubSlice<'s>
        = PtrSlice<'s, T>
    where
        Self: 's;

    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn at(&self, index: usize) -> Result<&T> {
        let absolute = self.bounds.absolute(index)?;
        // SAFETY: `absolute < end`, which the caller of `new` vouched for.
        Ok(unsafe { &*self.ptr.as_ptr().add(absolute) })
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn sub_slice(&self, begin: usize, end: usize) -> Result<PtrSlice<'_, T>> {
        Ok(PtrSlice {
            ptr: self.ptr,
            bounds: sub_bounds(self.bounds, begin, end)?,
            _marker: PhantomData,
        })
    }
}

impl<T> SliceViewMut for PtrSliceMut<'_, T> {
    type IterMut<'s>
        = slice::IterMut<'s, T>
    where
        Self: 's;
    type SubSliceMut<'s>
        = PtrSliceMut<'s, T>
    where
        Self: 's;

    fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let absolute = self.bounds.absolute(index)?;
        // SAFETY: `absolute < end`, and `&mut self` makes the access exclusive.
        Ok(unsafe { &mut *self.ptr.as_ptr().add(absolute) })
    }

    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn sub_slice_mut(&mut self, begin: usize, end: usize) -> Result<PtrSliceMut<'_, T>> {
        Ok(PtrSliceMut {
            ptr: self.ptr,
            bounds: sub_bounds(self.bounds, begin, end)?,
            _marker: PhantomData,
        })
    }
}

impl<'a, T> IntoIterator for PtrSliceMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.into_mut_slice().iter_mut()
    }
}

impl<'s, T> IntoIterator for &'s PtrSliceMut<'_, T> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> slice::Iter<'s, T> {
        self.iter()
    }
}

impl<'s, T> IntoIterator for &'s mut PtrSliceMut<'_, T> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    fn into_iter(self) -> slice::IterMut<'s, T> {
        self.iter_mut()
    }
}

impl<T, R> PartialEq<R> for PtrSliceMut<'_, T>
where
    R: SliceView,
    T: PartialEq<R::Item>,
{
    fn eq(&self, other: &R) -> bool {
        elements_eq(self, other)
    }
}

impl<T: fmt::Debug> fmt::Debug for PtrSliceMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

static_assertions::assert_not_impl_any!(PtrSlice<'static, u8>: Send, Sync);
static_assertions::assert_not_impl_any!(PtrSliceMut<'static, u8>: Send, Sync);

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
