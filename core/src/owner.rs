//! Capabilities an owner needs before a container-backed slice can watch it.
//!
//! A container only has to offer O(1) indexed access, a logical size, and
//! forward iteration starting at any position. Contiguity is *not* required:
//! [`VecDeque`] is a ring buffer and works just as well as [`Vec`].

use alloc::boxed::Box;
use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;
use core::slice;

/// Read access to an indexable owner.
pub trait Container {
    type Item;

    /// Forward iterator over the owner's elements, in index order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Logical number of elements currently held.
    fn size(&self) -> usize;

    /// Bounds-checked element lookup.
    fn element(&self, index: usize) -> Option<&Self::Item>;

    /// Iterates from `start` to the last element. A `start` at or past the
    /// end yields nothing.
    fn iter_from(&self, start: usize) -> Self::Iter<'_>;
}

/// Element-level write access to an indexable owner.
///
/// Nothing here can change the owner's size: slices over a mutable owner may
/// rewrite elements, never insert or remove them.
pub trait ContainerMut: Container {
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    fn element_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    fn iter_mut_from(&mut self, start: usize) -> Self::IterMut<'_>;
}

impl<T> Container for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        self.get(start..).unwrap_or_default().iter()
    }
}

impl<T> ContainerMut for [T] {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    fn iter_mut_from(&mut self, start: usize) -> Self::IterMut<'_> {
        self.get_mut(start..).unwrap_or_default().iter_mut()
    }
}

/// Implements [`Container`] and [`ContainerMut`] for owners that deref to a
/// contiguous `[T]`.
macro_rules! impl_container_via_slice {
    ($([$($generics:tt)*] $owner:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Container for $owner {
                type Item = T;
                type Iter<'a>
                    = slice::Iter<'a, T>
                where
                    Self: 'a;

                #[inline]
                fn size(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn element(&self, index: usize) -> Option<&T> {
                    self.get(index)
                }

                #[inline]
                fn iter_from(&self, start: usize) -> Self::Iter<'_> {
                    <[T] as Container>::iter_from(self, start)
                }
            }

            impl<$($generics)*> ContainerMut for $owner {
                type IterMut<'a>
                    = slice::IterMut<'a, T>
                where
                    Self: 'a;

                #[inline]
                fn element_mut(&mut self, index: usize) -> Option<&mut T> {
                    self.get_mut(index)
                }

                #[inline]
                fn iter_mut_from(&mut self, start: usize) -> Self::IterMut<'_> {
                    <[T] as ContainerMut>::iter_mut_from(self, start)
                }
            }
        )+
    };
}

impl_container_via_slice! {
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] Box<[T]>,
}

#[cfg(feature = "smallvec")]
impl_container_via_slice! {
    [T, const N: usize] smallvec::SmallVec<[T; N]>,
}

impl<T> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        self.range(start.min(self.len())..)
    }
}

impl<T> ContainerMut for VecDeque<T> {
    type IterMut<'a>
        = vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn iter_mut_from(&mut self, start: usize) -> Self::IterMut<'_> {
        let start = start.min(self.len());
        self.range_mut(start..)
    }
}

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;
