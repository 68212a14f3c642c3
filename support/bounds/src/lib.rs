//! Half-open bound tracking shared by every slice view.
//!
//! A [`Bounds`] is an immutable `[begin, end)` window into some owner's index
//! space. It never refers to the owner itself: it only knows the two absolute
//! indices, validates relative indices against them, and translates relative
//! sub-range requests into new absolute windows.
//!
//! ```text
//! owner:    [ a | b | c | d | e ]
//!                 ^           ^
//!               begin=1     end=4          size = 3
//!
//! view:         [ 0 | 1 | 2 ]              relative index space
//! ```
//!
//! # Invariants
//!
//! - `begin < end`, so a window always covers at least one element. There is
//!   no such thing as an empty window: `Bounds::new(3, 3)` is rejected.
//! - Once constructed a window never moves. Sub-ranges produce a *new*
//!   [`Bounds`], the parent is left untouched.
//!
//! # Example
//!
//! ```
//! use slicekit_bounds::{Bounds, SliceError};
//!
//! let bounds = Bounds::new(1, 4)?;
//! assert_eq!(bounds.size(), 3);
//! assert_eq!(bounds.absolute(2)?, 3);
//!
//! // Relative sub-range [1, 3) of [1, 4) is the absolute window [2, 4).
//! let inner = bounds.sub_range(1, 3)?;
//! assert_eq!((inner.begin(), inner.end()), (2, 4));
//!
//! assert_eq!(
//!     Bounds::new(2, 2),
//!     Err(SliceError::InvalidRange { begin: 2, end: 2 })
//! );
//! # Ok::<(), SliceError>(())
//! ```

#![no_std]
#![deny(unsafe_code)]

use core::fmt;

use thiserror::Error;

/// Every way a slice operation can be rejected.
///
/// All variants are local contract violations: the caller supplied bounds or
/// an index that do not fit, and can recover by supplying different ones.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceError {
    /// `begin >= end` was supplied to a constructor.
    #[error("slice begin ({begin}) must be smaller than its end ({end})")]
    InvalidRange { begin: usize, end: usize },

    /// A container-backed slice would reach past the container.
    #[error("slice end ({end}) must not be larger than the owner's size ({size})")]
    EndExceedsOwnerSize { end: usize, size: usize },

    /// A pointer-backed slice was given a null base pointer.
    #[error("slice base pointer must not be null")]
    NullPointer,

    /// An element access at or beyond the slice's size.
    #[error("index {index} is outside of a slice of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Relative sub-slice bounds that do not fit inside the parent slice.
    #[error("sub-slice [{begin}, {end}) is out of range for a slice of size {size}")]
    SubRangeOutOfRange {
        begin: usize,
        end: usize,
        size: usize,
    },
}

pub type Result<T, E = SliceError> = core::result::Result<T, E>;

/// An immutable half-open range `[begin, end)` of absolute owner indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    begin: usize,
    end: usize,
}

static_assertions::assert_eq_size!(Bounds, [usize; 2]);

impl Bounds {
    /// Creates the window `[begin, end)`.
    ///
    /// Fails with [`SliceError::InvalidRange`] unless `begin < end`.
    #[inline]
    pub const fn new(begin: usize, end: usize) -> Result<Self> {
        if begin >= end {
            return Err(SliceError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// First absolute index inside the window.
    #[inline]
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// First absolute index past the window.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered. Never zero.
    #[inline]
    pub const fn size(&self) -> usize {
        // begin < end, cannot underflow
        self.end - self.begin
    }

    /// Whether the *absolute* index `index` lies inside the window.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.begin <= index && index < self.end
    }

    /// Rejects a relative `index` with [`SliceError::IndexOutOfRange`] unless
    /// `index < size()`.
    #[inline]
    pub const fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size() {
            return Err(SliceError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Translates a relative `index` into an absolute owner index.
    #[inline]
    pub const fn absolute(&self, index: usize) -> Result<usize> {
        if let Err(err) = self.check_index(index) {
            return Err(err);
        }
        // index < end - begin, so begin + index < end
        Ok(self.begin + index)
    }

    /// Translates the relative sub-range `[begin, end)` of this window into a
    /// new absolute window over the same owner.
    ///
    /// `end == size()` is accepted since it denotes "up to the last element",
    /// but `begin == size()` is not: a sub-range must start on an element of
    /// this window.
    ///
    /// The returned window is built with [`Bounds::new`], so a request with
    /// `end <= begin` fails with [`SliceError::InvalidRange`] after the
    /// translation.
    pub const fn sub_range(&self, begin: usize, end: usize) -> Result<Self> {
        let size = self.size();
        let out_of_range = SliceError::SubRangeOutOfRange { begin, end, size };

        if begin >= size || end > size {
            return Err(out_of_range);
        }

        let (Some(abs_begin), Some(abs_end)) =
            (self.begin.checked_add(begin), self.begin.checked_add(end))
        else {
            return Err(out_of_range);
        };

        // Unreachable after the size check above, kept for overflow safety.
        if abs_end > self.end {
            return Err(out_of_range);
        }

        Bounds::new(abs_begin, abs_end)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
