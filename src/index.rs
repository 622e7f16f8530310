//! Checked indices.

use crate::{Error, Result};

/// An index that is known to be less than `LIMIT`.
///
/// A [`Bounded`] index can only be created after its value has been validated, either at compile
/// time with [`Bounded::at`] or at runtime with [`Bounded::new`]. Indexing a [`Vector`] or a
/// [`Matrix`] with it therefore never fails.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let v = vec3(10, 20, 30);
/// assert_eq!(v[Bounded::at::<2>()], 30);
///
/// let i = Bounded::<3>::new(1)?;
/// assert_eq!(v[i], 20);
/// assert!(Bounded::<3>::new(3).is_err());
/// # Ok::<(), fixed_linalg::Error>(())
/// ```
///
/// Out-of-range constant indices do not compile:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let v = vec3(10, 20, 30);
/// let _ = v[Bounded::at::<3>()];
/// ```
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bounded<const LIMIT: usize>(usize);

impl<const LIMIT: usize> Bounded<LIMIT> {
    /// Validates `index` at runtime.
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= LIMIT`.
    #[inline]
    pub fn new(index: usize) -> Result<Self> {
        if index < LIMIT {
            Ok(Self(index))
        } else {
            Err(Error::IndexOutOfBounds { index, len: LIMIT })
        }
    }

    /// Creates the index `I`, rejecting `I >= LIMIT` at compile time.
    #[inline]
    pub const fn at<const I: usize>() -> Self {
        const { assert!(I < LIMIT, "index out of bounds") };
        Self(I)
    }

    /// Returns the wrapped index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl<const LIMIT: usize> TryFrom<usize> for Bounded<LIMIT> {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl<const LIMIT: usize> From<Bounded<LIMIT>> for usize {
    fn from(index: Bounded<LIMIT>) -> usize {
        index.0
    }
}
