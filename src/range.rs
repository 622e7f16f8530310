//! Index ranges with a fixed start, end and step.
//!
//! [`StaticRange`] describes its sequence entirely through const generic parameters. It is
//! zero-sized, computes its length at compile time, and doubles as a selector for
//! [`Vector::slice`] and [`Matrix::slice`].
//!
//! [`StepRange`] is its runtime counterpart for arbitrary scalar types.
//!
//! [`Vector::slice`]: crate::Vector::slice
//! [`Matrix::slice`]: crate::Matrix::slice

use std::{collections::LinkedList, iter::FusedIterator};

use crate::{error::check_size, Error, Primitive, Result, Scalar, Vector};

/// A compile-time arithmetic sequence `START, START + STEP, START + 2 * STEP, ...`.
///
/// The sequence stops strictly before `END` in the direction of `STEP`. Its length is
/// `ceil(|END - START| / |STEP|)`, or 0 if `END` lies behind `START`.
///
/// A `STEP` of zero is rejected at compile time:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let _ = StaticRange::<0, 4, 0>::new();
/// ```
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let evens = StaticRange::<0, 7, 2>::new();
/// assert_eq!(StaticRange::<0, 7, 2>::LEN, 4);
/// assert_eq!(evens.iter().collect::<Vec<_>>(), [0, 2, 4, 6]);
///
/// // Ranges can be iterated again and again.
/// assert_eq!(evens.into_iter().sum::<isize>(), 12);
/// assert_eq!(evens.into_iter().sum::<isize>(), 12);
///
/// let down = StaticRange::<3, -3, -2>::new();
/// assert_eq!(down.iter().collect::<Vec<_>>(), [3, 1, -1]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticRange<const START: isize, const END: isize, const STEP: isize = 1>;

impl<const START: isize, const END: isize, const STEP: isize> StaticRange<START, END, STEP> {
    /// The number of indices in the sequence.
    pub const LEN: usize = {
        assert!(STEP != 0, "StaticRange step must not be zero");
        if STEP > 0 {
            if END > START {
                ((END - START + STEP - 1) / STEP) as usize
            } else {
                0
            }
        } else if END < START {
            ((START - END - STEP - 1) / -STEP) as usize
        } else {
            0
        }
    };

    /// Creates the range value.
    #[inline]
    pub const fn new() -> Self {
        const { assert!(Self::LEN <= isize::MAX as usize) };
        Self
    }

    /// Returns the number of indices in the sequence.
    #[inline]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` if the sequence contains no indices.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Returns an iterator over the indices of this range.
    #[inline]
    pub fn iter(&self) -> StaticRangeIter {
        StaticRangeIter {
            start: START,
            step: STEP,
            front: 0,
            back: Self::LEN,
        }
    }
}

impl<const START: isize, const END: isize, const STEP: isize> IntoIterator
    for StaticRange<START, END, STEP>
{
    type Item = isize;
    type IntoIter = StaticRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const START: isize, const END: isize, const STEP: isize> IntoIterator
    for &StaticRange<START, END, STEP>
{
    type Item = isize;
    type IntoIter = StaticRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the indices of a [`StaticRange`].
///
/// Elements are derived from their position (`start + i * step`), not accumulated.
#[derive(Debug, Clone)]
pub struct StaticRangeIter {
    start: isize,
    step: isize,
    front: usize,
    back: usize,
}

impl StaticRangeIter {
    fn at(&self, i: usize) -> isize {
        self.start + i as isize * self.step
    }
}

impl Iterator for StaticRangeIter {
    type Item = isize;

    fn next(&mut self) -> Option<isize> {
        if self.front == self.back {
            return None;
        }
        let value = self.at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for StaticRangeIter {
    fn next_back(&mut self) -> Option<isize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for StaticRangeIter {}
impl FusedIterator for StaticRangeIter {}

/// Compile-time index selection used by the slicing accessors.
pub trait Selector: Copy {
    /// Number of selected indices.
    const LEN: usize;
    /// First selected index (meaningless if `LEN` is 0).
    const FIRST: isize;
    /// Last selected index (meaningless if `LEN` is 0).
    const LAST: isize;

    /// Returns the `i`-th selected index.
    ///
    /// Only valid for `i < LEN` after [`Selector::check_within`] has been instantiated for the
    /// container's bound.
    fn index(i: usize) -> usize;

    /// Fails to compile unless every selected index lies in `0..BOUND`.
    ///
    /// The sequence is monotonic, so checking its endpoints is sufficient.
    #[inline]
    fn check_within<const BOUND: usize>() {
        const {
            assert!(
                Self::LEN == 0
                    || (Self::FIRST >= 0
                        && Self::LAST >= 0
                        && (Self::FIRST as usize) < BOUND
                        && (Self::LAST as usize) < BOUND),
                "range selects indices outside of the container"
            )
        };
    }
}

impl<const START: isize, const END: isize, const STEP: isize> Selector
    for StaticRange<START, END, STEP>
{
    const LEN: usize = Self::LEN;
    const FIRST: isize = START;
    const LAST: isize = if Self::LEN == 0 {
        START
    } else {
        START + (Self::LEN as isize - 1) * STEP
    };

    #[inline]
    fn index(i: usize) -> usize {
        (START + i as isize * STEP) as usize
    }
}

/// A runtime arithmetic sequence over any [`Scalar`] type.
///
/// Like [`StaticRange`], it yields `start, start + step, ...` strictly before `end` in the
/// direction of `step`. A zero `step` produces an empty sequence.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let r = StepRange::new(0.0, 1.0, 0.25);
/// assert_eq!(r.len(), 4);
/// assert_eq!(r.to_vec::<f32>(), [0.0, 0.25, 0.5, 0.75]);
///
/// assert!(StepRange::new(10u8, 4, 1).is_empty());
///
/// let v: Vector<i32, 3> = StepRange::up_to(1u8, 4).try_into().unwrap();
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange<T> {
    start: T,
    end: T,
    step: T,
}

impl<T: Scalar> StepRange<T> {
    /// Creates a range from `start` to `end` (exclusive) with the given `step`.
    pub fn new(start: T, end: T, step: T) -> Self {
        Self { start, end, step }
    }

    /// Creates a range from `start` to `end` (exclusive) with a step of 1.
    pub fn up_to(start: T, end: T) -> Self {
        Self::new(start, end, T::ONE)
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values in the sequence.
    pub fn len(&self) -> usize {
        if self.step == T::ZERO {
            return 0;
        }
        let forward = self.step > T::ZERO;
        if (forward && self.start >= self.end) || (!forward && self.start <= self.end) {
            return 0;
        }

        if T::INTEGRAL {
            let start = self.start.into_primitive().to_i128();
            let end = self.end.into_primitive().to_i128();
            let step = self.step.into_primitive().to_i128().abs();
            let diff = (end - start).abs();
            ((diff + step - 1) / step) as usize
        } else {
            let diff = (self.end.to_f64() - self.start.to_f64()).abs();
            let mut len = (diff / self.step.to_f64().abs()).ceil() as usize;
            // The quotient can land just above a whole number, which would reach `end`.
            while len > 0 && !self.before_end(self.nth_value(len - 1)) {
                len -= 1;
            }
            while self.before_end(self.nth_value(len)) {
                len += 1;
            }
            len
        }
    }

    /// Returns whether `value` lies strictly before `end` in the direction of `step`.
    fn before_end(&self, value: T) -> bool {
        if self.step > T::ZERO {
            value < self.end
        } else {
            value > self.end
        }
    }

    /// Returns `true` if the sequence contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size in bytes of the sequence if it were materialized.
    pub fn byte_size(&self) -> usize {
        self.len() * std::mem::size_of::<T>()
    }

    /// Returns the `i`-th value, computed from `start` without accumulating rounding errors.
    fn nth_value(&self, i: usize) -> T {
        if T::INTEGRAL {
            let start = self.start.into_primitive().to_i128();
            let step = self.step.into_primitive().to_i128();
            T::from_primitive(Primitive::Signed(start + i as i128 * step))
        } else {
            T::from_primitive(Primitive::Float(
                self.start.to_f64() + i as f64 * self.step.to_f64(),
            ))
        }
    }

    /// Returns an iterator over the values of this range.
    pub fn iter(&self) -> StepRangeIter<T> {
        StepRangeIter {
            range: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collects the sequence into a [`Vec`], casting each value to `U`.
    pub fn to_vec<U: Scalar>(&self) -> Vec<U> {
        self.iter().map(Scalar::cast).collect()
    }

    /// Collects the sequence into a [`LinkedList`], casting each value to `U`.
    pub fn to_list<U: Scalar>(&self) -> LinkedList<U> {
        self.iter().map(Scalar::cast).collect()
    }
}

impl<T: Scalar> IntoIterator for StepRange<T> {
    type Item = T;
    type IntoIter = StepRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`StepRange`].
#[derive(Debug, Clone)]
pub struct StepRangeIter<T> {
    range: StepRange<T>,
    front: usize,
    back: usize,
}

impl<T: Scalar> Iterator for StepRangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.range.nth_value(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T: Scalar> DoubleEndedIterator for StepRangeIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range.nth_value(self.back))
    }
}

impl<T: Scalar> ExactSizeIterator for StepRangeIter<T> {}
impl<T: Scalar> FusedIterator for StepRangeIter<T> {}

impl<T: Scalar, U: Scalar, const N: usize> TryFrom<StepRange<T>> for Vector<U, N> {
    type Error = Error;

    fn try_from(range: StepRange<T>) -> Result<Self> {
        check_size(N, range.len())?;
        Vector::try_from_iter(range.into_iter().map(Scalar::cast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_len() {
        assert_eq!(StaticRange::<0, 4>::LEN, 4);
        assert_eq!(StaticRange::<0, 4, 3>::LEN, 2);
        assert_eq!(StaticRange::<4, 0>::LEN, 0);
        assert_eq!(StaticRange::<2, 2>::LEN, 0);
        assert_eq!(StaticRange::<4, 0, -1>::LEN, 4);
        assert_eq!(StaticRange::<4, 0, -3>::LEN, 2);
        assert_eq!(StaticRange::<0, 4, -1>::LEN, 0);
    }

    #[test]
    fn static_iter() {
        let r = StaticRange::<1, 10, 4>::new();
        assert_eq!(r.iter().collect::<Vec<_>>(), [1, 5, 9]);
        assert_eq!(r.iter().rev().collect::<Vec<_>>(), [9, 5, 1]);
        assert_eq!(r.iter().len(), 3);

        let mut count = 0;
        for _ in &r {
            count += 1;
        }
        for _ in &r {
            count += 1;
        }
        assert_eq!(count, 6);

        assert!(StaticRange::<5, 5>::new().iter().next().is_none());
    }

    #[test]
    fn selector_consts() {
        assert_eq!(<StaticRange<1, 10, 4> as Selector>::FIRST, 1);
        assert_eq!(<StaticRange<1, 10, 4> as Selector>::LAST, 9);
        assert_eq!(<StaticRange<3, -1, -1> as Selector>::LAST, 0);
        assert_eq!(<StaticRange<3, -1, -1> as Selector>::index(2), 1);
    }

    #[test]
    fn step_range_len() {
        assert_eq!(StepRange::new(0, 10, 3).len(), 4);
        assert_eq!(StepRange::new(10, 0, -3).len(), 4);
        assert_eq!(StepRange::new(0, 10, -3).len(), 0);
        assert_eq!(StepRange::new(0, 10, 0).len(), 0);
        assert_eq!(StepRange::new(-100i8, 100, 50).len(), 4);
        assert_eq!(StepRange::new(0.0, 1.0, 0.3).len(), 4);
        assert_eq!(StepRange::new(0.1, 0.4, 0.1).len(), 3);
        assert_eq!(StepRange::new(0.4, 0.1, -0.1).len(), 3);
        assert_eq!(StepRange::new(0.0, 0.3, 0.1).len(), 3);
        assert_eq!(StepRange::new(0u32, 5, 1).byte_size(), 20);
    }

    #[test]
    fn step_range_values() {
        assert_eq!(StepRange::new(-100i8, 100, 50).to_vec::<i8>(), [-100, -50, 0, 50]);
        assert_eq!(StepRange::new(3, 0, -1).to_vec::<i32>(), [3, 2, 1]);
        assert_eq!(
            StepRange::new(0, 3, 1).to_list::<f64>(),
            LinkedList::from([0.0, 1.0, 2.0])
        );
        assert_eq!(
            StepRange::new(0, 6, 2).iter().rev().collect::<Vec<_>>(),
            [4, 2, 0]
        );

        let values = StepRange::new(0.1f64, 0.4, 0.1).to_vec::<f64>();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|&v| v < 0.4), "{values:?}");
    }

    #[test]
    fn step_range_into_vector() {
        let v: Result<Vector<f32, 3>> = StepRange::up_to(0, 3).try_into();
        assert_eq!(v, Ok(Vector::from([0.0, 1.0, 2.0])));

        let v: Result<Vector<f32, 4>> = StepRange::up_to(0, 3).try_into();
        assert_eq!(
            v,
            Err(Error::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
    }
}
