use std::{any, array, collections::LinkedList, fmt, mem, slice};

use crate::{
    error::check_size, Bounded, Error, Float, Number, One, Result, Scalar, Selector, Zero,
};

mod ops;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// Vectors can be built in several ways:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions and the [`vector!`]
///   macro directly create vectors from provided values.
/// - [`Vector::splat`] fills every element with one value.
/// - [`Vector::from_fn`] computes each element from its index.
/// - Arrays convert into vectors through [`From`].
/// - Runtime-sized sources (slices, [`Vec`], [`LinkedList`], iterators) are accepted by the
///   [`TryFrom`] impls and [`Vector::try_from_iter`], which fail with [`Error::SizeMismatch`] if
///   the source does not have exactly `N` elements.
/// - [`Vector::cast`] converts a vector to a different scalar type.
/// - [`Default`] uses the default value of `T` for every element.
/// - [`Vector::ZERO`] has every element set to 0.
/// - Vectors of 1 to 4 elements have the unit axis constants `X`, `Y`, `Z` and `W`.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when the
///   index is out of bounds.
/// - Indexing with a [`Bounded`] index never fails, since its validity has already been checked.
/// - [`Vector::get`] and [`Vector::try_get`] return [`Option`] and [`Result`] respectively.
/// - [`Vector::x`], [`Vector::y`], [`Vector::z`] and [`Vector::w`] return the first four elements.
///   Accessing an axis the vector doesn't have is a compile error.
/// - [`Vector::slice`] extracts the elements selected by a [`StaticRange`].
/// - The storage is a plain `[T; N]`; [`bytemuck::Pod`] is implemented whenever `T` is `Pod`, so
///   vectors can be viewed as bytes.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`StaticRange`]: crate::StaticRange
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The all-zero vector.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// Unit vector along the W axis.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Broadcasts `elem` into every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with each index in turn, like [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from an iterator that yields exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the iterator yields fewer or more than `N` elements. At
    /// most `N + 1` elements are consumed, so for an oversized source `found` is `N + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::<u8, 3>::try_from_iter(1..=3)?;
    /// assert_eq!(v, [1, 2, 3]);
    ///
    /// let err = Vector::<u8, 3>::try_from_iter(1..=2).unwrap_err();
    /// assert_eq!(err, Error::SizeMismatch { expected: 3, found: 2 });
    /// # Ok::<(), fixed_linalg::Error>(())
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        // One element past `N` is enough to reject an oversized source.
        let elems: Vec<T> = iter.into_iter().take(N + 1).collect();
        let found = elems.len();
        <[T; N]>::try_from(elems)
            .map(Self)
            .map_err(|_| Error::SizeMismatch { expected: N, found })
    }

    /// Reads `N` consecutive elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `N` consecutive, initialized and properly aligned values
    /// of type `T`.
    pub unsafe fn from_ptr(ptr: *const T) -> Self
    where
        T: Copy,
    {
        // Safety: `[T; N]` has the alignment of `T`, the caller guarantees the rest.
        Self(unsafe { ptr.cast::<[T; N]>().read() })
    }

    /// Returns a vector with `f` applied to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Borrows the elements as an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns the raw bytes of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(1u16, 0x0302).as_bytes(), &[1u8, 0, 2, 3][..]);
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::bytes_of(self)
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements, in axis order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in axis order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.try_get(1), Ok(&6));
    /// assert_eq!(v.try_get(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T> {
        Bounded::<N>::new(index).map(|index| &self[index])
    }

    /// Returns the number of elements (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the number of elements (`N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns `true` if the vector has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the size of the element storage in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1.0f64, 2.0, 3.0).byte_size(), 24);
    /// ```
    #[inline]
    pub const fn byte_size(&self) -> usize {
        N * mem::size_of::<T>()
    }

    /// Returns the name of this vector type.
    pub fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }

    /// Returns the name of the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(1u16, 2).value_type_name(), "u16");
    /// ```
    pub fn value_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    /// Returns the elements selected by `range` as a new vector.
    ///
    /// The output length `M` is usually inferred; it must equal the length of the range. Both the
    /// length and the range bounds are checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = vector![0, 10, 20, 30, 40];
    /// let odd: Vector<_, 2> = v.slice(StaticRange::<1, 5, 2>::new());
    /// assert_eq!(odd, [10, 30]);
    ///
    /// let rev: Vector<_, 3> = v.slice(StaticRange::<4, 1, -1>::new());
    /// assert_eq!(rev, [40, 30, 20]);
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// let _: Vector<_, 2> = v.slice(StaticRange::<2, 4>::new());
    /// ```
    pub fn slice<S: Selector, const M: usize>(&self, _range: S) -> Vector<T, M>
    where
        T: Copy,
    {
        S::check_within::<N>();
        const { assert!(S::LEN == M, "slice length does not match the range length") };
        Vector::from_fn(|i| self.0[S::index(i)])
    }
}

macro_rules! axis_accessors {
    ($($get:ident, $get_mut:ident, $axis:literal;)+) => {
        impl<T: Copy, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("Returns element ", stringify!($axis), ".")]
                ///
                /// Calling this on a vector without that axis is a compile error:
                ///
                /// ```compile_fail
                /// # use fixed_linalg::*;
                #[doc = concat!("let v = Vector::<i32, ", stringify!($axis), ">::splat(1);")]
                #[doc = concat!("let _ = v.", stringify!($get), "();")]
                /// ```
                #[inline]
                pub fn $get(&self) -> T {
                    const { assert!(N > $axis, "vector has no such axis") };
                    self.0[$axis]
                }

                #[doc = concat!("Returns a mutable reference to element ", stringify!($axis), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    const { assert!(N > $axis, "vector has no such axis") };
                    &mut self.0[$axis]
                }
            )+
        }
    };
}

axis_accessors! {
    x, x_mut, 0;
    y, y_mut, 1;
    z, z_mut, 2;
    w, w_mut, 3;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Converts each element to `U`, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1.5, -2.5, 300.0).cast::<i16>(), [1, -2, 300]);
    /// assert_eq!(vec2(-1i32, 256).cast::<u8>(), [255, 0]);
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(Scalar::cast)
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> T {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// See [`dot`](crate::dot) for a version that accepts vectors of different scalar types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T {
        self.dot(*self)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length (Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of length zero is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == T::ZERO {
            return self;
        }
        self.map(|elem| elem / len)
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The `^` operator is an alias for this.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y ^ Vec3f::X, -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: &[T; N]) -> Self {
        Self(*value)
    }
}

impl<T: Scalar, U: Scalar, const N: usize> TryFrom<&[U]> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: &[U]) -> Result<Self> {
        check_size(N, value.len())?;
        Self::try_from_iter(value.iter().map(|&elem| elem.cast()))
    }
}

impl<T: Scalar, U: Scalar, const N: usize> TryFrom<Vec<U>> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: Vec<U>) -> Result<Self> {
        Self::try_from(value.as_slice())
    }
}

impl<T: Scalar, U: Scalar, const N: usize> TryFrom<LinkedList<U>> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: LinkedList<U>) -> Result<Self> {
        check_size(N, value.len())?;
        Self::try_from_iter(value.into_iter().map(Scalar::cast))
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Vec<T> {
    fn from(value: Vector<T, N>) -> Self {
        value.0.into()
    }
}

impl<T, const N: usize> From<Vector<T, N>> for LinkedList<T> {
    fn from(value: Vector<T, N>) -> Self {
        value.0.into()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Creates a [`Vector`] from its elements.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let v = vector![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(v.len(), 5);
/// assert_eq!(v[4], 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($elem:expr),* $(,)?) => {
        $crate::Vector::from([$($elem),*])
    };
}

/// Creates a 1-element [`Vector`].
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Creates a 2-element [`Vector`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a 3-element [`Vector`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a 4-element [`Vector`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticRange;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y(), 0.0);
        assert_eq!(Vec3f::Y.y(), 1.0);
        assert_eq!(Vec3f::Y.z(), 0.0);
        assert_eq!(Vec4f::W.w(), 1.0);

        let mut v = vec2(0, 1);
        *v.x_mut() = 777;
        assert_eq!(v.x(), 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y(), 9);

        assert_eq!(v.get(1), Some(&9));
        assert_eq!(v.get(2), None);
        assert_eq!(v.try_get(0), Ok(&777));
        assert!(v.try_get(2).is_err());
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(-1, 2)), "(-1, 2)");
    }

    #[test]
    fn construct() {
        assert_eq!(Vector::<i32, 3>::default(), [0, 0, 0]);
        assert_eq!(Vector::<u8, 2>::ZERO, [0, 0]);
        assert_eq!(Vector::splat(1.5), vec3(1.5, 1.5, 1.5));
        assert_eq!(Vector::from(&[1, 2]), vec2(1, 2));

        let v: Vector<f64, 3> = vec![1, 2, 3].try_into().unwrap();
        assert_eq!(v, [1.0, 2.0, 3.0]);

        let v: Vector<u8, 2> = LinkedList::from([1.9f32, 2.1]).try_into().unwrap();
        assert_eq!(v, [1, 2]);

        let v = Vector::<i64, 2>::try_from(&[7i8, 8][..]).unwrap();
        assert_eq!(v, [7, 8]);

        let data = [4u32, 5, 6, 7];
        let v = unsafe { Vector::<u32, 3>::from_ptr(data[1..].as_ptr()) };
        assert_eq!(v, [5, 6, 7]);
    }

    #[test]
    fn wrong_length_sources() {
        let err = Vector::<f32, 3>::try_from(vec![1.0f32, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 3,
                found: 2
            }
        );

        let err = Vector::<f32, 1>::try_from(LinkedList::from([1, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 1,
                found: 2
            }
        );

        let err = Vector::<f32, 2>::try_from(&[1, 2, 3, 4, 5][..]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 2,
                found: 5
            }
        );

        // Unbounded sources are cut off one element past the length.
        let err = Vector::<u32, 3>::try_from_iter(0..).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 3,
                found: 4
            }
        );
        assert_eq!(Vector::<u32, 3>::try_from_iter((0..).take(3)), Ok(vec3(0, 1, 2)));
    }

    #[test]
    fn convert_out() {
        let v = vec3(1, 2, 3);
        assert_eq!(<[i32; 3]>::from(v), [1, 2, 3]);
        assert_eq!(Vec::from(v), vec![1, 2, 3]);
        assert_eq!(LinkedList::from(v.cast::<f32>()), LinkedList::from([1.0, 2.0, 3.0]));
        assert_eq!(v.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn queries() {
        let v = vec4(1u8, 2, 3, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.size(), 4);
        assert!(!v.is_empty());
        assert_eq!(v.byte_size(), 4);
        assert_eq!(v.as_bytes(), &[1, 2, 3, 4]);
        assert!(v.type_name().contains("Vector<u8, 4>"));
        assert_eq!(Vector::<f64, 0>::ZERO.len(), 0);
    }

    #[test]
    fn slice() {
        let v = vector![1, 2, 3, 4, 5, 6];
        let all: Vector<_, 6> = v.slice(StaticRange::<0, 6>::new());
        assert_eq!(all, v);
        let tail: Vector<_, 2> = v.slice(StaticRange::<4, 6>::new());
        assert_eq!(tail, [5, 6]);
        let none: Vector<_, 0> = v.slice(StaticRange::<3, 3>::new());
        assert!(none.is_empty());
        let strided: Vector<_, 2> = v.slice(StaticRange::<5, 0, -3>::new());
        assert_eq!(strided, [6, 3]);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn length() {
        let v = vec3(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.normalize(), vec3(0.6, 0.8, 0.0));
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    }
}
