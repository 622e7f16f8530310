//! Free-standing vector and matrix functions and their variadic macro forms.
//!
//! Most of these forward to the methods on [`Vector`] and [`Matrix`], but accept operands of
//! different scalar types where that makes sense and combine them in their [`Promote`]d type.

use std::marker::PhantomData;

use crate::{Float, Matrix, One, Promote, Result, Scalar, Signed, Vector};

/// Shorthand for the common scalar type of `T` and `U`.
pub type Common<T, U> = <T as Promote<U>>::Common;

/// Computes the dot product of two vectors.
///
/// The vectors may have different scalar types; the product is computed in their common type.
/// [`dot!`] accepts any number of operands.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(dot(vec3(1i32, 2, 3), vec3(4i32, 5, 6)), 32);
/// assert_eq!(dot(vec2(1u8, 2), vec2(0.5, 0.25)), 1.0);
/// ```
pub fn dot<T, U, const N: usize>(a: Vector<T, N>, b: Vector<U, N>) -> Common<T, U>
where
    T: Promote<U>,
    U: Scalar,
{
    (a * b).sum()
}

/// Element-wise (Hadamard) product of two containers of the same shape.
///
/// Implemented for [`Vector`] and [`Matrix`] operands of any scalar types.
pub trait Hadamard<Rhs> {
    type Output;

    fn hadamard(self, rhs: Rhs) -> Self::Output;
}

impl<T, U, const N: usize> Hadamard<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Vector<Common<T, U>, N>;

    fn hadamard(self, rhs: Vector<U, N>) -> Self::Output {
        self * rhs
    }
}

impl<T, U, const R: usize, const C: usize> Hadamard<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Matrix<Common<T, U>, R, C>;

    fn hadamard(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::hadamard(&self, rhs)
    }
}

/// A [`Vector`] or [`Matrix`] operand of the variadic product macros.
#[doc(hidden)]
pub trait Operand: Copy {
    type Elem: Scalar;
    type Cast<W: Scalar>;

    fn cast_elems<W: Scalar>(self) -> Self::Cast<W>;
}

impl<T: Scalar, const N: usize> Operand for Vector<T, N> {
    type Elem = T;
    type Cast<W: Scalar> = Vector<W, N>;

    fn cast_elems<W: Scalar>(self) -> Vector<W, N> {
        self.cast()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Operand for Matrix<T, R, C> {
    type Elem = T;
    type Cast<W: Scalar> = Matrix<W, R, C>;

    fn cast_elems<W: Scalar>(self) -> Matrix<W, R, C> {
        self.cast()
    }
}

/// Zero-sized carrier of the common scalar type of every operand seen so far.
///
/// [`hadamard!`] and [`dot!`] widen it across all operands before multiplying anything, so that
/// narrow leading operands are computed in the type of a wider trailing one.
#[doc(hidden)]
pub struct Promotion<T>(PhantomData<T>);

impl<T> Clone for Promotion<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Promotion<T> {}

impl<T: Scalar> Promotion<T> {
    pub fn of<O: Operand<Elem = T>>(_: &O) -> Self {
        Self(PhantomData)
    }

    pub fn with<O: Operand>(self, _: &O) -> Promotion<Common<T, O::Elem>>
    where
        T: Promote<O::Elem>,
    {
        Promotion(PhantomData)
    }

    pub fn cast<O: Operand>(self, operand: O) -> O::Cast<T> {
        operand.cast_elems()
    }
}

/// Element-wise (Hadamard) product of two vectors or two matrices.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(hadamard(vec3(1i32, 2, 3), vec3(2i32, 2, 0)), [2, 4, 0]);
/// ```
pub fn hadamard<A: Hadamard<B>, B>(a: A, b: B) -> A::Output {
    a.hadamard(b)
}

/// Returns the length of a floating-point vector.
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(length(vec3(3.0, 4.0, 0.0)), 5.0);
/// ```
pub fn length<T: Float, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Returns `v` scaled to unit length. The zero vector is returned unchanged.
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(normalize(vec3(3.0, 4.0, 0.0)), [0.6, 0.8, 0.0]);
/// assert_eq!(normalize(Vec2::<f32>::ZERO), [0.0, 0.0]);
/// ```
pub fn normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// Returns the Euclidean distance between two points.
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(distance(vec3(0.0, 0.0, 0.0), vec3(3.0, 4.0, 0.0)), 5.0);
/// assert_eq!(distance(vec2(1i32, 1), vec2(4.0f32, 5.0)), 5.0);
/// ```
pub fn distance<T, U, const N: usize>(a: Vector<T, N>, b: Vector<U, N>) -> Common<T, U>
where
    T: Promote<U>,
    U: Scalar,
    Common<T, U>: Float,
{
    (a - b).length()
}

/// Linearly interpolates between `a` and `b`, computing `a * (1 - t) + b * t`.
///
/// The computation is carried out in the common type of both vectors and `t`. `t` is not clamped.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let a = vec2(0.0, 10.0);
/// let b = vec2(10.0, 20.0);
/// assert_eq!(lerp(a, b, 0.0), a);
/// assert_eq!(lerp(a, b, 1.0), b);
/// assert_eq!(lerp(a, b, 0.5), [5.0, 15.0]);
/// assert_eq!(lerp(vec2(0i32, 0), vec2(4i32, 8), 0.25f32), [1.0, 2.0]);
/// ```
pub fn lerp<T, U, S, const N: usize>(
    a: Vector<T, N>,
    b: Vector<U, N>,
    t: S,
) -> Vector<Common<Common<T, U>, S>, N>
where
    T: Promote<U>,
    U: Scalar,
    Common<T, U>: Promote<S>,
    S: Scalar,
{
    let t = t.cast::<Common<Common<T, U>, S>>();
    let s = <Common<Common<T, U>, S> as One>::ONE - t;
    Vector::from_fn(|i| {
        a[i].cast::<Common<Common<T, U>, S>>() * s + b[i].cast::<Common<Common<T, U>, S>>() * t
    })
}

/// Projects `a` onto the direction of `b`, computing `b * (dot(a, b) / dot(b, b))`.
///
/// Projecting onto a zero vector divides by zero; the result follows the scalar type's division
/// (NaN components for floats, a panic for integers).
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(project(vec2(3.0, 4.0), vec2(2.0, 0.0)), [3.0, 0.0]);
/// assert_eq!(project(vec2(2i32, 2), vec2(0.0, 4.0)), [0.0, 2.0]);
/// ```
pub fn project<T, U, const N: usize>(a: Vector<T, N>, b: Vector<U, N>) -> Vector<Common<T, U>, N>
where
    T: Promote<U>,
    U: Scalar,
{
    let a = a.cast::<Common<T, U>>();
    let b = b.cast::<Common<T, U>>();
    let scale = a.dot(b) / b.dot(b);
    b.map(|elem| elem * scale)
}

/// Reflects `a` about the hyperplane with normal `n`, computing `a - n * 2 * dot(a, n)`.
///
/// `n` is used as given; pass a unit vector to get a true reflection.
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(reflect(vec2(1.0, -1.0), vec2(0.0, 1.0)), [1.0, 1.0]);
/// assert_eq!(reflect(vec3(1i32, 2, 3), vec3(1i32, 0, 0)), [-1, 2, 3]);
/// ```
pub fn reflect<T, U, const N: usize>(a: Vector<T, N>, n: Vector<U, N>) -> Vector<Common<T, U>, N>
where
    T: Promote<U>,
    U: Scalar,
{
    let a = a.cast::<Common<T, U>>();
    let n = n.cast::<Common<T, U>>();
    let one = <Common<T, U> as One>::ONE;
    let twice_dot = (one + one) * a.dot(n);
    Vector::from_fn(|i| a[i] - n[i] * twice_dot)
}

/// Tuples of vectors that can be concatenated into a single `M`-element vector.
///
/// Implemented for tuples of 1 to 8 vectors sharing a scalar type. `M` must be the sum of the
/// element counts, which is checked at compile time.
pub trait Concat<T, const M: usize> {
    fn concat(self) -> Vector<T, M>;
}

fn concat_element<T: Copy>(parts: &[&[T]], mut index: usize) -> T {
    for part in parts {
        if let Some(&elem) = part.get(index) {
            return elem;
        }
        index -= part.len();
    }
    unreachable!("concatenation index past the combined length")
}

macro_rules! concat_impls {
    ($( ($($idx:tt $len:ident),+) )+) => {
        $(
            impl<T: Copy, $(const $len: usize,)+ const M: usize> Concat<T, M>
                for ($(Vector<T, $len>,)+)
            {
                fn concat(self) -> Vector<T, M> {
                    const {
                        assert!(
                            0 $(+ $len)+ == M,
                            "concatenation length must be the sum of the input lengths"
                        )
                    };
                    let parts = [$(self.$idx.as_slice()),+];
                    Vector::from_fn(|i| concat_element(&parts, i))
                }
            }
        )+
    };
}

concat_impls! {
    (0 A)
    (0 A, 1 B)
    (0 A, 1 B, 2 C)
    (0 A, 1 B, 2 C, 3 D)
    (0 A, 1 B, 2 C, 3 D, 4 E)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H)
}

/// Concatenates a tuple of vectors into one vector.
///
/// The length of the result is usually inferred, or annotated by the caller. [`cat!`] is a
/// shorthand that builds the tuple.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let v: Vec4<i32> = cat((vec2(1, 2), vec2(3, 4)));
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let _: Vec3<i32> = cat((vec2(1, 2), vec2(3, 4)));
/// ```
pub fn cat<T, P, const M: usize>(parts: P) -> Vector<T, M>
where
    P: Concat<T, M>,
{
    parts.concat()
}

/// Returns the transpose of `m`.
pub fn transpose<T: Copy, const R: usize, const C: usize>(m: Matrix<T, R, C>) -> Matrix<T, C, R> {
    m.transpose()
}

/// Returns `m` with row `row` and column `col` removed. See [`Matrix::minor`].
pub fn minor<T, const R: usize, const C: usize, const RM: usize, const CM: usize>(
    m: Matrix<T, R, C>,
    row: usize,
    col: usize,
) -> Matrix<T, RM, CM>
where
    T: Copy,
{
    m.minor(row, col)
}

/// Returns the determinant of `m`. See [`Matrix::determinant`].
pub fn determinant<T: Signed, const N: usize>(m: Matrix<T, N, N>) -> T {
    m.determinant()
}

/// Returns the cofactor of element `(row, col)` of `m`. See [`Matrix::cofactor`].
pub fn cofactor<T: Signed, const N: usize>(m: Matrix<T, N, N>, row: usize, col: usize) -> T {
    m.cofactor(row, col)
}

/// Returns the adjoint (adjugate) of `m`. See [`Matrix::adjoint`].
pub fn adjoint<T: Signed, const N: usize>(m: Matrix<T, N, N>) -> Matrix<T, N, N> {
    m.adjoint()
}

/// Returns the inverse of `m`, or [`Error::Singular`](crate::Error::Singular).
///
/// ```
/// # use fixed_linalg::*;
/// let m = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]);
/// assert_eq!(inverse(m)?, Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]));
///
/// let zero_row = Matrix::from_rows([[1.0, 2.0], [0.0, 0.0]]);
/// assert!(matches!(inverse(zero_row), Err(Error::Singular { .. })));
/// # Ok::<_, Error>(())
/// ```
pub fn inverse<T: Float, const N: usize>(m: Matrix<T, N, N>) -> Result<Matrix<T, N, N>> {
    m.inverse()
}

/// Returns the sum of the diagonal of `m`.
pub fn trace<T: Scalar, const N: usize>(m: Matrix<T, N, N>) -> T {
    m.trace()
}

/// Returns the rank of `m` under the default tolerance. See [`Matrix::rank_with`].
pub fn rank<T: Scalar, const R: usize, const C: usize>(m: Matrix<T, R, C>) -> usize {
    m.rank()
}

/// Returns whether the square matrix `m` has full rank.
pub fn is_full_rank<T: Signed, const N: usize>(m: Matrix<T, N, N>) -> bool {
    m.is_full_rank()
}

/// Computes the Kronecker product of `a` and `b`. See [`Matrix::kronecker`].
pub fn kronecker_product<
    T,
    U,
    const R: usize,
    const C: usize,
    const R2: usize,
    const C2: usize,
    const RK: usize,
    const CK: usize,
>(
    a: Matrix<T, R, C>,
    b: Matrix<U, R2, C2>,
) -> Matrix<Common<T, U>, RK, CK>
where
    T: Promote<U>,
    U: Scalar,
{
    a.kronecker(b)
}

/// An operand of a (possibly nested) Kronecker product.
///
/// The dimensions are associated constants so that chained products know their size without
/// const-generic arithmetic.
pub trait KroneckerFactor: Copy {
    type Elem: Scalar;

    const ROWS: usize;
    const COLS: usize;

    /// Returns the element at `(row, col)`.
    fn element(&self, row: usize, col: usize) -> Self::Elem;
}

impl<T: Scalar, const R: usize, const C: usize> KroneckerFactor for Matrix<T, R, C> {
    type Elem = T;

    const ROWS: usize = R;
    const COLS: usize = C;

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self.as_rows()[row][col]
    }
}

/// A lazily evaluated Kronecker product `lhs ⊗ rhs`.
///
/// Built by [`kronecker!`]; elements are computed on demand and [`Kronecker::eval`] materializes
/// the product into a [`Matrix`].
#[derive(Debug, Clone, Copy)]
pub struct Kronecker<A, B> {
    lhs: A,
    rhs: B,
}

impl<A, B> Kronecker<A, B> {
    pub fn new(lhs: A, rhs: B) -> Self {
        Self { lhs, rhs }
    }
}

impl<A, B> KroneckerFactor for Kronecker<A, B>
where
    A: KroneckerFactor,
    B: KroneckerFactor,
    A::Elem: Promote<B::Elem>,
{
    type Elem = Common<A::Elem, B::Elem>;

    const ROWS: usize = A::ROWS * B::ROWS;
    const COLS: usize = A::COLS * B::COLS;

    fn element(&self, row: usize, col: usize) -> Self::Elem {
        let outer = self.lhs.element(row / B::ROWS, col / B::COLS);
        let inner = self.rhs.element(row % B::ROWS, col % B::COLS);
        outer.cast::<Self::Elem>() * inner.cast()
    }
}

impl<A, B> Kronecker<A, B>
where
    A: KroneckerFactor,
    B: KroneckerFactor,
    A::Elem: Promote<B::Elem>,
{
    /// Evaluates the product into an `R`×`C` matrix.
    ///
    /// `R` and `C` must match the product's dimensions, which is checked at compile time.
    pub fn eval<const R: usize, const C: usize>(&self) -> Matrix<Common<A::Elem, B::Elem>, R, C> {
        const {
            assert!(
                R == <Self as KroneckerFactor>::ROWS && C == <Self as KroneckerFactor>::COLS,
                "Kronecker product dimensions must be the products of the input dimensions"
            )
        };
        Matrix::from_fn(|r, c| self.element(r, c))
    }
}

/// Computes the dot product of two or more vectors.
///
/// Every operand is first cast to the common scalar type of *all* operands, then corresponding
/// elements are multiplied together and the products are summed.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let a = vec3(1i32, 2, 3);
/// assert_eq!(dot!(a, a), 14);
/// assert_eq!(dot!(a, vec3(1i32, 1, 1), vec3(2i32, 0, 1)), 5);
/// assert_eq!(dot!(vec2(1u8, 2), vec2(0.5f64, 0.5)), 1.5);
/// assert_eq!(dot!(vec1(100i8), vec1(2i8), vec1(1i64)), 200i64);
/// ```
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let _ = dot!(vec2(1, 2));
/// ```
#[macro_export]
macro_rules! dot {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::hadamard!($first, $($rest),+).sum()
    };
}

/// Element-wise product of two or more vectors or matrices of the same shape.
///
/// Each operand is evaluated once and cast to the common scalar type of all operands before any
/// multiplication takes place.
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(hadamard!(vec2(1i32, 2), vec2(3i32, 4), vec2(2i32, 2)), [6, 16]);
///
/// let m = Matrix::from_rows([[1i32, 2], [3, 4]]);
/// assert_eq!(hadamard!(m, m), Matrix::from_rows([[1, 4], [9, 16]]));
/// ```
#[macro_export]
macro_rules! hadamard {
    (@bind [$first:ident $($bound:ident)*] []) => {{
        let common = $crate::Promotion::of(&$first) $(.with(&$bound))*;
        let product = common.cast($first);
        $(
            let product = $crate::Hadamard::hadamard(product, common.cast($bound));
        )*
        product
    }};
    (@bind [$($bound:ident)*] [$head:expr $(, $tail:expr)*]) => {{
        let operand = $head;
        $crate::hadamard!(@bind [$($bound)* operand] [$($tail),*])
    }};
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::hadamard!(@bind [] [$first, $($rest),+])
    };
}

/// Concatenates one or more vectors into a single vector.
///
/// ```
/// # use fixed_linalg::*;
/// let v: Vector<i32, 5> = cat!(vec2(1, 2), vec1(3), vec2(4, 5));
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! cat {
    ($($part:expr),+ $(,)?) => {
        $crate::Concat::concat(($($part,)+))
    };
}

/// Computes the Kronecker product of one or more matrices.
///
/// The operands are folded from the right (`a ⊗ (b ⊗ c)`) and the result is evaluated into a
/// matrix whose dimensions must be annotated or inferable. A single operand is returned as is.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let a = Matrix::from_rows([[1i32, 2]]);
/// let b = Matrix::from_rows([[1i32], [10]]);
/// let c = Mat1::from_rows([[3i32]]);
/// let k: Matrix<i32, 2, 2> = kronecker!(a, b, c);
/// assert_eq!(k, Matrix::from_rows([[3, 6], [30, 60]]));
/// ```
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let a = Mat2::<i32>::identity();
/// let _: Matrix<i32, 8, 4> = kronecker!(a, a, a);
/// ```
#[macro_export]
macro_rules! kronecker {
    (@lazy $last:expr) => {
        $last
    };
    (@lazy $first:expr, $($rest:expr),+) => {
        $crate::Kronecker::new($first, $crate::kronecker!(@lazy $($rest),+))
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Kronecker::new($first, $crate::kronecker!(@lazy $($rest),+)).eval()
    };
}

#[cfg(test)]
mod tests {
    use ::approx::assert_relative_eq;

    use crate::{vec1, vec2, vec3, vec4, Mat2, Mat3, Vec3, Vec4};

    use super::*;

    #[test]
    fn dot_products() {
        let a = vec3(1i32, 3, -5);
        let b = vec3(4i32, -2, -1);
        assert_eq!(dot(a, b), 3);
        assert_eq!(dot(a, b), dot(b, a));
        assert_eq!(dot!(a, b), 3);
        assert_eq!(dot!(a, b, vec3(2i32, 2, 2)), 6);
        assert_eq!(dot(vec2(1i8, 2), vec2(100i64, 1000)), 2100i64);
    }

    #[test]
    fn variadic_products_widen_first() {
        assert_eq!(dot!(vec1(100i8), vec1(2i8), vec1(1i64)), 200i64);
        assert_eq!(
            hadamard!(vec2(100u8, 20), vec2(3u8, 50), vec2(1i32, -1)),
            [300, -1000]
        );

        let wide = dot!(vec1(0.1f32), vec1(0.1f32), vec1(1.0f64));
        assert_eq!(wide, f64::from(0.1f32) * f64::from(0.1f32));

        let m = Matrix::from_rows([[16i8, 1], [1, 1]]);
        let big = Mat2::splat(1000i64);
        assert_eq!(
            hadamard!(m, m, big),
            Matrix::from_rows([[256_000i64, 1000], [1000, 1000]])
        );

        let mut calls = 0;
        let mut next = || {
            calls += 1;
            vec2(1i32, 2)
        };
        assert_eq!(dot!(next(), next(), next()), 9);
        assert_eq!(calls, 3);
    }

    #[test]
    fn hadamard_products() {
        assert_eq!(hadamard(vec3(1i32, 2, 3), vec3(4i32, 5, 6)), [4, 10, 18]);
        assert_eq!(hadamard!(vec2(1u8, 2), vec2(0.5f32, 0.5)), [0.5f32, 1.0]);

        let m = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let ones = Mat2::splat(1.5);
        assert_eq!(
            hadamard(m, ones),
            Matrix::from_rows([[1.5, 3.0], [4.5, 6.0]])
        );
    }

    #[test]
    fn length_and_normalize() {
        let v = vec3(3.0, 4.0, 0.0);
        assert_eq!(length(v), 5.0);
        assert_relative_eq!(normalize(v), vec3(0.6, 0.8, 0.0));
        assert_relative_eq!(length(normalize(vec4(1.0, -2.0, 3.0, 0.5))), 1.0);
        assert_eq!(normalize(Vec3::<f64>::ZERO), Vec3::ZERO);
    }

    #[test]
    fn distances() {
        assert_eq!(distance(vec3(0.0, 0.0, 0.0), vec3(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(distance(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(distance(vec2(0u8, 0), vec2(-6.0f32, 8.0)), 10.0f32);
    }

    #[test]
    fn interpolation() {
        let a = vec3(1.0, -2.0, 5.0);
        let b = vec3(3.0, 2.0, -5.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), [2.0, 0.0, 0.0]);
        assert_eq!(lerp(a, b, 2.0), [5.0, 6.0, -15.0]);
        assert_eq!(lerp(vec2(0i32, 10), vec2(10i32, 0), 0.5f32), [5.0f32, 5.0]);
    }

    #[test]
    fn projection_and_reflection() {
        assert_eq!(project(vec2(3.0, 4.0), vec2(0.0, 5.0)), [0.0, 4.0]);
        assert_eq!(project(vec3(1.0, 1.0, 1.0), vec3(2.0, 0.0, 0.0)), [1.0, 0.0, 0.0]);
        let p = project(vec2(1.0, 2.0), vec2(0.0, 0.0));
        assert!(p.iter().all(|e: &f64| e.is_nan()));

        assert_eq!(reflect(vec2(1.0, -1.0), vec2(0.0, 1.0)), [1.0, 1.0]);
        assert_eq!(reflect(vec2(2i32, 3), vec2(1i32, 0)), [-2, 3]);
        // `n` is not normalized
        assert_eq!(reflect(vec2(1.0, 0.0), vec2(2.0, 0.0)), [-7.0, 0.0]);
    }

    #[test]
    fn concatenation() {
        let v: Vec4<i32> = cat((vec2(1, 2), vec2(3, 4)));
        assert_eq!(v, [1, 2, 3, 4]);

        let single: Vec3<u8> = cat!(vec3(1, 2, 3));
        assert_eq!(single, [1, 2, 3]);

        let with_empty: Vec3<i32> = cat!(Vector::<i32, 0>::from([]), vec3(7, 8, 9));
        assert_eq!(with_empty, [7, 8, 9]);

        let eight: Vector<i32, 8> = cat!(
            vec1(1),
            vec1(2),
            vec1(3),
            vec1(4),
            vec1(5),
            vec1(6),
            vec1(7),
            vec1(8),
        );
        assert_eq!(eight, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn matrix_functions() {
        let m = Matrix::from_rows([[2.0, 1.0], [1.0, 3.0]]);
        assert_eq!(transpose(transpose(m)), m);
        assert_eq!(determinant(m), 5.0);
        assert_eq!(trace(m), 5.0);
        assert_eq!(rank(m), 2);
        assert!(is_full_rank(m));
        assert_eq!(cofactor(m, 0, 1), -1.0);
        assert_eq!(adjoint(m), Matrix::from_rows([[3.0, -1.0], [-1.0, 2.0]]));
        assert_relative_eq!(inverse(m).unwrap() * m, Mat2::identity(), epsilon = 1e-12);

        let big = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 10]]);
        let small: Mat2<i32> = minor(big, 2, 2);
        assert_eq!(small, Matrix::from_rows([[1, 2], [4, 5]]));
        assert_eq!(determinant(big), -3);
        assert_eq!(rank(Mat3::<i32>::ZERO), 0);
    }

    #[test]
    fn kronecker_chain() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let id = Mat2::<i32>::identity();

        let direct: Matrix<i32, 4, 4> = kronecker_product(a, id);
        let lazy: Matrix<i32, 4, 4> = kronecker!(a, id);
        assert_eq!(direct, lazy);

        let triple: Matrix<i32, 8, 8> = kronecker!(id, a, id);
        let inner: Matrix<i32, 4, 4> = kronecker_product(a, id);
        let nested: Matrix<i32, 8, 8> = kronecker_product(id, inner);
        assert_eq!(triple, nested);

        let expr = Kronecker::new(a, Kronecker::new(id, id));
        type Expr = Kronecker<Mat2<i32>, Kronecker<Mat2<i32>, Mat2<i32>>>;
        assert_eq!(<Expr as KroneckerFactor>::ROWS, 8);
        assert_eq!(<Expr as KroneckerFactor>::COLS, 8);
        assert_eq!(expr.element(7, 7), 4);
        assert_eq!(expr.element(0, 1), 0);

        assert_eq!(kronecker!(a), a);

        let mixed: Matrix<f64, 2, 4> = kronecker!(Matrix::from_rows([[1u8, 2]]), Mat2::splat(0.5));
        assert_eq!(
            mixed,
            Matrix::from_rows([[0.5, 0.5, 1.0, 1.0], [0.5, 0.5, 1.0, 1.0]])
        );
    }
}
