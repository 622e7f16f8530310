use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use crate::{Bounded, Matrix, Promote, Scalar, Vector, Zero};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < R && col < C, "index ({row}, {col}) out of bounds for {R}x{C} matrix");
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < R && col < C, "index ({row}, {col}) out of bounds for {R}x{C} matrix");
        &mut self.0[row][col]
    }
}

/// Row-major flat indexing.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

/// Row-major flat indexing.
impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const R: usize, const C: usize> Index<(Bounded<R>, Bounded<C>)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (Bounded<R>, Bounded<C>)) -> &Self::Output {
        &self.0[row.get()][col.get()]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(Bounded<R>, Bounded<C>)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (Bounded<R>, Bounded<C>)) -> &mut Self::Output {
        &mut self.0[row.get()][col.get()]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Lexicographic ordering, in row-major order.
impl<T: PartialOrd, const R: usize, const C: usize> PartialOrd for Matrix<T, R, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Lexicographic ordering, in row-major order.
impl<T: Ord, const R: usize, const C: usize> Ord for Matrix<T, R, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, U, const R: usize, const C: usize> Add<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Matrix<<T as Promote<U>>::Common, R, C>;

    fn add(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].cast::<T::Common>() + rhs.0[r][c].cast())
    }
}

/// Element-wise subtraction.
impl<T, U, const R: usize, const C: usize> Sub<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Matrix<<T as Promote<U>>::Common, R, C>;

    fn sub(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].cast::<T::Common>() - rhs.0[r][c].cast())
    }
}

/// Element-wise addition.
impl<T: AddAssign, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().flatten().zip(rhs.0.into_iter().flatten()) {
            *lhs += rhs;
        }
    }
}

/// Element-wise subtraction.
impl<T: SubAssign, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().flatten().zip(rhs.0.into_iter().flatten()) {
            *lhs -= rhs;
        }
    }
}

/// Matrix * Column Vector.
impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Vector<<T as Promote<U>>::Common, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output {
        Vector::from_fn(|row| {
            (0..C).fold(<T::Common as Zero>::ZERO, |acc, col| {
                acc + self.0[row][col].cast::<T::Common>() * rhs[col].cast()
            })
        })
    }
}

/// Row Vector * Matrix.
impl<T, U, const R: usize, const C: usize> Mul<Matrix<U, R, C>> for Vector<T, R>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Vector<<T as Promote<U>>::Common, C>;

    fn mul(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Vector::from_fn(|col| {
            (0..R).fold(<T::Common as Zero>::ZERO, |acc, row| {
                acc + self[row].cast::<T::Common>() * rhs.0[row][col].cast()
            })
        })
    }
}

/// Matrix * Matrix.
impl<T, U, const M: usize, const N: usize, const P: usize> Mul<Matrix<U, N, P>> for Matrix<T, M, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Matrix<<T as Promote<U>>::Common, M, P>;

    fn mul(self, rhs: Matrix<U, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| {
            (0..N).fold(<T::Common as Zero>::ZERO, |acc, k| {
                acc + self.0[i][k].cast::<T::Common>() * rhs.0[k][j].cast()
            })
        })
    }
}

/// Matrix * Matrix, storing the result in `self`.
impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        let lhs = *self;
        *self = Matrix::from_fn(|i, j| {
            (0..N).fold(T::ZERO, |acc, k| acc + lhs.0[i][k] * rhs.0[k][j])
        });
    }
}

// See `vector/ops.rs` for why these are implemented per primitive type.
macro_rules! scalar_ops {
    ($($t:ty),+) => {
        $(
            scalar_ops!(@op $t, Add, add, AddAssign, add_assign, +);
            scalar_ops!(@op $t, Sub, sub, SubAssign, sub_assign, -);
            scalar_ops!(@op $t, Mul, mul, MulAssign, mul_assign, *);
            scalar_ops!(@op $t, Div, div, DivAssign, div_assign, /);
        )+
    };
    (@op $t:ty, $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        /// Matrix-Scalar operation, applied to each element.
        impl<const R: usize, const C: usize> $trait<$t> for Matrix<$t, R, C> {
            type Output = Matrix<$t, R, C>;

            #[inline]
            fn $method(self, rhs: $t) -> Self::Output {
                self.map(|elem| elem $op rhs)
            }
        }

        /// Scalar-Matrix operation, applied to each element.
        impl<const R: usize, const C: usize> $trait<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            #[inline]
            fn $method(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                rhs.map(|elem| self $op elem)
            }
        }

        /// Matrix-Scalar operation, applied to each element.
        impl<const R: usize, const C: usize> $assign<$t> for Matrix<$t, R, C> {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                self.iter_mut().for_each(|elem| *elem = *elem $op rhs);
            }
        }
    };
}

scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2, Mat3};

    use super::*;

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0i32, 1], [2, 3]]);
        let vec = vec2(4i32, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        let out = vec * mat;
        assert_eq!(out, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
    }

    #[test]
    fn mat_vec_mul_promotes() {
        let mat = Matrix::from_rows([[1u8, 0, 0], [0, 2, 0]]);
        let out = mat * vec3(0.5f32, 0.5, 9.0);
        assert_eq!(out, vec2(0.5f32, 1.0));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1i32, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9i32, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c.shape(), (4, 3));
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity() {
        let i = Mat3::<i64>::identity();
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1i64, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(m * i, m);
        assert_eq!(i * m, m);
        assert_eq!(i * i, i);

        let mut n = m;
        n *= i;
        assert_eq!(n, m);
        n *= m;
        assert_eq!(n, m * m);
    }

    #[test]
    fn elementwise() {
        let a = Mat2::from_rows([[1i32, 2], [3, 4]]);
        let b = Mat2::from_rows([[0.5f64, 0.5], [0.5, 0.5]]);
        assert_eq!(a + b, Mat2::from_rows([[1.5, 2.5], [3.5, 4.5]]));
        assert_eq!(a - b, Mat2::from_rows([[0.5, 1.5], [2.5, 3.5]]));
        assert_eq!(-a, Mat2::from_rows([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += a;
        assert_eq!(c, a * 2);
        c -= a;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar() {
        let a = Mat2::from_rows([[2.0f32, 4.0], [6.0, 8.0]]);
        assert_eq!(a / 2.0, Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(2.0 * a, a + a);
        assert_eq!(a - 2.0, Mat2::from_rows([[0.0, 2.0], [4.0, 6.0]]));
        assert_eq!(1.0 + a, a + 1.0);

        let mut b = a;
        b *= 0.5;
        b += 1.0;
        b -= 1.0;
        b /= 0.5;
        assert_eq!(b, a);
    }

    #[test]
    fn flat_index() {
        let mut m = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m[2], 3);
        m[1] = 9;
        assert_eq!(m[(0, 1)], 9);
        assert_eq!(m[(Bounded::at::<1>(), Bounded::at::<1>())], 4);
    }

    #[test]
    fn ordering() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[1, 2], [4, 0]]);
        assert!(a < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }
}
