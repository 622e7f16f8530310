//! Determinants, inversion, rank and the Kronecker product.

use std::array;

use crate::{Error, Float, Matrix, Promote, Result, Scalar, Signed, Tolerance};

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the matrix with row `row` and column `col` removed.
    ///
    /// `RM` and `CM` are usually inferred and must be `R - 1` and `C - 1`. A wrong annotation, or
    /// calling this on a matrix with a single row or column, fails to compile.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// let minor: Mat2<i32> = mat.minor(1, 0);
    /// assert_eq!(minor, Matrix::from_rows([
    ///     [2, 3],
    ///     [8, 9],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let _: Matrix<i32, 0, 0> = Mat1::<i32>::identity().minor(0, 0);
    /// ```
    pub fn minor<const RM: usize, const CM: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, RM, CM> {
        const {
            assert!(R > 1 && C > 1, "minor requires at least 2 rows and 2 columns");
            assert!(RM + 1 == R && CM + 1 == C, "minor dimensions must be one less than the input");
        };
        assert!(
            row < R && col < C,
            "minor ({row}, {col}) out of bounds for {R}x{C} matrix"
        );
        Matrix::from_fn(|r, c| self.0[r + (r >= row) as usize][c + (c >= col) as usize])
    }

    /// Element-wise (Hadamard) product of two matrices of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows([[2.0, 0.5], [1.0, 0.0]]);
    /// assert_eq!(a.hadamard(b), Matrix::from_rows([[2.0, 1.0], [3.0, 0.0]]));
    /// ```
    pub fn hadamard<U: Scalar>(&self, other: Matrix<U, R, C>) -> Matrix<T::Common, R, C>
    where
        T: Promote<U>,
    {
        Matrix::from_fn(|r, c| self.0[r][c].cast::<T::Common>() * other.0[r][c].cast())
    }

    /// Computes the Kronecker product of `self` and `other`.
    ///
    /// The result consists of `R`×`C` blocks; block `(i, j)` is a copy of `other` scaled by
    /// `self[(i, j)]`. `RK` and `CK` are usually inferred and must be `R * R2` and `C * C2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = Matrix::from_rows([[1, 2]]);
    /// let b = Matrix::from_rows([[1, 0], [0, 1]]);
    /// let k: Matrix<i32, 2, 4> = a.kronecker(b);
    /// assert_eq!(k, Matrix::from_rows([
    ///     [1, 0, 2, 0],
    ///     [0, 1, 0, 2],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let a = Mat2::<i32>::identity();
    /// let _: Matrix<i32, 4, 2> = a.kronecker(a);
    /// ```
    pub fn kronecker<U, const R2: usize, const C2: usize, const RK: usize, const CK: usize>(
        &self,
        other: Matrix<U, R2, C2>,
    ) -> Matrix<T::Common, RK, CK>
    where
        T: Promote<U>,
        U: Scalar,
    {
        const {
            assert!(
                RK == R * R2 && CK == C * C2,
                "Kronecker product dimensions must be the products of the input dimensions"
            )
        };
        Matrix::from_fn(|r, c| {
            self.0[r / R2][c / C2].cast::<T::Common>() * other.0[r % R2][c % C2].cast()
        })
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the rank of the matrix, using the default [`Tolerance`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [2, 4, 6],
    /// ]);
    /// assert_eq!(mat.rank(), 1);
    /// assert_eq!(Mat3f::identity().rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.rank_with(Tolerance::default())
    }

    /// Returns the rank of the matrix.
    ///
    /// The rank is computed with Gaussian elimination and partial pivoting on an [`f64`] copy of
    /// the matrix. A column whose largest remaining candidate pivot is negligible under
    /// `tolerance` (scaled by the largest element magnitude) does not contribute to the rank.
    pub fn rank_with(&self, tolerance: Tolerance) -> usize {
        let mut work: [[f64; C]; R] = self.0.map(|row| row.map(Scalar::to_f64));
        let threshold = tolerance.threshold(self.max_abs());

        let mut rank = 0;
        for col in 0..C {
            if rank == R {
                break;
            }

            let pivot = (rank..R)
                .max_by(|&a, &b| work[a][col].abs().total_cmp(&work[b][col].abs()))
                .unwrap_or(rank);
            let magnitude = work[pivot][col].abs();
            if magnitude == 0.0 || magnitude < threshold {
                log::trace!("rank: column {col} has no pivot above {threshold:e}");
                continue;
            }
            log::trace!("rank: column {col} pivots on row {pivot} ({magnitude:e})");

            work.swap(rank, pivot);
            for r in rank + 1..R {
                let factor = work[r][col] / work[rank][col];
                for c in col..C {
                    let delta = factor * work[rank][c];
                    work[r][c] -= delta;
                }
            }
            rank += 1;
        }
        rank
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// The sum is accumulated in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Matrix::from_diagonal([0.5, 0.25]).trace(), 0.75);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Signed, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// 1×1 and 2×2 matrices are handled directly. Larger matrices use cofactor expansion along the
    /// first row, which costs O(N!) and is only suitable for small matrices. The determinant of
    /// a 0×0 matrix is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.determinant(), -2);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let all: [usize; N] = array::from_fn(|i| i);
        self.sub_determinant(&all, &all)
    }

    /// Determinant of the square submatrix formed by the given rows and columns.
    fn sub_determinant(&self, rows: &[usize], cols: &[usize]) -> T {
        let m = &self.0;
        match rows.len() {
            0 => T::ONE,
            1 => m[rows[0]][cols[0]],
            2 => {
                m[rows[0]][cols[0]] * m[rows[1]][cols[1]]
                    - m[rows[0]][cols[1]] * m[rows[1]][cols[0]]
            }
            n => {
                let mut rest = [0; N];
                let mut det = T::ZERO;
                for (j, &col) in cols.iter().enumerate() {
                    let mut len = 0;
                    for &c in cols.iter().filter(|&&c| c != col) {
                        rest[len] = c;
                        len += 1;
                    }
                    let term = m[rows[0]][col] * self.sub_determinant(&rows[1..], &rest[..n - 1]);
                    if j % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    /// Returns the cofactor of the element at `(row, col)`: the determinant of the minor, negated
    /// if `row + col` is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row >= N` or `col >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [0, 4, 5],
    ///     [1, 0, 6],
    /// ]);
    /// assert_eq!(mat.cofactor(0, 0), 24);
    /// assert_eq!(mat.cofactor(0, 1), 5);
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "cofactor ({row}, {col}) out of bounds for {N}x{N} matrix"
        );
        let mut rows = [0; N];
        let mut cols = [0; N];
        for (i, r) in (0..N).filter(|&r| r != row).enumerate() {
            rows[i] = r;
        }
        for (i, c) in (0..N).filter(|&c| c != col).enumerate() {
            cols[i] = c;
        }

        let det = self.sub_determinant(&rows[..N - 1], &cols[..N - 1]);
        if (row + col) % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Returns the matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        Self::from_fn(|r, c| self.cofactor(r, c))
    }

    /// Returns the adjoint (adjugate) of the matrix: the transpose of its cofactor matrix.
    ///
    /// The adjoint of a 1×1 matrix is `[[1]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.adjoint(), Matrix::from_rows([
    ///     [ 4, -2],
    ///     [-3,  1],
    /// ]));
    /// assert_eq!(Mat1::from_rows([[7]]).adjoint(), Mat1::from_rows([[1]]));
    /// ```
    pub fn adjoint(&self) -> Self {
        Self::from_fn(|r, c| self.cofactor(c, r))
    }

    /// Returns whether the matrix has a non-zero determinant and full rank.
    ///
    /// Both conditions are checked separately: for floating-point matrices close to singular they
    /// can disagree, in which case the matrix does not count as full rank.
    pub fn is_full_rank(&self) -> bool {
        self.determinant() != T::ZERO && self.rank() == N
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Computes the inverse of the matrix, using the default [`Tolerance`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if the magnitude of the determinant is below
    /// [`DEFAULT_EPSILON`](crate::DEFAULT_EPSILON).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse()?, Matrix::from_rows([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    ///
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [0.0, 0.0],
    /// ]);
    /// assert!(singular.inverse().is_err());
    /// # Ok::<(), fixed_linalg::Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(Tolerance::default())
    }

    /// Computes the inverse of the matrix as `adjoint * (1 / determinant)`.
    ///
    /// A [`Tolerance::Relative`] threshold is scaled by `max|a_ij|^N`, the magnitude the
    /// determinant of a matrix with that largest element can reach.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if the determinant is zero or negligible under `tolerance`.
    pub fn inverse_with(&self, tolerance: Tolerance) -> Result<Self> {
        let det = self.determinant();
        let scale = self.max_abs().powi(N as i32);
        let threshold = tolerance.threshold(scale);
        if det == T::ZERO || tolerance.is_negligible(det.to_f64(), scale) {
            log::debug!("cannot invert {N}x{N} matrix: determinant {det:?} is below {threshold:e}");
            return Err(Error::Singular {
                determinant: det.to_f64(),
                tolerance: threshold,
            });
        }

        let inv_det = T::ONE / det;
        Ok(self.adjoint().map(|elem| elem * inv_det))
    }
}

#[cfg(test)]
mod tests {
    use ::approx::assert_relative_eq;

    use crate::{Mat1f, Mat2, Mat2f, Mat3, Mat3f, Mat4};

    use super::*;

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::identity().determinant(), 1.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);
        assert_eq!(Matrix::<i32, 0, 0>::ZERO.determinant(), 1);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let four = Mat4::from_rows([
            [1i64, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(four.determinant(), 30);
    }

    #[test]
    fn minor() {
        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        let m: Mat2<i32> = mat.minor(2, 2);
        assert_eq!(m, Mat2::from_rows([[1, 2], [4, 5]]));
        let m: Mat2<i32> = mat.minor(0, 1);
        assert_eq!(m, Mat2::from_rows([[4, 6], [7, 9]]));

        let rect: Matrix<i32, 1, 2> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]).minor(0, 1);
        assert_eq!(rect, Matrix::from_rows([[4, 6]]));
    }

    #[test]
    #[should_panic]
    fn minor_out_of_bounds() {
        let _: Mat2<i32> = Mat3::<i32>::identity().minor(3, 0);
    }

    #[test]
    fn cofactors() {
        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [1, 2, 3],
            [0, 4, 5],
            [1, 0, 6],
        ]);
        #[rustfmt::skip]
        assert_eq!(mat.cofactor_matrix(), Mat3::from_rows([
            [24,  5, -4],
            [-12, 3,  2],
            [-2, -5,  4],
        ]));
        assert_eq!(mat.adjoint(), mat.cofactor_matrix().transpose());
        assert_eq!(mat * mat.adjoint(), Mat3::identity() * mat.determinant());
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let inv = mat.inverse().unwrap();
        #[rustfmt::skip]
        let expected = Mat3::from_rows([
            [-24.0, 18.0,  5.0],
            [ 20.0, -15.0, -4.0],
            [ -5.0,  4.0,  1.0],
        ]);
        assert_relative_eq!(inv, expected, epsilon = 1e-12);
        assert_relative_eq!(inv * mat, Mat3::identity(), epsilon = 1e-12);

        assert_eq!(Mat1f::from_rows([[4.0]]).inverse(), Ok(Mat1f::from_rows([[0.25]])));
    }

    #[test]
    fn singular() {
        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 0.0, 0.0],
            [5.0, 6.0, 0.0],
        ]);
        match mat.inverse() {
            Err(Error::Singular { determinant, .. }) => assert_eq!(determinant, 0.0),
            other => panic!("expected singular error, got {other:?}"),
        }

        let tiny = Mat2::<f64>::identity() * 1e-6;
        assert!(tiny.inverse().is_err());
        assert_relative_eq!(
            tiny.inverse_with(Tolerance::Relative(1e-9)).unwrap(),
            Mat2::identity() * 1e6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn trace() {
        assert_eq!(Mat3::<u8>::identity().trace(), 3);
        assert_eq!(Mat2::from_rows([[0.5, 9.0], [9.0, 0.25]]).trace(), 0.75);
    }

    #[test]
    fn rank() {
        assert_eq!(Mat3::<i32>::ZERO.rank(), 0);
        assert_eq!(Mat3::<i32>::identity().rank(), 3);

        #[rustfmt::skip]
        let dependent = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 1.0],
        ]);
        assert_eq!(dependent.rank(), 2);

        let wide = Matrix::from_rows([[0, 0, 1, 2], [0, 0, 2, 5]]);
        assert_eq!(wide.rank(), 2);

        let tall = Matrix::from_rows([[1u8], [2], [3]]);
        assert_eq!(tall.rank(), 1);

        let original = dependent;
        let _ = dependent.rank();
        assert_eq!(dependent, original);
    }

    #[test]
    fn rank_tolerance() {
        let tiny = Mat2::from_rows([[1e-10, 0.0], [0.0, 1e-10]]);
        assert_eq!(tiny.rank(), 0);
        assert_eq!(tiny.rank_with(Tolerance::Relative(1e-9)), 2);
    }

    #[test]
    fn full_rank() {
        assert!(Mat2::from_rows([[1, 2], [3, 4]]).is_full_rank());
        assert!(!Mat2::from_rows([[1, 2], [2, 4]]).is_full_rank());
        assert!(Mat3f::identity().is_full_rank());
    }

    #[test]
    fn kronecker() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[0, 5, 1], [6, 7, 1]]);
        let k: Matrix<i32, 4, 6> = a.kronecker(b);
        assert_eq!(k.shape(), (4, 6));
        #[rustfmt::skip]
        assert_eq!(k, Matrix::from_rows([
            [ 0,  5, 1,  0, 10, 2],
            [ 6,  7, 1, 12, 14, 2],
            [ 0, 15, 3,  0, 20, 4],
            [18, 21, 3, 24, 28, 4],
        ]));

        let block: Matrix<i32, 2, 3> = k.slice(
            crate::StaticRange::<2, 4>::new(),
            crate::StaticRange::<3, 6>::new(),
        );
        assert_eq!(block, b * 4);
    }

    #[test]
    fn hadamard() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(a.hadamard(a), Mat2::from_rows([[1, 4], [9, 16]]));
    }
}
