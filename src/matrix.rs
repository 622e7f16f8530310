use std::{any, array, collections::LinkedList, fmt, mem, slice};

use crate::{error::check_size, Bounded, Error, One, Result, Scalar, Selector, Vector, Zero};

mod algo;
mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// Matrices can be built in several ways:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] computes each element from its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal, and [`Matrix::identity`]
///   returns the identity matrix.
/// - Runtime-sized sources are accepted by [`Matrix::try_from_rows`] (a list of rows) and the
///   [`TryFrom`] impls (a flat, row-major list of elements).
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use fixed_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing with a single `usize` addresses the row-major backing store directly:
///
/// ```
/// # use fixed_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1, 2],
///     [3, 4, 5],
/// ]);
/// assert_eq!(mat[4], 4);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead, and [`Matrix::try_get`] returns a [`Result`]:
///
/// ```
/// # use fixed_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// assert!(mat.try_get(1, 0).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from `R` rows (arrays or vectors).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Builds a matrix from `C` columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Builds a matrix by calling `cb` with every `(row, col)` position, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Creates a matrix from an iterator yielding exactly `R * C` elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the iterator yields fewer or more than `R * C` elements.
    /// At most `R * C + 1` elements are consumed, so for an oversized source `found` is
    /// `R * C + 1`.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Copy,
    {
        let elems: Vec<T> = iter.into_iter().take(R * C + 1).collect();
        if elems.len() != R * C {
            return Err(Error::SizeMismatch {
                expected: R * C,
                found: elems.len(),
            });
        }
        Ok(Self::from_fn(|row, col| elems[row * C + col]))
    }

    /// Returns a matrix with `f` applied to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose: row `i` of the result is column `i` of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row >= R` or `col >= C`.
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T> {
        let row = Bounded::<R>::new(row)?;
        let col = Bounded::<C>::new(col)?;
        Ok(&self[(row, col)])
    }

    /// Returns row `row` as a 1×`C` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get_row(1), Matrix::from_rows([[3, 4, 5]]));
    /// assert_eq!(mat.get_col(2), Matrix::from_rows([[2], [5]]));
    /// ```
    pub fn get_row(&self, row: usize) -> Matrix<T, 1, C>
    where
        T: Copy,
    {
        Matrix([self.0[row]])
    }

    /// Returns column `col` as an `R`×1 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn get_col(&self, col: usize) -> Matrix<T, R, 1>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, _| self.0[row][col])
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from(self.0[row])
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns the submatrix made of the rows selected by `rows` and the columns selected by
    /// `cols`.
    ///
    /// The output dimensions are usually inferred; they must equal the lengths of the two ranges.
    /// Both the dimensions and the range bounds are checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::<usize, 4, 4>::from_fn(|row, col| row * 10 + col);
    /// let corners: Matrix<usize, 2, 2> = mat.slice(
    ///     StaticRange::<0, 4, 3>::new(),
    ///     StaticRange::<0, 4, 3>::new(),
    /// );
    /// assert_eq!(corners, Matrix::from_rows([
    ///     [ 0,  3],
    ///     [30, 33],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let mat = Mat2::<i32>::ZERO;
    /// let (rows, cols) = (StaticRange::<0, 1>::new(), StaticRange::<0, 3>::new());
    /// let _: Matrix<i32, 1, 3> = mat.slice(rows, cols);
    /// ```
    pub fn slice<SR, SC, const RS: usize, const CS: usize>(
        &self,
        _rows: SR,
        _cols: SC,
    ) -> Matrix<T, RS, CS>
    where
        SR: Selector,
        SC: Selector,
        T: Copy,
    {
        SR::check_within::<R>();
        SC::check_within::<C>();
        const {
            assert!(
                SR::LEN == RS && SC::LEN == CS,
                "slice dimensions do not match the range lengths"
            )
        };
        Matrix::from_fn(|row, col| self.0[SR::index(row)][SC::index(col)])
    }

    /// Returns a reference to the rows of this matrix.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Converts this matrix into an array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns the elements in row-major order as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements in row-major order as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns the raw bytes of the matrix, in row-major order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::bytes_of(self)
    }

    /// Returns an iterator over the elements, in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements, in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the number of elements (`R * C`).
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    /// Returns the dimensions as a `(rows, columns)` tuple.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Returns the number of rows (`R`).
    #[inline]
    pub const fn row_size(&self) -> usize {
        R
    }

    /// Returns the number of columns (`C`).
    #[inline]
    pub const fn col_size(&self) -> usize {
        C
    }

    /// Returns the size of the element storage in bytes.
    #[inline]
    pub const fn byte_size(&self) -> usize {
        R * C * mem::size_of::<T>()
    }

    /// Returns the name of this matrix type.
    pub fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }

    /// Returns the name of the element type.
    pub fn value_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from a list of rows, converting each element to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if there are not exactly `R` rows, or if any row does not
    /// have exactly `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Mat2::<f32>::try_from_rows(&[vec![1, 2], vec![3, 4]])?;
    /// assert_eq!(mat, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    ///
    /// assert!(Mat2::<f32>::try_from_rows(&[vec![1, 2]]).is_err());
    /// assert!(Mat2::<f32>::try_from_rows(&[vec![1, 2], vec![3]]).is_err());
    /// # Ok::<(), fixed_linalg::Error>(())
    /// ```
    pub fn try_from_rows<U: Scalar>(rows: &[Vec<U>]) -> Result<Self> {
        if rows.len() != R {
            return Err(Error::SizeMismatch {
                expected: R,
                found: rows.len(),
            });
        }
        let mut out = [[T::ZERO; C]; R];
        for (dest, src) in out.iter_mut().zip(rows) {
            *dest = Vector::<T, C>::try_from(src.as_slice())?.into_array();
        }
        Ok(Self(out))
    }

    /// Converts each element to `U`, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([[1.7f64, -0.2]]).cast::<i32>();
    /// assert_eq!(mat, Matrix::from_rows([[1, 0]]));
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Matrix<U, R, C> {
        self.map(Scalar::cast)
    }

    /// Returns the largest element magnitude, as an [`f64`].
    pub(crate) fn max_abs(&self) -> f64 {
        self.iter()
            .map(|elem| elem.to_f64().abs())
            .fold(0.0, f64::max)
    }
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Mat2::<u8>::identity(), Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for Vec<T> {
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.as_slice().to_vec()
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for LinkedList<T> {
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.iter().copied().collect()
    }
}

impl<T: Scalar, U: Scalar, const R: usize, const C: usize> TryFrom<&[U]> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(elems: &[U]) -> Result<Self> {
        check_size(R * C, elems.len())?;
        Self::try_from_iter(elems.iter().map(|&elem| elem.cast()))
    }
}

impl<T: Scalar, U: Scalar, const R: usize, const C: usize> TryFrom<Vec<U>> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(elems: Vec<U>) -> Result<Self> {
        Self::try_from(elems.as_slice())
    }
}

impl<T: Scalar, U: Scalar, const R: usize, const C: usize> TryFrom<LinkedList<U>>
    for Matrix<T, R, C>
{
    type Error = Error;

    fn try_from(elems: LinkedList<U>) -> Result<Self> {
        check_size(R * C, elems.len())?;
        Self::try_from_iter(elems.into_iter().map(Scalar::cast))
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}
