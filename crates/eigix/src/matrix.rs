use std::{array, fmt};

use crate::{display, traits::check_divisor, Error, Number, One, Result, Zero};

mod ops;

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

/// A column vector with `N` rows, represented as an `N`x1 matrix.
pub type Column<T, const N: usize> = Matrix<T, N, 1>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The dimensions are part of the type: matrices can only be added to or subtracted from
/// matrices of the same shape, and an `R`x`C` matrix can only be multiplied with a `C`x`P`
/// matrix. Violating these rules is a compile error.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from a nested array of rows.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::try_from_rows`] copies data whose shape is only known at runtime.
/// - [`Matrix::populate`] overwrites every element of an existing matrix from an iterator.
/// - [`Matrix::ZERO`] (also the [`Default`]) has every element set to 0, and
///   [`Matrix::IDENTITY`] is a square matrix with 1 on its diagonal.
///
/// # Element Access
///
/// [`Matrix::element`] and [`Matrix::set_element`] are checked accessors returning
/// [`Error::OutOfRange`] for invalid positions. [`Matrix::get`] and [`Matrix::get_mut`] return
/// [`Option`]s instead.
///
/// [`Matrix`] also implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indexing out of
/// bounds panics, just like it does for slices.
///
/// ```
/// # use eigix::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.element(0, 1), Ok(1));
/// assert!(mat.element(1, 0).is_err());
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

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows.
    pub const ROWS: usize = R;
    /// The number of columns.
    pub const COLS: usize = C;
    /// The total number of elements (`R * C`).
    pub const LEN: usize = R * C;

    /// Returns the number of rows of this matrix.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns of this matrix.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.rows(), 2);
    /// assert_eq!(mat.cols(), 3);
    /// assert_eq!(mat[(1, 0)], 3);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are created in row-major order. This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
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

    /// Copies the elements of a runtime-shaped list of rows into a [`Matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if there aren't exactly `R` rows or if any row does not
    /// have exactly `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let data = vec![vec![1, 2], vec![3, 4]];
    /// let mat = Mat2::<i32>::try_from_rows(&data).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    ///
    /// let ragged = vec![vec![1, 2], vec![3]];
    /// assert!(Mat2::<i32>::try_from_rows(&ragged).is_err());
    /// ```
    pub fn try_from_rows<S>(rows: &[S]) -> Result<Self>
    where
        S: AsRef<[T]>,
        T: Copy,
    {
        if rows.len() != R {
            let cols = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(Error::ShapeMismatch {
                expected: vec![R, C],
                found: vec![rows.len(), cols],
            });
        }
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != C) {
            return Err(Error::ShapeMismatch {
                expected: vec![R, C],
                found: vec![R, row.as_ref().len()],
            });
        }

        Ok(Self::from_fn(|row, col| rows[row].as_ref()[col]))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
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
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
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
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= R` or `col >= C`.
    pub fn element(&self, row: usize, col: usize) -> Result<T>
    where
        T: Copy,
    {
        self.get(row, col)
            .copied()
            .ok_or_else(|| Self::out_of_range(row, col))
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= R` or `col >= C`. The matrix is left unchanged in
    /// that case.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        match self.get_mut(row, col) {
            Some(elem) => {
                *elem = value;
                Ok(())
            }
            None => Err(Self::out_of_range(row, col)),
        }
    }

    /// Overwrites every element with the values yielded by `values`, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentCountMismatch`] if `values` does not yield exactly `R * C` values.
    /// The matrix is only modified if the count is correct. At most `R * C + 1` values are
    /// consumed, so the reported `actual` count is capped at that number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let mut mat = Mat2::<i32>::ZERO;
    /// mat.populate([1, 2, 3, 4]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]));
    ///
    /// assert!(mat.populate([1, 2, 3]).is_err());
    /// assert_eq!(mat[(1, 1)], 4);
    /// ```
    pub fn populate<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        // One extra value is enough to detect an oversized (or endless) input.
        let values = values
            .into_iter()
            .take(Self::LEN + 1)
            .collect::<Vec<_>>();
        if values.len() != Self::LEN {
            return Err(Error::ArgumentCountMismatch {
                expected: Self::LEN,
                actual: values.len(),
            });
        }

        for (elem, value) in self.0.iter_mut().flatten().zip(values) {
            *elem = value;
        }
        Ok(())
    }

    /// Returns an iterator over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flatten()
    }

    /// Returns the rows of this matrix.
    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns all elements as a flat slice in row-major order.
    #[inline]
    pub fn as_flattened(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Consumes the matrix and returns its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    fn out_of_range(row: usize, col: usize) -> Error {
        Error::OutOfRange {
            index: vec![row, col],
            shape: vec![R, C],
        }
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any
    /// compatible matrix with it returns that matrix unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let vec = Matrix::from_rows([[1], [2], [3]]);
    /// assert_eq!(Mat3::IDENTITY * vec, vec);
    /// ```
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Divides every element by `scalar`, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `scalar` is zero, or, for floating-point elements, if
    /// its magnitude is smaller than the type's machine epsilon. The divisor is checked once,
    /// before any element is computed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let mat = Matrix::from_rows([[2.0, 4.0]]);
    /// assert_eq!(mat.div_scalar(2.0), Ok(Matrix::from_rows([[1.0, 2.0]])));
    /// assert_eq!(mat.div_scalar(0.0), Err(Error::DivisionByZero));
    /// ```
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        check_divisor(scalar)?;
        Ok(self.map(|elem| elem / scalar))
    }
}

#[cfg(feature = "rayon")]
impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
    T: Number + Send + Sync,
{
    /// Computes `self * rhs`, distributing the output rows across the rayon thread pool.
    ///
    /// Every output element is accumulated in the same order as the sequential product, so the
    /// result is identical to `self * rhs`, including for floating-point elements.
    pub fn par_mul<const P: usize>(&self, rhs: &Matrix<T, C, P>) -> Matrix<T, R, P> {
        use rayon::prelude::*;

        let mut out = Matrix::<T, R, P>::ZERO;
        out.0[..].par_iter_mut().enumerate().for_each(|(i, row)| {
            for (j, elem) in row.iter_mut().enumerate() {
                *elem = ops::dot(self, rhs, i, j);
            }
        });
        out
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps each row on a single line, even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

/// Renders the matrix as a header line followed by one bracketed line per row.
///
/// Elements are right-aligned in a field of 8 characters, and floating-point elements are printed
/// with 2 decimal places. A width or precision passed in the format string (eg. `{:5.1}`) is used
/// instead.
///
/// # Examples
///
/// ```
/// # use eigix::*;
/// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(mat.to_string(), "\
/// Matrix (2x2):
/// [       1,        2 ]
/// [       3,        4 ]
/// ");
/// ```
impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: Number + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({}x{}):", R, C)?;
        for row in &self.0 {
            display::write_row(f, "", row)?;
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<i64, R, C> {
        Matrix::from_fn(|_, _| rng.i64(-1000..1000))
    }

    #[test]
    fn shape() {
        let mat = Matrix::<u8, 2, 5>::ZERO;
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 5);
        assert_eq!(Matrix::<u8, 2, 5>::LEN, 10);
        assert_eq!(Mat3f::ROWS, 3);
        assert_eq!(Column::<i32, 7>::COLS, 1);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Mat2::<i32>::default(), Mat2::ZERO);
        assert_eq!(Mat3f::default(), Mat3f::ZERO);
        assert!(Matrix::<u16, 3, 2>::default().iter().all(|&e| e == 0));
    }

    #[test]
    fn populate_row_major() {
        let mut mat = Mat2::<i32>::ZERO;
        mat.populate([1, 2, 3, 4]).unwrap();
        assert_eq!(mat.element(0, 0), Ok(1));
        assert_eq!(mat.element(0, 1), Ok(2));
        assert_eq!(mat.element(1, 0), Ok(3));
        assert_eq!(mat.element(1, 1), Ok(4));
    }

    #[test]
    fn populate_arity() {
        let mut mat = Mat2::<i32>::ZERO;
        assert_eq!(
            mat.populate([1, 2, 3]),
            Err(Error::ArgumentCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            mat.populate(1..=5),
            Err(Error::ArgumentCountMismatch {
                expected: 4,
                actual: 5
            })
        );
        // Failed calls leave the matrix untouched.
        assert_eq!(mat, Mat2::ZERO);
    }

    #[test]
    fn populate_endless() {
        let mut mat = Matrix::<u64, 3, 2>::ZERO;
        assert_eq!(
            mat.populate(0..),
            Err(Error::ArgumentCountMismatch {
                expected: 6,
                actual: 7
            })
        );
        assert_eq!(mat, Matrix::ZERO);

        mat.populate((1..).take(6)).unwrap();
        assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4], [5, 6]]));
    }

    #[rustfmt::skip]
    #[test]
    fn identity_const() {
        const ID: Mat3<i32> = Matrix::IDENTITY;
        assert_eq!(ID, Matrix::from_rows([
            [1, 0, 0],
            [0, 1, 0],
            [0, 0, 1],
        ]));
        assert_eq!(Mat2f::IDENTITY, Matrix::from_fn(|r, c| if r == c { 1.0 } else { 0.0 }));
        assert_eq!(Matrix::<u8, 1, 1>::IDENTITY.element(0, 0), Ok(1));
    }

    #[test]
    fn out_of_range() {
        let mut mat = Matrix::<i32, 2, 3>::ZERO;
        assert_eq!(
            mat.element(2, 0),
            Err(Error::OutOfRange {
                index: vec![2, 0],
                shape: vec![2, 3]
            })
        );
        assert!(mat.element(0, 3).is_err());
        assert!(mat.set_element(0, 3, 1).is_err());
        assert!(mat.get(5, 5).is_none());
        assert_eq!(mat, Matrix::ZERO);

        mat.set_element(1, 2, 9).unwrap();
        assert_eq!(mat[(1, 2)], 9);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics() {
        let mat = Mat2::<i32>::ZERO;
        let _ = mat[(0, 2)];
    }

    #[test]
    fn try_from_rows() {
        let err = Matrix::<i32, 2, 2>::try_from_rows(&[vec![1, 2]]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: vec![2, 2],
                found: vec![1, 2]
            }
        );

        let err = Matrix::<i32, 2, 2>::try_from_rows(&[vec![1, 2], vec![3, 4, 5]]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: vec![2, 2],
                found: vec![2, 3]
            }
        );
    }

    #[rustfmt::skip]
    #[test]
    fn identity_mul() {
        let vec = Matrix::from_rows([[1], [2], [3], [4]]);
        assert_eq!(Mat4::IDENTITY * vec, vec);

        let mut mat = Mat4::<i32>::ZERO;
        mat.populate([
            1, 0, 0, 0,
            0, 1, 0, 0,
            0, 0, 1, 0,
            0, 0, 0, 1,
        ]).unwrap();
        assert_eq!(mat, Mat4::IDENTITY);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c: Matrix<i32, 4, 3> = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(c[(3, 0)], 7 * 9 + 8 * 12);
    }

    #[test]
    fn product_definition() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..20 {
            let a = random_matrix::<3, 5>(&mut rng);
            let b = random_matrix::<5, 2>(&mut rng);
            let c = a * b;
            assert_eq!((c.rows(), c.cols()), (3, 2));
            for i in 0..3 {
                for j in 0..2 {
                    let sum: i64 = (0..5).map(|k| a[(i, k)] * b[(k, j)]).sum();
                    assert_eq!(c.element(i, j), Ok(sum));
                }
            }
        }
    }

    #[test]
    fn add_sub() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..20 {
            let m = random_matrix::<4, 3>(&mut rng);
            let n = random_matrix::<4, 3>(&mut rng);
            assert_eq!(m + Matrix::ZERO, m);
            assert_eq!(m - m, Matrix::ZERO);
            assert_eq!((m + n) - n, m);
        }

        let a = Matrix::from_rows([[1u8, 2], [3, 4]]);
        let b = Matrix::from_rows([[1u8, 1], [1, 1]]);
        assert_eq!(a - b, Matrix::from_rows([[0, 1], [2, 3]]));
        assert_eq!(a + b, Matrix::from_rows([[2, 3], [4, 5]]));
    }

    #[test]
    fn division_by_zero() {
        let ints = Matrix::from_rows([[4, 8]]);
        assert_eq!(ints.div_scalar(0), Err(Error::DivisionByZero));
        assert_eq!(ints.div_scalar(4), Ok(Matrix::from_rows([[1, 2]])));

        let floats = Mat2f::IDENTITY;
        assert_eq!(floats.div_scalar(0.0), Err(Error::DivisionByZero));
        assert_eq!(floats.div_scalar(f32::EPSILON / 2.0), Err(Error::DivisionByZero));
        assert_eq!(floats.div_scalar(-f32::EPSILON / 2.0), Err(Error::DivisionByZero));
        assert!(floats.div_scalar(f32::EPSILON).is_ok());
    }

    #[test]
    #[should_panic(expected = "divide a matrix by zero")]
    fn div_operator_panics() {
        let _ = Mat2::<u32>::IDENTITY / 0;
    }

    #[test]
    fn div_round_trip() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mat = Matrix::<f64, 3, 3>::from_fn(|_, _| rng.f64() * 200.0 - 100.0);
        let scale = Matrix::<f64, 3, 3>::IDENTITY.map(|e| e * 7.3);
        let round_trip = mat.div_scalar(7.3).unwrap() * scale;
        assert_relative_eq!(round_trip, mat, max_relative = 1e-12);
        assert_abs_diff_eq!(mat / 7.3 * scale, mat, epsilon = 1e-10);
    }

    #[test]
    fn transpose() {
        let mat = Matrix::from_rows([[1, 2, 3]]);
        assert_eq!(mat.transpose(), Matrix::from_rows([[1], [2], [3]]));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn display() {
        let vec = Matrix::from_rows([[1], [2], [3], [4]]);
        assert_eq!(
            vec.to_string(),
            "Matrix (4x1):\n[       1 ]\n[       2 ]\n[       3 ]\n[       4 ]\n"
        );

        let mat = Matrix::from_rows([[1.0, -2.5], [0.3, 100.0]]);
        let default = "Matrix (2x2):\n[    1.00,    -2.50 ]\n[    0.30,   100.00 ]\n";
        let narrow = "Matrix (2x2):\n[   1.0,   -2.5 ]\n[   0.3,  100.0 ]\n";
        assert_eq!(mat.to_string(), default);
        assert_eq!(format!("{mat:6.1}"), narrow);

        // Formatting parameters only apply to the matrix they were passed for.
        assert_eq!(format!("{mat:6.1}{mat}"), format!("{narrow}{default}"));
    }

    #[test]
    fn pod() {
        let mat = Matrix::from_rows([[1u32, 2], [3, 4]]);
        let bytes: &[u8] = bytemuck::bytes_of(&mat);
        assert_eq!(bytes.len(), 16);
        assert_eq!(mat.as_flattened(), &[1, 2, 3, 4]);
        assert_eq!(bytemuck::cast::<_, [u32; 4]>(mat), [1, 2, 3, 4]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn par_mul() {
        let mut rng = fastrand::Rng::with_seed(9);
        let a = Matrix::<f64, 16, 8>::from_fn(|_, _| rng.f64());
        let b = Matrix::<f64, 8, 4>::from_fn(|_, _| rng.f64());
        assert_eq!(a.par_mul(&b), a * b);
    }
}
