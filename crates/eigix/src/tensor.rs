use std::{array, fmt};

use crate::{display, traits::check_divisor, Error, Number, Result, Zero};

mod ops;

/// A 3-dimensional tensor made up of `D` depth slices with `R` rows and `C` columns each.
///
/// Like [`Matrix`][crate::Matrix], the shape is part of the type, so element-wise operations
/// between tensors of different shapes do not compile. [`Tensor3D`] supports element-wise addition
/// and subtraction, as well as multiplication and division by a scalar. There is intentionally no
/// tensor-by-tensor product.
///
/// Scalar multiplication works with the scalar on either side:
///
/// ```
/// # use eigix::*;
/// let t = Tensor3D::from_slices([[[1i32, 2]], [[3, 4]]]);
/// assert_eq!(t * 3, 3 * t);
/// assert_eq!((t * 3).element(1, 0, 1), Ok(12));
/// ```
///
/// Elements are addressed as `(depth, row, col)`, through the checked [`Tensor3D::element`] and
/// [`Tensor3D::set_element`] accessors, through [`Tensor3D::get`] and [`Tensor3D::get_mut`], or
/// by indexing with a tuple (which panics when out of bounds).
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Tensor3D<T, const D: usize, const R: usize, const C: usize>([[[T; C]; R]; D]);

unsafe impl<T: bytemuck::Zeroable, const D: usize, const R: usize, const C: usize> bytemuck::Zeroable
    for Tensor3D<T, D, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const D: usize, const R: usize, const C: usize> bytemuck::Pod
    for Tensor3D<T, D, R, C>
{
}

impl<T, const D: usize, const R: usize, const C: usize> Tensor3D<T, D, R, C> {
    /// The number of depth slices.
    pub const DEPTH: usize = D;
    /// The number of rows in each slice.
    pub const ROWS: usize = R;
    /// The number of columns in each slice.
    pub const COLS: usize = C;
    /// The total number of elements (`D * R * C`).
    pub const LEN: usize = D * R * C;

    /// Returns the number of depth slices of this tensor.
    #[inline]
    pub const fn depth(&self) -> usize {
        D
    }

    /// Returns the number of rows in each slice of this tensor.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns in each slice of this tensor.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Creates a [`Tensor3D`] from an array of depth slices, each given as an array of rows.
    #[inline]
    pub const fn from_slices(slices: [[[T; C]; R]; D]) -> Self {
        Self(slices)
    }

    /// Creates a [`Tensor3D`] by invoking a closure with the `(depth, row, col)` position of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let t = Tensor3D::<_, 2, 2, 2>::from_fn(|d, r, c| d * 100 + r * 10 + c);
    /// assert_eq!(t[(1, 0, 1)], 101);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        Self(array::from_fn(|depth| {
            array::from_fn(|row| array::from_fn(|col| cb(depth, row, col)))
        }))
    }

    /// Copies runtime-shaped data (a list of slices, each a list of rows) into a [`Tensor3D`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the data does not have exactly `D` slices of `R` rows
    /// with `C` elements each.
    pub fn try_from_slices<S, Row>(slices: &[S]) -> Result<Self>
    where
        S: AsRef<[Row]>,
        Row: AsRef<[T]>,
        T: Copy,
    {
        let mismatch = |found: [usize; 3]| Error::ShapeMismatch {
            expected: vec![D, R, C],
            found: found.to_vec(),
        };

        if slices.len() != D {
            return Err(mismatch([slices.len(), R, C]));
        }
        for slice in slices {
            let rows = slice.as_ref();
            if rows.len() != R {
                return Err(mismatch([D, rows.len(), C]));
            }
            if let Some(row) = rows.iter().find(|row| row.as_ref().len() != C) {
                return Err(mismatch([D, R, row.as_ref().len()]));
            }
        }

        Ok(Self::from_fn(|depth, row, col| {
            slices[depth].as_ref()[row].as_ref()[col]
        }))
    }

    /// Applies a closure to each element, returning a new tensor.
    pub fn map<F, U>(self, mut f: F) -> Tensor3D<U, D, R, C>
    where
        F: FnMut(T) -> U,
    {
        Tensor3D(self.0.map(|slice| slice.map(|row| row.map(|v| f(v)))))
    }

    /// Returns a reference to the element at `(depth, row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, depth: usize, row: usize, col: usize) -> Option<&T> {
        self.0
            .get(depth)
            .and_then(|slice| slice.get(row))
            .and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(depth, row, col)`, or [`None`] if out of
    /// bounds.
    pub fn get_mut(&mut self, depth: usize, row: usize, col: usize) -> Option<&mut T> {
        self.0
            .get_mut(depth)
            .and_then(|slice| slice.get_mut(row))
            .and_then(|r| r.get_mut(col))
    }

    /// Returns the element at `(depth, row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if any index is not smaller than the corresponding dimension.
    pub fn element(&self, depth: usize, row: usize, col: usize) -> Result<T>
    where
        T: Copy,
    {
        self.get(depth, row, col)
            .copied()
            .ok_or_else(|| Self::out_of_range(depth, row, col))
    }

    /// Replaces the element at `(depth, row, col)` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if any index is not smaller than the corresponding dimension.
    pub fn set_element(&mut self, depth: usize, row: usize, col: usize, value: T) -> Result<()> {
        let elem = self
            .get_mut(depth, row, col)
            .ok_or_else(|| Self::out_of_range(depth, row, col))?;
        *elem = value;
        Ok(())
    }

    /// Overwrites every element with the values yielded by `values`.
    ///
    /// Values are assigned slice by slice, and row by row within each slice (the column index
    /// varies fastest).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentCountMismatch`] if `values` does not yield exactly `D * R * C`
    /// values. The tensor is only modified if the count is correct. At most `D * R * C + 1` values are
    /// consumed, so the reported `actual` count is capped at that number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// let mut t = Tensor3D::<i32, 1, 1, 1>::ZERO;
    /// t.populate([5]).unwrap();
    /// assert_eq!(t.element(0, 0, 0), Ok(5));
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

        for (elem, value) in self.0.iter_mut().flatten().flatten().zip(values) {
            *elem = value;
        }
        Ok(())
    }

    /// Returns an iterator over all elements, in the same order used by
    /// [`populate`](Self::populate).
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flatten().flatten()
    }

    /// Returns the depth slices of this tensor.
    #[inline]
    pub fn as_slices(&self) -> &[[[T; C]; R]; D] {
        &self.0
    }

    /// Consumes the tensor and returns its depth slices.
    #[inline]
    pub fn into_slices(self) -> [[[T; C]; R]; D] {
        self.0
    }

    fn out_of_range(depth: usize, row: usize, col: usize) -> Error {
        Error::OutOfRange {
            index: vec![depth, row, col],
            shape: vec![D, R, C],
        }
    }
}

impl<T: Zero + Copy, const D: usize, const R: usize, const C: usize> Tensor3D<T, D, R, C> {
    /// A tensor with every element set to 0.
    pub const ZERO: Self = Self([[[T::ZERO; C]; R]; D]);
}

impl<T: Number, const D: usize, const R: usize, const C: usize> Tensor3D<T, D, R, C> {
    /// Multiplies every element by `scalar`, returning a new tensor.
    ///
    /// This is the same as `self * scalar` and `scalar * self`.
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|elem| elem * scalar)
    }

    /// Divides every element by `scalar`, returning a new tensor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `scalar` is zero, or, for floating-point elements, if
    /// its magnitude is smaller than the type's machine epsilon. The divisor is checked once,
    /// before any element is computed.
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        check_divisor(scalar)?;
        Ok(self.map(|elem| elem / scalar))
    }
}

impl<T, const D: usize, const R: usize, const C: usize> fmt::Debug for Tensor3D<T, D, R, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders the tensor as a header line followed by one labeled block per depth slice.
///
/// Blocks are separated by an empty line. Rows are formatted like the rows of a
/// [`Matrix`][crate::Matrix], indented by two spaces.
///
/// # Examples
///
/// ```
/// # use eigix::*;
/// let t = Tensor3D::from_slices([[[1.0, 2.0]], [[3.0, 4.0]]]);
/// assert_eq!(t.to_string(), "\
/// Tensor3D (2x1x2):
/// Depth Slice [0]:
///   [    1.00,     2.00 ]
///
/// Depth Slice [1]:
///   [    3.00,     4.00 ]
/// ");
/// ```
impl<T, const D: usize, const R: usize, const C: usize> fmt::Display for Tensor3D<T, D, R, C>
where
    T: Number + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tensor3D ({}x{}x{}):", D, R, C)?;
        for (depth, slice) in self.0.iter().enumerate() {
            if depth != 0 {
                writeln!(f)?;
            }
            writeln!(f, "Depth Slice [{depth}]:")?;
            for row in slice {
                display::write_row(f, "  ", row)?;
            }
        }
        Ok(())
    }
}

impl<T, const D: usize, const R: usize, const C: usize> Default for Tensor3D<T, D, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _, _| T::default())
    }
}

impl<T, const D: usize, const R: usize, const C: usize> From<[[[T; C]; R]; D]>
    for Tensor3D<T, D, R, C>
{
    #[inline]
    fn from(slices: [[[T; C]; R]; D]) -> Self {
        Self(slices)
    }
}
