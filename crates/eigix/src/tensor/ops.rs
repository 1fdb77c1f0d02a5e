use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Tensor3D};

impl<T, const D: usize, const R: usize, const C: usize> Index<(usize, usize, usize)>
    for Tensor3D<T, D, R, C>
{
    type Output = T;

    #[inline]
    fn index(&self, (depth, row, col): (usize, usize, usize)) -> &Self::Output {
        match self.get(depth, row, col) {
            Some(elem) => elem,
            None => panic!(
                "tensor index ({}, {}, {}) out of range for {}x{}x{} tensor",
                depth, row, col, D, R, C
            ),
        }
    }
}

impl<T, const D: usize, const R: usize, const C: usize> IndexMut<(usize, usize, usize)>
    for Tensor3D<T, D, R, C>
{
    #[inline]
    fn index_mut(&mut self, (depth, row, col): (usize, usize, usize)) -> &mut Self::Output {
        match self.get_mut(depth, row, col) {
            Some(elem) => elem,
            None => panic!(
                "tensor index ({}, {}, {}) out of range for {}x{}x{} tensor",
                depth, row, col, D, R, C
            ),
        }
    }
}

impl<T, U, const D: usize, const R: usize, const C: usize> PartialEq<Tensor3D<U, D, R, C>>
    for Tensor3D<T, D, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Tensor3D<U, D, R, C>) -> bool {
        self.as_slices().eq(other.as_slices())
    }
}

impl<T, const D: usize, const R: usize, const C: usize> Eq for Tensor3D<T, D, R, C> where T: Eq {}

impl<T, const D: usize, const R: usize, const C: usize> AbsDiffEq for Tensor3D<T, D, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const D: usize, const R: usize, const C: usize> RelativeEq for Tensor3D<T, D, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const D: usize, const R: usize, const C: usize> UlpsEq for Tensor3D<T, D, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T, const D: usize, const R: usize, const C: usize> Add<Tensor3D<T, D, R, C>>
    for Tensor3D<T, D, R, C>
where
    T: Number,
{
    type Output = Tensor3D<T, D, R, C>;

    fn add(self, rhs: Tensor3D<T, D, R, C>) -> Self::Output {
        Tensor3D::from_fn(|d, r, c| self[(d, r, c)] + rhs[(d, r, c)])
    }
}

impl<T, const D: usize, const R: usize, const C: usize> Sub<Tensor3D<T, D, R, C>>
    for Tensor3D<T, D, R, C>
where
    T: Number,
{
    type Output = Tensor3D<T, D, R, C>;

    fn sub(self, rhs: Tensor3D<T, D, R, C>) -> Self::Output {
        Tensor3D::from_fn(|d, r, c| self[(d, r, c)] - rhs[(d, r, c)])
    }
}

/// Tensor * Scalar.
impl<T, const D: usize, const R: usize, const C: usize> Mul<T> for Tensor3D<T, D, R, C>
where
    T: Number,
{
    type Output = Tensor3D<T, D, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

// Scalar * Tensor. Coherence rules require one impl per concrete scalar type.
macro_rules! scalar_mul_tensor {
    ($($types:ty),+) => {
        $(
            impl<const D: usize, const R: usize, const C: usize> Mul<Tensor3D<$types, D, R, C>> for $types {
                type Output = Tensor3D<$types, D, R, C>;

                #[inline]
                fn mul(self, rhs: Tensor3D<$types, D, R, C>) -> Self::Output {
                    rhs.mul_scalar(self)
                }
            }
        )+
    };
}
scalar_mul_tensor!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Tensor / Scalar.
///
/// # Panics
///
/// Panics if `rhs` is rejected as a divisor (see [`Number::is_zero_divisor`]). Use
/// [`Tensor3D::div_scalar`] to handle this case without panicking.
impl<T, const D: usize, const R: usize, const C: usize> Div<T> for Tensor3D<T, D, R, C>
where
    T: Number,
{
    type Output = Tensor3D<T, D, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        match self.div_scalar(rhs) {
            Ok(tensor) => tensor,
            Err(_) => panic!("attempt to divide a tensor by zero"),
        }
    }
}
