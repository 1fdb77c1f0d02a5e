use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for the numeric element types that can be stored in a [`Matrix`] or [`Tensor3D`].
///
/// This is implemented for all built-in integer types, as well as [`f32`] and [`f64`]. Unlike a
/// general-purpose numeric trait, it does not require [`Neg`][ops::Neg], so unsigned integers are
/// valid element types.
///
/// [`Matrix`]: crate::Matrix
/// [`Tensor3D`]: crate::Tensor3D
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
    /// Whether this is a floating-point type.
    ///
    /// Floating-point elements are displayed with 2 decimal places by default.
    const FRACTIONAL: bool;

    /// Returns whether dividing by `self` must be rejected.
    ///
    /// For integers, this is the case when `self` is exactly zero. For floating-point types, any
    /// value whose magnitude is below [`f32::EPSILON`] (or [`f64::EPSILON`]) is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eigix::*;
    /// assert!(0u8.is_zero_divisor());
    /// assert!(!1i32.is_zero_divisor());
    /// assert!((f32::EPSILON / 2.0).is_zero_divisor());
    /// assert!(!f64::EPSILON.is_zero_divisor());
    /// ```
    fn is_zero_divisor(self) -> bool;
}

macro_rules! int_number {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Number for $types {
                const FRACTIONAL: bool = false;

                #[inline]
                fn is_zero_divisor(self) -> bool {
                    self == 0
                }
            }
        )+
    };
}
int_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_number {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Number for $types {
                const FRACTIONAL: bool = true;

                #[inline]
                fn is_zero_divisor(self) -> bool {
                    // NaN compares false here and is let through, like any other non-zero divisor.
                    self.abs() < $types::EPSILON
                }
            }
        )+
    };
}
float_number!(f32, f64);

/// Checks a scalar divisor before an element-wise division is performed.
pub(crate) fn check_divisor<T: Number>(scalar: T) -> crate::Result<()> {
    if scalar.is_zero_divisor() {
        log::trace!("rejecting zero or near-zero divisor");
        return Err(crate::Error::DivisionByZero);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisors() {
        assert!(0i64.is_zero_divisor());
        assert!(0usize.is_zero_divisor());
        assert!(!(-1i8).is_zero_divisor());

        assert!(0.0f32.is_zero_divisor());
        assert!((-0.0f64).is_zero_divisor());
        assert!((f64::EPSILON * 0.5).is_zero_divisor());
        assert!((-f32::EPSILON * 0.5).is_zero_divisor());
        assert!(!f32::EPSILON.is_zero_divisor());
        assert!(!(-1.0e-3f32).is_zero_divisor());
    }

    #[test]
    fn check() {
        assert_eq!(check_divisor(0u32), Err(crate::Error::DivisionByZero));
        assert_eq!(check_divisor(2u32), Ok(()));
        assert_eq!(check_divisor(1e-20f64), Err(crate::Error::DivisionByZero));
    }
}
