//! Fixed-size dense matrices and 3D tensors.
//!
//! This library provides two containers whose dimensions are part of their type:
//!
//! - [`Matrix<T, R, C>`][Matrix], a matrix with `R` rows and `C` columns.
//! - [`Tensor3D<T, D, R, C>`][Tensor3D], a stack of `D` slices of `R` rows and `C` columns each.
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are const generic parameters. Adding, subtracting or multiplying containers of
//!   incompatible shapes is rejected at compile time, not at runtime.
//! - No dynamically-sized containers, no arbitrary-rank tensors, no sparse storage.
//! - Be generic over the element type (all built-in integer and floating-point types, see
//!   [`Number`]), but don't support non-[`Copy`] numeric types.
//! - Operators never mutate their operands and always return a new container.
//!
//! # Errors
//!
//! Operations that can fail at runtime (checked element access, `populate`, scalar division)
//! return [`Result`]s with an [`enum@Error`]. The [`Div`][std::ops::Div] operator implementations
//! panic instead, like integer division does.
//!
//! # Cargo Features
//!
//! * `rayon`: enables [`Matrix::par_mul`], which computes matrix products on the rayon thread
//!   pool while producing results identical to the sequential product.

use log::LevelFilter;

mod display;
mod error;
mod matrix;
mod tensor;
mod traits;

pub use error::*;
pub use matrix::*;
pub use tensor::*;
pub use traits::*;

/// Field width used when displaying container elements.
const DISPLAY_WIDTH: usize = 8;
/// Number of decimal places used when displaying floating-point elements.
const DISPLAY_PRECISION: usize = 2;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = default_log_level();
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    }
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and eigix will log at *trace* level.
/// Otherwise, they will log at *debug* level. The `RUST_LOG` environment variable is applied on
/// top of these defaults.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_levels() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        };
        assert_eq!(default_log_level(), expected);
        assert!(default_log_level() >= LevelFilter::Debug);

        // A second call finds the logger installed and does nothing.
        init_logger!();
        init_logger!();
        assert!(log::max_level() >= LevelFilter::Debug);
    }
}
