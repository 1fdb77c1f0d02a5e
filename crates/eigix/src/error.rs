//! Error type shared by [`Matrix`][crate::Matrix] and [`Tensor3D`][crate::Tensor3D].

use thiserror::Error;

/// Result type alias using [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by fallible container operations.
///
/// Shape requirements of the arithmetic operators are checked by the type system, so
/// [`Error::ShapeMismatch`] is only produced when building a container from data whose shape is
/// only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An element index lies outside of the container's shape.
    #[error("index {index:?} is out of range for shape {shape:?}")]
    OutOfRange {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// Runtime-shaped input data does not match the container's shape.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// A scalar division by zero (or, for floating-point types, a near-zero value).
    #[error("division by zero or near-zero scalar")]
    DivisionByZero,

    /// The number of values passed to `populate` differs from the number of elements.
    #[error("expected {expected} values to populate container, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },
}
