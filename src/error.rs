//! Errors reported by the transform entry points

use thiserror::Error;

/// Reasons a transform refuses its input.
///
/// Every variant is raised before any computation starts, so no partial
/// result is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// The input length is not a positive power of two (this includes zero).
    #[error("input length {len} is not a positive power of two")]
    InvalidSize { len: usize },

    /// The real and imaginary component slices have different lengths.
    #[error("real and imaginary parts differ in length: {reals} != {imags}")]
    LengthMismatch { reals: usize, imags: usize },
}
