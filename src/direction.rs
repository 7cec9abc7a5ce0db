//! Direction of a transform
use num_traits::Float;

/// Inverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Leave the exponent term in the twiddle factor alone
    Forward = 1,
    /// Multiply the exponent term in the twiddle factor by -1
    Inverse = -1,
}

impl Direction {
    /// The sign applied to the twiddle factor exponent, `+1` or `-1`
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => T::one(),
            Direction::Inverse => -T::one(),
        }
    }
}
