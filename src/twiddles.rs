use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::direction::Direction;

/// Streams the powers `W_r^0, W_r^1, W_r^2, ...` of the primitive `r`-th root of unity,
/// where `W_r = e^{i * sign * (-2 pi / r)}` and `sign` comes from the [`Direction`].
///
/// Each power is obtained by multiplying the previous one by `W_r`, so only `W_r`
/// itself needs a `sin`/`cos` evaluation.
pub(crate) struct Twiddles<T> {
    step: Complex<T>,
    current: Complex<T>,
}

impl<T: Float + FloatConst> Twiddles<T> {
    /// `num_points` is the size `r` of the sub-problem the twiddles are for.
    pub fn new(num_points: usize, direction: Direction) -> Self {
        let two = T::one() + T::one();
        let theta = direction.sign::<T>() * (-two * T::PI() / len_as_float::<T>(num_points));
        Self {
            step: Complex::cis(theta),
            current: Complex::new(T::one(), T::zero()),
        }
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    #[inline]
    fn next(&mut self) -> Option<Complex<T>> {
        let w = self.current;
        self.current = w * self.step;
        Some(w)
    }
}

/// Converts a transform length to the working float type.
pub(crate) fn len_as_float<T: Float>(n: usize) -> T {
    // `NumCast` from an integer into a float type only ever rounds, it never fails
    T::from(n).unwrap_or_else(T::infinity)
}
