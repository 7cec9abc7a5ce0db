//! Utility functions such as the power-of-two check and interleave/deinterleave

use bytemuck::{cast_slice, Pod};
use num_complex::Complex;
use num_traits::Float;

/// Returns `true` iff `n` is a positive power of two (`n = 2^k`, `k >= 0`).
///
/// Walks the bits from the least significant end and fails as soon as a second set bit
/// is seen. Zero has no set bit at all and is rejected.
pub fn is_power_of_two(n: usize) -> bool {
    if n == 0 {
        return false;
    }

    let mut seen_one = false;
    let mut rest = n;
    while rest > 0 {
        if rest & 1 == 1 {
            if seen_one {
                return false;
            }
            seen_one = true;
        }
        rest >>= 1;
    }

    seen_one
}

/// Separates a slice of complex numbers into its real and imaginary components,
/// writing them into `reals` and `imags`.
///
/// # Panics
///
/// Panics if `reals.len() != signal.len()` or `imags.len() != signal.len()`.
pub(crate) fn deinterleave_complex<T: Float + Pod>(
    signal: &[Complex<T>],
    reals: &mut [T],
    imags: &mut [T],
) {
    assert_eq!(reals.len(), signal.len());
    assert_eq!(imags.len(), signal.len());

    let components: &[T] = cast_slice(signal);
    components
        .chunks_exact(2)
        .zip(reals.iter_mut())
        .zip(imags.iter_mut())
        .for_each(|((pair, z_re), z_im)| {
            *z_re = pair[0];
            *z_im = pair[1];
        });
}

/// Utility function to combine separate slices of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
