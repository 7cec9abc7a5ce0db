//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from large to small sub-problems by index parity,
//! then combines results from small to large.
//!
//! ## Algorithm Overview
//!
//! 1. Transform the even-indexed elements (same offset, doubled stride, half size)
//! 2. Transform the odd-indexed elements (offset advanced by one stride, doubled stride, half size)
//! 3. Merge both halves with a radix-2 butterfly, using the twiddles of the current size
//!
//! ## Indexing
//!
//! At recursion depth `d` there are `2^d` active calls, each reading with stride `2^d`.
//! The call reached by taking the odd branch at the levels where bit `k` of `j` is set
//! reads exactly the elements `{ x | x = j + m * 2^d, 0 <= x < n }`.
//!
//! ## Memory
//!
//! Every call owns the buffer it returns. The two child buffers are dropped as soon as they
//! have been merged, so at most `O(n log n)` is allocated over a whole transform and `O(n)`
//! is alive at any point on the way back up.
//!
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::direction::Direction;
use crate::kernels::butterfly;
use crate::twiddles::Twiddles;

/// Unnormalized DFT (or inverse DFT) of the `size` elements of `signal` found at
/// `offset`, `offset + stride`, `offset + 2 * stride`, ...
///
/// `size` must be a power of two, which the public entry points guarantee by validating
/// the full length before the first call. Halving a power of two keeps it one.
pub(crate) fn recursive_dit<T: Float + FloatConst>(
    signal: &[Complex<T>],
    offset: usize,
    stride: usize,
    size: usize,
    direction: Direction,
) -> Vec<Complex<T>> {
    debug_assert!(size.is_power_of_two());

    if size == 1 {
        return vec![signal[offset]];
    }

    let half = size >> 1;
    let even = recursive_dit(signal, offset, stride << 1, half, direction);
    let odd = recursive_dit(signal, offset + stride, stride << 1, half, direction);

    let mut output = vec![Complex::new(T::zero(), T::zero()); size];
    butterfly(&even, &odd, &mut output, Twiddles::new(size, direction));

    output
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, gen_random_signal, rustfft::FftPlanner};

    use super::*;

    #[test]
    fn base_case_returns_addressed_element() {
        let signal: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, -i as f64)).collect();

        for offset in 0..8 {
            let out = recursive_dit(&signal, offset, 1, 1, Direction::Forward);
            assert_eq!(out, vec![signal[offset]]);
        }
    }

    #[test]
    fn strided_sub_problem() {
        // The sub-problem at offset 1, stride 2 is the DFT of the odd elements only
        let signal: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let odd: Vec<Complex64> = signal.iter().skip(1).step_by(2).copied().collect();

        let strided = recursive_dit(&signal, 1, 2, 4, Direction::Forward);
        let contiguous = recursive_dit(&odd, 0, 1, 4, Direction::Forward);

        assert_complex_closeness(&strided, &contiguous, 1e-12);
    }

    #[test]
    fn matches_rustfft_unnormalized() {
        for k in 0..=12 {
            let n = 1 << k;
            let signal = gen_random_signal::<f64>(n);

            let ours = recursive_dit(&signal, 0, 1, n, Direction::Forward);

            let mut buffer = signal.clone();
            let mut planner = FftPlanner::new();
            planner.plan_fft_forward(n).process(&mut buffer);

            assert_complex_closeness(&ours, &buffer, 1e-9);
        }
    }

    #[test]
    fn inverse_matches_rustfft_unnormalized() {
        for k in 0..=12 {
            let n = 1 << k;
            let signal = gen_random_signal::<f64>(n);

            let ours = recursive_dit(&signal, 0, 1, n, Direction::Inverse);

            let mut buffer = signal.clone();
            let mut planner = FftPlanner::new();
            planner.plan_fft_inverse(n).process(&mut buffer);

            assert_complex_closeness(&ours, &buffer, 1e-9);
        }
    }
}
