//! A recursive radix-2 Cooley-Tukey Fast Fourier Transform.
//!
//! The forward and inverse transforms share one decimation-in-time recursion that differs
//! only by the sign of the twiddle factor exponent. Both are scaled by `1/sqrt(n)` by
//! default, which makes them mutual inverses and keeps the l2 norm of the signal:
//!
//! ```
//! use ctfft::{fft_64, ifft_64};
//! use num_complex::Complex64;
//!
//! let f = vec![Complex64::new(1.0, 0.0); 4];
//! let f_hat = fft_64(&f).unwrap();
//! assert_eq!(f_hat[0], Complex64::new(2.0, 0.0));
//!
//! let f_again = ifft_64(&f_hat).unwrap();
//! assert!((f_again[3] - f[3]).norm() < 1e-12);
//! ```
//!
//! Only lengths that are a positive power of two are accepted. Anything else is rejected
//! with [`FftError::InvalidSize`] before any work is done.
use bytemuck::Pod;
use num_complex::{Complex, Complex32, Complex64};
use num_traits::{Float, FloatConst};
use tracing::{debug, trace};

use crate::algorithms::dit::recursive_dit;
use crate::kernels::scale;
use crate::twiddles::len_as_float;
use crate::utils::{combine_re_im, deinterleave_complex, is_power_of_two};

pub use crate::direction::Direction;
pub use crate::error::FftError;
pub use crate::options::{Normalization, Options};

mod algorithms;
mod direction;
mod error;
mod kernels;
pub mod options;
mod twiddles;
pub mod utils;

/// The factor a transform of length `n` is multiplied by, if any
fn scaling_factor<T: Float>(n: usize, direction: Direction, opts: &Options) -> Option<T> {
    match (opts.normalization, direction) {
        (Normalization::Unitary, _) => Some(len_as_float::<T>(n).sqrt().recip()),
        (Normalization::Backward, Direction::Inverse) => Some(len_as_float::<T>(n).recip()),
        (Normalization::Backward, Direction::Forward) | (Normalization::None, _) => None,
    }
}

fn transform<T: Float + FloatConst>(
    signal: &[Complex<T>],
    direction: Direction,
    opts: &Options,
) -> Result<Vec<Complex<T>>, FftError> {
    let n = signal.len();
    if !is_power_of_two(n) {
        debug!(len = n, ?direction, "rejecting input length");
        return Err(FftError::InvalidSize { len: n });
    }

    debug!(len = n, ?direction, normalization = ?opts.normalization, "running transform");
    trace!(offset = 0, stride = 1, size = n, "entering recursion");
    let mut output = recursive_dit(signal, 0, 1, n, direction);

    if let Some(factor) = scaling_factor(n, direction, opts) {
        scale(&mut output, factor);
    }

    Ok(output)
}

fn transform_split<T: Float + FloatConst + Pod>(
    reals: &mut [T],
    imags: &mut [T],
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        debug!(reals = reals.len(), imags = imags.len(), "rejecting split input");
        return Err(FftError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }
    if !is_power_of_two(reals.len()) {
        debug!(len = reals.len(), ?direction, "rejecting input length");
        return Err(FftError::InvalidSize { len: reals.len() });
    }

    let signal = combine_re_im(reals, imags);
    let output = transform(&signal, direction, opts)?;
    deinterleave_complex(&output, reals, imags);

    Ok(())
}

macro_rules! impl_fft_for {
    ($fft_func:ident, $ifft_func:ident, $fft_opts_func:ident, $ifft_opts_func:ident, $precision:ty, $complex:ty) => {
        /// Forward FFT of `signal`, scaled by `1/sqrt(n)`.
        ///
        /// Returns a new sequence of the same length as `signal`.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::InvalidSize`] if `signal.len()` is not a positive power of 2.
        pub fn $fft_func(signal: &[$complex]) -> Result<Vec<$complex>, FftError> {
            $fft_opts_func(signal, &Options::default())
        }

        /// Inverse FFT of `signal`, scaled by `1/sqrt(n)`.
        ///
        /// Returns a new sequence of the same length as `signal`.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::InvalidSize`] if `signal.len()` is not a positive power of 2.
        pub fn $ifft_func(signal: &[$complex]) -> Result<Vec<$complex>, FftError> {
            $ifft_opts_func(signal, &Options::default())
        }

        /// Forward FFT of `signal` with the scaling selected in `opts`
        ///
        /// # Errors
        ///
        /// Returns [`FftError::InvalidSize`] if `signal.len()` is not a positive power of 2.
        pub fn $fft_opts_func(signal: &[$complex], opts: &Options) -> Result<Vec<$complex>, FftError> {
            transform::<$precision>(signal, Direction::Forward, opts)
        }

        /// Inverse FFT of `signal` with the scaling selected in `opts`
        ///
        /// # Errors
        ///
        /// Returns [`FftError::InvalidSize`] if `signal.len()` is not a positive power of 2.
        pub fn $ifft_opts_func(signal: &[$complex], opts: &Options) -> Result<Vec<$complex>, FftError> {
            transform::<$precision>(signal, Direction::Inverse, opts)
        }
    };
}

impl_fft_for!(fft_64, ifft_64, fft_64_with_opts, ifft_64_with_opts, f64, Complex64);
impl_fft_for!(fft_32, ifft_32, fft_32_with_opts, ifft_32_with_opts, f32, Complex32);

macro_rules! impl_fft_split_for {
    ($func_name:ident, $precision:ty) => {
        /// FFT of a signal stored as separate real and imaginary components, in place.
        ///
        /// The result is identical to the one of the complex-valued API, with unitary
        /// scaling, in the requested [`Direction`].
        ///
        /// # Errors
        ///
        /// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`, and
        /// [`FftError::InvalidSize`] if the length is not a positive power of 2.
        /// The slices are left untouched on error.
        pub fn $func_name(
            reals: &mut [$precision],
            imags: &mut [$precision],
            direction: Direction,
        ) -> Result<(), FftError> {
            transform_split::<$precision>(reals, imags, direction, &Options::default())
        }
    };
}

impl_fft_split_for!(fft_64_split, f64);
impl_fft_split_for!(fft_32_split, f32);
