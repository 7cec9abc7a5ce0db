//! Combine and scaling kernels
//!
//! Both kernels are compiled for several instruction sets and the best one available
//! is picked at runtime.
use num_complex::Complex;
use num_traits::Float;

/// Radix-2 butterfly merging two half-size transforms into one.
///
/// For `j` in `0..half`, with `w` the `j`-th twiddle:
/// `output[j] = even[j] + w * odd[j]` and `output[j + half] = even[j] - w * odd[j]`.
///
/// # Panics
///
/// Panics if `even.len() != odd.len()` or if `output.len() != 2 * even.len()`
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn butterfly<T: Float, I: Iterator<Item = Complex<T>>>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
    output: &mut [Complex<T>],
    twiddles: I,
) {
    let half = even.len();
    assert_eq!(odd.len(), half);
    assert_eq!(output.len(), half << 1);

    let (out_s0, out_s1) = output.split_at_mut(half);

    out_s0
        .iter_mut()
        .zip(out_s1.iter_mut())
        .zip(even.iter().zip(odd.iter()))
        .zip(twiddles)
        .for_each(|(((z0, z1), (e, o)), w)| {
            let t = w * *o;
            *z0 = *e + t;
            *z1 = *e - t;
        });
}

/// Multiplies every element of `signal` by `factor`
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn scale<T: Float>(signal: &mut [Complex<T>], factor: T) {
    for z in signal.iter_mut() {
        z.re = z.re * factor;
        z.im = z.im * factor;
    }
}
