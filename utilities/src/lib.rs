pub extern crate rustfft;

// export rustfft to ctfft tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences are equal, element by element, within `epsilon`.
///
/// # Panics
///
/// Panics if the lengths differ or if any component is too far from its counterpart
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "sequences differ in length");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_float_closeness(a.re, e.re, epsilon);
        assert_float_closeness(a.im, e.im, epsilon);
    }
}

/// Generate a random, complex signal of length `len`, each component uniform in `[-1, 1)`
pub fn gen_random_signal<T>(len: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    (0..len)
        .map(|_| Complex::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng)))
        .collect()
}

/// Euclidean (l2) norm of a complex sequence
pub fn l2_norm<T: Float>(signal: &[Complex<T>]) -> T {
    signal
        .iter()
        .fold(T::zero(), |acc, z| acc + z.norm_sqr())
        .sqrt()
}
