/// Options that tune how a transform scales its output.
///
/// Calling the FFT routines without specifying options selects the unitary convention,
/// under which the forward and inverse transforms are mutual inverses and both preserve
/// the l2 norm of the signal.
///
/// You only need to change these options if you are matching the conventions of another
/// library, or if you want to apply your own scaling afterwards.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub normalization: Normalization,
}

impl Options {
    /// Options with the given normalization and everything else at its default
    pub fn with_normalization(normalization: Normalization) -> Self {
        Options { normalization }
    }
}

/// The scaling applied to the output of a transform of length `n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    /// Scale both directions by `1/sqrt(n)`
    Unitary,
    /// Leave the forward transform unscaled and scale the inverse by `1/n`
    ///
    /// This is the default convention of NumPy and SciPy.
    Backward,
    /// Leave both directions unscaled
    None,
}
