//! FFT Algorithm Implementations
//!
//! This module contains the core FFT algorithm implementations.
//!
//! ## Available Algorithms
//!
//! - **DIT (Decimation-in-Time)**: Recursive radix-2 Cooley-Tukey. The sequence is split by
//!   index parity, both halves are transformed, and the halves are merged with a butterfly.
//!   Input and output are both in natural order; the bit-reversal permutation is implied by
//!   the offset and stride each recursive call reads with.

pub mod dit;
