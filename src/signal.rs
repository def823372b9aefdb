//! Synthetic benchmark input.

use alloc::vec::Vec;

use crate::num::Float;

/// Value emitted for line counter `n`: `sin((n mod 10) / 10)`.
#[inline]
pub fn sample_at<T: Float>(n: usize) -> T {
    let phase = T::from_usize(n % 10) / T::from_usize(10);
    phase.sin_cos().0
}

/// Generate `len` samples, counting `n` down from `len` to `1`.
///
/// The sequence repeats every ten samples, which gives a spectrum with a
/// strong DC component and energy at multiples of `len / 10`.
pub fn generate<T: Float>(len: usize) -> Vec<T> {
    (1..=len).rev().map(sample_at).collect()
}
