//! Direct Discrete Fourier Transform.
//!
//! Forward and inverse transforms evaluated by straight O(n²) summation over
//! a real input sequence. Every output index is produced by a standalone
//! kernel ([`forward_bin`], [`inverse_sample`]) so that the sequential path and
//! the partitioned path in [`crate::parallel`] perform identical arithmetic
//! for each element.

use alloc::vec::Vec;
use core::fmt;

use crate::num::{Complex, Float};

/// Errors produced by the transform engine and the accuracy comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// A partitioned transform or a comparison received an empty sequence.
    EmptyInput,
    /// The worker count yields a non-positive segment length for `len` elements.
    InvalidPartitioning { len: usize, workers: usize },
    /// Two sequences that must be index-aligned have different lengths.
    LengthMismatch { left: usize, right: usize },
    /// The operating system refused to start the worker threads.
    WorkerPoolUnavailable,
}

impl fmt::Display for DftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DftError::EmptyInput => write!(f, "input sequence is empty"),
            DftError::InvalidPartitioning { len, workers } => write!(
                f,
                "too many workers: {} workers cannot partition {} elements",
                workers, len
            ),
            DftError::LengthMismatch { left, right } => {
                write!(f, "sequence lengths differ: {} != {}", left, right)
            }
            DftError::WorkerPoolUnavailable => write!(f, "failed to start worker threads"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DftError {}

/// Compute spectrum bin `k` of `samples`.
///
/// `X[k] = Σ x[j]·cos(2πkj/N) − i·Σ x[j]·sin(2πkj/N)`
#[inline]
pub fn forward_bin<T: Float>(samples: &[T], k: usize) -> Complex<T> {
    let n = T::from_usize(samples.len());
    let step = T::two_pi() * T::from_usize(k) / n;
    let mut acc = Complex::zero();
    for (j, &x) in samples.iter().enumerate() {
        let (sin, cos) = (step * T::from_usize(j)).sin_cos();
        acc += Complex::new(x * cos, -(x * sin));
    }
    acc
}

/// Reconstruct sample `k` from `spectrum`.
///
/// `x[k] = (1/N)·Re(Σ X[j]·e^{+2πikj/N})`
#[inline]
pub fn inverse_sample<T: Float>(spectrum: &[Complex<T>], k: usize) -> T {
    let n = T::from_usize(spectrum.len());
    let step = T::two_pi() * T::from_usize(k) / n;
    let mut acc = T::zero();
    for (j, &bin) in spectrum.iter().enumerate() {
        let twiddle = Complex::expi(step * T::from_usize(j));
        acc = acc + (bin * twiddle).re;
    }
    acc / n
}

/// Forward DFT of a real sequence, computed on the calling thread.
///
/// An empty input yields an empty spectrum.
pub fn forward<T: Float>(samples: &[T]) -> Vec<Complex<T>> {
    (0..samples.len())
        .map(|k| forward_bin(samples, k))
        .collect()
}

/// Inverse DFT back to a real sequence, computed on the calling thread.
///
/// Only the real part of the reconstruction is kept.
pub fn inverse<T: Float>(spectrum: &[Complex<T>]) -> Vec<T> {
    (0..spectrum.len())
        .map(|k| inverse_sample(spectrum, k))
        .collect()
}
