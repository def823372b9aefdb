//! Round-trip accuracy measurement.

use crate::dft::DftError;
use crate::num::Float;

/// Mean absolute error `(1/N)·Σ|a[i] − b[i]|` between two equal-length sequences.
///
/// # Errors
///
/// - [`DftError::LengthMismatch`] if the lengths differ.
/// - [`DftError::EmptyInput`] if both sequences are empty.
pub fn mean_absolute_error<T: Float>(a: &[T], b: &[T]) -> Result<T, DftError> {
    if a.len() != b.len() {
        return Err(DftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(DftError::EmptyInput);
    }
    let total = a
        .iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y).abs());
    Ok(total / T::from_usize(a.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences() {
        let x = [1.0, -2.0, 3.5];
        assert_eq!(mean_absolute_error(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_known_error() {
        let a = [1.0f64, 2.0, 3.0, 4.0];
        let b = [1.5f64, 2.0, 2.0, 4.0];
        // (0.5 + 0 + 1 + 0) / 4
        assert_eq!(mean_absolute_error(&a, &b).unwrap(), 0.375);
        assert_eq!(mean_absolute_error(&b, &a).unwrap(), 0.375);
    }

    #[test]
    fn test_length_mismatch() {
        let a = [0.0f64; 3];
        let b = [0.0f64; 5];
        assert_eq!(
            mean_absolute_error(&a, &b),
            Err(DftError::LengthMismatch { left: 3, right: 5 })
        );
    }

    #[test]
    fn test_empty_sequences() {
        let a: [f32; 0] = [];
        assert_eq!(mean_absolute_error(&a, &a), Err(DftError::EmptyInput));
    }
}
