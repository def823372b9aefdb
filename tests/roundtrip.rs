// Test intent: verifies forward/inverse round trips stay within rounding error.

use pardft::compare::mean_absolute_error;
use pardft::dft::{forward, inverse};
use pardft::signal::generate;
use pardft::{Complex64, DftError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance per sample for double-precision round trips.
const EPS_PER_SAMPLE: f64 = 1e-9;
/// Seed for reproducible random signals.
const SEED: u64 = 0x5eed;

#[test]
fn quarter_sine_scenario() {
    let x = [0.0f64, 1.0, 0.0, -1.0];
    let fx = forward(&x);
    assert_eq!(fx.len(), 4);
    for c in &fx {
        assert!(c.re.abs() < 1e-12, "re = {}", c.re);
    }
    assert!((fx[1].im + 2.0).abs() < 1e-12);
    assert!(fx[2].im.abs() < 1e-12);
    assert!((fx[3].im - 2.0).abs() < 1e-12);
    let back = inverse(&fx);
    assert!(mean_absolute_error(&x, &back).unwrap() < 1e-9);
}

#[test]
fn single_sample_scenario() {
    let x = [5.0f64];
    let fx = forward(&x);
    assert_eq!(fx, vec![Complex64::new(5.0, 0.0)]);
    let back = inverse(&fx);
    assert_eq!(back, vec![5.0]);
    assert_eq!(mean_absolute_error(&x, &back).unwrap(), 0.0);
}

#[test]
fn generated_signal_roundtrip() {
    for len in [1usize, 2, 9, 10, 100, 257] {
        let x: Vec<f64> = generate(len);
        let err = mean_absolute_error(&x, &inverse(&forward(&x))).unwrap();
        assert!(err < EPS_PER_SAMPLE * len as f64, "len {}: {}", len, err);
    }
}

#[test]
fn random_signal_roundtrip() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for len in [3usize, 16, 61] {
        let x: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let err = mean_absolute_error(&x, &inverse(&forward(&x))).unwrap();
        assert!(err < EPS_PER_SAMPLE * len as f64, "len {}: {}", len, err);
    }
}

#[test]
fn mismatched_comparison_is_rejected() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(
        mean_absolute_error(&a, &b),
        Err(DftError::LengthMismatch { left: 3, right: 5 })
    );
}
