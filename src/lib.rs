//! # pardft - direct DFT with partitioned parallel evaluation
//!
//! Computes the Discrete Fourier Transform and its inverse over a real-valued
//! sample sequence by direct O(n²) summation, and measures how splitting the
//! output range across a fixed number of worker threads affects wall-clock
//! time and round-trip accuracy.
//!
//! ## Features
//!
//! - **Sequential reference transforms** (`forward`, `inverse`), `no_std + alloc`
//! - **Partitioned transforms** on a fixed-size worker pool, one task per
//!   contiguous output range, each writing through its own `&mut` slice
//! - **Round-trip accuracy** via mean absolute error
//! - **Benchmark sweep** over worker counts with per-run timing
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` support and host thread detection
//! - `parallel` (default): worker pool and benchmark sweep, built on Rayon
//! - `verbose-logging`: debug records through the `log` facade
//! - `serde`: `Serialize` for report types
//!
//! ## Example
//!
//! ```
//! use pardft::{compare, dft, parallel};
//!
//! let x = [0.0, 1.0, 0.0, -1.0];
//! let spectrum = parallel::forward_parallel(&x, 2).unwrap();
//! assert_eq!(spectrum, dft::forward(&x));
//! let back = dft::inverse(&spectrum);
//! assert!(compare::mean_absolute_error(&x, &back).unwrap() < 1e-9);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Float trait and complex value type shared by every transform.
pub mod num;

/// Sequential DFT/IDFT and the per-index kernels.
pub mod dft;

/// Splitting an output range into contiguous worker partitions.
pub mod partition;

/// Mean absolute error between two sequences.
pub mod compare;

/// Synthetic test signals.
pub mod signal;

/// Partitioned transforms on a fixed-size worker pool.
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
pub mod parallel;

/// Timing sweep over worker counts.
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
pub mod bench;

pub use dft::DftError;
pub use num::{Complex, Complex32, Complex64, Float};
pub use partition::PartitionPlan;
