//! Round-trip timing sweep over worker counts.
//!
//! Each run times a forward transform followed by an inverse transform over
//! the same input and then measures how far the reconstruction drifted from
//! it. The sweep starts with the sequential schedule and continues with
//! partitioned schedules of `2..=max_workers` workers.

use alloc::vec::Vec;
use core::fmt;
use std::time::{Duration, Instant};

use crate::compare::mean_absolute_error;
use crate::dft::{self, DftError};
use crate::num::Float;
use crate::parallel::WorkerPool;
use crate::partition::PartitionPlan;

/// Worker count swept up to when nothing else is configured.
pub const DEFAULT_MAX_WORKERS: usize = 15;

/// Environment variable overriding [`BenchConfig::max_workers`].
pub const MAX_WORKERS_ENV: &str = "PARDFT_MAX_WORKERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Highest worker count in the sweep. Values below 2 run only the
    /// sequential schedule.
    pub max_workers: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl BenchConfig {
    pub fn new(max_workers: usize) -> Self {
        Self { max_workers }
    }

    /// Read [`MAX_WORKERS_ENV`], falling back to the default when it is
    /// unset or not an unsigned integer.
    pub fn from_env() -> Self {
        let max_workers = std::env::var(MAX_WORKERS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_WORKERS);
        Self { max_workers }
    }

    /// Schedules in sweep order.
    pub fn schedules(&self) -> impl Iterator<Item = Schedule> {
        core::iter::once(Schedule::Sequential)
            .chain((2..=self.max_workers).map(Schedule::Partitioned))
    }
}

/// Number of hardware threads on this host.
pub fn available_threads() -> usize {
    num_cpus::get().max(1)
}

/// How a run distributes the output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "workers", rename_all = "snake_case"))]
pub enum Schedule {
    /// Everything on the calling thread.
    Sequential,
    /// Output split across this many pool workers.
    Partitioned(usize),
}

impl Schedule {
    pub fn workers(&self) -> usize {
        match self {
            Schedule::Sequential => 1,
            Schedule::Partitioned(workers) => *workers,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Sequential => write!(f, "sequential"),
            Schedule::Partitioned(workers) => write!(f, "{} workers", workers),
        }
    }
}

/// Outcome of one timed round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport<T> {
    pub schedule: Schedule,
    /// Wall-clock time of forward plus inverse. Serialised as fractional
    /// seconds under the key `seconds`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "seconds", serialize_with = "serialize_seconds")
    )]
    pub elapsed: Duration,
    /// Mean absolute difference between input and reconstruction.
    pub mean_abs_error: T,
}

impl<T> RunReport<T> {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(feature = "serde")]
fn serialize_seconds<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}

/// Time one forward/inverse round trip of `samples` under `schedule`.
///
/// For partitioned schedules the worker count is validated and the pool is
/// started before the clock starts.
///
/// # Errors
///
/// Any [`DftError`] from partitioning, pool start-up or the comparison.
pub fn run_once<T: Float>(samples: &[T], schedule: Schedule) -> Result<RunReport<T>, DftError> {
    let (elapsed, reconstructed) = match schedule {
        Schedule::Sequential => {
            let start = Instant::now();
            let spectrum = dft::forward(samples);
            let reconstructed = dft::inverse(&spectrum);
            (start.elapsed(), reconstructed)
        }
        Schedule::Partitioned(workers) => {
            PartitionPlan::new(samples.len(), workers)?;
            let pool = WorkerPool::new(workers)?;
            let start = Instant::now();
            let spectrum = pool.forward(samples)?;
            let reconstructed = pool.inverse(&spectrum)?;
            (start.elapsed(), reconstructed)
        }
    };
    let mean_abs_error = mean_absolute_error(samples, &reconstructed)?;
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "{}: {:?} for {} samples, error {:?}",
        schedule,
        elapsed,
        samples.len(),
        mean_abs_error
    );
    Ok(RunReport {
        schedule,
        elapsed,
        mean_abs_error,
    })
}

/// Lazily run every schedule of `config` against `samples`.
///
/// Callers should stop at the first `Err`; later schedules only use more
/// workers and fail the same way.
pub fn sweep<'a, T: Float>(
    samples: &'a [T],
    config: &BenchConfig,
) -> impl Iterator<Item = Result<RunReport<T>, DftError>> + 'a {
    config
        .schedules()
        .map(move |schedule| run_once(samples, schedule))
}

/// Run the whole sweep, stopping at the first failure.
pub fn sweep_all<T: Float>(
    samples: &[T],
    config: &BenchConfig,
) -> Result<Vec<RunReport<T>>, DftError> {
    sweep(samples, config).collect()
}
