//! Partitioned DFT on a fixed-size worker pool.
//!
//! The output range is split by a [`PartitionPlan`] and each partition is
//! handed to its own task together with an exclusive `&mut` slice covering
//! only that range. The input is shared read-only. [`rayon::ThreadPool::scope`]
//! does not return until every task has finished, so the caller observes a
//! fully written output.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::dft::{forward_bin, inverse_sample, DftError};
use crate::num::{Complex, Float};
use crate::partition::PartitionPlan;

/// A pool of exactly `workers` threads that runs one task per partition.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Start `workers` threads.
    ///
    /// # Errors
    ///
    /// - [`DftError::InvalidPartitioning`] if `workers == 0`.
    /// - [`DftError::WorkerPoolUnavailable`] if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, DftError> {
        if workers == 0 {
            return Err(DftError::InvalidPartitioning { len: 0, workers });
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pardft-worker-{}", i))
            .build()
            .map_err(|_| DftError::WorkerPoolUnavailable)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!("started worker pool with {} threads", workers);
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Forward DFT with the output range partitioned across the pool.
    ///
    /// # Errors
    ///
    /// - [`DftError::EmptyInput`] if `samples` is empty.
    /// - [`DftError::InvalidPartitioning`] if the pool has more workers than
    ///   `samples` has elements. Nothing is computed in that case.
    pub fn forward<T: Float>(&self, samples: &[T]) -> Result<Vec<Complex<T>>, DftError> {
        let plan = PartitionPlan::new(samples.len(), self.workers)?;
        let mut spectrum = vec![Complex::zero(); samples.len()];
        self.run(&plan, &mut spectrum, |range, out| {
            for (slot, k) in out.iter_mut().zip(range) {
                *slot = forward_bin(samples, k);
            }
        })?;
        Ok(spectrum)
    }

    /// Inverse DFT with the output range partitioned across the pool.
    ///
    /// # Errors
    ///
    /// Same as [`WorkerPool::forward`].
    pub fn inverse<T: Float>(&self, spectrum: &[Complex<T>]) -> Result<Vec<T>, DftError> {
        let plan = PartitionPlan::new(spectrum.len(), self.workers)?;
        let mut samples = vec![T::zero(); spectrum.len()];
        self.run(&plan, &mut samples, |range, out| {
            for (slot, k) in out.iter_mut().zip(range) {
                *slot = inverse_sample(spectrum, k);
            }
        })?;
        Ok(samples)
    }

    /// Spawn `fill` once per partition and wait for all of them.
    fn run<U, F>(&self, plan: &PartitionPlan, output: &mut [U], fill: F) -> Result<(), DftError>
    where
        U: Send,
        F: Fn(Range<usize>, &mut [U]) + Sync,
    {
        let parts = plan.split_mut(output)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "dispatching {} partitions of {} elements (segment {})",
            plan.workers(),
            plan.len(),
            plan.segment_len()
        );
        let fill = &fill;
        self.pool.scope(|s| {
            for (range, out) in parts {
                s.spawn(move |_| fill(range, out));
            }
        });
        Ok(())
    }
}

/// Forward DFT on a fresh pool of `workers` threads.
///
/// Worker counts are validated against the input before any thread starts.
pub fn forward_parallel<T: Float>(
    samples: &[T],
    workers: usize,
) -> Result<Vec<Complex<T>>, DftError> {
    PartitionPlan::new(samples.len(), workers)?;
    WorkerPool::new(workers)?.forward(samples)
}

/// Inverse DFT on a fresh pool of `workers` threads.
pub fn inverse_parallel<T: Float>(
    spectrum: &[Complex<T>],
    workers: usize,
) -> Result<Vec<T>, DftError> {
    PartitionPlan::new(spectrum.len(), workers)?;
    WorkerPool::new(workers)?.inverse(spectrum)
}
