//! Shared inputs for the `pardft` criterion benches.

use pardft::signal;

/// Transform sizes benchmarked by every group.
pub const SIZES: [usize; 3] = [256, 1024, 2048];

/// Worker counts swept for the partitioned schedules.
pub const WORKER_COUNTS: [usize; 5] = [1, 2, 4, 8, 15];

/// The synthetic dataset the CLI generator produces for `len` samples.
pub fn dataset(len: usize) -> Vec<f64> {
    signal::generate(len)
}
