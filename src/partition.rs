//! Output-range partitioning for the worker pool.
//!
//! A [`PartitionPlan`] divides `[0, len)` among `workers` contiguous,
//! non-overlapping ranges. The first `workers - 1` ranges have exactly
//! `len / (workers - 1)` elements; the last range takes whatever remains, which
//! can be larger than the others (or empty) when `len` does not divide evenly.
//! A single worker owns the whole range.

use alloc::vec::Vec;
use core::ops::Range;

use crate::dft::DftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    len: usize,
    workers: usize,
    segment_len: usize,
}

impl PartitionPlan {
    /// Plan `workers` partitions over `len` output elements.
    ///
    /// # Errors
    ///
    /// - [`DftError::EmptyInput`] if `len == 0`.
    /// - [`DftError::InvalidPartitioning`] if `workers == 0` or `workers > len`.
    pub fn new(len: usize, workers: usize) -> Result<Self, DftError> {
        if len == 0 {
            return Err(DftError::EmptyInput);
        }
        if workers == 0 || workers - 1 >= len {
            return Err(DftError::InvalidPartitioning { len, workers });
        }
        let segment_len = if workers == 1 {
            len
        } else {
            len / (workers - 1)
        };
        Ok(Self {
            len,
            workers,
            segment_len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Length of every partition but the last.
    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Range owned by worker `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.workers()`.
    pub fn range(&self, index: usize) -> Range<usize> {
        assert!(index < self.workers, "worker index out of bounds");
        let start = self.segment_len * index;
        if index + 1 == self.workers {
            start..self.len
        } else {
            start..start + self.segment_len
        }
    }

    /// All ranges in ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.workers).map(move |i| self.range(i))
    }

    /// Split `output` into one exclusive slice per partition.
    ///
    /// # Errors
    ///
    /// Returns [`DftError::LengthMismatch`] if `output` is not exactly
    /// [`len`](Self::len) elements long.
    pub fn split_mut<'a, U>(
        &self,
        output: &'a mut [U],
    ) -> Result<Vec<(Range<usize>, &'a mut [U])>, DftError> {
        if output.len() != self.len {
            return Err(DftError::LengthMismatch {
                left: self.len,
                right: output.len(),
            });
        }
        let mut parts = Vec::with_capacity(self.workers);
        let mut rest = output;
        for range in self.ranges() {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(range.len());
            parts.push((range, head));
            rest = tail;
        }
        Ok(parts)
    }
}
