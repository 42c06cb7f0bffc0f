//! Per-worker shares and index ranges for a contiguous workload

use crate::partition::{Count, Partition};
use crate::Error;
use serde::Serialize;
use std::ops::Range;

/// Fair division of a contiguous range of work items across workers
///
/// Two views of the same division are offered. [`WorkSplit::share`]
/// gives the first `problem_size % workers` workers one extra item
/// each. [`WorkSplit::range`] tiles `[0, problem_size)` with the
/// partition boundary formula, which spreads the extra items across the
/// index space instead of front-loading them. The two views agree on
/// the multiset of sizes, but generally not worker by worker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct WorkSplit<T: Count> {
    /// Number of work items in the `[0, problem_size)` range
    problem_size: T,
    /// Number of workers dividing the range, always nonzero
    workers: T,
}

impl<T: Count> WorkSplit<T> {
    /// Divide `problem_size` work items across `workers` workers.
    ///
    /// Returns [`Error::ZeroBuckets`] when `workers` is zero. A problem
    /// size of zero is valid; every worker then receives an empty
    /// share.
    pub fn new(problem_size: T, workers: T) -> Result<Self, Error> {
        if workers.is_zero() {
            Err(Error::ZeroBuckets)
        } else {
            Ok(Self {
                problem_size,
                workers,
            })
        }
    }

    /// Number of work items divided by this split.
    pub fn problem_size(&self) -> T {
        self.problem_size
    }

    /// Number of workers sharing the work items.
    pub fn workers(&self) -> T {
        self.workers
    }

    /// The fair partition of the `[0, problem_size)` index space.
    #[inline(always)]
    fn partition(&self) -> Partition<T> {
        Partition::from_validated(self.problem_size, self.workers)
    }

    /// Number of work items assigned to one worker.
    ///
    /// The first `problem_size % workers` workers receive
    /// `problem_size / workers + 1` items each, and the rest receive
    /// `problem_size / workers`.
    ///
    /// Panics if the worker index is out of range.
    #[inline(always)]
    pub fn share(&self, worker: T) -> T {
        assert!(worker < self.workers);
        let floor = self.problem_size / self.workers;
        if worker < self.problem_size % self.workers {
            floor + T::one()
        } else {
            floor
        }
    }

    /// Work item range assigned to one worker.
    ///
    /// Consecutive ranges tile `[0, problem_size)` with no gaps and no
    /// overlap, and every range holds either `problem_size / workers`
    /// items or one more.
    ///
    /// Panics if the worker index is out of range.
    pub fn range(&self, worker: T) -> Range<T> {
        self.partition().range(worker)
    }

    /// Share sizes for all workers, in worker order.
    ///
    /// Panics if the worker count cannot be materialized as a `usize`
    /// collection length.
    pub fn shares(&self) -> Vec<T> {
        let workers = self
            .workers
            .to_usize()
            .expect("materialized splits have usize-sized worker counts");
        let mut result = Vec::with_capacity(workers);
        let mut worker = T::zero();
        while worker < self.workers {
            result.push(self.share(worker));
            worker = worker + T::one();
        }
        result
    }

    /// Work item ranges for all workers, in worker order.
    ///
    /// Panics if the worker count cannot be materialized as a `usize`
    /// collection length.
    pub fn ranges(&self) -> Vec<Range<T>> {
        let workers = self
            .workers
            .to_usize()
            .expect("materialized splits have usize-sized worker counts");
        let mut result = Vec::with_capacity(workers);
        let mut worker = T::zero();
        while worker < self.workers {
            result.push(self.range(worker));
            worker = worker + T::one();
        }
        result
    }
}
