//! Longest Processing Time (LPT) list scheduler.
//!
//! # Algorithm
//!
//! 1. Sort jobs by processing time, longest first (stable on ties).
//! 2. Start every processor with zero load.
//! 3. Assign each job to the least-loaded processor; among equally loaded
//!    processors the lowest index wins.
//!
//! # Complexity
//! O(n log n + n * m) with [`SelectionStrategy::LinearScan`],
//! O(n log n + n log m) with [`SelectionStrategy::MinHeap`].
//!
//! # Bound
//! `C_max(LPT) <= (4/3 - 1/(3m)) * C_max(OPT)`.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies",
//! SIAM J. Appl. Math. 17(2)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{sorted_longest_first, Job, ProcessorSchedule};
use crate::validation::{validate_jobs, validate_processors};

/// How the least-loaded processor is located for each job.
///
/// Both strategies produce identical schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Scan loads from index 0, keep the first strict minimum.
    #[default]
    LinearScan,
    /// Binary heap keyed by `(load, index)`.
    MinHeap,
}

/// LPT scheduler for identical parallel processors.
///
/// # Example
///
/// ```
/// use u_lpt::scheduler::LptScheduler;
///
/// let schedule = LptScheduler::new().schedule(&[3, 1, 6, 4, 5, 2], 2).unwrap();
/// assert_eq!(schedule.loads(), &[11, 10]);
/// assert_eq!(schedule.assignment(), vec![vec![6, 3, 2], vec![5, 4, 1]]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LptScheduler {
    strategy: SelectionStrategy,
}

impl LptScheduler {
    /// Creates a scheduler using linear-scan selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the processor selection strategy.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Configured selection strategy.
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Schedules `jobs` on `processors` identical processors.
    ///
    /// # Errors
    /// `InvalidInput` when `processors` is 0, a length is negative, or the
    /// total length overflows. Nothing is scheduled in that case.
    pub fn schedule(&self, jobs: &[i64], processors: usize) -> Result<ProcessorSchedule> {
        validate_processors(processors)?;
        validate_jobs(jobs)?;

        let sorted = sorted_longest_first(jobs);
        let schedule = match self.strategy {
            SelectionStrategy::LinearScan => assign_linear(&sorted, processors),
            SelectionStrategy::MinHeap => assign_heap(&sorted, processors),
        };

        debug!(
            jobs = jobs.len(),
            processors,
            strategy = ?self.strategy,
            makespan = schedule.makespan(),
            "LPT schedule computed"
        );
        Ok(schedule)
    }
}

/// Index of the least-loaded processor; first index on ties.
fn min_load_processor(loads: &[i64]) -> usize {
    let mut best = 0;
    for (index, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[best] {
            best = index;
        }
    }
    best
}

fn assign_linear(sorted: &[Job], processors: usize) -> ProcessorSchedule {
    let mut schedule = ProcessorSchedule::with_processors(processors);
    for &job in sorted {
        let target = min_load_processor(schedule.loads());
        schedule.assign(target, job);
    }
    schedule
}

fn assign_heap(sorted: &[Job], processors: usize) -> ProcessorSchedule {
    let mut schedule = ProcessorSchedule::with_processors(processors);
    // Min-heap on (load, index): equal loads pop the lowest index first.
    let mut heap: BinaryHeap<Reverse<(i64, usize)>> =
        (0..processors).map(|index| Reverse((0, index))).collect();

    for &job in sorted {
        let Some(Reverse((load, target))) = heap.pop() else {
            break;
        };
        schedule.assign(target, job);
        heap.push(Reverse((load + job.length, target)));
    }
    schedule
}

/// Schedules with the default [`LptScheduler`].
pub fn schedule(jobs: &[i64], processors: usize) -> Result<ProcessorSchedule> {
    LptScheduler::new().schedule(jobs, processors)
}
