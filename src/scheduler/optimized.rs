//! Processor-count optimized LPT.
//!
//! No schedule can finish before its longest job, so `max_job` is a floor
//! on the makespan. With perfectly balanced loads, `ceil(total / max_job)`
//! processors already keep the average load at or below that floor; more
//! processors cannot lower the makespan below `max_job`. The optimized
//! scheduler runs LPT on `min(ceil(total / max_job), m)` processors and
//! reports the remaining processors as idle.
//!
//! # Algorithm
//! 1. `ideal = ceil(sum(jobs) / max(jobs))`, `optimal = min(ideal, m)`.
//! 2. LPT on `optimal` processors.
//! 3. Append `m - optimal` empty processors at the end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lpt::{LptScheduler, SelectionStrategy};
use crate::error::Result;
use crate::models::ProcessorSchedule;
use crate::validation::{validate_jobs, validate_non_empty, validate_processors};

/// Processor-count derivation for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorPlan {
    /// Processors requested by the caller.
    pub requested: usize,
    /// `ceil(total / max_job)`; 1 when every job has length 0.
    pub ideal: usize,
    /// Processors actually scheduled: `min(ideal, requested)`.
    pub optimal: usize,
    /// Longest job.
    pub max_job: i64,
    /// Sum of all job lengths.
    pub total: i64,
}

impl ProcessorPlan {
    /// Processors left idle by the plan.
    #[inline]
    pub fn idle(&self) -> usize {
        self.requested - self.optimal
    }
}

/// LPT on the fewest processors that still respect the longest-job floor.
///
/// # Example
///
/// ```
/// use u_lpt::scheduler::OptimizedLptScheduler;
///
/// let schedule = OptimizedLptScheduler::new().schedule(&[1, 1, 1, 1], 10).unwrap();
/// assert_eq!(schedule.processor_count(), 10);
/// assert_eq!(schedule.active_processor_count(), 4);
/// assert_eq!(&schedule.loads()[..5], &[1, 1, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedLptScheduler {
    inner: LptScheduler,
}

impl OptimizedLptScheduler {
    /// Creates an optimized scheduler using linear-scan selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the processor selection strategy of the underlying LPT run.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.inner = self.inner.with_strategy(strategy);
        self
    }

    /// Derives the processor plan without scheduling.
    ///
    /// # Errors
    /// `InvalidInput` for an empty job list, zero processors, negative
    /// lengths, or an overflowing total.
    pub fn plan(&self, jobs: &[i64], processors: usize) -> Result<ProcessorPlan> {
        validate_non_empty(jobs)?;
        validate_processors(processors)?;
        let total = validate_jobs(jobs)?;
        let max_job = jobs.iter().copied().max().unwrap_or(0);

        let ideal = ideal_processor_count(total, max_job);
        Ok(ProcessorPlan {
            requested: processors,
            ideal,
            optimal: ideal.min(processors),
            max_job,
            total,
        })
    }

    /// Schedules `jobs` on at most `processors` processors, padding the
    /// result to exactly `processors` bins with idle processors last.
    ///
    /// # Errors
    /// Same as [`OptimizedLptScheduler::plan`].
    pub fn schedule(&self, jobs: &[i64], processors: usize) -> Result<ProcessorSchedule> {
        let plan = self.plan(jobs, processors)?;
        debug!(
            requested = plan.requested,
            ideal = plan.ideal,
            optimal = plan.optimal,
            max_job = plan.max_job,
            total = plan.total,
            "Optimized processor plan"
        );

        let mut schedule = self.inner.schedule(jobs, plan.optimal)?;
        schedule.pad_idle(plan.idle());
        Ok(schedule)
    }
}

/// `ceil(total / max_job)` in exact integer arithmetic.
fn ideal_processor_count(total: i64, max_job: i64) -> usize {
    if max_job <= 0 {
        return 1;
    }
    let quotient = total / max_job;
    let ceil = if total % max_job == 0 {
        quotient
    } else {
        quotient + 1
    };
    // total >= max_job > 0 here, so ceil >= 1.
    usize::try_from(ceil).unwrap_or(usize::MAX)
}

/// Fewest processors (at most `processors`) used by the optimized scheduler.
pub fn optimal_processor_count(jobs: &[i64], processors: usize) -> Result<usize> {
    OptimizedLptScheduler::new()
        .plan(jobs, processors)
        .map(|plan| plan.optimal)
}

/// Schedules with the default [`OptimizedLptScheduler`].
pub fn schedule_optimized(jobs: &[i64], processors: usize) -> Result<ProcessorSchedule> {
    OptimizedLptScheduler::new().schedule(jobs, processors)
}
