//! Job model.
//!
//! A job is an anonymous unit of work characterized only by its
//! processing time. Jobs with equal lengths are interchangeable; the
//! position in the caller's input is kept so that assignment order can be
//! traced back to the input and ties stay reproducible.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5 (Parallel Machine Models)

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A job placed on a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Index of the job in the input sequence.
    pub position: usize,
    /// Processing time.
    pub length: i64,
}

impl Job {
    /// Creates a job.
    pub fn new(position: usize, length: i64) -> Self {
        Self { position, length }
    }

    /// Orders jobs longest first; equal lengths keep input order.
    #[inline]
    pub fn lpt_order(a: &Job, b: &Job) -> Ordering {
        b.length
            .cmp(&a.length)
            .then_with(|| a.position.cmp(&b.position))
    }
}

/// Wraps raw lengths into positioned jobs.
pub fn jobs_from_lengths(lengths: &[i64]) -> Vec<Job> {
    lengths
        .iter()
        .enumerate()
        .map(|(position, &length)| Job::new(position, length))
        .collect()
}

/// Returns the jobs sorted longest first (stable with respect to input order).
pub fn sorted_longest_first(lengths: &[i64]) -> Vec<Job> {
    let mut jobs = jobs_from_lengths(lengths);
    jobs.sort_by(Job::lpt_order);
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_from_lengths_keeps_positions() {
        let jobs = jobs_from_lengths(&[4, 7]);
        assert_eq!(jobs, vec![Job::new(0, 4), Job::new(1, 7)]);
    }

    #[test]
    fn test_sorted_longest_first() {
        let sorted = sorted_longest_first(&[3, 1, 6, 4, 5, 2]);
        let lengths: Vec<i64> = sorted.iter().map(|j| j.length).collect();
        assert_eq!(lengths, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_lengths() {
        let sorted = sorted_longest_first(&[2, 9, 2, 2]);
        let positions: Vec<usize> = sorted.iter().map(|j| j.position).collect();
        assert_eq!(positions, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sorted_longest_first(&[]).is_empty());
    }
}
