//! Schedule (solution) model.
//!
//! A processor schedule partitions the input jobs into one bin per
//! processor. Bin `i` lists the jobs of processor `i` in the order they
//! were assigned, and `loads[i]` is the total processing time of that bin.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

use serde::{Deserialize, Serialize};

use super::Job;

/// Assignment of jobs to identical parallel processors.
///
/// Invariants maintained by every constructor in this crate:
/// - `bins.len() == loads.len()`
/// - `loads[i]` equals the sum of lengths in `bins[i]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorSchedule {
    bins: Vec<Vec<Job>>,
    loads: Vec<i64>,
}

impl ProcessorSchedule {
    /// Creates a schedule with `processors` empty bins.
    pub fn with_processors(processors: usize) -> Self {
        Self {
            bins: vec![Vec::new(); processors],
            loads: vec![0; processors],
        }
    }

    /// Appends `job` to processor `processor` and updates its load.
    ///
    /// # Panics
    /// If `processor` is out of range.
    pub fn assign(&mut self, processor: usize, job: Job) {
        self.bins[processor].push(job);
        self.loads[processor] += job.length;
    }

    /// Appends `count` idle processors after the existing ones.
    pub fn pad_idle(&mut self, count: usize) {
        let target = self.bins.len() + count;
        self.bins.resize_with(target, Vec::new);
        self.loads.resize(target, 0);
    }

    /// Number of processors (bins), busy or idle.
    #[inline]
    pub fn processor_count(&self) -> usize {
        self.bins.len()
    }

    /// Jobs of every processor.
    pub fn bins(&self) -> &[Vec<Job>] {
        &self.bins
    }

    /// Jobs assigned to one processor.
    pub fn processor(&self, index: usize) -> Option<&[Job]> {
        self.bins.get(index).map(Vec::as_slice)
    }

    /// Per-processor loads.
    pub fn loads(&self) -> &[i64] {
        &self.loads
    }

    /// Job lengths per processor, in assignment order.
    pub fn assignment(&self) -> Vec<Vec<i64>> {
        self.bins
            .iter()
            .map(|bin| bin.iter().map(|j| j.length).collect())
            .collect()
    }

    /// Splits into `(assignment, loads)`.
    pub fn into_parts(self) -> (Vec<Vec<i64>>, Vec<i64>) {
        let assignment = self
            .bins
            .into_iter()
            .map(|bin| bin.into_iter().map(|j| j.length).collect())
            .collect();
        (assignment, self.loads)
    }

    /// Makespan: the largest processor load (0 with no processors).
    pub fn makespan(&self) -> i64 {
        self.loads.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all loads.
    pub fn total_load(&self) -> i64 {
        self.loads.iter().sum()
    }

    /// Total number of assigned jobs.
    pub fn job_count(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Processors that received at least one job.
    pub fn active_processor_count(&self) -> usize {
        self.bins.iter().filter(|bin| !bin.is_empty()).count()
    }

    /// Processors without any job.
    pub fn idle_processor_count(&self) -> usize {
        self.processor_count() - self.active_processor_count()
    }

    /// Whether every idle processor comes after every busy one.
    pub fn idle_tail_is_contiguous(&self) -> bool {
        let active = self.active_processor_count();
        self.bins[active..].iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> ProcessorSchedule {
        let mut s = ProcessorSchedule::with_processors(3);
        s.assign(0, Job::new(2, 6));
        s.assign(1, Job::new(4, 5));
        s.assign(0, Job::new(0, 3));
        s
    }

    #[test]
    fn test_with_processors_is_empty() {
        let s = ProcessorSchedule::with_processors(3);
        assert_eq!(s.processor_count(), 3);
        assert_eq!(s.loads(), &[0, 0, 0]);
        assert_eq!(s.job_count(), 0);
        assert_eq!(s.makespan(), 0);
    }

    #[test]
    fn test_assign_updates_load() {
        let s = sample_schedule();
        assert_eq!(s.loads(), &[9, 5, 0]);
        assert_eq!(s.assignment(), vec![vec![6, 3], vec![5], vec![]]);
        assert_eq!(s.processor(0).unwrap()[1].position, 0);
        assert!(s.processor(3).is_none());
    }

    #[test]
    fn test_makespan_and_totals() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 9);
        assert_eq!(s.total_load(), 14);
        assert_eq!(s.job_count(), 3);
        assert_eq!(s.active_processor_count(), 2);
        assert_eq!(s.idle_processor_count(), 1);
    }

    #[test]
    fn test_pad_idle() {
        let mut s = sample_schedule();
        s.pad_idle(2);
        assert_eq!(s.processor_count(), 5);
        assert_eq!(s.loads(), &[9, 5, 0, 0, 0]);
        assert!(s.idle_tail_is_contiguous());
    }

    #[test]
    fn test_idle_gap_detected() {
        let mut s = ProcessorSchedule::with_processors(3);
        s.assign(0, Job::new(0, 1));
        s.assign(2, Job::new(1, 1));
        assert!(!s.idle_tail_is_contiguous());
    }

    #[test]
    fn test_into_parts() {
        let (assignment, loads) = sample_schedule().into_parts();
        assert_eq!(assignment, vec![vec![6, 3], vec![5], vec![]]);
        assert_eq!(loads, vec![9, 5, 0]);
    }

    #[test]
    fn test_empty_schedule() {
        let s = ProcessorSchedule::default();
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.processor_count(), 0);
        assert!(s.idle_tail_is_contiguous());
    }

    #[test]
    fn test_serde_shape() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["loads"], serde_json::json!([9, 5, 0]));
        assert_eq!(json["bins"][0][0]["length"], 6);
    }
}
