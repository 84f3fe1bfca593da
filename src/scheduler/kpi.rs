//! Schedule quality metrics (KPIs).
//!
//! Computes load-balancing indicators from a completed processor schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest processor load |
//! | Lower Bound | max(longest job, ceil(total / m)) |
//! | Bound Ratio | C_max / lower bound |
//! | LPT Guarantee | 4/3 - 1/(3m) |
//! | Utilization | load / C_max per processor |
//! | Imbalance | C_max - smallest load among busy processors |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5.1: The Makespan without Preemptions

use serde::{Deserialize, Serialize};

use crate::models::ProcessorSchedule;

/// Load-balancing indicators of a processor schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Largest processor load.
    pub makespan: i64,
    /// Sum of all loads.
    pub total_load: i64,
    /// Lower bound on any schedule's makespan for the same jobs and processors.
    pub lower_bound: i64,
    /// `makespan / lower_bound` (1.0 when the lower bound is 0).
    pub bound_ratio: f64,
    /// Worst-case LPT ratio `4/3 - 1/(3m)` for this processor count.
    pub lpt_guarantee: f64,
    /// Processors with at least one job.
    pub active_processors: usize,
    /// Processors without jobs.
    pub idle_processors: usize,
    /// Per-processor utilization (0.0..1.0).
    pub utilization_by_processor: Vec<f64>,
    /// Mean utilization over all processors.
    pub avg_utilization: f64,
    /// Makespan minus the smallest load of a busy processor.
    pub imbalance: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &ProcessorSchedule) -> Self {
        let makespan = schedule.makespan();
        let total_load = schedule.total_load();
        let processors = schedule.processor_count();

        let longest_job = schedule
            .bins()
            .iter()
            .flatten()
            .map(|j| j.length)
            .max()
            .unwrap_or(0);
        let average_floor = if processors == 0 {
            0
        } else {
            let m = processors as i64;
            total_load / m + i64::from(total_load % m != 0)
        };
        let lower_bound = longest_job.max(average_floor);

        let bound_ratio = if lower_bound == 0 {
            1.0
        } else {
            makespan as f64 / lower_bound as f64
        };

        let lpt_guarantee = if processors == 0 {
            1.0
        } else {
            4.0 / 3.0 - 1.0 / (3.0 * processors as f64)
        };

        let utilization_by_processor: Vec<f64> = schedule
            .loads()
            .iter()
            .map(|&load| {
                if makespan == 0 {
                    0.0
                } else {
                    load as f64 / makespan as f64
                }
            })
            .collect();
        let avg_utilization = if utilization_by_processor.is_empty() {
            0.0
        } else {
            utilization_by_processor.iter().sum::<f64>() / utilization_by_processor.len() as f64
        };

        let min_busy_load = schedule
            .bins()
            .iter()
            .zip(schedule.loads())
            .filter(|(bin, _)| !bin.is_empty())
            .map(|(_, &load)| load)
            .min()
            .unwrap_or(makespan);

        Self {
            makespan,
            total_load,
            lower_bound,
            bound_ratio,
            lpt_guarantee,
            active_processors: schedule.active_processor_count(),
            idle_processors: schedule.idle_processor_count(),
            utilization_by_processor,
            avg_utilization,
            imbalance: makespan - min_busy_load,
        }
    }

    /// Whether the makespan is within the LPT guarantee of the lower bound.
    ///
    /// Holding against the lower bound implies holding against the optimum.
    pub fn within_lpt_guarantee(&self) -> bool {
        self.bound_ratio <= self.lpt_guarantee + 1e-12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{schedule, schedule_optimized};

    #[test]
    fn test_kpi_basic() {
        let s = schedule(&[3, 1, 6, 4, 5, 2], 2).unwrap();
        let kpi = ScheduleKpi::calculate(&s);
        assert_eq!(kpi.makespan, 11);
        assert_eq!(kpi.total_load, 21);
        assert_eq!(kpi.lower_bound, 11); // ceil(21 / 2)
        assert!((kpi.bound_ratio - 1.0).abs() < 1e-10);
        assert_eq!(kpi.imbalance, 1);
        assert!(kpi.within_lpt_guarantee());
    }

    #[test]
    fn test_kpi_lpt_guarantee_value() {
        let s = schedule(&[1], 3).unwrap();
        let kpi = ScheduleKpi::calculate(&s);
        assert!((kpi.lpt_guarantee - (4.0 / 3.0 - 1.0 / 9.0)).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_with_idle() {
        let s = schedule_optimized(&[1, 1, 1, 1], 8).unwrap();
        let kpi = ScheduleKpi::calculate(&s);
        assert_eq!(kpi.active_processors, 4);
        assert_eq!(kpi.idle_processors, 4);
        assert!((kpi.utilization_by_processor[0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_processor[7] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
        // Idle processors do not count toward imbalance.
        assert_eq!(kpi.imbalance, 0);
    }

    #[test]
    fn test_kpi_longest_job_bound() {
        let s = schedule(&[10, 1, 1], 3).unwrap();
        let kpi = ScheduleKpi::calculate(&s);
        assert_eq!(kpi.lower_bound, 10);
        assert_eq!(kpi.imbalance, 9);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&ProcessorSchedule::with_processors(2));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.lower_bound, 0);
        assert!((kpi.bound_ratio - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert_eq!(kpi.imbalance, 0);
    }
}
