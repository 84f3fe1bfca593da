//! Greedy parallel machine schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! `LptScheduler` assigns jobs longest first to the least-loaded processor.
//! `OptimizedLptScheduler` first reduces the processor count to the fewest
//! processors that the longest job allows, runs LPT, and pads the result
//! with idle processors.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, lower bound, bound ratio, and
//! utilization.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod kpi;
mod lpt;
mod optimized;
mod timing;

pub use kpi::ScheduleKpi;
pub use lpt::{schedule, LptScheduler, SelectionStrategy};
pub use optimized::{
    optimal_processor_count, schedule_optimized, OptimizedLptScheduler, ProcessorPlan,
};
pub use timing::{measure, Measured};
