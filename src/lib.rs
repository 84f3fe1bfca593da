//! Parallel machine load balancing for the U-Engine ecosystem.
//!
//! Assigns jobs with known processing times to identical processors so
//! that the last processor finishes as early as possible (`P || C_max`).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `ProcessorSchedule`
//! - **`scheduler`**: `LptScheduler`, `OptimizedLptScheduler`, `ScheduleKpi`, `measure`
//! - **`validation`**: Input checks (processor count, job lengths)
//! - **`workload`**: Built-in and random job sets
//!
//! # Example
//!
//! ```
//! use u_lpt::scheduler::{schedule, schedule_optimized};
//!
//! let (assignment, loads) = schedule(&[2, 2, 2], 2).unwrap().into_parts();
//! assert_eq!(assignment, vec![vec![2, 2], vec![2]]);
//! assert_eq!(loads, vec![4, 2]);
//!
//! let padded = schedule_optimized(&[1, 1, 1, 1], 10).unwrap();
//! assert_eq!(padded.loads().len(), 10);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
