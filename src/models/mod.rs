//! Scheduling domain models.
//!
//! Identical parallel machines (`P || C_max` in Graham notation): jobs
//! are characterized by a processing time only, processors are
//! interchangeable and indexed `0..m`.
//!
//! | u-lpt | Manufacturing | Computing |
//! |-------|---------------|-----------|
//! | Job | Order | Task / batch |
//! | Processor | Machine | Core / worker |
//! | ProcessorSchedule | Machine loading plan | Work partition |

mod job;
mod schedule;

pub use job::{jobs_from_lengths, sorted_longest_first, Job};
pub use schedule::ProcessorSchedule;
