//! Wall-clock measurement around a scheduling call.
//!
//! Keeps timing out of the schedulers: wrap any call in [`measure`] and
//! the elapsed time is logged and returned next to the result.

use std::time::{Duration, Instant};

use tracing::info;

/// A value together with the time it took to compute.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    /// Computed value.
    pub value: T,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
}

impl<T> Measured<T> {
    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs `f`, logs how long it took under `label`, and returns both.
///
/// # Example
///
/// ```
/// use u_lpt::scheduler::{measure, schedule};
///
/// let measured = measure("lpt", || schedule(&[3, 1, 6], 2));
/// assert_eq!(measured.value.unwrap().loads(), &[6, 4]);
/// ```
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> Measured<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    info!(label, elapsed_ms, "{label} function took {elapsed_ms:.3} ms");
    Measured { value, elapsed }
}
