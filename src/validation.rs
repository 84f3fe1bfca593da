//! Input validation for parallel machine scheduling.
//!
//! Both schedulers check their preconditions before doing any work and
//! stop at the first violation. Detects:
//! - Zero processors
//! - Empty job lists (where a maximum job length is required)
//! - Negative processing times
//! - Total processing time that does not fit in `i64`

use std::fmt;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than one processor requested.
    NoProcessors,
    /// No jobs given where at least one is required.
    EmptyJobs,
    /// A job has a negative processing time.
    NegativeLength {
        /// Input position of the offending job.
        position: usize,
    },
    /// The sum of processing times overflows.
    LoadOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks that at least one processor is available.
pub fn validate_processors(processors: usize) -> Result<(), ValidationError> {
    if processors == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NoProcessors,
            "At least one processor is required, got 0",
        ));
    }
    Ok(())
}

/// Checks job lengths and returns their total.
///
/// Lengths must be non-negative and their sum must fit in `i64`.
pub fn validate_jobs(jobs: &[i64]) -> Result<i64, ValidationError> {
    let mut total: i64 = 0;
    for (position, &length) in jobs.iter().enumerate() {
        if length < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeLength { position },
                format!("Job at position {position} has negative length {length}"),
            ));
        }
        total = total.checked_add(length).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::LoadOverflow,
                format!("Total job length overflows at position {position}"),
            )
        })?;
    }
    Ok(total)
}

/// Checks that the job list is not empty.
pub fn validate_non_empty(jobs: &[i64]) -> Result<(), ValidationError> {
    if jobs.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyJobs,
            "At least one job is required to derive the processor count",
        ));
    }
    Ok(())
}
