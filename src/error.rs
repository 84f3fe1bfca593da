use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl ScheduleError {
    /// Whether the call was rejected during input validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScheduleError::InvalidInput(_))
    }

    /// The validation failure behind this error.
    pub fn validation(&self) -> &ValidationError {
        match self {
            ScheduleError::InvalidInput(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
