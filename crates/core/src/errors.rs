use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The named entity ("Teacher", "Schedule slot") does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid data")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    /// A store call failed. Only the operation name reaches the caller.
    #[error("Failed to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: eyre::Report,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Attaches the failed operation to a storage result.
///
/// ```
/// use timetable_core::errors::{ScheduleError, StorageResultExt};
///
/// let res: eyre::Result<u32> = Err(eyre::eyre!("connection reset"));
/// let err = res.failed_to("fetch teachers").unwrap_err();
/// assert_eq!(err.to_string(), "Failed to fetch teachers");
/// assert!(matches!(err, ScheduleError::Storage { .. }));
/// ```
pub trait StorageResultExt<T> {
    fn failed_to(self, operation: &'static str) -> ScheduleResult<T>;
}

impl<T> StorageResultExt<T> for eyre::Result<T> {
    fn failed_to(self, operation: &'static str) -> ScheduleResult<T> {
        self.map_err(|source| ScheduleError::Storage { operation, source })
    }
}
