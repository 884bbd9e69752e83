/// Class timetable aggregation and replacement
pub mod class_schedule;
/// Schedule slot CRUD and per-teacher batch replacement
pub mod schedule_slot;
/// Teacher CRUD
pub mod teacher;

use timetable_core::errors::{ScheduleError, ScheduleResult};

/// Parses the `:grade/:section` segments of a class path.
pub(crate) fn parse_class(grade: &str, section: &str) -> ScheduleResult<(i32, i32)> {
    match (grade.trim().parse::<i32>(), section.trim().parse::<i32>()) {
        (Ok(grade), Ok(section)) => Ok((grade, section)),
        _ => Err(ScheduleError::BadRequest("Invalid grade or section".to_string())),
    }
}
