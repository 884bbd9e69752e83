/// Class timetable endpoints
pub mod class_schedule;
/// Liveness and version endpoints
pub mod health;
/// Schedule slot endpoints, including the per-teacher batch
pub mod schedule_slot;
/// Teacher endpoints
pub mod teacher;
