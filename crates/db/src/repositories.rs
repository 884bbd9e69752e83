pub mod schedule_slot;
pub mod teacher;
