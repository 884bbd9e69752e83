pub mod calendar;
pub mod class_schedule;
pub mod schedule_slot;
pub mod teacher;
