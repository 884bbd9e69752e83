//! # Timetable Core
//!
//! Domain types shared by the storage and API crates: teachers, weekly
//! schedule slots, the fixed school calendar, payload validation and the
//! advisory conflict scan.

pub mod conflict;
pub mod errors;
pub mod models;
pub mod validation;
