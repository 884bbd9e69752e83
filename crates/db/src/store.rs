//! The storage capability set the API is written against.

use async_trait::async_trait;
use eyre::Result;
use timetable_core::models::{
    schedule_slot::{NewScheduleSlot, ScheduleSlot, ScheduleSlotPatch},
    teacher::{NewTeacher, Teacher, TeacherPatch},
};

/// Persistence for teachers and schedule slots.
///
/// Each call is independent: implementations serialize their own writes but
/// promise nothing across calls, so a delete followed by several creates can
/// interleave with another request doing the same.
///
/// Lookups by id return `Ok(None)` (or `Ok(false)` for deletes) when the
/// record is absent; `Err` is reserved for storage failures. Listing returns
/// records in creation order.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    async fn get_teacher(&self, id: &str) -> Result<Option<Teacher>>;

    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher>;

    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Option<Teacher>>;

    /// Leaves the teacher's slots in place.
    async fn delete_teacher(&self, id: &str) -> Result<bool>;

    async fn list_slots(&self) -> Result<Vec<ScheduleSlot>>;

    async fn list_slots_by_teacher(&self, teacher_id: &str) -> Result<Vec<ScheduleSlot>>;

    async fn get_slot(&self, id: &str) -> Result<Option<ScheduleSlot>>;

    async fn create_slot(&self, slot: NewScheduleSlot) -> Result<ScheduleSlot>;

    async fn update_slot(&self, id: &str, patch: ScheduleSlotPatch)
    -> Result<Option<ScheduleSlot>>;

    async fn delete_slot(&self, id: &str) -> Result<bool>;

    /// Returns how many slots were removed.
    async fn delete_slots_by_teacher(&self, teacher_id: &str) -> Result<u64>;
}
