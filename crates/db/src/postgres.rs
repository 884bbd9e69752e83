use async_trait::async_trait;
use eyre::Result;
use timetable_core::models::{
    schedule_slot::{NewScheduleSlot, ScheduleSlot, ScheduleSlotPatch},
    teacher::{NewTeacher, Teacher, TeacherPatch},
};

use crate::{
    DbPool,
    models::into_slots,
    repositories::{schedule_slot, teacher},
    store::ScheduleStore,
};

/// [`ScheduleStore`] backed by the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ScheduleStore for PgStore {
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        let rows = teacher::get_all_teachers(&self.pool).await?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn get_teacher(&self, id: &str) -> Result<Option<Teacher>> {
        let row = teacher::get_teacher_by_id(&self.pool, id).await?;
        Ok(row.map(Teacher::from))
    }

    async fn create_teacher(&self, new_teacher: NewTeacher) -> Result<Teacher> {
        let row =
            teacher::create_teacher(&self.pool, &new_teacher.name, &new_teacher.subject).await?;
        Ok(row.into())
    }

    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Option<Teacher>> {
        let row = teacher::update_teacher(
            &self.pool,
            id,
            patch.name.as_deref(),
            patch.subject.as_deref(),
        )
        .await?;
        Ok(row.map(Teacher::from))
    }

    async fn delete_teacher(&self, id: &str) -> Result<bool> {
        teacher::delete_teacher(&self.pool, id).await
    }

    async fn list_slots(&self) -> Result<Vec<ScheduleSlot>> {
        into_slots(schedule_slot::get_all_schedule_slots(&self.pool).await?)
    }

    async fn list_slots_by_teacher(&self, teacher_id: &str) -> Result<Vec<ScheduleSlot>> {
        into_slots(schedule_slot::get_schedule_slots_by_teacher_id(&self.pool, teacher_id).await?)
    }

    async fn get_slot(&self, id: &str) -> Result<Option<ScheduleSlot>> {
        schedule_slot::get_schedule_slot_by_id(&self.pool, id)
            .await?
            .map(ScheduleSlot::try_from)
            .transpose()
    }

    async fn create_slot(&self, slot: NewScheduleSlot) -> Result<ScheduleSlot> {
        schedule_slot::create_schedule_slot(&self.pool, &slot)
            .await?
            .try_into()
    }

    async fn update_slot(
        &self,
        id: &str,
        patch: ScheduleSlotPatch,
    ) -> Result<Option<ScheduleSlot>> {
        schedule_slot::update_schedule_slot(&self.pool, id, &patch)
            .await?
            .map(ScheduleSlot::try_from)
            .transpose()
    }

    async fn delete_slot(&self, id: &str) -> Result<bool> {
        schedule_slot::delete_schedule_slot(&self.pool, id).await
    }

    async fn delete_slots_by_teacher(&self, teacher_id: &str) -> Result<u64> {
        schedule_slot::delete_schedule_slots_by_teacher_id(&self.pool, teacher_id).await
    }
}
