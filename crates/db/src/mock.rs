use async_trait::async_trait;
use mockall::mock;
use timetable_core::models::{
    schedule_slot::{NewScheduleSlot, ScheduleSlot, ScheduleSlotPatch},
    teacher::{NewTeacher, Teacher, TeacherPatch},
};

use crate::store::ScheduleStore;

// Mock store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl ScheduleStore for Store {
        async fn list_teachers(&self) -> eyre::Result<Vec<Teacher>>;
        async fn get_teacher(&self, id: &str) -> eyre::Result<Option<Teacher>>;
        async fn create_teacher(&self, teacher: NewTeacher) -> eyre::Result<Teacher>;
        async fn update_teacher(
            &self,
            id: &str,
            patch: TeacherPatch,
        ) -> eyre::Result<Option<Teacher>>;
        async fn delete_teacher(&self, id: &str) -> eyre::Result<bool>;
        async fn list_slots(&self) -> eyre::Result<Vec<ScheduleSlot>>;
        async fn list_slots_by_teacher(&self, teacher_id: &str) -> eyre::Result<Vec<ScheduleSlot>>;
        async fn get_slot(&self, id: &str) -> eyre::Result<Option<ScheduleSlot>>;
        async fn create_slot(&self, slot: NewScheduleSlot) -> eyre::Result<ScheduleSlot>;
        async fn update_slot(
            &self,
            id: &str,
            patch: ScheduleSlotPatch,
        ) -> eyre::Result<Option<ScheduleSlot>>;
        async fn delete_slot(&self, id: &str) -> eyre::Result<bool>;
        async fn delete_slots_by_teacher(&self, teacher_id: &str) -> eyre::Result<u64>;
    }
}
