use async_trait::async_trait;
use eyre::Result;
use timetable_core::models::{
    schedule_slot::{NewScheduleSlot, ScheduleSlot, ScheduleSlotPatch},
    teacher::{NewTeacher, Teacher, TeacherPatch},
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::store::ScheduleStore;

/// Process-local store. Records live in insertion order, which is also the
/// order listings return.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    teachers: Vec<Teacher>,
    slots: Vec<ScheduleSlot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        Ok(self.inner.read().await.teachers.clone())
    }

    async fn get_teacher(&self, id: &str) -> Result<Option<Teacher>> {
        let tables = self.inner.read().await;
        Ok(tables.teachers.iter().find(|t| t.id == id).cloned())
    }

    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher> {
        let teacher = Teacher::new(generate_id(), teacher);
        debug!("Creating teacher: id={}, name={}", teacher.id, teacher.name);
        self.inner.write().await.teachers.push(teacher.clone());
        Ok(teacher)
    }

    async fn update_teacher(&self, id: &str, patch: TeacherPatch) -> Result<Option<Teacher>> {
        let mut tables = self.inner.write().await;
        Ok(tables.teachers.iter_mut().find(|t| t.id == id).map(|teacher| {
            teacher.apply(patch);
            teacher.clone()
        }))
    }

    async fn delete_teacher(&self, id: &str) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let before = tables.teachers.len();
        tables.teachers.retain(|t| t.id != id);
        Ok(tables.teachers.len() < before)
    }

    async fn list_slots(&self) -> Result<Vec<ScheduleSlot>> {
        Ok(self.inner.read().await.slots.clone())
    }

    async fn list_slots_by_teacher(&self, teacher_id: &str) -> Result<Vec<ScheduleSlot>> {
        let tables = self.inner.read().await;
        Ok(tables
            .slots
            .iter()
            .filter(|slot| slot.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn get_slot(&self, id: &str) -> Result<Option<ScheduleSlot>> {
        let tables = self.inner.read().await;
        Ok(tables.slots.iter().find(|slot| slot.id == id).cloned())
    }

    async fn create_slot(&self, slot: NewScheduleSlot) -> Result<ScheduleSlot> {
        let slot = ScheduleSlot::new(generate_id(), slot);
        debug!(
            "Creating schedule slot: id={}, teacher_id={}, {} period {} class {}/{}",
            slot.id, slot.teacher_id, slot.day, slot.period, slot.grade, slot.section
        );
        self.inner.write().await.slots.push(slot.clone());
        Ok(slot)
    }

    async fn update_slot(
        &self,
        id: &str,
        patch: ScheduleSlotPatch,
    ) -> Result<Option<ScheduleSlot>> {
        let mut tables = self.inner.write().await;
        Ok(tables.slots.iter_mut().find(|slot| slot.id == id).map(|slot| {
            slot.apply(patch);
            slot.clone()
        }))
    }

    async fn delete_slot(&self, id: &str) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let before = tables.slots.len();
        tables.slots.retain(|slot| slot.id != id);
        Ok(tables.slots.len() < before)
    }

    async fn delete_slots_by_teacher(&self, teacher_id: &str) -> Result<u64> {
        let mut tables = self.inner.write().await;
        let before = tables.slots.len();
        tables.slots.retain(|slot| slot.teacher_id != teacher_id);
        let removed = (before - tables.slots.len()) as u64;
        debug!("Deleted {} schedule slots for teacher {}", removed, teacher_id);
        Ok(removed)
    }
}
