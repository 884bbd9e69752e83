use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{calendar::Weekday, schedule_slot::ScheduleSlot, teacher::Teacher};

/// Shown in place of subject and name when a slot's teacher was deleted.
pub const UNKNOWN_TEACHER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleEntry {
    pub day: Weekday,
    pub period: i32,
    pub subject: String,
    pub teacher_name: String,
}

/// Builds the timetable of one class from every known slot and teacher.
///
/// Rows are ordered by day then period; slots sharing a cell keep their
/// relative storage order.
pub fn build_class_schedule(
    slots: &[ScheduleSlot],
    teachers: &[Teacher],
    grade: i32,
    section: i32,
) -> Vec<ClassScheduleEntry> {
    let teachers_by_id: HashMap<&str, &Teacher> = teachers
        .iter()
        .map(|teacher| (teacher.id.as_str(), teacher))
        .collect();

    let mut entries: Vec<ClassScheduleEntry> = slots
        .iter()
        .filter(|slot| slot.belongs_to_class(grade, section))
        .map(|slot| {
            let teacher = teachers_by_id.get(slot.teacher_id.as_str());
            ClassScheduleEntry {
                day: slot.day,
                period: slot.period,
                subject: teacher
                    .map(|t| t.subject.clone())
                    .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
                teacher_name: teacher
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            }
        })
        .collect();

    entries.sort_by_key(|entry| (entry.day, entry.period));
    entries
}
