use serde::{Deserialize, Serialize};

use super::calendar::Weekday;

/// One weekly lesson: a teacher teaching a `(grade, section)` class at
/// `(day, period)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: String,
    /// May point at a teacher that no longer exists.
    pub teacher_id: String,
    pub day: Weekday,
    pub period: i32,
    pub grade: i32,
    pub section: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleSlot {
    pub teacher_id: String,
    pub day: Weekday,
    pub period: i32,
    pub grade: i32,
    pub section: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlotPatch {
    pub teacher_id: Option<String>,
    pub day: Option<Weekday>,
    pub period: Option<i32>,
    pub grade: Option<i32>,
    pub section: Option<i32>,
}

/// A single cell of a class timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassPeriod {
    pub grade: i32,
    pub section: i32,
    pub day: Weekday,
    pub period: i32,
}

impl ScheduleSlot {
    pub fn new(id: String, fields: NewScheduleSlot) -> Self {
        Self {
            id,
            teacher_id: fields.teacher_id,
            day: fields.day,
            period: fields.period,
            grade: fields.grade,
            section: fields.section,
        }
    }

    pub fn apply(&mut self, patch: ScheduleSlotPatch) {
        if let Some(teacher_id) = patch.teacher_id {
            self.teacher_id = teacher_id;
        }
        if let Some(day) = patch.day {
            self.day = day;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
        if let Some(section) = patch.section {
            self.section = section;
        }
    }

    pub fn belongs_to_class(&self, grade: i32, section: i32) -> bool {
        self.grade == grade && self.section == section
    }

    pub fn class_period(&self) -> ClassPeriod {
        ClassPeriod {
            grade: self.grade,
            section: self.section,
            day: self.day,
            period: self.period,
        }
    }
}
