use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::models::{schedule_slot::ScheduleSlot, teacher::Teacher};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleSlot {
    pub id: String,
    pub teacher_id: String,
    pub day: String,
    pub period: i32,
    pub grade: i32,
    pub section: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
            subject: row.subject,
        }
    }
}

impl TryFrom<DbScheduleSlot> for ScheduleSlot {
    type Error = eyre::Report;

    fn try_from(row: DbScheduleSlot) -> Result<Self> {
        let day = row
            .day
            .parse()
            .wrap_err_with(|| format!("Schedule slot {} has a corrupt day", row.id))?;

        Ok(ScheduleSlot {
            id: row.id,
            teacher_id: row.teacher_id,
            day,
            period: row.period,
            grade: row.grade,
            section: row.section,
        })
    }
}

pub(crate) fn into_slots(rows: Vec<DbScheduleSlot>) -> Result<Vec<ScheduleSlot>> {
    rows.into_iter().map(ScheduleSlot::try_from).collect()
}
