use crate::models::DbScheduleSlot;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::schedule_slot::{NewScheduleSlot, ScheduleSlotPatch};
use uuid::Uuid;

pub async fn create_schedule_slot(
    pool: &Pool<Postgres>,
    slot: &NewScheduleSlot,
) -> Result<DbScheduleSlot> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let schedule_slot = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        INSERT INTO schedule_slots (id, teacher_id, day, period, grade, section, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, teacher_id, day, period, grade, section, created_at
        "#,
    )
    .bind(&id)
    .bind(&slot.teacher_id)
    .bind(slot.day.as_str())
    .bind(slot.period)
    .bind(slot.grade)
    .bind(slot.section)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule_slot)
}

pub async fn get_all_schedule_slots(pool: &Pool<Postgres>) -> Result<Vec<DbScheduleSlot>> {
    let slots = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, teacher_id, day, period, grade, section, created_at
        FROM schedule_slots
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_schedule_slots_by_teacher_id(
    pool: &Pool<Postgres>,
    teacher_id: &str,
) -> Result<Vec<DbScheduleSlot>> {
    let slots = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, teacher_id, day, period, grade, section, created_at
        FROM schedule_slots
        WHERE teacher_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_schedule_slot_by_id(
    pool: &Pool<Postgres>,
    id: &str,
) -> Result<Option<DbScheduleSlot>> {
    let slot = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        SELECT id, teacher_id, day, period, grade, section, created_at
        FROM schedule_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

pub async fn update_schedule_slot(
    pool: &Pool<Postgres>,
    id: &str,
    patch: &ScheduleSlotPatch,
) -> Result<Option<DbScheduleSlot>> {
    let updated_slot = sqlx::query_as::<_, DbScheduleSlot>(
        r#"
        UPDATE schedule_slots
        SET teacher_id = COALESCE($2, teacher_id),
            day = COALESCE($3, day),
            period = COALESCE($4, period),
            grade = COALESCE($5, grade),
            section = COALESCE($6, section)
        WHERE id = $1
        RETURNING id, teacher_id, day, period, grade, section, created_at
        "#,
    )
    .bind(id)
    .bind(patch.teacher_id.as_deref())
    .bind(patch.day.map(|day| day.as_str()))
    .bind(patch.period)
    .bind(patch.grade)
    .bind(patch.section)
    .fetch_optional(pool)
    .await?;

    Ok(updated_slot)
}

pub async fn delete_schedule_slot(pool: &Pool<Postgres>, id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM schedule_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_schedule_slots_by_teacher_id(
    pool: &Pool<Postgres>,
    teacher_id: &str,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM schedule_slots
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
