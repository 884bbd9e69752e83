use crate::models::DbTeacher;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_teacher(pool: &Pool<Postgres>, name: &str, subject: &str) -> Result<DbTeacher> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    tracing::debug!("Creating teacher: id={}, name={}, subject={}", id, name, subject);

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, name, subject, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, subject, created_at
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(subject)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn get_all_teachers(pool: &Pool<Postgres>) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, name, subject, created_at
        FROM teachers
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(teachers)
}

pub async fn get_teacher_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, name, subject, created_at
        FROM teachers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if teacher.is_none() {
        tracing::debug!("Teacher not found: id={}", id);
    }

    Ok(teacher)
}

/// Absent fields keep their stored value. Returns `None` for an unknown id.
pub async fn update_teacher(
    pool: &Pool<Postgres>,
    id: &str,
    name: Option<&str>,
    subject: Option<&str>,
) -> Result<Option<DbTeacher>> {
    let updated_teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        UPDATE teachers
        SET name = COALESCE($2, name), subject = COALESCE($3, subject)
        WHERE id = $1
        RETURNING id, name, subject, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(subject)
    .fetch_optional(pool)
    .await?;

    Ok(updated_teacher)
}

pub async fn delete_teacher(pool: &Pool<Postgres>, id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM teachers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
