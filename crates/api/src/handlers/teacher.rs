use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use timetable_core::{
    errors::{ScheduleError, StorageResultExt},
    models::teacher::Teacher,
    validation,
};
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.store.list_teachers().await.failed_to("fetch teachers")?;
    Ok(Json(teachers))
}

pub async fn get_teacher(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state
        .store
        .get_teacher(&id)
        .await
        .failed_to("fetch teacher")?
        .ok_or(ScheduleError::NotFound("Teacher"))?;

    Ok(Json(teacher))
}

pub async fn create_teacher(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let Json(body) = payload?;
    let new_teacher = validation::parse_new_teacher(&body).map_err(ScheduleError::Validation)?;

    let teacher = state
        .store
        .create_teacher(new_teacher)
        .await
        .failed_to("create teacher")?;

    info!("Created teacher {} ({})", teacher.id, teacher.name);
    Ok((StatusCode::CREATED, Json(teacher)))
}

pub async fn update_teacher(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Teacher>, AppError> {
    let Json(body) = payload?;
    let patch = validation::parse_teacher_patch(&body).map_err(ScheduleError::Validation)?;

    let teacher = state
        .store
        .update_teacher(&id, patch)
        .await
        .failed_to("update teacher")?
        .ok_or(ScheduleError::NotFound("Teacher"))?;

    Ok(Json(teacher))
}

/// Slots that referenced the teacher are left behind and later resolve to
/// "Unknown" in class timetables.
pub async fn delete_teacher(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = state
        .store
        .delete_teacher(&id)
        .await
        .failed_to("delete teacher")?;

    if !deleted {
        return Err(ScheduleError::NotFound("Teacher").into());
    }

    info!("Deleted teacher {}", id);
    Ok(StatusCode::NO_CONTENT)
}
