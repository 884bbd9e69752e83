use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use timetable_core::{
    errors::{ScheduleError, StorageResultExt},
    models::schedule_slot::ScheduleSlot,
    validation,
};
use tracing::{debug, info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

pub async fn list_schedule_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ScheduleSlot>>, AppError> {
    let slots = state
        .store
        .list_slots()
        .await
        .failed_to("fetch schedule slots")?;
    Ok(Json(slots))
}

pub async fn list_teacher_schedule_slots(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<String>,
) -> Result<Json<Vec<ScheduleSlot>>, AppError> {
    let slots = state
        .store
        .list_slots_by_teacher(&teacher_id)
        .await
        .failed_to("fetch teacher schedule slots")?;
    Ok(Json(slots))
}

pub async fn get_schedule_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<ScheduleSlot>, AppError> {
    let slot = state
        .store
        .get_slot(&id)
        .await
        .failed_to("fetch schedule slot")?
        .ok_or(ScheduleError::NotFound("Schedule slot"))?;
    Ok(Json(slot))
}

pub async fn create_schedule_slot(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ScheduleSlot>), AppError> {
    let Json(body) = payload?;
    let new_slot = validation::parse_new_slot(&body).map_err(ScheduleError::Validation)?;

    let slot = state
        .store
        .create_slot(new_slot)
        .await
        .failed_to("create schedule slot")?;

    Ok((StatusCode::CREATED, Json(slot)))
}

pub async fn update_schedule_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScheduleSlot>, AppError> {
    let Json(body) = payload?;
    let patch = validation::parse_slot_patch(&body).map_err(ScheduleError::Validation)?;

    let slot = state
        .store
        .update_slot(&id, patch)
        .await
        .failed_to("update schedule slot")?
        .ok_or(ScheduleError::NotFound("Schedule slot"))?;

    Ok(Json(slot))
}

pub async fn delete_schedule_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = state
        .store
        .delete_slot(&id)
        .await
        .failed_to("delete schedule slot")?;

    if !deleted {
        return Err(ScheduleError::NotFound("Schedule slot").into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Replaces every slot of one teacher with the slots in the body.
///
/// The teacher's existing slots are deleted first, then each payload is
/// stamped with the path teacher id, validated and created in order. There is
/// no transaction: if an element fails validation the deletion and the slots
/// created before it remain.
pub async fn replace_teacher_schedule_slots(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<ScheduleSlot>>), AppError> {
    const OPERATION: &str = "batch create schedule slots";

    let Json(body) = payload?;
    let payloads = validation::slot_payloads(&body)?;

    let removed = state
        .store
        .delete_slots_by_teacher(&teacher_id)
        .await
        .failed_to(OPERATION)?;
    debug!("Removed {} slots of teacher {}", removed, teacher_id);

    let mut created = Vec::with_capacity(payloads.len());
    for (index, raw) in payloads.iter().enumerate() {
        let stamped =
            validation::with_overrides(raw, [("teacherId", Value::from(teacher_id.as_str()))]);
        let new_slot = match validation::parse_new_slot(&stamped) {
            Ok(new_slot) => new_slot,
            Err(details) => {
                warn!(
                    "Batch for teacher {} rejected at slot {}; {} slots already created",
                    teacher_id,
                    index,
                    created.len()
                );
                return Err(ScheduleError::Validation(details).into());
            }
        };
        created.push(state.store.create_slot(new_slot).await.failed_to(OPERATION)?);
    }

    info!("Replaced schedule of teacher {} with {} slots", teacher_id, created.len());
    Ok((StatusCode::CREATED, Json(created)))
}
