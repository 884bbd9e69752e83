use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use timetable_core::{
    conflict::{SlotConflict, class_conflicts},
    errors::{ScheduleError, StorageResultExt},
    models::{
        class_schedule::{ClassScheduleEntry, build_class_schedule},
        schedule_slot::ScheduleSlot,
    },
    validation,
};
use tracing::{debug, info, warn};

use crate::{ApiState, handlers::parse_class, middleware::error_handling::AppError};

/// Returns the timetable of one `(grade, section)` class, one row per slot,
/// ordered by day and period.
pub async fn get_class_schedule(
    State(state): State<Arc<ApiState>>,
    Path((grade, section)): Path<(String, String)>,
) -> Result<Json<Vec<ClassScheduleEntry>>, AppError> {
    const OPERATION: &str = "fetch class schedule";

    let (grade, section) = parse_class(&grade, &section)?;

    let slots = state.store.list_slots().await.failed_to(OPERATION)?;
    let teachers = state.store.list_teachers().await.failed_to(OPERATION)?;

    Ok(Json(build_class_schedule(&slots, &teachers, grade, section)))
}

/// Replaces the timetable of one class.
///
/// Every slot of the class is deleted, then each payload is created with its
/// grade and section forced to the path values. Like the per-teacher batch,
/// a failing element leaves earlier work in place.
pub async fn save_class_schedule(
    State(state): State<Arc<ApiState>>,
    Path((grade, section)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<ScheduleSlot>>), AppError> {
    const OPERATION: &str = "save class schedule";

    let (grade, section) = parse_class(&grade, &section)?;
    let Json(body) = payload?;
    let payloads = validation::slot_payloads(&body)?;

    let existing = state.store.list_slots().await.failed_to(OPERATION)?;
    let mut removed = 0;
    for slot in existing.iter().filter(|slot| slot.belongs_to_class(grade, section)) {
        if state.store.delete_slot(&slot.id).await.failed_to(OPERATION)? {
            removed += 1;
        }
    }
    debug!("Removed {} slots of class {}/{}", removed, grade, section);

    let mut created = Vec::with_capacity(payloads.len());
    for (index, raw) in payloads.iter().enumerate() {
        let stamped = validation::with_overrides(
            raw,
            [("grade", Value::from(grade)), ("section", Value::from(section))],
        );
        let new_slot = match validation::parse_new_slot(&stamped) {
            Ok(new_slot) => new_slot,
            Err(details) => {
                warn!(
                    "Schedule of class {}/{} rejected at slot {}; {} slots already created",
                    grade,
                    section,
                    index,
                    created.len()
                );
                return Err(ScheduleError::Validation(details).into());
            }
        };
        created.push(state.store.create_slot(new_slot).await.failed_to(OPERATION)?);
    }

    info!("Saved schedule of class {}/{} with {} slots", grade, section, created.len());
    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists the double-booked cells of a class. Purely informational: nothing
/// prevents such cells from being written.
pub async fn get_class_conflicts(
    State(state): State<Arc<ApiState>>,
    Path((grade, section)): Path<(String, String)>,
) -> Result<Json<Vec<SlotConflict>>, AppError> {
    let (grade, section) = parse_class(&grade, &section)?;

    let slots = state
        .store
        .list_slots()
        .await
        .failed_to("fetch class conflicts")?;

    Ok(Json(class_conflicts(&slots, grade, section)))
}
