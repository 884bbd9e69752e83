use axum::{body::to_bytes, http::StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use timetable_api::middleware::error_handling::map_error;
use timetable_core::{errors::ScheduleError, validation::FieldError};
use timetable_db::mock::MockStore;

use crate::test_utils::{TestContext, slot_body};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let response = map_error(ScheduleError::NotFound("Teacher"));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Teacher not found" }));
}

#[tokio::test]
async fn test_error_handling_validation() {
    let response = map_error(ScheduleError::Validation(vec![FieldError::new(
        "period",
        "Required",
    )]));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Invalid data",
            "details": [{ "field": "period", "message": "Required" }],
        })
    );
}

#[tokio::test]
async fn test_error_handling_bad_request() {
    let response = map_error(ScheduleError::BadRequest("Slots must be an array".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Slots must be an array" }));
}

#[tokio::test]
async fn test_error_handling_storage_hides_cause() {
    let response = map_error(ScheduleError::Storage {
        operation: "delete teacher",
        source: eyre::eyre!("password authentication failed for user postgres"),
    });

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Failed to delete teacher" }));
}

#[tokio::test]
async fn test_storage_failure_becomes_500() {
    let mut store = MockStore::new();
    store
        .expect_list_teachers()
        .times(1)
        .returning(|| Err(eyre::eyre!("connection reset")));
    let ctx = TestContext::with_mock(store);

    let response = ctx.server.get("/api/teachers").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "error": "Failed to fetch teachers" }));
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_store() {
    let mut store = MockStore::new();
    store.expect_create_teacher().never();
    store.expect_create_slot().never();
    let ctx = TestContext::with_mock(store);

    let response = ctx.server.post("/api/teachers").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/api/schedule-slots")
        .json(&slot_body("t1", "Saturday", 1, 10, 1))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_shape_checked_before_delete() {
    let mut store = MockStore::new();
    store.expect_delete_slots_by_teacher().never();
    let ctx = TestContext::with_mock(store);

    let response = ctx
        .server
        .post("/api/teachers/t1/schedule-slots/batch")
        .json(&json!({ "items": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_storage_failure_reports_operation() {
    let mut store = MockStore::new();
    store
        .expect_delete_slots_by_teacher()
        .times(1)
        .returning(|_| Ok(4));
    store
        .expect_create_slot()
        .times(1)
        .returning(|_| Err(eyre::eyre!("disk full")));
    let ctx = TestContext::with_mock(store);

    let response = ctx
        .server
        .post("/api/teachers/t1/schedule-slots/batch")
        .json(&json!({ "slots": [slot_body("t1", "Sunday", 1, 10, 1), slot_body("t1", "Sunday", 2, 10, 1)] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to batch create schedule slots" })
    );
}

#[tokio::test]
async fn test_class_schedule_storage_failure() {
    let mut store = MockStore::new();
    store.expect_list_slots().returning(|| Ok(vec![]));
    store
        .expect_list_teachers()
        .returning(|| Err(eyre::eyre!("timeout")));
    let ctx = TestContext::with_mock(store);

    let response = ctx.server.get("/api/class-schedules/10/1").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to fetch class schedule" })
    );
}
