use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use timetable_core::{
    conflict::SlotConflict,
    models::{calendar::Weekday, class_schedule::ClassScheduleEntry, schedule_slot::ScheduleSlot},
};

use crate::test_utils::{TestContext, slot_body};

#[tokio::test]
async fn test_empty_class_schedule() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/class-schedules/12/8").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_class_schedule_joins_teachers_and_sorts() {
    let ctx = TestContext::new();
    let samir = ctx.create_teacher("Samir", "Math").await;
    let huda = ctx.create_teacher("Huda", "Physics").await;
    ctx.create_slot(slot_body(&samir.id, "Wednesday", 2, 10, 1)).await;
    ctx.create_slot(slot_body(&huda.id, "Sunday", 4, 10, 1)).await;
    ctx.create_slot(slot_body(&huda.id, "Sunday", 1, 10, 2)).await;

    let response = ctx.server.get("/api/class-schedules/10/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "day": "Sunday", "period": 4, "subject": "Physics", "teacherName": "Huda" },
            { "day": "Wednesday", "period": 2, "subject": "Math", "teacherName": "Samir" },
        ])
    );
}

#[tokio::test]
async fn test_deleted_teacher_resolves_to_unknown() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;
    ctx.create_slot(slot_body(&teacher.id, "Monday", 5, 11, 3)).await;
    ctx.server.delete(&format!("/api/teachers/{}", teacher.id)).await;

    let rows: Vec<ClassScheduleEntry> = ctx.server.get("/api/class-schedules/11/3").await.json();

    assert_eq!(
        rows,
        vec![ClassScheduleEntry {
            day: Weekday::Monday,
            period: 5,
            subject: "Unknown".to_string(),
            teacher_name: "Unknown".to_string(),
        }]
    );
}

#[rstest]
#[case("/api/class-schedules/ten/1")]
#[case("/api/class-schedules/10/one")]
#[case("/api/class-schedules/x/1/conflicts")]
#[tokio::test]
async fn test_non_numeric_class_path_is_rejected(#[case] path: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.get(path).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid grade or section" })
    );
}

#[tokio::test]
async fn test_save_then_fetch_class_schedule() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/class-schedules/10/1")
        .json(&json!({ "slots": [{ "day": "Sunday", "period": 1, "teacherId": "t1" }] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Vec<ScheduleSlot> = response.json();
    assert_eq!(created.len(), 1);
    assert_eq!((created[0].grade, created[0].section), (10, 1));

    let rows: Vec<ClassScheduleEntry> = ctx.server.get("/api/class-schedules/10/1").await.json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].day, Weekday::Sunday);
    assert_eq!(rows[0].period, 1);
}

#[tokio::test]
async fn test_save_replaces_only_that_class_and_forces_path_values() {
    let ctx = TestContext::new();
    ctx.create_slot(slot_body("t1", "Sunday", 1, 10, 1)).await;
    ctx.create_slot(slot_body("t2", "Monday", 2, 10, 1)).await;
    let elsewhere = ctx.create_slot(slot_body("t1", "Sunday", 1, 10, 2)).await;

    let response = ctx
        .server
        .post("/api/class-schedules/10/1")
        .json(&json!({
            "slots": [
                { "day": "Tuesday", "period": 3, "teacherId": "t3", "grade": 12, "section": 8 },
            ]
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let all = ctx.all_slots().await;
    assert_eq!(all.len(), 2);
    assert!(all.contains(&elsewhere));
    let saved = all.iter().find(|slot| slot.teacher_id == "t3").expect("saved slot");
    assert_eq!((saved.grade, saved.section), (10, 1));
    assert_eq!(saved.day, Weekday::Tuesday);
}

#[tokio::test]
async fn test_save_class_schedule_errors() {
    let ctx = TestContext::new();
    let existing = ctx.create_slot(slot_body("t1", "Sunday", 1, 10, 1)).await;

    let response = ctx
        .server
        .post("/api/class-schedules/10/1")
        .json(&json!({ "slots": "all of them" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.all_slots().await, vec![existing]);

    let response = ctx
        .server
        .post("/api/class-schedules/10/1")
        .json(&json!({ "slots": [{ "day": "Sunday", "period": 1 }] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["details"][0]["field"], "teacherId");
    assert!(ctx.all_slots().await.is_empty());
}

#[tokio::test]
async fn test_save_for_unknown_grade_fails_validation() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/class-schedules/9/1")
        .json(&json!({ "slots": [{ "day": "Sunday", "period": 1, "teacherId": "t1" }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(ctx.all_slots().await.is_empty());
}

#[tokio::test]
async fn test_class_conflicts_report() {
    let ctx = TestContext::new();
    let first = ctx.create_slot(slot_body("t1", "Sunday", 1, 10, 1)).await;
    let second = ctx.create_slot(slot_body("t2", "Sunday", 1, 10, 1)).await;
    ctx.create_slot(slot_body("t3", "Sunday", 2, 10, 1)).await;

    let response = ctx.server.get("/api/class-schedules/10/1/conflicts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Vec<SlotConflict>>(),
        vec![SlotConflict {
            grade: 10,
            section: 1,
            day: Weekday::Sunday,
            period: 1,
            slot_ids: vec![first.id, second.id],
        }]
    );

    let clean: Vec<SlotConflict> = ctx.server.get("/api/class-schedules/10/2/conflicts").await.json();
    assert!(clean.is_empty());
}
