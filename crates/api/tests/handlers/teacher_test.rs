use axum::http::StatusCode;
use fake::{Fake, faker::name::en::Name};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use timetable_core::models::teacher::Teacher;

use crate::test_utils::{TestContext, slot_body};

#[tokio::test]
async fn test_create_then_get_teacher() {
    let ctx = TestContext::new();
    let name: String = Name().fake();

    let response = ctx
        .server
        .post("/api/teachers")
        .json(&json!({ "name": name, "subject": "Biology" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Teacher = response.json();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, name);
    assert_eq!(created.subject, "Biology");

    let response = ctx.server.get(&format!("/api/teachers/{}", created.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Teacher>(), created);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let ctx = TestContext::new();

    let created: Teacher = ctx
        .server
        .post("/api/teachers")
        .json(&json!({ "id": "mine", "name": "Samir", "subject": "Math" }))
        .await
        .json();

    assert_ne!(created.id, "mine");
}

#[tokio::test]
async fn test_list_teachers() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.server.get("/api/teachers").await.json::<Vec<Teacher>>(),
        Vec::<Teacher>::new()
    );

    let first = ctx.create_teacher("Samir", "Math").await;
    let second = ctx.create_teacher("Huda", "Physics").await;

    let response = ctx.server.get("/api/teachers").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Teacher>>(), vec![first, second]);
}

#[tokio::test]
async fn test_create_teacher_validation_error() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/teachers")
        .json(&json!({ "name": 3 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid data");
    assert_eq!(
        body["details"],
        json!([
            { "field": "name", "message": "Expected string, received number" },
            { "field": "subject", "message": "Required" },
        ])
    );
    assert!(ctx.store.list_teachers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_teacher_with_malformed_json() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/teachers")
        .content_type("application/json")
        .text("{ not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(ctx.store.list_teachers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_unknown_teacher() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/teachers/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Teacher not found" }));
}

#[tokio::test]
async fn test_patch_teacher_updates_only_given_fields() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;

    let response = ctx
        .server
        .patch(&format!("/api/teachers/{}", teacher.id))
        .json(&json!({ "subject": "Statistics" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Teacher>(),
        Teacher {
            id: teacher.id,
            name: "Samir".to_string(),
            subject: "Statistics".to_string(),
        }
    );
}

#[tokio::test]
async fn test_patch_teacher_errors() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;

    let response = ctx
        .server
        .patch("/api/teachers/missing")
        .json(&json!({ "name": "Nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = ctx
        .server
        .patch(&format!("/api/teachers/{}", teacher.id))
        .json(&json!({ "name": "" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let stored = ctx.store.get_teacher(&teacher.id).await.unwrap();
    assert_eq!(stored, Some(teacher));
}

#[tokio::test]
async fn test_delete_teacher() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;

    let response = ctx.server.delete(&format!("/api/teachers/{}", teacher.id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = ctx.server.delete(&format!("/api/teachers/{}", teacher.id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_teacher_leaves_storage_unchanged() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;

    let response = ctx.server.delete("/api/teachers/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.store.list_teachers().await.unwrap(), vec![teacher]);
}

#[tokio::test]
async fn test_delete_teacher_keeps_slots() {
    let ctx = TestContext::new();
    let teacher = ctx.create_teacher("Samir", "Math").await;
    let slot = ctx.create_slot(slot_body(&teacher.id, "Sunday", 1, 10, 1)).await;

    ctx.server.delete(&format!("/api/teachers/{}", teacher.id)).await;

    assert_eq!(ctx.all_slots().await, vec![slot]);
}
