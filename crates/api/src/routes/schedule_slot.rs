use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule-slots",
            get(handlers::schedule_slot::list_schedule_slots)
                .post(handlers::schedule_slot::create_schedule_slot),
        )
        .route(
            "/api/schedule-slots/:id",
            get(handlers::schedule_slot::get_schedule_slot)
                .patch(handlers::schedule_slot::update_schedule_slot)
                .delete(handlers::schedule_slot::delete_schedule_slot),
        )
        // `:id` is the teacher id; it must share its name with the
        // `/api/teachers/:id` route.
        .route(
            "/api/teachers/:id/schedule-slots",
            get(handlers::schedule_slot::list_teacher_schedule_slots),
        )
        .route(
            "/api/teachers/:id/schedule-slots/batch",
            post(handlers::schedule_slot::replace_teacher_schedule_slots),
        )
}
