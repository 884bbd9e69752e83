use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/class-schedules/:grade/:section",
            get(handlers::class_schedule::get_class_schedule)
                .post(handlers::class_schedule::save_class_schedule),
        )
        .route(
            "/api/class-schedules/:grade/:section/conflicts",
            get(handlers::class_schedule::get_class_conflicts),
        )
}
