use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            post(handlers::appointments::create_appointment),
        )
        .route(
            "/api/appointments/customer/:customer_id",
            get(handlers::appointments::list_customer_appointments),
        )
        .route(
            "/api/appointments/:id/cancel",
            put(handlers::appointments::cancel_appointment),
        )
}
