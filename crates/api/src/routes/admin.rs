use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers::admin, handlers::services};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        // Appointments
        .route("/api/admin/appointments", get(admin::list_appointments))
        .route(
            "/api/admin/appointments/:id",
            delete(admin::delete_appointment),
        )
        .route(
            "/api/admin/appointments/:id/approve",
            put(admin::approve_appointment),
        )
        .route(
            "/api/admin/appointments/:id/reject",
            put(admin::reject_appointment),
        )
        .route(
            "/api/admin/appointments/:id/cancel",
            put(admin::cancel_appointment),
        )
        // Catalogue, including inactive services
        .route("/api/admin/services", get(services::list_all_services))
        // Business configuration
        .route(
            "/api/admin/settings",
            get(admin::get_settings).put(admin::update_settings),
        )
        .route("/api/admin/working-hours", get(admin::list_working_hours))
        .route(
            "/api/admin/working-hours/:id",
            put(admin::update_working_hours),
        )
        .route(
            "/api/admin/break-times",
            get(admin::list_break_times).post(admin::create_break_time),
        )
        .route(
            "/api/admin/break-times/:id",
            delete(admin::delete_break_time),
        )
}
