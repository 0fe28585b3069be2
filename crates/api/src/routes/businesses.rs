use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/businesses", get(handlers::businesses::list_businesses))
        .route("/api/businesses/:id", get(handlers::businesses::get_business))
}
