use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use slotbook_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, Service, UpdateServiceRequest},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Active services customers can book
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.store.list_services(true).await?;
    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let service = state
        .store
        .get_service(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(service))
}

/// Every service, inactive ones included
#[axum::debug_handler]
pub async fn list_all_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.store.list_services(false).await?;
    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    payload.validate()?;

    let service = state.store.create_service(&payload).await?;
    info!("Created service {} ({})", service.name, service.id);

    Ok((StatusCode::CREATED, Json(service)))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    payload.validate()?;

    let service = state
        .store
        .update_service(id, &payload)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;
    info!("Updated service {}", service.id);

    Ok(Json(service))
}
