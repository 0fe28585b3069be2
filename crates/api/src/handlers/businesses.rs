use axum::{
    Json,
    extract::{Path, State},
};
use slotbook_core::{
    errors::BookingError,
    models::business::{BUSINESS_ID, BusinessProfile},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Public profiles of every business; empty until settings exist
#[axum::debug_handler]
pub async fn list_businesses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BusinessProfile>>, AppError> {
    let profiles = state
        .store
        .business_settings()
        .await?
        .map(BusinessProfile::from)
        .into_iter()
        .collect();

    Ok(Json(profiles))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<BusinessProfile>, AppError> {
    let not_found = || BookingError::NotFound(format!("Business with ID {} not found", id));

    if id != BUSINESS_ID {
        return Err(AppError(not_found()));
    }

    let settings = state.store.business_settings().await?.ok_or_else(not_found)?;

    Ok(Json(settings.into()))
}
