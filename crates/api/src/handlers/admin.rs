//! # Admin Handlers
//!
//! Staff-side appointment review and business configuration.
//!
//! Status changes go through the appointment lifecycle: only pending
//! appointments can be approved, and rejected or cancelled appointments are
//! final. Settings updates are refused when slot duration plus buffer would
//! not move the slot generator forward.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use slotbook_core::{
    errors::BookingError,
    models::{
        appointment::{
            AppointmentFilter, AppointmentResponse, AppointmentStatus, RejectAppointmentRequest,
        },
        business::{
            BreakTime, BusinessSettings, CreateBreakTimeRequest, UpdateBusinessSettingsRequest,
            UpdateWorkingHoursRequest, WorkingHours,
        },
    },
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::{find_appointment, require_settings, transition_appointment},
    middleware::error_handling::AppError,
};

/// Query parameters for listing appointments
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListQuery {
    /// Only appointments starting at or after this instant
    pub date_from: Option<DateTime<Utc>>,
    /// Only appointments starting before this instant
    pub date_to: Option<DateTime<Utc>>,
    pub service_id: Option<Uuid>,
    /// `pending`, `approved`, `rejected` or `cancelled`; anything else or
    /// an empty value leaves status unfiltered
    pub status: Option<String>,
}

impl AppointmentListQuery {
    fn into_filter(self) -> AppointmentFilter {
        let status = self
            .status
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match raw.parse::<AppointmentStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    debug!("Ignoring unknown status filter: {}", raw);
                    None
                }
            });

        AppointmentFilter {
            date_from: self.date_from,
            date_to: self.date_to,
            service_id: self.service_id,
            customer_id: None,
            status,
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let filter = query.into_filter();
    let appointments = state.store.list_appointments(&filter).await?;

    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn approve_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = find_appointment(&state, id).await?;
    let updated =
        transition_appointment(&state, &appointment, AppointmentStatus::Approved, None).await?;

    Ok(Json(updated.into()))
}

#[axum::debug_handler]
pub async fn reject_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectAppointmentRequest>,
) -> Result<StatusCode, AppError> {
    let appointment = find_appointment(&state, id).await?;
    transition_appointment(
        &state,
        &appointment,
        AppointmentStatus::Rejected,
        payload.admin_note,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancels an appointment regardless of who booked it
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let appointment = find_appointment(&state, id).await?;
    transition_appointment(&state, &appointment, AppointmentStatus::Cancelled, None).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_appointment(id).await? {
        return Err(AppError(BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        ))));
    }

    info!("Deleted appointment {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<BusinessSettings>, AppError> {
    Ok(Json(require_settings(&state).await?))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateBusinessSettingsRequest>,
) -> Result<Json<BusinessSettings>, AppError> {
    payload.validate()?;

    let settings = state
        .store
        .update_business_settings(&payload)
        .await?
        .ok_or_else(|| {
            BookingError::Configuration("Business settings not configured".to_string())
        })?;
    info!(
        "Business settings updated: {} min slots, {} min buffer",
        settings.slot_duration_minutes, settings.buffer_time_minutes
    );

    Ok(Json(settings))
}

#[axum::debug_handler]
pub async fn list_working_hours(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<WorkingHours>>, AppError> {
    Ok(Json(state.store.list_working_hours().await?))
}

#[axum::debug_handler]
pub async fn update_working_hours(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkingHoursRequest>,
) -> Result<Json<WorkingHours>, AppError> {
    payload.validate()?;

    let hours = state
        .store
        .update_working_hours(id, &payload)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Working hours with ID {} not found", id)))?;
    info!("Working hours for {} updated", hours.day_of_week);

    Ok(Json(hours))
}

#[axum::debug_handler]
pub async fn list_break_times(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BreakTime>>, AppError> {
    Ok(Json(state.store.list_break_times().await?))
}

#[axum::debug_handler]
pub async fn create_break_time(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBreakTimeRequest>,
) -> Result<(StatusCode, Json<BreakTime>), AppError> {
    payload.validate()?;

    let break_time = state.store.create_break_time(&payload).await?;
    info!(
        "Break added on {}: {} - {}",
        break_time.day_of_week, break_time.start_time, break_time.end_time
    );

    Ok((StatusCode::CREATED, Json(break_time)))
}

#[axum::debug_handler]
pub async fn delete_break_time(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_break_time(id).await? {
        return Err(AppError(BookingError::NotFound(format!(
            "Break time with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
