//! # Appointment Handlers
//!
//! Booking and cancellation for customers.
//!
//! Creating an appointment re-checks everything the availability endpoint
//! promised: the service is bookable, the date is inside the booking window,
//! the window sits within opening hours and clear of breaks, and no held
//! appointment of any service overlaps it. The final insert is still guarded
//! by the storage exclusion constraint, which catches a concurrent booking
//! that slipped in after the check.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Datelike;
use slotbook_core::{
    availability::{
        booking_window::{check_booking_date, check_within_business_hours},
        has_conflict,
        window::Window,
    },
    errors::BookingError,
    models::{
        appointment::{
            AppointmentFilter, AppointmentResponse, AppointmentStatus, CancelAppointmentRequest,
            CreateAppointmentRequest, NewAppointment,
        },
        service::resolve_bookable_service,
    },
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::{find_appointment, require_settings, transition_appointment},
    middleware::error_handling::AppError,
};

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let service = resolve_bookable_service(state.store.get_service(payload.service_id).await?)?;
    let settings = require_settings(&state).await?;
    let now = state.clock.now();

    let start = payload.start_time;
    let end = start + service.duration();

    if start < now {
        return Err(AppError(BookingError::Validation(
            "Cannot book a time in the past".to_string(),
        )));
    }
    check_booking_date(start.date_naive(), &settings, now)?;

    let day = start.weekday();
    let working_hours = state.store.working_hours_for_day(day).await?;
    let break_times = state.store.break_times_for_day(day).await?;
    check_within_business_hours(Window::new(start, end), working_hours.as_ref(), &break_times)?;

    let existing = state.store.active_appointments_between(start, end).await?;
    if has_conflict(start, end, &existing) {
        warn!("Rejected booking {} - {}: overlaps a held appointment", start, end);
        return Err(AppError(BookingError::SlotUnavailable));
    }

    let new = NewAppointment {
        customer_id: payload.customer_id,
        service_id: service.id,
        start_time: start,
        end_time: end,
    };

    let appointment = state.store.create_appointment(&new).await?.ok_or_else(|| {
        warn!("Rejected booking {} - {}: lost race to a concurrent booking", start, end);
        BookingError::SlotUnavailable
    })?;

    info!(
        "Appointment {} booked for service {} at {}",
        appointment.id, service.id, appointment.start_time
    );
    Ok((StatusCode::CREATED, Json(appointment.into())))
}

#[axum::debug_handler]
pub async fn list_customer_appointments(
    State(state): State<Arc<ApiState>>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let filter = AppointmentFilter {
        customer_id: Some(customer_id),
        ..Default::default()
    };

    let appointments = state.store.list_appointments(&filter).await?;

    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

/// Cancels an appointment on behalf of the customer who booked it
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CancelAppointmentRequest>,
) -> Result<StatusCode, AppError> {
    let appointment = find_appointment(&state, id).await?;

    if appointment.customer_id != payload.customer_id {
        return Err(AppError(BookingError::Authorization(
            "Only the customer who booked an appointment can cancel it".to_string(),
        )));
    }

    transition_appointment(&state, &appointment, AppointmentStatus::Cancelled, None).await?;

    Ok(StatusCode::NO_CONTENT)
}
