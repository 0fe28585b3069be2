//! # Availability Handlers
//!
//! Answers "which slots can I book for this service on this day?".
//!
//! The handler gathers the day's working hours, breaks and held
//! appointments, reads the clock once, and hands everything to the core
//! slot generator. Nothing is cached between requests.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use slotbook_core::{
    availability::{
        booking_window::is_bookable_date, candidate_slots, generate_slots, window::day_window,
    },
    models::{service::resolve_bookable_service, time_slot::TimeSlot},
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{ApiState, handlers::require_settings, middleware::error_handling::AppError};

/// Query parameters for the availability endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// UTC calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,

    pub service_id: Uuid,

    /// Also return slots that cannot be booked, flagged `is_available: false`
    #[serde(default)]
    pub include_unavailable: bool,
}

/// Lists slots for a service on a date
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?date=2025-11-05&service_id=<uuid>
/// ```
///
/// Dates outside the booking window (past, same day when disallowed, or
/// too far ahead) yield an empty list, as do closed days.
///
/// # Errors
///
/// * `BookingError::InvalidService` - Service missing or inactive
/// * `BookingError::Configuration` - Settings missing or unusable
/// * `BookingError::Database` - Storage failure
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let service = resolve_bookable_service(state.store.get_service(query.service_id).await?)?;
    let settings = require_settings(&state).await?;
    let now = state.clock.now();

    if !is_bookable_date(query.date, &settings, now)? {
        debug!("Date {} is outside the booking window", query.date);
        return Ok(Json(Vec::new()));
    }

    let day = query.date.weekday();
    let working_hours = state.store.working_hours_for_day(day).await?;
    let break_times = state.store.break_times_for_day(day).await?;

    let whole_day = day_window(query.date);
    let appointments = state
        .store
        .active_appointments_between(whole_day.start, whole_day.end)
        .await?;

    let slots = if query.include_unavailable {
        candidate_slots(
            query.date,
            &service,
            working_hours.as_ref(),
            &break_times,
            &settings,
            &appointments,
            now,
        )?
    } else {
        generate_slots(
            query.date,
            &service,
            working_hours.as_ref(),
            &break_times,
            &settings,
            &appointments,
            now,
        )?
    };

    debug!(
        "Computed {} slots for service {} on {}",
        slots.len(),
        service.id,
        query.date
    );
    Ok(Json(slots))
}
