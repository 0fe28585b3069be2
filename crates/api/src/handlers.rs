/// Staff endpoints for appointments and business configuration
pub mod admin;
/// Customer booking and cancellation
pub mod appointments;
/// Slot listing for a date and service
pub mod availability;
/// Public business profile
pub mod businesses;
/// Service catalogue
pub mod services;

use slotbook_core::{
    errors::{BookingError, BookingResult},
    models::{
        appointment::{Appointment, AppointmentStatus},
        business::BusinessSettings,
    },
};
use uuid::Uuid;

use crate::ApiState;

/// Loads the settings singleton; its absence is a configuration error.
pub(crate) async fn require_settings(state: &ApiState) -> BookingResult<BusinessSettings> {
    state.store.business_settings().await?.ok_or_else(|| {
        BookingError::Configuration("Business settings not configured".to_string())
    })
}

pub(crate) async fn find_appointment(state: &ApiState, id: Uuid) -> BookingResult<Appointment> {
    state
        .store
        .get_appointment(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))
}

/// Moves `appointment` to `next` if its lifecycle allows it and persists the change.
pub(crate) async fn transition_appointment(
    state: &ApiState,
    appointment: &Appointment,
    next: AppointmentStatus,
    admin_note: Option<String>,
) -> BookingResult<Appointment> {
    let status = appointment.status.transition_to(next)?;

    let updated = state
        .store
        .update_appointment_status(appointment.id, status, admin_note)
        .await?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Appointment with ID {} not found", appointment.id))
        })?;

    tracing::info!(
        "Appointment {} moved from {} to {}",
        appointment.id,
        appointment.status,
        updated.status
    );
    Ok(updated)
}
