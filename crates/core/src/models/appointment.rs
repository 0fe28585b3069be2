use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    availability::window::Window,
    errors::{BookingError, BookingResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl AppointmentStatus {
    /// Only pending and approved appointments hold their time window.
    pub fn occupies_slot(self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved | Self::Rejected | Self::Cancelled)
                | (Self::Approved, Self::Rejected | Self::Cancelled)
        )
    }

    /// # Errors
    ///
    /// * `BookingError::Validation` - `next` is not reachable from `self`
    pub fn transition_to(self, next: Self) -> BookingResult<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(BookingError::Validation(format!(
                "Cannot change appointment status from {} to {}",
                self, next
            )))
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

/// A booked window on the business's single shared resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub service_id: Uuid,
    /// Name of the booked service, read alongside the appointment.
    pub service_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn window(&self) -> Window<DateTime<Utc>> {
        Window::new(self.start_time, self.end_time)
    }
}

/// Everything storage needs to insert a new pending appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub customer_id: Uuid,
    pub service_id: Uuid,
    /// Requested start, already converted to UTC by the client.
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub admin_note: Option<String>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            customer_id: appointment.customer_id,
            service_id: appointment.service_id,
            service_name: appointment.service_name,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            status: appointment.status,
            admin_note: appointment.admin_note,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAppointmentRequest {
    pub customer_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectAppointmentRequest {
    pub admin_note: Option<String>,
}

/// Optional filters for the staff appointment list. Unset fields match all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub service_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
}
