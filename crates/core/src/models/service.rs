use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub duration_min: i32,
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// How long one appointment for this service occupies the business.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_min))
    }

    /// Ensures the service can be offered: active with a positive duration.
    pub fn ensure_bookable(&self) -> BookingResult<()> {
        if !self.is_active {
            return Err(BookingError::InvalidService(format!(
                "Service {} is inactive",
                self.id
            )));
        }
        if self.duration_min <= 0 {
            return Err(BookingError::InvalidService(format!(
                "Service {} has non-positive duration {}",
                self.id, self.duration_min
            )));
        }
        Ok(())
    }
}

/// Turns a storage lookup into a service that may be booked.
///
/// # Errors
///
/// * `BookingError::InvalidService` - the service does not exist, is
///   inactive, or has a non-positive duration
pub fn resolve_bookable_service(service: Option<Service>) -> BookingResult<Service> {
    let service = service.ok_or_else(|| {
        BookingError::InvalidService("Service not found or inactive".to_string())
    })?;
    service.ensure_bookable()?;
    Ok(service)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_min: i32,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateServiceRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation(
                "Service name must not be empty".to_string(),
            ));
        }
        validate_duration(self.duration_min)?;
        validate_price(self.price_cents)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub duration_min: Option<i32>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

impl UpdateServiceRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(BookingError::Validation(
                    "Service name must not be empty".to_string(),
                ));
            }
        }
        if let Some(duration) = self.duration_min {
            validate_duration(duration)?;
        }
        if let Some(price) = self.price_cents {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_duration(duration_min: i32) -> BookingResult<()> {
    if duration_min <= 0 {
        return Err(BookingError::Validation(
            "Service duration must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_price(price_cents: i64) -> BookingResult<()> {
    if price_cents < 0 {
        return Err(BookingError::Validation(
            "Service price must not be negative".to_string(),
        ));
    }
    Ok(())
}
