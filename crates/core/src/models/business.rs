use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Opening hours for one weekday. All times of day are UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub id: Uuid,
    pub day_of_week: Weekday,
    pub is_open: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkingHoursRequest {
    pub is_open: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl UpdateWorkingHoursRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.is_open && self.open_time >= self.close_time {
            return Err(BookingError::Validation(
                "Opening time must be before closing time".to_string(),
            ));
        }
        Ok(())
    }
}

/// A recurring pause on one weekday during which no slot may be offered.
///
/// Breaks on the same day may touch or overlap each other; each one is
/// treated as an independent forbidden interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTime {
    pub id: Uuid,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBreakTimeRequest {
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
}

impl CreateBreakTimeRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.start_time >= self.end_time {
            return Err(BookingError::Validation(
                "Break start must be before break end".to_string(),
            ));
        }
        Ok(())
    }
}

/// Identifier of the single settings record, exposed as the business id.
pub const BUSINESS_ID: i32 = 1;

/// Longest advance booking window staff may configure, about ten years.
pub const MAX_ADVANCE_BOOKING_DAYS: i32 = 3650;

/// Process-wide booking configuration and the business's public profile.
/// Exactly one record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSettings {
    pub business_name: String,
    /// Kind of business shown to customers, e.g. "Barber".
    pub business_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub slot_duration_minutes: i32,
    pub buffer_time_minutes: i32,
    pub allow_same_day_booking: bool,
    pub max_advance_booking_days: i32,
    pub updated_at: DateTime<Utc>,
}

impl BusinessSettings {
    /// Distance between consecutive candidate slot starts.
    ///
    /// # Errors
    ///
    /// * `BookingError::Configuration` - the stride is zero or negative, which
    ///   would make slot generation loop forever
    pub fn stride(&self) -> BookingResult<Duration> {
        let minutes =
            i64::from(self.slot_duration_minutes) + i64::from(self.buffer_time_minutes);
        if minutes <= 0 {
            return Err(BookingError::Configuration(format!(
                "Slot duration plus buffer time must be positive (got {} + {})",
                self.slot_duration_minutes, self.buffer_time_minutes
            )));
        }
        Ok(Duration::minutes(minutes))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBusinessSettingsRequest {
    pub business_name: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub slot_duration_minutes: i32,
    pub buffer_time_minutes: i32,
    pub allow_same_day_booking: bool,
    pub max_advance_booking_days: i32,
}

impl UpdateBusinessSettingsRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.business_name.trim().is_empty() {
            return Err(BookingError::Validation(
                "Business name must not be empty".to_string(),
            ));
        }
        if self.slot_duration_minutes <= 0 {
            return Err(BookingError::Validation(
                "Slot duration must be positive".to_string(),
            ));
        }
        if self.buffer_time_minutes < 0 {
            return Err(BookingError::Validation(
                "Buffer time must not be negative".to_string(),
            ));
        }
        if self.max_advance_booking_days < 0 {
            return Err(BookingError::Validation(
                "Maximum advance booking days must not be negative".to_string(),
            ));
        }
        if self.max_advance_booking_days > MAX_ADVANCE_BOOKING_DAYS {
            return Err(BookingError::Validation(format!(
                "Maximum advance booking days must be at most {}",
                MAX_ADVANCE_BOOKING_DAYS
            )));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(BookingError::Validation(format!(
                "Invalid business email: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// What customers see about the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub business_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl From<BusinessSettings> for BusinessProfile {
    fn from(settings: BusinessSettings) -> Self {
        Self {
            id: BUSINESS_ID,
            name: settings.business_name,
            business_type: settings.business_type,
            address: settings.address,
            phone: settings.phone,
            email: settings.email,
        }
    }
}

/// Storage index of a weekday, Sunday = 0 through Saturday = 6.
pub fn weekday_index(day: Weekday) -> i16 {
    day.num_days_from_sunday() as i16
}

/// Inverse of [`weekday_index`]; `None` outside 0..=6.
pub fn weekday_from_index(index: i16) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
