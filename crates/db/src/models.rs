use chrono::{DateTime, NaiveTime, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use slotbook_core::models::{
    appointment::Appointment,
    business::{BreakTime, BusinessSettings, WorkingHours, weekday_from_index},
    service::Service,
};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub duration_min: i32,
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusinessSettings {
    pub business_name: String,
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

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHours {
    pub id: Uuid,
    pub day_of_week: i16,
    pub is_open: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBreakTime {
    pub id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Self {
            id: row.id,
            name: row.name,
            duration_min: row.duration_min,
            price_cents: row.price_cents,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbBusinessSettings> for BusinessSettings {
    fn from(row: DbBusinessSettings) -> Self {
        Self {
            business_name: row.business_name,
            business_type: row.business_type,
            address: row.address,
            phone: row.phone,
            email: row.email,
            slot_duration_minutes: row.slot_duration_minutes,
            buffer_time_minutes: row.buffer_time_minutes,
            allow_same_day_booking: row.allow_same_day_booking,
            max_advance_booking_days: row.max_advance_booking_days,
            updated_at: row.updated_at,
        }
    }
}

impl TryFrom<DbWorkingHours> for WorkingHours {
    type Error = eyre::Report;

    fn try_from(row: DbWorkingHours) -> Result<Self> {
        let day_of_week = weekday_from_index(row.day_of_week)
            .ok_or_else(|| eyre!("Invalid day_of_week {} in working_hours", row.day_of_week))?;

        Ok(Self {
            id: row.id,
            day_of_week,
            is_open: row.is_open,
            open_time: row.open_time,
            close_time: row.close_time,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<DbBreakTime> for BreakTime {
    type Error = eyre::Report;

    fn try_from(row: DbBreakTime) -> Result<Self> {
        let day_of_week = weekday_from_index(row.day_of_week)
            .ok_or_else(|| eyre!("Invalid day_of_week {} in break_times", row.day_of_week))?;

        Ok(Self {
            id: row.id,
            day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        let status = row
            .status
            .parse()
            .map_err(|e| eyre!("Invalid status for appointment {}: {}", row.id, e))?;

        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            service_id: row.service_id,
            service_name: row.service_name,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
            admin_note: row.admin_note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Converts every row, failing on the first one that does not map.
pub fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>>
where
    T: TryFrom<R, Error = eyre::Report>,
{
    rows.into_iter().map(T::try_from).collect()
}
