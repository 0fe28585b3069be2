use crate::models::DbBusinessSettings;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::business::UpdateBusinessSettingsRequest;
use sqlx::{Pool, Postgres};

const SETTINGS_COLUMNS: &str = "business_name, business_type, address, phone, email, \
     slot_duration_minutes, buffer_time_minutes, allow_same_day_booking, \
     max_advance_booking_days, updated_at";

pub async fn get_business_settings(pool: &Pool<Postgres>) -> Result<Option<DbBusinessSettings>> {
    let settings = sqlx::query_as::<_, DbBusinessSettings>(&format!(
        r#"
        SELECT {SETTINGS_COLUMNS}
        FROM business_settings
        WHERE id = 1
        "#
    ))
    .fetch_optional(pool)
    .await?;

    if settings.is_none() {
        tracing::warn!("Business settings row is missing");
    }

    Ok(settings)
}

pub async fn update_business_settings(
    pool: &Pool<Postgres>,
    request: &UpdateBusinessSettingsRequest,
) -> Result<Option<DbBusinessSettings>> {
    let settings = sqlx::query_as::<_, DbBusinessSettings>(&format!(
        r#"
        UPDATE business_settings
        SET business_name = $1,
            business_type = $2,
            address = $3,
            phone = $4,
            email = $5,
            slot_duration_minutes = $6,
            buffer_time_minutes = $7,
            allow_same_day_booking = $8,
            max_advance_booking_days = $9,
            updated_at = $10
        WHERE id = 1
        RETURNING {SETTINGS_COLUMNS}
        "#
    ))
    .bind(&request.business_name)
    .bind(&request.business_type)
    .bind(&request.address)
    .bind(&request.phone)
    .bind(&request.email)
    .bind(request.slot_duration_minutes)
    .bind(request.buffer_time_minutes)
    .bind(request.allow_same_day_booking)
    .bind(request.max_advance_booking_days)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(settings)
}
