use crate::models::DbWorkingHours;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::business::UpdateWorkingHoursRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_working_hours_by_day(
    pool: &Pool<Postgres>,
    day_of_week: i16,
) -> Result<Option<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT id, day_of_week, is_open, open_time, close_time, updated_at
        FROM working_hours
        WHERE day_of_week = $1
        "#,
    )
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}

pub async fn list_working_hours(pool: &Pool<Postgres>) -> Result<Vec<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT id, day_of_week, is_open, open_time, close_time, updated_at
        FROM working_hours
        ORDER BY day_of_week ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(hours)
}

pub async fn update_working_hours(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateWorkingHoursRequest,
) -> Result<Option<DbWorkingHours>> {
    tracing::debug!(
        "Updating working hours: id={}, is_open={}, open={}, close={}",
        id, request.is_open, request.open_time, request.close_time
    );

    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        UPDATE working_hours
        SET is_open = $2, open_time = $3, close_time = $4, updated_at = $5
        WHERE id = $1
        RETURNING id, day_of_week, is_open, open_time, close_time, updated_at
        "#,
    )
    .bind(id)
    .bind(request.is_open)
    .bind(request.open_time)
    .bind(request.close_time)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}
