use crate::models::DbBreakTime;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::business::{CreateBreakTimeRequest, weekday_index};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_break_time(
    pool: &Pool<Postgres>,
    request: &CreateBreakTimeRequest,
) -> Result<DbBreakTime> {
    let id = Uuid::new_v4();

    let break_time = sqlx::query_as::<_, DbBreakTime>(
        r#"
        INSERT INTO break_times (id, day_of_week, start_time, end_time, description, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, day_of_week, start_time, end_time, description, created_at
        "#,
    )
    .bind(id)
    .bind(weekday_index(request.day_of_week))
    .bind(request.start_time)
    .bind(request.end_time)
    .bind(&request.description)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(break_time)
}

pub async fn get_break_times_by_day(
    pool: &Pool<Postgres>,
    day_of_week: i16,
) -> Result<Vec<DbBreakTime>> {
    let breaks = sqlx::query_as::<_, DbBreakTime>(
        r#"
        SELECT id, day_of_week, start_time, end_time, description, created_at
        FROM break_times
        WHERE day_of_week = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(day_of_week)
    .fetch_all(pool)
    .await?;

    Ok(breaks)
}

pub async fn list_break_times(pool: &Pool<Postgres>) -> Result<Vec<DbBreakTime>> {
    let breaks = sqlx::query_as::<_, DbBreakTime>(
        r#"
        SELECT id, day_of_week, start_time, end_time, description, created_at
        FROM break_times
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(breaks)
}

/// Returns `false` when no break with `id` existed.
pub async fn delete_break_time(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM break_times
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
