use crate::{models::DbAppointment, schema::EXCLUSION_VIOLATION};
use chrono::{DateTime, Utc};
use eyre::Result;
use slotbook_core::models::appointment::{AppointmentFilter, AppointmentStatus, NewAppointment};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Columns of an appointment row `a` joined to its service `s`.
const APPOINTMENT_COLUMNS: &str = "a.id, a.customer_id, a.service_id, a.start_time, a.end_time, \
     a.status, a.admin_note, a.created_at, a.updated_at, s.name AS service_name";

/// Inserts a pending appointment.
///
/// Returns `Ok(None)` when the `appointments_no_overlap` constraint rejects
/// the row, meaning a concurrent booking took an overlapping window between
/// the caller's conflict check and this insert.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    new: &NewAppointment,
) -> Result<Option<DbAppointment>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, service_id={}, start={}, end={}",
        id, new.service_id, new.start_time, new.end_time
    );

    let result = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        WITH inserted AS (
            INSERT INTO appointments
                (id, customer_id, service_id, start_time, end_time, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING *
        )
        SELECT {APPOINTMENT_COLUMNS}
        FROM inserted a
        JOIN services s ON s.id = a.service_id
        "#
    ))
    .bind(id)
    .bind(new.customer_id)
    .bind(new.service_id)
    .bind(new.start_time)
    .bind(new.end_time)
    .bind(AppointmentStatus::Pending.as_str())
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(appointment) => Ok(Some(appointment)),
        Err(sqlx::Error::Database(err)) if err.code().as_deref() == Some(EXCLUSION_VIOLATION) => {
            tracing::debug!("Overlap constraint rejected appointment {}", id);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn get_appointment_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        WHERE a.id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Pending and approved appointments whose window overlaps `[start, end)`.
pub async fn get_active_appointments_overlapping(
    pool: &Pool<Postgres>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        WHERE a.status IN ('pending', 'approved')
          AND a.start_time < $2
          AND a.end_time > $1
        ORDER BY a.start_time ASC
        "#
    ))
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Appointments matching every set field of `filter`, newest first.
pub async fn list_appointments(
    pool: &Pool<Postgres>,
    filter: &AppointmentFilter,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        WHERE ($1::timestamptz IS NULL OR a.start_time >= $1)
          AND ($2::timestamptz IS NULL OR a.start_time <= $2)
          AND ($3::uuid IS NULL OR a.service_id = $3)
          AND ($4::uuid IS NULL OR a.customer_id = $4)
          AND ($5::text IS NULL OR a.status = $5)
        ORDER BY a.start_time DESC
        "#
    ))
    .bind(filter.date_from)
    .bind(filter.date_to)
    .bind(filter.service_id)
    .bind(filter.customer_id)
    .bind(filter.status.map(AppointmentStatus::as_str))
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
    admin_note: Option<&str>,
) -> Result<Option<DbAppointment>> {
    tracing::debug!("Updating appointment status: id={}, status={}", id, status);

    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        WITH updated AS (
            UPDATE appointments
            SET status = $2,
                admin_note = COALESCE($3, admin_note),
                updated_at = $4
            WHERE id = $1
            RETURNING *
        )
        SELECT {APPOINTMENT_COLUMNS}
        FROM updated a
        JOIN services s ON s.id = a.service_id
        "#
    ))
    .bind(id)
    .bind(status.as_str())
    .bind(admin_note)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Returns `false` when no appointment with `id` existed.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
