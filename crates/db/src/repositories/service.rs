use crate::models::DbService;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(pool: &Pool<Postgres>, request: &CreateServiceRequest) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating service: id={}, name={}, duration_min={}",
        id, request.name, request.duration_min
    );

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, duration_min, price_cents, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, name, duration_min, price_cents, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(request.duration_min)
    .bind(request.price_cents)
    .bind(request.is_active)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, duration_min, price_cents, is_active, created_at, updated_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if service.is_none() {
        tracing::debug!("Service not found: id={}", id);
    }

    Ok(service)
}

pub async fn list_services(pool: &Pool<Postgres>, active_only: bool) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, duration_min, price_cents, is_active, created_at, updated_at
        FROM services
        WHERE is_active OR NOT $1
        ORDER BY name ASC
        "#,
    )
    .bind(active_only)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateServiceRequest,
) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = COALESCE($2, name),
            duration_min = COALESCE($3, duration_min),
            price_cents = COALESCE($4, price_cents),
            is_active = COALESCE($5, is_active),
            updated_at = $6
        WHERE id = $1
        RETURNING id, name, duration_min, price_cents, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(request.name.as_deref())
    .bind(request.duration_min)
    .bind(request.price_cents)
    .bind(request.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(service)
}
