use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// SQLSTATE raised when an insert or update breaks `appointments_no_overlap`.
pub const EXCLUSION_VIOLATION: &str = "23P01";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(200) NOT NULL,
        duration_min INTEGER NOT NULL CHECK (duration_min > 0),
        price_cents BIGINT NOT NULL DEFAULT 0 CHECK (price_cents >= 0),
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS business_settings (
        id SMALLINT PRIMARY KEY DEFAULT 1 CHECK (id = 1),
        business_name VARCHAR(200) NOT NULL,
        business_type VARCHAR(100) NOT NULL DEFAULT '',
        address VARCHAR(500) NOT NULL DEFAULT '',
        phone VARCHAR(50) NOT NULL DEFAULT '',
        email VARCHAR(200) NOT NULL DEFAULT '',
        slot_duration_minutes INTEGER NOT NULL DEFAULT 30,
        buffer_time_minutes INTEGER NOT NULL DEFAULT 0,
        allow_same_day_booking BOOLEAN NOT NULL DEFAULT TRUE,
        max_advance_booking_days INTEGER NOT NULL DEFAULT 30
            CHECK (max_advance_booking_days BETWEEN 0 AND 3650),
        updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS working_hours (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        day_of_week SMALLINT NOT NULL UNIQUE CHECK (day_of_week BETWEEN 0 AND 6),
        is_open BOOLEAN NOT NULL DEFAULT TRUE,
        open_time TIME NOT NULL,
        close_time TIME NOT NULL,
        updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS break_times (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
        start_time TIME NOT NULL,
        end_time TIME NOT NULL,
        description VARCHAR(200) NOT NULL DEFAULT '',
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_break_range CHECK (end_time > start_time)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS appointments (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        customer_id UUID NOT NULL,
        service_id UUID NOT NULL REFERENCES services(id),
        start_time TIMESTAMP WITH TIME ZONE NOT NULL,
        end_time TIMESTAMP WITH TIME ZONE NOT NULL,
        status VARCHAR(16) NOT NULL DEFAULT 'pending'
            CHECK (status IN ('pending', 'approved', 'rejected', 'cancelled')),
        admin_note VARCHAR(1000) NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_appointment_range CHECK (end_time > start_time),
        CONSTRAINT appointments_no_overlap EXCLUDE USING gist (
            tstzrange(start_time, end_time, '[)') WITH &&
        ) WHERE (status IN ('pending', 'approved'))
    );
    "#,
    // Profile columns for databases created before the public business profile.
    "ALTER TABLE business_settings ADD COLUMN IF NOT EXISTS business_type VARCHAR(100) NOT NULL DEFAULT '';",
    "ALTER TABLE business_settings ADD COLUMN IF NOT EXISTS address VARCHAR(500) NOT NULL DEFAULT '';",
    "ALTER TABLE business_settings ADD COLUMN IF NOT EXISTS phone VARCHAR(50) NOT NULL DEFAULT '';",
    "ALTER TABLE business_settings ADD COLUMN IF NOT EXISTS email VARCHAR(200) NOT NULL DEFAULT '';",
    "CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time);",
    "CREATE INDEX IF NOT EXISTS idx_appointments_customer_id ON appointments(customer_id);",
    "CREATE INDEX IF NOT EXISTS idx_appointments_service_id ON appointments(service_id);",
    "CREATE INDEX IF NOT EXISTS idx_break_times_day_of_week ON break_times(day_of_week);",
];

const DEFAULTS: &[&str] = &[
    r#"
    INSERT INTO business_settings (id, business_name)
    VALUES (1, 'My Business')
    ON CONFLICT (id) DO NOTHING;
    "#,
    r#"
    INSERT INTO working_hours (day_of_week, is_open, open_time, close_time)
    VALUES
        (0, FALSE, TIME '09:00', TIME '18:00'),
        (1, TRUE, TIME '09:00', TIME '18:00'),
        (2, TRUE, TIME '09:00', TIME '18:00'),
        (3, TRUE, TIME '09:00', TIME '18:00'),
        (4, TRUE, TIME '09:00', TIME '18:00'),
        (5, TRUE, TIME '09:00', TIME '18:00'),
        (6, TRUE, TIME '09:00', TIME '17:00')
    ON CONFLICT (day_of_week) DO NOTHING;
    "#,
    r#"
    INSERT INTO break_times (day_of_week, start_time, end_time, description)
    SELECT d.day_index, TIME '12:00', TIME '13:00', 'Lunch break'
    FROM generate_series(1, 6) AS d(day_index)
    WHERE NOT EXISTS (SELECT 1 FROM break_times);
    "#,
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Inserts the settings singleton, a weekly timetable and lunch breaks.
///
/// Existing rows are left untouched, so this is safe to run on every deploy.
pub async fn seed_defaults(pool: &Pool<Postgres>) -> Result<()> {
    info!("Seeding default business configuration...");

    for statement in DEFAULTS {
        sqlx::query(*statement).execute(pool).await?;
    }

    info!("Default business configuration in place.");
    Ok(())
}
