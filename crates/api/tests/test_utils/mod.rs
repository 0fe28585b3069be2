#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use slotbook_api::{ApiState, build_router, clock::FixedClock};
use slotbook_core::models::{
    appointment::{Appointment, AppointmentStatus, NewAppointment},
    business::{BreakTime, BusinessSettings, WorkingHours},
    service::Service,
};
use slotbook_db::store::MockBookingStore;
use uuid::Uuid;

/// The instant every test treats as "now": the Tuesday before [`day`].
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 4, 8, 0, 0).unwrap()
}

/// A Wednesday.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 5).expect("valid date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day().and_time(time(hour, minute)))
}

pub fn service(duration_min: i32) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: "Haircut".to_string(),
        duration_min,
        price_cents: 15_000,
        is_active: true,
        created_at: now(),
        updated_at: now(),
    }
}

pub fn settings() -> BusinessSettings {
    BusinessSettings {
        business_name: "Elite Barber".to_string(),
        business_type: "Barber".to_string(),
        address: "12 High Street".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        email: "hello@elitebarber.example".to_string(),
        slot_duration_minutes: 30,
        buffer_time_minutes: 0,
        allow_same_day_booking: true,
        max_advance_booking_days: 30,
        updated_at: now(),
    }
}

pub fn working_hours(day_of_week: Weekday) -> WorkingHours {
    WorkingHours {
        id: Uuid::new_v4(),
        day_of_week,
        is_open: true,
        open_time: time(9, 0),
        close_time: time(18, 0),
        updated_at: now(),
    }
}

pub fn lunch(day_of_week: Weekday) -> BreakTime {
    BreakTime {
        id: Uuid::new_v4(),
        day_of_week,
        start_time: time(12, 0),
        end_time: time(13, 0),
        description: "Lunch".to_string(),
        created_at: now(),
    }
}

pub fn appointment(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        customer_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        service_name: "Haircut".to_string(),
        start_time: start,
        end_time: end,
        status,
        admin_note: None,
        created_at: now(),
        updated_at: now(),
    }
}

/// What storage hands back after inserting `new`.
pub fn stored(new: &NewAppointment) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        customer_id: new.customer_id,
        service_id: new.service_id,
        service_name: "Haircut".to_string(),
        start_time: new.start_time,
        end_time: new.end_time,
        status: AppointmentStatus::Pending,
        admin_note: None,
        created_at: now(),
        updated_at: now(),
    }
}

/// Serves the full router over `store` with the clock stopped at [`now`].
pub fn server(store: MockBookingStore) -> TestServer {
    let state = Arc::new(ApiState {
        store: Arc::new(store),
        clock: Arc::new(FixedClock(now())),
    });

    TestServer::new(build_router(state)).expect("test server")
}
