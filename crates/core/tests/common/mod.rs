#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use slotbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    business::{BreakTime, BusinessSettings, WorkingHours},
    service::Service,
};
use uuid::Uuid;

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

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn service(duration_min: i32) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: "Haircut".to_string(),
        duration_min,
        price_cents: 15_000,
        is_active: true,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn open_hours(open: NaiveTime, close: NaiveTime) -> WorkingHours {
    WorkingHours {
        id: Uuid::new_v4(),
        day_of_week: Weekday::Wed,
        is_open: true,
        open_time: open,
        close_time: close,
        updated_at: epoch(),
    }
}

pub fn nine_to_six() -> WorkingHours {
    open_hours(time(9, 0), time(18, 0))
}

pub fn lunch_break(start: NaiveTime, end: NaiveTime) -> BreakTime {
    BreakTime {
        id: Uuid::new_v4(),
        day_of_week: Weekday::Wed,
        start_time: start,
        end_time: end,
        description: "Lunch".to_string(),
        created_at: epoch(),
    }
}

pub fn settings(slot: i32, buffer: i32) -> BusinessSettings {
    BusinessSettings {
        business_name: "Elite Barber".to_string(),
        business_type: "Barber".to_string(),
        address: "12 High Street".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        email: "hello@elitebarber.example".to_string(),
        slot_duration_minutes: slot,
        buffer_time_minutes: buffer,
        allow_same_day_booking: true,
        max_advance_booking_days: 30,
        updated_at: epoch(),
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
        created_at: epoch(),
        updated_at: epoch(),
    }
}
