use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    availability::window::{Window, utc_instant},
    errors::BookingResult,
    models::{
        appointment::Appointment,
        business::{BreakTime, BusinessSettings, WorkingHours},
        service::Service,
        time_slot::TimeSlot,
    },
};

const SLOT_TIME_FORMAT: &str = "%H:%M";

/// Bookable slots for `service` on `date`, in chronological order.
///
/// Candidate starts begin at the opening time and advance by the settings'
/// stride. A candidate is dropped when it overlaps a break, overlaps a
/// pending or approved appointment, or starts before `now`. Candidates that
/// would run past closing time are never produced.
///
/// `working_hours` and `break_times` must be the records for `date`'s
/// weekday. `existing` may contain appointments of any status; rejected and
/// cancelled ones are ignored.
///
/// # Errors
///
/// * `BookingError::InvalidService` - the service is inactive or has a
///   non-positive duration
/// * `BookingError::Configuration` - slot duration plus buffer is not positive
pub fn generate_slots(
    date: NaiveDate,
    service: &Service,
    working_hours: Option<&WorkingHours>,
    break_times: &[BreakTime],
    settings: &BusinessSettings,
    existing: &[Appointment],
    now: DateTime<Utc>,
) -> BookingResult<Vec<TimeSlot>> {
    let slots = candidate_slots(
        date,
        service,
        working_hours,
        break_times,
        settings,
        existing,
        now,
    )?;

    Ok(slots.into_iter().filter(|slot| slot.is_available).collect())
}

/// Every candidate slot for the day, with unavailable ones kept and flagged.
///
/// Same inputs, ordering and errors as [`generate_slots`].
pub fn candidate_slots(
    date: NaiveDate,
    service: &Service,
    working_hours: Option<&WorkingHours>,
    break_times: &[BreakTime],
    settings: &BusinessSettings,
    existing: &[Appointment],
    now: DateTime<Utc>,
) -> BookingResult<Vec<TimeSlot>> {
    service.ensure_bookable()?;
    let stride = settings.stride()?;

    let Some(hours) = working_hours.filter(|hours| hours.is_open) else {
        return Ok(Vec::new());
    };

    let length = service.duration();
    let close = utc_instant(date, hours.close_time);

    let breaks: Vec<_> = break_times
        .iter()
        .map(|b| Window::new(utc_instant(date, b.start_time), utc_instant(date, b.end_time)))
        .collect();
    let booked: Vec<_> = existing
        .iter()
        .filter(|appointment| appointment.status.occupies_slot())
        .map(Appointment::window)
        .collect();

    let mut slots = Vec::new();
    let mut cursor = utc_instant(date, hours.open_time);

    while cursor + length <= close {
        let slot = Window::new(cursor, cursor + length);

        let on_break = breaks.iter().any(|b| slot.overlaps(b));
        let booked_out = booked.iter().any(|a| slot.overlaps(a));
        let past = slot.start < now;

        slots.push(TimeSlot {
            start_time: slot.start.format(SLOT_TIME_FORMAT).to_string(),
            end_time: slot.end.format(SLOT_TIME_FORMAT).to_string(),
            is_available: !(on_break || booked_out || past),
        });

        cursor = cursor + stride;
    }

    Ok(slots)
}
