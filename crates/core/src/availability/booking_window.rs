use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::{
    availability::window::{Window, utc_instant},
    errors::{BookingError, BookingResult},
    models::business::{BreakTime, BusinessSettings, WorkingHours},
};

/// Applies the same-day and advance-booking limits from the settings.
///
/// # Errors
///
/// * `BookingError::Validation` - `date` is in the past, is today while
///   same-day booking is disabled, or is beyond the advance booking limit
/// * `BookingError::Configuration` - the advance booking limit is negative or
///   reaches past the last representable date
pub fn check_booking_date(
    date: NaiveDate,
    settings: &BusinessSettings,
    now: DateTime<Utc>,
) -> BookingResult<()> {
    if settings.max_advance_booking_days < 0 {
        return Err(BookingError::Configuration(format!(
            "Maximum advance booking days must not be negative (got {})",
            settings.max_advance_booking_days
        )));
    }

    let today = now.date_naive();
    if date < today {
        return Err(BookingError::Validation(
            "Cannot book a date in the past".to_string(),
        ));
    }
    if date == today && !settings.allow_same_day_booking {
        return Err(BookingError::Validation(
            "Same-day booking is not allowed".to_string(),
        ));
    }

    let last_bookable = today
        .checked_add_days(Days::new(u64::from(
            settings.max_advance_booking_days.unsigned_abs(),
        )))
        .ok_or_else(|| {
            BookingError::Configuration(format!(
                "Advance booking limit of {} days is out of range",
                settings.max_advance_booking_days
            ))
        })?;
    if date > last_bookable {
        return Err(BookingError::Validation(format!(
            "Appointments can be booked at most {} days in advance",
            settings.max_advance_booking_days
        )));
    }

    Ok(())
}

/// [`check_booking_date`] as a predicate. Configuration errors still propagate.
pub fn is_bookable_date(
    date: NaiveDate,
    settings: &BusinessSettings,
    now: DateTime<Utc>,
) -> BookingResult<bool> {
    match check_booking_date(date, settings, now) {
        Ok(()) => Ok(true),
        Err(BookingError::Validation(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Ensures an appointment window sits inside the day's opening hours and
/// clear of every break.
///
/// # Errors
///
/// * `BookingError::Validation` - the day is closed, the window leaves the
///   opening hours, or it overlaps a break
pub fn check_within_business_hours(
    window: Window<DateTime<Utc>>,
    working_hours: Option<&WorkingHours>,
    break_times: &[BreakTime],
) -> BookingResult<()> {
    let date = window.start.date_naive();

    let Some(hours) = working_hours.filter(|hours| hours.is_open) else {
        return Err(BookingError::Validation(
            "The business is closed on that day".to_string(),
        ));
    };

    let opening = Window::new(
        utc_instant(date, hours.open_time),
        utc_instant(date, hours.close_time),
    );
    if !opening.contains(&window) {
        return Err(BookingError::Validation(
            "Appointment must fall within working hours".to_string(),
        ));
    }

    let on_break = break_times.iter().any(|b| {
        Window::new(utc_instant(date, b.start_time), utc_instant(date, b.end_time))
            .overlaps(&window)
    });
    if on_break {
        return Err(BookingError::Validation(
            "Appointment overlaps a break".to_string(),
        ));
    }

    Ok(())
}
