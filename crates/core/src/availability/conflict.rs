use chrono::{DateTime, Utc};

use crate::{availability::window::Window, models::appointment::Appointment};

/// Whether `[candidate_start, candidate_end)` collides with any appointment
/// still holding its window.
///
/// The business has a single shared resource, so appointments of every
/// service are compared, not only those of the candidate's service.
/// Rejected and cancelled appointments never conflict.
pub fn has_conflict(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    existing: &[Appointment],
) -> bool {
    let candidate = Window::new(candidate_start, candidate_end);

    existing
        .iter()
        .filter(|appointment| appointment.status.occupies_slot())
        .any(|appointment| candidate.conflicts_with(&appointment.window()))
}
