//! # Availability Engine
//!
//! Reconciles working hours, breaks, business settings and existing
//! appointments into bookable slots, and checks a proposed appointment
//! against the ones already held.
//!
//! Both halves use the half-open window comparison in [`window`], so a slot
//! the generator offers is never one the conflict check would reject.

/// Half-open time windows and UTC instant helpers
pub mod window;
/// Candidate slot generation for one day
pub mod slots;
/// Conflict detection for new appointments
pub mod conflict;
/// Date and opening-hours rules applied when booking
pub mod booking_window;

pub use conflict::has_conflict;
pub use slots::{candidate_slots, generate_slots};
