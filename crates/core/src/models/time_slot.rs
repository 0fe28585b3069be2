use serde::{Deserialize, Serialize};

/// A bookable window on the requested day, rendered as `HH:MM` in UTC.
///
/// Derived on every availability query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}
