use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// A half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<T> {
    pub start: T,
    pub end: T,
}

impl<T: Ord + Copy> Window<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// General half-open overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Conflict of a candidate (`self`) with an existing booking.
    ///
    /// Agrees with [`Window::overlaps`] for every pair of non-empty windows.
    pub fn conflicts_with(&self, existing: &Self) -> bool {
        let starts_inside = existing.start <= self.start && self.start < existing.end;
        let ends_inside = existing.start < self.end && self.end <= existing.end;
        let covers = self.start <= existing.start && self.end >= existing.end;

        starts_inside || ends_inside || covers
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// The UTC instant at `time` on `date`.
pub fn utc_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}

/// The whole UTC day `[date 00:00, date+1 00:00)`.
pub fn day_window(date: NaiveDate) -> Window<DateTime<Utc>> {
    let start = utc_instant(date, NaiveTime::MIN);
    Window::new(start, start + Duration::days(1))
}
