use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Half-open instant range covering one calendar day, `[00:00:00, 23:59:59)`.
/// Both bounds and all display formatting use UTC so a row never renders a
/// different calendar date than the range that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

pub fn day_range(date: NaiveDate) -> DayRange {
    let start = date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    DayRange {
        start,
        end: start + Duration::days(1) - Duration::seconds(1),
    }
}

pub fn today_range() -> DayRange {
    day_range(Utc::now().date_naive())
}

pub fn tomorrow_range() -> DayRange {
    day_range(Utc::now().date_naive() + Duration::days(1))
}

/// Zero-padded 24-hour `HH:MM`, UTC components.
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

/// Zero-padded `DD/MM/YYYY`, UTC components.
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%d/%m/%Y").to_string()
}

/// Bound formatting expected by the remote range predicates.
pub fn format_bound(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S").to_string()
}
