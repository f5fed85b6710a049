use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timezone-independent calendar date (year, month, day).
///
/// Duty assignments are keyed by plain `YYYY-MM-DD` dates; no clock or
/// timezone is ever attached to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day components, `None` if out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// Strict ISO parsing first. Malformed input is handled leniently the way
    /// the date-picker UI expects: an unparseable month or day falls back to 1,
    /// an out-of-range day collapses to day 1 of the parsed year/month, and a
    /// numeric prefix is accepted for each component. Only an unparseable year
    /// makes the date irrecoverable (see [`CalendarDate::parse_opt`]). Callers
    /// normally supply validated picker output, so the leniency is a
    /// documented fallback rather than a load-bearing code path.
    pub fn parse(s: &str) -> Self {
        Self::parse_opt(s).unwrap_or_else(|| Self(NaiveDate::default()))
    }

    /// Lenient parse returning `None` when the year component is unusable.
    pub fn parse_opt(s: &str) -> Option<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self(date));
        }

        let mut parts = s.splitn(3, '-');
        let year = parts.next().and_then(leading_year)?;
        let month = parts
            .next()
            .and_then(leading_number)
            .filter(|m| (1..=12).contains(m))
            .unwrap_or(1);
        let day = parts.next().and_then(leading_number).unwrap_or(1);

        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
            .map(Self)
    }

    /// Today's date in the server's local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Underlying chrono date.
    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// True for Monday through Friday, independent of holidays.
    pub fn is_business_day(&self) -> bool {
        !matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Parse the leading digit run of a component, `parseInt`-style.
fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn leading_year(s: &str) -> Option<i32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Count business days (Mon-Fri) over the inclusive range `[start, end]`.
///
/// Returns 0 whenever `end < start`. This is the sole business-day semantics
/// used anywhere a duty duration is reported; no holiday calendar is
/// consulted.
pub fn business_days_inclusive(start: CalendarDate, end: CalendarDate) -> u32 {
    if end < start {
        return 0;
    }

    let mut count = 0;
    let mut current = start.value();
    while current <= end.value() {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Inclusive date range used by every reporting query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Single-day range `[date, date]`, matching the dashboard's date picker.
    pub fn single(date: CalendarDate) -> Self {
        Self { start: date, end: date }
    }

    /// Lenient parse of both endpoints (see [`CalendarDate::parse`]).
    pub fn parse(start: &str, end: &str) -> Self {
        Self {
            start: CalendarDate::parse(start),
            end: CalendarDate::parse(end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
