pub mod calendar;

pub use calendar::{business_days_inclusive, CalendarDate, DateRange};
