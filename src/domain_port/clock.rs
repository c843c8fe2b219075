use chrono::{NaiveDate, Utc};

/// Provides "today" at UTC day granularity, so date logic never reads the
/// system clock directly and tests can pin the date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
