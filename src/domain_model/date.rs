use chrono::{Datelike, NaiveDate, NaiveDateTime, ParseError};

const DATE_LAYOUT: &str = "%Y-%m-%d";
const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses a date of birth from the wire.
///
/// Two layouts are accepted: a plain calendar date, tried first, then a UTC
/// timestamp whose time of day is discarded. Both validation and the write
/// path go through here so the two can never drift apart.
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw, DATE_LAYOUT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIMESTAMP_LAYOUT).map(|dt| dt.date()))
}

/// A date of birth is valid when it parses and, at day granularity, is not
/// after `today`. Today itself is fine.
pub fn is_valid_date_of_birth(raw: &str, today: NaiveDate) -> bool {
    matches!(parse_date_of_birth(raw), Ok(date) if date <= today)
}

/// Whole days from `today` until the next occurrence of `date_of_birth`'s
/// month and day, 0 when that is today.
///
/// The count is the whole-hour distance between the two UTC midnights divided
/// by 24, truncated toward zero. Advancing past a birthday earlier this year
/// moves to the same month and day next year, not 365 days forward.
pub fn days_until_next_birthday(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut next = birthday_on(today.year(), &date_of_birth);
    if next < today {
        next = birthday_on(today.year() + 1, &date_of_birth);
    }

    (next - today).num_hours() / 24
}

/// The birthday in `year`. A Feb 29 date of birth rolls forward to Mar 1 in
/// common years.
fn birthday_on(year: i32, date_of_birth: &NaiveDate) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, date_of_birth.month(), date_of_birth.day()) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"),
    }
}
