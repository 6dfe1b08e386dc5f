//! Calendar defaults used when a caller omits a date

use jiff::{ToSpan, Zoned, civil::Date};

/// Today's date in the system time zone
pub fn today() -> Date {
    Zoned::now().date()
}

/// First day of the month before the one containing `date`
pub fn previous_month(date: Date) -> Date {
    let first = date.first_of_month();
    first.checked_sub(1.month()).unwrap_or(first)
}
