//! Calendar keys identifying the current daily and weekly task periods.
//!
//! Rollover is a key comparison: a stored bucket belongs to the current
//! period exactly when its key equals the key computed for today.

use chrono::{Datelike, NaiveDate};

/// Day key, `YYYY-MM-DD`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Week key, `YYYY-Www`.
///
/// Weeks are counted from January 1st of the date's year:
/// `week = (day_of_year0 + weekday_of_jan1 + 1) / 7 + 1`, with weekdays
/// numbered from Sunday = 0. Week 1 may be short, and the week number resets
/// on January 1st rather than following ISO-8601 year boundaries.
pub fn week_key(date: NaiveDate) -> String {
    format!("{}-W{:02}", date.year(), week_of_year(date))
}

fn week_of_year(date: NaiveDate) -> u32 {
    let day0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - day0 % 7) % 7;
    (day0 + jan1_weekday + 1) / 7 + 1
}

/// Keys of the periods containing a date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodKeys {
    pub day: String,
    pub week: String,
}

impl PeriodKeys {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            day: day_key(date),
            week: week_key(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_key_is_zero_padded() {
        assert_eq!(day_key(date(2026, 3, 7)), "2026-03-07");
    }

    #[test]
    fn week_key_examples() {
        // 2026-01-01 is a Thursday.
        assert_eq!(week_key(date(2026, 1, 1)), "2026-W01");
        assert_eq!(week_key(date(2026, 1, 2)), "2026-W01");
        assert_eq!(week_key(date(2026, 1, 3)), "2026-W02");
        assert_eq!(week_key(date(2026, 10, 19)), "2026-W43");
        assert_eq!(week_key(date(2026, 12, 31)), "2026-W53");
        // 2023-01-01 is a Sunday.
        assert_eq!(week_key(date(2023, 1, 1)), "2023-W01");
    }

    #[test]
    fn consecutive_days_share_a_week_key_until_boundary() {
        let mut changes = 0;
        let mut day = date(2026, 3, 1);
        let mut previous = week_key(day);
        for _ in 0..28 {
            day = day.succ_opt().unwrap();
            let key = week_key(day);
            if key != previous {
                changes += 1;
            }
            previous = key;
        }
        assert_eq!(changes, 4);
    }

    #[test]
    fn keys_for_date() {
        let keys = PeriodKeys::for_date(date(2026, 10, 19));
        assert_eq!(keys.day, "2026-10-19");
        assert_eq!(keys.week, "2026-W43");
    }
}
