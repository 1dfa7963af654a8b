//! Time source for plays and task rollover.

use chrono::{DateTime, Local, NaiveDate, Utc};

use mahjong_core::PlayClock;

/// Supplies the calendar date and the current instant.
///
/// `today` decides which task period a play counts toward; `now` is stamped
/// on history records.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn now(&self) -> DateTime<Utc>;

    fn play_clock(&self) -> PlayClock {
        PlayClock {
            today: self.today(),
            timestamp: self.now(),
        }
    }
}

/// Wall clock: local calendar date, UTC timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant, for tests and replays.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }

    /// Noon UTC on `today`.
    pub fn on(today: NaiveDate) -> Self {
        let now = today.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
