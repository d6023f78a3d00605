//! Canonical day axis shared by every chronology.

use std::fmt;

use crate::weekday::DayOfWeek;

/// Julian day number of 1970-01-01.
const JDN_OF_EPOCH: i64 = 2_440_588;

/// A signed count of days since 1970-01-01 (ISO).
///
/// This is the only value that is safe to compare across chronologies:
/// every calendar date projects onto exactly one `EpochDay`, and the
/// ordering of `EpochDay` values is the ordering of real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochDay(i64);

impl EpochDay {
    /// The epoch itself, 1970-01-01.
    pub const EPOCH: Self = Self(0);

    /// Creates an `EpochDay` from a raw day count.
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    /// Returns the raw day count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Creates an `EpochDay` from a Julian day number.
    pub fn from_julian_day_number(jdn: i64) -> Option<Self> {
        jdn.checked_sub(JDN_OF_EPOCH).map(Self)
    }

    /// Returns the Julian day number of this day.
    pub fn julian_day_number(self) -> Option<i64> {
        self.0.checked_add(JDN_OF_EPOCH)
    }

    /// Adds a signed number of days, returning `None` on `i64` overflow.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add(days).map(Self)
    }

    /// Returns the number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> Option<i64> {
        other.0.checked_sub(self.0)
    }

    /// Returns the day of the week of this day.
    pub fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::from_epoch_day(self)
    }
}

impl fmt::Display for EpochDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EpochDay({})", self.0)
    }
}
