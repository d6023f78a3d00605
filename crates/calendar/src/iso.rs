//! ISO proleptic Gregorian calendar, the default system and the canonical
//! partner of every other chronology.

use std::fmt;

use crate::chronology::Chronology;
use crate::epoch_day::EpochDay;
use crate::error::CalendarError;
use crate::week::{self, WeekOfWeekBasedYear};
use crate::weekday::DayOfWeek;

/// Smallest supported proleptic year (999,999,999 BCE).
pub const MIN_YEAR: i32 = -999_999_998;
/// Largest supported proleptic year.
pub const MAX_YEAR: i32 = 999_999_999;
/// Largest year-of-era in either ISO era.
pub const MAX_YEAR_OF_ERA: i32 = 999_999_999;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_0000_03_01_TO_EPOCH: i64 = 719_468;
/// Days in a 400-year Gregorian cycle.
const DAYS_PER_CYCLE: i64 = 146_097;

/// ISO era: before and from year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IsoEra {
    /// Before common era; year-of-era 1 is proleptic year 0.
    Bce,
    /// Common era.
    #[default]
    Ce,
}

impl IsoEra {
    /// Every ISO era, earliest first.
    pub const ALL: [IsoEra; 2] = [IsoEra::Bce, IsoEra::Ce];

    /// Returns the era code (0 or 1).
    pub fn code(self) -> u8 {
        match self {
            Self::Bce => 0,
            Self::Ce => 1,
        }
    }

    /// Returns the era with the given code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Bce),
            1 => Some(Self::Ce),
            _ => None,
        }
    }

    /// Returns the era name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bce => "BCE",
            Self::Ce => "CE",
        }
    }

    /// Converts a year-of-era in this era to a proleptic year.
    pub fn proleptic_year(self, year_of_era: i32) -> i64 {
        match self {
            Self::Bce => 1 - i64::from(year_of_era),
            Self::Ce => i64::from(year_of_era),
        }
    }
}

/// Determines if `year` is a leap year under the 4/100/400 rule.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Returns the number of days in `month` (1..=12) of `year`.
pub(crate) fn month_length(year: i64, month: u8) -> u8 {
    let days = DAYS_PER_MONTH[usize::from(month)];
    if month == 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Returns the number of days in `year`.
pub fn year_length(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the 1-based day-of-year of a valid `(month, day)` in `year`.
pub(crate) fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let leap_shift = u16::from(month > 2 && is_leap_year(year));
    MONTH_START_DOY[usize::from(month)] + u16::from(day) - 1 + leap_shift
}

/// Returns the `(month, day)` of a valid 1-based day-of-year in `year`.
pub(crate) fn month_day(year: i64, day_of_year: u16) -> (u8, u8) {
    let mut remaining = day_of_year;
    for month in 1..=12u8 {
        let len = u16::from(month_length(year, month));
        if remaining <= len {
            return (month, remaining as u8);
        }
        remaining -= len;
    }
    (12, 31)
}

// ref: http://howardhinnant.github.io/date_algorithms.html
pub(crate) fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    let year = if month <= 2 { year - 1 } else { year };
    let cycle = year.div_euclid(400);
    let year_of_cycle = year.rem_euclid(400);
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_cycle =
        year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;
    cycle * DAYS_PER_CYCLE + day_of_cycle - DAYS_0000_03_01_TO_EPOCH
}

/// Inverse of [`days_from_civil`]; `days` must lie within
/// [`min_epoch_day`]..=[`max_epoch_day`].
pub(crate) fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days + DAYS_0000_03_01_TO_EPOCH;
    let cycle = days.div_euclid(DAYS_PER_CYCLE);
    let day_of_cycle = days.rem_euclid(DAYS_PER_CYCLE);
    let year_of_cycle = (day_of_cycle - day_of_cycle / 1_460 + day_of_cycle / 36_524
        - day_of_cycle / (DAYS_PER_CYCLE - 1))
        / 365;
    let year = year_of_cycle + cycle * 400;
    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u8;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

pub(crate) fn min_epoch_day() -> i64 {
    days_from_civil(i64::from(MIN_YEAR), 1, 1)
}

pub(crate) fn max_epoch_day() -> i64 {
    days_from_civil(i64::from(MAX_YEAR), 12, 31)
}

/// A date in the ISO proleptic Gregorian calendar.
///
/// `IsoDate` is the canonical partner of every [`crate::CalendarDate`]: any
/// date converts to and from it losslessly through [`EpochDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` from a proleptic year, month, and day.
    ///
    /// `year` is an astronomical year number, i.e. 1 BCE is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] naming the ISO
    /// proleptic-year, month-of-year, or day-of-month rule.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let chronology = Chronology::Iso;
        chronology.proleptic_year().check(i64::from(year))?;
        chronology.month_of_year().check(i64::from(month))?;
        let max_day = month_length(i64::from(year), month);
        chronology
            .day_of_month()
            .check_within(i64::from(day), 1, i64::from(max_day))?;
        Ok(Self { year, month, day })
    }

    /// Creates the `IsoDate` that falls on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if `day` is outside the
    /// supported year range.
    pub fn from_epoch_day(day: EpochDay) -> Result<Self, CalendarError> {
        let day = day.get();
        if !(min_epoch_day()..=max_epoch_day()).contains(&day) {
            tracing::debug!(epoch_day = day, "epoch day outside the ISO year range");
            return Err(CalendarError::RangeOverflow {
                chronology: Chronology::Iso,
            });
        }
        Ok(Self::from_epoch_day_in_range(day))
    }

    /// `day` must lie within [`min_epoch_day`]..=[`max_epoch_day`], which
    /// bounds the year to `MIN_YEAR..=MAX_YEAR`.
    pub(crate) fn from_epoch_day_in_range(day: i64) -> Self {
        let (year, month, day) = civil_from_days(day);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    /// Returns the day on the canonical axis.
    pub fn to_epoch_day(self) -> EpochDay {
        EpochDay::new(days_from_civil(i64::from(self.year), self.month, self.day))
    }

    /// Returns the proleptic year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day-of-year.
    pub fn day_of_year(self) -> u16 {
        day_of_year(i64::from(self.year), self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn day_of_week(self) -> DayOfWeek {
        self.to_epoch_day().day_of_week()
    }

    /// Returns `true` if the date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(i64::from(self.year))
    }

    /// Returns the number of days in the date's month.
    pub fn length_of_month(self) -> u8 {
        month_length(i64::from(self.year), self.month)
    }

    /// Returns the number of days in the date's year.
    pub fn length_of_year(self) -> u16 {
        year_length(i64::from(self.year))
    }

    /// Returns the ISO-8601 week-based year and week of the date.
    pub fn week_based_year_and_week(self) -> (i32, WeekOfWeekBasedYear) {
        week::week_based_year_and_week(self)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
