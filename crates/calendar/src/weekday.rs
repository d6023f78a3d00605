//! Day of the week, numbered 1 (Monday) through 7 (Sunday).

use std::fmt;

use crate::chronology::Chronology;
use crate::epoch_day::EpochDay;
use crate::error::CalendarError;

/// A day of the week in ISO-8601 numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

const ALL: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

impl DayOfWeek {
    /// Creates a `DayOfWeek` from its value (1..=7).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the ISO day-of-week
    /// rule if `value` is not in 1..=7.
    pub fn from_value(value: u8) -> Result<Self, CalendarError> {
        let rule = Chronology::Iso.day_of_week();
        rule.check(i64::from(value))?;
        Ok(ALL[usize::from(value) - 1])
    }

    /// Returns the ISO-8601 value (1 = Monday, 7 = Sunday).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the day of the week on which `day` falls.
    pub fn from_epoch_day(day: EpochDay) -> Self {
        // 1970-01-01 was a Thursday.
        ALL[((day.get().rem_euclid(7) + 3) % 7) as usize]
    }

    /// Returns the day `days` after this one, wrapping around the week.
    pub fn plus(self, days: i64) -> Self {
        let offset = (i64::from(self.value()) - 1 + days.rem_euclid(7)).rem_euclid(7);
        ALL[offset as usize]
    }

    /// Returns the English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
