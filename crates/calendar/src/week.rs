//! ISO-8601 week-of-week-based-year.

use crate::chronology::Chronology;
use crate::error::CalendarError;
use crate::iso::{self, IsoDate};
use crate::weekday::DayOfWeek;

/// Week within an ISO-8601 week-based year (1..=53).
///
/// A plain value type; equal weeks compare equal regardless of where they
/// were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekOfWeekBasedYear(u8);

impl WeekOfWeekBasedYear {
    /// Creates a new week value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the ISO
    /// week-of-week-based-year rule if `week` is not in 1..=53.
    pub fn new(week: u8) -> Result<Self, CalendarError> {
        Chronology::Iso
            .rule(crate::field::Field::WeekOfWeekBasedYear)?
            .check(i64::from(week))?;
        Ok(Self(week))
    }

    /// Returns the week number (1..=53).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` if this week exists in `week_based_year`.
    pub fn is_valid_for(self, week_based_year: i32) -> bool {
        self.0 < 53 || weeks_in_week_based_year(week_based_year) == 53
    }
}

/// Returns the number of weeks (52 or 53) in an ISO week-based year.
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub fn weeks_in_week_based_year(year: i32) -> u8 {
    let year = i64::from(year);
    let jan1 = DayOfWeek::from_epoch_day(crate::EpochDay::new(iso::days_from_civil(year, 1, 1)));
    match jan1 {
        DayOfWeek::Thursday => 53,
        DayOfWeek::Wednesday if iso::is_leap_year(year) => 53,
        _ => 52,
    }
}

pub(crate) fn week_based_year_and_week(date: IsoDate) -> (i32, WeekOfWeekBasedYear) {
    let year = date.year();
    let ordinal = i32::from(date.day_of_year());
    let weekday = i32::from(date.day_of_week().value());
    let week = (ordinal - weekday + 10) / 7;
    if week < 1 {
        let previous = year - 1;
        (previous, WeekOfWeekBasedYear(weeks_in_week_based_year(previous)))
    } else if week > i32::from(weeks_in_week_based_year(year)) {
        (year + 1, WeekOfWeekBasedYear(1))
    } else {
        (year, WeekOfWeekBasedYear(week as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_and_invalid() {
        assert_eq!(WeekOfWeekBasedYear::new(1).unwrap().get(), 1);
        assert_eq!(WeekOfWeekBasedYear::new(53).unwrap().get(), 53);
        for w in [0u8, 54] {
            let err = WeekOfWeekBasedYear::new(w).unwrap_err();
            assert_eq!(
                err.rule().map(|r| r.field()),
                Some(crate::field::Field::WeekOfWeekBasedYear)
            );
        }
    }

    #[test]
    fn value_equality() {
        assert_eq!(WeekOfWeekBasedYear::new(17), WeekOfWeekBasedYear::new(17));
    }

    #[test]
    fn weeks_in_year() {
        assert_eq!(weeks_in_week_based_year(1981), 53); // starts Thursday
        assert_eq!(weeks_in_week_based_year(2004), 53); // leap, starts Thursday
        assert_eq!(weeks_in_week_based_year(2020), 53); // leap, starts Wednesday
        assert_eq!(weeks_in_week_based_year(2021), 52);
    }

    #[test]
    fn week_53_validity() {
        let week = WeekOfWeekBasedYear::new(53).unwrap();
        assert!(week.is_valid_for(1981));
        assert!(!week.is_valid_for(2021));
        assert!(WeekOfWeekBasedYear::new(52).unwrap().is_valid_for(2021));
    }

    #[test]
    fn known_year_weeks() {
        for ((y, m, d), expected) in [
            ((1980, 12, 28), (1980, 52)),
            ((1980, 12, 31), (1981, 1)),
            ((1981, 1, 1), (1981, 1)),
            ((1981, 1, 4), (1981, 1)),
            ((1981, 1, 5), (1981, 2)),
            ((1981, 12, 31), (1981, 53)),
            ((1982, 1, 1), (1981, 53)),
            ((2000, 1, 1), (1999, 52)),
        ] {
            let date = IsoDate::new(y, m, d).unwrap();
            let (year, week) = date.week_based_year_and_week();
            assert_eq!((year, week.get()), expected, "{y:04}-{m:02}-{d:02}");
        }
        for d in 6..=12 {
            let date = IsoDate::new(2021, 9, d).unwrap();
            let (year, week) = date.week_based_year_and_week();
            assert_eq!((year, week.get()), (2021, 36), "2021-09-{d:02}");
        }
    }
}
