//! Date arithmetic.
//!
//! Year and month arithmetic recomputes the fields in the date's own era and
//! never clamps: a day that does not exist in the target month fails on the
//! year-of-era rule. Week and day arithmetic goes through the canonical day
//! axis and can only fail with [`CalendarError::RangeOverflow`].
//!
//! All intermediate values are computed in `i128`, so no input magnitude can
//! wrap.

use crate::date::CalendarDate;
use crate::error::CalendarError;

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl CalendarDate {
    /// Returns the date `years` years later, in the same era.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the year-of-era rule if
    /// the target year leaves the era's range or lacks this day of the month.
    pub fn plus_years(self, years: i64) -> Result<Self, CalendarError> {
        self.shift_years(i128::from(years))
    }

    /// Returns the date `months` months later, carrying into years.
    ///
    /// # Errors
    ///
    /// Fails as [`CalendarDate::plus_years`] does.
    pub fn plus_months(self, months: i64) -> Result<Self, CalendarError> {
        self.shift_months(i128::from(months))
    }

    /// Returns the date `weeks` weeks later.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the result is outside the
    /// chronology's range.
    pub fn plus_weeks(self, weeks: i64) -> Result<Self, CalendarError> {
        self.shift_days(i128::from(weeks) * 7)
    }

    /// Returns the date `days` days later.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the result is outside the
    /// chronology's range.
    pub fn plus_days(self, days: i64) -> Result<Self, CalendarError> {
        self.shift_days(i128::from(days))
    }

    /// Returns the date `years` years earlier; same as `plus_years(-years)`.
    pub fn minus_years(self, years: i64) -> Result<Self, CalendarError> {
        self.shift_years(-i128::from(years))
    }

    /// Returns the date `months` months earlier; same as `plus_months(-months)`.
    pub fn minus_months(self, months: i64) -> Result<Self, CalendarError> {
        self.shift_months(-i128::from(months))
    }

    /// Returns the date `weeks` weeks earlier; same as `plus_weeks(-weeks)`.
    pub fn minus_weeks(self, weeks: i64) -> Result<Self, CalendarError> {
        self.shift_days(-i128::from(weeks) * 7)
    }

    /// Returns the date `days` days earlier; same as `plus_days(-days)`.
    pub fn minus_days(self, days: i64) -> Result<Self, CalendarError> {
        self.shift_days(-i128::from(days))
    }

    fn shift_years(self, years: i128) -> Result<Self, CalendarError> {
        let proleptic_year = i128::from(self.proleptic_year()) + years;
        self.resolve(proleptic_year, self.month_of_year())
    }

    fn shift_months(self, months: i128) -> Result<Self, CalendarError> {
        let total = i128::from(self.proleptic_year()) * 12
            + i128::from(self.month_of_year())
            - 1
            + months;
        let month = (total.rem_euclid(12) + 1) as u8;
        self.resolve(total.div_euclid(12), month)
    }

    /// Rebuilds the date in its own era at a new proleptic year and month.
    fn resolve(self, proleptic_year: i128, month: u8) -> Result<Self, CalendarError> {
        let chronology = self.chronology();
        let era = self.era();
        let rule = chronology.year_of_era();
        let year_of_era = saturate(era.year_of_era_wide(proleptic_year));
        rule.check(year_of_era)?;
        let max_day = chronology.month_length_of(era.proleptic_year(year_of_era as i32), month);
        if self.day_of_month() > max_day {
            return Err(rule.out_of_range(year_of_era, rule.min(), rule.max()));
        }
        CalendarDate::from_validated(
            chronology,
            era,
            year_of_era,
            i64::from(month),
            i64::from(self.day_of_month()),
        )
    }

    fn shift_days(self, days: i128) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(self);
        }
        let chronology = self.chronology();
        let target = i64::try_from(days)
            .ok()
            .and_then(|days| self.to_epoch_day().checked_add_days(days));
        match target {
            Some(day) => CalendarDate::from_epoch_day(chronology, day),
            None => {
                tracing::debug!(
                    chronology = chronology.name(),
                    days = %days,
                    "day arithmetic overflowed the epoch day axis"
                );
                Err(CalendarError::RangeOverflow { chronology })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::Chronology;
    use crate::iso::IsoEra;
    use crate::japanese::JapaneseEra;

    fn hijrah(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::hijrah(y, m, d).unwrap()
    }

    #[test]
    fn saturate_clamps() {
        assert_eq!(saturate(5), 5);
        assert_eq!(saturate(i128::MAX), i64::MAX);
        assert_eq!(saturate(i128::MIN), i64::MIN);
    }

    #[test]
    fn plus_years_keeps_month_and_day() {
        assert_eq!(hijrah(1430, 3, 5).plus_years(10), Ok(hijrah(1440, 3, 5)));
        assert_eq!(hijrah(1430, 3, 5).minus_years(10), Ok(hijrah(1420, 3, 5)));
        assert_eq!(hijrah(1430, 3, 5).plus_years(0), Ok(hijrah(1430, 3, 5)));
    }

    #[test]
    fn plus_years_beyond_era_fails_on_year_of_era() {
        let err = hijrah(1430, 3, 5).plus_years(9_999).unwrap_err();
        assert_eq!(
            err,
            CalendarError::FieldOutOfRange {
                rule: Chronology::Hijrah.year_of_era(),
                value: 11_429,
                min: 1,
                max: 9_999,
            }
        );
    }

    #[test]
    fn leap_day_does_not_clamp() {
        let err = hijrah(1431, 12, 30).plus_years(1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::FieldOutOfRange {
                rule: Chronology::Hijrah.year_of_era(),
                value: 1_432,
                min: 1,
                max: 9_999,
            }
        );
        let iso = CalendarDate::of(Chronology::Iso, None, 2008, 2, 29).unwrap();
        assert_eq!(iso.plus_years(4).map(|d| d.year_of_era()), Ok(2012));
        let err = iso.plus_years(1).unwrap_err();
        assert_eq!(err.rule(), Some(Chronology::Iso.year_of_era()));
    }

    #[test]
    fn plus_months_carries() {
        let date = hijrah(1430, 3, 5);
        assert_eq!(date.plus_months(5), Ok(hijrah(1430, 8, 5)));
        assert_eq!(date.plus_months(10), Ok(hijrah(1431, 1, 5)));
        assert_eq!(date.minus_months(3), Ok(hijrah(1429, 12, 5)));
        assert_eq!(date.minus_months(27), Ok(hijrah(1427, 12, 5)));
    }

    #[test]
    fn plus_months_to_short_month_fails() {
        let err = hijrah(1430, 3, 30).plus_months(1).unwrap_err();
        assert_eq!(err.rule(), Some(Chronology::Hijrah.year_of_era()));
    }

    #[test]
    fn before_era_years_follow_real_time() {
        let date = CalendarDate::of(Chronology::Iso, Some(IsoEra::Bce.into()), 44, 3, 15).unwrap();
        let later = date.plus_years(1).unwrap();
        assert_eq!(later.year_of_era(), 43);
        assert!(later > date);
        let err = date.plus_years(44).unwrap_err();
        assert_eq!(
            err,
            CalendarError::FieldOutOfRange {
                rule: Chronology::Iso.year_of_era(),
                value: 0,
                min: 1,
                max: 999_999_999,
            }
        );
    }

    #[test]
    fn weeks_and_days() {
        let date = hijrah(1430, 3, 5);
        assert_eq!(date.plus_weeks(2), Ok(hijrah(1430, 3, 19)));
        assert_eq!(date.minus_weeks(2), Ok(hijrah(1430, 2, 20)));
        assert_eq!(date.plus_days(2), Ok(hijrah(1430, 3, 7)));
        assert_eq!(date.minus_days(5), Ok(hijrah(1430, 2, 29)));
    }

    #[test]
    fn day_arithmetic_crosses_japanese_era() {
        let date = CalendarDate::japanese(JapaneseEra::Heisei, 31, 4, 30).unwrap();
        let next = date.plus_days(1).unwrap();
        assert_eq!(next.to_string(), "Reiwa 1-05-01 (Japanese)");
        assert_eq!(next.minus_days(1), Ok(date));
    }

    #[test]
    fn extreme_magnitudes() {
        let date = hijrah(1430, 3, 5);
        let overflow = CalendarError::RangeOverflow {
            chronology: Chronology::Hijrah,
        };
        assert_eq!(date.plus_days(i64::MAX), Err(overflow.clone()));
        assert_eq!(date.minus_days(i64::MIN), Err(overflow.clone()));
        assert_eq!(date.plus_weeks(i64::MAX), Err(overflow.clone()));
        assert_eq!(date.minus_weeks(i64::MAX), Err(overflow));
        for result in [
            date.plus_months(i64::MAX),
            date.minus_months(i64::MAX),
            date.plus_years(i64::MAX),
            date.minus_years(i64::MIN),
        ] {
            assert_eq!(
                result.unwrap_err().rule(),
                Some(Chronology::Hijrah.year_of_era())
            );
        }
    }
}
