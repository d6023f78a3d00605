//! Calendar date in any supported chronology.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use crate::chronology::Chronology;
use crate::epoch_day::EpochDay;
use crate::era::Era;
use crate::error::CalendarError;
use crate::field::{Field, FieldRule};
use crate::hijrah::HijrahEra;
use crate::iso::IsoDate;
use crate::japanese::JapaneseEra;
use crate::values::FieldValues;
use crate::weekday::DayOfWeek;

/// A validated date in one chronology.
///
/// The chronology is carried by the era. Every instance satisfies the
/// chronology's range and month-length rules; invalid combinations fail at
/// construction and never exist as values.
///
/// Equality is field-wise. Ordering follows the canonical day axis, so it
/// is consistent across chronologies; see [`crate::ChronoDate`] for
/// comparisons between different date types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    era: Era,
    year_of_era: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date from its fields, using the chronology's default era
    /// when `era` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if `era` belongs to another
    /// chronology, or [`CalendarError::FieldOutOfRange`] naming the
    /// year-of-era, month-of-year, or day-of-month rule.
    pub fn of(
        chronology: Chronology,
        era: Option<Era>,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        let era = era.unwrap_or_else(|| chronology.default_era());
        Self::from_validated(
            chronology,
            era,
            i64::from(year_of_era),
            i64::from(month),
            i64::from(day),
        )
    }

    /// Creates a date in the `Hijrah` era of the Hijrah chronology.
    pub fn hijrah(year_of_era: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::of(
            Chronology::Hijrah,
            Some(HijrahEra::Hijrah.into()),
            year_of_era,
            month,
            day,
        )
    }

    /// Creates a Japanese date in `era`.
    ///
    /// The date is not required to fall inside the era's historical span.
    pub fn japanese(
        era: JapaneseEra,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        Self::of(Chronology::Japanese, Some(era.into()), year_of_era, month, day)
    }

    pub(crate) fn from_validated(
        chronology: Chronology,
        era: Era,
        year_of_era: i64,
        month: i64,
        day: i64,
    ) -> Result<Self, CalendarError> {
        let (year_of_era, month, day) = chronology.validate(era, year_of_era, month, day)?;
        Ok(Self {
            era,
            year_of_era,
            month,
            day,
        })
    }

    /// Creates the date of `chronology` that falls on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the chronology cannot
    /// represent `day`.
    pub fn from_epoch_day(chronology: Chronology, day: EpochDay) -> Result<Self, CalendarError> {
        let (era, year_of_era, month, day) = chronology.from_epoch_day(day)?;
        Ok(Self {
            era,
            year_of_era,
            month,
            day,
        })
    }

    /// Re-expresses an ISO date in `chronology`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the chronology cannot
    /// represent the date.
    pub fn from_iso(chronology: Chronology, date: IsoDate) -> Result<Self, CalendarError> {
        Self::from_epoch_day(chronology, date.to_epoch_day())
    }

    /// Returns the chronology the date belongs to.
    pub fn chronology(self) -> Chronology {
        self.era.chronology()
    }

    /// Returns the era.
    pub fn era(self) -> Era {
        self.era
    }

    /// Returns the year within the era.
    pub fn year_of_era(self) -> i32 {
        self.year_of_era
    }

    /// Returns the year on the chronology's single year axis.
    pub fn proleptic_year(self) -> i64 {
        self.era.proleptic_year(self.year_of_era)
    }

    /// Returns the month (1..=12).
    pub fn month_of_year(self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    pub fn day_of_month(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day within the year.
    pub fn day_of_year(self) -> u16 {
        self.chronology()
            .day_of_year_of(self.proleptic_year(), self.month, self.day)
    }

    /// Returns the day of the week, derived from the canonical day axis.
    pub fn day_of_week(self) -> DayOfWeek {
        self.to_epoch_day().day_of_week()
    }

    /// Returns `true` if the date's year is leap in its chronology.
    pub fn is_leap_year(self) -> bool {
        self.chronology().is_leap_year(self.proleptic_year())
    }

    /// Returns the number of days in the date's month.
    pub fn length_of_month(self) -> u8 {
        self.chronology()
            .month_length_of(self.proleptic_year(), self.month)
    }

    /// Returns the number of days in the date's year.
    pub fn length_of_year(self) -> u16 {
        self.chronology().year_length(self.proleptic_year())
    }

    /// Returns the day on the canonical axis.
    pub fn to_epoch_day(self) -> EpochDay {
        self.chronology()
            .epoch_day_of(self.proleptic_year(), self.month, self.day)
    }

    /// Returns the ISO date falling on the same day.
    pub fn to_iso(self) -> IsoDate {
        // Every chronology's year range lies inside the ISO one.
        IsoDate::from_epoch_day_in_range(self.to_epoch_day().get())
    }

    /// Re-expresses the date in another chronology.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if `chronology` cannot
    /// represent the day.
    pub fn convert_to(self, chronology: Chronology) -> Result<Self, CalendarError> {
        if chronology == self.chronology() {
            return Ok(self);
        }
        Self::from_epoch_day(chronology, self.to_epoch_day())
    }

    fn own_rule(self, rule: FieldRule) -> Result<FieldRule, CalendarError> {
        let chronology = self.chronology();
        if rule.chronology() == chronology && rule.is_supported() {
            Ok(rule)
        } else {
            Err(CalendarError::UnsupportedField { rule, chronology })
        }
    }

    /// Returns the value of the field described by `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if `rule` belongs to
    /// another chronology or describes a field this chronology lacks.
    pub fn get(self, rule: FieldRule) -> Result<i64, CalendarError> {
        let rule = self.own_rule(rule)?;
        let value = match rule.field() {
            Field::Era => i64::from(self.era.code()),
            Field::YearOfEra => i64::from(self.year_of_era),
            Field::ProlepticYear => self.proleptic_year(),
            Field::MonthOfYear => i64::from(self.month),
            Field::DayOfMonth => i64::from(self.day),
            Field::DayOfYear => i64::from(self.day_of_year()),
            Field::DayOfWeek => i64::from(self.day_of_week().value()),
            Field::WeekBasedYear => i64::from(self.to_iso().week_based_year_and_week().0),
            Field::WeekOfWeekBasedYear => {
                i64::from(self.to_iso().week_based_year_and_week().1.get())
            }
        };
        Ok(value)
    }

    /// Returns the valid range of the field in the context of this date.
    ///
    /// Day-of-month and day-of-year are bounded by the length of this
    /// date's month and year; other fields report their outer range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] as [`CalendarDate::get`]
    /// does.
    pub fn range(self, rule: FieldRule) -> Result<RangeInclusive<i64>, CalendarError> {
        let rule = self.own_rule(rule)?;
        let range = match rule.field() {
            Field::DayOfMonth => 1..=i64::from(self.length_of_month()),
            Field::DayOfYear => 1..=i64::from(self.length_of_year()),
            _ => rule.range(),
        };
        Ok(range)
    }

    /// Returns a copy with the year-of-era replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the year-of-era rule, or
    /// on the day-of-month rule if the day does not exist in the new year.
    pub fn with_year_of_era(self, year_of_era: i32) -> Result<Self, CalendarError> {
        self.with_year(self.era, year_of_era)
    }

    /// Returns a copy with the era and year-of-era replaced.
    pub fn with_year(self, era: Era, year_of_era: i32) -> Result<Self, CalendarError> {
        Self::from_validated(
            self.chronology(),
            era,
            i64::from(year_of_era),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Returns a copy with the month replaced.
    pub fn with_month_of_year(self, month: u8) -> Result<Self, CalendarError> {
        Self::from_validated(
            self.chronology(),
            self.era,
            i64::from(self.year_of_era),
            i64::from(month),
            i64::from(self.day),
        )
    }

    /// Returns a copy with the day-of-month replaced.
    pub fn with_day_of_month(self, day: u8) -> Result<Self, CalendarError> {
        Self::from_validated(
            self.chronology(),
            self.era,
            i64::from(self.year_of_era),
            i64::from(self.month),
            i64::from(day),
        )
    }

    /// Returns a copy moved to another day of the same year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the day-of-year rule if
    /// `day_of_year` exceeds the length of the year.
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Self, CalendarError> {
        let chronology = self.chronology();
        chronology.day_of_year().check_within(
            i64::from(day_of_year),
            1,
            i64::from(self.length_of_year()),
        )?;
        let (month, day) = chronology.month_day_of(self.proleptic_year(), day_of_year);
        Ok(Self { month, day, ..self })
    }

    /// Exports era, year-of-era, month and day.
    pub fn to_field_values(self) -> FieldValues {
        let chronology = self.chronology();
        FieldValues::new()
            .with(chronology.era(), i64::from(self.era.code()))
            .with(chronology.year_of_era(), i64::from(self.year_of_era))
            .with(chronology.month_of_year(), i64::from(self.month))
            .with(chronology.day_of_month(), i64::from(self.day))
    }

    /// Resolves a date of `chronology` from a field-value container.
    ///
    /// The era is optional; year-of-era, month and day are required.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NullArgument`] naming the first missing
    /// field, or fails as [`CalendarDate::of`] does.
    pub fn from_field_values(
        chronology: Chronology,
        values: &FieldValues,
    ) -> Result<Self, CalendarError> {
        let era = match values.get(chronology.era()) {
            Some(code) => chronology.era_from_code(code)?,
            None => chronology.default_era(),
        };
        let year_of_era = values.require(chronology.year_of_era())?;
        let month = values.require(chronology.month_of_year())?;
        let day = values.require(chronology.day_of_month())?;
        Self::from_validated(chronology, era, year_of_era, month, day)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    /// Orders by day on the canonical axis. Distinct dates naming the same
    /// day are separated by chronology, then era code.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.to_epoch_day(), self.chronology(), self.era.code()).cmp(&(
            other.to_epoch_day(),
            other.chronology(),
            other.era.code(),
        ))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chronology = self.chronology();
        if chronology.is_multi_era() || self.era != chronology.default_era() {
            write!(f, "{} ", self.era)?;
        }
        write!(
            f,
            "{}-{:02}-{:02} ({})",
            self.year_of_era, self.month, self.day, chronology
        )
    }
}
