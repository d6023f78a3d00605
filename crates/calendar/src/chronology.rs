//! Chronology dispatch.
//!
//! [`Chronology`] is a closed set of calendar systems. Every operation that
//! depends on the calendar system (field ranges, leap rules, era tables, and
//! the conversions to and from [`EpochDay`]) is a `match` on the variant.
//!
//! | Chronology | Eras | Year-of-era | Leap rule |
//! |---|---|---|---|
//! | `Iso` | `BCE`, `CE` | 1..=999,999,999 | 4/100/400 on the proleptic year |
//! | `Hijrah` | `BeforeHijrah`, `Hijrah` | 1..=9,999 | `(14 + 11 y) mod 30 < 11` on the year-of-era |
//! | `Japanese` | `BeforeSeireki` .. `Reiwa` | 1..=9,999 | 4/100/400 on the ISO proleptic year |

use std::fmt;
use std::ops::RangeInclusive;

use crate::date::CalendarDate;
use crate::epoch_day::EpochDay;
use crate::era::Era;
use crate::error::CalendarError;
use crate::field::{Field, FieldRule};
use crate::hijrah::{self, HijrahEra};
use crate::iso::{self, IsoDate, IsoEra};
use crate::japanese::{self, JapaneseEra};

/// A calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Chronology {
    /// ISO-8601 proleptic Gregorian calendar.
    #[default]
    Iso,
    /// Tabular Hijrah calendar with a 30-year leap cycle.
    Hijrah,
    /// Japanese imperial-era calendar on top of ISO months and days.
    Japanese,
}

impl Chronology {
    /// Every chronology.
    pub const ALL: [Chronology; 3] = [Chronology::Iso, Chronology::Hijrah, Chronology::Japanese];

    /// Returns the chronology name used in date display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Iso => "ISO",
            Self::Hijrah => "Hijrah",
            Self::Japanese => "Japanese",
        }
    }

    /// Looks up a chronology by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|chronology| chronology.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Returns `true` if the chronology recognises `field`.
    pub fn supports(self, field: Field) -> bool {
        self.outer_range(field).is_some()
    }

    pub(crate) fn outer_range(self, field: Field) -> Option<RangeInclusive<i64>> {
        let max_yoe = i64::from(self.max_year_of_era());
        let range = match (self, field) {
            (Self::Iso, Field::Era) | (Self::Hijrah, Field::Era) => 0..=1,
            (Self::Japanese, Field::Era) => 0..=i64::from(JapaneseEra::Reiwa.code()),
            (_, Field::YearOfEra) => 1..=max_yoe,
            (Self::Iso, Field::ProlepticYear) => i64::from(iso::MIN_YEAR)..=i64::from(iso::MAX_YEAR),
            (Self::Hijrah, Field::ProlepticYear) => {
                HijrahEra::BeforeHijrah.proleptic_year(hijrah::MAX_YEAR_OF_ERA)
                    ..=HijrahEra::Hijrah.proleptic_year(hijrah::MAX_YEAR_OF_ERA)
            }
            (Self::Japanese, Field::ProlepticYear) => {
                JapaneseEra::BeforeSeireki.proleptic_year(japanese::MAX_YEAR_OF_ERA)
                    ..=JapaneseEra::Reiwa.proleptic_year(japanese::MAX_YEAR_OF_ERA)
            }
            (_, Field::MonthOfYear) => 1..=12,
            (Self::Hijrah, Field::DayOfMonth) => 1..=30,
            (_, Field::DayOfMonth) => 1..=31,
            (Self::Hijrah, Field::DayOfYear) => 1..=355,
            (_, Field::DayOfYear) => 1..=366,
            (_, Field::DayOfWeek) => 1..=7,
            (Self::Iso, Field::WeekBasedYear) => {
                i64::from(iso::MIN_YEAR) - 1..=i64::from(iso::MAX_YEAR) + 1
            }
            (Self::Iso, Field::WeekOfWeekBasedYear) => 1..=53,
            (_, Field::WeekBasedYear) | (_, Field::WeekOfWeekBasedYear) => return None,
        };
        Some(range)
    }

    /// Returns the rule for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if the chronology does not
    /// recognise `field`.
    pub fn rule(self, field: Field) -> Result<FieldRule, CalendarError> {
        let rule = FieldRule::new(self, field);
        if self.supports(field) {
            Ok(rule)
        } else {
            Err(CalendarError::UnsupportedField {
                rule,
                chronology: self,
            })
        }
    }

    /// Returns every rule the chronology supports.
    pub fn rules(self) -> Vec<FieldRule> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.supports(field))
            .map(|field| FieldRule::new(self, field))
            .collect()
    }

    /// The era code rule.
    pub const fn era(self) -> FieldRule {
        FieldRule::new(self, Field::Era)
    }

    /// The year-of-era rule.
    pub const fn year_of_era(self) -> FieldRule {
        FieldRule::new(self, Field::YearOfEra)
    }

    /// The proleptic year rule.
    pub const fn proleptic_year(self) -> FieldRule {
        FieldRule::new(self, Field::ProlepticYear)
    }

    /// The month-of-year rule.
    pub const fn month_of_year(self) -> FieldRule {
        FieldRule::new(self, Field::MonthOfYear)
    }

    /// The day-of-month rule.
    pub const fn day_of_month(self) -> FieldRule {
        FieldRule::new(self, Field::DayOfMonth)
    }

    /// The day-of-year rule.
    pub const fn day_of_year(self) -> FieldRule {
        FieldRule::new(self, Field::DayOfYear)
    }

    /// The day-of-week rule.
    pub const fn day_of_week(self) -> FieldRule {
        FieldRule::new(self, Field::DayOfWeek)
    }

    /// Returns every era of the chronology, earliest first.
    pub fn eras(self) -> Vec<Era> {
        match self {
            Self::Iso => IsoEra::ALL.into_iter().map(Era::from).collect(),
            Self::Hijrah => HijrahEra::ALL.into_iter().map(Era::from).collect(),
            Self::Japanese => JapaneseEra::ALL.into_iter().map(Era::from).collect(),
        }
    }

    /// Returns the era used when a date is created without one.
    pub fn default_era(self) -> Era {
        match self {
            Self::Iso => Era::Iso(IsoEra::default()),
            Self::Hijrah => Era::Hijrah(HijrahEra::default()),
            Self::Japanese => Era::Japanese(JapaneseEra::default()),
        }
    }

    /// Returns the era with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the era rule if no era
    /// has that code.
    pub fn era_from_code(self, code: i64) -> Result<Era, CalendarError> {
        let rule = self.era();
        let era = match self {
            Self::Iso => IsoEra::from_code(code).map(Era::from),
            Self::Hijrah => HijrahEra::from_code(code).map(Era::from),
            Self::Japanese => JapaneseEra::from_code(code).map(Era::from),
        };
        era.ok_or_else(|| rule.out_of_range(code, rule.min(), rule.max()))
    }

    /// Looks up an era by name, ignoring ASCII case.
    pub fn era_from_name(self, name: &str) -> Option<Era> {
        Era::from_name(self, name)
    }

    /// Returns the largest year-of-era in any era of the chronology.
    pub fn max_year_of_era(self) -> i32 {
        match self {
            Self::Iso => iso::MAX_YEAR_OF_ERA,
            Self::Hijrah => hijrah::MAX_YEAR_OF_ERA,
            Self::Japanese => japanese::MAX_YEAR_OF_ERA,
        }
    }

    /// Returns `true` if dates of the chronology always display their era.
    pub fn is_multi_era(self) -> bool {
        matches!(self, Self::Japanese)
    }

    /// Returns `true` if the proleptic year is leap.
    pub fn is_leap_year(self, proleptic_year: i64) -> bool {
        match self {
            Self::Iso | Self::Japanese => iso::is_leap_year(proleptic_year),
            Self::Hijrah => hijrah::is_leap_year(proleptic_year),
        }
    }

    /// Returns the number of days in `month` of a proleptic year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] on the month-of-year rule
    /// if `month` is not in 1..=12.
    pub fn month_length(self, proleptic_year: i64, month: u8) -> Result<u8, CalendarError> {
        self.month_of_year().check(i64::from(month))?;
        Ok(self.month_length_of(proleptic_year, month))
    }

    /// `month` must be in 1..=12.
    pub(crate) fn month_length_of(self, proleptic_year: i64, month: u8) -> u8 {
        match self {
            Self::Iso | Self::Japanese => iso::month_length(proleptic_year, month),
            Self::Hijrah => hijrah::month_length(proleptic_year, month),
        }
    }

    /// Returns the number of days in a proleptic year.
    pub fn year_length(self, proleptic_year: i64) -> u16 {
        match self {
            Self::Iso | Self::Japanese => iso::year_length(proleptic_year),
            Self::Hijrah => hijrah::year_length(proleptic_year),
        }
    }

    pub(crate) fn day_of_year_of(self, proleptic_year: i64, month: u8, day: u8) -> u16 {
        match self {
            Self::Iso | Self::Japanese => iso::day_of_year(proleptic_year, month, day),
            Self::Hijrah => hijrah::day_of_year(month, day),
        }
    }

    pub(crate) fn month_day_of(self, proleptic_year: i64, day_of_year: u16) -> (u8, u8) {
        match self {
            Self::Iso | Self::Japanese => iso::month_day(proleptic_year, day_of_year),
            Self::Hijrah => hijrah::month_day(day_of_year),
        }
    }

    /// Fails with `UnsupportedField` on the foreign chronology's era rule
    /// when `era` belongs to another chronology.
    pub(crate) fn check_era(self, era: Era) -> Result<(), CalendarError> {
        if era.chronology() == self {
            Ok(())
        } else {
            Err(CalendarError::UnsupportedField {
                rule: era.chronology().era(),
                chronology: self,
            })
        }
    }

    /// Validates a field tuple, checking year, then month, then day.
    ///
    /// Values are taken as `i64` so arithmetic results can be checked before
    /// they are narrowed.
    pub(crate) fn validate(
        self,
        era: Era,
        year_of_era: i64,
        month: i64,
        day: i64,
    ) -> Result<(i32, u8, u8), CalendarError> {
        self.check_era(era)?;
        let year = self.year_of_era().check(year_of_era)? as i32;
        let month = self.month_of_year().check(month)? as u8;
        let max_day = self.month_length_of(era.proleptic_year(year), month);
        let day = self
            .day_of_month()
            .check_within(day, 1, i64::from(max_day))? as u8;
        Ok((year, month, day))
    }

    /// Converts a field tuple to the canonical day axis.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if `era` belongs to another
    /// chronology, or [`CalendarError::FieldOutOfRange`] naming the first
    /// field that is invalid.
    pub fn to_epoch_day(
        self,
        era: Era,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<EpochDay, CalendarError> {
        let (year, month, day) =
            self.validate(era, i64::from(year_of_era), i64::from(month), i64::from(day))?;
        Ok(self.epoch_day_of(era.proleptic_year(year), month, day))
    }

    /// Converts an already validated proleptic date to the day axis.
    pub(crate) fn epoch_day_of(self, proleptic_year: i64, month: u8, day: u8) -> EpochDay {
        let day = match self {
            Self::Iso | Self::Japanese => iso::days_from_civil(proleptic_year, month, day),
            Self::Hijrah => hijrah::to_epoch_day(proleptic_year, month, day),
        };
        EpochDay::new(day)
    }

    /// Converts a day on the canonical axis to `(era, year_of_era, month, day)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the day falls outside the
    /// years the chronology can represent.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_epoch_day(self, day: EpochDay) -> Result<(Era, i32, u8, u8), CalendarError> {
        let overflow = || {
            tracing::debug!(
                chronology = self.name(),
                epoch_day = day.get(),
                "epoch day outside the chronology range"
            );
            CalendarError::RangeOverflow { chronology: self }
        };
        match self {
            Self::Iso => {
                let date = IsoDate::from_epoch_day(day)?;
                let year = i64::from(date.year());
                let (era, year_of_era) = if year >= 1 {
                    (IsoEra::Ce, year)
                } else {
                    (IsoEra::Bce, 1 - year)
                };
                Ok((era.into(), year_of_era as i32, date.month(), date.day()))
            }
            Self::Hijrah => hijrah::from_epoch_day(day.get())
                .map(|(era, year, month, dom)| (era.into(), year, month, dom))
                .ok_or_else(overflow),
            Self::Japanese => {
                let date = IsoDate::from_epoch_day(day).map_err(|_| overflow())?;
                let year = i64::from(date.year());
                let era = japanese::era_for_date(year, date.month(), date.day());
                let year_of_era = era.year_of_era(year);
                if year_of_era > i64::from(japanese::MAX_YEAR_OF_ERA) {
                    return Err(overflow());
                }
                Ok((era.into(), year_of_era as i32, date.month(), date.day()))
            }
        }
    }

    /// Creates a date in this chronology.
    ///
    /// # Errors
    ///
    /// See [`CalendarDate::of`].
    pub fn date(
        self,
        era: impl Into<Era>,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<CalendarDate, CalendarError> {
        CalendarDate::of(self, Some(era.into()), year_of_era, month, day)
    }

    /// Creates the date of this chronology that falls on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RangeOverflow`] if the chronology cannot
    /// represent `day`.
    pub fn date_from_epoch_day(self, day: EpochDay) -> Result<CalendarDate, CalendarError> {
        CalendarDate::from_epoch_day(self, day)
    }
}

impl fmt::Display for Chronology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
