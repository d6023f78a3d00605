//! Field rules: chronology-owned descriptors of a single calendar field.

use std::fmt;
use std::ops::RangeInclusive;

use crate::chronology::Chronology;
use crate::error::CalendarError;

/// A calendar field, independent of any chronology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Era code, ordered by era start.
    Era,
    /// Year counted from the start of the era (always positive).
    YearOfEra,
    /// Year on a single axis spanning all eras.
    ProlepticYear,
    /// Month within the year (1..=12).
    MonthOfYear,
    /// Day within the month.
    DayOfMonth,
    /// Day within the year.
    DayOfYear,
    /// ISO-8601 day of week (1 = Monday).
    DayOfWeek,
    /// ISO-8601 week-based year.
    WeekBasedYear,
    /// ISO-8601 week within the week-based year (1..=53).
    WeekOfWeekBasedYear,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 9] = [
        Field::Era,
        Field::YearOfEra,
        Field::ProlepticYear,
        Field::MonthOfYear,
        Field::DayOfMonth,
        Field::DayOfYear,
        Field::DayOfWeek,
        Field::WeekBasedYear,
        Field::WeekOfWeekBasedYear,
    ];

    /// Returns the field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Era => "Era",
            Self::YearOfEra => "YearOfEra",
            Self::ProlepticYear => "ProlepticYear",
            Self::MonthOfYear => "MonthOfYear",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::DayOfWeek => "DayOfWeek",
            Self::WeekBasedYear => "WeekBasedYear",
            Self::WeekOfWeekBasedYear => "WeekOfWeekBasedYear",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field as defined by one chronology.
///
/// Two rules are equal only if both the chronology and the field match, so
/// the Hijrah day-of-month rule is distinct from the ISO one even though
/// both describe "day of month".
///
/// Rules are obtained from a [`Chronology`], e.g.
/// [`Chronology::day_of_month`] or [`Chronology::rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldRule {
    chronology: Chronology,
    field: Field,
}

impl FieldRule {
    pub(crate) const fn new(chronology: Chronology, field: Field) -> Self {
        Self { chronology, field }
    }

    /// Returns the chronology that owns this rule.
    pub fn chronology(self) -> Chronology {
        self.chronology
    }

    /// Returns the field this rule describes.
    pub fn field(self) -> Field {
        self.field
    }

    /// Returns `true` if the owning chronology supports the field.
    pub fn is_supported(self) -> bool {
        self.chronology.supports(self.field)
    }

    /// Returns the outer range of valid values, independent of any date.
    ///
    /// The range is empty for a field the chronology does not support.
    pub fn range(self) -> RangeInclusive<i64> {
        self.chronology.outer_range(self.field).unwrap_or(1..=0)
    }

    /// Returns the smallest value the field can take.
    pub fn min(self) -> i64 {
        *self.range().start()
    }

    /// Returns the largest value the field can take.
    pub fn max(self) -> i64 {
        *self.range().end()
    }

    /// Checks `value` against the outer range of the field.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FieldOutOfRange`] carrying this rule if
    /// `value` is outside [`FieldRule::range`].
    pub fn check(self, value: i64) -> Result<i64, CalendarError> {
        let range = self.range();
        self.check_within(value, *range.start(), *range.end())
    }

    /// Checks `value` against a context-specific range such as the length
    /// of one particular month.
    pub(crate) fn check_within(self, value: i64, min: i64, max: i64) -> Result<i64, CalendarError> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(self.out_of_range(value, min, max))
        }
    }

    pub(crate) fn out_of_range(self, value: i64, min: i64, max: i64) -> CalendarError {
        CalendarError::FieldOutOfRange {
            rule: self,
            value,
            min,
            max,
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chronology, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_chronology_and_field() {
        assert_eq!(Chronology::Hijrah.day_of_month(), Chronology::Hijrah.day_of_month());
        assert_ne!(Chronology::Hijrah.day_of_month(), Chronology::Iso.day_of_month());
        assert_ne!(Chronology::Hijrah.day_of_month(), Chronology::Hijrah.day_of_year());
    }

    #[test]
    fn outer_ranges() {
        assert_eq!(Chronology::Hijrah.day_of_month().range(), 1..=30);
        assert_eq!(Chronology::Japanese.day_of_month().range(), 1..=31);
        assert_eq!(Chronology::Hijrah.day_of_year().max(), 355);
        assert_eq!(Chronology::Japanese.era().range(), 0..=7);
        assert_eq!(Chronology::Japanese.year_of_era().max(), 9_999);
        assert_eq!(Chronology::Iso.year_of_era().max(), 999_999_999);
        assert_eq!(Chronology::Iso.proleptic_year().min(), -999_999_998);
    }

    #[test]
    fn unsupported_rule_has_empty_range() {
        let rule = FieldRule::new(Chronology::Hijrah, Field::WeekOfWeekBasedYear);
        assert!(!rule.is_supported());
        assert!(rule.range().is_empty());
        assert!(rule.check(1).is_err());
    }

    #[test]
    fn check_reports_rule_and_bounds() {
        let rule = Chronology::Hijrah.month_of_year();
        assert_eq!(rule.check(12), Ok(12));
        assert_eq!(
            rule.check(13),
            Err(CalendarError::FieldOutOfRange {
                rule,
                value: 13,
                min: 1,
                max: 12,
            })
        );
    }

    #[test]
    fn check_within_context() {
        let rule = Chronology::Iso.day_of_month();
        assert!(rule.check_within(29, 1, 29).is_ok());
        assert_eq!(
            rule.check_within(30, 1, 29).unwrap_err(),
            CalendarError::FieldOutOfRange {
                rule,
                value: 30,
                min: 1,
                max: 29,
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Chronology::Japanese.year_of_era().to_string(), "Japanese.YearOfEra");
        assert_eq!(Field::WeekOfWeekBasedYear.to_string(), "WeekOfWeekBasedYear");
    }

    #[test]
    fn copy_and_hash_traits() {
        fn assert_impl<T: Copy + std::hash::Hash + Ord>() {}
        assert_impl::<FieldRule>();
        assert_impl::<Field>();
    }
}
