//! Field-value container for exchanging dates between chronologies generically.

use std::collections::BTreeMap;

use crate::error::CalendarError;
use crate::field::FieldRule;

/// An ordered map from [`FieldRule`] to value.
///
/// Values are stored unchecked; they are validated when a date is resolved
/// from the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldRule, i64>,
}

impl FieldValues {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container with `rule` set to `value`.
    #[must_use]
    pub fn with(mut self, rule: FieldRule, value: i64) -> Self {
        self.values.insert(rule, value);
        self
    }

    /// Sets `rule` to `value`, returning the previous value.
    pub fn insert(&mut self, rule: FieldRule, value: i64) -> Option<i64> {
        self.values.insert(rule, value)
    }

    /// Returns the value of `rule`, if present.
    pub fn get(&self, rule: FieldRule) -> Option<i64> {
        self.values.get(&rule).copied()
    }

    /// Returns the value of `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NullArgument`] naming the field if no value
    /// is present.
    pub fn require(&self, rule: FieldRule) -> Result<i64, CalendarError> {
        self.get(rule).ok_or(CalendarError::NullArgument {
            name: rule.field().name(),
        })
    }

    /// Returns the number of fields set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the entries in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldRule, i64)> + '_ {
        self.values.iter().map(|(&rule, &value)| (rule, value))
    }
}

impl FromIterator<(FieldRule, i64)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (FieldRule, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::Chronology;

    #[test]
    fn insert_and_get() {
        let mut values = FieldValues::new();
        assert!(values.is_empty());
        assert_eq!(values.insert(Chronology::Iso.month_of_year(), 3), None);
        assert_eq!(values.insert(Chronology::Iso.month_of_year(), 4), Some(3));
        assert_eq!(values.get(Chronology::Iso.month_of_year()), Some(4));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn rules_of_different_chronologies_are_distinct() {
        let values = FieldValues::new()
            .with(Chronology::Iso.day_of_month(), 2)
            .with(Chronology::Hijrah.day_of_month(), 5);
        assert_eq!(values.len(), 2);
        assert_eq!(values.get(Chronology::Japanese.day_of_month()), None);
    }

    #[test]
    fn require_missing_is_null_argument() {
        let values = FieldValues::new();
        assert_eq!(
            values.require(Chronology::Hijrah.year_of_era()),
            Err(CalendarError::NullArgument { name: "YearOfEra" })
        );
    }

    #[test]
    fn iter_in_rule_order() {
        let values: FieldValues = [
            (Chronology::Iso.day_of_month(), 2),
            (Chronology::Iso.era(), 1),
        ]
        .into_iter()
        .collect();
        let fields: Vec<_> = values.iter().map(|(rule, _)| rule.field()).collect();
        assert_eq!(
            fields,
            vec![crate::field::Field::Era, crate::field::Field::DayOfMonth]
        );
    }
}
