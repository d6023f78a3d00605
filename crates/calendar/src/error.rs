//! Error types for the almanac-calendar crate.

use crate::chronology::Chronology;
use crate::field::FieldRule;

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Every variant is terminal: an operation that fails returns no partial
/// result, and the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a field value lies outside the bounds its chronology
    /// allows, either at construction or during year/month arithmetic.
    #[error("{rule} value {value} is out of range {min}..={max}")]
    FieldOutOfRange {
        /// The rule of the field that was rejected.
        rule: FieldRule,
        /// The rejected value, saturated to `i64` if arithmetic overflowed.
        value: i64,
        /// Smallest valid value in the context of the check.
        min: i64,
        /// Largest valid value in the context of the check.
        max: i64,
    },

    /// Returned when a field rule is queried against a chronology that does
    /// not recognise it.
    #[error("field {rule} is not supported by the {chronology} chronology")]
    UnsupportedField {
        /// The rule that was not recognised.
        rule: FieldRule,
        /// The chronology the rule was presented to.
        chronology: Chronology,
    },

    /// Returned when a required value was absent.
    #[error("missing required value: {name}")]
    NullArgument {
        /// Name of the missing value.
        name: &'static str,
    },

    /// Returned when day-level arithmetic or epoch-day reconstruction leaves
    /// the range the chronology can represent.
    #[error("result is outside the supported range of the {chronology} chronology")]
    RangeOverflow {
        /// The chronology whose range was exceeded.
        chronology: Chronology,
    },
}

impl CalendarError {
    /// Returns the field rule the error is about, if it names one.
    pub fn rule(&self) -> Option<FieldRule> {
        match self {
            Self::FieldOutOfRange { rule, .. } | Self::UnsupportedField { rule, .. } => Some(*rule),
            Self::NullArgument { .. } | Self::RangeOverflow { .. } => None,
        }
    }
}
