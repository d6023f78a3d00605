//! Instant comparison between dates of any chronology.

use std::cmp::Ordering;

use crate::chronology::Chronology;
use crate::date::CalendarDate;
use crate::epoch_day::EpochDay;
use crate::iso::IsoDate;

/// A date that can be placed on the canonical day axis.
///
/// Comparison between two `ChronoDate`s, of the same or different types and
/// chronologies, is defined by their epoch days.
pub trait ChronoDate {
    /// Returns the chronology the date is expressed in.
    fn chronology(&self) -> Chronology;

    /// Returns the day on the canonical axis.
    fn to_epoch_day(&self) -> EpochDay;

    fn compare_instant<D: ChronoDate + ?Sized>(&self, other: &D) -> Ordering {
        self.to_epoch_day().cmp(&other.to_epoch_day())
    }

    fn is_before<D: ChronoDate + ?Sized>(&self, other: &D) -> bool {
        self.compare_instant(other) == Ordering::Less
    }

    fn is_after<D: ChronoDate + ?Sized>(&self, other: &D) -> bool {
        self.compare_instant(other) == Ordering::Greater
    }

    /// Returns `true` if both dates fall on the same day, whatever their
    /// chronology.
    fn is_same_instant<D: ChronoDate + ?Sized>(&self, other: &D) -> bool {
        self.compare_instant(other) == Ordering::Equal
    }
}

impl ChronoDate for CalendarDate {
    fn chronology(&self) -> Chronology {
        CalendarDate::chronology(*self)
    }

    fn to_epoch_day(&self) -> EpochDay {
        CalendarDate::to_epoch_day(*self)
    }
}

impl ChronoDate for IsoDate {
    fn chronology(&self) -> Chronology {
        Chronology::Iso
    }

    fn to_epoch_day(&self) -> EpochDay {
        IsoDate::to_epoch_day(*self)
    }
}
