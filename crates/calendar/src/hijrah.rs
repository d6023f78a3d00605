//! Tabular Hijrah calendar.
//!
//! Years follow a fixed 30-year cycle in which 11 years are leap. Months
//! alternate between 30 and 29 days, starting with 30; the twelfth month
//! of a leap year has 30 days instead of 29.
//!
//! Years before the epoch belong to the `BeforeHijrah` era and are counted
//! backwards from it: `BeforeHijrah` year 1 ends on the day before
//! `Hijrah` year 1 begins. The leap rule is applied to the year-of-era, so
//! both eras share the same cycle.

use std::fmt;

/// Epoch day of 1 Muharram AH 1 (16 July 622, proleptic Julian).
pub const EPOCH_DAY_OF_AH_1: i64 = -492_148;
/// Days in one 30-year leap cycle.
pub const CYCLE_DAYS: i64 = 10_631;
/// Years in one leap cycle.
pub const CYCLE_YEARS: i64 = 30;
/// Largest year-of-era in either Hijrah era.
pub const MAX_YEAR_OF_ERA: i32 = 9_999;

/// Hijrah era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HijrahEra {
    /// Years before AH 1, counted backwards.
    BeforeHijrah,
    /// Anno Hegirae.
    #[default]
    Hijrah,
}

impl HijrahEra {
    /// Every Hijrah era, earliest first.
    pub const ALL: [HijrahEra; 2] = [HijrahEra::BeforeHijrah, HijrahEra::Hijrah];

    /// Returns the era code (0 or 1).
    pub fn code(self) -> u8 {
        match self {
            Self::BeforeHijrah => 0,
            Self::Hijrah => 1,
        }
    }

    /// Returns the era with the given code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::BeforeHijrah),
            1 => Some(Self::Hijrah),
            _ => None,
        }
    }

    /// Returns the era name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BeforeHijrah => "BeforeHijrah",
            Self::Hijrah => "Hijrah",
        }
    }

    /// Converts a year-of-era in this era to a proleptic year.
    pub fn proleptic_year(self, year_of_era: i32) -> i64 {
        match self {
            Self::BeforeHijrah => 1 - i64::from(year_of_era),
            Self::Hijrah => i64::from(year_of_era),
        }
    }
}

impl fmt::Display for HijrahEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a proleptic year to its era and year-of-era.
pub fn era_and_year(proleptic_year: i64) -> (HijrahEra, i64) {
    if proleptic_year >= 1 {
        (HijrahEra::Hijrah, proleptic_year)
    } else {
        (HijrahEra::BeforeHijrah, 1i64.saturating_sub(proleptic_year))
    }
}

/// Returns `true` if the year-of-era `year` is leap: `(14 + 11 * |year|) mod 30 < 11`.
pub fn is_leap_year_of_era(year: i64) -> bool {
    let position = (year.unsigned_abs() % CYCLE_YEARS as u64) as i64;
    (14 + 11 * position) % CYCLE_YEARS < 11
}

/// Returns `true` if the proleptic year is leap.
pub fn is_leap_year(proleptic_year: i64) -> bool {
    is_leap_year_of_era(era_and_year(proleptic_year).1)
}

/// Returns the number of days in a proleptic year (354 or 355).
pub fn year_length(proleptic_year: i64) -> u16 {
    if is_leap_year(proleptic_year) {
        355
    } else {
        354
    }
}

/// Returns the number of days in `month` (1..=12) of a proleptic year.
pub(crate) fn month_length(proleptic_year: i64, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_leap_year(proleptic_year)) {
        30
    } else {
        29
    }
}

/// Days in the year before `month` starts.
fn days_before_month(month: u8) -> u16 {
    let month = u16::from(month);
    29 * (month - 1) + month / 2
}

/// Returns the 1-based day-of-year of a valid `(month, day)`.
pub(crate) fn day_of_year(month: u8, day: u8) -> u16 {
    days_before_month(month) + u16::from(day)
}

/// Returns the `(month, day)` of a valid 1-based day-of-year.
pub(crate) fn month_day(day_of_year: u16) -> (u8, u8) {
    let offset = day_of_year - 1;
    let month = (2 * offset / 59 + 1).min(12) as u8;
    (month, (day_of_year - days_before_month(month)) as u8)
}

/// Days from the start of a cycle to the start of its `k`-th year (0-based).
fn cycle_year_start(k: i64) -> i64 {
    354 * k + (14 + 11 * k) / CYCLE_YEARS
}

/// Total length of years 1..=`years` of an era.
fn days_in_years(years: i64) -> i64 {
    (years / CYCLE_YEARS) * CYCLE_DAYS + cycle_year_start(years % CYCLE_YEARS)
}

/// Finds the year-of-era containing the zero-based day `days` counted from
/// the start of year 1, returning the year and the offset into it.
fn locate_year(days: i64) -> (i64, i64) {
    let cycle = days / CYCLE_DAYS;
    let rem = days % CYCLE_DAYS;
    let k = (0..CYCLE_YEARS)
        .rev()
        .find(|&k| cycle_year_start(k) <= rem)
        .unwrap_or(0);
    (cycle * CYCLE_YEARS + k + 1, rem - cycle_year_start(k))
}

/// Converts a valid proleptic `(year, month, day)` to an epoch day.
pub(crate) fn to_epoch_day(proleptic_year: i64, month: u8, day: u8) -> i64 {
    let offset = i64::from(day_of_year(month, day)) - 1;
    let year_start = match era_and_year(proleptic_year) {
        (HijrahEra::Hijrah, year) => EPOCH_DAY_OF_AH_1 + days_in_years(year - 1),
        (HijrahEra::BeforeHijrah, year) => EPOCH_DAY_OF_AH_1 - days_in_years(year),
    };
    year_start + offset
}

/// Converts an epoch day to `(era, year_of_era, month, day)`.
///
/// Returns `None` if the year-of-era would exceed [`MAX_YEAR_OF_ERA`].
pub(crate) fn from_epoch_day(epoch_day: i64) -> Option<(HijrahEra, i32, u8, u8)> {
    let offset = epoch_day.checked_sub(EPOCH_DAY_OF_AH_1)?;
    let (era, year, day_of_year) = if offset >= 0 {
        let (year, into_year) = locate_year(offset);
        (HijrahEra::Hijrah, year, into_year)
    } else {
        // Before-Hijrah years are laid out backwards from the epoch.
        let (year, from_end) = locate_year(-(offset + 1));
        let length = if is_leap_year_of_era(year) { 355 } else { 354 };
        (HijrahEra::BeforeHijrah, year, length - 1 - from_end)
    };
    if year > i64::from(MAX_YEAR_OF_ERA) {
        return None;
    }
    let (month, day) = month_day(day_of_year as u16 + 1);
    Some((era, year as i32, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_in_cycle() {
        let leaps: Vec<i64> = (1..=30).filter(|&y| is_leap_year_of_era(y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        assert!(!is_leap_year_of_era(1430));
        assert!(!is_leap_year(1430));
    }

    #[test]
    fn cycle_length() {
        let total: i64 = (1..=30).map(|y| i64::from(year_length(y))).sum();
        assert_eq!(total, CYCLE_DAYS);
        assert_eq!(days_in_years(30), CYCLE_DAYS);
        assert_eq!(cycle_year_start(30), CYCLE_DAYS);
    }

    #[test]
    fn days_in_years_matches_sum() {
        let mut sum = 0;
        for years in 0..=95 {
            assert_eq!(days_in_years(years), sum, "years {years}");
            sum += i64::from(year_length(years + 1));
        }
    }

    #[test]
    fn month_lengths() {
        let common: Vec<u8> = (1..=12).map(|m| month_length(1430, m)).collect();
        assert_eq!(common, vec![30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        assert_eq!(month_length(2, 12), 30);
        let total: u16 = (1..=12).map(|m| u16::from(month_length(2, m))).sum();
        assert_eq!(total, 355);
    }

    #[test]
    fn day_of_year_roundtrip() {
        for doy in 1..=355u16 {
            let (m, d) = month_day(doy);
            assert_eq!(day_of_year(m, d), doy, "doy {doy} -> ({m}, {d})");
        }
        assert_eq!(day_of_year(3, 5), 64);
        assert_eq!(month_day(355), (12, 30));
    }

    #[test]
    fn epoch_anchor() {
        assert_eq!(to_epoch_day(1, 1, 1), EPOCH_DAY_OF_AH_1);
        assert_eq!(from_epoch_day(EPOCH_DAY_OF_AH_1), Some((HijrahEra::Hijrah, 1, 1, 1)));
        assert_eq!(
            from_epoch_day(EPOCH_DAY_OF_AH_1 - 1),
            Some((HijrahEra::BeforeHijrah, 1, 12, 29))
        );
    }

    #[test]
    fn reference_date() {
        // 1430-03-05 AH is 2009-03-02.
        assert_eq!(to_epoch_day(1430, 3, 5), 14_305);
        assert_eq!(from_epoch_day(14_305), Some((HijrahEra::Hijrah, 1430, 3, 5)));
    }

    #[test]
    fn before_hijrah_layout() {
        // BeforeHijrah 1 is 354 days, BeforeHijrah 2 is leap.
        assert_eq!(to_epoch_day(0, 1, 1), EPOCH_DAY_OF_AH_1 - 354);
        assert_eq!(to_epoch_day(-1, 12, 30), EPOCH_DAY_OF_AH_1 - 355);
        assert_eq!(to_epoch_day(-1, 1, 1), EPOCH_DAY_OF_AH_1 - 354 - 355);
        assert_eq!(
            from_epoch_day(EPOCH_DAY_OF_AH_1 - 355),
            Some((HijrahEra::BeforeHijrah, 2, 12, 30))
        );
    }

    #[test]
    fn roundtrip_every_day_of_two_cycles_each_side() {
        let start = to_epoch_day(-59, 1, 1);
        let end = to_epoch_day(60, 12, 29);
        let mut previous = None;
        for day in start..=end {
            let (era, year, month, dayofmonth) = from_epoch_day(day).unwrap();
            let proleptic = era.proleptic_year(year);
            assert_eq!(to_epoch_day(proleptic, month, dayofmonth), day, "epoch day {day}");
            if let Some(prev) = previous {
                assert!(prev < (proleptic, month, dayofmonth), "not monotonic at {day}");
            }
            previous = Some((proleptic, month, dayofmonth));
        }
    }

    #[test]
    fn range_limit() {
        let last = to_epoch_day(9_999, 12, 29);
        assert!(from_epoch_day(last).is_some());
        assert_eq!(from_epoch_day(last + 1), None);
        let first = to_epoch_day(1 - 9_999, 1, 1);
        assert!(from_epoch_day(first).is_some());
        assert_eq!(from_epoch_day(first - 1), None);
        assert_eq!(from_epoch_day(i64::MIN), None);
        assert_eq!(from_epoch_day(i64::MAX), None);
    }
}
