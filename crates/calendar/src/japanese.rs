//! Japanese imperial-era calendar.
//!
//! Month and day numbering are those of the ISO calendar; only the year is
//! counted differently, from the start of each era. Conversions translate
//! `(era, year_of_era)` to an ISO proleptic year and then apply ISO rules,
//! including the leap rule.

use std::fmt;

/// Largest year-of-era in any Japanese era.
pub const MAX_YEAR_OF_ERA: i32 = 9_999;

/// Japanese era, ordered by start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum JapaneseEra {
    /// Synthetic era for years before 1 CE; year-of-era 1 is proleptic year 0.
    BeforeSeireki,
    /// Western-calendar years from 1 CE until the first tabulated era.
    Seireki,
    Keio,
    Meiji,
    Taisho,
    Showa,
    Heisei,
    #[default]
    Reiwa,
}

impl JapaneseEra {
    /// Every Japanese era, earliest first.
    pub const ALL: [JapaneseEra; 8] = [
        JapaneseEra::BeforeSeireki,
        JapaneseEra::Seireki,
        JapaneseEra::Keio,
        JapaneseEra::Meiji,
        JapaneseEra::Taisho,
        JapaneseEra::Showa,
        JapaneseEra::Heisei,
        JapaneseEra::Reiwa,
    ];

    /// Returns the era code (0..=7).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the era with the given code.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the era name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BeforeSeireki => "BeforeSeireki",
            Self::Seireki => "Seireki",
            Self::Keio => "Keio",
            Self::Meiji => "Meiji",
            Self::Taisho => "Taisho",
            Self::Showa => "Showa",
            Self::Heisei => "Heisei",
            Self::Reiwa => "Reiwa",
        }
    }

    /// Returns the table entry describing where this era starts.
    pub fn start(self) -> EraStart {
        ERA_TABLE[ERA_TABLE.len() - 1 - usize::from(self.code())]
    }

    /// Converts a year-of-era in this era to an ISO proleptic year.
    pub fn proleptic_year(self, year_of_era: i32) -> i64 {
        match self {
            Self::BeforeSeireki => 1 - i64::from(year_of_era),
            era => i64::from(year_of_era) + i64::from(era.start().year) - 1,
        }
    }

    /// Converts an ISO proleptic year to a year-of-era in this era.
    pub fn year_of_era(self, proleptic_year: i64) -> i64 {
        match self {
            Self::BeforeSeireki => 1 - proleptic_year,
            era => proleptic_year - (i64::from(era.start().year) - 1),
        }
    }
}

impl fmt::Display for JapaneseEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First ISO date of an era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraStart {
    pub era: JapaneseEra,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Era start dates, most recent first.
pub static ERA_TABLE: [EraStart; 8] = [
    EraStart { era: JapaneseEra::Reiwa, year: 2019, month: 5, day: 1 },
    EraStart { era: JapaneseEra::Heisei, year: 1989, month: 1, day: 8 },
    EraStart { era: JapaneseEra::Showa, year: 1926, month: 12, day: 25 },
    EraStart { era: JapaneseEra::Taisho, year: 1912, month: 7, day: 30 },
    EraStart { era: JapaneseEra::Meiji, year: 1868, month: 9, day: 8 },
    EraStart { era: JapaneseEra::Keio, year: 1865, month: 4, day: 7 },
    EraStart { era: JapaneseEra::Seireki, year: 1, month: 1, day: 1 },
    EraStart { era: JapaneseEra::BeforeSeireki, year: 0, month: 1, day: 1 },
];

/// Returns the era in force on an ISO date.
///
/// Scans from the most recent era and picks the first one that has
/// started by the given date; dates before every entry fall in
/// [`JapaneseEra::BeforeSeireki`].
pub fn era_for_date(year: i64, month: u8, day: u8) -> JapaneseEra {
    let era = ERA_TABLE
        .iter()
        .find(|start| (i64::from(start.year), start.month, start.day) <= (year, month, day))
        .map_or(JapaneseEra::BeforeSeireki, |start| start.era);
    tracing::trace!(year, month, day, era = era.name(), "resolved japanese era");
    era
}
