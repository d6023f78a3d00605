//! Era identity across every chronology.

use std::fmt;

use crate::chronology::Chronology;
use crate::hijrah::HijrahEra;
use crate::iso::IsoEra;
use crate::japanese::JapaneseEra;

/// An era of one of the supported chronologies.
///
/// Each variant wraps the era type of its chronology, so an `Era` always
/// knows which chronology it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Iso(IsoEra),
    Hijrah(HijrahEra),
    Japanese(JapaneseEra),
}

impl Era {
    /// Returns the chronology the era belongs to.
    pub fn chronology(self) -> Chronology {
        match self {
            Self::Iso(_) => Chronology::Iso,
            Self::Hijrah(_) => Chronology::Hijrah,
            Self::Japanese(_) => Chronology::Japanese,
        }
    }

    /// Returns the era code used for ordering and as the `Era` field value.
    pub fn code(self) -> u8 {
        match self {
            Self::Iso(era) => era.code(),
            Self::Hijrah(era) => era.code(),
            Self::Japanese(era) => era.code(),
        }
    }

    /// Returns the era name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Iso(era) => era.name(),
            Self::Hijrah(era) => era.name(),
            Self::Japanese(era) => era.name(),
        }
    }

    /// Converts a year-of-era in this era to the chronology's proleptic year.
    pub fn proleptic_year(self, year_of_era: i32) -> i64 {
        match self {
            Self::Iso(era) => era.proleptic_year(year_of_era),
            Self::Hijrah(era) => era.proleptic_year(year_of_era),
            Self::Japanese(era) => era.proleptic_year(year_of_era),
        }
    }

    /// Returns the year-of-era of a proleptic year in this era, which may be
    /// outside the era's valid range.
    pub(crate) fn year_of_era_wide(self, proleptic_year: i128) -> i128 {
        let first = i128::from(self.proleptic_year(1));
        if self.proleptic_year(2) > self.proleptic_year(1) {
            proleptic_year - first + 1
        } else {
            first - proleptic_year + 1
        }
    }

    /// Looks up an era of `chronology` by name, ignoring ASCII case.
    pub fn from_name(chronology: Chronology, name: &str) -> Option<Self> {
        chronology
            .eras()
            .into_iter()
            .find(|era| era.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl From<IsoEra> for Era {
    fn from(era: IsoEra) -> Self {
        Self::Iso(era)
    }
}

impl From<HijrahEra> for Era {
    fn from(era: HijrahEra) -> Self {
        Self::Hijrah(era)
    }
}

impl From<JapaneseEra> for Era {
    fn from(era: JapaneseEra) -> Self {
        Self::Japanese(era)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
