use std::path::{Path, PathBuf};

use almanac_calendar::{CalendarDate, CalendarError, ChronoDate, Chronology, Era, IsoDate};
use serde::Deserialize;

/// Top-level Almanac configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Calendar system new dates are expressed in.
    #[serde(default)]
    pub chronology: ChronologyName,

    /// Era used for dates created without one. Defaults to the chronology's
    /// current era.
    #[serde(default)]
    pub era: Option<String>,
}

/// Chronology as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChronologyName {
    #[default]
    Iso,
    Hijrah,
    Japanese,
}

impl From<ChronologyName> for Chronology {
    fn from(name: ChronologyName) -> Self {
        match name {
            ChronologyName::Iso => Chronology::Iso,
            ChronologyName::Hijrah => Chronology::Hijrah,
            ChronologyName::Japanese => Chronology::Japanese,
        }
    }
}

/// Error type for loading a configuration and building an [`Almanac`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config")]
    Parse(#[from] toml::de::Error),

    #[error("unknown era {era:?} for the {chronology} chronology")]
    UnknownEra { era: String, chronology: Chronology },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl AlmanacConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&toml_str)?;
        tracing::info!(path = %path.display(), chronology = ?config.chronology, "loaded config");
        Ok(config)
    }
}

/// A chronology and default era bound from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Almanac {
    chronology: Chronology,
    default_era: Era,
}

impl Almanac {
    /// Resolves the configured chronology and era.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEra`] if the era name does not belong to
    /// the chronology.
    pub fn new(config: &AlmanacConfig) -> Result<Self, ConfigError> {
        let chronology = Chronology::from(config.chronology);
        let default_era = match config.era.as_deref() {
            Some(name) => {
                chronology
                    .era_from_name(name)
                    .ok_or_else(|| ConfigError::UnknownEra {
                        era: name.to_string(),
                        chronology,
                    })?
            }
            None => chronology.default_era(),
        };
        tracing::debug!(%chronology, era = %default_era, "almanac configured");
        Ok(Self {
            chronology,
            default_era,
        })
    }

    /// Returns the configured chronology.
    pub fn chronology(&self) -> Chronology {
        self.chronology
    }

    /// Returns the era used by [`Almanac::date`].
    pub fn default_era(&self) -> Era {
        self.default_era
    }

    /// Creates a date in the configured era.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calendar`] if a field is out of range.
    pub fn date(&self, year_of_era: i32, month: u8, day: u8) -> Result<CalendarDate, ConfigError> {
        self.date_in_era(self.default_era, year_of_era, month, day)
    }

    /// Creates a date in `era`, which must belong to the configured chronology.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calendar`] wrapping
    /// [`CalendarError::UnsupportedField`] for a foreign era, or
    /// [`CalendarError::FieldOutOfRange`] for an invalid field.
    pub fn date_in_era(
        &self,
        era: Era,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<CalendarDate, ConfigError> {
        Ok(CalendarDate::of(
            self.chronology,
            Some(era),
            year_of_era,
            month,
            day,
        )?)
    }

    /// Re-expresses an ISO date in the configured chronology.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calendar`] wrapping
    /// [`CalendarError::RangeOverflow`] if the chronology cannot represent
    /// the date.
    pub fn from_iso(&self, date: IsoDate) -> Result<CalendarDate, ConfigError> {
        Ok(CalendarDate::from_iso(self.chronology, date)?)
    }

    /// Re-expresses any date in the configured chronology.
    ///
    /// # Errors
    ///
    /// Fails as [`Almanac::from_iso`] does.
    pub fn convert<D: ChronoDate + ?Sized>(&self, date: &D) -> Result<CalendarDate, ConfigError> {
        Ok(CalendarDate::from_epoch_day(
            self.chronology,
            date.to_epoch_day(),
        )?)
    }
}
