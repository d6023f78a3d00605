//! # almanac
//!
//! Configured access to the `almanac-calendar` engine: ISO, Hijrah, and
//! Japanese dates behind a TOML-selected chronology.
//!
//! ```
//! use almanac::{Almanac, AlmanacConfig};
//!
//! let config = AlmanacConfig::from_toml_str("chronology = \"hijrah\"").unwrap();
//! let almanac = Almanac::new(&config).unwrap();
//! let date = almanac.date(1430, 3, 5).unwrap();
//! assert_eq!(date.to_string(), "1430-03-05 (Hijrah)");
//! assert_eq!(date.to_iso().to_string(), "2009-03-02");
//! ```

pub mod config;
pub mod logging;

pub use almanac_calendar::*;
pub use config::{Almanac, AlmanacConfig, ChronologyName, ConfigError};
