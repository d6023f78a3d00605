//! # almanac-calendar
//!
//! Multi-calendar date engine: ISO, tabular Hijrah, and Japanese imperial-era
//! dates converted through a single canonical day axis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(era, year, month, day)"] -->|"Chronology::to_epoch_day()"| B["EpochDay"]
//!     B -->|"Chronology::from_epoch_day()"| A
//!     A -->|"CalendarDate::of()"| C["CalendarDate"]
//!     C -->|".get(FieldRule)"| D["i64"]
//!     C -->|".plus_years() / .plus_months()"| C
//!     C -->|".plus_days() via EpochDay"| C
//!     C -->|".to_iso()"| E["IsoDate"]
//!     E -->|"CalendarDate::from_iso()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CalendarDate, ChronoDate, Chronology, IsoDate, JapaneseEra};
//!
//! let hijrah = CalendarDate::hijrah(1430, 3, 5).unwrap();
//! assert_eq!(hijrah.to_iso(), IsoDate::new(2009, 3, 2).unwrap());
//! assert_eq!(hijrah.to_string(), "1430-03-05 (Hijrah)");
//!
//! let heisei = CalendarDate::japanese(JapaneseEra::Heisei, 21, 3, 3).unwrap();
//! assert_eq!(heisei.to_string(), "Heisei 21-03-03 (Japanese)");
//! assert!(hijrah.is_before(&heisei));
//!
//! // A field that does not fit fails on its own rule.
//! let err = CalendarDate::hijrah(1430, 13, 1).unwrap_err();
//! assert_eq!(err.rule(), Some(Chronology::Hijrah.month_of_year()));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `epoch_day` | Canonical day axis |
//! | `weekday` | ISO day of week |
//! | `field` | Fields and chronology-owned field rules |
//! | `iso` | ISO proleptic Gregorian calendar and `IsoDate` |
//! | `week` | ISO week-of-week-based-year |
//! | `hijrah` | Tabular Hijrah calendar |
//! | `japanese` | Japanese era table |
//! | `era` | Era identity across chronologies |
//! | `chronology` | Per-chronology dispatch and conversions |
//! | `date` | `CalendarDate` value type |
//! | `arithmetic` | Year, month, week, and day arithmetic |
//! | `compare` | Cross-chronology instant comparison |
//! | `values` | Field-value container |
//! | `error` | Error types |

mod arithmetic;
mod chronology;
mod compare;
mod date;
mod epoch_day;
mod era;
mod error;
mod field;
pub mod hijrah;
pub mod iso;
pub mod japanese;
mod values;
mod week;
mod weekday;

pub use chronology::Chronology;
pub use compare::ChronoDate;
pub use date::CalendarDate;
pub use epoch_day::EpochDay;
pub use era::Era;
pub use error::CalendarError;
pub use field::{Field, FieldRule};
pub use hijrah::HijrahEra;
pub use iso::{IsoDate, IsoEra};
pub use japanese::JapaneseEra;
pub use values::FieldValues;
pub use week::{weeks_in_week_based_year, WeekOfWeekBasedYear};
pub use weekday::DayOfWeek;
