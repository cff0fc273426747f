//! # Liturgy Domain Models
//!
//! ## Core Types
//! * [`date::CalendarDate`]: a plain calendar day, the only input the calendar needs.
//! * [`tradition::Tradition`]: the liturgical family selected by the caller.
//! * [`celebration::Celebration`]: which day's proper the caller asked for.
//! * [`season::SeasonClassification`]: everything derived about a single day.
//!
//! ## Design Principles
//! * **Day precision**: dates carry no time of day, so two values for the same
//!   calendar day always compare equal.
//! * **Closed vocabularies**: seasons, cycles, colors and traditions are enums;
//!   string forms exist only at the edges (parsing, labels).

pub mod celebration;
pub mod date;
pub mod season;
pub mod tradition;
