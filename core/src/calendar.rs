//! The central **calendar** of the liturgical year.
//!
//! [`year`] holds the date math (Easter, Advent and everything offset from them),
//! [`classifier`] turns a single day into a
//! [`SeasonClassification`](sacristan_common::liturgy::season::SeasonClassification).
//!
//! Both are pure functions of their input and total over the supported
//! Gregorian range: no call in this module can fail.

pub mod classifier;
pub mod year;

pub use classifier::{classify, classify_with};
pub use year::{LiturgicalYear, compute_advent_start, compute_easter};
