//! # Calendar Date Model
//!
//! A Gregorian calendar day with no time component.
//!
//! Values are built either from explicit year/month/day parts, from an ISO
//! `YYYY-MM-DD` string, or from any wall-clock timestamp. In the last case only
//! the local calendar day is kept, which makes day comparisons immune to the
//! time of day the value was captured at.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::error::LiturgyError;

/// First year of the Gregorian calendar.
pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

const WEEKDAY_NAMES: [&str; 7] = [
    "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
];
const MONTH_NAMES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, LiturgyError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            LiturgyError::InvalidDate(format!("{year:04}-{month:02}-{day:02} does not exist"))
        })?;
        Self::from_naive(date)
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self, LiturgyError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(LiturgyError::InvalidDate(format!(
                "{date}: year outside the supported Gregorian range {MIN_YEAR}-{MAX_YEAR}"
            )));
        }
        Ok(Self(date))
    }

    /// Keeps the calendar day of `datetime` as seen in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, LiturgyError> {
        Self::from_naive(datetime.date_naive())
    }

    pub fn from_naive_datetime(datetime: NaiveDateTime) -> Result<Self, LiturgyError> {
        Self::from_naive(datetime.date())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    pub fn is_month_day(&self, month: u32, day: u32) -> bool {
        self.month() == month && self.day() == day
    }

    /// The given month and day within the same year.
    pub fn with_month_day(&self, month: u32, day: u32) -> Result<CalendarDate, LiturgyError> {
        CalendarDate::from_ymd(self.year(), month, day)
    }

    /// Long Spanish form, e.g. `domingo, 18 de enero de 2026`.
    pub fn long_label(&self) -> String {
        let weekday = WEEKDAY_NAMES[self.weekday().num_days_from_sunday() as usize];
        let month = MONTH_NAMES[self.0.month0() as usize];
        format!("{weekday}, {} de {month} de {}", self.day(), self.year())
    }

    /// January 1st of the same year.
    pub fn start_of_year(&self) -> CalendarDate {
        self.offset(-i64::from(self.0.ordinal0()))
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: CalendarDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Shifts the date by a signed number of days.
    ///
    /// Offsets used by the calendar stay within a few hundred days, far inside
    /// chrono's representable range for the supported years.
    pub fn offset(&self, days: i64) -> CalendarDate {
        CalendarDate(self.0 + Duration::days(days))
    }

    pub fn sunday_on_or_before(&self) -> CalendarDate {
        self.offset(-i64::from(self.weekday().num_days_from_sunday()))
    }

    pub fn sunday_on_or_after(&self) -> CalendarDate {
        let dow = i64::from(self.weekday().num_days_from_sunday());
        self.offset((7 - dow) % 7)
    }
}

impl FromStr for CalendarDate {
    type Err = LiturgyError;

    /// Parses an ISO date (`2026-01-18`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| LiturgyError::InvalidDate(format!("'{s}': {e}")))?;
        Self::from_naive(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
