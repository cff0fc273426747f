//! # Date Math
//!
//! Easter (Meeus/Jones/Butcher anonymous Gregorian algorithm), the start of
//! Advent, and the movable days derived from them by fixed offsets.

use sacristan_common::error::LiturgyError;
use sacristan_common::liturgy::date::CalendarDate;

const ASH_WEDNESDAY_OFFSET: i64 = -46;
const PALM_SUNDAY_OFFSET: i64 = -7;
const ASCENSION_OFFSET: i64 = 39;
const PENTECOST_OFFSET: i64 = 49;

/// Month and day of Easter Sunday in the Gregorian calendar.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

pub fn compute_easter(year: i32) -> Result<CalendarDate, LiturgyError> {
    let (month, day) = easter_month_day(year);
    CalendarDate::from_ymd(year, month, day)
}

/// First Sunday of Advent: the fourth Sunday before Christmas.
pub fn compute_advent_start(year: i32) -> Result<CalendarDate, LiturgyError> {
    CalendarDate::from_ymd(year, 12, 25).map(advent_before)
}

fn advent_before(christmas: CalendarDate) -> CalendarDate {
    let dow = i64::from(christmas.weekday().num_days_from_sunday());
    let days_back = if dow == 0 { 28 } else { dow + 21 };
    christmas.offset(-days_back)
}

/// Day `month`/`day` of the year that starts at `new_year`.
///
/// Only called with days every Gregorian year has (Easter, Dec 25, Jan 7),
/// which stay inside the supported year range of `new_year`.
fn month_day(new_year: CalendarDate, month: u32, day: u32) -> CalendarDate {
    new_year.with_month_day(month, day).unwrap_or(new_year)
}

/// Anchor days of the liturgical calendar for one calendar year.
///
/// Every field is derived from `easter`, `advent_start` or a fixed date, so the
/// offsets between them never drift (Pentecost is always Easter + 49, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiturgicalYear {
    pub year: i32,
    pub easter: CalendarDate,
    pub ash_wednesday: CalendarDate,
    pub palm_sunday: CalendarDate,
    pub ascension: CalendarDate,
    pub pentecost: CalendarDate,
    pub trinity_sunday: CalendarDate,
    pub corpus_christi: CalendarDate,
    pub christ_the_king: CalendarDate,
    pub advent_start: CalendarDate,
    pub christmas: CalendarDate,
    /// First Sunday on or after January 7; closes the Christmas season that
    /// began the previous December.
    pub baptism_of_the_lord: CalendarDate,
}

impl LiturgicalYear {
    pub fn compute(year: i32) -> Result<Self, LiturgyError> {
        CalendarDate::from_ymd(year, 1, 1).map(Self::from_new_year)
    }

    /// Anchor days of the calendar year `date` belongs to.
    pub fn containing(date: CalendarDate) -> Self {
        Self::from_new_year(date.start_of_year())
    }

    fn from_new_year(new_year: CalendarDate) -> Self {
        let year = new_year.year();
        let (easter_month, easter_day) = easter_month_day(year);
        let easter = month_day(new_year, easter_month, easter_day);
        let christmas = month_day(new_year, 12, 25);
        let advent_start = advent_before(christmas);
        let pentecost = easter.offset(PENTECOST_OFFSET);
        let trinity_sunday = pentecost.offset(7);

        Self {
            year,
            easter,
            ash_wednesday: easter.offset(ASH_WEDNESDAY_OFFSET),
            palm_sunday: easter.offset(PALM_SUNDAY_OFFSET),
            ascension: easter.offset(ASCENSION_OFFSET),
            pentecost,
            trinity_sunday,
            corpus_christi: trinity_sunday.offset(7),
            christ_the_king: advent_start.offset(-7),
            advent_start,
            christmas,
            baptism_of_the_lord: month_day(new_year, 1, 7).sunday_on_or_after(),
        }
    }

    /// Third Sunday of Advent.
    pub fn gaudete(&self) -> CalendarDate {
        self.advent_start.offset(14)
    }

    /// Fourth Sunday of Lent.
    pub fn laetare(&self) -> CalendarDate {
        self.easter.offset(-21)
    }

    /// Calendar year in which the liturgical year containing `date` ends.
    ///
    /// The liturgical year rolls over on the first Sunday of Advent.
    pub fn liturgical_year_of(&self, date: CalendarDate) -> i32 {
        if date >= self.advent_start {
            self.year + 1
        } else {
            self.year
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_dates() {
        assert_eq!(compute_easter(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(compute_easter(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(compute_easter(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(compute_easter(2026).unwrap(), date(2026, 4, 5));
        assert_eq!(compute_easter(2027).unwrap(), date(2027, 3, 28));
        assert_eq!(compute_easter(1583).unwrap(), date(1583, 4, 10));
    }

    #[test]
    fn easter_extremes() {
        assert_eq!(compute_easter(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(compute_easter(2285).unwrap(), date(2285, 3, 22));
        assert_eq!(compute_easter(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(compute_easter(2038).unwrap(), date(2038, 4, 25));
    }

    #[test]
    fn easter_always_between_march_22_and_april_25() {
        for year in 1900..=2100 {
            let easter = compute_easter(year).unwrap();
            assert!(easter.is_sunday(), "Easter {year} is not a Sunday");
            assert!(
                easter >= date(year, 3, 22) && easter <= date(year, 4, 25),
                "Easter {year} out of range: {easter}"
            );
        }
    }

    #[test]
    fn advent_start_known_dates() {
        assert_eq!(compute_advent_start(2025).unwrap(), date(2025, 11, 30));
        assert_eq!(compute_advent_start(2026).unwrap(), date(2026, 11, 29));
        // Christmas 2022 fell on a Sunday
        assert_eq!(compute_advent_start(2022).unwrap(), date(2022, 11, 27));
        // Christmas 2023 fell on a Monday
        assert_eq!(compute_advent_start(2023).unwrap(), date(2023, 12, 3));
    }

    #[test]
    fn advent_start_is_a_sunday_22_to_28_days_before_christmas() {
        for year in 1900..=2100 {
            let advent = compute_advent_start(year).unwrap();
            let gap = date(year, 12, 25).days_since(advent);
            assert!(advent.is_sunday(), "Advent {year} is not a Sunday");
            assert!((22..=28).contains(&gap), "Advent {year} gap {gap}");
        }
    }

    #[test]
    fn liturgical_year_offsets_are_consistent() {
        for year in 1900..=2100 {
            let ly = LiturgicalYear::compute(year).unwrap();
            assert_eq!(ly.easter, compute_easter(year).unwrap());
            assert_eq!(ly.advent_start, compute_advent_start(year).unwrap());
            assert_eq!(ly.pentecost.days_since(ly.easter), 49);
            assert_eq!(ly.easter.days_since(ly.ash_wednesday), 46);
            assert_eq!(ly.trinity_sunday.days_since(ly.pentecost), 7);
            assert_eq!(ly.corpus_christi.days_since(ly.trinity_sunday), 7);
            assert_eq!(ly.advent_start.days_since(ly.christ_the_king), 7);
            assert!(ly.christ_the_king.is_sunday());
            assert!(ly.baptism_of_the_lord.is_sunday());
            assert!((7..=13).contains(&ly.baptism_of_the_lord.day()));
        }
    }

    #[test]
    fn containing_matches_compute() {
        let by_year = LiturgicalYear::compute(2024).unwrap();
        let by_date = LiturgicalYear::containing(date(2024, 8, 15));
        assert_eq!(by_year, by_date);
        assert_eq!(by_year.christmas, date(2024, 12, 25));
    }

    #[test]
    fn fixed_anchors_land_on_their_calendar_day_in_any_year() {
        for year in [1600, 1900, 2000, 2024, 2100, 2400] {
            let ly = LiturgicalYear::compute(year).unwrap();
            let (month, day) = easter_month_day(year);
            assert_eq!(ly.easter, date(year, month, day), "{year}");
            assert_eq!(ly.christmas, date(year, 12, 25), "{year}");
            assert_eq!(ly.baptism_of_the_lord, date(year, 1, 7).sunday_on_or_after(), "{year}");
        }
    }

    #[test]
    fn rose_sundays() {
        let ly = LiturgicalYear::compute(2026).unwrap();
        assert_eq!(ly.gaudete(), date(2026, 12, 13));
        assert_eq!(ly.laetare(), date(2026, 3, 15));
    }

    #[test]
    fn liturgical_year_rolls_over_at_advent() {
        let ly = LiturgicalYear::compute(2025).unwrap();
        assert_eq!(ly.liturgical_year_of(date(2025, 11, 29)), 2025);
        assert_eq!(ly.liturgical_year_of(date(2025, 11, 30)), 2026);
    }

    #[test]
    fn rejects_pre_gregorian_years() {
        assert!(compute_easter(1500).is_err());
        assert!(LiturgicalYear::compute(1582).is_err());
    }
}
