#![cfg(test)]
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::season::{Season, SundayCycle};
use sacristan_core::calendar::{self, LiturgicalYear, compute_advent_start, compute_easter};

const EXPECTED_SEQUENCE: [Season; 8] = [
    Season::Advent,
    Season::Christmas,
    Season::OrdinaryTime,
    Season::Lent,
    Season::HolyWeek,
    Season::Easter,
    Season::Pentecost,
    Season::OrdinaryTime,
];

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

/// Seasons met walking every day of the liturgical year ending in `year`,
/// with consecutive repeats collapsed.
fn season_runs(year: i32) -> Vec<Season> {
    let start = compute_advent_start(year - 1).unwrap();
    let end = compute_advent_start(year).unwrap();

    let mut runs: Vec<Season> = Vec::new();
    let mut day = start;
    while day < end {
        let season = calendar::classify(day).season;
        if runs.last() != Some(&season) {
            runs.push(season);
        }
        day = day.offset(1);
    }
    runs
}

#[test]
fn every_liturgical_year_walks_the_seasons_in_order() {
    for year in 1900..=2100 {
        assert_eq!(season_runs(year), EXPECTED_SEQUENCE, "liturgical year ending in {year}");
    }
}

#[test]
fn easter_stays_inside_its_window() {
    for year in 1900..=2100 {
        let easter = compute_easter(year).unwrap();
        assert!(easter >= date(year, 3, 22), "{year}: {easter}");
        assert!(easter <= date(year, 4, 25), "{year}: {easter}");
        assert!(easter.is_sunday(), "{year}: {easter}");
    }
}

#[test]
fn sunday_cycle_rolls_over_at_advent() {
    assert_eq!(calendar::classify(date(2025, 11, 29)).cycle_sunday, SundayCycle::C);
    assert_eq!(calendar::classify(date(2025, 11, 30)).cycle_sunday, SundayCycle::A);
    assert_eq!(calendar::classify(date(2025, 12, 25)).cycle_sunday, SundayCycle::A);
    assert_eq!(calendar::classify(date(2026, 1, 1)).cycle_sunday, SundayCycle::A);
}

#[test]
fn classification_agrees_with_precomputed_year() {
    let anchors = LiturgicalYear::compute(2027).unwrap();
    let mut day = date(2027, 1, 1);
    while day.year() == 2027 {
        assert_eq!(
            calendar::classify_with(day, &anchors),
            calendar::classify(day),
            "{day}"
        );
        day = day.offset(1);
    }
}

#[test]
fn pentecost_is_a_single_day() {
    for year in [2024, 2025, 2026, 2038] {
        let anchors = LiturgicalYear::compute(year).unwrap();
        assert_eq!(calendar::classify(anchors.pentecost).season, Season::Pentecost);
        assert_eq!(calendar::classify(anchors.pentecost.offset(-1)).season, Season::Easter);
        assert_eq!(calendar::classify(anchors.pentecost.offset(1)).season, Season::OrdinaryTime);
    }
}
