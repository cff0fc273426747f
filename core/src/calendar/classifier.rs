//! # Calendar Classifier
//!
//! Derives season, cycles, color, rank and title for a single day.
//!
//! Rules are tried in a fixed priority order and the first match wins, so a
//! fixed-date solemnity beats the movable season window it happens to fall in:
//!
//! 1. Fixed-date solemnities (Dec 25, Jan 1, Jan 6, Nov 1, Nov 2).
//! 2. Advent: `[advent_start, Dec 25)`.
//! 3. Christmastide: Dec 26-31 and January up to the Baptism of the Lord.
//! 4. Ash Wednesday, Lent and Holy Week (`easter - 7 ..= easter - 1`).
//! 5. Eastertide: `easter ..= easter + 49` (Pentecost closes it).
//! 6. Trinity Sunday, Corpus Christi and Christ the King.
//! 7. Ordinary Time, the residual.
//!
//! Week numbering in Ordinary Time runs forward from the Baptism of the Lord
//! before Lent, and backward from Christ the King (week 34) after Pentecost.

use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::season::{
    FerialCycle, LiturgicalColor, OrdinaryWeek, Rank, Season, SeasonClassification, SundayCycle,
};

use super::year::LiturgicalYear;

const CHRIST_THE_KING_WEEK: i64 = 34;

/// Classifies `date` against the liturgical calendar of its own year.
pub fn classify(date: CalendarDate) -> SeasonClassification {
    classify_with(date, &LiturgicalYear::containing(date))
}

/// Classifies `date` with precomputed anchor days.
///
/// `year` is expected to be the [`LiturgicalYear`] of `date`'s calendar year;
/// any other year is ignored and the right one recomputed.
pub fn classify_with(date: CalendarDate, year: &LiturgicalYear) -> SeasonClassification {
    let year = if year.year == date.year() {
        *year
    } else {
        LiturgicalYear::containing(date)
    };

    let day = fixed_solemnity(date)
        .or_else(|| advent(date, &year))
        .or_else(|| christmastide(date, &year))
        .or_else(|| lent(date, &year))
        .or_else(|| eastertide(date, &year))
        .or_else(|| post_pentecost_solemnity(date, &year))
        .unwrap_or_else(|| ordinary_time(date, &year));

    let liturgical_year = year.liturgical_year_of(date);
    let color = if date == year.gaudete() || date == year.laetare() {
        LiturgicalColor::Rose
    } else {
        day.color.unwrap_or_else(|| day.season.color())
    };

    SeasonClassification {
        date,
        season: day.season,
        cycle_sunday: SundayCycle::from_liturgical_year(liturgical_year),
        cycle_ferial: FerialCycle::from_liturgical_year(liturgical_year),
        color,
        feast_label: day.label,
        rank: day.rank,
        ordinary_week: ordinary_week(date, &year),
    }
}

struct Day {
    season: Season,
    label: String,
    rank: Rank,
    color: Option<LiturgicalColor>,
}

impl Day {
    fn new(season: Season, label: impl Into<String>, rank: Rank) -> Self {
        Self {
            season,
            label: label.into(),
            rank,
            color: None,
        }
    }

    fn with_color(mut self, color: LiturgicalColor) -> Self {
        self.color = Some(color);
        self
    }
}

fn fixed_solemnity(date: CalendarDate) -> Option<Day> {
    let day = match (date.month(), date.day()) {
        (12, 25) => Day::new(Season::Christmas, "Natividad del Señor", Rank::Solemnity),
        (1, 1) => Day::new(Season::Christmas, "Santa María, Madre de Dios", Rank::Solemnity),
        (1, 6) => Day::new(Season::Christmas, "Epifanía del Señor", Rank::Solemnity),
        (11, 1) => Day::new(Season::OrdinaryTime, "Todos los Santos", Rank::Solemnity)
            .with_color(LiturgicalColor::White),
        (11, 2) => Day::new(Season::OrdinaryTime, "Fieles Difuntos", Rank::Weekday)
            .with_color(LiturgicalColor::Purple),
        _ => return None,
    };
    Some(day)
}

fn advent(date: CalendarDate, year: &LiturgicalYear) -> Option<Day> {
    if date < year.advent_start || date >= year.christmas {
        return None;
    }
    let week = date.days_since(year.advent_start) / 7 + 1;
    Some(sunday_or_feria(
        date,
        Season::Advent,
        format!("{week}º Domingo de Adviento"),
        format!("Feria de Adviento ({week}ª Semana)"),
    ))
}

fn christmastide(date: CalendarDate, year: &LiturgicalYear) -> Option<Day> {
    if date > year.christmas {
        let holy_family = if year.christmas.is_sunday() {
            date.is_month_day(12, 30)
        } else {
            date.is_sunday()
        };
        if holy_family {
            return Some(Day::new(Season::Christmas, "Sagrada Familia", Rank::Sunday));
        }
        return Some(Day::new(Season::Christmas, "Tiempo de Navidad", Rank::Weekday));
    }

    if date > year.baptism_of_the_lord || date.month() != 1 {
        return None;
    }
    if date == year.baptism_of_the_lord {
        return Some(Day::new(Season::Christmas, "Bautismo del Señor", Rank::Sunday));
    }
    Some(sunday_or_feria(
        date,
        Season::Christmas,
        "2º Domingo después de Navidad".to_string(),
        "Tiempo de Navidad".to_string(),
    ))
}

fn lent(date: CalendarDate, year: &LiturgicalYear) -> Option<Day> {
    if date == year.ash_wednesday {
        return Some(Day::new(Season::Lent, "Miércoles de Ceniza", Rank::Weekday));
    }
    if date <= year.ash_wednesday || date >= year.easter {
        return None;
    }

    let diff_from_easter = date.days_since(year.easter);
    if diff_from_easter >= -7 {
        return Some(holy_week(diff_from_easter));
    }

    let first_sunday = year.ash_wednesday.offset(4);
    if date < first_sunday {
        return Some(Day::new(Season::Lent, "Feria después de Ceniza", Rank::Weekday));
    }
    let week = date.sunday_on_or_before().days_since(first_sunday) / 7 + 1;
    Some(sunday_or_feria(
        date,
        Season::Lent,
        format!("{week}º Domingo de Cuaresma"),
        format!("Feria de Cuaresma ({week}ª Semana)"),
    ))
}

fn holy_week(diff_from_easter: i64) -> Day {
    match diff_from_easter {
        -7 => Day::new(Season::HolyWeek, "Domingo de Ramos", Rank::Sunday),
        -6 => Day::new(Season::HolyWeek, "Lunes Santo", Rank::Weekday),
        -5 => Day::new(Season::HolyWeek, "Martes Santo", Rank::Weekday),
        -4 => Day::new(Season::HolyWeek, "Miércoles Santo", Rank::Weekday),
        -3 => Day::new(Season::HolyWeek, "Jueves Santo", Rank::Solemnity)
            .with_color(LiturgicalColor::White),
        -2 => Day::new(Season::HolyWeek, "Viernes Santo", Rank::Weekday),
        -1 => Day::new(Season::HolyWeek, "Sábado Santo / Vigilia Pascual", Rank::Weekday),
        _ => Day::new(Season::HolyWeek, "Semana Santa", Rank::Weekday),
    }
}

fn eastertide(date: CalendarDate, year: &LiturgicalYear) -> Option<Day> {
    let diff = date.days_since(year.easter);
    if !(0..=49).contains(&diff) {
        return None;
    }
    let day = match diff {
        0 => Day::new(Season::Easter, "Domingo de Resurrección", Rank::Solemnity),
        49 => Day::new(Season::Pentecost, "Domingo de Pentecostés", Rank::Solemnity),
        _ if date == year.ascension => {
            Day::new(Season::Easter, "Ascensión del Señor", Rank::Solemnity)
        }
        1..=6 => Day::new(Season::Easter, "Octava de Pascua", Rank::Weekday),
        _ => {
            let week = diff / 7 + 1;
            sunday_or_feria(
                date,
                Season::Easter,
                format!("{week}º Domingo de Pascua"),
                format!("Feria de Pascua ({week}ª Semana)"),
            )
        }
    };
    Some(day)
}

fn post_pentecost_solemnity(date: CalendarDate, year: &LiturgicalYear) -> Option<Day> {
    let label = if date == year.trinity_sunday {
        "Santísima Trinidad"
    } else if date == year.corpus_christi {
        "Corpus Christi (Solemne)"
    } else if date == year.christ_the_king {
        "Jesucristo, Rey del Universo"
    } else {
        return None;
    };
    Some(Day::new(Season::OrdinaryTime, label, Rank::Solemnity).with_color(LiturgicalColor::White))
}

fn ordinary_time(date: CalendarDate, year: &LiturgicalYear) -> Day {
    match ordinary_week(date, year) {
        Some(OrdinaryWeek { week, .. }) => sunday_or_feria(
            date,
            Season::OrdinaryTime,
            format!("{week}º Domingo del Tiempo Ordinario"),
            format!("Feria del Tiempo Ordinario ({week}ª Semana)"),
        ),
        None => Day::new(Season::OrdinaryTime, "Feria del Tiempo Ordinario", Rank::Weekday),
    }
}

/// Week of Ordinary Time for dates inside either of its two spans.
fn ordinary_week(date: CalendarDate, year: &LiturgicalYear) -> Option<OrdinaryWeek> {
    if date > year.baptism_of_the_lord && date < year.ash_wednesday {
        let week = date.days_since(year.baptism_of_the_lord) / 7 + 1;
        return Some(OrdinaryWeek {
            week: week as u8,
            after_pentecost: false,
        });
    }
    if date > year.pentecost && date < year.advent_start {
        let weeks_before_king = year.christ_the_king.days_since(date.sunday_on_or_before()) / 7;
        return Some(OrdinaryWeek {
            week: (CHRIST_THE_KING_WEEK - weeks_before_king) as u8,
            after_pentecost: true,
        });
    }
    None
}

fn sunday_or_feria(date: CalendarDate, season: Season, sunday: String, feria: String) -> Day {
    if date.is_sunday() {
        Day::new(season, sunday, Rank::Sunday)
    } else {
        Day::new(season, feria, Rank::Weekday)
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
