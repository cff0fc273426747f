//! # Season Classification Model
//!
//! The result of classifying one calendar day: season, lectionary cycles,
//! vestment color, rank and the human-readable title of the day.

use std::fmt;

use crate::liturgy::date::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Advent,
    Christmas,
    Lent,
    HolyWeek,
    Easter,
    /// Pentecost Sunday itself, the boundary day closing Eastertide.
    Pentecost,
    OrdinaryTime,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Advent => "Adviento",
            Season::Christmas => "Navidad",
            Season::Lent => "Cuaresma",
            Season::HolyWeek => "Semana Santa",
            Season::Easter => "Pascua",
            Season::Pentecost => "Pentecostés",
            Season::OrdinaryTime => "Tiempo Ordinario",
        }
    }

    /// Default vestment color of the season.
    pub fn color(&self) -> LiturgicalColor {
        match self {
            Season::Advent | Season::Lent => LiturgicalColor::Purple,
            Season::Christmas | Season::Easter => LiturgicalColor::White,
            Season::HolyWeek | Season::Pentecost => LiturgicalColor::Red,
            Season::OrdinaryTime => LiturgicalColor::Green,
        }
    }

    /// Penitential seasons drop the Gloria outside of solemnities.
    pub fn is_penitential(&self) -> bool {
        matches!(self, Season::Advent | Season::Lent | Season::HolyWeek)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-year Sunday lectionary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SundayCycle {
    A,
    B,
    C,
}

impl SundayCycle {
    /// `liturgical_year` is the calendar year in which the liturgical year ends,
    /// i.e. already advanced by one when the date falls on or after Advent.
    pub fn from_liturgical_year(liturgical_year: i32) -> Self {
        match liturgical_year.rem_euclid(3) {
            1 => SundayCycle::A,
            2 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    }

    pub fn evangelist(&self) -> &'static str {
        match self {
            SundayCycle::A => "Mateo",
            SundayCycle::B => "Marcos",
            SundayCycle::C => "Lucas",
        }
    }
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        };
        f.write_str(letter)
    }
}

/// Two-year weekday lectionary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FerialCycle {
    I,
    II,
}

impl FerialCycle {
    pub fn from_liturgical_year(liturgical_year: i32) -> Self {
        if liturgical_year.rem_euclid(2) == 1 {
            FerialCycle::I
        } else {
            FerialCycle::II
        }
    }
}

impl fmt::Display for FerialCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FerialCycle::I => f.write_str("I"),
            FerialCycle::II => f.write_str("II"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiturgicalColor {
    Purple,
    White,
    Red,
    Green,
    Rose,
}

impl LiturgicalColor {
    pub fn label(&self) -> &'static str {
        match self {
            LiturgicalColor::Purple => "Morado",
            LiturgicalColor::White => "Blanco",
            LiturgicalColor::Red => "Rojo",
            LiturgicalColor::Green => "Verde",
            LiturgicalColor::Rose => "Rosado",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Weekday,
    Sunday,
    Solemnity,
}

/// Parts of the Mass that are left out on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Omission {
    Gloria,
    Alleluia,
    Creed,
}

impl Omission {
    pub fn directive(&self) -> &'static str {
        match self {
            Omission::Gloria => "OMITIR EL 'GLORIA'",
            Omission::Alleluia => {
                "OMITIR EL 'ALELUYA' (reemplazarlo por la Aclamación antes del Evangelio propia del tiempo)"
            }
            Omission::Creed => "OMITIR EL 'CREDO' (no se dice en días feriales)",
        }
    }
}

/// Position of a day inside Ordinary Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinaryWeek {
    pub week: u8,
    /// True for the span between Pentecost and Advent.
    pub after_pentecost: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonClassification {
    pub date: CalendarDate,
    pub season: Season,
    pub cycle_sunday: SundayCycle,
    pub cycle_ferial: FerialCycle,
    pub color: LiturgicalColor,
    pub feast_label: String,
    pub rank: Rank,
    pub ordinary_week: Option<OrdinaryWeek>,
}

impl SeasonClassification {
    /// Omission rules implied by season and rank.
    ///
    /// * Advent, Lent and Holy Week drop the Gloria unless the day is a solemnity.
    /// * Lent and Holy Week drop the Alleluia.
    /// * Plain weekdays drop the Creed.
    pub fn omissions(&self) -> Vec<Omission> {
        let mut omissions = Vec::new();
        if self.season.is_penitential() && self.rank != Rank::Solemnity {
            omissions.push(Omission::Gloria);
        }
        if matches!(self.season, Season::Lent | Season::HolyWeek) {
            omissions.push(Omission::Alleluia);
        }
        if self.rank == Rank::Weekday {
            omissions.push(Omission::Creed);
        }
        omissions
    }

    pub fn omits(&self, omission: Omission) -> bool {
        self.omissions().contains(&omission)
    }

    /// e.g. `A (Mateo) | Año I (Impar)`
    pub fn cycle_text(&self) -> String {
        let parity = match self.cycle_ferial {
            FerialCycle::I => "Impar",
            FerialCycle::II => "Par",
        };
        format!(
            "{} ({}) | Año {} ({})",
            self.cycle_sunday,
            self.cycle_sunday.evangelist(),
            self.cycle_ferial,
            parity
        )
    }

    /// Revised Common Lectionary "Proper" number for the weeks after Pentecost.
    ///
    /// Proper 29 always coincides with Christ the King (week 34).
    pub fn proper_number(&self) -> Option<u8> {
        match self.ordinary_week {
            Some(OrdinaryWeek { week, after_pentecost: true }) if week > 5 => Some(week - 5),
            _ => None,
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
