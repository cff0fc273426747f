use std::fmt;
use std::str::FromStr;

use crate::liturgy::date::CalendarDate;

/// Which day the caller wants a liturgy for, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Celebration {
    /// The proper of the given day itself.
    #[default]
    Today,
    /// The proper of the coming Sunday. On a Sunday, the following one.
    NextSunday,
}

impl Celebration {
    pub fn resolve(&self, today: CalendarDate) -> CalendarDate {
        match self {
            Celebration::Today => today,
            Celebration::NextSunday if today.is_sunday() => today.offset(7),
            Celebration::NextSunday => today.sunday_on_or_after(),
        }
    }

    /// Stable identifier kept in the settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Celebration::Today => "HOY_CALENDARIO",
            Celebration::NextSunday => "PROXIMO_DOMINGO",
        }
    }
}

impl FromStr for Celebration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "today" | "hoy" | "hoy_calendario" => Ok(Celebration::Today),
            "next_sunday" | "proximo_domingo" | "próximo_domingo" => Ok(Celebration::NextSunday),
            other => Err(format!("unknown celebration '{other}' (expected today or next-sunday)")),
        }
    }
}

impl fmt::Display for Celebration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
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
