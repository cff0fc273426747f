use std::fmt;
use std::str::FromStr;

use crate::error::LiturgyError;

/// Liturgical family governing the structure of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tradition {
    /// Roman Missal, ordinary form.
    RomanCatholic,
    /// ACNA Book of Common Prayer 2019.
    Anglican,
    /// Divine Worship: The Missal.
    Ordinariate,
    /// Missale Romanum 1962.
    Tridentine,
}

impl Tradition {
    pub const ALL: [Tradition; 4] = [
        Tradition::RomanCatholic,
        Tradition::Anglican,
        Tradition::Ordinariate,
        Tradition::Tridentine,
    ];

    /// Stable identifier used on the command line and in stored history.
    pub fn id(&self) -> &'static str {
        match self {
            Tradition::RomanCatholic => "roman_catholic",
            Tradition::Anglican => "anglican",
            Tradition::Ordinariate => "ordinariate",
            Tradition::Tridentine => "tridentine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tradition::RomanCatholic => "Católica Romana",
            Tradition::Anglican => "Anglicana",
            Tradition::Ordinariate => "Ordinariato",
            Tradition::Tridentine => "Tridentina",
        }
    }

    /// The 1962 books follow their own propers and do not use the A/B/C cycles.
    pub fn uses_three_year_lectionary(&self) -> bool {
        !matches!(self, Tradition::Tridentine)
    }
}

impl FromStr for Tradition {
    type Err = LiturgyError;

    /// Parses a tradition identifier.
    ///
    /// Accepts the canonical ids plus their Spanish forms (case-insensitive),
    /// with `-` and `_` treated alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "roman_catholic" | "catholic" | "catolica" | "católica" => Ok(Tradition::RomanCatholic),
            "anglican" | "anglicana" => Ok(Tradition::Anglican),
            "ordinariate" | "ordinariato" => Ok(Tradition::Ordinariate),
            "tridentine" | "tridentina" => Ok(Tradition::Tridentine),
            _ => Err(LiturgyError::UnsupportedTradition(s.to_string())),
        }
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
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

    #[test]
    fn test_from_str_full_parsing() {
        assert_eq!(Tradition::from_str("roman_catholic").unwrap(), Tradition::RomanCatholic);
        assert_eq!(Tradition::from_str("Roman-Catholic").unwrap(), Tradition::RomanCatholic);
        assert_eq!(Tradition::from_str("catolica").unwrap(), Tradition::RomanCatholic);
        assert_eq!(Tradition::from_str("ANGLICANA").unwrap(), Tradition::Anglican);
        assert_eq!(Tradition::from_str("ordinariato").unwrap(), Tradition::Ordinariate);
        assert_eq!(Tradition::from_str(" tridentine ").unwrap(), Tradition::Tridentine);

        let err = Tradition::from_str("byzantine").unwrap_err();
        assert!(matches!(err, LiturgyError::UnsupportedTradition(_)));
    }

    #[test]
    fn ids_round_trip() {
        for tradition in Tradition::ALL {
            assert_eq!(Tradition::from_str(tradition.id()).unwrap(), tradition);
        }
    }
}
