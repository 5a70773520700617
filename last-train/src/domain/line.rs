//! Train line identifiers.

use std::fmt;

/// Error returned when parsing an unknown line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line code: {code:?}")]
pub struct InvalidLine {
    code: String,
}

/// A train line known to the bot.
///
/// This is a closed set: every line code in the data file must parse into
/// one of these, so display lookups can never fail at query time.
///
/// # Examples
///
/// ```
/// use last_train::domain::Line;
///
/// let ew = Line::parse("EW").unwrap();
/// assert_eq!(ew.code(), "EW");
/// assert_eq!(ew.name(), "East-West Line");
///
/// // Codes are case-sensitive
/// assert!(Line::parse("ew").is_err());
/// assert!(Line::parse("XX").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    NorthSouth,
    EastWest,
    Changi,
    NorthEast,
    Circle,
    CircleExtension,
    Downtown,
    ThomsonEastCoast,
    PunggolTerminal,
    PunggolEast,
    PunggolWest,
    SengkangTerminal,
    SengkangEast,
    SengkangWest,
    BukitPanjang,
    Sentosa,
}

impl Line {
    /// Every line, in display order.
    pub const ALL: [Line; 16] = [
        Line::NorthSouth,
        Line::EastWest,
        Line::Changi,
        Line::NorthEast,
        Line::Circle,
        Line::CircleExtension,
        Line::Downtown,
        Line::ThomsonEastCoast,
        Line::PunggolTerminal,
        Line::PunggolEast,
        Line::PunggolWest,
        Line::SengkangTerminal,
        Line::SengkangEast,
        Line::SengkangWest,
        Line::BukitPanjang,
        Line::Sentosa,
    ];

    /// Parse a line code such as `"NS"` or `"S"`.
    pub fn parse(code: &str) -> Result<Self, InvalidLine> {
        Self::ALL
            .into_iter()
            .find(|line| line.code() == code)
            .ok_or_else(|| InvalidLine {
                code: code.to_string(),
            })
    }

    /// The code used for this line in the data file.
    pub fn code(&self) -> &'static str {
        match self {
            Line::NorthSouth => "NS",
            Line::EastWest => "EW",
            Line::Changi => "CG",
            Line::NorthEast => "NE",
            Line::Circle => "CC",
            Line::CircleExtension => "CE",
            Line::Downtown => "DT",
            Line::ThomsonEastCoast => "TE",
            Line::PunggolTerminal => "PT",
            Line::PunggolEast => "PE",
            Line::PunggolWest => "PW",
            Line::SengkangTerminal => "ST",
            Line::SengkangEast => "SE",
            Line::SengkangWest => "SW",
            Line::BukitPanjang => "BP",
            Line::Sentosa => "S",
        }
    }

    /// Human-readable line name, without any branch qualifier.
    pub fn name(&self) -> &'static str {
        match self {
            Line::NorthSouth => "North-South Line",
            Line::EastWest | Line::Changi => "East-West Line",
            Line::NorthEast => "North-East Line",
            Line::Circle | Line::CircleExtension => "Circle Line",
            Line::Downtown => "Downtown Line",
            Line::ThomsonEastCoast => "Thomson-East Coast Line",
            Line::PunggolTerminal => "Punggol LRT Terminal",
            Line::PunggolEast => "Punggol LRT East Loop",
            Line::PunggolWest => "Punggol LRT West Loop",
            Line::SengkangTerminal => "Sengkang LRT Terminal",
            Line::SengkangEast => "Sengkang LRT East Loop",
            Line::SengkangWest => "Sengkang LRT West Loop",
            Line::BukitPanjang => "Bukit Panjang LRT",
            Line::Sentosa => "Sentosa Monorail",
        }
    }

    /// Branch qualifier shown after the name, for lines that are branches
    /// of a longer line.
    pub fn branch(&self) -> Option<&'static str> {
        match self {
            Line::Changi => Some("Airport Branch"),
            Line::CircleExtension => Some("Marina Bay Branch"),
            _ => None,
        }
    }

    /// Colour glyph for the line.
    pub fn glyph(&self) -> &'static str {
        match self {
            Line::NorthSouth => "🔴",
            Line::EastWest | Line::Changi => "🟢",
            Line::NorthEast => "🟣",
            Line::Circle | Line::CircleExtension => "🟠",
            Line::Downtown => "🔵",
            Line::ThomsonEastCoast => "🟤",
            Line::PunggolTerminal
            | Line::PunggolEast
            | Line::PunggolWest
            | Line::SengkangTerminal
            | Line::SengkangEast
            | Line::SengkangWest
            | Line::BukitPanjang => "🚋",
            Line::Sentosa => "🏖️",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
