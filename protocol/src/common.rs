//! Identifiers shared by requests and snapshots

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One of the two sides of a battle, from our perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Mine,
    Opponent,
}

impl Side {
    /// Both sides, ours first
    pub const BOTH: [Side; 2] = [Side::Mine, Side::Opponent];

    /// The other side
    pub fn other(self) -> Self {
        match self {
            Side::Mine => Side::Opponent,
            Side::Opponent => Side::Mine,
        }
    }

    /// Array index for per-side storage
    pub fn index(self) -> usize {
        match self {
            Side::Mine => 0,
            Side::Opponent => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Mine => "Mine",
            Side::Opponent => "Opponent",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stat that can carry a stage modifier
///
/// Deserializes from any name [`Stat::parse`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Parse a stat name ("spe", "Speed", "Sp. Atk", "special_attack")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-', '_', '.'], "").as_str() {
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "spatk" | "specialattack" => Some(Stat::Spa),
            "spd" | "spdef" | "specialdefense" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
        }
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Stat::parse(&name).ok_or_else(|| {
            de::Error::unknown_variant(&name, &["atk", "def", "spa", "spd", "spe"])
        })
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
