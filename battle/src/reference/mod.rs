//! Creature and move reference data
//!
//! Lookups are total: a name that is not in the table resolves to an
//! estimate (creatures) or a zero-power placeholder (moves), and the result
//! carries an `estimated` flag instead of failing.

mod data;
mod table;

use serde::{Deserialize, Serialize};

use scout_protocol::StatLine;

use crate::config::CalcConfig;
use crate::types::{calculate_stats, Nature, StatBlock, Type};

pub use table::ReferenceTable;

/// Normalize a creature, move or item name for lookups
///
/// Case, spaces, hyphens and punctuation are ignored, so "Urshifu-Rapid-Strike"
/// and "urshifu rapid strike" resolve to the same entry.
pub fn to_id(name: &str) -> String {
    name.to_lowercase()
        .replace([' ', '-', '\'', '.', ':', '%'], "")
}

/// A lookup result, flagged when it is an estimate rather than real data
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub estimated: bool,
}

impl<T> Resolved<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            estimated: false,
        }
    }

    pub fn estimate(value: T) -> Self {
        Self {
            value,
            estimated: true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            estimated: self.estimated,
        }
    }
}

/// Move category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    #[serde(alias = "Physical")]
    Physical,
    #[serde(alias = "Special")]
    Special,
    #[serde(alias = "Status")]
    Status,
}

impl MoveCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }
}

/// Base data for a creature species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    pub base_stats: StatBlock,
    #[serde(default)]
    pub types: Vec<Type>,
}

/// Base data for a move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub power: u16,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub priority: i8,
}

impl MoveData {
    /// Placeholder for an unknown move (never deals damage)
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            power: 0,
            move_type: Type::Normal,
            category: MoveCategory::Status,
            priority: 0,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0 && self.category != MoveCategory::Status
    }
}

/// Name-to-data lookups used by the session and the report builders
pub trait ReferenceResolver {
    /// Look up a creature's base stats and types
    fn creature(&self, name: &str) -> Resolved<CreatureData>;

    /// Look up a move
    fn move_data(&self, name: &str) -> Resolved<MoveData>;

    /// Estimate the calculated stats of a creature whose spread is unknown
    fn estimate_stats(&self, name: &str, level: u8, config: &CalcConfig) -> Resolved<StatBlock> {
        let ivs = StatLine::uniform(config.estimate_ivs);
        self.creature(name).map(|creature| {
            calculate_stats(
                &creature.base_stats,
                &ivs,
                &config.estimate_evs,
                level,
                Nature::default(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_id() {
        assert_eq!(to_id("Urshifu-Rapid-Strike"), "urshifurapidstrike");
        assert_eq!(to_id("urshifu rapid strike"), "urshifurapidstrike");
        assert_eq!(to_id("King's Shield"), "kingsshield");
        assert_eq!(to_id("Mr. Mime"), "mrmime");
    }

    #[test]
    fn test_resolved_map_keeps_flag() {
        let resolved = Resolved::estimate(2).map(|v| v * 10);
        assert_eq!(resolved.value, 20);
        assert!(resolved.estimated);
        assert!(!Resolved::exact(1).estimated);
    }

    #[test]
    fn test_move_placeholder() {
        let mv = MoveData::placeholder("Mystery Move");
        assert_eq!(mv.power, 0);
        assert_eq!(mv.category, MoveCategory::Status);
        assert!(!mv.is_damaging());
    }

    #[test]
    fn test_estimate_stats() {
        let table = ReferenceTable::builtin();
        let config = CalcConfig::default();
        let stats = table.estimate_stats("Flutter Mane", 50, &config);

        assert!(!stats.estimated);
        // 31 IVs, 84 EVs, neutral nature
        assert_eq!(stats.value.spe, (270 + 31 + 21) * 50 / 100 + 5);
        assert_eq!(stats.value.hp, (110 + 31 + 21) * 50 / 100 + 60);
    }
}
