//! In-memory reference table

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::data::{CREATURES, MOVES};
use super::{to_id, CreatureData, MoveData, ReferenceResolver, Resolved};
use crate::types::StatBlock;

/// Stat profile used when the table has nothing to average over
const FLAT_PROFILE: StatBlock = StatBlock::uniform(100);

/// Layout of a reference JSON document
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    creatures: Vec<CreatureData>,
    #[serde(default)]
    moves: Vec<MoveData>,
}

/// Creature and move data keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    creatures: HashMap<String, CreatureData>,
    moves: HashMap<String, MoveData>,
}

impl ReferenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the built-in entries
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, [hp, atk, def, spa, spd, spe], types) in CREATURES {
            table.insert_creature(CreatureData {
                name: name.to_string(),
                base_stats: StatBlock::new(*hp, *atk, *def, *spa, *spd, *spe),
                types: types.to_vec(),
            });
        }
        for (name, power, move_type, category, priority) in MOVES {
            table.insert_move(MoveData {
                name: name.to_string(),
                power: *power,
                move_type: *move_type,
                category: *category,
                priority: *priority,
            });
        }
        table
    }

    /// Parse a table from JSON
    ///
    /// ```json
    /// {
    ///   "creatures": [
    ///     { "name": "Pikachu", "base_stats": { "hp": 35, ... }, "types": ["Electric"] }
    ///   ],
    ///   "moves": [
    ///     { "name": "Thunderbolt", "power": 90, "type": "Electric", "category": "special" }
    ///   ]
    /// }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut table = Self::new();
        table.extend_from_json_str(json)?;
        Ok(table)
    }

    /// Add entries from JSON, replacing entries with the same name
    ///
    /// Returns the number of entries read.
    pub fn extend_from_json_str(&mut self, json: &str) -> Result<usize> {
        let file: TableFile =
            serde_json::from_str(json).context("Failed to decode reference table")?;
        let count = file.creatures.len() + file.moves.len();
        for creature in file.creatures {
            self.insert_creature(creature);
        }
        for mv in file.moves {
            self.insert_move(mv);
        }
        Ok(count)
    }

    pub fn insert_creature(&mut self, creature: CreatureData) {
        self.creatures.insert(to_id(&creature.name), creature);
    }

    pub fn insert_move(&mut self, mv: MoveData) {
        self.moves.insert(to_id(&mv.name), mv);
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Per-stat average over every creature in the table
    fn average_profile(&self) -> StatBlock {
        let count = self.creatures.len() as u32;
        if count == 0 {
            return FLAT_PROFILE;
        }
        let mut sum = StatBlock::uniform(0);
        for creature in self.creatures.values() {
            let base = &creature.base_stats;
            sum.hp += base.hp;
            sum.atk += base.atk;
            sum.def += base.def;
            sum.spa += base.spa;
            sum.spd += base.spd;
            sum.spe += base.spe;
        }
        StatBlock::new(
            sum.hp / count,
            sum.atk / count,
            sum.def / count,
            sum.spa / count,
            sum.spd / count,
            sum.spe / count,
        )
    }
}

impl ReferenceResolver for ReferenceTable {
    fn creature(&self, name: &str) -> Resolved<CreatureData> {
        if let Some(creature) = self.creatures.get(&to_id(name)) {
            return Resolved::exact(creature.clone());
        }

        tracing::warn!(creature = name, "No reference data, estimating base stats");
        Resolved::estimate(CreatureData {
            name: name.to_string(),
            base_stats: self.average_profile(),
            types: Vec::new(),
        })
    }

    fn move_data(&self, name: &str) -> Resolved<MoveData> {
        if let Some(mv) = self.moves.get(&to_id(name)) {
            return Resolved::exact(mv.clone());
        }

        tracing::warn!(move_name = name, "No reference data, treating as non-damaging");
        Resolved::estimate(MoveData::placeholder(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::MoveCategory;
    use crate::types::Type;

    #[test]
    fn test_builtin_lookup_is_normalized() {
        let table = ReferenceTable::builtin();

        let urshifu = table.creature("urshifu rapid strike");
        assert!(!urshifu.estimated);
        assert_eq!(urshifu.value.types, vec![Type::Fighting, Type::Water]);

        let mv = table.move_data("will o wisp");
        assert!(!mv.estimated);
        assert_eq!(mv.value.category, MoveCategory::Status);

        let fake_out = table.move_data("Fake Out");
        assert_eq!(fake_out.value.priority, 3);
    }

    #[test]
    fn test_creature_miss_averages_table() {
        let mut table = ReferenceTable::new();
        table.insert_creature(CreatureData {
            name: "A".to_string(),
            base_stats: StatBlock::uniform(80),
            types: vec![Type::Fire],
        });
        table.insert_creature(CreatureData {
            name: "B".to_string(),
            base_stats: StatBlock::uniform(120),
            types: vec![Type::Water],
        });

        let missing = table.creature("Missingno");
        assert!(missing.estimated);
        assert_eq!(missing.value.base_stats, StatBlock::uniform(100));
        assert!(missing.value.types.is_empty());
    }

    #[test]
    fn test_creature_miss_on_empty_table_uses_flat_profile() {
        let table = ReferenceTable::new();
        let missing = table.creature("Anything");
        assert!(missing.estimated);
        assert_eq!(missing.value.base_stats, FLAT_PROFILE);
    }

    #[test]
    fn test_move_miss_is_placeholder() {
        let table = ReferenceTable::builtin();
        let missing = table.move_data("Totally New Move");
        assert!(missing.estimated);
        assert_eq!(missing.value.power, 0);
        assert!(!missing.value.is_damaging());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "creatures": [
                {
                    "name": "Sneasler",
                    "base_stats": {
                        "hp": 80, "atk": 130, "def": 60, "spa": 40, "spd": 80, "spe": 120
                    },
                    "types": ["Fighting", "Poison"]
                }
            ],
            "moves": [
                { "name": "Dire Claw", "power": 80, "type": "Poison", "category": "physical" }
            ]
        }"#;
        let table = ReferenceTable::from_json_str(json).unwrap();

        assert_eq!(table.creature_count(), 1);
        assert_eq!(table.move_count(), 1);
        assert_eq!(table.creature("Sneasler").value.base_stats.spe, 120);
        assert_eq!(table.move_data("dire claw").value.priority, 0);
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let mut table = ReferenceTable::builtin();
        let before = table.creature_count();
        let json = r#"{
            "moves": [ { "name": "Tackle", "power": 50, "type": "Normal", "category": "Physical" } ]
        }"#;
        let read = table.extend_from_json_str(json).unwrap();

        assert_eq!(read, 1);
        assert_eq!(table.creature_count(), before);
        assert_eq!(table.move_data("Tackle").value.power, 50);
    }

    #[test]
    fn test_from_json_str_malformed() {
        assert!(ReferenceTable::from_json_str("not json").is_err());
        assert!(ReferenceTable::from_json_str(r#"{ "pokemon": [] }"#).is_err());
        let unknown_type = r#"{
            "moves": [ { "name": "X", "power": 1, "type": "Sound", "category": "special" } ]
        }"#;
        assert!(ReferenceTable::from_json_str(unknown_type).is_err());
    }
}
