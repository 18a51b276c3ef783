//! Stat stages, stat blocks and the stat formula

use std::collections::BTreeMap;

use scout_protocol::{Stat, StatLine};
use serde::{Deserialize, Serialize};

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
        }
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let current = self.get(stat);
        let new_value = current.saturating_add(amount).clamp(-6, 6);
        self.set(stat, new_value);
        new_value - current
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        Stat::ALL.iter().all(|s| self.get(*s) == 0)
    }

    /// Non-zero stages, keyed by stat
    pub fn non_zero(&self) -> BTreeMap<Stat, i8> {
        Stat::ALL
            .iter()
            .filter(|s| self.get(**s) != 0)
            .map(|s| (*s, self.get(*s)))
            .collect()
    }

    /// Stage multiplier as an exact fraction
    ///
    /// +1 = 3/2, +2 = 2/1, ..., +6 = 4/1
    /// -1 = 2/3, -2 = 1/2, ..., -6 = 1/4
    pub fn ratio(stage: i8) -> (u32, u32) {
        let stage = stage.clamp(-6, 6) as i32;
        if stage >= 0 {
            ((2 + stage) as u32, 2)
        } else {
            (2, (2 - stage) as u32)
        }
    }

    /// Apply a stage to a raw stat value, flooring the result
    pub fn apply(value: u32, stage: i8) -> u32 {
        let (num, den) = Self::ratio(stage);
        let staged = u64::from(value) * u64::from(num) / u64::from(den);
        u32::try_from(staged).unwrap_or(u32::MAX)
    }
}

/// A full set of six stats (base stats or calculated stats)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl StatBlock {
    pub const fn new(hp: u32, atk: u32, def: u32, spa: u32, spd: u32, spe: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Same value for every stat
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Get a non-HP stat
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }
}

impl std::fmt::Display for StatBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}",
            self.hp, self.atk, self.def, self.spa, self.spd, self.spe
        )
    }
}

/// Natures (raise one stat by 10%, lower another by 10%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// Order of the raised/lowered stat in the nature grid
    const GRID: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spe, Stat::Spa, Stat::Spd];

    /// Parse a nature name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|n| format!("{n:?}").to_lowercase() == wanted)
    }

    /// Stat raised by this nature (None for neutral natures)
    pub fn increased(&self) -> Option<Stat> {
        let index = *self as usize;
        let (up, down) = (index / 5, index % 5);
        (up != down).then(|| Self::GRID[up])
    }

    /// Stat lowered by this nature (None for neutral natures)
    pub fn decreased(&self) -> Option<Stat> {
        let index = *self as usize;
        let (up, down) = (index / 5, index % 5);
        (up != down).then(|| Self::GRID[down])
    }

    /// Apply this nature to a calculated stat, flooring the result
    pub fn apply(&self, stat: Stat, value: u32) -> u32 {
        if self.increased() == Some(stat) {
            value * 110 / 100
        } else if self.decreased() == Some(stat) {
            value * 90 / 100
        } else {
            value
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Calculate the HP stat
pub fn calculate_hp(base: u32, iv: u32, ev: u32, level: u8) -> u32 {
    let level = level as u32;
    (2 * base + iv + ev / 4) * level / 100 + level + 10
}

/// Calculate a non-HP stat
pub fn calculate_stat(stat: Stat, base: u32, iv: u32, ev: u32, level: u8, nature: Nature) -> u32 {
    let raw = (2 * base + iv + ev / 4) * level as u32 / 100 + 5;
    nature.apply(stat, raw)
}

/// Calculate all six stats from base stats and a spread
pub fn calculate_stats(
    base: &StatBlock,
    ivs: &StatLine,
    evs: &StatLine,
    level: u8,
    nature: Nature,
) -> StatBlock {
    let line = |line: &StatLine, stat: Stat| -> u32 {
        u32::from(match stat {
            Stat::Atk => line.atk,
            Stat::Def => line.def,
            Stat::Spa => line.spa,
            Stat::Spd => line.spd,
            Stat::Spe => line.spe,
        })
    };

    let mut stats = StatBlock {
        hp: calculate_hp(base.hp, ivs.hp.into(), evs.hp.into(), level),
        ..StatBlock::uniform(0)
    };
    for stat in Stat::ALL {
        let value = calculate_stat(
            stat,
            base.get(stat),
            line(ivs, stat),
            line(evs, stat),
            level,
            nature,
        );
        stats.set(stat, value);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stages_are_zero() {
        let stages = StatStages::new();
        assert!(stages.is_clear());
        assert!(stages.non_zero().is_empty());
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut stages = StatStages::new();
        stages.set(Stat::Atk, 10);
        assert_eq!(stages.atk, 6);

        stages.set(Stat::Def, -10);
        assert_eq!(stages.def, -6);
    }

    #[test]
    fn test_boost() {
        let mut stages = StatStages::new();

        let change = stages.boost(Stat::Atk, 2);
        assert_eq!(change, 2);
        assert_eq!(stages.atk, 2);

        // Boost that hits cap
        stages.atk = 5;
        let change = stages.boost(Stat::Atk, 3);
        assert_eq!(change, 1);
        assert_eq!(stages.atk, 6);

        let change = stages.boost(Stat::Atk, 1);
        assert_eq!(change, 0);

        // Extreme deltas saturate instead of wrapping
        let change = stages.boost(Stat::Spe, i8::MIN);
        assert_eq!(change, -6);
        assert_eq!(stages.spe, -6);
    }

    #[test]
    fn test_non_zero() {
        let mut stages = StatStages::new();
        stages.boost(Stat::Spa, 1);
        stages.boost(Stat::Spe, -1);

        let map = stages.non_zero();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Stat::Spa), Some(&1));
        assert_eq!(map.get(&Stat::Spe), Some(&-1));
    }

    #[test]
    fn test_stage_ratio() {
        assert_eq!(StatStages::ratio(0), (2, 2));
        assert_eq!(StatStages::ratio(1), (3, 2));
        assert_eq!(StatStages::ratio(6), (8, 2));
        assert_eq!(StatStages::ratio(-1), (2, 3));
        assert_eq!(StatStages::ratio(-6), (2, 8));
        // Out-of-range stages clamp
        assert_eq!(StatStages::ratio(9), (8, 2));
    }

    #[test]
    fn test_stage_apply_floors() {
        assert_eq!(StatStages::apply(100, 2), 200);
        assert_eq!(StatStages::apply(101, 1), 151);
        assert_eq!(StatStages::apply(100, -1), 66);
        assert_eq!(StatStages::apply(135, -6), 33);
        assert_eq!(StatStages::apply(u32::MAX, 6), u32::MAX);
    }

    #[test]
    fn test_nature_modifiers() {
        assert_eq!(Nature::parse("jolly"), Some(Nature::Jolly));
        assert_eq!(Nature::Jolly.increased(), Some(Stat::Spe));
        assert_eq!(Nature::Jolly.decreased(), Some(Stat::Spa));
        assert_eq!(Nature::Modest.increased(), Some(Stat::Spa));
        assert_eq!(Nature::Modest.decreased(), Some(Stat::Atk));
        assert_eq!(Nature::Brave.decreased(), Some(Stat::Spe));
        assert_eq!(Nature::Serious.increased(), None);
        assert_eq!(Nature::parse("Spicy"), None);
    }

    #[test]
    fn test_calculate_stats() {
        // Flutter Mane, Timid 252 SpA / 252 Spe at level 50
        let base = StatBlock::new(55, 55, 55, 135, 135, 135);
        let mut evs = StatLine::uniform(0);
        evs.hp = 4;
        evs.spa = 252;
        evs.spe = 252;
        let stats = calculate_stats(&base, &StatLine::uniform(31), &evs, 50, Nature::Timid);

        assert_eq!(stats.hp, 131);
        assert_eq!(stats.atk, 67);
        assert_eq!(stats.spa, 187);
        assert_eq!(stats.spe, 205);
    }
}
