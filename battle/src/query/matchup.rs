//! Defensive type profiles

use std::fmt;

use crate::reference::to_id;
use crate::types::{CombatantState, Effectiveness, Type};

/// How every attacking type fares against one set of defending types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeProfile {
    pub types: Vec<Type>,

    /// Super effective types, strongest first
    pub weaknesses: Vec<(Type, Effectiveness)>,
    pub resistances: Vec<Type>,
    pub immunities: Vec<Type>,
}

impl TypeProfile {
    /// Profile of a type combination, with Levitate granting a Ground immunity
    pub fn of(types: &[Type], ability: Option<&str>) -> Self {
        let levitate = ability.is_some_and(|a| to_id(a) == "levitate");
        let mut profile = Self {
            types: types.to_vec(),
            weaknesses: Vec::new(),
            resistances: Vec::new(),
            immunities: Vec::new(),
        };

        for attacking in Type::all().iter().copied() {
            let eff = if levitate && attacking == Type::Ground {
                Effectiveness::Immune
            } else {
                attacking.against_all(types)
            };
            if eff.is_immune() {
                profile.immunities.push(attacking);
            } else if eff.is_super_effective() {
                profile.weaknesses.push((attacking, eff));
            } else if eff.is_resisted() {
                profile.resistances.push(attacking);
            }
        }
        profile
            .weaknesses
            .sort_by_key(|(t, eff)| (std::cmp::Reverse(eff.multiplier() as u32), *t));
        profile
    }

    /// Profile of a combatant as it stands (tera applied once terastallized)
    pub fn for_combatant(combatant: &CombatantState) -> Self {
        Self::of(
            &combatant.battle_types(),
            combatant.info.ability.value().map(String::as_str),
        )
    }

    /// Profile a combatant would have after terastallizing, if its tera type is known
    pub fn after_tera(combatant: &CombatantState) -> Option<Self> {
        if combatant.terastallized {
            return None;
        }
        let tera = *combatant.info.tera_type.value()?;
        Some(Self::of(&[tera], combatant.info.ability.value().map(String::as_str)))
    }

    pub fn is_weak_to(&self, attacking: Type) -> bool {
        self.weaknesses.iter().any(|(t, _)| *t == attacking)
    }

    /// Check if any of the attacking types is super effective
    pub fn is_weak_to_any(&self, attacking: &[Type]) -> bool {
        attacking.iter().any(|t| self.is_weak_to(*t))
    }

    /// Check if every attacking type is resisted or blocked
    pub fn walls_all(&self, attacking: &[Type]) -> bool {
        !attacking.is_empty()
            && attacking
                .iter()
                .all(|t| self.resistances.contains(t) || self.immunities.contains(t))
    }
}

impl fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weak: Vec<String> = self
            .weaknesses
            .iter()
            .map(|(t, eff)| format!("{t} ({eff})"))
            .collect();
        write!(
            f,
            "weak to {}",
            if weak.is_empty() { "nothing".to_string() } else { weak.join(", ") }
        )?;
        if !self.immunities.is_empty() {
            let immune: Vec<&str> = self.immunities.iter().map(Type::as_str).collect();
            write!(f, "; immune to {}", immune.join(", "))?;
        }
        Ok(())
    }
}
