//! Side state: roster, active combatant and side conditions

use std::collections::BTreeMap;

use scout_protocol::{Side, SideSnapshot};

use super::combatant::CombatantState;
use super::conditions::{SideCondition, SideConditionState};
use crate::reference::to_id;

/// One side of the battle
#[derive(Debug, Clone)]
pub struct SideState {
    pub side: Side,

    /// Combatants on this side (registration order)
    pub roster: Vec<CombatantState>,

    /// Index of the active combatant in the roster
    active: Option<usize>,

    /// Side conditions (hazards, screens, etc.)
    pub conditions: BTreeMap<SideCondition, SideConditionState>,
}

impl SideState {
    /// Create a new, empty side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            roster: Vec::new(),
            active: None,
            conditions: BTreeMap::new(),
        }
    }

    /// Get the active combatant
    pub fn active(&self) -> Option<&CombatantState> {
        self.active.and_then(|idx| self.roster.get(idx))
    }

    /// Get the active combatant mutably
    pub fn active_mut(&mut self) -> Option<&mut CombatantState> {
        self.active.and_then(|idx| self.roster.get_mut(idx))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Find a combatant by name (case, spaces and hyphens ignored)
    pub fn find(&self, name: &str) -> Option<usize> {
        let id = to_id(name);
        self.roster
            .iter()
            .position(|c| to_id(&c.name) == id || to_id(&c.species) == id)
    }

    /// Add a combatant, returns false if one with the same name exists
    pub fn add(&mut self, combatant: CombatantState) -> bool {
        if self.find(&combatant.name).is_some() {
            return false;
        }
        self.roster.push(combatant);
        true
    }

    /// Make the combatant at `index` active
    ///
    /// The previous active combatant leaves the field and the new one
    /// enters with fresh stages and volatiles.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.roster.len() {
            return;
        }
        if let Some(old) = self.active_mut() {
            old.on_switch_out();
        }
        self.active = Some(index);
        self.roster[index].on_switch_in();
    }

    /// Iterate over bench combatants (not active, not fainted)
    pub fn bench(&self) -> impl Iterator<Item = &CombatantState> {
        self.roster
            .iter()
            .enumerate()
            .filter(move |(idx, c)| Some(*idx) != self.active && c.is_alive())
            .map(|(_, c)| c)
    }

    /// Iterate over fainted combatants
    pub fn fainted(&self) -> impl Iterator<Item = &CombatantState> {
        self.roster.iter().filter(|c| c.is_fainted())
    }

    /// Check if every combatant has fainted
    pub fn all_fainted(&self) -> bool {
        !self.roster.is_empty() && self.roster.iter().all(|c| c.is_fainted())
    }

    /// Check if side has a condition
    pub fn has_condition(&self, cond: SideCondition) -> bool {
        self.conditions.contains_key(&cond)
    }

    /// Add a side condition
    /// Returns true if the condition was added (false if already at max layers)
    pub fn add_condition(&mut self, cond: SideCondition) -> bool {
        if let Some(state) = self.conditions.get_mut(&cond) {
            state.add_layer(cond)
        } else {
            self.conditions.insert(cond, SideConditionState::new());
            true
        }
    }

    /// Remove a side condition
    pub fn remove_condition(&mut self, cond: SideCondition) -> bool {
        self.conditions.remove(&cond).is_some()
    }

    /// Turn a non-stacking condition on or off
    pub fn set_condition(&mut self, cond: SideCondition, active: bool) {
        if active {
            self.conditions.entry(cond).or_insert_with(SideConditionState::new);
        } else {
            self.conditions.remove(&cond);
        }
    }

    pub fn tailwind(&self) -> bool {
        self.has_condition(SideCondition::Tailwind)
    }

    /// Condition labels, with layer counts for stacking hazards
    pub fn condition_labels(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|(cond, state)| {
                if cond.max_layers() > 1 {
                    format!("{} x{}", cond, state.layers)
                } else {
                    cond.to_string()
                }
            })
            .collect()
    }

    pub fn to_snapshot(&self) -> SideSnapshot {
        SideSnapshot {
            side: self.side,
            active: self.active().map(CombatantState::to_active_snapshot),
            bench: self.bench().map(CombatantState::to_bench_entry).collect(),
            fainted: self.fainted().map(|c| c.name.clone()).collect(),
            unseen: self
                .roster
                .iter()
                .filter(|c| !c.seen && c.is_alive())
                .map(|c| c.name.clone())
                .collect(),
            conditions: self.condition_labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StatBlock, Type};

    fn create_test_side() -> SideState {
        let mut side = SideState::new(Side::Opponent);
        for name in ["Incineroar", "Flutter Mane", "Rillaboom"] {
            side.add(CombatantState::new(
                Side::Opponent,
                name,
                StatBlock::uniform(100),
                vec![Type::Normal],
            ));
        }
        side
    }

    #[test]
    fn test_new_side() {
        let side = SideState::new(Side::Mine);
        assert!(side.roster.is_empty());
        assert!(side.active().is_none());
        assert!(!side.all_fainted());
    }

    #[test]
    fn test_add_is_idempotent_on_name() {
        let mut side = create_test_side();
        let duplicate =
            CombatantState::new(Side::Opponent, "flutter mane", StatBlock::uniform(1), vec![]);
        assert!(!side.add(duplicate));
        assert_eq!(side.roster.len(), 3);
    }

    #[test]
    fn test_find() {
        let side = create_test_side();
        assert_eq!(side.find("Flutter Mane"), Some(1));
        assert_eq!(side.find("fluttermane"), Some(1));
        assert_eq!(side.find("Pikachu"), None);
    }

    #[test]
    fn test_set_active_and_bench() {
        let mut side = create_test_side();
        side.set_active(0);
        assert_eq!(side.active().map(|c| c.name.as_str()), Some("Incineroar"));
        assert_eq!(side.bench().count(), 2);

        side.roster[2].apply_health_delta(-100.0);
        let bench: Vec<&str> = side.bench().map(|c| c.name.as_str()).collect();
        assert_eq!(bench, vec!["Flutter Mane"]);
        assert_eq!(side.fainted().count(), 1);

        // Out-of-range index is ignored
        side.set_active(9);
        assert_eq!(side.active_index(), Some(0));
    }

    #[test]
    fn test_all_fainted() {
        let mut side = create_test_side();
        assert!(!side.all_fainted());
        for c in &mut side.roster {
            c.apply_health_delta(-100.0);
        }
        assert!(side.all_fainted());
        assert_eq!(side.bench().count(), 0);
    }

    #[test]
    fn test_side_conditions() {
        let mut side = create_test_side();

        assert!(side.add_condition(SideCondition::Spikes));
        assert!(side.add_condition(SideCondition::Spikes));

        side.set_condition(SideCondition::Tailwind, true);
        side.set_condition(SideCondition::Tailwind, true);
        assert!(side.tailwind());
        assert!(!side.has_condition(SideCondition::Reflect));
        assert_eq!(side.condition_labels(), vec!["Tailwind", "Spikes x2"]);

        side.set_condition(SideCondition::Tailwind, false);
        assert!(!side.tailwind());
        assert!(side.remove_condition(SideCondition::Spikes));
        assert!(!side.remove_condition(SideCondition::Spikes));
    }

    #[test]
    fn test_to_snapshot_lists_unseen() {
        let mut side = create_test_side();
        side.set_active(1);

        let snapshot = side.to_snapshot();
        assert_eq!(snapshot.active.as_ref().map(|a| a.name.as_str()), Some("Flutter Mane"));
        assert_eq!(snapshot.unseen, vec!["Incineroar", "Rillaboom"]);
        assert_eq!(snapshot.bench.len(), 2);
    }
}
