//! Update logic for merging UpdateRequest into session state

use scout_protocol::{FieldUpdate, Side, SideUpdate, StatusChange, UpdateRequest};

use super::session::{BattleSession, SwitchOutcome};
use crate::types::{is_clear_value, Reveal, SideCondition, Status, Terrain, Type, Volatile, Weather};

/// What an update changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSummary {
    /// Combatants sent in
    pub switches: Vec<(Side, String)>,

    /// Combatants that fainted during this update
    pub fainted: Vec<(Side, String)>,

    /// Number of fields applied
    pub changes: usize,

    /// Fields that named something unknown and were skipped
    pub ignored: Vec<String>,

    pub turn_advanced: bool,
}

impl UpdateSummary {
    pub fn is_noop(&self) -> bool {
        self.changes == 0 && !self.turn_advanced
    }

    fn ignore(&mut self, what: String) {
        tracing::debug!(field = %what, "Ignoring update field");
        self.ignored.push(what);
    }
}

impl BattleSession {
    /// Merge a sparse update into the session
    ///
    /// Field changes go first, then each side (switch before anything that
    /// targets the active combatant), then the turn advance. Absent fields
    /// leave state untouched. Unrecognized names and values are skipped and
    /// listed in the summary.
    pub fn apply_update(&mut self, request: &UpdateRequest) -> UpdateSummary {
        let mut summary = UpdateSummary::default();

        self.apply_field_update(&request.field, &mut summary);
        for side in Side::BOTH {
            self.apply_side_update(side, request.side(side), &mut summary);
        }

        if request.turn_end {
            self.advance_turn();
            summary.turn_advanced = true;
        }
        summary
    }

    fn apply_field_update(&mut self, update: &FieldUpdate, summary: &mut UpdateSummary) {
        if let Some(weather) = &update.weather {
            if is_clear_value(weather) {
                self.field.clear_weather();
                summary.changes += 1;
            } else if let Some(weather) = Weather::from_protocol(weather) {
                self.field.set_weather(weather);
                summary.changes += 1;
            } else {
                summary.ignore(format!("weather {weather}"));
            }
        }

        if let Some(terrain) = &update.terrain {
            if is_clear_value(terrain) {
                self.field.clear_terrain();
                summary.changes += 1;
            } else if let Some(terrain) = Terrain::from_protocol(terrain) {
                self.field.set_terrain(terrain);
                summary.changes += 1;
            } else {
                summary.ignore(format!("terrain {terrain}"));
            }
        }

        if let Some(trick_room) = update.trick_room {
            self.field.trick_room = trick_room;
            summary.changes += 1;
        }
    }

    fn apply_side_update(&mut self, side: Side, update: &SideUpdate, summary: &mut UpdateSummary) {
        if let Some(name) = &update.switch_to {
            match self.set_active(side, name) {
                SwitchOutcome::Switched { name, .. } => {
                    summary.switches.push((side, name));
                    summary.changes += 1;
                }
                SwitchOutcome::AlreadyActive => {}
                SwitchOutcome::UnknownCombatant | SwitchOutcome::Fainted => {
                    summary.ignore(format!("{side} switch to {name}"));
                }
            }
        }

        self.apply_side_conditions(side, update, summary);
        self.apply_active_update(side, update, summary);
    }

    fn apply_side_conditions(
        &mut self,
        side: Side,
        update: &SideUpdate,
        summary: &mut UpdateSummary,
    ) {
        let state = self.side_mut(side);

        let flags = [
            (update.tailwind, SideCondition::Tailwind),
            (update.reflect, SideCondition::Reflect),
            (update.light_screen, SideCondition::LightScreen),
            (update.aurora_veil, SideCondition::AuroraVeil),
        ];
        for (flag, condition) in flags {
            if let Some(active) = flag {
                state.set_condition(condition, active);
                summary.changes += 1;
            }
        }

        for hazard in &update.hazards_set {
            match SideCondition::from_protocol(hazard) {
                Some(condition) if condition.is_hazard() => {
                    if state.add_condition(condition) {
                        summary.changes += 1;
                    }
                }
                _ => summary.ignore(format!("{side} hazard {hazard}")),
            }
        }

        for hazard in &update.hazards_cleared {
            match SideCondition::from_protocol(hazard) {
                Some(condition) if condition.is_hazard() => {
                    if state.remove_condition(condition) {
                        summary.changes += 1;
                    }
                }
                _ => summary.ignore(format!("{side} hazard {hazard}")),
            }
        }
    }

    fn apply_active_update(
        &mut self,
        side: Side,
        update: &SideUpdate,
        summary: &mut UpdateSummary,
    ) {
        let Some(active) = self.active_mut(side) else {
            if targets_active(update) {
                summary.ignore(format!("{side} changes without an active combatant"));
            }
            return;
        };

        if let Some(delta) = update.hp_delta {
            let was_alive = active.is_alive();
            if active.apply_health_delta(delta) != 0.0 {
                summary.changes += 1;
            }
            if was_alive && active.is_fainted() {
                tracing::info!(side = %side, name = %active.name, "Fainted");
                summary.fainted.push((side, active.name.clone()));
            }
        }

        for (stat, delta) in &update.stages {
            active.adjust_stage(*stat, *delta);
            summary.changes += 1;
        }

        match update.status_change() {
            Some(StatusChange::Clear) => {
                active.set_status(None);
                summary.changes += 1;
            }
            Some(StatusChange::Set(code)) => match Status::from_protocol(code) {
                Some(status) => {
                    active.set_status(Some(status));
                    summary.changes += 1;
                }
                None => summary.ignore(format!("{side} status {code}")),
            },
            None => {}
        }

        for volatile in &update.volatiles_start {
            let volatile = Volatile::from_protocol(volatile);
            if !volatile.is_known() {
                tracing::debug!(volatile = %volatile, "Tracking unrecognized volatile");
            }
            active.add_volatile(volatile);
            summary.changes += 1;
        }
        for volatile in &update.volatiles_end {
            if active.remove_volatile(&Volatile::from_protocol(volatile)) {
                summary.changes += 1;
            }
        }

        if let Some(item) = &update.item {
            // A consumed or removed item is confirmed as no item
            if is_clear_value(item) {
                active.info.item.reveal_none();
            } else {
                active.reveal(Reveal::Item(item.clone()));
            }
            summary.changes += 1;
        }
        if let Some(ability) = &update.ability {
            active.reveal(Reveal::Ability(ability.clone()));
            summary.changes += 1;
        }
        if let Some(tera) = &update.tera_type {
            match Type::parse(tera) {
                Some(tera) => {
                    active.reveal(Reveal::TeraType(tera));
                    summary.changes += 1;
                }
                None => summary.ignore(format!("{side} tera type {tera}")),
            }
        }
        if let Some(terastallized) = update.terastallized {
            active.terastallized = terastallized;
            summary.changes += 1;
        }

        if let Some(move_name) = &update.move_used {
            active.record_move(move_name);
            summary.changes += 1;
        }
    }
}

/// Whether the update carries changes for the active combatant
fn targets_active(update: &SideUpdate) -> bool {
    update.hp_delta.is_some()
        || !update.stages.is_empty()
        || update.status.is_some()
        || !update.volatiles_start.is_empty()
        || !update.volatiles_end.is_empty()
        || update.item.is_some()
        || update.ability.is_some()
        || update.tera_type.is_some()
        || update.terastallized.is_some()
        || update.move_used.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::CombatantSeed;
    use crate::types::StatBlock;
    use scout_protocol::{parse_update_request, Stat};

    fn create_ready_session() -> BattleSession {
        let mut session = BattleSession::default();
        for name in ["Flutter Mane", "Amoonguss"] {
            let seed = CombatantSeed::new(name, StatBlock::uniform(100), vec![Type::Fairy]);
            session.register(Side::Mine, seed);
        }
        for name in ["Incineroar", "Rillaboom"] {
            let seed = CombatantSeed::new(name, StatBlock::uniform(100), vec![Type::Fire]);
            session.register(Side::Opponent, seed);
        }
        session.set_active(Side::Mine, "Flutter Mane");
        session.set_active(Side::Opponent, "Incineroar");
        session
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut session = create_ready_session();
        let before = session.snapshot();

        let summary = session.apply_update(&UpdateRequest::default());
        assert!(summary.is_noop());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_sparse_update() {
        let mut session = create_ready_session();
        let request = parse_update_request(
            r#"{
                "opponent": {
                    "hp_delta": -45,
                    "stages": { "atk": -1 },
                    "status": "brn",
                    "move_used": "Fake Out"
                },
                "mine": { "tailwind": true, "volatiles_start": ["confusion"] },
                "field": { "weather": "sun", "terrain": "grassy" },
                "turn_end": true
            }"#,
        )
        .unwrap();

        let summary = session.apply_update(&request);
        assert!(summary.turn_advanced);
        assert!(summary.ignored.is_empty());
        assert_eq!(session.turn(), 2);

        let opp = session.active(Side::Opponent).unwrap();
        assert_eq!(opp.health(), 55.0);
        assert_eq!(opp.stages.get(Stat::Atk), -1);
        assert_eq!(opp.status, Some(Status::Burn));
        assert_eq!(opp.observed_moves, vec!["Fake Out"]);

        assert!(session.side(Side::Mine).tailwind());
        assert!(session.active(Side::Mine).unwrap().has_volatile(&Volatile::Confusion));
        assert_eq!(session.field.weather, Some(Weather::Sun));
        assert_eq!(session.field.terrain, Some(Terrain::Grassy));
    }

    #[test]
    fn test_switch_applies_before_active_changes() {
        let mut session = create_ready_session();
        let request = parse_update_request(
            r#"{ "opponent": { "switch_to": "Rillaboom", "hp_delta": -20 } }"#,
        )
        .unwrap();

        let summary = session.apply_update(&request);
        assert_eq!(summary.switches, vec![(Side::Opponent, "Rillaboom".to_string())]);

        let side = session.side(Side::Opponent);
        assert_eq!(side.active().unwrap().health(), 80.0);
        assert_eq!(side.roster[0].health(), 100.0);
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let mut session = create_ready_session();
        let request = parse_update_request(
            r#"{
                "opponent": {
                    "switch_to": "Pikachu",
                    "status": "frozen solid",
                    "tera_type": "Sound"
                },
                "field": { "weather": "meteor shower" }
            }"#,
        )
        .unwrap();

        let summary = session.apply_update(&request);
        assert_eq!(summary.ignored.len(), 4);
        assert_eq!(summary.changes, 0);
        assert_eq!(session.active(Side::Opponent).unwrap().name, "Incineroar");
        assert_eq!(session.field.weather, None);
    }

    #[test]
    fn test_faint_is_reported() {
        let mut session = create_ready_session();
        let request = parse_update_request(r#"{ "mine": { "hp_delta": -150 } }"#).unwrap();

        let summary = session.apply_update(&request);
        assert_eq!(summary.fainted, vec![(Side::Mine, "Flutter Mane".to_string())]);
        assert!(session.active(Side::Mine).unwrap().is_fainted());
    }

    #[test]
    fn test_health_deltas_summing_to_full_faint() {
        let mut session = create_ready_session();
        for delta in ["-64.2", "-35.8"] {
            let request = format!(r#"{{ "opponent": {{ "hp_delta": {delta} }} }}"#);
            session.apply_update(&parse_update_request(&request).unwrap());
        }

        assert!(session.active(Side::Opponent).unwrap().is_fainted());
        assert!(!session.side(Side::Opponent).all_fainted());
        assert_eq!(session.snapshot().opponent.fainted, vec!["Incineroar".to_string()]);
    }

    #[test]
    fn test_damage_to_fainted_active_is_not_a_change() {
        let mut session = create_ready_session();
        let request = parse_update_request(r#"{ "opponent": { "hp_delta": -100 } }"#).unwrap();
        assert_eq!(session.apply_update(&request).changes, 1);

        let request = parse_update_request(r#"{ "opponent": { "hp_delta": -10 } }"#).unwrap();
        let summary = session.apply_update(&request);
        assert_eq!(summary.changes, 0);
        assert!(summary.fainted.is_empty());
    }

    #[test]
    fn test_reveals_are_confirmed() {
        let mut session = create_ready_session();
        let request = parse_update_request(
            r#"{
                "opponent": {
                    "item": "Sitrus Berry",
                    "ability": "Intimidate",
                    "tera_type": "Grass",
                    "terastallized": true
                }
            }"#,
        )
        .unwrap();
        session.apply_update(&request);

        let opp = session.active(Side::Opponent).unwrap();
        assert!(opp.info.item.is_confirmed());
        assert!(opp.info.ability.is_confirmed());
        assert_eq!(opp.battle_types(), vec![Type::Grass]);

        // Item consumed
        let request = parse_update_request(r#"{ "opponent": { "item": "none" } }"#).unwrap();
        session.apply_update(&request);
        let opp = session.active(Side::Opponent).unwrap();
        assert!(!opp.info.has_item("Sitrus Berry"));
        assert!(opp.info.item.is_confirmed());
        assert!(opp.info.item.value().is_none());
    }

    #[test]
    fn test_hazards_and_clears() {
        let mut session = create_ready_session();
        let request = parse_update_request(
            r#"{
                "opponent": { "hazards_set": ["Stealth Rock", "Spikes", "Spikes", "Tailwind"] },
                "field": { "trick_room": true }
            }"#,
        )
        .unwrap();
        let summary = session.apply_update(&request);
        assert_eq!(summary.ignored.len(), 1);

        let side = session.side(Side::Opponent);
        assert_eq!(side.condition_labels(), vec!["Stealth Rock", "Spikes x2"]);
        assert!(session.field.trick_room);

        let request = parse_update_request(r#"{ "opponent": { "reflect": true } }"#).unwrap();
        session.apply_update(&request);

        let request = parse_update_request(
            r#"{ "opponent": { "hazards_cleared": ["stealthrock", "Reflect"] } }"#,
        )
        .unwrap();
        let summary = session.apply_update(&request);
        assert_eq!(summary.changes, 1);
        assert_eq!(summary.ignored, vec!["Opponent hazard Reflect".to_string()]);

        let side = session.side(Side::Opponent);
        assert!(!side.has_condition(SideCondition::StealthRock));
        assert!(side.has_condition(SideCondition::Reflect));
    }
}
