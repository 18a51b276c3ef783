//! BattleSession - the tracked battle aggregate

use scout_protocol::Side;
use thiserror::Error;

use super::seed::CombatantSeed;
use crate::calc::{AttackerSpec, DamageOptions, DefenderSpec, FieldSpec, Screens, SpeedSpec};
use crate::config::CalcConfig;
use crate::types::{
    calculate_stats, CombatantState, FieldState, InferenceContext, Nature, SideCondition, SideState,
    StatBlock,
};

const CHOICE_SCARF: &str = "Choice Scarf";

/// An operation needed an active combatant that isn't there
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no active combatant on the {side} side")]
pub struct NotReady {
    pub side: Side,
}

/// Result of sending a combatant in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The combatant is now active
    Switched { name: String, first_entry: bool },
    /// The combatant was already active, nothing changed
    AlreadyActive,
    /// No roster entry matches the name
    UnknownCombatant,
    /// Fainted combatants cannot be sent in
    Fainted,
}

/// Both active combatants
#[derive(Debug, Clone, Copy)]
pub struct Matchup<'a> {
    pub mine: &'a CombatantState,
    pub opponent: &'a CombatantState,
}

/// A battle tracked from the user's reported observations
///
/// Owns both sides and the field. All mutation goes through `&mut self`;
/// [`snapshot`](Self::snapshot) is the outward read-only view.
#[derive(Debug, Clone)]
pub struct BattleSession {
    /// Current turn number (starts at 1)
    turn: u32,

    /// Global field state (weather, terrain, trick room)
    pub field: FieldState,

    /// Sides indexed by [`Side::index`]
    sides: [SideState; 2],

    pub config: CalcConfig,
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl BattleSession {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            turn: 1,
            field: FieldState::new(),
            sides: [SideState::new(Side::Mine), SideState::new(Side::Opponent)],
            config,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Move to the next turn, returns the new turn number
    pub fn advance_turn(&mut self) -> u32 {
        self.turn += 1;
        tracing::info!(turn = self.turn, "Turn advanced");
        self.turn
    }

    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side.index()]
    }

    /// Add a combatant to a roster, returns false if the name is taken
    pub fn register(&mut self, side: Side, seed: CombatantSeed) -> bool {
        let added = self.side_mut(side).add(seed.into_combatant(side));
        if !added {
            tracing::debug!(side = %side, "Combatant already registered");
        }
        added
    }

    /// Send a roster member in
    pub fn set_active(&mut self, side: Side, name: &str) -> SwitchOutcome {
        let state = self.side_mut(side);
        let Some(index) = state.find(name) else {
            tracing::warn!(side = %side, name, "Switch to unknown combatant");
            return SwitchOutcome::UnknownCombatant;
        };
        if state.active_index() == Some(index) {
            return SwitchOutcome::AlreadyActive;
        }
        if state.roster[index].is_fainted() {
            tracing::warn!(side = %side, name, "Switch to fainted combatant");
            return SwitchOutcome::Fainted;
        }

        let first_entry = !state.roster[index].seen;
        state.set_active(index);
        let name = state.roster[index].name.clone();
        tracing::info!(side = %side, name = %name, first_entry, "Switched in");
        SwitchOutcome::Switched { name, first_entry }
    }

    pub fn active(&self, side: Side) -> Option<&CombatantState> {
        self.side(side).active()
    }

    pub fn active_mut(&mut self, side: Side) -> Option<&mut CombatantState> {
        self.side_mut(side).active_mut()
    }

    pub fn all_fainted(&self, side: Side) -> bool {
        self.side(side).all_fainted()
    }

    /// Both sides have an active combatant
    pub fn is_ready(&self) -> bool {
        Side::BOTH.iter().all(|side| self.active(*side).is_some())
    }

    pub fn matchup(&self) -> Result<Matchup<'_>, NotReady> {
        Ok(Matchup {
            mine: self.require_active(Side::Mine)?,
            opponent: self.require_active(Side::Opponent)?,
        })
    }

    fn require_active(&self, side: Side) -> Result<&CombatantState, NotReady> {
        self.active(side).ok_or(NotReady { side })
    }

    /// Calculated stats, or a neutral estimate from base stats
    pub fn stats_of(&self, combatant: &CombatantState) -> StatBlock {
        combatant.stats().copied().unwrap_or_else(|| {
            let ivs = scout_protocol::StatLine::uniform(self.config.estimate_ivs);
            calculate_stats(
                &combatant.base_stats,
                &ivs,
                &self.config.estimate_evs,
                combatant.level,
                Nature::default(),
            )
        })
    }

    pub fn attacker_spec_of(&self, combatant: &CombatantState) -> AttackerSpec {
        AttackerSpec {
            level: combatant.level,
            stats: self.stats_of(combatant),
            stages: combatant.stages,
            item: combatant.info.item.value().cloned(),
            ability: combatant.info.ability.value().cloned(),
            status: combatant.status,
            types: combatant.types.clone(),
            tera_type: combatant.info.tera_type.value().copied(),
            terastallized: combatant.terastallized,
        }
    }

    pub fn defender_spec_of(&self, combatant: &CombatantState) -> DefenderSpec {
        let side = self.side(combatant.side);
        DefenderSpec {
            stats: self.stats_of(combatant),
            stages: combatant.stages,
            item: combatant.info.item.value().cloned(),
            ability: combatant.info.ability.value().cloned(),
            status: combatant.status,
            types: combatant.types.clone(),
            tera_type: combatant.info.tera_type.value().copied(),
            terastallized: combatant.terastallized,
            health: combatant.health(),
            max_hp: combatant.max_hp(),
            screens: Screens {
                reflect: side.has_condition(SideCondition::Reflect),
                light_screen: side.has_condition(SideCondition::LightScreen),
                aurora_veil: side.has_condition(SideCondition::AuroraVeil),
            },
        }
    }

    pub fn speed_spec_of(&self, combatant: &CombatantState, priority: i8) -> SpeedSpec {
        SpeedSpec {
            speed: self.stats_of(combatant).spe,
            stage: combatant.stages.spe,
            paralyzed: combatant.is_paralyzed(),
            choice_scarf: combatant.info.has_item(CHOICE_SCARF),
            tailwind: self.side(combatant.side).tailwind(),
            priority,
        }
    }

    /// Attacker spec for a side's active combatant
    pub fn attacker_spec(&self, side: Side) -> Result<AttackerSpec, NotReady> {
        self.require_active(side).map(|c| self.attacker_spec_of(c))
    }

    /// Defender spec for a side's active combatant
    pub fn defender_spec(&self, side: Side) -> Result<DefenderSpec, NotReady> {
        self.require_active(side).map(|c| self.defender_spec_of(c))
    }

    /// Speed spec for a side's active combatant using a move of `priority`
    pub fn speed_spec(&self, side: Side, priority: i8) -> Result<SpeedSpec, NotReady> {
        self.require_active(side).map(|c| self.speed_spec_of(c, priority))
    }

    pub fn field_spec(&self) -> FieldSpec {
        FieldSpec {
            weather: self.field.weather,
            terrain: self.field.terrain,
        }
    }

    pub fn damage_options(&self) -> DamageOptions {
        DamageOptions::from_config(&self.config)
    }

    /// Context for inferring things about `side`'s active combatant
    pub fn inference_context(&self, side: Side) -> InferenceContext {
        InferenceContext {
            own_tailwind: self.side(side).tailwind(),
            opposing_tailwind: self.side(side.other()).tailwind(),
            trick_room: self.field.trick_room,
        }
    }
}
