//! Combatant state

use std::collections::BTreeSet;

use scout_protocol::{ActiveSnapshot, BenchEntry, InfoSnapshot, MoveEntry, Side, Stat};

use super::ledger::{InfoLedger, Reveal};
use super::pokemon_type::Type;
use super::stats::{calculate_stat, Nature, StatBlock, StatStages};
use super::status::{Status, Volatile};
use crate::reference::to_id;

const CHOICE_SCARF: &str = "Choice Scarf";

/// Full health in tenths of a percent
const FULL_HEALTH: i32 = 1000;

/// One creature's battle state (changes as the battle progresses)
#[derive(Debug, Clone)]
pub struct CombatantState {
    /// Display name and roster key
    pub name: String,

    /// Species name used for reference lookups
    pub species: String,

    /// Side that owns this combatant
    pub side: Side,

    pub level: u8,

    /// Species base stats
    pub base_stats: StatBlock,

    /// Original types from species
    pub types: Vec<Type>,

    /// Remaining health in tenths of a percent (0-1000)
    health: i32,

    /// Non-volatile status condition
    pub status: Option<Status>,

    // === Combat state (cleared on switch) ===
    /// Stat stage modifiers
    pub stages: StatStages,

    /// Active volatile conditions
    pub volatiles: BTreeSet<Volatile>,

    /// Whether currently terastallized
    pub terastallized: bool,

    // === Information ===
    /// Item, ability, tera type and stat spread
    pub info: InfoLedger,

    /// Moves seen in play, in order
    pub observed_moves: Vec<String>,

    /// Moves expected from usage statistics
    pub predicted_moves: Vec<String>,

    /// Whether this combatant has been in play
    pub seen: bool,
}

impl CombatantState {
    /// Create a combatant at full health
    pub fn new(
        side: Side,
        name: impl Into<String>,
        base_stats: StatBlock,
        types: Vec<Type>,
    ) -> Self {
        let name = name.into();
        Self {
            species: name.clone(),
            name,
            side,
            level: 50,
            base_stats,
            types,
            health: FULL_HEALTH,
            status: None,
            stages: StatStages::new(),
            volatiles: BTreeSet::new(),
            terastallized: false,
            info: InfoLedger::default(),
            observed_moves: Vec::new(),
            predicted_moves: Vec::new(),
            seen: false,
        }
    }

    /// Remaining health percentage (0-100)
    pub fn health(&self) -> f32 {
        self.health as f32 / 10.0
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_fainted()
    }

    pub fn is_mine(&self) -> bool {
        self.side == Side::Mine
    }

    /// Change health by a signed percentage, returns the change applied
    ///
    /// Health is tracked to a tenth of a percent and clamped to 0-100. A
    /// fainted combatant stays fainted; only
    /// [`restore_health`](Self::restore_health) brings it back.
    pub fn apply_health_delta(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() || self.is_fainted() {
            return 0.0;
        }
        let before = self.health;
        self.health = before.saturating_add(to_tenths(delta)).clamp(0, FULL_HEALTH);
        if self.is_fainted() {
            self.status = None;
        }
        (self.health - before) as f32 / 10.0
    }

    /// Set health directly (revival or a resync from an exact reading)
    pub fn restore_health(&mut self, health: f32) {
        if health.is_finite() {
            self.health = to_tenths(health).clamp(0, FULL_HEALTH);
        }
    }

    /// Change a stat stage, returns the change applied
    pub fn adjust_stage(&mut self, stat: Stat, delta: i8) -> i8 {
        self.stages.boost(stat, delta)
    }

    /// Set or cure the permanent status; ignored while fainted
    pub fn set_status(&mut self, status: Option<Status>) {
        if self.is_alive() {
            self.status = status;
        }
    }

    pub fn is_paralyzed(&self) -> bool {
        self.status == Some(Status::Paralysis)
    }

    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatiles.contains(v)
    }

    pub fn add_volatile(&mut self, v: Volatile) {
        self.volatiles.insert(v);
    }

    pub fn remove_volatile(&mut self, v: &Volatile) -> bool {
        self.volatiles.remove(v)
    }

    /// Confirm a piece of information
    pub fn reveal(&mut self, reveal: Reveal) {
        self.info.reveal(reveal);
    }

    /// Record an estimate, ignored once the category is confirmed
    pub fn estimate(&mut self, estimate: Reveal) -> bool {
        self.info.estimate(estimate)
    }

    /// Record a move seen in play
    pub fn record_move(&mut self, move_name: &str) {
        let id = to_id(move_name);
        if !id.is_empty() && !self.observed_moves.iter().any(|m| to_id(m) == id) {
            self.observed_moves.push(move_name.to_string());
        }
    }

    /// Replace the predicted move list
    pub fn predict_moves<I, S>(&mut self, moves: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicted_moves = moves.into_iter().map(Into::into).collect();
    }

    /// Observed moves first, then predicted ones, without duplicates
    pub fn merged_moves(&self) -> Vec<MoveEntry> {
        let mut seen = BTreeSet::new();
        let observed = self.observed_moves.iter().map(|m| (m, true));
        let predicted = self.predicted_moves.iter().map(|m| (m, false));

        observed
            .chain(predicted)
            .filter(|(name, _)| seen.insert(to_id(name)))
            .map(|(name, confirmed)| MoveEntry {
                name: name.clone(),
                confirmed,
            })
            .collect()
    }

    /// Called when the combatant enters the field
    pub fn on_switch_in(&mut self) {
        self.stages.clear();
        self.volatiles.clear();
        self.seen = true;
    }

    /// Called when the combatant leaves the field
    pub fn on_switch_out(&mut self) {
        self.stages.clear();
        self.volatiles.clear();
    }

    /// Types used for damage, accounting for terastallization
    pub fn battle_types(&self) -> Vec<Type> {
        match (self.terastallized, self.info.tera_type.value()) {
            (true, Some(tera)) => vec![*tera],
            _ => self.types.clone(),
        }
    }

    /// Calculated stats (confirmed or estimated)
    pub fn stats(&self) -> Option<&StatBlock> {
        self.info.stats.value()
    }

    /// Max HP in points, when a stat spread is known or estimated
    pub fn max_hp(&self) -> Option<u32> {
        self.stats().map(|s| s.hp)
    }

    /// Infer hidden speed information from an observed turn order
    ///
    /// `observed_speed` is the effective speed of our active combatant and
    /// `opponent_acted_first` says who moved first with equal priority.
    /// Returns nothing when the order cannot be trusted or tells us nothing new.
    pub fn infer_speed(
        &self,
        observed_speed: u32,
        opponent_acted_first: bool,
        ctx: &InferenceContext,
    ) -> Option<SpeedInference> {
        if self.is_mine() || observed_speed == 0 {
            return None;
        }
        if ctx.own_tailwind || ctx.opposing_tailwind || ctx.trick_room || self.is_paralyzed() {
            return None;
        }

        let stage = self.stages.spe;
        let window = SpeedWindow::for_base(self.base_stats.spe, self.level);
        let effective = |speed: u32| StatStages::apply(speed, stage);

        let mut estimate = self.stats().map_or(window.neutral_max, |s| s.spe);
        if self.info.has_item(CHOICE_SCARF) {
            estimate = estimate * 3 / 2;
        }
        let estimate = effective(estimate);

        // Equal speeds make the order random
        if observed_speed == estimate {
            return None;
        }

        if opponent_acted_first {
            if estimate > observed_speed {
                return None;
            }
            let neutral = effective(window.neutral_max);
            let nature = effective(window.nature_max);
            let scarf = effective(window.scarf_max);
            if [neutral, nature, scarf].contains(&observed_speed) {
                return None;
            }

            if observed_speed < neutral {
                Some(SpeedInference::InvestedSpeed {
                    speed: window.neutral_max,
                })
            } else if observed_speed < nature {
                Some(SpeedInference::SpeedNature {
                    speed: window.nature_max,
                })
            } else if observed_speed < scarf && !self.info.item.is_confirmed() {
                Some(SpeedInference::ChoiceScarf)
            } else {
                None
            }
        } else {
            if estimate < observed_speed {
                return None;
            }
            (effective(window.uninvested) < observed_speed).then_some(
                SpeedInference::UninvestedSpeed {
                    speed: window.uninvested,
                },
            )
        }
    }

    /// Apply an inference to the ledger, returns false if nothing changed
    pub fn apply_inference(&mut self, inference: &SpeedInference) -> bool {
        match inference {
            SpeedInference::ChoiceScarf => self.estimate(Reveal::Item(CHOICE_SCARF.to_string())),
            SpeedInference::InvestedSpeed { speed }
            | SpeedInference::SpeedNature { speed }
            | SpeedInference::UninvestedSpeed { speed } => {
                let Some(mut stats) = self.stats().copied() else {
                    return false;
                };
                if stats.spe == *speed {
                    return false;
                }
                stats.spe = *speed;
                self.estimate(Reveal::Stats(stats))
            }
        }
    }

    pub fn to_active_snapshot(&self) -> ActiveSnapshot {
        let info = (!self.is_mine()).then(|| InfoSnapshot {
            item: self.info.item.to_entry(),
            ability: self.info.ability.to_entry(),
            tera_type: self.info.tera_type.to_entry(),
            moves: self.merged_moves(),
        });

        ActiveSnapshot {
            name: self.name.clone(),
            health: self.health(),
            status: self.status.map(|s| s.to_protocol().to_string()),
            stages: self.stages.non_zero(),
            volatiles: self.volatiles.iter().map(|v| v.to_string()).collect(),
            terastallized: self.terastallized,
            info,
        }
    }

    pub fn to_bench_entry(&self) -> BenchEntry {
        BenchEntry {
            name: self.name.clone(),
            health: self.health(),
            status: self.status.map(|s| s.to_protocol().to_string()),
        }
    }
}

/// Percentage to tenths of a percent, saturating
fn to_tenths(percent: f32) -> i32 {
    (percent * 10.0).round() as i32
}

/// Field state that decides whether an observed order can be trusted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferenceContext {
    /// Tailwind on the inferred combatant's side
    pub own_tailwind: bool,

    /// Tailwind on the observer's side
    pub opposing_tailwind: bool,

    pub trick_room: bool,
}

/// What an observed turn order says about an opposing combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedInference {
    /// Faster than our estimate: at least fully invested
    InvestedSpeed { speed: u32 },

    /// Faster than full investment: runs a speed-boosting nature
    SpeedNature { speed: u32 },

    /// Faster than any natural spread: holds a Choice Scarf
    ChoiceScarf,

    /// Slower than our estimate: no speed investment
    UninvestedSpeed { speed: u32 },
}

impl std::fmt::Display for SpeedInference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeedInference::InvestedSpeed { speed } => {
                write!(f, "speed invested (at least {speed} Spe)")
            }
            SpeedInference::SpeedNature { speed } => {
                write!(f, "speed-boosting nature (about {speed} Spe)")
            }
            SpeedInference::ChoiceScarf => write!(f, "likely holding Choice Scarf"),
            SpeedInference::UninvestedSpeed { speed } => {
                write!(f, "no speed investment (about {speed} Spe)")
            }
        }
    }
}

/// Speed stats a species can reach at a given level
#[derive(Debug, Clone, Copy)]
struct SpeedWindow {
    uninvested: u32,
    neutral_max: u32,
    nature_max: u32,
    scarf_max: u32,
}

impl SpeedWindow {
    fn for_base(base: u32, level: u8) -> Self {
        let uninvested = calculate_stat(Stat::Spe, base, 31, 0, level, Nature::Hardy);
        let neutral_max = calculate_stat(Stat::Spe, base, 31, 252, level, Nature::Hardy);
        let nature_max = calculate_stat(Stat::Spe, base, 31, 252, level, Nature::Timid);
        Self {
            uninvested,
            neutral_max,
            nature_max,
            scarf_max: nature_max * 3 / 2,
        }
    }
}
