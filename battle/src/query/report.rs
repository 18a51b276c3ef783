//! Turn reports built from a session and reference data

use std::fmt;

use scout_protocol::{Side, UpdateRequest};

use super::matchup::TypeProfile;
use crate::calc::{calculate_damage, turn_order, DamageResult, KoOutcome, TurnOrderResult};
use crate::reference::{MoveData, ReferenceResolver};
use crate::tracking::{BattleSession, CombatantSeed, NotReady, UpdateSummary};
use crate::types::{CombatantState, SpeedInference};

/// One move's damage against one target
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub move_data: MoveData,

    /// Move data came from the lookup fallback
    pub estimated: bool,

    /// Move was seen in play (not a prediction)
    pub confirmed: bool,

    pub damage: DamageResult,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.confirmed { "" } else { "?" };
        write!(f, "{}{}: {}", self.move_data.name, mark, self.damage)
    }
}

/// Everything worth knowing before choosing an action this turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub turn: u32,
    pub mine: String,
    pub opponent: String,

    /// Order for two equal-priority moves, ours as the attacker
    pub speed: TurnOrderResult,

    /// Our moves against the opponent
    pub my_moves: Vec<MoveReport>,

    /// Opposing moves that threaten our active combatant
    pub threats: Vec<MoveReport>,

    pub inference: Option<SpeedInference>,

    /// The opponent's current defensive types
    pub opponent_types: TypeProfile,

    /// The opponent's defensive types after terastallizing, when its tera type is known
    pub opponent_tera: Option<TypeProfile>,
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Turn {}] {} vs {}", self.turn, self.mine, self.opponent)?;
        writeln!(f, "Speed: {} {}", self.mine, self.speed)?;
        writeln!(f, "Types: {} is {}", self.opponent, self.opponent_types)?;
        if let Some(tera) = &self.opponent_tera {
            let tera_type = tera.types.first().map_or("?", |t| t.as_str());
            writeln!(f, "  after Tera {tera_type}: {tera}")?;
        }

        writeln!(f, "Your moves:")?;
        if self.my_moves.is_empty() {
            writeln!(f, "  (no known moves)")?;
        }
        for report in &self.my_moves {
            writeln!(f, "  {report}")?;
        }

        writeln!(f, "Threats:")?;
        if self.threats.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for report in &self.threats {
            writeln!(f, "  {report}")?;
        }

        if let Some(inference) = &self.inference {
            writeln!(f, "Inference: {} is {}", self.opponent, inference)?;
        }
        Ok(())
    }
}

/// Damage applied by [`TurnAdvisor::apply_with_auto_damage`]
#[derive(Debug, Clone, PartialEq)]
pub struct AutoDamage {
    /// Side that took the damage
    pub target: Side,
    pub move_name: String,

    /// Health percentage removed
    pub percent: f32,
}

/// Best move of one of our creatures against one possible lead
#[derive(Debug, Clone, PartialEq)]
pub struct LeadMatchup {
    pub mine: String,
    pub opponent: String,
    pub speed: TurnOrderResult,

    /// Highest-power damaging move, if any is known
    pub best_move: Option<MoveReport>,
}

impl fmt::Display for LeadMatchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}: {}", self.mine, self.opponent, self.speed)?;
        match &self.best_move {
            Some(report) => write!(f, ", {report}"),
            None => write!(f, ", no damaging moves"),
        }
    }
}

/// Builds reports by combining a session with reference lookups
pub struct TurnAdvisor<'a> {
    resolver: &'a dyn ReferenceResolver,
}

impl<'a> TurnAdvisor<'a> {
    pub fn new(resolver: &'a dyn ReferenceResolver) -> Self {
        Self { resolver }
    }

    /// Damage of one named move between two combatants
    pub fn move_report(
        &self,
        session: &BattleSession,
        attacker: &CombatantState,
        defender: &CombatantState,
        move_name: &str,
        confirmed: bool,
    ) -> MoveReport {
        let resolved = self.resolver.move_data(move_name);
        let damage = calculate_damage(
            &session.attacker_spec_of(attacker),
            &session.defender_spec_of(defender),
            &resolved.value,
            &session.field_spec(),
            &session.damage_options(),
        );
        MoveReport {
            move_data: resolved.value,
            estimated: resolved.estimated,
            confirmed,
            damage,
        }
    }

    /// Build the report for the current turn
    ///
    /// `opponent_acted_first` is the order observed last turn with equal
    /// priority, used for the speed inference line.
    pub fn turn_report(
        &self,
        session: &BattleSession,
        opponent_acted_first: Option<bool>,
    ) -> Result<TurnReport, NotReady> {
        let matchup = session.matchup()?;
        let (mine, opponent) = (matchup.mine, matchup.opponent);

        let speed = turn_order(
            &session.speed_spec_of(mine, 0),
            &session.speed_spec_of(opponent, 0),
            session.field.trick_room,
        );

        let my_moves = mine
            .merged_moves()
            .iter()
            .map(|m| self.move_report(session, mine, opponent, &m.name, m.confirmed))
            .collect();

        let threshold = session.config.threat_threshold;
        let threats = opponent
            .merged_moves()
            .iter()
            .take(session.config.max_opponent_moves)
            .map(|m| self.move_report(session, opponent, mine, &m.name, m.confirmed))
            .filter(|report| {
                report.damage.outcome == KoOutcome::GuaranteedKo
                    || report.damage.min_percent >= threshold
            })
            .collect();

        let ctx = session.inference_context(Side::Opponent);
        let inference = opponent_acted_first
            .and_then(|first| opponent.infer_speed(speed.attacker_speed, first, &ctx));

        Ok(TurnReport {
            turn: session.turn(),
            mine: mine.name.clone(),
            opponent: opponent.name.clone(),
            speed,
            my_moves,
            threats,
            inference,
            opponent_types: TypeProfile::for_combatant(opponent),
            opponent_tera: TypeProfile::after_tera(opponent),
        })
    }

    /// Infer from an observed order and record the result on the opponent
    pub fn infer_and_apply(
        &self,
        session: &mut BattleSession,
        opponent_acted_first: bool,
    ) -> Result<Option<SpeedInference>, NotReady> {
        let observed = session.speed_spec(Side::Mine, 0)?.effective_speed();
        let ctx = session.inference_context(Side::Opponent);
        let opponent = session
            .active_mut(Side::Opponent)
            .ok_or(NotReady { side: Side::Opponent })?;

        let inference = opponent.infer_speed(observed, opponent_acted_first, &ctx);
        if let Some(inference) = &inference
            && opponent.apply_inference(inference)
        {
            tracing::info!(
                name = %opponent.name,
                inference = %inference,
                "Applied speed inference"
            );
        }
        Ok(inference)
    }

    /// Apply an update, filling in damage the update didn't report
    ///
    /// Unseen opposing switch targets are registered from reference data
    /// first. After the update, a move used without a health change on the
    /// other side deals its average damage to that side's active combatant.
    /// Targets that switched this update are skipped.
    pub fn apply_with_auto_damage(
        &self,
        session: &mut BattleSession,
        request: &UpdateRequest,
    ) -> (UpdateSummary, Vec<AutoDamage>) {
        if let Some(name) = &request.opponent.switch_to
            && session.side(Side::Opponent).find(name).is_none()
        {
            let seed = CombatantSeed::from_reference(name, self.resolver, &session.config);
            session.register(Side::Opponent, seed);
        }

        let mut summary = session.apply_update(request);
        let mut applied = Vec::new();

        for attacker_side in Side::BOTH {
            let target = attacker_side.other();
            let Some(move_name) = &request.side(attacker_side).move_used else {
                continue;
            };
            let target_update = request.side(target);
            if target_update.hp_delta.is_some() || target_update.switch_to.is_some() {
                continue;
            }

            let Ok(matchup) = session.matchup() else {
                continue;
            };
            let (attacker, defender) = match attacker_side {
                Side::Mine => (matchup.mine, matchup.opponent),
                Side::Opponent => (matchup.opponent, matchup.mine),
            };
            if defender.is_fainted() {
                continue;
            }

            let report = self.move_report(session, attacker, defender, move_name, true);
            if report.damage.outcome == KoOutcome::NoDamage {
                continue;
            }
            let percent = report.damage.average_percent();

            let Some(defender) = session.active_mut(target) else {
                continue;
            };
            let removed = -defender.apply_health_delta(-percent);
            summary.changes += 1;
            if defender.is_fainted() {
                summary.fainted.push((target, defender.name.clone()));
            }
            tracing::debug!(
                target = %target,
                move_name = %move_name,
                percent = removed,
                "Applied estimated damage"
            );
            applied.push(AutoDamage {
                target,
                move_name: move_name.clone(),
                percent: removed,
            });
        }

        (summary, applied)
    }

    /// Our roster's best move against each candidate lead
    ///
    /// Candidates beyond the configured count are ignored. Candidates not on
    /// the opposing roster are estimated from reference data.
    pub fn lead_matchups(&self, session: &BattleSession, candidates: &[&str]) -> Vec<LeadMatchup> {
        let config = &session.config;
        let opponents: Vec<CombatantState> = candidates
            .iter()
            .take(config.lead_candidates)
            .map(|name| {
                let side = session.side(Side::Opponent);
                match side.find(name) {
                    Some(index) => side.roster[index].clone(),
                    None => CombatantSeed::from_reference(name, self.resolver, config)
                        .into_combatant(Side::Opponent),
                }
            })
            .collect();

        let mut matchups = Vec::new();
        for mine in session.side(Side::Mine).roster.iter().filter(|c| c.is_alive()) {
            for opponent in &opponents {
                let speed = turn_order(
                    &session.speed_spec_of(mine, 0),
                    &session.speed_spec_of(opponent, 0),
                    session.field.trick_room,
                );
                let best_move = self
                    .strongest_move(mine)
                    .map(|name| self.move_report(session, mine, opponent, &name, true));

                matchups.push(LeadMatchup {
                    mine: mine.name.clone(),
                    opponent: opponent.name.clone(),
                    speed,
                    best_move,
                });
            }
        }
        matchups
    }

    fn strongest_move(&self, combatant: &CombatantState) -> Option<String> {
        combatant
            .merged_moves()
            .into_iter()
            .map(|m| self.resolver.move_data(&m.name).value)
            .filter(MoveData::is_damaging)
            .max_by_key(|m| m.power)
            .map(|m| m.name)
    }
}
