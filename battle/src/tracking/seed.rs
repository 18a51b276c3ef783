//! Registration data for new roster entries

use scout_protocol::{Side, TeamMember};

use crate::config::CalcConfig;
use crate::reference::ReferenceResolver;
use crate::types::{calculate_stats, CombatantState, Nature, Reveal, StatBlock, Type};

/// Everything known about a combatant when it joins a roster
///
/// On our side every value is confirmed. On the opponent's side the values
/// are estimates and the moves are predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantSeed {
    pub name: String,
    pub species: String,
    pub level: u8,
    pub base_stats: StatBlock,
    pub types: Vec<Type>,

    /// Calculated stats, when known or estimated
    pub stats: Option<StatBlock>,

    pub item: Option<String>,
    pub ability: Option<String>,
    pub tera_type: Option<Type>,
    pub moves: Vec<String>,

    /// Base stats came from the estimation fallback
    pub estimated_base: bool,
}

impl CombatantSeed {
    pub fn new(name: impl Into<String>, base_stats: StatBlock, types: Vec<Type>) -> Self {
        let name = name.into();
        Self {
            species: name.clone(),
            name,
            level: 50,
            base_stats,
            types,
            stats: None,
            item: None,
            ability: None,
            tera_type: None,
            moves: Vec::new(),
            estimated_base: false,
        }
    }

    /// Seed an unseen creature from reference data and the estimate spread
    pub fn from_reference(
        name: &str,
        resolver: &dyn ReferenceResolver,
        config: &CalcConfig,
    ) -> Self {
        let creature = resolver.creature(name);
        let stats = resolver.estimate_stats(name, config.level, config);

        Self {
            level: config.level,
            stats: Some(stats.value),
            estimated_base: creature.estimated,
            ..Self::new(name, creature.value.base_stats, creature.value.types)
        }
    }

    /// Seed one of our own creatures from a team export entry
    pub fn from_team_member(
        member: &TeamMember,
        resolver: &dyn ReferenceResolver,
        config: &CalcConfig,
    ) -> Self {
        let creature = resolver.creature(&member.species);
        let level = member.level.unwrap_or(config.level);
        let nature = member
            .nature
            .as_deref()
            .and_then(Nature::parse)
            .unwrap_or_default();
        let base = &creature.value.base_stats;
        let stats = calculate_stats(base, &member.ivs, &member.evs, level, nature);

        let tera_type = member.tera_type.as_deref().and_then(Type::parse);
        if member.tera_type.is_some() && tera_type.is_none() {
            tracing::warn!(
                creature = member.name(),
                tera_type = ?member.tera_type,
                "Unknown tera type"
            );
        }

        Self {
            name: member.name().to_string(),
            species: member.species.clone(),
            level,
            base_stats: creature.value.base_stats,
            types: creature.value.types,
            stats: Some(stats),
            item: member.item.clone(),
            ability: member.ability.clone(),
            tera_type,
            moves: member.moves.clone(),
            estimated_base: creature.estimated,
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Build the roster entry for a side
    pub fn into_combatant(self, side: Side) -> CombatantState {
        let mut combatant = CombatantState::new(side, self.name, self.base_stats, self.types);
        combatant.species = self.species;
        combatant.level = self.level;

        let mut facts = Vec::new();
        if let Some(stats) = self.stats {
            facts.push(Reveal::Stats(stats));
        }
        if let Some(item) = self.item {
            facts.push(Reveal::Item(item));
        }
        if let Some(ability) = self.ability {
            facts.push(Reveal::Ability(ability));
        }
        if let Some(tera) = self.tera_type {
            facts.push(Reveal::TeraType(tera));
        }

        match side {
            Side::Mine => {
                for fact in facts {
                    combatant.reveal(fact);
                }
                // Our own export lists everything the creature holds
                combatant.info.confirm_absent();
                for mv in &self.moves {
                    combatant.record_move(mv);
                }
            }
            Side::Opponent => {
                for fact in facts {
                    combatant.estimate(fact);
                }
                combatant.predict_moves(self.moves);
            }
        }
        combatant
    }
}
