//! Damage-range calculator
//!
//! Integer arithmetic throughout: modifiers are expressed in 4096ths and
//! every step truncates, matching the game's documented behavior.

use scout_protocol::Stat;

use crate::config::CalcConfig;
use crate::reference::{to_id, MoveCategory, MoveData};
use crate::types::{Effectiveness, StatBlock, StatStages, Status, Terrain, Type, Weather};

const X2: u32 = 8192;
const X1_5: u32 = 6144;
const X1_3: u32 = 5325;
const X1_2: u32 = 4915;
const X0_75: u32 = 3072;
const X0_5: u32 = 2048;

/// Random roll band, in percent
const ROLLS: std::ops::RangeInclusive<u32> = 85..=100;

/// Narrow an intermediate result, saturating at the top of the range
fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn apply_modifier(value: u32, modifier: u32) -> u32 {
    saturate(u64::from(value) * u64::from(modifier) / 4096)
}

fn modify(damage: &mut u32, modifier: u32, name: &str, trail: &mut Vec<String>) {
    *damage = apply_modifier(*damage, modifier);
    trail.push(format!("{name} {}", label(modifier)));
}

fn label(modifier: u32) -> String {
    let value = format!("{:.2}", modifier as f32 / 4096.0);
    format!("x{}", value.trim_end_matches('0').trim_end_matches('.'))
}

fn is(name: &Option<String>, id: &str) -> bool {
    name.as_deref().is_some_and(|n| to_id(n) == id)
}

/// Attacking side of a damage calculation
#[derive(Debug, Clone, PartialEq)]
pub struct AttackerSpec {
    pub level: u8,
    pub stats: StatBlock,
    pub stages: StatStages,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub status: Option<Status>,

    /// Original types
    pub types: Vec<Type>,
    pub tera_type: Option<Type>,
    pub terastallized: bool,
}

impl AttackerSpec {
    pub fn new(level: u8, stats: StatBlock, types: Vec<Type>) -> Self {
        Self {
            level,
            stats,
            stages: StatStages::new(),
            item: None,
            ability: None,
            status: None,
            types,
            tera_type: None,
            terastallized: false,
        }
    }

    fn is_grounded(&self) -> bool {
        !battle_types(&self.types, self.tera_type, self.terastallized).contains(&Type::Flying)
            && !is(&self.ability, "levitate")
    }
}

/// Screens protecting the defender's side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Screens {
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
}

/// Defending side of a damage calculation
#[derive(Debug, Clone, PartialEq)]
pub struct DefenderSpec {
    pub stats: StatBlock,
    pub stages: StatStages,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub status: Option<Status>,
    pub types: Vec<Type>,
    pub tera_type: Option<Type>,
    pub terastallized: bool,

    /// Remaining health percentage
    pub health: f32,

    /// Real max HP, when known
    pub max_hp: Option<u32>,

    pub screens: Screens,
}

impl DefenderSpec {
    pub fn new(stats: StatBlock, types: Vec<Type>) -> Self {
        Self {
            max_hp: Some(stats.hp),
            stats,
            stages: StatStages::new(),
            item: None,
            ability: None,
            status: None,
            types,
            tera_type: None,
            terastallized: false,
            health: 100.0,
            screens: Screens::default(),
        }
    }

    fn battle_types(&self) -> Vec<Type> {
        battle_types(&self.types, self.tera_type, self.terastallized)
    }

    fn is_grounded(&self) -> bool {
        !self.battle_types().contains(&Type::Flying) && !is(&self.ability, "levitate")
    }
}

fn battle_types(types: &[Type], tera_type: Option<Type>, terastallized: bool) -> Vec<Type> {
    match (terastallized, tera_type) {
        (true, Some(tera)) => vec![tera],
        _ => types.to_vec(),
    }
}

/// Field conditions relevant to damage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSpec {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
}

/// Per-calculation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOptions {
    pub critical: bool,

    /// Max HP assumed when the defender's is unknown
    pub reference_max_hp: u32,
}

impl Default for DamageOptions {
    fn default() -> Self {
        Self::from_config(&CalcConfig::default())
    }
}

impl DamageOptions {
    pub fn from_config(config: &CalcConfig) -> Self {
        Self {
            critical: false,
            reference_max_hp: config.reference_max_hp,
        }
    }

    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}

/// How a damage range compares with the defender's remaining health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KoOutcome {
    /// Status move, zero power or immunity
    NoDamage,
    /// Even the lowest roll knocks out
    GuaranteedKo,
    /// Some of the 16 rolls knock out
    PossibleKo { ko_rolls: u8 },
    /// Even the highest roll leaves the defender standing
    GuaranteedSurvival,
}

impl std::fmt::Display for KoOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KoOutcome::NoDamage => write!(f, "no damage"),
            KoOutcome::GuaranteedKo => write!(f, "guaranteed KO"),
            KoOutcome::PossibleKo { ko_rolls } => write!(f, "{ko_rolls}/16 chance to KO"),
            KoOutcome::GuaranteedSurvival => write!(f, "survives"),
        }
    }
}

/// Number of hits needed to knock out from current health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitsToKo {
    /// With highest rolls
    pub best: u32,
    /// With lowest rolls
    pub worst: u32,
}

/// Result of a damage calculation
#[derive(Debug, Clone, PartialEq)]
pub struct DamageResult {
    /// Damage for each of the 16 rolls (empty when no damage)
    pub rolls: Vec<u32>,
    pub min: u32,
    pub max: u32,
    pub min_percent: f32,
    pub max_percent: f32,

    /// Max HP the percentages are relative to
    pub max_hp: u32,

    pub effectiveness: Effectiveness,
    pub outcome: KoOutcome,
    pub hits_to_ko: Option<HitsToKo>,

    /// Modifiers applied, in order
    pub modifiers: Vec<String>,
}

impl DamageResult {
    fn no_damage(max_hp: u32, effectiveness: Effectiveness, modifiers: Vec<String>) -> Self {
        Self {
            rolls: Vec::new(),
            min: 0,
            max: 0,
            min_percent: 0.0,
            max_percent: 0.0,
            max_hp,
            effectiveness,
            outcome: KoOutcome::NoDamage,
            hits_to_ko: None,
            modifiers,
        }
    }

    /// Mean damage over every roll, as a percentage of max HP
    pub fn average_percent(&self) -> f32 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let total: u64 = self.rolls.iter().copied().map(u64::from).sum();
        total as f32 * 100.0 / (self.rolls.len() as f32 * self.max_hp as f32)
    }

    pub fn percent_range(&self) -> String {
        format!("{:.1}% - {:.1}%", self.min_percent, self.max_percent)
    }
}

impl std::fmt::Display for DamageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.outcome == KoOutcome::NoDamage {
            return write!(f, "{}", self.outcome);
        }
        write!(
            f,
            "{}-{} ({}) {}",
            self.min,
            self.max,
            self.percent_range(),
            self.outcome
        )
    }
}

/// Calculate the damage range of one move
pub fn calculate_damage(
    attacker: &AttackerSpec,
    defender: &DefenderSpec,
    move_data: &MoveData,
    field: &FieldSpec,
    options: &DamageOptions,
) -> DamageResult {
    let max_hp = defender
        .max_hp
        .filter(|hp| *hp > 0)
        .unwrap_or(options.reference_max_hp)
        .max(1);
    let mut trail = Vec::new();

    if !move_data.is_damaging() {
        return DamageResult::no_damage(max_hp, Effectiveness::NEUTRAL, trail);
    }

    let move_type = move_data.move_type;
    let mut effectiveness = move_type.against_all(&defender.battle_types());
    if move_type == Type::Ground && is(&defender.ability, "levitate") {
        effectiveness = Effectiveness::Immune;
        trail.push("Levitate immunity".to_string());
    }
    if effectiveness.is_immune() {
        return DamageResult::no_damage(max_hp, effectiveness, trail);
    }

    let physical = move_data.category == MoveCategory::Physical;
    let attack = offensive_stat(attacker, physical, options.critical, &mut trail);
    let defense = defensive_stat(defender, physical, options.critical, field, &mut trail);
    let mut damage = base_damage(attacker.level, move_data.power, attack, defense);

    // Same-type attack bonus
    let original_stab = attacker.types.contains(&move_type);
    let tera_stab = attacker.terastallized && attacker.tera_type == Some(move_type);
    if original_stab || tera_stab {
        if (original_stab && tera_stab) || is(&attacker.ability, "adaptability") {
            modify(&mut damage, X2, "STAB", &mut trail);
        } else {
            modify(&mut damage, X1_5, "STAB", &mut trail);
        }
    }

    if effectiveness != Effectiveness::NEUTRAL {
        damage = effectiveness.apply(damage);
        trail.push(format!("Type {effectiveness}"));
    }

    if options.critical {
        modify(&mut damage, X1_5, "Critical", &mut trail);
    }

    match (field.weather, move_type) {
        (Some(Weather::Sun), Type::Fire) | (Some(Weather::Rain), Type::Water) => {
            modify(&mut damage, X1_5, "Weather", &mut trail)
        }
        (Some(Weather::Sun), Type::Water) | (Some(Weather::Rain), Type::Fire) => {
            modify(&mut damage, X0_5, "Weather", &mut trail)
        }
        _ => {}
    }

    match (field.terrain, move_type) {
        (Some(Terrain::Electric), Type::Electric)
        | (Some(Terrain::Grassy), Type::Grass)
        | (Some(Terrain::Psychic), Type::Psychic)
            if attacker.is_grounded() =>
        {
            modify(&mut damage, X1_3, "Terrain", &mut trail)
        }
        (Some(Terrain::Misty), Type::Dragon) if defender.is_grounded() => {
            modify(&mut damage, X0_5, "Misty Terrain", &mut trail)
        }
        _ => {}
    }

    let screens = defender.screens;
    let screened = if physical {
        screens.reflect || screens.aurora_veil
    } else {
        screens.light_screen || screens.aurora_veil
    };
    if screened && !options.critical {
        modify(&mut damage, X0_5, "Screen", &mut trail);
    }

    if physical && attacker.status == Some(Status::Burn) && !is(&attacker.ability, "guts") {
        modify(&mut damage, X0_5, "Burn", &mut trail);
    }

    if is(&attacker.item, "lifeorb") {
        modify(&mut damage, X1_3, "Life Orb", &mut trail);
    }
    if is(&attacker.item, "expertbelt") && effectiveness.is_super_effective() {
        modify(&mut damage, X1_2, "Expert Belt", &mut trail);
    }
    let full_health = defender.health >= 100.0;
    let multiscale = is(&defender.ability, "multiscale") || is(&defender.ability, "shadowshield");
    if full_health && multiscale {
        modify(&mut damage, X0_5, "Multiscale", &mut trail);
    }
    let filters = ["filter", "solidrock", "prismarmor"];
    if effectiveness.is_super_effective() && filters.iter().any(|id| is(&defender.ability, id)) {
        modify(&mut damage, X0_75, "Filter", &mut trail);
    }
    if matches!(move_type, Type::Fire | Type::Ice) && is(&defender.ability, "thickfat") {
        modify(&mut damage, X0_5, "Thick Fat", &mut trail);
    }

    let rolls: Vec<u32> = ROLLS
        .map(|roll| saturate(u64::from(damage) * u64::from(roll) / 100).max(1))
        .collect();
    let min = rolls.iter().copied().min().unwrap_or(0);
    let max = rolls.iter().copied().max().unwrap_or(0);
    let percent = |value: u32| value as f32 * 100.0 / max_hp as f32;

    let health = defender.health.clamp(0.0, 100.0);
    let (min_percent, max_percent) = (percent(min), percent(max));
    let outcome = if min_percent >= health {
        KoOutcome::GuaranteedKo
    } else if max_percent < health {
        KoOutcome::GuaranteedSurvival
    } else {
        let ko_rolls = rolls.iter().filter(|r| percent(**r) >= health).count() as u8;
        KoOutcome::PossibleKo { ko_rolls }
    };

    let remaining = ((health * max_hp as f32 / 100.0).ceil() as u32).max(1);
    let hits_to_ko = Some(HitsToKo {
        best: remaining.div_ceil(max.max(1)),
        worst: remaining.div_ceil(min.max(1)),
    });

    DamageResult {
        rolls,
        min,
        max,
        min_percent,
        max_percent,
        max_hp,
        effectiveness,
        outcome,
        hits_to_ko,
        modifiers: trail,
    }
}

/// Base damage before any modifier
pub fn base_damage(level: u8, power: u16, attack: u32, defense: u32) -> u32 {
    let level_factor = u64::from(level) * 2 / 5 + 2;
    let raw = level_factor * u64::from(power) * u64::from(attack) / u64::from(defense.max(1));
    saturate(raw / 50 + 2)
}

fn offensive_stat(
    attacker: &AttackerSpec,
    physical: bool,
    critical: bool,
    trail: &mut Vec<String>,
) -> u32 {
    let stat = if physical { Stat::Atk } else { Stat::Spa };
    let mut stage = attacker.stages.get(stat);
    if critical && stage < 0 {
        stage = 0;
    }
    let mut value = StatStages::apply(attacker.stats.get(stat), stage);

    let mut boost = |value: &mut u32, modifier: u32, name: &str| {
        *value = apply_modifier(*value, modifier);
        trail.push(format!("{name} {} {stat}", label(modifier)));
    };

    if physical {
        if is(&attacker.item, "choiceband") {
            boost(&mut value, X1_5, "Choice Band");
        }
        if is(&attacker.ability, "hugepower") || is(&attacker.ability, "purepower") {
            boost(&mut value, X2, "Huge Power");
        }
        if is(&attacker.ability, "guts") && attacker.status.is_some() {
            boost(&mut value, X1_5, "Guts");
        }
    } else if is(&attacker.item, "choicespecs") {
        boost(&mut value, X1_5, "Choice Specs");
    }
    value.max(1)
}

fn defensive_stat(
    defender: &DefenderSpec,
    physical: bool,
    critical: bool,
    field: &FieldSpec,
    trail: &mut Vec<String>,
) -> u32 {
    let stat = if physical { Stat::Def } else { Stat::Spd };
    let mut stage = defender.stages.get(stat);
    if critical && stage > 0 {
        stage = 0;
    }
    let mut value = StatStages::apply(defender.stats.get(stat), stage);
    let types = defender.battle_types();

    let mut boost = |value: &mut u32, modifier: u32, name: &str| {
        *value = apply_modifier(*value, modifier);
        trail.push(format!("{name} {} {stat}", label(modifier)));
    };

    if !physical && is(&defender.item, "assaultvest") {
        boost(&mut value, X1_5, "Assault Vest");
    }
    if is(&defender.item, "eviolite") {
        boost(&mut value, X1_5, "Eviolite");
    }
    if physical && is(&defender.ability, "furcoat") {
        boost(&mut value, X2, "Fur Coat");
    }
    if !physical && field.weather == Some(Weather::Sand) && types.contains(&Type::Rock) {
        boost(&mut value, X1_5, "Sandstorm");
    }
    if physical && field.weather == Some(Weather::Snow) && types.contains(&Type::Ice) {
        boost(&mut value, X1_5, "Snow");
    }
    value.max(1)
}
