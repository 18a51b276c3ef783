//! Read-only battle snapshots handed to the presentation layer
//!
//! A snapshot is a structured description of the tracked state. Its
//! [`Display`](std::fmt::Display) rendering is the plain-text context block
//! consumed as prompt input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Side, Stat};

/// State of the whole battle at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    /// Current turn number (starts at 1)
    pub turn: u32,

    /// Whether both sides have an active creature
    pub ready: bool,

    pub field: FieldSnapshot,
    pub mine: SideSnapshot,
    pub opponent: SideSnapshot,
}

impl BattleSnapshot {
    pub fn side(&self, side: Side) -> &SideSnapshot {
        match side {
            Side::Mine => &self.mine,
            Side::Opponent => &self.opponent,
        }
    }
}

/// Global field conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub weather: Option<String>,
    pub terrain: Option<String>,
    pub trick_room: bool,
}

/// One side's roster and conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideSnapshot {
    pub side: Side,

    /// Creature currently on the field
    pub active: Option<ActiveSnapshot>,

    /// Benched creatures that can still battle
    pub bench: Vec<BenchEntry>,

    /// Roster members that have fainted
    pub fainted: Vec<String>,

    /// Roster members not yet seen in play
    pub unseen: Vec<String>,

    /// Side conditions ("Tailwind", "Spikes x2", ...)
    pub conditions: Vec<String>,
}

/// The active creature on one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub name: String,

    /// Remaining health percentage
    pub health: f32,

    pub status: Option<String>,

    /// Non-zero stat stages
    pub stages: BTreeMap<Stat, i8>,

    pub volatiles: Vec<String>,

    pub terastallized: bool,

    /// Confidence ledger, only reported for the opponent
    pub info: Option<InfoSnapshot>,
}

/// A benched creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchEntry {
    pub name: String,
    pub health: f32,
    pub status: Option<String>,
}

/// Known and predicted information about an opposing creature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSnapshot {
    pub item: InfoEntry,
    pub ability: InfoEntry,
    pub tera_type: InfoEntry,

    /// Observed moves first, then predicted ones
    pub moves: Vec<MoveEntry>,
}

/// A value with its confidence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub value: Option<String>,
    pub confirmed: bool,
}

impl InfoEntry {
    fn label(&self) -> String {
        match (&self.value, self.confirmed) {
            (Some(value), true) => format!("{value} (confirmed)"),
            (Some(value), false) => format!("{value} (predicted)"),
            (None, true) => "none (confirmed)".to_string(),
            (None, false) => "unknown".to_string(),
        }
    }
}

/// A move with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub name: String,
    pub confirmed: bool,
}

impl fmt::Display for BattleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Turn {}]", self.turn)?;
        writeln!(f, "{}", self.field)?;
        write!(f, "{}", self.mine)?;
        write!(f, "{}", self.opponent)
    }
}

impl fmt::Display for FieldSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut effects = Vec::new();
        if let Some(weather) = &self.weather {
            effects.push(format!("Weather: {weather}"));
        }
        if let Some(terrain) = &self.terrain {
            effects.push(format!("Terrain: {terrain}"));
        }
        if self.trick_room {
            effects.push("Trick Room".to_string());
        }

        if effects.is_empty() {
            write!(f, "[Field] clear")
        } else {
            write!(f, "[Field] {}", effects.join(", "))
        }
    }
}

impl fmt::Display for SideSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.active {
            Some(active) => writeln!(f, "[{} Active] {}", self.side, active)?,
            None => writeln!(f, "[{} Active] (none)", self.side)?,
        }

        if !self.conditions.is_empty() {
            writeln!(f, "  Side: {}", self.conditions.join(", "))?;
        }

        if let Some(info) = self.active.as_ref().and_then(|a| a.info.as_ref()) {
            writeln!(f, "  Item: {}", info.item.label())?;
            writeln!(f, "  Ability: {}", info.ability.label())?;
            writeln!(f, "  Tera: {}", info.tera_type.label())?;
            if !info.moves.is_empty() {
                let moves: Vec<String> = info
                    .moves
                    .iter()
                    .map(|m| if m.confirmed { m.name.clone() } else { format!("{}?", m.name) })
                    .collect();
                writeln!(f, "  Moves: {}", moves.join(", "))?;
            }
        }

        let bench: Vec<String> = self
            .bench
            .iter()
            .map(|b| match &b.status {
                Some(status) => format!("{} {:.0}% {}", b.name, b.health, status),
                None => format!("{} {:.0}%", b.name, b.health),
            })
            .collect();
        writeln!(
            f,
            "  Bench: {}",
            if bench.is_empty() { "-".to_string() } else { bench.join(", ") }
        )?;

        if !self.fainted.is_empty() {
            writeln!(f, "  Fainted: {}", self.fainted.join(", "))?;
        }
        if !self.unseen.is_empty() {
            let unseen = self.unseen.join(", ");
            writeln!(f, "  Unseen: {unseen} ({} unconfirmed)", self.unseen.len())?;
        }
        Ok(())
    }
}

impl fmt::Display for ActiveSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}%", self.name, self.health)?;
        if let Some(status) = &self.status {
            write!(f, " [{status}]")?;
        }
        if self.terastallized {
            write!(f, " [Tera]")?;
        }
        if !self.stages.is_empty() {
            let stages: Vec<String> = self
                .stages
                .iter()
                .map(|(stat, stage)| format!("{stat}{stage:+}"))
                .collect();
            write!(f, " ({})", stages.join(" "))?;
        }
        if !self.volatiles.is_empty() {
            write!(f, " {{{}}}", self.volatiles.join(", "))?;
        }
        Ok(())
    }
}
