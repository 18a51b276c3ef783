//! Sparse update requests produced by the external event parser
//!
//! Every field is optional. An absent field means "no change", never
//! "reset to default". Unknown keys are rejected when the request is
//! deserialized so that a typo in the parser's output surfaces as an error
//! instead of a silently dropped change.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::common::{Side, Stat};
use crate::ParseError;

/// Status values that mean "cure the current status"
const CLEAR_STATUS: [&str; 4] = ["", "none", "clear", "cured"];

/// Changes observed during one exchange of turns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateRequest {
    /// Changes on our side
    pub mine: SideUpdate,

    /// Changes on the opponent's side
    pub opponent: SideUpdate,

    /// Global field changes
    pub field: FieldUpdate,

    /// Whether the turn ended with this update
    pub turn_end: bool,
}

impl UpdateRequest {
    /// Get the update for one side
    pub fn side(&self, side: Side) -> &SideUpdate {
        match side {
            Side::Mine => &self.mine,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get the update for one side mutably
    pub fn side_mut(&mut self, side: Side) -> &mut SideUpdate {
        match side {
            Side::Mine => &mut self.mine,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Check if applying this request would change nothing
    pub fn is_empty(&self) -> bool {
        self.mine.is_empty() && self.opponent.is_empty() && self.field.is_empty() && !self.turn_end
    }
}

/// Changes observed for one side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideUpdate {
    /// Creature sent in
    pub switch_to: Option<String>,

    /// Signed change to the active creature's health percentage
    pub hp_delta: Option<f32>,

    /// Stage changes keyed by stat
    pub stages: BTreeMap<Stat, i8>,

    /// New permanent status ("par", "brn", ...), or "none" to cure it
    pub status: Option<String>,

    /// Volatile conditions that started
    pub volatiles_start: Vec<String>,

    /// Volatile conditions that ended
    pub volatiles_end: Vec<String>,

    pub tailwind: Option<bool>,
    pub reflect: Option<bool>,
    pub light_screen: Option<bool>,
    pub aurora_veil: Option<bool>,

    /// Entry hazards laid on this side
    pub hazards_set: Vec<String>,

    /// Entry hazards removed from this side
    pub hazards_cleared: Vec<String>,

    /// Held item revealed by an observed event
    pub item: Option<String>,

    /// Ability revealed by an observed event
    pub ability: Option<String>,

    /// Tera type revealed by terastallization
    pub tera_type: Option<String>,

    /// Move the active creature used
    pub move_used: Option<String>,

    /// Whether the active creature is terastallized
    pub terastallized: Option<bool>,
}

/// A change to the permanent status condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange<'a> {
    Clear,
    Set(&'a str),
}

impl SideUpdate {
    /// Interpret the status field
    pub fn status_change(&self) -> Option<StatusChange<'_>> {
        let status = self.status.as_deref()?;
        let trimmed = status.trim();
        if CLEAR_STATUS.contains(&trimmed.to_lowercase().as_str()) {
            Some(StatusChange::Clear)
        } else {
            Some(StatusChange::Set(trimmed))
        }
    }

    /// Check if this update carries no change
    pub fn is_empty(&self) -> bool {
        *self == SideUpdate::default()
    }
}

/// Changes to global field conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldUpdate {
    /// New weather, or "none" to clear it
    pub weather: Option<String>,

    /// New terrain, or "none" to clear it
    pub terrain: Option<String>,

    pub trick_room: Option<bool>,
}

impl FieldUpdate {
    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.terrain.is_none() && self.trick_room.is_none()
    }
}

/// Parse an update request from parser output
///
/// Accepts bare JSON or JSON wrapped in a markdown code fence.
pub fn parse_update_request(input: &str) -> Result<UpdateRequest> {
    let body = strip_code_fence(input);
    if body.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }
    if !body.starts_with('{') {
        let message = "update request must be a JSON object".to_string();
        return Err(ParseError::InvalidFormat(message).into());
    }

    serde_json::from_str(body).context("Failed to decode update request")
}

fn strip_code_fence(input: &str) -> &str {
    let trimmed = input.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line ("```json")
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
