//! Showdown team export format
//!
//! ```text
//! Roaring Moon @ Booster Energy
//! Ability: Protosynthesis
//! Tera Type: Flying
//! EVs: 252 Atk / 252 Spe
//! Jolly Nature
//! - Acrobatics
//! - Knock Off
//! ```
//!
//! Members are separated by blank lines.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A value for each of the six stats (EVs or IVs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatLine {
    /// Same value for every stat
    pub const fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Set a stat by its export label ("HP", "Atk", "SpA", ...)
    pub fn set_by_label(&mut self, label: &str, value: u16) -> bool {
        let slot = match label.to_lowercase().as_str() {
            "hp" => &mut self.hp,
            "atk" => &mut self.atk,
            "def" => &mut self.def,
            "spa" => &mut self.spa,
            "spd" => &mut self.spd,
            "spe" => &mut self.spe,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// One team member from an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub species: String,
    pub nickname: Option<String>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub tera_type: Option<String>,
    pub level: Option<u8>,
    pub nature: Option<String>,
    pub evs: StatLine,
    pub ivs: StatLine,
    pub moves: Vec<String>,
}

impl TeamMember {
    fn new(species: String) -> Self {
        Self {
            species,
            nickname: None,
            item: None,
            ability: None,
            tera_type: None,
            level: None,
            nature: None,
            evs: StatLine::uniform(0),
            ivs: StatLine::uniform(31),
            moves: Vec::new(),
        }
    }

    /// Get the display name (nickname if set, otherwise species)
    pub fn name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species)
    }
}

/// Parse a full team export into its members
pub fn parse_team_export(text: &str) -> Result<Vec<TeamMember>> {
    let mut members = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !block.is_empty() {
                members.push(parse_member(&block)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        members.push(parse_member(&block)?);
    }

    if members.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }
    Ok(members)
}

fn parse_member(lines: &[&str]) -> Result<TeamMember> {
    let (header, rest) = lines
        .split_first()
        .ok_or_else(|| ParseError::MissingField("species line".to_string()))?;
    let mut member = parse_header(header)?;

    for line in rest {
        if let Some(mv) = line.strip_prefix('-') {
            let mv = mv.trim();
            if !mv.is_empty() {
                member.moves.push(mv.to_string());
            }
        } else if let Some(ability) = line.strip_prefix("Ability:") {
            member.ability = Some(ability.trim().to_string());
        } else if let Some(tera) = line.strip_prefix("Tera Type:") {
            member.tera_type = Some(tera.trim().to_string());
        } else if let Some(level) = line.strip_prefix("Level:") {
            let level = level
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("invalid level: {line}")))?;
            member.level = Some(level);
        } else if let Some(evs) = line.strip_prefix("EVs:") {
            parse_spread(evs, &mut member.evs)?;
        } else if let Some(ivs) = line.strip_prefix("IVs:") {
            parse_spread(ivs, &mut member.ivs)?;
        } else if let Some(nature) = line.strip_suffix("Nature") {
            member.nature = Some(nature.trim().to_string());
        }
        // Shiny, Happiness, Gender lines don't matter for battle math
    }

    Ok(member)
}

fn parse_header(line: &str) -> Result<TeamMember> {
    let (names, item) = match line.split_once(" @ ") {
        Some((names, item)) => (names.trim(), Some(item.trim().to_string())),
        None => (line.trim(), None),
    };

    // Strip gender marker
    let names = names
        .strip_suffix("(M)")
        .or_else(|| names.strip_suffix("(F)"))
        .unwrap_or(names)
        .trim();

    let (species, nickname) = match names.rfind('(') {
        Some(open) if names.ends_with(')') => {
            let species = names[open + 1..names.len() - 1].trim();
            let nickname = names[..open].trim();
            (species.to_string(), Some(nickname.to_string()).filter(|n| !n.is_empty()))
        }
        _ => (names.to_string(), None),
    };

    if species.is_empty() {
        return Err(ParseError::MissingField("species".to_string()).into());
    }

    let mut member = TeamMember::new(species);
    member.nickname = nickname;
    member.item = item.filter(|i| !i.is_empty());
    Ok(member)
}

fn parse_spread(spec: &str, line: &mut StatLine) -> Result<()> {
    for part in spec.split('/') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (value, label) = part.split_once(' ').ok_or_else(|| {
            ParseError::InvalidFormat(format!("invalid stat spread entry: {part}"))
        })?;
        let value: u16 = value
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("invalid stat value: {part}")))?;
        if !line.set_by_label(label.trim(), value) {
            return Err(ParseError::InvalidFormat(format!("unknown stat: {label}")).into());
        }
    }
    Ok(())
}
