//! Creature types and the effectiveness chart

use serde::{Deserialize, Serialize};

/// Creature types (18 types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Effectiveness of this attacking type against one defending type
    pub fn against(&self, defender: Type) -> Effectiveness {
        match TYPE_CHART[*self as usize][defender as usize] {
            X => Effectiveness::Immune,
            H => Effectiveness::Scaled(-1),
            S => Effectiveness::Scaled(1),
            _ => Effectiveness::NEUTRAL,
        }
    }

    /// Combined effectiveness against every defending type
    pub fn against_all(&self, defenders: &[Type]) -> Effectiveness {
        defenders
            .iter()
            .fold(Effectiveness::NEUTRAL, |acc, t| acc.combine(self.against(*t)))
    }

    /// Parse a type name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().to_lowercase() == wanted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type effectiveness as a count of doublings (or halvings)
///
/// `Scaled(1)` is 2x, `Scaled(-2)` is 0.25x. Integer steps keep damage
/// arithmetic exact: a doubling is a shift, a halving a truncating shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Immune,
    Scaled(i8),
}

impl Effectiveness {
    pub const NEUTRAL: Effectiveness = Effectiveness::Scaled(0);

    pub fn combine(self, other: Effectiveness) -> Effectiveness {
        match (self, other) {
            (Effectiveness::Scaled(a), Effectiveness::Scaled(b)) => Effectiveness::Scaled(a + b),
            _ => Effectiveness::Immune,
        }
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Scaled(steps) => 2f32.powi(*steps as i32),
        }
    }

    /// Apply to a damage value, truncating on halvings
    pub fn apply(&self, damage: u32) -> u32 {
        match *self {
            Effectiveness::Immune => 0,
            Effectiveness::Scaled(steps) if steps >= 0 => damage.saturating_mul(1 << steps.min(8)),
            Effectiveness::Scaled(steps) => damage >> (-steps).min(31),
        }
    }

    pub fn is_immune(&self) -> bool {
        matches!(self, Effectiveness::Immune)
    }

    pub fn is_super_effective(&self) -> bool {
        matches!(self, Effectiveness::Scaled(steps) if *steps > 0)
    }

    pub fn is_resisted(&self) -> bool {
        matches!(self, Effectiveness::Scaled(steps) if *steps < 0)
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

const X: u8 = 0; // immune
const H: u8 = 1; // halved
const N: u8 = 2; // neutral
const S: u8 = 3; // doubled

/// 18x18 effectiveness chart
/// Row = attacking type, Column = defending type
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static TYPE_CHART: [[u8; 18]; 18] = [
    // Normal
    [N, N, N, N, N, N, N, N, N, N, N, N, H, X, N, N, H, N],
    // Fire
    [N, H, H, N, S, S, N, N, N, N, N, S, H, N, H, N, S, N],
    // Water
    [N, S, H, N, H, N, N, N, S, N, N, N, S, N, H, N, N, N],
    // Electric
    [N, N, S, H, H, N, N, N, X, S, N, N, N, N, H, N, N, N],
    // Grass
    [N, H, S, N, H, N, N, H, S, H, N, H, S, N, H, N, H, N],
    // Ice
    [N, H, H, N, S, H, N, N, S, S, N, N, N, N, S, N, H, N],
    // Fighting
    [S, N, N, N, N, S, N, H, N, H, H, H, S, X, N, S, S, H],
    // Poison
    [N, N, N, N, S, N, N, H, H, N, N, N, H, H, N, N, X, S],
    // Ground
    [N, S, N, S, H, N, N, S, N, X, N, H, S, N, N, N, S, N],
    // Flying
    [N, N, N, H, S, N, S, N, N, N, N, S, H, N, N, N, H, N],
    // Psychic
    [N, N, N, N, N, N, S, S, N, N, H, N, N, N, N, X, H, N],
    // Bug
    [N, H, N, N, S, N, H, H, N, H, S, N, N, H, N, S, H, H],
    // Rock
    [N, S, N, N, N, S, H, N, H, S, N, S, N, N, N, N, H, N],
    // Ghost
    [X, N, N, N, N, N, N, N, N, N, S, N, N, S, N, H, N, N],
    // Dragon
    [N, N, N, N, N, N, N, N, N, N, N, N, N, N, S, N, H, X],
    // Dark
    [N, N, N, N, N, N, H, N, N, N, S, N, N, S, N, H, N, H],
    // Steel
    [N, H, H, H, N, S, N, N, N, N, N, N, S, N, N, N, H, S],
    // Fairy
    [N, H, N, N, N, N, S, H, N, N, N, N, N, N, S, S, H, N],
];
