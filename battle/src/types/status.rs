//! Status conditions (volatile and non-volatile)

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Parse from a short code ("brn", "par") or a full name ("paralysis")
    pub fn from_protocol(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "brn" | "burn" | "burned" => Some(Status::Burn),
            "frz" | "freeze" | "frozen" => Some(Status::Freeze),
            "par" | "paralysis" | "paralyzed" => Some(Status::Paralysis),
            "psn" | "poison" | "poisoned" => Some(Status::Poison),
            "tox" | "toxic" | "badpoison" | "badlypoisoned" => Some(Status::BadPoison),
            "slp" | "sleep" | "asleep" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Short code used in snapshots
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::BadPoison => "tox",
            Status::Sleep => "slp",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Volatile status conditions (cleared on switching)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Volatile {
    Confusion,
    Taunt,
    Encore,
    Disable,
    Torment,
    Infatuation,
    Trapped,
    PartialTrap,
    LeechSeed,
    Curse,
    PerishSong,
    Yawn,
    Substitute,
    Protect,
    Flinch,
    FocusEnergy,
    Charging,
    Recharging,
    HelpingHand,
    CenterOfAttention, // Follow Me/Rage Powder
    SaltCure,
    Roost,

    /// Anything not modelled above, kept by name
    Other(String),
}

impl Volatile {
    /// Parse from an event string
    pub fn from_protocol(s: &str) -> Self {
        let clean = s
            .strip_prefix("move: ")
            .or_else(|| s.strip_prefix("ability: "))
            .unwrap_or(s)
            .trim();

        let normalized = clean.to_lowercase().replace([' ', '-', '\''], "");

        match normalized.as_str() {
            "confusion" | "confused" => Volatile::Confusion,
            "taunt" => Volatile::Taunt,
            "encore" => Volatile::Encore,
            "disable" | "disabled" => Volatile::Disable,
            "torment" => Volatile::Torment,
            "attract" | "infatuation" => Volatile::Infatuation,
            "trapped" | "meanlook" | "spiderweb" | "block" => Volatile::Trapped,
            "partialtrap" | "bind" | "wrap" | "firespin" | "whirlpool" | "sandtomb"
            | "magmastorm" | "infestation" => Volatile::PartialTrap,
            "leechseed" => Volatile::LeechSeed,
            "curse" => Volatile::Curse,
            "perishsong" | "perish3" | "perish2" | "perish1" => Volatile::PerishSong,
            "yawn" => Volatile::Yawn,
            "substitute" => Volatile::Substitute,
            "protect" | "detect" | "kingsshield" | "spikyshield" | "banefulbunker"
            | "silktrap" | "burningbulwark" => Volatile::Protect,
            "flinch" => Volatile::Flinch,
            "focusenergy" => Volatile::FocusEnergy,
            "twoturnmove" | "charging" | "solarbeam" | "meteorbeam" | "electroshot" => {
                Volatile::Charging
            }
            "mustrecharge" | "recharging" => Volatile::Recharging,
            "helpinghand" => Volatile::HelpingHand,
            "followme" | "ragepowder" | "centerofattention" | "spotlight" => {
                Volatile::CenterOfAttention
            }
            "saltcure" => Volatile::SaltCure,
            "roost" => Volatile::Roost,
            _ => Volatile::Other(clean.to_string()),
        }
    }

    /// Check if this is a known volatile (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Volatile::Other(_))
    }

    /// Get display name
    pub fn as_str(&self) -> &str {
        match self {
            Volatile::Confusion => "Confusion",
            Volatile::Taunt => "Taunt",
            Volatile::Encore => "Encore",
            Volatile::Disable => "Disable",
            Volatile::Torment => "Torment",
            Volatile::Infatuation => "Infatuation",
            Volatile::Trapped => "Trapped",
            Volatile::PartialTrap => "Partial Trap",
            Volatile::LeechSeed => "Leech Seed",
            Volatile::Curse => "Curse",
            Volatile::PerishSong => "Perish Song",
            Volatile::Yawn => "Yawn",
            Volatile::Substitute => "Substitute",
            Volatile::Protect => "Protect",
            Volatile::Flinch => "Flinch",
            Volatile::FocusEnergy => "Focus Energy",
            Volatile::Charging => "Charging",
            Volatile::Recharging => "Recharging",
            Volatile::HelpingHand => "Helping Hand",
            Volatile::CenterOfAttention => "Center of Attention",
            Volatile::SaltCure => "Salt Cure",
            Volatile::Roost => "Roost",
            Volatile::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("par"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("Paralysis"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("Badly Poisoned"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("slp"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("fnt"), None);
        assert_eq!(Status::from_protocol("unknown"), None);
    }

    #[test]
    fn test_status_to_protocol() {
        assert_eq!(Status::Burn.to_protocol(), "brn");
        assert_eq!(Status::BadPoison.to_protocol(), "tox");
    }

    #[test]
    fn test_volatile_from_protocol_basic() {
        assert_eq!(Volatile::from_protocol("confusion"), Volatile::Confusion);
        assert_eq!(Volatile::from_protocol("Confusion"), Volatile::Confusion);
        assert_eq!(Volatile::from_protocol("Leech Seed"), Volatile::LeechSeed);
        assert_eq!(Volatile::from_protocol("substitute"), Volatile::Substitute);
    }

    #[test]
    fn test_volatile_from_protocol_with_prefix() {
        assert_eq!(Volatile::from_protocol("move: Taunt"), Volatile::Taunt);
        assert_eq!(Volatile::from_protocol("move: Rage Powder"), Volatile::CenterOfAttention);
    }

    #[test]
    fn test_volatile_from_protocol_unknown() {
        let v = Volatile::from_protocol("Quark Drive");
        assert_eq!(v, Volatile::Other("Quark Drive".to_string()));
        assert!(!v.is_known());
        assert_eq!(v.as_str(), "Quark Drive");
    }

    #[test]
    fn test_volatile_protect_variants() {
        assert_eq!(Volatile::from_protocol("protect"), Volatile::Protect);
        assert_eq!(Volatile::from_protocol("detect"), Volatile::Protect);
        assert_eq!(Volatile::from_protocol("King's Shield"), Volatile::Protect);
        assert_eq!(Volatile::from_protocol("spikyshield"), Volatile::Protect);
    }
}
