//! Built-in reference entries for common competitive creatures and moves

use super::MoveCategory::{self, Physical, Special, Status};
use crate::types::Type::{self, *};

/// (name, [hp, atk, def, spa, spd, spe], types)
pub(super) static CREATURES: &[(&str, [u32; 6], &[Type])] = &[
    ("Amoonguss", [114, 85, 70, 85, 80, 30], &[Grass, Poison]),
    ("Calyrex-Shadow", [100, 85, 80, 165, 100, 150], &[Psychic, Ghost]),
    ("Charizard", [78, 84, 78, 109, 85, 100], &[Fire, Flying]),
    ("Chi-Yu", [55, 80, 80, 135, 120, 100], &[Dark, Fire]),
    ("Chien-Pao", [80, 120, 80, 90, 65, 135], &[Dark, Ice]),
    ("Dondozo", [150, 100, 115, 65, 65, 35], &[Water]),
    ("Dragonite", [91, 134, 95, 100, 100, 80], &[Dragon, Flying]),
    ("Farigiraf", [120, 90, 70, 110, 70, 60], &[Normal, Psychic]),
    ("Flutter Mane", [55, 55, 55, 135, 135, 135], &[Ghost, Fairy]),
    ("Garchomp", [108, 130, 95, 80, 85, 102], &[Dragon, Ground]),
    ("Gholdengo", [87, 60, 95, 133, 91, 84], &[Steel, Ghost]),
    ("Great Tusk", [115, 131, 131, 53, 53, 87], &[Ground, Fighting]),
    ("Incineroar", [95, 115, 90, 80, 90, 60], &[Fire, Dark]),
    ("Indeedee-F", [70, 55, 65, 95, 105, 85], &[Psychic, Normal]),
    ("Iron Bundle", [56, 80, 114, 124, 60, 136], &[Ice, Water]),
    ("Iron Hands", [154, 140, 108, 50, 68, 50], &[Fighting, Electric]),
    ("Kingambit", [100, 135, 120, 60, 85, 50], &[Dark, Steel]),
    ("Koraidon", [100, 135, 115, 85, 100, 135], &[Fighting, Dragon]),
    ("Landorus", [89, 125, 90, 115, 80, 101], &[Ground, Flying]),
    ("Landorus-Therian", [89, 145, 90, 105, 80, 91], &[Ground, Flying]),
    ("Miraidon", [100, 85, 100, 135, 115, 135], &[Electric, Dragon]),
    ("Pelipper", [60, 50, 100, 95, 70, 65], &[Water, Flying]),
    ("Pikachu", [35, 55, 40, 50, 50, 90], &[Electric]),
    ("Raging Bolt", [125, 73, 91, 137, 89, 75], &[Electric, Dragon]),
    ("Rillaboom", [100, 125, 90, 60, 70, 85], &[Grass]),
    ("Roaring Moon", [105, 139, 71, 55, 101, 119], &[Dragon, Dark]),
    ("Torkoal", [70, 85, 140, 85, 70, 20], &[Fire]),
    ("Tornadus", [79, 115, 70, 125, 80, 111], &[Flying]),
    ("Urshifu", [100, 130, 100, 63, 60, 97], &[Fighting, Dark]),
    ("Urshifu-Rapid-Strike", [100, 130, 100, 63, 60, 97], &[Fighting, Water]),
    ("Zacian-Crowned", [92, 150, 115, 80, 115, 148], &[Fairy, Steel]),
];

/// (name, power, type, category, priority)
pub(super) static MOVES: &[(&str, u16, Type, MoveCategory, i8)] = &[
    ("Acrobatics", 55, Flying, Physical, 0),
    ("Aqua Jet", 40, Water, Physical, 1),
    ("Astral Barrage", 120, Ghost, Special, 0),
    ("Behemoth Blade", 100, Steel, Physical, 0),
    ("Body Press", 80, Fighting, Physical, 0),
    ("Clear Smog", 50, Poison, Special, 0),
    ("Close Combat", 120, Fighting, Physical, 0),
    ("Collision Course", 100, Fighting, Physical, 0),
    ("Dazzling Gleam", 80, Fairy, Special, 0),
    ("Detect", 0, Fighting, Status, 4),
    ("Draco Meteor", 130, Dragon, Special, 0),
    ("Dragon Claw", 80, Dragon, Physical, 0),
    ("Dragon Dance", 0, Dragon, Status, 0),
    ("Drain Punch", 75, Fighting, Physical, 0),
    ("Earth Power", 90, Ground, Special, 0),
    ("Earthquake", 100, Ground, Physical, 0),
    ("Electro Drift", 100, Electric, Special, 0),
    ("Extreme Speed", 80, Normal, Physical, 2),
    ("Fake Out", 40, Normal, Physical, 3),
    ("Flamethrower", 90, Fire, Special, 0),
    ("Flare Blitz", 120, Fire, Physical, 0),
    ("Grassy Glide", 55, Grass, Physical, 0),
    ("Headlong Rush", 120, Ground, Physical, 0),
    ("Heat Wave", 95, Fire, Special, 0),
    ("Hydro Pump", 110, Water, Special, 0),
    ("Ice Beam", 90, Ice, Special, 0),
    ("Ice Spinner", 80, Ice, Physical, 0),
    ("Icicle Crash", 85, Ice, Physical, 0),
    ("Iron Head", 80, Steel, Physical, 0),
    ("Knock Off", 65, Dark, Physical, 0),
    ("Kowtow Cleave", 85, Dark, Physical, 0),
    ("Make It Rain", 120, Steel, Special, 0),
    ("Moonblast", 95, Fairy, Special, 0),
    ("Overheat", 130, Fire, Special, 0),
    ("Parting Shot", 0, Dark, Status, 0),
    ("Pollen Puff", 90, Bug, Special, 0),
    ("Protect", 0, Normal, Status, 4),
    ("Psychic", 90, Psychic, Special, 0),
    ("Quick Attack", 40, Normal, Physical, 1),
    ("Rage Powder", 0, Bug, Status, 2),
    ("Shadow Ball", 80, Ghost, Special, 0),
    ("Sludge Bomb", 90, Poison, Special, 0),
    ("Spore", 0, Grass, Status, 0),
    ("Substitute", 0, Normal, Status, 0),
    ("Sucker Punch", 70, Dark, Physical, 1),
    ("Surging Strikes", 25, Water, Physical, 0),
    ("Swords Dance", 0, Normal, Status, 0),
    ("Tackle", 40, Normal, Physical, 0),
    ("Tailwind", 0, Flying, Status, 0),
    ("Thunder Wave", 0, Electric, Status, 0),
    ("Thunderbolt", 90, Electric, Special, 0),
    ("Thunderclap", 70, Electric, Special, 1),
    ("Trick", 0, Psychic, Status, 0),
    ("Trick Room", 0, Psychic, Status, -7),
    ("Wave Crash", 120, Water, Physical, 0),
    ("Wicked Blow", 75, Dark, Physical, 0),
    ("Wild Charge", 90, Electric, Physical, 0),
    ("Will-O-Wisp", 0, Fire, Status, 0),
    ("Wood Hammer", 120, Grass, Physical, 0),
];
