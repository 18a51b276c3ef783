//! Domain types for battle state tracking

mod combatant;
mod conditions;
mod field;
mod ledger;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use combatant::{CombatantState, InferenceContext, SpeedInference};
pub use conditions::{is_clear_value, SideCondition, SideConditionState, Terrain, Weather};
pub use field::FieldState;
pub use ledger::{InfoLedger, Known, Reveal};
pub use pokemon_type::{Effectiveness, Type};
pub use side::SideState;
pub use stats::{calculate_hp, calculate_stat, calculate_stats, Nature, StatBlock, StatStages};
pub use status::{Status, Volatile};
