//! Outcome calculators
//!
//! Pure functions over fully resolved numeric specs. Nothing here touches
//! the session or performs lookups.

mod damage;
mod speed;

pub use damage::{
    base_damage, calculate_damage, AttackerSpec, DamageOptions, DamageResult, DefenderSpec,
    FieldSpec, HitsToKo, KoOutcome, Screens,
};
pub use speed::{turn_order, OrderReason, SpeedSpec, TurnOrder, TurnOrderResult};
