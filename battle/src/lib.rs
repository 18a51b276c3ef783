//! Battle state tracking and outcome calculators for two-sided creature battles.
//!
//! This crate keeps the evolving state of a battle as the user reports it and
//! computes deterministic ranges for proposed actions: who moves first, and
//! how much a move can deal under the current field.
//!
//! # Overview
//!
//! `scout-battle` sits between `scout-protocol` (boundary contracts) and the
//! presentation layer:
//!
//! ```text
//! scout-protocol (UpdateRequest / BattleSnapshot)
//!        │
//!        ▼
//! scout-battle (session + calculators) ← THIS CRATE
//!        │
//!        └─> presentation (prompt text, advice)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Creature types with the effectiveness chart
//! - [`Status`] - Permanent status conditions (Burn, Sleep, etc.)
//! - [`Volatile`] - Volatile conditions (Confusion, Taunt, etc.)
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//! - [`Weather`], [`Terrain`], [`SideCondition`] - Field conditions
//! - [`CombatantState`] - One creature's battle state and information ledger
//! - [`SideState`] - One side's roster and conditions
//! - [`FieldState`] - Global field conditions
//!
//! ## Calculators
//! - [`turn_order`] - Which side acts first, or a tie
//! - [`calculate_damage`] - Damage range, percentages and KO class
//!
//! ## State Tracking
//! - [`BattleSession`] - Main entry point, owns both sides and the field
//! - [`TurnAdvisor`] - Reports combining a session with reference data
//!
//! # Example Usage
//!
//! ```
//! use scout_battle::{BattleSession, CombatantSeed, ReferenceTable, Side, TurnAdvisor};
//! use scout_protocol::parse_update_request;
//!
//! let table = ReferenceTable::builtin();
//! let mut session = BattleSession::default();
//! let config = session.config.clone();
//!
//! session.register(
//!     Side::Mine,
//!     CombatantSeed::from_reference("Flutter Mane", &table, &config).with_moves(["Moonblast"]),
//! );
//! session.register(Side::Opponent, CombatantSeed::from_reference("Incineroar", &table, &config));
//!
//! let request = parse_update_request(
//!     r#"{ "mine": { "switch_to": "Flutter Mane" }, "opponent": { "switch_to": "Incineroar" } }"#,
//! )
//! .unwrap();
//! session.apply_update(&request);
//!
//! let report = TurnAdvisor::new(&table).turn_report(&session, None).unwrap();
//! println!("{report}");
//! println!("{}", session.snapshot());
//! ```

pub mod calc;
pub mod config;
pub mod query;
pub mod reference;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use calc::{
    calculate_damage, turn_order, AttackerSpec, DamageOptions, DamageResult, DefenderSpec,
    FieldSpec, KoOutcome, SpeedSpec, TurnOrder, TurnOrderResult,
};
pub use config::{CalcConfig, ConfigError};
pub use query::{TurnAdvisor, TurnReport, TypeProfile};
pub use reference::{
    to_id, CreatureData, MoveCategory, MoveData, ReferenceResolver, ReferenceTable, Resolved,
};
pub use tracking::{
    BattleSession, CombatantSeed, NotReady, SessionRegistry, SwitchOutcome, UpdateSummary,
};
pub use types::{
    CombatantState, Effectiveness, FieldState, SideCondition, SideState, StatBlock, StatStages,
    Status, Terrain, Type, Volatile, Weather,
};

// Re-export commonly used protocol types
pub use scout_protocol::{BattleSnapshot, Side, Stat, UpdateRequest};
