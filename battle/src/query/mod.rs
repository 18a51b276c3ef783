//! Query helpers and reports for battle decision making
//!
//! Defensive type profiles plus the [`TurnAdvisor`], which combines a
//! session with reference lookups to produce turn reports.

mod matchup;
mod report;

pub use matchup::TypeProfile;
pub use report::{AutoDamage, LeadMatchup, MoveReport, TurnAdvisor, TurnReport};
