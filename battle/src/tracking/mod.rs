//! Battle state tracking from reported observations

mod registry;
mod seed;
mod session;
mod snapshot;
mod updater;

pub use registry::SessionRegistry;
pub use seed::CombatantSeed;
pub use session::{BattleSession, Matchup, NotReady, SwitchOutcome};
pub use updater::UpdateSummary;
