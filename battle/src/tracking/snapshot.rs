//! Read-only snapshot of a session

use scout_protocol::{BattleSnapshot, Side};

use super::session::BattleSession;

impl BattleSession {
    /// Describe the tracked state without changing it
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            turn: self.turn(),
            ready: self.is_ready(),
            field: self.field.to_snapshot(),
            mine: self.side(Side::Mine).to_snapshot(),
            opponent: self.side(Side::Opponent).to_snapshot(),
        }
    }
}
