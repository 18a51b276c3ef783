//! Boundary contracts between the battle core and its collaborators.
//!
//! Everything in here is plain data: the sparse [`UpdateRequest`] an external
//! event parser hands to a session, the [`BattleSnapshot`] a session hands back
//! to the presentation layer, and the Showdown team export format used to
//! register our own party.

use thiserror::Error;

pub mod common;
pub mod snapshot;
pub mod team;
pub mod update;

mod tests;

pub use common::{Side, Stat};
pub use snapshot::{
    ActiveSnapshot, BattleSnapshot, BenchEntry, FieldSnapshot, InfoEntry, InfoSnapshot, MoveEntry,
    SideSnapshot,
};
pub use team::{parse_team_export, StatLine, TeamMember};
pub use update::{parse_update_request, FieldUpdate, SideUpdate, StatusChange, UpdateRequest};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
