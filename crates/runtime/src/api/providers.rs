//! Asynchronous abstraction for sourcing planning commands.
//!
//! Session users plug in [`CommandProvider`] implementations so a match can
//! run with human input, scripted fixtures, or AI policies.
use async_trait::async_trait;

use pitch_core::{Command, MatchState, TeamId};

use crate::error::Result;

/// Trait for providing a team's commands for one planning window.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - AI decisions
/// - Scripted/replayed plans
/// - Testing fixtures
///
/// Returned commands are validated by the session before entering the
/// queue; invalid ones are dropped, never fatal.
#[async_trait]
pub trait CommandProvider: Send + Sync {
    /// Provide the commands `team` commits this round, given a read-only
    /// snapshot of the current match state.
    async fn plan_commands(&self, team: TeamId, state: &MatchState) -> Result<Vec<Command>>;
}

/// A provider that never plans anything. Useful for testing or as a
/// stand-in for a team with no controller.
pub struct IdleCommandProvider;

#[async_trait]
impl CommandProvider for IdleCommandProvider {
    async fn plan_commands(&self, _team: TeamId, _state: &MatchState) -> Result<Vec<Command>> {
        Ok(Vec::new())
    }
}
