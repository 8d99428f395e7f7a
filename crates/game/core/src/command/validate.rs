use crate::grid::manhattan_distance;
use crate::state::{ActorId, MatchState, Position};

use super::Command;

/// Rejection reasons surfaced to the submitting caller.
///
/// These gate acceptance into the queue only; concurrent destination
/// conflicts between pending commands are a resolution-time concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("destination {destination} is out of bounds")]
    InvalidDestination { destination: Position },

    #[error("destination {destination} is occupied")]
    TileOccupied { destination: Position },

    #[error("insufficient stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("actor does not carry the ball")]
    NoBallPossession,
}

/// Planning-time gate applied before a command enters the queue.
///
/// Read-only: neither stamina nor position changes on success. The
/// occupancy check runs against the pre-resolution snapshot, not against
/// other pending commands.
pub fn validate(state: &MatchState, command: &Command) -> Result<(), CommandError> {
    let actor = state
        .actor(command.actor())
        .ok_or(CommandError::ActorNotFound(command.actor()))?;

    match command {
        Command::Move { to, .. } => {
            if !state.bounds.contains(*to) {
                return Err(CommandError::InvalidDestination { destination: *to });
            }
            if state.is_occupied_by_other(*to, actor.id) {
                return Err(CommandError::TileOccupied { destination: *to });
            }
            let required = manhattan_distance(actor.position, *to) as u32;
            if actor.stamina < required {
                return Err(CommandError::InsufficientStamina {
                    required,
                    available: actor.stamina,
                });
            }
            Ok(())
        }
        Command::Kick { .. } => {
            // Path legality is resolved during the engine pass.
            if !actor.has_ball {
                return Err(CommandError::NoBallPossession);
            }
            Ok(())
        }
    }
}
