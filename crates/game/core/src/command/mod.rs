//! Planning-phase command model and validation gate.
//!
//! Commands are intentions, not effects: queueing one never mutates the
//! snapshot. The engine consumes the whole queue exactly once per
//! resolution and the queue is cleared unconditionally afterwards.
mod validate;

pub use validate::{CommandError, validate};

use crate::state::{ActorId, Position};

/// Discriminant used for superseding semantics: one command per kind per
/// actor per planning window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    Move,
    Kick,
}

/// A committed intention for one actor.
///
/// Closed tagged variant by design: the engine matches on it explicitly,
/// no open extensibility is required by the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Walk to `to` along the rasterized path.
    Move { actor: ActorId, to: Position },
    /// Kick the carried ball toward `to`.
    Kick { actor: ActorId, to: Position },
}

impl Command {
    pub fn actor(&self) -> ActorId {
        match self {
            Command::Move { actor, .. } | Command::Kick { actor, .. } => *actor,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Move { .. } => CommandKind::Move,
            Command::Kick { .. } => CommandKind::Kick,
        }
    }

    pub fn target(&self) -> Position {
        match self {
            Command::Move { to, .. } | Command::Kick { to, .. } => *to,
        }
    }
}

/// Queue of pending commands keyed by `(actor, kind)`.
///
/// A later command of the same kind from the same actor supersedes the
/// earlier one; an actor may hold one Move and one Kick simultaneously.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a command, replacing any earlier one with the same key.
    pub fn push(&mut self, command: Command) {
        self.commands
            .retain(|c| !(c.actor() == command.actor() && c.kind() == command.kind()));
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// The pending Move destination for `actor`, if any.
    pub fn move_target(&self, actor: ActorId) -> Option<Position> {
        self.commands.iter().find_map(|c| match c {
            Command::Move { actor: a, to } if *a == actor => Some(*to),
            _ => None,
        })
    }

    /// The pending Kick, if any actor committed one.
    pub fn kicks(&self) -> impl Iterator<Item = (ActorId, Position)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Kick { actor, to } => Some((*actor, *to)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
