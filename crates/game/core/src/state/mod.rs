//! Authoritative match state representation.
//!
//! This module owns the data structures that describe actors, the ball, and
//! round bookkeeping. Runtime layers clone or query this state but replace it
//! wholesale through the engine: the snapshot is the sole unit of
//! transformation.
pub mod types;

pub use types::{ActorId, ActorState, Attributes, Phase, Position, Score, TeamId};

use crate::command::CommandQueue;
use crate::grid::PitchBounds;

/// Canonical snapshot of the whole board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at kickoff and never modified. Combined with the turn
    /// number and actor ids to derive unique seeds per random event.
    pub seed: u64,

    /// Round counter within the current half, starting at 1.
    pub turn: u32,
    /// First or second half.
    pub half: u8,
    /// Team whose planning window this is; owns a loose ball during
    /// resolution.
    pub active_team: TeamId,
    /// Grid dimensions and goal band geometry.
    pub bounds: PitchBounds,
    /// Goals per team.
    pub score: Score,
    /// The ball's cell. Tied to the carrier's position while carried.
    pub ball_position: Position,
    /// Every fielded actor, in iteration order. Resolution order follows
    /// this ordering, which makes same-tick races deterministic.
    pub actors: Vec<ActorState>,
    /// Commands committed during the current planning window.
    pub commands: CommandQueue,
    /// Phase tag; the engine always returns `Planning`.
    pub phase: Phase,
}

impl MatchState {
    /// Creates a planning-phase snapshot with an empty command queue.
    pub fn new(seed: u64, bounds: PitchBounds, actors: Vec<ActorState>, ball: Position) -> Self {
        Self {
            seed,
            turn: 1,
            half: 1,
            active_team: TeamId::Home,
            bounds,
            score: Score::default(),
            ball_position: ball,
            actors,
            commands: CommandQueue::new(),
            phase: Phase::Planning,
        }
    }

    /// Returns a reference to an actor by id.
    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by id.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    /// The actor currently carrying the ball, if any.
    pub fn carrier(&self) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.has_ball)
    }

    /// True when no actor carries the ball.
    pub fn ball_is_loose(&self) -> bool {
        self.carrier().is_none()
    }

    /// The team contesting possession: the carrier's team, or the team that
    /// was active during planning if the ball is loose.
    pub fn owning_team(&self) -> TeamId {
        self.carrier()
            .map(|carrier| carrier.team)
            .unwrap_or(self.active_team)
    }

    /// Whether any actor other than `except` stands on `position`.
    pub fn is_occupied_by_other(&self, position: Position, except: ActorId) -> bool {
        self.actors
            .iter()
            .any(|actor| actor.id != except && actor.position == position)
    }
}
