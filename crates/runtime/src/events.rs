//! Match events derived from snapshot deltas.
//!
//! The engine communicates only through the returned snapshot; this module
//! diffs consecutive snapshots into semantically meaningful events that
//! subscribers can react to without replaying the resolution themselves.

use serde::{Deserialize, Serialize};

use pitch_core::{ActorId, MatchState, Position, Score, TeamId};

/// High-level happenings in a match, in the order they are published.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// One round of simultaneous resolution completed.
    RoundResolved { turn: u32, half: u8 },
    /// A goal was scored; `score` is the updated tally.
    Goal {
        team: TeamId,
        score: Score,
        position: Position,
    },
    /// The ball changed hands (or went loose, or was picked up).
    PossessionChanged {
        from: Option<ActorId>,
        to: Option<ActorId>,
    },
    /// A new half kicked off.
    HalfStarted { half: u8 },
    /// The second half ran out of rounds.
    MatchEnded { score: Score },
}

/// Extract high-level events from two consecutive snapshots.
///
/// Multiple events may be generated from a single round (a goal always
/// implies a possession change, for instance). Half and match boundary
/// events are the session's bookkeeping, not derivable from the snapshots
/// alone, so they are appended by the caller.
pub fn extract_events(before: &MatchState, after: &MatchState) -> Vec<MatchEvent> {
    let mut events = vec![MatchEvent::RoundResolved {
        turn: before.turn,
        half: before.half,
    }];

    for team in [TeamId::Home, TeamId::Away] {
        if after.score.get(team) > before.score.get(team) {
            events.push(MatchEvent::Goal {
                team,
                score: after.score,
                position: after.ball_position,
            });
        }
    }

    let carrier_before = before.carrier().map(|a| a.id);
    let carrier_after = after.carrier().map(|a| a.id);
    if carrier_before != carrier_after {
        events.push(MatchEvent::PossessionChanged {
            from: carrier_before,
            to: carrier_after,
        });
    }

    events
}
