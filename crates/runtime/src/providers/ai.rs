//! Random-walk AI planner.

use async_trait::async_trait;

use pitch_core::{
    Command, MatchState, PcgRng, Position, RngOracle, TeamId, compute_seed, validate,
};

use crate::api::CommandProvider;
use crate::error::Result;

/// Seed context for AI planning draws, distinct from the engine's tackle
/// context so planning never perturbs resolution outcomes.
const AI_SEED_CONTEXT: u32 = 1;

/// Deterministic random-walk planner.
///
/// Each actor of the planning team tries the four cardinal neighbors in a
/// seed-rotated order and commits the first destination that passes
/// validation. Actors with no legal neighbor hold position. The walk is a
/// pure function of the match seed, turn, and actor id, so replays with
/// the same seed plan identically.
pub struct RandomWalkProvider {
    rng: PcgRng,
}

impl RandomWalkProvider {
    pub fn new() -> Self {
        Self { rng: PcgRng }
    }
}

impl Default for RandomWalkProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandProvider for RandomWalkProvider {
    async fn plan_commands(&self, team: TeamId, state: &MatchState) -> Result<Vec<Command>> {
        let mut commands = Vec::new();

        for actor in state.actors.iter().filter(|a| a.team == team) {
            let seed = compute_seed(state.seed, state.turn, actor.id.0, AI_SEED_CONTEXT);
            let start = (self.rng.next_u32(seed) % 4) as usize;

            let Position { x, y } = actor.position;
            let neighbors = [
                Position::new(x, y - 1),
                Position::new(x + 1, y),
                Position::new(x, y + 1),
                Position::new(x - 1, y),
            ];

            for offset in 0..neighbors.len() {
                let to = neighbors[(start + offset) % neighbors.len()];
                let command = Command::Move {
                    actor: actor.id,
                    to,
                };
                if validate(state, &command).is_ok() {
                    commands.push(command);
                    break;
                }
            }
        }

        Ok(commands)
    }
}
