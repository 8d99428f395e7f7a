//! Turn resolution engine.
//!
//! The [`RoundEngine`] is the authoritative reducer for [`MatchState`]: it
//! consumes the snapshot at the close of planning (including the merged
//! command queue) and produces the next snapshot in one synchronous pass.
//! Every moving actor and the ball advance one discrete tick at a time
//! along precomputed paths; same-tile races, pickups, interceptions,
//! tackles, push-back, and goals are all decided inside the tick loop.
//!
//! Resolution is a pure, total function of its inputs given a fixed random
//! source: it never fails and never panics on malformed commands. A command
//! referencing an unknown actor is skipped silently.

use std::collections::HashMap;

use crate::config::MatchConfig;
use crate::grid::{is_adjacent, line_path};
use crate::rng::{RngOracle, compute_seed};
use crate::state::{ActorId, MatchState, Phase, Position, TeamId};
use crate::tackle::{ContactKind, TackleWinner, resolve_tackle};

/// Per-round reducer. Holds no state between calls; callers replace their
/// snapshot wholesale with the returned one.
pub struct RoundEngine<'a, R: RngOracle + ?Sized> {
    rng: &'a R,
}

/// How the ball travels this round.
enum BallMode {
    /// Tied to the carrier's cell.
    Carried,
    /// Rasterized kick flight.
    Flying(Vec<Position>),
    /// Loose and stationary.
    Loose,
}

/// Mutable bookkeeping for one resolution pass.
///
/// `positions[i]` is actor i's applied cell as of the previous tick;
/// `stopped[i]` marks actors that may no longer advance this round.
struct RoundSim {
    paths: Vec<Vec<Position>>,
    positions: Vec<Position>,
    stopped: Vec<bool>,
    /// Final-cell ownership for the destination claim rule.
    claims: HashMap<Position, ActorId>,
    carrier: Option<usize>,
    ball_mode: BallMode,
    ball_position: Position,
    ball_frozen: bool,
}

impl<'a, R: RngOracle + ?Sized> RoundEngine<'a, R> {
    pub fn new(rng: &'a R) -> Self {
        Self { rng }
    }

    /// Resolves one full round: `Snapshot x Commands -> Snapshot`.
    ///
    /// The returned snapshot has its phase reset to `Planning`, an empty
    /// command queue, and all per-turn flags cleared. Turn and half
    /// counters are untouched; that bookkeeping belongs to the caller.
    pub fn resolve(&self, snapshot: &MatchState) -> MatchState {
        let mut next = snapshot.clone();
        let start_positions: Vec<Position> =
            next.actors.iter().map(|actor| actor.position).collect();

        let mut sim = self.precompute(&mut next);

        let max_len = sim
            .paths
            .iter()
            .map(Vec::len)
            .chain(match &sim.ball_mode {
                BallMode::Flying(path) => Some(path.len()),
                _ => None,
            })
            .max()
            .unwrap_or(1);

        for tick in 1..max_len {
            self.advance_tick(&mut next, &mut sim, tick);
        }

        self.finalize(&mut next, &sim, &start_positions);
        next
    }

    /// Step 1: rasterize every path and decide how the ball travels.
    fn precompute(&self, next: &mut MatchState) -> RoundSim {
        let paths: Vec<Vec<Position>> = next
            .actors
            .iter()
            .map(|actor| match next.commands.move_target(actor.id) {
                Some(to) => line_path(actor.position, to),
                None => vec![actor.position],
            })
            .collect();

        let positions: Vec<Position> = next.actors.iter().map(|a| a.position).collect();
        let carrier = next.actors.iter().position(|a| a.has_ball);

        // A kick only counts if the kicker is the carrier right now; stale
        // or forged kick commands are skipped like unknown actor ids.
        let kick = next.commands.kicks().find(|(kicker, _)| {
            carrier
                .map(|idx| next.actors[idx].id == *kicker)
                .unwrap_or(false)
        });

        let (ball_mode, carrier) = match (kick, carrier) {
            (Some((_, target)), Some(idx)) => {
                // Possession is released at tick 0, before simulation begins.
                next.actors[idx].has_ball = false;
                next.actors[idx].has_acted_this_turn = true;
                (
                    BallMode::Flying(line_path(next.ball_position, target)),
                    None,
                )
            }
            (None, Some(idx)) => (BallMode::Carried, Some(idx)),
            (_, None) => (BallMode::Loose, None),
        };

        let mut sim = RoundSim {
            paths,
            positions,
            stopped: vec![false; next.actors.len()],
            claims: HashMap::new(),
            carrier,
            ball_mode,
            ball_position: next.ball_position,
            ball_frozen: false,
        };

        // Stationary actors are already at their final path cell at tick 0
        // and hold its claim from the start. This is what bounces a mover
        // off a tile held by a non-moving actor regardless of iteration
        // order.
        for (idx, actor) in next.actors.iter().enumerate() {
            if sim.paths[idx].len() == 1 {
                sim.claims.insert(actor.position, actor.id);
            }
        }

        sim
    }

    /// Steps 2a-2f for a single tick.
    fn advance_tick(&self, next: &mut MatchState, sim: &mut RoundSim, tick: usize) {
        // 2a. Proposed cells, clamped to path end once exhausted.
        let mut proposed: Vec<Position> = (0..next.actors.len())
            .map(|idx| {
                if sim.stopped[idx] {
                    sim.positions[idx]
                } else {
                    let path = &sim.paths[idx];
                    path[tick.min(path.len() - 1)]
                }
            })
            .collect();

        // 2b. Destination claim rule. Only actors arriving at their final
        // path cell claim; pass-through cells never do. Head-on swaps fall
        // out naturally: the swapped destinations are distinct cells.
        for idx in 0..next.actors.len() {
            if sim.stopped[idx] || sim.paths[idx].len() == 1 {
                continue;
            }
            let at_final = tick >= sim.paths[idx].len() - 1;
            if !at_final {
                continue;
            }
            let id = next.actors[idx].id;
            match sim.claims.get(&proposed[idx]) {
                Some(owner) if *owner != id => {
                    // Claimed by someone else: stop one tick short for the
                    // rest of the round.
                    sim.stopped[idx] = true;
                    proposed[idx] = sim.positions[idx];
                }
                _ => {
                    sim.claims.insert(proposed[idx], id);
                }
            }
        }

        // 2c. Ball's proposed cell.
        let ball_proposed = if sim.ball_frozen {
            sim.ball_position
        } else {
            match &sim.ball_mode {
                BallMode::Carried => match sim.carrier {
                    Some(idx) => proposed[idx],
                    None => sim.ball_position,
                },
                BallMode::Flying(path) => path[tick.min(path.len() - 1)],
                BallMode::Loose => sim.ball_position,
            }
        };

        // 2d. Goal check: score immediately, freeze the ball, and end
        // ball interactions for the round. Player movement continues.
        if !sim.ball_frozen {
            for team in [TeamId::Home, TeamId::Away] {
                if next.bounds.goal_mouth_contains(ball_proposed, team) {
                    next.score.add_goal(team);
                    sim.ball_position = ball_proposed;
                    sim.ball_frozen = true;
                    // The ball is in the net; nobody carries it out.
                    if let Some(idx) = sim.carrier.take() {
                        next.actors[idx].has_ball = false;
                    }
                    break;
                }
            }
        }

        // 2e. Contact check.
        if !sim.ball_frozen {
            self.check_contacts(next, sim, &mut proposed, ball_proposed);
        }

        // 2f. Apply proposals. Stopped actors already propose their resting
        // cell, so a blanket copy is safe.
        sim.positions.copy_from_slice(&proposed);
        if !sim.ball_frozen {
            sim.ball_position = match sim.carrier {
                Some(idx) => sim.positions[idx],
                None => ball_proposed,
            };
        }
    }

    /// Possession contests for one tick. At most one resolves per round;
    /// the ball freezes immediately afterwards.
    fn check_contacts(
        &self,
        next: &mut MatchState,
        sim: &mut RoundSim,
        proposed: &mut [Position],
        ball_proposed: Position,
    ) {
        let owning_team = match sim.carrier {
            Some(idx) => next.actors[idx].team,
            None => next.active_team,
        };

        for idx in 0..next.actors.len() {
            if Some(idx) == sim.carrier {
                continue;
            }
            let same_tile = proposed[idx] == ball_proposed;
            let zone = is_adjacent(proposed[idx], ball_proposed);
            let is_opponent = next.actors[idx].team != owning_team;

            // Opponents contest on either contact; teammates only field a
            // loose ball landing on their own tile.
            let triggered = if is_opponent {
                same_tile || zone
            } else {
                same_tile && sim.carrier.is_none()
            };
            if !triggered {
                continue;
            }

            let receiver = match sim.carrier {
                Some(carrier_idx) => {
                    let contact = if same_tile {
                        ContactKind::SameTile
                    } else {
                        ContactKind::Zone
                    };
                    let seed = compute_seed(next.seed, next.turn, next.actors[idx].id.0, 0);
                    let winner = resolve_tackle(
                        &next.actors[carrier_idx],
                        &next.actors[idx],
                        contact,
                        self.rng,
                        seed,
                    );
                    let (winner_idx, loser_idx) = match winner {
                        TackleWinner::Tackler => (idx, carrier_idx),
                        TackleWinner::Carrier => (carrier_idx, idx),
                    };

                    next.actors[loser_idx].has_ball = false;
                    next.actors[loser_idx].stamina = next.actors[loser_idx]
                        .stamina
                        .saturating_sub(MatchConfig::TACKLE_STAMINA_PENALTY);
                    sim.stopped[loser_idx] = true;
                    proposed[loser_idx] =
                        self.push_back(next, loser_idx, proposed, sim.positions[loser_idx]);

                    winner_idx
                }
                // Loose ball: no roll, the contesting actor simply takes it.
                None => idx,
            };

            // The receiver claims the contact cell through the same
            // bookkeeping as regular movement, falling back to their own
            // current position if it is already spoken for.
            let receiver_id = next.actors[receiver].id;
            let landing = match sim.claims.get(&ball_proposed) {
                Some(owner) if *owner != receiver_id => sim.positions[receiver],
                _ => {
                    sim.claims.insert(ball_proposed, receiver_id);
                    ball_proposed
                }
            };
            sim.stopped[receiver] = true;
            proposed[receiver] = landing;
            next.actors[receiver].has_ball = true;
            sim.carrier = Some(receiver);
            sim.ball_mode = BallMode::Carried;
            sim.ball_position = landing;
            sim.ball_frozen = true;
            return;
        }
    }

    /// Step 3: relocate a tackle loser one cell toward their own defended
    /// goal line. Straight back first, then the two diagonals; if every
    /// candidate is out of bounds or occupied the loser stumbles in place.
    fn push_back(
        &self,
        next: &MatchState,
        loser_idx: usize,
        proposed: &[Position],
        current: Position,
    ) -> Position {
        let dx = next.actors[loser_idx].team.retreat_step();
        let candidates = [
            Position::new(current.x + dx, current.y),
            Position::new(current.x + dx, current.y - 1),
            Position::new(current.x + dx, current.y + 1),
        ];

        candidates
            .into_iter()
            .find(|candidate| {
                next.bounds.contains(*candidate)
                    && !proposed
                        .iter()
                        .enumerate()
                        .any(|(i, cell)| i != loser_idx && cell == candidate)
            })
            .unwrap_or(current)
    }

    /// Step 4: positions, flat movement cost, flag and queue reset.
    fn finalize(&self, next: &mut MatchState, sim: &RoundSim, start_positions: &[Position]) {
        for (idx, actor) in next.actors.iter_mut().enumerate() {
            actor.position = sim.positions[idx];
            // Flat per-round exertion, distinct from the planned distance
            // cost the validator checks against.
            if actor.position != start_positions[idx] {
                actor.stamina = actor
                    .stamina
                    .saturating_sub(MatchConfig::ROUND_MOVEMENT_COST);
            }
            actor.clear_turn_flags();
        }

        next.ball_position = match sim.carrier {
            Some(idx) => sim.positions[idx],
            None => sim.ball_position,
        };
        next.commands.clear();
        next.phase = Phase::Planning;
    }
}

#[cfg(test)]
mod tests;
