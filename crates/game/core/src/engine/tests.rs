use super::*;
use crate::command::Command;
use crate::grid::PitchBounds;
use crate::rng::PcgRng;
use crate::state::{ActorState, Attributes};

/// Test double: every draw returns the same fraction of the unit interval.
struct FixedRng(u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Draw of 0.0: the tackler always wins (probability floor is 0.1).
const TACKLER_WINS: FixedRng = FixedRng(0);
/// Draw just under 1.0: the carrier always wins (probability cap is 0.9).
const CARRIER_WINS: FixedRng = FixedRng(u32::MAX);

fn actor(id: u32, team: TeamId, x: i32, y: i32) -> ActorState {
    ActorState::new(ActorId(id), team, Position::new(x, y), 100)
        .with_attributes(Attributes::uniform(50))
}

fn state_with(actors: Vec<ActorState>, ball: Position) -> MatchState {
    MatchState::new(7, PitchBounds::new(10, 10, 4), actors, ball)
}

fn resolve(state: &MatchState) -> MatchState {
    RoundEngine::new(&PcgRng).resolve(state)
}

fn resolve_with<R: RngOracle>(state: &MatchState, rng: &R) -> MatchState {
    RoundEngine::new(rng).resolve(state)
}

#[test]
fn zero_commands_is_an_identity_round() {
    let state = state_with(
        vec![actor(1, TeamId::Home, 2, 2), actor(2, TeamId::Away, 7, 7)],
        Position::new(5, 5),
    );

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(2, 2));
    assert_eq!(next.actor(ActorId(2)).unwrap().position, Position::new(7, 7));
    assert_eq!(next.ball_position, Position::new(5, 5));
    assert_eq!(next.actor(ActorId(1)).unwrap().stamina, 100);
    assert_eq!(next.phase, Phase::Planning);
    assert!(next.commands.is_empty());
}

#[test]
fn single_move_costs_one_flat_stamina_and_clears_flags() {
    let mut state = state_with(vec![actor(1, TeamId::Home, 2, 2)], Position::new(9, 9));
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(2, 3),
    });

    let next = resolve(&state);
    let p1 = next.actor(ActorId(1)).unwrap();

    assert_eq!(p1.position, Position::new(2, 3));
    assert_eq!(p1.stamina, 99);
    assert!(!p1.has_moved_this_turn);
    assert!(!p1.has_acted_this_turn);
}

#[test]
fn same_tile_race_first_claimant_wins_by_iteration_order() {
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2), actor(2, TeamId::Away, 4, 2)],
        Position::new(9, 9),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(3, 2),
    });
    state.commands.push(Command::Move {
        actor: ActorId(2),
        to: Position::new(3, 2),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(3, 2));
    assert_eq!(next.actor(ActorId(2)).unwrap().position, Position::new(4, 2));
}

#[test]
fn earlier_arrival_beats_iteration_order() {
    // Actor 1 is listed first but needs three ticks; actor 2 arrives in one.
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2), actor(2, TeamId::Away, 6, 2)],
        Position::new(9, 9),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(5, 2),
    });
    state.commands.push(Command::Move {
        actor: ActorId(2),
        to: Position::new(5, 2),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(2)).unwrap().position, Position::new(5, 2));
    // Stopped one tick short of the contested destination.
    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(4, 2));
}

#[test]
fn head_on_swap_passes_through() {
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2), actor(3, TeamId::Away, 3, 2)],
        Position::new(9, 9),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(3, 2),
    });
    state.commands.push(Command::Move {
        actor: ActorId(3),
        to: Position::new(2, 2),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(3, 2));
    assert_eq!(next.actor(ActorId(3)).unwrap().position, Position::new(2, 2));
}

#[test]
fn moving_into_a_stationary_actor_bounces() {
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2), actor(2, TeamId::Away, 3, 2)],
        Position::new(9, 9),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(3, 2),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(2, 2));
    assert_eq!(next.actor(ActorId(2)).unwrap().position, Position::new(3, 2));
    // Never displaced, never debited.
    assert_eq!(next.actor(ActorId(1)).unwrap().stamina, 100);
}

#[test]
fn teammate_fields_a_loose_ball_on_their_tile() {
    let mut state = state_with(vec![actor(1, TeamId::Home, 2, 2)], Position::new(4, 2));
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(4, 2),
    });

    let next = resolve(&state);
    let p1 = next.actor(ActorId(1)).unwrap();

    assert!(p1.has_ball);
    assert_eq!(p1.position, Position::new(4, 2));
    assert_eq!(next.ball_position, Position::new(4, 2));
}

#[test]
fn teammate_does_not_trigger_on_zone_contact() {
    // Walks right past the loose ball without touching its tile.
    let mut state = state_with(vec![actor(1, TeamId::Home, 2, 2)], Position::new(3, 3));
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(5, 2),
    });

    let next = resolve(&state);

    assert!(!next.actor(ActorId(1)).unwrap().has_ball);
    assert_eq!(next.ball_position, Position::new(3, 3));
    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(5, 2));
}

#[test]
fn tackler_strips_the_carrier_on_a_won_roll() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 4, 3),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(6, 2),
    });

    let next = resolve_with(&state, &TACKLER_WINS);
    let carrier = next.actor(ActorId(1)).unwrap();
    let tackler = next.actor(ActorId(2)).unwrap();

    // Zone contact at tick 1: ball at (3,2), tackler adjacent at (4,3).
    assert!(!carrier.has_ball);
    assert!(tackler.has_ball);
    assert_eq!(tackler.position, Position::new(3, 2));
    assert_eq!(next.ball_position, Position::new(3, 2));

    // Loser: tackle penalty plus the flat movement cost of the push-back.
    assert_eq!(carrier.position, Position::new(1, 2));
    assert_eq!(
        carrier.stamina,
        100 - MatchConfig::TACKLE_STAMINA_PENALTY - MatchConfig::ROUND_MOVEMENT_COST
    );
}

#[test]
fn carrier_holds_on_when_the_roll_fails() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 4, 3),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(6, 2),
    });

    let next = resolve_with(&state, &CARRIER_WINS);
    let carrier = next.actor(ActorId(1)).unwrap();
    let tackler = next.actor(ActorId(2)).unwrap();

    // Winner stops on the contact cell with the ball.
    assert!(carrier.has_ball);
    assert_eq!(carrier.position, Position::new(3, 2));
    assert_eq!(next.ball_position, Position::new(3, 2));

    // Failed tackler is pushed back toward the Away goal line.
    assert!(!tackler.has_ball);
    assert_eq!(tackler.position, Position::new(5, 3));
    assert_eq!(
        tackler.stamina,
        100 - MatchConfig::TACKLE_STAMINA_PENALTY - MatchConfig::ROUND_MOVEMENT_COST
    );
}

#[test]
fn blocked_push_back_leaves_the_loser_in_place() {
    // Every retreat candidate on column 0 is held by a stationary teammate.
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 1, 1).with_ball(),
            actor(2, TeamId::Home, 0, 0),
            actor(3, TeamId::Home, 0, 1),
            actor(4, TeamId::Home, 0, 2),
            actor(5, TeamId::Away, 2, 2),
        ],
        Position::new(1, 1),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(4, 1),
    });

    let next = resolve_with(&state, &TACKLER_WINS);
    let carrier = next.actor(ActorId(1)).unwrap();
    let tackler = next.actor(ActorId(5)).unwrap();

    // The loser stumbles in place: no displacement, so only the tackle
    // penalty lands, never the flat movement cost.
    assert_eq!(carrier.position, Position::new(1, 1));
    assert_eq!(carrier.stamina, 100 - MatchConfig::TACKLE_STAMINA_PENALTY);
    assert!(!carrier.has_ball);

    assert!(tackler.has_ball);
    assert_eq!(tackler.position, Position::new(2, 1));
    assert_eq!(next.ball_position, Position::new(2, 1));
}

#[test]
fn receiver_falls_back_when_the_contact_cell_is_claimed() {
    // A stationary carrier holds its own tile's claim from tick 0, so the
    // winning tackler cannot take the contact cell.
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 4, 2).with_ball(),
            actor(2, TeamId::Away, 5, 3),
        ],
        Position::new(4, 2),
    );
    state.commands.push(Command::Move {
        actor: ActorId(2),
        to: Position::new(5, 1),
    });

    let next = resolve_with(&state, &TACKLER_WINS);
    let carrier = next.actor(ActorId(1)).unwrap();
    let tackler = next.actor(ActorId(2)).unwrap();

    // Winner keeps its own cell and the ball repositions with it.
    assert_eq!(tackler.position, Position::new(5, 3));
    assert!(tackler.has_ball);
    assert_eq!(next.ball_position, Position::new(5, 3));
    // Back where it started, so no movement debit for the winner.
    assert_eq!(tackler.stamina, 100);

    // Loser is pushed back toward its own goal line as usual.
    assert_eq!(carrier.position, Position::new(3, 2));
    assert!(!carrier.has_ball);
    assert_eq!(
        carrier.stamina,
        100 - MatchConfig::TACKLE_STAMINA_PENALTY - MatchConfig::ROUND_MOVEMENT_COST
    );
    assert_eq!(next.actors.iter().filter(|a| a.has_ball).count(), 1);
}

#[test]
fn at_most_one_possession_change_per_round() {
    // Two defenders on the flight path; only the first touch counts.
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 4, 2),
            actor(3, TeamId::Away, 6, 2),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(1),
        to: Position::new(8, 2),
    });

    let next = resolve(&state);

    assert!(next.actor(ActorId(2)).unwrap().has_ball);
    assert!(!next.actor(ActorId(3)).unwrap().has_ball);
    assert_eq!(
        next.actors.iter().filter(|a| a.has_ball).count(),
        1,
        "possession invariant"
    );
}

#[test]
fn carrier_walking_into_the_goal_mouth_scores() {
    let bounds = MatchConfig::default().bounds();
    let mut state = MatchState::new(
        7,
        bounds,
        vec![
            actor(1, TeamId::Home, 20, 7).with_ball(),
            actor(2, TeamId::Away, 3, 12),
        ],
        Position::new(20, 7),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(23, 7),
    });
    // Player simulation continues after the ball freezes.
    state.commands.push(Command::Move {
        actor: ActorId(2),
        to: Position::new(3, 8),
    });

    let next = resolve(&state);

    assert_eq!(next.score.home, 1);
    assert_eq!(next.score.away, 0);
    assert_eq!(next.ball_position, Position::new(23, 7));
    assert!(next.ball_is_loose());
    assert_eq!(next.actor(ActorId(2)).unwrap().position, Position::new(3, 8));
}

#[test]
fn kicked_ball_crossing_the_goal_band_scores_once() {
    let bounds = MatchConfig::default().bounds();
    let mut state = MatchState::new(
        7,
        bounds,
        vec![actor(1, TeamId::Home, 20, 7).with_ball()],
        Position::new(20, 7),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(1),
        to: Position::new(23, 7),
    });

    let next = resolve(&state);

    assert_eq!(next.score.home, 1);
    assert!(next.ball_is_loose());
    assert_eq!(next.ball_position, Position::new(23, 7));
    // The kicker never moved.
    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(20, 7));
}

#[test]
fn unobstructed_kick_lands_loose_at_the_destination() {
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2).with_ball()],
        Position::new(2, 2),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(1),
        to: Position::new(8, 2),
    });

    let next = resolve(&state);

    assert!(next.ball_is_loose());
    assert_eq!(next.ball_position, Position::new(8, 2));
    assert!(!next.actor(ActorId(1)).unwrap().has_ball);
}

#[test]
fn kicked_ball_stops_at_a_teammate_on_its_path() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Home, 6, 2),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(1),
        to: Position::new(9, 2),
    });

    let next = resolve(&state);

    assert!(next.actor(ActorId(2)).unwrap().has_ball);
    assert_eq!(next.ball_position, Position::new(6, 2));
}

#[test]
fn opponent_intercepts_a_kick_from_the_zone() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 5, 3),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(1),
        to: Position::new(9, 2),
    });

    let next = resolve(&state);
    let defender = next.actor(ActorId(2)).unwrap();

    // Loose ball: no tackle roll, the defender just takes it where it flew.
    assert!(defender.has_ball);
    assert_eq!(defender.position, next.ball_position);
}

#[test]
fn kick_from_a_non_carrier_is_ignored() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 7, 7),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Kick {
        actor: ActorId(2),
        to: Position::new(0, 7),
    });

    let next = resolve(&state);

    assert!(next.actor(ActorId(1)).unwrap().has_ball);
    assert_eq!(next.ball_position, Position::new(2, 2));
    assert_eq!(next.score.away, 0);
}

#[test]
fn command_for_an_unknown_actor_is_skipped_silently() {
    let mut state = state_with(vec![actor(1, TeamId::Home, 2, 2)], Position::new(9, 9));
    state.commands.push(Command::Move {
        actor: ActorId(42),
        to: Position::new(5, 5),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(2, 2));
    assert!(next.commands.is_empty());
}

#[test]
fn carried_ball_tracks_the_carrier_every_tick() {
    let mut state = state_with(
        vec![actor(1, TeamId::Home, 2, 2).with_ball()],
        Position::new(2, 2),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(5, 5),
    });

    let next = resolve(&state);

    assert_eq!(next.actor(ActorId(1)).unwrap().position, Position::new(5, 5));
    assert_eq!(next.ball_position, Position::new(5, 5));
    assert!(next.actor(ActorId(1)).unwrap().has_ball);
}

#[test]
fn resolution_is_deterministic_for_a_fixed_seed() {
    let mut state = state_with(
        vec![
            actor(1, TeamId::Home, 2, 2).with_ball(),
            actor(2, TeamId::Away, 4, 3),
        ],
        Position::new(2, 2),
    );
    state.commands.push(Command::Move {
        actor: ActorId(1),
        to: Position::new(6, 2),
    });

    let first = resolve(&state);
    let second = resolve(&state);
    assert_eq!(first, second);
}
