//! Kickoff formation.
//!
//! Both teams line up in single columns either side of the halfway line.
//! The possessing side stands one column behind center, the defending side
//! retreats further into its own half; rows descend from the vertical
//! midpoint in roster order. The first player of the possessing squad
//! starts with the ball.

use pitch_core::{ActorState, PitchBounds, Position, TeamId};

use crate::squad::Squad;

/// Kickoff column for one team given who has possession.
fn kickoff_column(bounds: &PitchBounds, team: TeamId, possessing: TeamId) -> i32 {
    let center_x = bounds.width / 2;
    match (team, team == possessing) {
        (TeamId::Home, true) => center_x - 1,
        (TeamId::Home, false) => center_x - 4,
        (TeamId::Away, true) => center_x,
        (TeamId::Away, false) => center_x + 3,
    }
}

/// Re-places already-fielded actors into the kickoff formation, in place.
///
/// Possession is reassigned: every `has_ball` flag is cleared and the first
/// actor of the possessing team receives the ball. Per-turn flags are
/// cleared as well. Returns the ball position. Used for the opening
/// kickoff and for the restart at the second half.
pub fn reposition_for_kickoff(
    actors: &mut [ActorState],
    possessing: TeamId,
    bounds: &PitchBounds,
) -> Position {
    let mid_row = bounds.height / 2;
    let mut ball = Position::new(bounds.width / 2, mid_row);

    for team in [TeamId::Home, TeamId::Away] {
        let column = kickoff_column(bounds, team, possessing);
        let mut row = mid_row;
        let mut first_of_team = true;
        for actor in actors.iter_mut().filter(|a| a.team == team) {
            actor.position = Position::new(column, row);
            debug_assert!(
                bounds.contains(actor.position) && !bounds.is_inside_goal(actor.position),
                "kickoff placed {} at {}",
                actor.id,
                actor.position
            );
            actor.has_ball = team == possessing && first_of_team;
            actor.clear_turn_flags();
            if actor.has_ball {
                ball = actor.position;
            }
            first_of_team = false;
            row -= 1;
        }
    }

    ball
}

/// Fields both squads in the kickoff formation.
///
/// Home actors get ids `1..`, Away actors continue after them. Returns the
/// full actor list together with the ball position (the possessing team's
/// lead player).
pub fn kickoff(
    home: &Squad,
    away: &Squad,
    possessing: TeamId,
    bounds: &PitchBounds,
) -> (Vec<ActorState>, Position) {
    let mut actors = home.field(TeamId::Home, 1);
    actors.extend(away.field(TeamId::Away, 1 + home.players.len() as u32));
    let ball = reposition_for_kickoff(&mut actors, possessing, bounds);
    (actors, ball)
}
