//! Pure geometry over integer tile coordinates.
//!
//! Everything here is free of match state: bounds checks, adjacency,
//! distances, goal band membership, and the line rasterization that doubles
//! as the tick schedule for every moving actor and the ball.

use crate::state::{Position, TeamId};

/// Grid dimensions plus goal band geometry.
///
/// Goal lines sit on columns `0` and `width - 1`; the goal band is
/// `goal_band_height` rows centered on the vertical midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchBounds {
    pub width: i32,
    pub height: i32,
    pub goal_band_height: i32,
}

impl PitchBounds {
    pub fn new(width: i32, height: i32, goal_band_height: i32) -> Self {
        Self {
            width,
            height,
            goal_band_height,
        }
    }

    /// True iff the position lies within `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// First row of the goal band (inclusive).
    pub fn goal_band_start(&self) -> i32 {
        (self.height - self.goal_band_height) / 2
    }

    /// Last row of the goal band (inclusive).
    pub fn goal_band_end(&self) -> i32 {
        self.goal_band_start() + self.goal_band_height - 1
    }

    /// Column of the goal line `team` defends.
    pub fn defended_goal_line(&self, team: TeamId) -> i32 {
        match team {
            TeamId::Home => 0,
            TeamId::Away => self.width - 1,
        }
    }

    /// True iff `pos` is inside the goal mouth `scoring_team` shoots at:
    /// the opposing goal line column, within the goal band.
    pub fn goal_mouth_contains(&self, pos: Position, scoring_team: TeamId) -> bool {
        pos.x == self.defended_goal_line(scoring_team.opponent())
            && pos.y >= self.goal_band_start()
            && pos.y <= self.goal_band_end()
    }

    /// True iff `pos` falls inside either goal band, regardless of side.
    pub fn is_inside_goal(&self, pos: Position) -> bool {
        (pos.x == 0 || pos.x == self.width - 1)
            && pos.y >= self.goal_band_start()
            && pos.y <= self.goal_band_end()
    }
}

/// Chebyshev distance of exactly 1: orthogonal or diagonal neighbors.
///
/// Used for tackle "zone" contact, distinct from same-tile contact.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx.max(dy) == 1
}

/// Manhattan distance between two tiles.
pub fn manhattan_distance(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Rasterizes the line from `start` to `end` inclusive (Bresenham).
///
/// The returned sequence is the tick schedule: index 0 is the origin at
/// tick 0, index k the position after k ticks. Length is
/// `max(|dx|, |dy|) + 1`, so any two paths sharing a tick index are
/// simultaneous, which is what makes collision and interception detection
/// tick-synchronous and deterministic.
pub fn line_path(start: Position, end: Position) -> Vec<Position> {
    let mut points = Vec::new();
    let mut x0 = start.x;
    let mut y0 = start.y;
    let x1 = end.x;
    let y1 = end.y;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        points.push(Position::new(x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
    points
}
