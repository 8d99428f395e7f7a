use std::fmt;

/// Unique identifier for a fielded actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side of the pitch. Home attacks toward increasing x and defends column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamId {
    Home,
    Away,
}

impl TeamId {
    pub fn opponent(self) -> Self {
        match self {
            TeamId::Home => TeamId::Away,
            TeamId::Away => TeamId::Home,
        }
    }

    /// Unit x-step toward this team's own defended goal line.
    pub fn retreat_step(self) -> i32 {
        match self {
            TeamId::Home => -1,
            TeamId::Away => 1,
        }
    }
}

/// Phase tag carried on the snapshot. The engine consumes a planning
/// snapshot and always returns one reset to `Planning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Planning,
    Resolution,
}

/// Attribute scalars influencing tackle odds and (eventually) AI weighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub speed: u8,
    pub technique: u8,
    pub strength: u8,
    pub intelligence: u8,
}

impl Attributes {
    pub fn new(speed: u8, technique: u8, strength: u8, intelligence: u8) -> Self {
        Self {
            speed,
            technique,
            strength,
            intelligence,
        }
    }

    /// Flat attribute line, handy for tests and filler squads.
    pub fn uniform(value: u8) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Complete per-actor state tracked in the snapshot.
///
/// # Invariants
///
/// - `stamina` never goes below zero (enforced by saturating arithmetic)
/// - at most one actor in a snapshot has `has_ball == true`
/// - the per-turn flags are cleared by every resolution pass
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ActorId,
    pub team: TeamId,
    pub position: Position,
    pub stamina: u32,
    pub attributes: Attributes,
    pub has_ball: bool,
    pub has_moved_this_turn: bool,
    pub has_acted_this_turn: bool,
}

impl ActorState {
    pub fn new(id: ActorId, team: TeamId, position: Position, stamina: u32) -> Self {
        Self {
            id,
            team,
            position,
            stamina,
            attributes: Attributes::default(),
            has_ball: false,
            has_moved_this_turn: false,
            has_acted_this_turn: false,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_ball(mut self) -> Self {
        self.has_ball = true;
        self
    }

    pub fn clear_turn_flags(&mut self) {
        self.has_moved_this_turn = false;
        self.has_acted_this_turn = false;
    }
}

/// Goals per team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn get(&self, team: TeamId) -> u32 {
        match team {
            TeamId::Home => self.home,
            TeamId::Away => self.away,
        }
    }

    pub fn add_goal(&mut self, team: TeamId) {
        match team {
            TeamId::Home => self.home += 1,
            TeamId::Away => self.away += 1,
        }
    }
}
