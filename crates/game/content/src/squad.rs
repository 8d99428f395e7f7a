//! Roster templates.

use pitch_core::{ActorId, ActorState, Attributes, Position, TeamId};

/// Starting stamina for every fielded player.
pub const STARTING_STAMINA: u32 = 100;

/// A named player blueprint. Position and stamina are assigned when the
/// squad is fielded, not stored in content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTemplate {
    pub name: String,
    pub attributes: Attributes,
}

impl PlayerTemplate {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// An ordered roster for one team. Order matters: kickoff rows and the
/// initial ball carrier are both taken from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squad {
    pub name: String,
    pub players: Vec<PlayerTemplate>,
}

impl Squad {
    pub fn new(name: impl Into<String>, players: Vec<PlayerTemplate>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    /// Fields the squad as actors with ids starting at `first_id`. All
    /// actors spawn at the origin; kickoff placement assigns real cells.
    pub fn field(&self, team: TeamId, first_id: u32) -> Vec<ActorState> {
        self.players
            .iter()
            .enumerate()
            .map(|(offset, template)| {
                ActorState::new(
                    ActorId(first_id + offset as u32),
                    team,
                    Position::ORIGIN,
                    STARTING_STAMINA,
                )
                .with_attributes(template.attributes)
            })
            .collect()
    }
}

/// Built-in two-a-side rosters used when no squad file is supplied.
pub fn default_squads() -> (Squad, Squad) {
    let home = Squad::new(
        "Harbour FC",
        vec![
            PlayerTemplate::new("Aldon", Attributes::new(60, 65, 45, 55)),
            PlayerTemplate::new("Briggs", Attributes::new(50, 40, 70, 45)),
        ],
    );
    let away = Squad::new(
        "Midland Rovers",
        vec![
            PlayerTemplate::new("Corin", Attributes::new(55, 60, 50, 60)),
            PlayerTemplate::new("Drake", Attributes::new(45, 45, 65, 40)),
        ],
    );
    (home, away)
}
