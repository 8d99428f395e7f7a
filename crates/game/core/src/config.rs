/// Match configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Pitch width in tiles (goal lines sit on columns 0 and width-1).
    pub width: i32,
    /// Pitch height in tiles.
    pub height: i32,
    /// Height of the goal band, centered on the pitch's vertical midpoint.
    pub goal_band_height: i32,
    /// Rounds per half before the orchestrator switches sides.
    pub max_turns_per_half: u32,
}

impl MatchConfig {
    // ===== balance constants used by the tackle model =====
    /// Tackler's win chance before attribute and contact adjustments.
    pub const TACKLE_BASE_CHANCE: f64 = 0.5;
    /// Divisor applied to the strength/technique differential.
    pub const TACKLE_ATTRIBUTE_SCALE: f64 = 100.0;
    /// Contact adjustment: same-tile favors the tackler, zone the carrier.
    pub const TACKLE_CONTACT_SHIFT: f64 = 0.2;
    /// Final probability clamp so both outcomes stay possible.
    pub const TACKLE_MIN_CHANCE: f64 = 0.1;
    pub const TACKLE_MAX_CHANCE: f64 = 0.9;

    // ===== resolution constants =====
    /// Stamina surrendered by the loser of a tackle.
    pub const TACKLE_STAMINA_PENALTY: u32 = 5;
    /// Flat stamina cost for any actor that ended the round displaced.
    pub const ROUND_MOVEMENT_COST: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: i32 = 24;
    pub const DEFAULT_HEIGHT: i32 = 16;
    pub const DEFAULT_GOAL_BAND_HEIGHT: i32 = 4;
    pub const DEFAULT_MAX_TURNS_PER_HALF: u32 = 10;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            goal_band_height: Self::DEFAULT_GOAL_BAND_HEIGHT,
            max_turns_per_half: Self::DEFAULT_MAX_TURNS_PER_HALF,
        }
    }

    /// Grid bounds derived from the configured dimensions.
    pub fn bounds(&self) -> crate::grid::PitchBounds {
        crate::grid::PitchBounds::new(self.width, self.height, self.goal_band_height)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
