//! Tackle resolution model.
//!
//! Pure probability functions consumed by the engine. All randomness comes
//! in through the [`RngOracle`](crate::rng::RngOracle) so outcomes are
//! reproducible from the match seed.

use crate::config::MatchConfig;
use crate::rng::RngOracle;
use crate::state::ActorState;

/// Spatial context of a possession contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// Exact coordinate match between contesting actor and ball.
    SameTile,
    /// Chebyshev-distance-1 adjacency; a harder interception at range.
    Zone,
}

/// Which side keeps (or takes) the ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TackleWinner {
    Carrier,
    Tackler,
}

/// The tackler's win probability against the carrier.
///
/// # Formula
///
/// ```text
/// p = 0.5 + (tackler.strength - carrier.technique) / 100
///     + 0.2 (same-tile)  |  - 0.2 (zone)
/// clamped to [0.1, 0.9]
/// ```
///
/// The clamp guarantees both outcomes remain possible regardless of
/// attribute spread.
pub fn win_probability(carrier: &ActorState, tackler: &ActorState, contact: ContactKind) -> f64 {
    let differential =
        f64::from(tackler.attributes.strength) - f64::from(carrier.attributes.technique);
    let shift = match contact {
        ContactKind::SameTile => MatchConfig::TACKLE_CONTACT_SHIFT,
        ContactKind::Zone => -MatchConfig::TACKLE_CONTACT_SHIFT,
    };

    let p = MatchConfig::TACKLE_BASE_CHANCE
        + differential / MatchConfig::TACKLE_ATTRIBUTE_SCALE
        + shift;
    p.clamp(MatchConfig::TACKLE_MIN_CHANCE, MatchConfig::TACKLE_MAX_CHANCE)
}

/// Decides a contest from a probability and a uniform draw in `[0, 1)`.
pub fn check_tackle(probability: f64, draw: f64) -> TackleWinner {
    if draw < probability {
        TackleWinner::Tackler
    } else {
        TackleWinner::Carrier
    }
}

/// Complete tackle resolution: one uniform draw against the contextual
/// win probability.
pub fn resolve_tackle(
    carrier: &ActorState,
    tackler: &ActorState,
    contact: ContactKind,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> TackleWinner {
    let probability = win_probability(carrier, tackler, contact);
    check_tackle(probability, rng.unit_draw(seed))
}
