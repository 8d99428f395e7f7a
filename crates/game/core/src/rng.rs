//! Seedable RNG oracle for deterministic tackle resolution.
//!
//! The engine never calls a global random source. Every draw goes through
//! [`RngOracle`] with a seed derived from the snapshot, so a whole match
//! replays identically from its kickoff seed and tests can fix outcomes.

/// Deterministic random source injected into the engine.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform draw in `[0, 1)`, the shape the tackle model consumes.
    fn unit_draw(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (u64::from(u32::MAX) + 1) as f64
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Stateless here; the state
/// is the caller-supplied seed, which keeps the oracle `Sync` and the
/// engine a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Compute a per-event seed from match state components.
///
/// # Arguments
///
/// * `match_seed` - base seed fixed at kickoff
/// * `turn` - round number (each round gets fresh draws)
/// * `actor_id` - the contesting actor
/// * `context` - disambiguates multiple rolls within the same round
pub fn compute_seed(match_seed: u64, turn: u32, actor_id: u32, context: u32) -> u64 {
    // SplitMix64/FxHash-style mixing constants.
    let mut hash = match_seed;
    hash ^= u64::from(turn).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor_id).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step.
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
