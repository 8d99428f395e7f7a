//! Deterministic match rules and data types shared across clients.
//!
//! `pitch-core` defines the canonical rules (commands, engine, match state)
//! and exposes pure APIs that can be reused by both the runtime and offline
//! tools. All state mutation flows through [`engine::RoundEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod command;
pub mod config;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod state;
pub mod tackle;

pub use command::{Command, CommandError, CommandKind, CommandQueue, validate};
pub use config::MatchConfig;
pub use engine::RoundEngine;
pub use grid::{PitchBounds, is_adjacent, line_path, manhattan_distance};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{ActorId, ActorState, Attributes, MatchState, Phase, Score, TeamId};
pub use tackle::{ContactKind, TackleWinner, check_tackle, resolve_tackle, win_probability};

/// Integer grid coordinate. Equality is exact integer comparison.
pub use state::Position;
