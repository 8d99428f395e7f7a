//! Static match content and data loaders.
//!
//! This crate houses roster definitions and the kickoff formation:
//! - Player templates and squads (built-in defaults, data-driven via RON)
//! - Kickoff placement for both possessing sides
//! - Match configuration loading (data-driven via TOML)
//!
//! Content feeds the runtime at match setup and never appears in the
//! per-round snapshot; `pitch-core` stays free of file formats.

pub mod kickoff;
pub mod squad;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use kickoff::{kickoff, reposition_for_kickoff};
pub use squad::{PlayerTemplate, Squad, default_squads};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SquadLoader};
