//! Runtime orchestration for the deterministic match simulation.
//!
//! This crate wires the command provider abstraction, event extraction, and
//! the round engine into a cohesive session API. Consumers embed
//! [`MatchSession`] to queue planning commands, drive rounds, and subscribe
//! to match events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator that owns the snapshot
//! - [`api`] exposes the types downstream clients implement
//! - [`providers`] ships the built-in AI planner
//! - [`events`] derives high-level events from snapshot deltas
pub mod api;
pub mod error;
pub mod events;
pub mod providers;
pub mod session;

pub use api::{CommandProvider, IdleCommandProvider};
pub use error::{Result, RuntimeError};
pub use events::{MatchEvent, extract_events};
pub use providers::RandomWalkProvider;
pub use session::MatchSession;
