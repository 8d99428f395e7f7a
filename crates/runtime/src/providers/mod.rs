//! Built-in command providers.

pub mod ai;

pub use ai::RandomWalkProvider;
