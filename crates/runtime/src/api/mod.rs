//! Types downstream clients interact with.

pub mod providers;

pub use providers::{CommandProvider, IdleCommandProvider};
