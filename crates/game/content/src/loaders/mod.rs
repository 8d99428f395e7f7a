//! Content loaders for reading match data from files.
//!
//! Squads come from RON, match configuration from TOML. Loaders return
//! plain content types; wiring them into a running match is the runtime's
//! job.

pub mod config;
pub mod squad;

pub use config::ConfigLoader;
pub use squad::SquadLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
