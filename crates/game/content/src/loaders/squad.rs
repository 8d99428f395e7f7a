//! Squad roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::squad::Squad;

/// Loader for squad rosters from RON files.
pub struct SquadLoader;

impl SquadLoader {
    /// Load a single squad from a RON file.
    ///
    /// RON format: `Squad { name, players: [PlayerTemplate] }`. Roster
    /// order is preserved; it drives kickoff rows and the opening carrier.
    pub fn load(path: &Path) -> LoadResult<Squad> {
        let content = read_file(path)?;
        let squad: Squad = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse squad RON: {}", e))?;

        if squad.players.is_empty() {
            return Err(anyhow::anyhow!("Squad '{}' has no players", squad.name));
        }
        Ok(squad)
    }
}
