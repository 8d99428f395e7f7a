//! Match configuration loader.

use std::path::Path;

use pitch_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load match configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        let config: MatchConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.width < 4 || config.height < 2 || config.goal_band_height > config.height {
            return Err(anyhow::anyhow!(
                "Invalid pitch dimensions: {}x{} with goal band {}",
                config.width,
                config.height,
                config.goal_band_height
            ));
        }
        Ok(config)
    }
}
