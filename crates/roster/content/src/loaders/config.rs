//! Roster configuration loader.

use std::path::Path;

use roster_core::RosterConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for roster configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<RosterConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<RosterConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(RosterConfig::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<RosterConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("points_limit = 1000\n").unwrap();
        assert_eq!(config.points_limit, 1000);
        assert!(config.show_attributions);

        let empty = ConfigLoader::parse("").unwrap();
        assert_eq!(empty, RosterConfig::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.points_limit, RosterConfig::DEFAULT_POINTS_LIMIT);
    }
}
