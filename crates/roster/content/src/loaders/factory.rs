//! Content factory for building a roster library from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use roster_core::{Ability, Army, CustomKeyword, RosterConfig, Unit, UpgradeCard};

use crate::library::{Record, Registry, RosterLibrary};
use crate::loaders::{
    AbilityLoader, ArmyLoader, ConfigLoader, CustomKeywordLoader, LoadResult, UnitLoader,
    UpgradeLoader,
};

/// Content factory that loads all roster content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── units.ron
/// ├── upgrades.ron
/// ├── abilities.ron
/// ├── custom_keywords.ron  (optional)
/// └── armies.ron           (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load roster configuration from `config.toml`, falling back to defaults.
    pub fn load_config(&self) -> LoadResult<RosterConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load unit records from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<Unit>> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load upgrade cards from `upgrades.ron`.
    pub fn load_upgrades(&self) -> LoadResult<Vec<UpgradeCard>> {
        UpgradeLoader::load(&self.data_dir.join("upgrades.ron"))
    }

    /// Load abilities from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<Vec<Ability>> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load custom keywords from `custom_keywords.ron`. A missing file is empty.
    pub fn load_custom_keywords(&self) -> LoadResult<Vec<CustomKeyword>> {
        self.load_optional("custom_keywords.ron", CustomKeywordLoader::load)
    }

    /// Load army lists from `armies.ron`. A missing file is empty.
    pub fn load_armies(&self) -> LoadResult<Vec<Army>> {
        self.load_optional("armies.ron", ArmyLoader::load)
    }

    /// Load every catalog into an id-keyed library.
    pub fn load_library(&self) -> LoadResult<RosterLibrary> {
        let library = RosterLibrary {
            units: registry("units", self.load_units()?)?,
            upgrades: registry("upgrades", self.load_upgrades()?)?,
            abilities: registry("abilities", self.load_abilities()?)?,
            keywords: registry("custom keywords", self.load_custom_keywords()?)?,
            armies: registry("armies", self.load_armies()?)?,
        };

        tracing::info!(
            data_dir = %self.data_dir.display(),
            units = library.units.len(),
            upgrades = library.upgrades.len(),
            abilities = library.abilities.len(),
            keywords = library.keywords.len(),
            armies = library.armies.len(),
            "loaded roster library"
        );

        Ok(library)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_optional<T>(
        &self,
        file_name: &str,
        load: fn(&Path) -> LoadResult<Vec<T>>,
    ) -> LoadResult<Vec<T>> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "optional catalog absent");
            return Ok(Vec::new());
        }
        load(&path)
    }
}

fn registry<T: Record>(what: &str, records: Vec<T>) -> LoadResult<Registry<T>> {
    Registry::new(records)
        .map_err(|id| anyhow::anyhow!("duplicate id '{}'", id))
        .with_context(|| format!("Failed to index {}", what))
}
