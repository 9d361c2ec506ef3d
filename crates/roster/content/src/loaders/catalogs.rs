//! Record catalog loaders.
//!
//! Each catalog file is a RON struct wrapping one list, e.g.
//!
//! ```ron
//! UpgradeCatalog(
//!     upgrades: [
//!         (id: "grapplers", name: "Grappling Hooks", points_cost: 1, slot: Some(gear)),
//!     ],
//! )
//! ```

use std::path::Path;

use roster_core::{Ability, Army, CustomKeyword, Unit, UpgradeCard};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<Unit>,
}

/// Upgrade catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeCatalog {
    pub upgrades: Vec<UpgradeCard>,
}

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalog {
    pub abilities: Vec<Ability>,
}

/// Custom keyword catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomKeywordCatalog {
    pub keywords: Vec<CustomKeyword>,
}

/// Army catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmyCatalog {
    pub armies: Vec<Army>,
}

fn parse_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}

/// Loader for unit catalogs from RON files.
pub struct UnitLoader;

impl UnitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Unit>> {
        let catalog: UnitCatalog = parse_ron(path, "unit catalog")?;
        Ok(catalog.units)
    }
}

/// Loader for upgrade card catalogs from RON files.
pub struct UpgradeLoader;

impl UpgradeLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UpgradeCard>> {
        let catalog: UpgradeCatalog = parse_ron(path, "upgrade catalog")?;
        Ok(catalog.upgrades)
    }
}

/// Loader for ability catalogs from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let catalog: AbilityCatalog = parse_ron(path, "ability catalog")?;
        Ok(catalog.abilities)
    }
}

/// Loader for custom keyword catalogs from RON files.
pub struct CustomKeywordLoader;

impl CustomKeywordLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CustomKeyword>> {
        let catalog: CustomKeywordCatalog = parse_ron(path, "custom keyword catalog")?;
        Ok(catalog.keywords)
    }
}

/// Loader for army lists from RON files.
pub struct ArmyLoader;

impl ArmyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Army>> {
        let catalog: ArmyCatalog = parse_ron(path, "army catalog")?;
        Ok(catalog.armies)
    }
}
