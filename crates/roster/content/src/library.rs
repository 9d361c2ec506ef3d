//! Id-keyed registries over loaded roster records.

use std::collections::HashMap;

use roster_core::{
    Ability, AbilityOracle, Army, Catalogs, CustomKeyword, KeywordOracle, UnitOracle, Unit,
    UpgradeCard, UpgradeOracle,
};

/// A record addressable by its string id.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($record:ty),* $(,)?) => {
        $(
            impl Record for $record {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(Unit, UpgradeCard, Ability, CustomKeyword, Army);

/// Records in load order with an id index.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Registry<T> {
    /// Builds a registry, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns the first id that appears more than once.
    pub fn new(records: Vec<T>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id().to_string(), position).is_some() {
                return Err(record.id().to_string());
            }
        }
        Ok(Self { records, index })
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// Every catalog of a data directory, ready to compose against.
#[derive(Clone, Debug, Default)]
pub struct RosterLibrary {
    pub units: Registry<Unit>,
    pub upgrades: Registry<UpgradeCard>,
    pub abilities: Registry<Ability>,
    pub keywords: Registry<CustomKeyword>,
    pub armies: Registry<Army>,
}

impl RosterLibrary {
    /// Catalog bundle for [`roster_core::compose`].
    pub fn catalogs(&self) -> Catalogs<'_, Self, Self, Self> {
        Catalogs::new(self, self, self)
    }

    pub fn army(&self, id: &str) -> Option<&Army> {
        self.armies.get(id)
    }
}

impl UnitOracle for RosterLibrary {
    fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }
}

impl UpgradeOracle for RosterLibrary {
    fn upgrade(&self, id: &str) -> Option<&UpgradeCard> {
        self.upgrades.get(id)
    }
}

impl AbilityOracle for RosterLibrary {
    fn ability(&self, id: &str) -> Option<&Ability> {
        self.abilities.get(id)
    }
}

impl KeywordOracle for RosterLibrary {
    fn custom_keyword(&self, id: &str) -> Option<&CustomKeyword> {
        self.keywords.get(id)
    }
}
