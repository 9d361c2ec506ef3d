/// Label used for anything the unit carries intrinsically.
pub const BASE_UNIT_SOURCE: &str = "Base Unit";

/// Where a weapon, keyword or ability on a composed unit came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Source {
    BaseUnit,
    Upgrade { id: String, name: String },
}

impl Source {
    pub fn upgrade(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Upgrade {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Display label: [`BASE_UNIT_SOURCE`] or the upgrade card's name.
    pub fn name(&self) -> &str {
        match self {
            Self::BaseUnit => BASE_UNIT_SOURCE,
            Self::Upgrade { name, .. } => name,
        }
    }

    pub const fn is_upgrade(&self) -> bool {
        matches!(self, Self::Upgrade { .. })
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
