use crate::vocab::Faction;

/// An ordered list of unit references fielded together.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Army {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    /// Unit ids in list order. The same id may appear more than once.
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points_limit: Option<i32>,
}

impl Army {
    pub fn new(id: impl Into<String>, name: impl Into<String>, faction: Faction) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            units: Vec::new(),
            points_limit: None,
        }
    }

    /// Appends a unit reference (builder pattern).
    pub fn with_unit(mut self, unit_id: impl Into<String>) -> Self {
        self.units.push(unit_id.into());
        self
    }

    /// Sets the points limit (builder pattern).
    pub fn with_points_limit(mut self, limit: i32) -> Self {
        self.points_limit = Some(limit);
        self
    }
}
