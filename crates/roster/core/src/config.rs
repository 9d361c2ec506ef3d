/// Roster-wide tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterConfig {
    /// Points limit applied to armies that do not set their own.
    pub points_limit: i32,
    /// Whether views annotate modified stats with the contributing upgrades.
    pub show_attributions: bool,
}

impl RosterConfig {
    pub const DEFAULT_POINTS_LIMIT: i32 = 800;

    pub fn new() -> Self {
        Self {
            points_limit: Self::DEFAULT_POINTS_LIMIT,
            show_attributions: true,
        }
    }

    pub fn with_points_limit(mut self, points_limit: i32) -> Self {
        self.points_limit = points_limit;
        self
    }

    pub fn with_show_attributions(mut self, show_attributions: bool) -> Self {
        self.show_attributions = show_attributions;
        self
    }

    /// The limit that applies to an army: its own when set, the default otherwise.
    pub fn effective_limit(&self, army_limit: Option<i32>) -> i32 {
        army_limit.unwrap_or(self.points_limit)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new()
    }
}
