/// A unit statistic that upgrades can modify.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Wounds,
    /// Morale stat of non-vehicle units.
    Courage,
    /// Morale stat of vehicles.
    Resilience,
    Speed,
    ModelCount,
    SurgeAttack,
    SurgeDefense,
}

impl StatKind {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Wounds => "Wounds",
            Self::Courage => "Courage",
            Self::Resilience => "Resilience",
            Self::Speed => "Speed",
            Self::ModelCount => "Models",
            Self::SurgeAttack => "Surge (Attack)",
            Self::SurgeDefense => "Surge (Defense)",
        }
    }
}
