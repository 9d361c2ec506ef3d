//! Closed enumerations with stable string identifiers.
//!
//! Each enum serializes to its snake_case identifier (the same string strum
//! parses and displays) and exposes a human-readable name for rendering.

/// Army faction.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Rebels,
    Empire,
    Republic,
    Separatists,
    Mercenary,
}

impl Faction {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Rebels => "Rebel Alliance",
            Self::Empire => "Galactic Empire",
            Self::Republic => "Galactic Republic",
            Self::Separatists => "Separatist Alliance",
            Self::Mercenary => "Shadow Collective",
        }
    }
}

/// Defense die color.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum DefenseDice {
    #[default]
    White,
    Red,
}

impl DefenseDice {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
        }
    }
}

/// Upgrade slot type.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotKind {
    HeavyWeapon,
    Personnel,
    Force,
    Command,
    Hardpoint,
    Gear,
    Grenades,
    Comms,
    Pilot,
    Training,
    Generator,
    Armament,
    Crew,
    Ordnance,
    Illicit,
}

impl SlotKind {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HeavyWeapon => "Heavy Weapon",
            Self::Personnel => "Personnel",
            Self::Force => "Force",
            Self::Command => "Command",
            Self::Hardpoint => "Hardpoint",
            Self::Gear => "Gear",
            Self::Grenades => "Grenades",
            Self::Comms => "Comms",
            Self::Pilot => "Pilot",
            Self::Training => "Training",
            Self::Generator => "Generator",
            Self::Armament => "Armament",
            Self::Crew => "Crew",
            Self::Ordnance => "Ordnance",
            Self::Illicit => "Illicit",
        }
    }
}

/// Weapon range band.
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
#[strum(ascii_case_insensitive)]
pub enum WeaponRange {
    #[strum(serialize = "melee")]
    #[cfg_attr(feature = "serde", serde(rename = "melee"))]
    Melee,
    #[strum(serialize = "range_1")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1"))]
    Range1,
    #[strum(serialize = "range_1_2")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1_2"))]
    Range1To2,
    #[strum(serialize = "range_1_3")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1_3"))]
    Range1To3,
    #[strum(serialize = "range_1_4")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1_4"))]
    Range1To4,
    #[strum(serialize = "range_1_5")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1_5"))]
    Range1To5,
    #[strum(serialize = "range_2_4")]
    #[cfg_attr(feature = "serde", serde(rename = "range_2_4"))]
    Range2To4,
    #[strum(serialize = "range_1_infinite")]
    #[cfg_attr(feature = "serde", serde(rename = "range_1_infinite"))]
    Range1ToInfinite,
}

impl WeaponRange {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Melee => "Melee",
            Self::Range1 => "Range 1",
            Self::Range1To2 => "Range 1-2",
            Self::Range1To3 => "Range 1-3",
            Self::Range1To4 => "Range 1-4",
            Self::Range1To5 => "Range 1-5",
            Self::Range2To4 => "Range 2-4",
            Self::Range1ToInfinite => "Range 1-∞",
        }
    }

    pub const fn is_melee(&self) -> bool {
        matches!(self, Self::Melee)
    }
}

/// Unit type tag.
///
/// The closed set covers the rules' unit types; authors may also define their
/// own, which round-trip through [`UnitType::Custom`] unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitType {
    Trooper,
    CloneTrooper,
    DroidTrooper,
    WookieeTrooper,
    CreatureTrooper,
    EmplacementTrooper,
    GroundVehicle,
    RepulsorVehicle,
    Custom(String),
}

impl UnitType {
    const KNOWN: [(Self, &'static str, &'static str); 8] = [
        (Self::Trooper, "trooper", "Trooper"),
        (Self::CloneTrooper, "clone_trooper", "Clone Trooper"),
        (Self::DroidTrooper, "droid_trooper", "Droid Trooper"),
        (Self::WookieeTrooper, "wookiee_trooper", "Wookiee Trooper"),
        (Self::CreatureTrooper, "creature_trooper", "Creature Trooper"),
        (
            Self::EmplacementTrooper,
            "emplacement_trooper",
            "Emplacement Trooper",
        ),
        (Self::GroundVehicle, "ground_vehicle", "Ground Vehicle"),
        (Self::RepulsorVehicle, "repulsor_vehicle", "Repulsor Vehicle"),
    ];

    /// Stable identifier (`trooper`, `ground_vehicle`, or the custom tag).
    pub fn id(&self) -> &str {
        match self {
            Self::Custom(tag) => tag,
            known => Self::KNOWN
                .iter()
                .find(|(kind, _, _)| kind == known)
                .map(|(_, id, _)| *id)
                .unwrap_or_default(),
        }
    }

    /// Human-readable name; custom tags are shown as authored.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Custom(tag) => tag,
            known => Self::KNOWN
                .iter()
                .find(|(kind, _, _)| kind == known)
                .map(|(_, _, name)| *name)
                .unwrap_or_default(),
        }
    }

    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub const fn is_vehicle(&self) -> bool {
        matches!(self, Self::GroundVehicle | Self::RepulsorVehicle)
    }
}

impl core::fmt::Display for UnitType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl core::str::FromStr for UnitType {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let known = Self::KNOWN
            .iter()
            .find(|(_, id, _)| id.eq_ignore_ascii_case(trimmed))
            .map(|(kind, _, _)| kind.clone());
        Ok(known.unwrap_or_else(|| Self::Custom(trimmed.to_string())))
    }
}

impl From<String> for UnitType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<UnitType> for String {
    fn from(value: UnitType) -> Self {
        match value {
            UnitType::Custom(tag) => tag,
            known => known.id().to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnitType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnitType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}
