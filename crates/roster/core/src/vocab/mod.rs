//! Read-only reference vocabularies.
//!
//! Unit types, factions, defense dice, slot kinds, weapon ranges and the
//! canonical keyword lists. The engine consults these tables but never owns or
//! mutates them.
mod keywords;
mod kinds;

pub use keywords::{
    KeywordInfo, UNIT_KEYWORDS, WEAPON_KEYWORDS, keyword_info, unit_keyword, weapon_keyword,
};
pub use kinds::{DefenseDice, Faction, SlotKind, UnitType, WeaponRange};
