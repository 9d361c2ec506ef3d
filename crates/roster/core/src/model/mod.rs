//! Authored roster records and the shared provenance types.
//!
//! Units, upgrade cards, abilities and custom keywords are plain data owned by
//! the persistence layer. The engine only reads them.
mod ability;
mod army;
mod source;
mod stat;
mod unit;
mod upgrade;
mod weapon;

pub use ability::{Ability, CustomKeyword};
pub use army::Army;
pub use source::{BASE_UNIT_SOURCE, Source};
pub use stat::StatKind;
pub use unit::{Unit, UpgradeSlot};
pub use upgrade::{StatModifiers, UpgradeCard, UpgradeEffects};
pub use weapon::{AttackDice, Weapon};
