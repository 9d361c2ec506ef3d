//! Derivation of a unit's effective state from its equipped upgrades.
//!
//! Every item here is a pure function of authored data plus catalog lookups.
//! The walk order is fixed: upgrade slots in authored order, then equipped ids
//! within each slot in authored order. Stat attributions, weapons and
//! upgrade-granted abilities all follow it.
mod army;
mod arsenal;
mod equipped;
mod points;
mod stats;
mod unit;

pub use army::{ComposedArmy, compose_army};
pub use arsenal::{
    GrantedAbility, SourcedWeapon, aggregate_abilities, aggregate_upgrade_abilities,
    aggregate_weapons,
};
pub use equipped::{EquippedUpgrade, resolve_equipped};
pub use points::total_points;
pub use stats::{ResolvedStats, StatAttribution, resolve, sync_model_count};
pub use unit::{
    ComposedKeyword, ComposedUnit, EffectiveStats, EquippedSummary, StatValue, compose,
};
