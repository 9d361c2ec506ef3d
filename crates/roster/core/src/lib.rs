//! Pure unit composition rules and the data model they operate on.
//!
//! `roster-core` derives a unit's effective state (stats, keywords, weapons,
//! abilities, points) from its authored record plus equipped upgrade cards.
//! Every derivation flows through [`compose::compose`]; catalogs are read
//! through the oracle traits in [`oracle`] so storage stays the caller's
//! concern.
pub mod compose;
pub mod config;
pub mod error;
pub mod keyword;
pub mod model;
pub mod oracle;
pub mod validate;
pub mod vocab;

pub use compose::{
    ComposedArmy, ComposedKeyword, ComposedUnit, EffectiveStats, EquippedSummary, EquippedUpgrade,
    GrantedAbility, ResolvedStats, SourcedWeapon, StatAttribution, StatValue, compose,
    compose_army, resolve, sync_model_count, total_points,
};
pub use config::RosterConfig;
pub use error::{ErrorSeverity, RosterError};
pub use keyword::{KeywordToken, ParsedKeyword, StackedKeyword, aggregate, aggregate_tokens};
pub use model::{
    Ability, Army, AttackDice, BASE_UNIT_SOURCE, CustomKeyword, Source, StatKind, StatModifiers,
    Unit, UpgradeCard, UpgradeEffects, UpgradeSlot, Weapon,
};
pub use oracle::{
    AbilityOracle, Catalogs, KeywordOracle, RosterCatalogs, UnitOracle, UpgradeOracle,
};
pub use validate::{ValidationError, ValidationReport, validate_unit};
pub use vocab::{DefenseDice, Faction, KeywordInfo, SlotKind, UnitType, WeaponRange};
