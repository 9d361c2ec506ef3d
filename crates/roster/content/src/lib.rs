//! Data-driven roster content and loaders.
//!
//! This crate reads a data directory of RON catalogs (units, upgrade cards,
//! abilities, custom keywords, armies) plus an optional TOML configuration,
//! and indexes the records into a [`RosterLibrary`] that implements every
//! `roster-core` oracle.
//!
//! All loaders use roster-core types directly with serde for RON/TOML deserialization.

pub mod library;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use library::{Record, Registry, RosterLibrary};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ArmyLoader, ConfigLoader, ContentFactory, CustomKeywordLoader, LoadResult,
    UnitLoader, UpgradeLoader,
};
