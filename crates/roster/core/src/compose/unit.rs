//! Composition facade.
//!
//! [`compose`] is the single entry point every consumer (editor preview, list
//! views, export) calls to obtain a unit's effective state. It is a pure
//! function of its inputs: nothing is cached and nothing is mutated, so the
//! same inputs always produce an identical [`ComposedUnit`].

use super::arsenal::{
    GrantedAbility, SourcedWeapon, aggregate_abilities, aggregate_upgrade_abilities,
    aggregate_weapons,
};
use super::equipped::{EquippedUpgrade, resolve_equipped};
use super::points::total_points;
use super::stats::{ResolvedStats, StatAttribution, resolve};
use crate::keyword::{CUSTOM_MARKER, KeywordToken, StackedKeyword, aggregate_tokens};
use crate::model::{Ability, CustomKeyword, Source, StatKind, Unit};
use crate::oracle::{AbilityOracle, KeywordOracle, UpgradeOracle};
use crate::vocab::{DefenseDice, Faction, SlotKind, UnitType};

/// A stat as authored and as modified, with the upgrades that changed it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatValue<T> {
    pub base: T,
    pub value: T,
    /// Names of contributing upgrade cards, in walk order.
    pub sources: Vec<String>,
}

impl<T: PartialEq> StatValue<T> {
    pub fn is_modified(&self) -> bool {
        self.base != self.value
    }
}

/// Every modifiable stat of a composed unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    pub wounds: StatValue<i32>,
    /// Which stat `courage_or_resilience` holds: courage, or resilience for vehicles.
    pub morale_stat: StatKind,
    pub courage_or_resilience: StatValue<i32>,
    pub speed: StatValue<i32>,
    pub model_count: StatValue<i32>,
    pub surge_attack: StatValue<bool>,
    pub surge_defense: StatValue<bool>,
}

impl EffectiveStats {
    fn new(unit: &Unit, resolved: &ResolvedStats) -> Self {
        Self {
            wounds: StatValue {
                base: unit.wounds,
                value: resolved.wounds,
                sources: resolved.sources(StatKind::Wounds),
            },
            morale_stat: resolved.morale_stat,
            courage_or_resilience: StatValue {
                base: unit.morale(),
                value: resolved.courage_or_resilience,
                sources: resolved.sources(resolved.morale_stat),
            },
            speed: StatValue {
                base: unit.speed,
                value: resolved.speed,
                sources: resolved.sources(StatKind::Speed),
            },
            model_count: StatValue {
                base: unit.min_model_count,
                value: resolved.model_count,
                sources: resolved.sources(StatKind::ModelCount),
            },
            surge_attack: StatValue {
                base: unit.surge_attack,
                value: resolved.surge_attack,
                sources: resolved.sources(StatKind::SurgeAttack),
            },
            surge_defense: StatValue {
                base: unit.surge_defense,
                value: resolved.surge_defense,
                sources: resolved.sources(StatKind::SurgeDefense),
            },
        }
    }
}

/// A keyword on a composed unit, stacked and labelled for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposedKeyword {
    pub token: KeywordToken,
    /// `Guardian 3`, `Cunning`, or `<custom name>*`.
    pub label: String,
    pub from_upgrade: bool,
    pub sources: Vec<Source>,
    /// Catalog record for custom keywords.
    pub custom: Option<CustomKeyword>,
}

/// An equipped upgrade as listed on a composed unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedSummary {
    pub id: String,
    pub name: String,
    pub slot: SlotKind,
    pub points_cost: i32,
}

/// The derived, never-persisted view of a unit with its upgrades applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposedUnit {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    pub unit_type: UnitType,
    pub is_vehicle: bool,
    pub defense_dice: DefenseDice,
    pub stats: EffectiveStats,
    /// Every stat contribution, in walk order.
    pub attributions: Vec<StatAttribution>,
    pub keywords: Vec<ComposedKeyword>,
    pub weapons: Vec<SourcedWeapon>,
    pub abilities: Vec<Ability>,
    pub upgrade_abilities: Vec<GrantedAbility>,
    pub equipped: Vec<EquippedSummary>,
    pub base_points: i32,
    pub total_points: i32,
}

impl ComposedUnit {
    /// Points spent on upgrades.
    pub fn upgrade_points(&self) -> i32 {
        self.total_points.saturating_sub(self.base_points)
    }

    pub fn keyword_labels(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.label.as_str()).collect()
    }

    pub fn has_upgrades(&self) -> bool {
        !self.equipped.is_empty()
    }
}

/// Composes `unit` with its equipped upgrades.
///
/// Equipped ids, ability ids and custom keyword references that are missing
/// from their catalog are skipped.
pub fn compose<U, A, K>(unit: &Unit, upgrades: &U, abilities: &A, keywords: &K) -> ComposedUnit
where
    U: UpgradeOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    K: KeywordOracle + ?Sized,
{
    let equipped = resolve_equipped(unit, upgrades);
    let resolved = resolve(unit, &equipped);
    let total_points = total_points(unit, &equipped);

    tracing::trace!(
        unit = %unit.id,
        equipped = equipped.len(),
        total_points,
        "composed unit"
    );

    ComposedUnit {
        id: unit.id.clone(),
        name: unit.name.clone(),
        faction: unit.faction,
        unit_type: unit.unit_type.clone(),
        is_vehicle: unit.is_vehicle,
        defense_dice: unit.defense_dice,
        stats: EffectiveStats::new(unit, &resolved),
        keywords: compose_keywords(unit, &equipped, keywords),
        weapons: aggregate_weapons(unit, &equipped),
        abilities: aggregate_abilities(unit, abilities),
        upgrade_abilities: aggregate_upgrade_abilities(&equipped, abilities),
        equipped: equipped.iter().map(summarize).collect(),
        attributions: resolved.attributions,
        base_points: unit.points,
        total_points,
    }
}

fn compose_keywords<K>(
    unit: &Unit,
    equipped: &[EquippedUpgrade<'_>],
    keywords: &K,
) -> Vec<ComposedKeyword>
where
    K: KeywordOracle + ?Sized,
{
    let base = Source::BaseUnit;
    let upgrade_sources: Vec<Source> = equipped.iter().map(EquippedUpgrade::source).collect();

    let from_unit = unit.keywords.iter().map(|token| (token, &base));
    let from_upgrades = equipped
        .iter()
        .zip(&upgrade_sources)
        .flat_map(|(upgrade, source)| {
            upgrade
                .card
                .effects
                .add_keywords
                .iter()
                .map(move |token| (token, source))
        });

    aggregate_tokens(from_unit.chain(from_upgrades))
        .into_iter()
        .filter_map(|stacked| label_keyword(stacked, keywords, &unit.id))
        .collect()
}

fn label_keyword<K>(stacked: StackedKeyword, keywords: &K, unit_id: &str) -> Option<ComposedKeyword>
where
    K: KeywordOracle + ?Sized,
{
    let custom = match stacked.token.custom_id() {
        Some(id) => match keywords.custom_keyword(id) {
            Some(record) => Some(record.clone()),
            None => {
                tracing::debug!(
                    unit = unit_id,
                    keyword = id,
                    "skipping custom keyword missing from catalog"
                );
                return None;
            }
        },
        None => None,
    };

    let label = match &custom {
        Some(record) => format!("{}{}", record.name, CUSTOM_MARKER),
        None => stacked.token.label(),
    };

    Some(ComposedKeyword {
        label,
        token: stacked.token,
        from_upgrade: stacked.from_upgrade,
        sources: stacked.sources,
        custom,
    })
}

fn summarize(upgrade: &EquippedUpgrade<'_>) -> EquippedSummary {
    EquippedSummary {
        id: upgrade.card.id.clone(),
        name: upgrade.card.name.clone(),
        slot: upgrade.slot,
        points_cost: upgrade.card.points_cost,
    }
}
