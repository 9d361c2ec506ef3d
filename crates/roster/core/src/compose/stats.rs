//! Stat modifier resolution.
//!
//! Folds the stat deltas of every equipped upgrade into one record, keeping an
//! attribution entry per contribution so views can show `base → modified`.
//!
//! # Rules
//!
//! - Numeric deltas add up in walk order and are never clamped
//! - Surge flags only switch on; no card can switch a flag off
//! - Model count is `min_model_count + Σ model_count_change`
//! - Vehicles take both `courage` and `resilience` deltas as resilience;
//!   other units only take `courage`
//! - Absent fields and zero deltas contribute nothing and leave no attribution

use super::equipped::{EquippedUpgrade, resolve_equipped};
use crate::model::{StatKind, Unit};
use crate::oracle::UpgradeOracle;

/// One upgrade's contribution to one stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatAttribution {
    pub stat: StatKind,
    /// Display name of the contributing upgrade card.
    pub source: String,
    /// Additive delta. Surge attributions always carry `1`.
    pub delta: i32,
}

/// A unit's stats after applying every equipped upgrade.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStats {
    pub wounds: i32,
    /// Which stat `courage_or_resilience` holds for this unit.
    pub morale_stat: StatKind,
    pub courage_or_resilience: i32,
    pub speed: i32,
    pub model_count: i32,
    pub surge_attack: bool,
    pub surge_defense: bool,
    pub attributions: Vec<StatAttribution>,
}

impl ResolvedStats {
    fn from_base(unit: &Unit) -> Self {
        Self {
            wounds: unit.wounds,
            morale_stat: unit.morale_stat(),
            courage_or_resilience: unit.morale(),
            speed: unit.speed,
            model_count: unit.min_model_count,
            surge_attack: unit.surge_attack,
            surge_defense: unit.surge_defense,
            attributions: Vec::new(),
        }
    }

    fn add(&mut self, stat: StatKind, delta: Option<i32>, source: &str) {
        let Some(delta) = delta.filter(|delta| *delta != 0) else {
            return;
        };

        let value = match stat {
            StatKind::Wounds => &mut self.wounds,
            StatKind::Courage | StatKind::Resilience => &mut self.courage_or_resilience,
            StatKind::Speed => &mut self.speed,
            StatKind::ModelCount => &mut self.model_count,
            StatKind::SurgeAttack | StatKind::SurgeDefense => return,
        };
        *value = value.saturating_add(delta);

        self.attribute(stat, source, delta);
    }

    fn grant(&mut self, stat: StatKind, granted: Option<bool>, source: &str) {
        if granted != Some(true) {
            return;
        }

        match stat {
            StatKind::SurgeAttack => self.surge_attack = true,
            StatKind::SurgeDefense => self.surge_defense = true,
            _ => return,
        }

        self.attribute(stat, source, 1);
    }

    fn attribute(&mut self, stat: StatKind, source: &str, delta: i32) {
        self.attributions.push(StatAttribution {
            stat,
            source: source.to_string(),
            delta,
        });
    }

    /// Distinct upgrade names that contributed to `stat`, in walk order.
    pub fn sources(&self, stat: StatKind) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for attribution in self.attributions.iter().filter(|a| a.stat == stat) {
            if !names.contains(&attribution.source) {
                names.push(attribution.source.clone());
            }
        }
        names
    }

    /// Net delta applied to `stat` by upgrades.
    pub fn total_delta(&self, stat: StatKind) -> i32 {
        self.attributions
            .iter()
            .filter(|a| a.stat == stat)
            .fold(0, |total, a| total.saturating_add(a.delta))
    }
}

/// Resolves the unit's stats under the given equipped upgrades.
pub fn resolve(unit: &Unit, equipped: &[EquippedUpgrade<'_>]) -> ResolvedStats {
    let mut stats = ResolvedStats::from_base(unit);

    for upgrade in equipped {
        let card = upgrade.card;
        let source = card.name.as_str();
        let mods = &card.effects.stat_modifiers;

        stats.add(StatKind::Wounds, mods.wounds, source);
        if unit.is_vehicle {
            stats.add(StatKind::Resilience, mods.resilience, source);
            stats.add(StatKind::Resilience, mods.courage, source);
        } else {
            stats.add(StatKind::Courage, mods.courage, source);
        }
        stats.add(StatKind::Speed, mods.speed, source);
        stats.add(
            StatKind::ModelCount,
            Some(card.effects.model_count_change),
            source,
        );
        stats.grant(StatKind::SurgeAttack, mods.surge_attack, source);
        stats.grant(StatKind::SurgeDefense, mods.surge_defense, source);
    }

    stats
}

/// Writes the derived model count back into `current_model_count`.
///
/// Returns the new value.
pub fn sync_model_count<U>(unit: &mut Unit, upgrades: &U) -> i32
where
    U: UpgradeOracle + ?Sized,
{
    let model_count = {
        let equipped = resolve_equipped(unit, upgrades);
        resolve(unit, &equipped).model_count
    };
    unit.current_model_count = Some(model_count);
    model_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StatModifiers, UpgradeCard, UpgradeEffects, UpgradeSlot};
    use crate::vocab::{Faction, SlotKind, UnitType};

    fn card(id: &str, mods: StatModifiers) -> UpgradeCard {
        UpgradeCard::new(id, id.to_uppercase(), 0)
            .with_effects(UpgradeEffects::new().stat_modifiers(mods))
    }

    fn trooper() -> Unit {
        let mut unit = Unit::new("u1", "Troopers", Faction::Empire, UnitType::Trooper);
        unit.wounds = 1;
        unit.courage = Some(1);
        unit.speed = 2;
        unit.min_model_count = 4;
        unit
    }

    #[test]
    fn deltas_accumulate_with_attributions() {
        let unit = trooper();
        let plus_one = card("a", StatModifiers::new().wounds(1));
        let plus_two = card("b", StatModifiers::new().wounds(2).speed(-1));
        let equipped = [
            EquippedUpgrade::new(SlotKind::Gear, &plus_one),
            EquippedUpgrade::new(SlotKind::Gear, &plus_two),
        ];

        let stats = resolve(&unit, &equipped);

        assert_eq!(stats.wounds, 4);
        assert_eq!(stats.speed, 1);
        assert_eq!(stats.total_delta(StatKind::Wounds), 3);
        assert_eq!(stats.sources(StatKind::Wounds), vec!["A", "B"]);
        assert_eq!(
            stats.attributions[..2],
            [
                StatAttribution {
                    stat: StatKind::Wounds,
                    source: "A".into(),
                    delta: 1
                },
                StatAttribution {
                    stat: StatKind::Wounds,
                    source: "B".into(),
                    delta: 2
                },
            ]
        );
    }

    #[test]
    fn deltas_are_never_clamped() {
        let unit = trooper();
        let crippled = card("slow", StatModifiers::new().speed(-5));
        let stats = resolve(&unit, &[EquippedUpgrade::new(SlotKind::Gear, &crippled)]);
        assert_eq!(stats.speed, -3);
    }

    #[test]
    fn vehicles_route_courage_modifiers_to_resilience() {
        let mut walker = Unit::new("w1", "Walker", Faction::Empire, UnitType::GroundVehicle);
        walker.resilience = Some(6);
        walker.courage = Some(9);
        let legacy = card("legacy", StatModifiers::new().courage(1));
        let modern = card("modern", StatModifiers::new().resilience(2));
        let equipped = [
            EquippedUpgrade::new(SlotKind::Hardpoint, &legacy),
            EquippedUpgrade::new(SlotKind::Hardpoint, &modern),
        ];

        let stats = resolve(&walker, &equipped);

        assert_eq!(stats.morale_stat, StatKind::Resilience);
        assert_eq!(stats.courage_or_resilience, 9);
        assert!(
            stats
                .attributions
                .iter()
                .all(|a| a.stat == StatKind::Resilience)
        );
    }

    #[test]
    fn non_vehicles_ignore_resilience_modifiers() {
        let unit = trooper();
        let plated = card("plated", StatModifiers::new().resilience(3).courage(1));
        let stats = resolve(&unit, &[EquippedUpgrade::new(SlotKind::Gear, &plated)]);

        assert_eq!(stats.courage_or_resilience, 2);
        assert_eq!(stats.attributions.len(), 1);
        assert_eq!(stats.attributions[0].stat, StatKind::Courage);
    }

    #[test]
    fn surge_flags_only_switch_on() {
        let mut unit = trooper();
        unit.surge_defense = true;
        let grant = card("grant", StatModifiers::new().surge_attack(true));
        let revoke = card(
            "revoke",
            StatModifiers::new().surge_attack(false).surge_defense(false),
        );
        let equipped = [
            EquippedUpgrade::new(SlotKind::Training, &grant),
            EquippedUpgrade::new(SlotKind::Training, &revoke),
        ];

        let stats = resolve(&unit, &equipped);

        assert!(stats.surge_attack);
        assert!(stats.surge_defense);
        assert_eq!(stats.sources(StatKind::SurgeAttack), vec!["GRANT"]);
        assert!(stats.sources(StatKind::SurgeDefense).is_empty());
    }

    #[test]
    fn model_count_follows_equipped_upgrades() {
        let extra = UpgradeCard::new("extra", "Extra Trooper", 11)
            .with_effects(UpgradeEffects::new().model_count_change(1));
        let catalog = vec![extra];
        let mut unit = trooper().with_slot(UpgradeSlot::new(SlotKind::Personnel, 1));

        unit.equip(SlotKind::Personnel, "extra").unwrap();
        assert_eq!(sync_model_count(&mut unit, &catalog), 5);
        assert_eq!(unit.current_model_count, Some(5));

        unit.unequip("extra");
        assert_eq!(sync_model_count(&mut unit, &catalog), 4);
    }
}
