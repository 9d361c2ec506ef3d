use std::collections::HashMap;

use roster_core::{
    Ability, Army, AttackDice, Catalogs, CustomKeyword, Faction, KeywordToken, SlotKind, Source,
    StatKind, StatModifiers, Unit, UnitType, UpgradeCard, UpgradeEffects, UpgradeSlot, Weapon,
    WeaponRange, aggregate, compose, compose_army, sync_model_count, validate_unit,
};

struct Fixture {
    upgrades: HashMap<String, UpgradeCard>,
    abilities: HashMap<String, Ability>,
    keywords: HashMap<String, CustomKeyword>,
}

impl Fixture {
    fn new() -> Self {
        let upgrades = [
            UpgradeCard::new("z6", "Z-6 Trooper", 22)
                .for_slot(SlotKind::HeavyWeapon)
                .with_effects(
                    UpgradeEffects::new()
                        .model_count_change(1)
                        .add_weapon(
                            Weapon::new("Z-6 Rotary Blaster", WeaponRange::Range1To3, AttackDice::new(0, 0, 6))
                                .with_keyword("suppressive"),
                        ),
                ),
            UpgradeCard::new("bodyguard", "Bodyguard", 10)
                .for_slot(SlotKind::Training)
                .with_effects(
                    UpgradeEffects::new()
                        .add_keyword("guardian_1")
                        .stat_modifiers(StatModifiers::new().wounds(1)),
                ),
            UpgradeCard::new("plating", "Reinforced Plating", 15)
                .for_slot(SlotKind::Gear)
                .with_effects(
                    UpgradeEffects::new()
                        .add_keyword("guardian_2")
                        .add_keyword("custom:veteran")
                        .add_ability("steady")
                        .stat_modifiers(StatModifiers::new().wounds(2).surge_defense(true)),
                ),
        ]
        .into_iter()
        .map(|card| (card.id.clone(), card))
        .collect();

        let abilities = [
            Ability::new("steady", "Steady", "May move and fire heavy weapons."),
            Ability::new("nimble", "Nimble", "Gain a dodge after defending."),
        ]
        .into_iter()
        .map(|ability| (ability.id.clone(), ability))
        .collect();

        let keywords = [CustomKeyword::new("veteran", "Veteran")]
            .into_iter()
            .map(|keyword| (keyword.id.clone(), keyword))
            .collect();

        Self {
            upgrades,
            abilities,
            keywords,
        }
    }

    fn catalogs(&self) -> Catalogs<'_, HashMap<String, UpgradeCard>, HashMap<String, Ability>, HashMap<String, CustomKeyword>> {
        Catalogs::new(&self.upgrades, &self.abilities, &self.keywords)
    }
}

fn rebel_troopers() -> Unit {
    let mut unit = Unit::new("troopers", "Rebel Troopers", Faction::Rebels, UnitType::Trooper)
        .with_keyword("nimble")
        .with_weapon(Weapon::new(
            "A-280 Blaster Rifle",
            WeaponRange::Range1To3,
            AttackDice::new(0, 0, 1),
        ))
        .with_slot(UpgradeSlot::new(SlotKind::HeavyWeapon, 1))
        .with_slot(UpgradeSlot::new(SlotKind::Training, 1))
        .with_slot(UpgradeSlot::new(SlotKind::Gear, 1));
    unit.points = 50;
    unit.wounds = 1;
    unit.courage = Some(1);
    unit.speed = 2;
    unit.min_model_count = 4;
    unit.abilities = vec!["nimble".into()];
    unit
}

fn fully_equipped() -> Unit {
    let mut unit = rebel_troopers();
    unit.equip(SlotKind::HeavyWeapon, "z6")
        .expect("heavy weapon slot should be free");
    unit.equip(SlotKind::Training, "bodyguard")
        .expect("training slot should be free");
    unit.equip(SlotKind::Gear, "plating")
        .expect("gear slot should be free");
    unit
}

#[test]
fn test_compose_is_idempotent() {
    let fixture = Fixture::new();
    let unit = fully_equipped();
    let snapshot = unit.clone();

    let first = fixture.catalogs().compose(&unit);
    let second = fixture.catalogs().compose(&unit);

    assert_eq!(first, second);
    assert_eq!(unit, snapshot, "composition must not mutate its input");
}

#[test]
fn test_fully_equipped_unit() {
    let fixture = Fixture::new();
    let composed = fixture.catalogs().compose(&fully_equipped());

    assert_eq!(composed.total_points, 50 + 22 + 10 + 15);
    assert_eq!(composed.upgrade_points(), 47);

    assert_eq!(composed.stats.wounds.base, 1);
    assert_eq!(composed.stats.wounds.value, 4);
    assert_eq!(
        composed.stats.wounds.sources,
        vec!["Bodyguard", "Reinforced Plating"]
    );
    assert_eq!(composed.stats.model_count.value, 5);
    assert!(composed.stats.surge_defense.value);
    assert!(!composed.stats.surge_attack.is_modified());
    assert_eq!(composed.stats.morale_stat, StatKind::Courage);

    assert_eq!(
        composed.keyword_labels(),
        vec!["Nimble", "Veteran*", "Guardian 3"]
    );
    let guardian = &composed.keywords[2];
    assert!(guardian.from_upgrade);
    assert_eq!(guardian.token, KeywordToken::ranked("guardian", 3));

    let weapon_sources: Vec<_> = composed
        .weapons
        .iter()
        .map(|w| (w.weapon.name.as_str(), w.source.name()))
        .collect();
    assert_eq!(
        weapon_sources,
        vec![
            ("A-280 Blaster Rifle", "Base Unit"),
            ("Z-6 Rotary Blaster", "Z-6 Trooper"),
        ]
    );

    assert_eq!(composed.abilities.len(), 1);
    assert_eq!(composed.upgrade_abilities.len(), 1);
    assert_eq!(
        composed.upgrade_abilities[0].source,
        Source::upgrade("plating", "Reinforced Plating")
    );
}

#[test]
fn test_dangling_upgrade_contributes_nothing() {
    let fixture = Fixture::new();
    let mut unit = rebel_troopers();
    unit.equip(SlotKind::Gear, "deleted-card")
        .expect("gear slot should be free");

    let composed = fixture.catalogs().compose(&unit);

    assert_eq!(composed.total_points, 50);
    assert!(composed.attributions.is_empty());
    assert!(composed.equipped.is_empty());
    assert!(
        composed
            .weapons
            .iter()
            .all(|w| w.source == Source::BaseUnit)
    );
}

#[test]
fn test_dangling_custom_keyword_is_dropped() {
    let fixture = Fixture::new();
    let unit = rebel_troopers().with_keyword("custom:ghost");

    let composed = fixture.catalogs().compose(&unit);

    assert_eq!(composed.keyword_labels(), vec!["Nimble"]);
}

#[test]
fn test_model_count_tracks_equip_and_unequip() {
    let fixture = Fixture::new();
    let mut unit = rebel_troopers();

    unit.equip(SlotKind::HeavyWeapon, "z6")
        .expect("heavy weapon slot should be free");
    assert_eq!(sync_model_count(&mut unit, &fixture.upgrades), 5);

    assert!(unit.unequip("z6"));
    assert_eq!(sync_model_count(&mut unit, &fixture.upgrades), 4);
    assert_eq!(unit.current_model_count, Some(4));
}

#[test]
fn test_vehicle_legacy_courage_modifier_raises_resilience() {
    let fixture = Fixture::new();
    let mut upgrades = fixture.upgrades.clone();
    upgrades.insert(
        "armor".into(),
        UpgradeCard::new("armor", "Ablative Armor", 8).with_effects(
            UpgradeEffects::new().stat_modifiers(StatModifiers::new().courage(2)),
        ),
    );

    let mut speeder = Unit::new("speeder", "74-Z Speeder Bikes", Faction::Empire, UnitType::RepulsorVehicle)
        .with_slot(UpgradeSlot::new(SlotKind::Hardpoint, 1).with_equipped("armor"));
    speeder.resilience = Some(3);

    let composed = compose(&speeder, &upgrades, &fixture.abilities, &fixture.keywords);

    assert!(composed.is_vehicle);
    assert_eq!(composed.stats.morale_stat, StatKind::Resilience);
    assert_eq!(composed.stats.courage_or_resilience.base, 3);
    assert_eq!(composed.stats.courage_or_resilience.value, 5);
    assert_eq!(composed.attributions[0].stat, StatKind::Resilience);
}

#[test]
fn test_keyword_stacking_from_raw_strings() {
    const NONE: [&str; 0] = [];

    assert_eq!(aggregate(["guardian_2", "guardian_1"], NONE), vec!["Guardian 3"]);
    assert_eq!(aggregate(["cunning", "cunning"], NONE), vec!["Cunning"]);
    assert_eq!(aggregate(["custom:abc", "custom:abc"], NONE), vec!["custom:abc"]);
}

#[test]
fn test_army_totals_and_limit() {
    let fixture = Fixture::new();
    let units = vec![fully_equipped(), {
        let mut leader = Unit::new("leia", "Leia Organa", Faction::Rebels, UnitType::Trooper);
        leader.points = 90;
        leader
    }];

    let army = Army::new("echo", "Echo Base Defenders", Faction::Rebels)
        .with_unit("troopers")
        .with_unit("leia")
        .with_unit("retired")
        .with_points_limit(180);

    let composed = compose_army(&army, &units, &fixture.catalogs());

    assert_eq!(composed.units.len(), 2);
    assert_eq!(composed.total_points, 97 + 90);
    assert!(composed.over_limit());

    let same = fixture.catalogs().compose_army(&army, &units);
    assert_eq!(composed, same);
}

#[test]
fn test_validation_flags_authoring_mistakes() {
    let fixture = Fixture::new();
    let unit = rebel_troopers()
        .with_slot(
            UpgradeSlot::new(SlotKind::Gear, 1)
                .with_equipped("plating")
                .with_equipped("bodyguard"),
        )
        .with_slot(UpgradeSlot::new(SlotKind::Training, 1).with_equipped("bodyguard"));

    let report = validate_unit(&unit, &fixture.upgrades);

    assert!(!report.is_valid());
    let codes: Vec<_> = report
        .issues
        .iter()
        .map(roster_core::RosterError::error_code)
        .collect();
    assert!(codes.contains(&"ROSTER_SLOT_OVER_CAPACITY"));
    assert!(codes.contains(&"ROSTER_EQUIPPED_IN_MULTIPLE_SLOTS"));
    assert!(codes.contains(&"ROSTER_SLOT_MISMATCH"));
}
