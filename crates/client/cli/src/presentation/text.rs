//! Plain-text export of composed units and armies.
//!
//! Modified stats render as `Base: X → Modified: Y (upgrade: Z)` when
//! attributions are enabled, and as the bare value otherwise.

use roster_core::{
    ComposedArmy, ComposedKeyword, ComposedUnit, RosterError, SourcedWeapon, StatValue, Unit,
    ValidationReport,
};

/// Rendering switches taken from the roster configuration.
#[derive(Clone, Copy, Debug)]
pub struct TextOptions {
    pub show_attributions: bool,
}

fn annotate(sources: &[String]) -> String {
    match sources {
        [] => String::new(),
        [single] => format!(" (upgrade: {single})"),
        many => format!(" (upgrades: {})", many.join(", ")),
    }
}

fn stat_line(label: &str, stat: &StatValue<i32>, options: TextOptions) -> String {
    if stat.is_modified() && options.show_attributions {
        format!(
            "  {label}: Base: {} → Modified: {}{}",
            stat.base,
            stat.value,
            annotate(&stat.sources)
        )
    } else {
        format!("  {label}: {}", stat.value)
    }
}

fn flag_line(label: &str, stat: &StatValue<bool>, options: TextOptions) -> String {
    let value = if stat.value { "Yes" } else { "No" };
    if stat.is_modified() && options.show_attributions {
        format!("  {label}: {value}{}", annotate(&stat.sources))
    } else {
        format!("  {label}: {value}")
    }
}

fn keyword_entry(keyword: &ComposedKeyword, options: TextOptions) -> String {
    if !(keyword.from_upgrade && options.show_attributions) {
        return keyword.label.clone();
    }
    let upgrades: Vec<String> = keyword
        .sources
        .iter()
        .filter(|source| source.is_upgrade())
        .map(|source| source.name().to_string())
        .collect();
    format!("{}{}", keyword.label, annotate(&upgrades))
}

fn weapon_line(sourced: &SourcedWeapon) -> String {
    let weapon = &sourced.weapon;
    let keywords: Vec<String> = weapon.keywords.iter().map(|k| k.label()).collect();
    let mut line = format!(
        "  {} | {} | {}",
        weapon.name,
        weapon.range.display_name(),
        weapon.dice
    );
    if !keywords.is_empty() {
        line.push_str(&format!(" | {}", keywords.join(", ")));
    }
    line.push_str(&format!(" [{}]", sourced.source.name()));
    line
}

/// Full stat card for one composed unit.
pub fn render_unit(unit: &ComposedUnit, options: TextOptions) -> String {
    let stats = &unit.stats;
    let mut lines = vec![
        format!("{} [{}]", unit.name, unit.id),
        format!(
            "{} {}",
            unit.faction.display_name(),
            unit.unit_type.display_name()
        ),
    ];

    if unit.has_upgrades() && options.show_attributions {
        lines.push(format!(
            "Points: Base: {} → Modified: {} (upgrades: {})",
            unit.base_points,
            unit.total_points,
            unit.upgrade_points()
        ));
    } else {
        lines.push(format!("Points: {}", unit.total_points));
    }

    lines.push("Stats:".to_string());
    lines.push(stat_line("Wounds", &stats.wounds, options));
    lines.push(stat_line(
        stats.morale_stat.display_name(),
        &stats.courage_or_resilience,
        options,
    ));
    lines.push(stat_line("Speed", &stats.speed, options));
    lines.push(stat_line("Models", &stats.model_count, options));
    lines.push(format!("  Defense: {}", unit.defense_dice.display_name()));
    lines.push(flag_line("Surge (attack)", &stats.surge_attack, options));
    lines.push(flag_line("Surge (defense)", &stats.surge_defense, options));

    if !unit.keywords.is_empty() {
        let keywords: Vec<String> = unit
            .keywords
            .iter()
            .map(|keyword| keyword_entry(keyword, options))
            .collect();
        lines.push(format!("Keywords: {}", keywords.join(", ")));
    }

    if !unit.weapons.is_empty() {
        lines.push("Weapons:".to_string());
        lines.extend(unit.weapons.iter().map(weapon_line));
    }

    if !unit.abilities.is_empty() || !unit.upgrade_abilities.is_empty() {
        lines.push("Abilities:".to_string());
        for ability in &unit.abilities {
            lines.push(format!("  {}: {}", ability.name, ability.description));
        }
        for granted in &unit.upgrade_abilities {
            lines.push(format!(
                "  {} ({}): {}",
                granted.ability.name,
                granted.source.name(),
                granted.ability.description
            ));
        }
    }

    if unit.has_upgrades() {
        lines.push("Upgrades:".to_string());
        for upgrade in &unit.equipped {
            lines.push(format!(
                "  {}: {} ({} pts)",
                upgrade.slot.display_name(),
                upgrade.name,
                upgrade.points_cost
            ));
        }
    }

    lines.join("\n")
}

/// One line per authored unit with its composed total.
pub fn render_unit_list(entries: &[(&Unit, i32)]) -> String {
    entries
        .iter()
        .map(|(unit, total)| {
            format!(
                "{:<24} {:<32} {:<12} {:>4} pts",
                unit.id,
                unit.name,
                unit.faction.display_name(),
                total
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Army summary followed by each unit's card.
pub fn render_army(army: &ComposedArmy, options: TextOptions) -> String {
    let mut lines = vec![
        format!("{} [{}]", army.name, army.id),
        army.faction.display_name().to_string(),
    ];

    for unit in &army.units {
        lines.push(format!("  {:<32} {:>4} pts", unit.name, unit.total_points));
    }

    let total = match (army.points_limit, army.remaining_points()) {
        (Some(limit), Some(remaining)) if army.over_limit() => format!(
            "Total: {} / {} (over by {})",
            army.total_points,
            limit,
            -remaining
        ),
        (Some(limit), Some(remaining)) => format!(
            "Total: {} / {} ({} remaining)",
            army.total_points, limit, remaining
        ),
        _ => format!("Total: {}", army.total_points),
    };
    lines.push(total);

    for unit in &army.units {
        lines.push(String::new());
        lines.push(render_unit(unit, options));
    }

    lines.join("\n")
}

/// Issues per unit, or `ok` for clean units.
pub fn render_validation(reports: &[ValidationReport]) -> String {
    let mut lines = Vec::new();
    for report in reports {
        if report.is_clean() {
            lines.push(format!("{}: ok", report.unit_id));
            continue;
        }
        lines.push(format!("{}:", report.unit_id));
        for issue in &report.issues {
            lines.push(format!(
                "  [{}] {}: {}",
                issue.severity().as_str(),
                issue.error_code(),
                issue
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use roster_core::{
        Ability, Army, AttackDice, Catalogs, CustomKeyword, Faction, SlotKind, StatModifiers,
        UnitType, UpgradeCard, UpgradeEffects, UpgradeSlot, Weapon, WeaponRange, compose,
        compose_army, validate_unit,
    };

    use super::*;

    const WITH_ATTRIBUTIONS: TextOptions = TextOptions {
        show_attributions: true,
    };

    fn upgrades() -> Vec<UpgradeCard> {
        vec![
            UpgradeCard::new("hunter", "Hunter", 4).with_effects(
                UpgradeEffects::new()
                    .add_keyword("guardian_1")
                    .stat_modifiers(StatModifiers::new().wounds(1)),
            ),
            UpgradeCard::new("z6", "Z-6 Trooper", 22).with_effects(
                UpgradeEffects::new().model_count_change(1).add_weapon(
                    Weapon::new(
                        "Z-6 Rotary Blaster",
                        WeaponRange::Range1To3,
                        AttackDice::new(0, 0, 6),
                    )
                    .with_keyword("suppressive"),
                ),
            ),
        ]
    }

    fn troopers() -> Unit {
        let mut unit = Unit::new("troopers", "Rebel Troopers", Faction::Rebels, UnitType::Trooper)
            .with_keyword("nimble")
            .with_weapon(Weapon::new(
                "A-280 Blaster Rifle",
                WeaponRange::Range1To3,
                AttackDice::new(0, 0, 1),
            ))
            .with_slot(UpgradeSlot::new(SlotKind::HeavyWeapon, 1).with_equipped("z6"))
            .with_slot(UpgradeSlot::new(SlotKind::Training, 1).with_equipped("hunter"));
        unit.points = 40;
        unit.wounds = 1;
        unit.courage = Some(1);
        unit.speed = 2;
        unit.min_model_count = 4;
        unit
    }

    fn composed() -> ComposedUnit {
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();
        compose(&troopers(), &upgrades(), &abilities, &keywords)
    }

    #[test]
    fn test_modified_stats_show_base_and_source() {
        let text = render_unit(&composed(), WITH_ATTRIBUTIONS);

        assert!(text.contains("  Wounds: Base: 1 → Modified: 2 (upgrade: Hunter)"));
        assert!(text.contains("  Models: Base: 4 → Modified: 5 (upgrade: Z-6 Trooper)"));
        assert!(text.contains("  Courage: 1"));
        assert!(text.contains("Points: Base: 40 → Modified: 66 (upgrades: 26)"));
        assert!(text.contains("Keywords: Nimble, Guardian 1 (upgrade: Hunter)"));
        assert!(text.contains("  Z-6 Rotary Blaster | Range 1-3 | 6W | Suppressive [Z-6 Trooper]"));
        assert!(text.contains("  A-280 Blaster Rifle | Range 1-3 | 1W [Base Unit]"));
    }

    #[test]
    fn test_attributions_can_be_hidden() {
        let text = render_unit(
            &composed(),
            TextOptions {
                show_attributions: false,
            },
        );

        assert!(text.contains("  Wounds: 2"));
        assert!(text.contains("Points: 66"));
        assert!(!text.contains("Modified"));
    }

    #[test]
    fn test_army_reports_remaining_points() {
        let units = vec![troopers()];
        let upgrades = upgrades();
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();
        let catalogs = Catalogs::new(&upgrades, &abilities, &keywords);

        let army = Army::new("a1", "Strike Team", Faction::Rebels)
            .with_unit("troopers")
            .with_points_limit(100);
        let text = render_army(&compose_army(&army, &units, &catalogs), WITH_ATTRIBUTIONS);
        assert!(text.contains("Total: 66 / 100 (34 remaining)"));

        let tight = army.with_points_limit(50);
        let text = render_army(&compose_army(&tight, &units, &catalogs), WITH_ATTRIBUTIONS);
        assert!(text.contains("Total: 66 / 50 (over by 16)"));
    }

    #[test]
    fn test_validation_lists_issue_codes() {
        let unit = troopers().with_slot(UpgradeSlot::new(SlotKind::Gear, 1).with_equipped("z6"));
        let report = validate_unit(&unit, &upgrades());

        let text = render_validation(&[report]);

        assert!(text.starts_with("troopers:"));
        assert!(text.contains("[validation] ROSTER_EQUIPPED_IN_MULTIPLE_SLOTS"));
    }
}
