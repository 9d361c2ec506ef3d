//! Canonical keyword reference tables.
//!
//! Keyword tokens carry only an identifier (and optionally a rank). Display
//! names and rules text live here as immutable static data.

/// Reference record for a canonical keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordInfo {
    /// Lowercase identifier as it appears in tokens (`guardian` for `guardian_2`).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Rules text summary.
    pub description: &'static str,
}

const fn kw(id: &'static str, name: &'static str, description: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        name,
        description,
    }
}

/// Unit keywords.
pub static UNIT_KEYWORDS: &[KeywordInfo] = &[
    kw(
        "agile",
        "Agile",
        "After performing a standard move, gain X dodge tokens.",
    ),
    kw(
        "arsenal",
        "Arsenal",
        "When attacking, each miniature may contribute X weapons to the attack pool.",
    ),
    kw(
        "armor",
        "Armor",
        "While defending, cancel up to X hit results.",
    ),
    kw(
        "bounty",
        "Bounty",
        "Place a bounty token on an enemy commander or operative during setup.",
    ),
    kw(
        "charge",
        "Charge",
        "After performing a move that starts a melee, perform a free melee attack.",
    ),
    kw(
        "cover",
        "Cover",
        "While defending against a ranged attack, improve cover by X.",
    ),
    kw(
        "cunning",
        "Cunning",
        "Wins ties when command cards share the same number of pips.",
    ),
    kw(
        "danger_sense",
        "Danger Sense",
        "May keep up to X suppression tokens to roll extra defense dice.",
    ),
    kw(
        "dauntless",
        "Dauntless",
        "After rallying, may suffer a wound to remove a suppression token.",
    ),
    kw(
        "disciplined",
        "Disciplined",
        "When issued an order, remove up to X suppression tokens.",
    ),
    kw(
        "entourage",
        "Entourage",
        "May issue an order to a friendly unit of the named type.",
    ),
    kw(
        "expert_climber",
        "Expert Climber",
        "Does not suffer wounds when climbing.",
    ),
    kw(
        "fire_support",
        "Fire Support",
        "When another friendly unit attacks, add this unit's weapons to its pool.",
    ),
    kw(
        "guardian",
        "Guardian",
        "Cancel up to X hit results for a nearby friendly trooper and defend them.",
    ),
    kw(
        "impervious",
        "Impervious",
        "While defending, roll extra defense dice equal to the attack's Pierce.",
    ),
    kw(
        "indomitable",
        "Indomitable",
        "Roll red defense dice during rally checks.",
    ),
    kw(
        "infiltrate",
        "Infiltrate",
        "At the start of the game, deploy anywhere beyond range 3 of enemies.",
    ),
    kw(
        "inspire",
        "Inspire",
        "At the end of activation, remove up to X suppression tokens from nearby units.",
    ),
    kw(
        "jedi_hunter",
        "Jedi Hunter",
        "Gain surge to critical when attacking a unit with a force slot.",
    ),
    kw(
        "jump",
        "Jump",
        "Perform a move ignoring terrain of height X or lower.",
    ),
    kw(
        "low_profile",
        "Low Profile",
        "While defending, roll one fewer defense die and improve cover.",
    ),
    kw(
        "nimble",
        "Nimble",
        "After defending, if a dodge token was spent, gain one dodge token.",
    ),
    kw(
        "precise",
        "Precise",
        "When spending an aim token, reroll up to X additional dice.",
    ),
    kw(
        "ready",
        "Ready",
        "After performing a standby action, gain X aim tokens.",
    ),
    kw(
        "relentless",
        "Relentless",
        "After performing a move, may perform a free attack.",
    ),
    kw(
        "scout",
        "Scout",
        "After deploying, may perform a speed-X move.",
    ),
    kw(
        "sharpshooter",
        "Sharpshooter",
        "When attacking, reduce the defender's cover by X.",
    ),
    kw(
        "spotter",
        "Spotter",
        "As an action, give X aim tokens to friendly units.",
    ),
    kw(
        "steady",
        "Steady",
        "After performing a move, may perform a free ranged attack.",
    ),
    kw(
        "stealth",
        "Stealth",
        "Cannot be targeted by ranged attacks from beyond range 2 while in cover.",
    ),
    kw(
        "tactical",
        "Tactical",
        "After performing a standard move, gain X aim tokens.",
    ),
    kw(
        "take_cover",
        "Take Cover",
        "As an action, give X dodge tokens to friendly units.",
    ),
    kw(
        "uncanny_luck",
        "Uncanny Luck",
        "While defending, reroll up to X defense dice.",
    ),
    kw(
        "unhindered",
        "Unhindered",
        "Ignores the effects of difficult terrain.",
    ),
];

/// Weapon keywords.
pub static WEAPON_KEYWORDS: &[KeywordInfo] = &[
    kw(
        "blast",
        "Blast",
        "Ignores the effects of cover.",
    ),
    kw(
        "critical",
        "Critical",
        "Convert up to X surge results to critical results.",
    ),
    kw(
        "fixed_front",
        "Fixed: Front",
        "The defender must be inside the front arc.",
    ),
    kw(
        "high_velocity",
        "High Velocity",
        "The defender cannot spend dodge tokens.",
    ),
    kw(
        "immune_deflect",
        "Immune: Deflect",
        "The defender cannot use Deflect against this weapon.",
    ),
    kw(
        "impact",
        "Impact",
        "Change up to X hit results to critical results against armored defenders.",
    ),
    kw(
        "ion",
        "Ion",
        "Vehicles and droid troopers suffer X ion tokens.",
    ),
    kw(
        "lethal",
        "Lethal",
        "Spend up to X aim tokens as Pierce 1 each.",
    ),
    kw(
        "long_shot",
        "Long Shot",
        "Spend aim tokens to increase maximum range.",
    ),
    kw(
        "pierce",
        "Pierce",
        "Cancel up to X block results.",
    ),
    kw(
        "poison",
        "Poison",
        "Non-droid troopers gain X poison tokens.",
    ),
    kw(
        "scatter",
        "Scatter",
        "Move defending trooper miniatures after the attack.",
    ),
    kw(
        "spray",
        "Spray",
        "Add this weapon's dice once per miniature in the defending unit.",
    ),
    kw(
        "suppressive",
        "Suppressive",
        "The defender gains one additional suppression token.",
    ),
    kw(
        "tow_cable",
        "Tow Cable",
        "The defending vehicle performs a pivot.",
    ),
];

/// Looks up a unit keyword by identifier.
pub fn unit_keyword(id: &str) -> Option<&'static KeywordInfo> {
    UNIT_KEYWORDS.iter().find(|info| info.id == id)
}

/// Looks up a weapon keyword by identifier.
pub fn weapon_keyword(id: &str) -> Option<&'static KeywordInfo> {
    WEAPON_KEYWORDS.iter().find(|info| info.id == id)
}

/// Looks up a canonical keyword in either vocabulary, unit keywords first.
pub fn keyword_info(id: &str) -> Option<&'static KeywordInfo> {
    unit_keyword(id).or_else(|| weapon_keyword(id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for info in UNIT_KEYWORDS.iter().chain(WEAPON_KEYWORDS) {
            assert!(seen.insert(info.id), "duplicate keyword id {}", info.id);
            assert_eq!(info.id, info.id.to_lowercase());
            assert!(!info.id.contains(' '));
        }
    }

    #[test]
    fn unit_keywords_take_precedence() {
        assert_eq!(keyword_info("guardian").map(|k| k.name), Some("Guardian"));
        assert_eq!(keyword_info("pierce").map(|k| k.name), Some("Pierce"));
        assert!(keyword_info("not_a_keyword").is_none());
    }
}
