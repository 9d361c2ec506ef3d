//! Weapon profiles.

use crate::keyword::KeywordToken;
use crate::vocab::WeaponRange;

/// Attack dice pool by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackDice {
    pub red: u32,
    pub black: u32,
    pub white: u32,
}

impl AttackDice {
    pub const fn new(red: u32, black: u32, white: u32) -> Self {
        Self { red, black, white }
    }
}

impl core::fmt::Display for AttackDice {
    /// `2R 1B` style summary, colors with zero dice omitted.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let parts: Vec<String> = [(self.red, 'R'), (self.black, 'B'), (self.white, 'W')]
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, color)| format!("{count}{color}"))
            .collect();

        if parts.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

/// A weapon profile carried by a unit or granted by an upgrade card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub range: WeaponRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dice: AttackDice,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<KeywordToken>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, range: WeaponRange, dice: AttackDice) -> Self {
        Self {
            name: name.into(),
            range,
            dice,
            keywords: Vec::new(),
        }
    }

    /// Adds a keyword (builder pattern).
    pub fn with_keyword(mut self, keyword: impl Into<KeywordToken>) -> Self {
        self.keywords.push(keyword.into());
        self
    }
}
