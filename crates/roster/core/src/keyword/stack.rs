//! Keyword stacking.
//!
//! Ranked keywords sharing a base merge into one token whose rank is the sum
//! of every occurrence (`armor_1` + `armor_1` → `Armor 2`). Plain and custom
//! keywords are only de-duplicated.
//!
//! Output order is fixed: unranked keywords (plain and custom) in first-seen
//! order, then stacked keywords in the order their base first appeared.

use std::collections::HashMap;

use super::token::KeywordToken;
use crate::model::Source;

/// A keyword after stacking, with its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackedKeyword {
    /// Merged token; ranked tokens carry the summed rank.
    pub token: KeywordToken,
    /// True when any contributing occurrence came from an upgrade card.
    pub from_upgrade: bool,
    /// Distinct contributors in first-seen order.
    pub sources: Vec<Source>,
}

impl StackedKeyword {
    fn new(token: KeywordToken, source: &Source) -> Self {
        Self {
            token,
            from_upgrade: source.is_upgrade(),
            sources: vec![source.clone()],
        }
    }

    fn record(&mut self, source: &Source) {
        self.from_upgrade |= source.is_upgrade();
        if !self.sources.contains(source) {
            self.sources.push(source.clone());
        }
    }

    pub fn label(&self) -> String {
        self.token.label()
    }
}

/// Accumulates keyword occurrences and stacks them.
#[derive(Clone, Debug, Default)]
pub struct KeywordStack {
    unranked: Vec<StackedKeyword>,
    ranked: Vec<StackedKeyword>,
    unranked_index: HashMap<KeywordToken, usize>,
    ranked_index: HashMap<String, usize>,
}

impl KeywordStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `token` contributed by `source`.
    pub fn push(&mut self, token: &KeywordToken, source: &Source) {
        match token {
            KeywordToken::Ranked { base, rank } => match self.ranked_index.get(base) {
                Some(&index) => {
                    let entry = &mut self.ranked[index];
                    if let KeywordToken::Ranked { rank: total, .. } = &mut entry.token {
                        *total = total.saturating_add(*rank);
                    }
                    entry.record(source);
                }
                None => {
                    self.ranked_index.insert(base.clone(), self.ranked.len());
                    self.ranked.push(StackedKeyword::new(token.clone(), source));
                }
            },
            KeywordToken::Plain { .. } | KeywordToken::Custom { .. } => {
                match self.unranked_index.get(token) {
                    Some(&index) => self.unranked[index].record(source),
                    None => {
                        self.unranked_index.insert(token.clone(), self.unranked.len());
                        self.unranked.push(StackedKeyword::new(token.clone(), source));
                    }
                }
            }
        }
    }

    /// Adds every token in `tokens`, all attributed to `source`.
    pub fn extend<'a>(
        &mut self,
        tokens: impl IntoIterator<Item = &'a KeywordToken>,
        source: &Source,
    ) {
        for token in tokens {
            self.push(token, source);
        }
    }

    /// Unranked keywords first, then stacked ones.
    pub fn finish(self) -> Vec<StackedKeyword> {
        let mut stacked = self.unranked;
        stacked.extend(self.ranked);
        stacked
    }
}

/// Stacks keyword occurrences carrying their provenance.
pub fn aggregate_tokens<'a>(
    occurrences: impl IntoIterator<Item = (&'a KeywordToken, &'a Source)>,
) -> Vec<StackedKeyword> {
    let mut stack = KeywordStack::new();
    for (token, source) in occurrences {
        stack.push(token, source);
    }
    stack.finish()
}

/// Stacks raw keyword strings from a unit and its upgrades into display tokens.
///
/// ```
/// # use roster_core::keyword::aggregate;
/// let merged = aggregate(["cunning", "armor_1"], ["armor_1", "Cunning"]);
/// assert_eq!(merged, vec!["Cunning", "Armor 2"]);
/// ```
pub fn aggregate<U, K>(unit_keywords: U, upgrade_keywords: K) -> Vec<String>
where
    U: IntoIterator,
    U::Item: AsRef<str>,
    K: IntoIterator,
    K::Item: AsRef<str>,
{
    let from_unit = Source::BaseUnit;
    let from_upgrade = Source::upgrade("", "");

    let mut stack = KeywordStack::new();
    for raw in unit_keywords {
        stack.push(&KeywordToken::parse(raw.as_ref()), &from_unit);
    }
    for raw in upgrade_keywords {
        stack.push(&KeywordToken::parse(raw.as_ref()), &from_upgrade);
    }

    stack
        .finish()
        .into_iter()
        .map(|keyword| keyword.label())
        .collect()
}
