//! Keyword token parsing and display.
//!
//! Tokens arrive as strings (`guardian_2`, `Armor:1`, `cunning`,
//! `custom:abc123`) and are parsed once into [`KeywordToken`]. The string form
//! only reappears when the token is serialized.

use crate::vocab::keyword_info;

/// Prefix marking a reference to a user-authored keyword record.
pub const CUSTOM_PREFIX: &str = "custom:";

/// Suffix appended to custom keyword labels so they never read as canonical.
pub const CUSTOM_MARKER: char = '*';

/// A keyword occurrence on a unit, weapon or upgrade card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum KeywordToken {
    /// Rank-bearing keyword (`guardian_2`). Same-base ranks stack by summation.
    Ranked { base: String, rank: i32 },
    /// Keyword without a rank (`cunning`). Never stacks.
    ///
    /// The base is the lowercased token with inner whitespace kept, so
    /// `Armor 2` stays plain when written back out and parsed again.
    Plain { base: String },
    /// Opaque reference to a user-authored keyword. Never stacks.
    Custom { id: String },
}

/// Flat view of a parsed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedKeyword {
    /// Lowercase identifier, or the full `custom:<id>` token for custom keywords.
    pub base: String,
    pub rank: Option<i32>,
    pub is_custom: bool,
}

/// Parses a raw token into its flat form.
pub fn parse(token: &str) -> ParsedKeyword {
    KeywordToken::parse(token).parsed()
}

impl KeywordToken {
    /// Parses a raw token. Parsing is total: anything that is neither a custom
    /// reference nor `<words>_<digits>` / `<words>:<digits>` is a plain keyword.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();

        if let Some(id) = strip_custom_prefix(trimmed) {
            return Self::Custom { id: id.to_string() };
        }

        if let Some((word, rank)) = split_rank(trimmed) {
            return Self::Ranked {
                base: normalize_base(word),
                rank,
            };
        }

        Self::Plain {
            base: trimmed.to_lowercase(),
        }
    }

    pub fn ranked(base: &str, rank: i32) -> Self {
        Self::Ranked {
            base: normalize_base(base),
            rank,
        }
    }

    pub fn plain(base: &str) -> Self {
        Self::Plain {
            base: base.trim().to_lowercase(),
        }
    }

    pub fn custom(id: impl Into<String>) -> Self {
        Self::Custom { id: id.into() }
    }

    /// Lowercase base identifier. Custom tokens have no base.
    pub fn base(&self) -> Option<&str> {
        match self {
            Self::Ranked { base, .. } | Self::Plain { base } => Some(base),
            Self::Custom { .. } => None,
        }
    }

    pub fn rank(&self) -> Option<i32> {
        match self {
            Self::Ranked { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::Custom { id } => Some(id),
            _ => None,
        }
    }

    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    pub fn parsed(&self) -> ParsedKeyword {
        match self {
            Self::Ranked { base, rank } => ParsedKeyword {
                base: base.clone(),
                rank: Some(*rank),
                is_custom: false,
            },
            Self::Plain { base } => ParsedKeyword {
                base: base.clone(),
                rank: None,
                is_custom: false,
            },
            Self::Custom { .. } => ParsedKeyword {
                base: self.to_string(),
                rank: None,
                is_custom: true,
            },
        }
    }

    /// Display token: `Guardian 2`, `Cunning`, or the raw `custom:<id>` token.
    ///
    /// Custom keywords resolved against their catalog record are labelled by
    /// the composition facade instead.
    pub fn label(&self) -> String {
        match self {
            Self::Ranked { base, rank } => format!("{} {}", display_name(base), rank),
            Self::Plain { base } => display_name(base),
            Self::Custom { .. } => self.to_string(),
        }
    }
}

impl core::fmt::Display for KeywordToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ranked { base, rank } => write!(f, "{base}_{rank}"),
            Self::Plain { base } => f.write_str(base),
            Self::Custom { id } => write!(f, "{CUSTOM_PREFIX}{id}"),
        }
    }
}

impl core::str::FromStr for KeywordToken {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeywordToken {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for KeywordToken {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<KeywordToken> for String {
    fn from(value: KeywordToken) -> Self {
        value.to_string()
    }
}

/// Human-readable name for a base identifier.
///
/// Canonical keywords use their reference-table name; anything else is
/// title-cased word by word (`weak_point` → `Weak Point`).
pub fn display_name(base: &str) -> String {
    match keyword_info(base) {
        Some(info) => info.name.to_string(),
        None => title_case(base),
    }
}

fn title_case(base: &str) -> String {
    base.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases and joins whitespace-separated words with `_` (ranked bases only).
fn normalize_base(word: &str) -> String {
    word.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn strip_custom_prefix(token: &str) -> Option<&str> {
    let prefix = token.get(..CUSTOM_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(CUSTOM_PREFIX) {
        return None;
    }
    let id = token[CUSTOM_PREFIX.len()..].trim();
    (!id.is_empty()).then_some(id)
}

/// Splits `<words>_<digits>` or `<words>:<digits>` at the last separator.
fn split_rank(token: &str) -> Option<(&str, i32)> {
    let separator = token.rfind(['_', ':'])?;
    let word = token[..separator].trim();
    let digits = token[separator + 1..].trim();

    if !word.chars().any(char::is_alphabetic) {
        return None;
    }

    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let rank = digits.parse::<i32>().ok()?;
    Some((word, rank))
}
