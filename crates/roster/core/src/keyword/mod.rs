//! Keyword normalization and stacking.
mod stack;
mod token;

pub use stack::{KeywordStack, StackedKeyword, aggregate, aggregate_tokens};
pub use token::{
    CUSTOM_MARKER, CUSTOM_PREFIX, KeywordToken, ParsedKeyword, display_name, parse,
};
