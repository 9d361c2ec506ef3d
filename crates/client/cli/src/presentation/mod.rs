//! Output rendering for CLI commands.
pub mod json;
pub mod text;

pub use text::TextOptions;
