//! Common error infrastructure for roster-core.
//!
//! Composition itself never fails: dangling references are skipped and absent
//! fields read as zero. Errors only exist at the authoring boundary, where
//! [`crate::validate`] reports data that breaks the roster invariants.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each boundary check has its own variant with specific fields
//! - **Severity Classification**: Errors are categorized so callers can decide
//!   whether to block a save or merely warn

/// Severity level of an error, used for categorization and reporting.
///
/// - **Warning**: Data is usable as-is but probably not what the author intended
/// - **Validation**: Data breaks a roster invariant and should be fixed before saving
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorSeverity {
    /// Usable data with a likely authoring mistake.
    ///
    /// Examples: equipped upgrade no longer exists, card placed in a slot of another kind
    Warning,

    /// Invalid data, should not be saved without changes.
    ///
    /// Examples: slot over capacity, upgrade equipped twice
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error should block saving the record.
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all roster-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the record can still be composed sensibly
pub trait RosterError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
