//! Error types for registry construction and lookup.
//!
//! This module provides a unified error type [`ConstantError`] covering the two
//! failure surfaces of the library: building a registry from a constants table
//! and looking constants up afterwards.
//!
//! # Error Categories
//!
//! | Variant | Raised during | Recoverable? |
//! |---------|---------------|--------------|
//! | [`MalformedEntry`](ConstantError::MalformedEntry) | Build | No |
//! | [`DuplicateDefinition`](ConstantError::DuplicateDefinition) | Build | No |
//! | [`UnresolvedReference`](ConstantError::UnresolvedReference) | Build | No |
//! | [`UnknownConstant`](ConstantError::UnknownConstant) | Lookup | Yes |
//! | [`InvalidUnit`](ConstantError::InvalidUnit) | Lookup | Yes |
//! | [`IncompatibleUnit`](ConstantError::IncompatibleUnit) | Lookup | Yes |
//!
//! Build errors abort registry construction entirely; no partial registry is
//! ever published. Lookup errors are reported to the caller, who can retry with
//! a different name or unit. All operations are deterministic and free of side
//! effects, so no failure is transient.
//!
//! # Usage
//!
//! Most functions return [`ConstantResult<T>`], which is
//! `Result<T, ConstantError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use astro_constants::{ConstantError, ConstantResult};
//!
//! fn require_known(found: bool, name: &str) -> ConstantResult<()> {
//!     if !found {
//!         return Err(ConstantError::unknown_constant(name));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for constant registry operations.
///
/// Covers table parsing, duplicate and forward-reference detection at build
/// time, and name/unit failures at lookup time. Use the constructor methods
/// ([`malformed_entry`](Self::malformed_entry),
/// [`unknown_constant`](Self::unknown_constant), etc.) for consistent error
/// creation.
#[derive(Error, Debug)]
pub enum ConstantError {
    /// A table line that does not match `name = value [unit] [= alias ...]`.
    #[error("Malformed entry at line {line}: {message}")]
    MalformedEntry { line: usize, message: String },

    /// A canonical name or alias that collides with an earlier definition.
    #[error("Duplicate definition of '{name}' at line {line}")]
    DuplicateDefinition { name: String, line: usize },

    /// An expression referencing a name not declared on an earlier line.
    #[error("Unresolved reference to '{referenced}' in definition of '{name}' at line {line}")]
    UnresolvedReference {
        name: String,
        referenced: String,
        line: usize,
    },

    /// Lookup of a name that is neither a canonical name nor an alias.
    #[error("Unknown constant '{name}'")]
    UnknownConstant { name: String },

    /// A unit expression that does not parse.
    #[error("Invalid unit expression '{unit}': {message}")]
    InvalidUnit { unit: String, message: String },

    /// A conversion between units of different physical dimensions.
    #[error("Incompatible units: cannot convert '{from}' to '{to}'")]
    IncompatibleUnit { from: String, to: String },
}

/// Convenience alias for `Result<T, ConstantError>`.
pub type ConstantResult<T> = Result<T, ConstantError>;

impl ConstantError {
    /// Creates a [`MalformedEntry`](Self::MalformedEntry) error.
    pub fn malformed_entry(line: usize, message: &str) -> Self {
        Self::MalformedEntry {
            line,
            message: message.to_string(),
        }
    }

    /// Creates a [`DuplicateDefinition`](Self::DuplicateDefinition) error.
    pub fn duplicate_definition(name: &str, line: usize) -> Self {
        Self::DuplicateDefinition {
            name: name.to_string(),
            line,
        }
    }

    /// Creates an [`UnresolvedReference`](Self::UnresolvedReference) error.
    pub fn unresolved_reference(name: &str, referenced: &str, line: usize) -> Self {
        Self::UnresolvedReference {
            name: name.to_string(),
            referenced: referenced.to_string(),
            line,
        }
    }

    /// Creates an [`UnknownConstant`](Self::UnknownConstant) error.
    pub fn unknown_constant(name: &str) -> Self {
        Self::UnknownConstant {
            name: name.to_string(),
        }
    }

    /// Creates an [`InvalidUnit`](Self::InvalidUnit) error.
    pub fn invalid_unit(unit: &str, message: &str) -> Self {
        Self::InvalidUnit {
            unit: unit.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an [`IncompatibleUnit`](Self::IncompatibleUnit) error.
    pub fn incompatible_unit(from: &str, to: &str) -> Self {
        Self::IncompatibleUnit {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Returns `true` if the caller can recover by choosing a different
    /// name or unit.
    ///
    /// Build-time errors are fatal: the registry is never published in a
    /// partial state, so there is nothing to recover into.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownConstant { .. } | Self::InvalidUnit { .. } | Self::IncompatibleUnit { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_entry_display() {
        let err = ConstantError::malformed_entry(7, "expected 'name = value'");
        assert_eq!(
            err.to_string(),
            "Malformed entry at line 7: expected 'name = value'"
        );
    }

    #[test]
    fn test_duplicate_definition_display() {
        let err = ConstantError::duplicate_definition("au", 12);
        assert_eq!(err.to_string(), "Duplicate definition of 'au' at line 12");
    }

    #[test]
    fn test_unresolved_reference_display() {
        let err = ConstantError::unresolved_reference("solar_mass", "grav_const", 3);
        assert!(err.to_string().contains("grav_const"));
        assert!(err.to_string().contains("solar_mass"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_unknown_constant_display() {
        let err = ConstantError::unknown_constant("nonexistent");
        assert_eq!(err.to_string(), "Unknown constant 'nonexistent'");
    }

    #[test]
    fn test_incompatible_unit_display() {
        let err = ConstantError::incompatible_unit("m", "kg");
        assert_eq!(err.to_string(), "Incompatible units: cannot convert 'm' to 'kg'");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(ConstantError::unknown_constant("x").is_recoverable());
        assert!(ConstantError::invalid_unit("m^", "dangling exponent").is_recoverable());
        assert!(ConstantError::incompatible_unit("m", "s").is_recoverable());

        assert!(!ConstantError::malformed_entry(1, "bad").is_recoverable());
        assert!(!ConstantError::duplicate_definition("au", 2).is_recoverable());
        assert!(!ConstantError::unresolved_reference("a", "b", 3).is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<ConstantError>();
        _assert_sync::<ConstantError>();
    }
}
