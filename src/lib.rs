//! Unit-aware registry of astronomical and physical constants.
//!
//! `astro-constants` resolves a declarative table of named constants (each
//! with a value or derivation expression, a physical unit, and aliases)
//! into an immutable registry with typed, unit-checked lookup. It ships a
//! builtin table of IAU/CODATA/DE440 values and accepts custom tables in the
//! same format.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`registry`] | [`ConstantRegistry`], [`ResolvedConstant`], table parsing and resolution |
//! | [`unit`] | [`Unit`] and [`Dimension`]: unit-string parsing, conversion, algebra |
//! | [`table`] | [`BUILTIN_TABLE`] and the shared [`builtin`] registry |
//! | [`errors`] | [`ConstantError`] and [`ConstantResult`] |
//!
//! # Quick Start
//!
//! ```
//! use astro_constants::builtin;
//!
//! let registry = builtin();
//!
//! // Lookup by canonical name or alias
//! let au = registry.resolve("au").unwrap();
//! assert_eq!(au.value, 1.49597870700e11);
//! assert_eq!(au.unit.symbol(), "m");
//!
//! // Conversion into a caller-specified unit
//! let radius_km = registry.value("earth_radius", "km").unwrap();
//! assert!((radius_km - 6378.1).abs() < 1e-9);
//!
//! // Derived constants carry the unit their derivation implies
//! let solar_mass = registry.resolve("M_sun").unwrap();
//! assert_eq!(solar_mass.unit.symbol(), "kg");
//! ```
//!
//! Custom tables use the same line format:
//!
//! ```
//! use astro_constants::ConstantRegistry;
//!
//! let registry = ConstantRegistry::parse("\
//! ## my table
//! ruler = 0.3 m = my_ruler
//! ruler_area = ruler * ruler
//! ").unwrap();
//! assert_eq!(registry.resolve("my_ruler").unwrap().value, 0.3);
//! ```
//!
//! # Design Notes
//!
//! - **Build once, read forever**: a registry is fully resolved by
//!   [`ConstantRegistry::parse`] and never mutated afterwards. Any number of
//!   threads may share a reference without synchronization; [`builtin`]
//!   exposes one such shared instance, initialized lazily.
//!
//! - **Fail fast**: every table problem (malformed line, duplicate name,
//!   forward reference) aborts construction. A registry either resolves
//!   completely or not at all.
//!
//! - **Units are checked, not trusted**: conversions go through
//!   [`Dimension`] equality, so asking for `earth_radius` in `kg` is an
//!   error rather than a number.

pub mod errors;
pub mod registry;
pub mod table;
pub mod unit;

pub use errors::{ConstantError, ConstantResult};
pub use registry::{ConstantRegistry, ResolvedConstant};
pub use table::{builtin, BUILTIN_TABLE};
pub use unit::{Dimension, Unit};
