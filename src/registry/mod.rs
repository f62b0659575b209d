//! The constant registry: a resolved, unit-tagged table of named constants.
//!
//! A registry is built once from a declarative table and is immutable
//! afterwards. Each table line declares a canonical name, a literal value or
//! a derivation from earlier constants, an optional unit, and any number of
//! aliases:
//!
//! ```text
//! # comment
//! astronomical_unit = 1.49597870700e11 m = au = AU
//! solar_mass = solar_mass_parameter / gravitational_constant = M_sun
//! ```
//!
//! Build a registry with [`ConstantRegistry::parse`], then look constants up
//! by canonical name or alias:
//!
//! ```
//! use astro_constants::ConstantRegistry;
//!
//! let registry = ConstantRegistry::parse(
//!     "earth_radius = 6.3781e6 m = R_earth\n",
//! ).unwrap();
//!
//! let radius = registry.resolve("R_earth").unwrap();
//! assert_eq!(radius.value, 6.3781e6);
//!
//! let km = registry.value("earth_radius", "km").unwrap();
//! assert!((km - 6378.1).abs() < 1e-9);
//! ```
//!
//! # Resolution semantics
//!
//! Entries resolve in declaration order. Derivation chains evaluate their
//! operand values strictly left to right and combine the operand units with
//! the same operators, which is exactly quantity arithmetic. A derived entry
//! with no explicit unit is normalized to the canonical SI unit of its
//! combined dimension; with an explicit unit, the result is converted into
//! it, and a dimension mismatch fails the build.
//!
//! # Failure model
//!
//! All build errors are fatal: construction aborts and no partial registry
//! is published. Lookups report [`UnknownConstant`],
//! [`InvalidUnit`], or [`IncompatibleUnit`] to the caller.
//!
//! [`UnknownConstant`]: crate::ConstantError::UnknownConstant
//! [`InvalidUnit`]: crate::ConstantError::InvalidUnit
//! [`IncompatibleUnit`]: crate::ConstantError::IncompatibleUnit

pub mod expression;
pub mod parser;

use crate::errors::{ConstantError, ConstantResult};
use crate::unit::Unit;
use expression::{ExprOp, ValueExpression};
use parser::{RawEntry, TableParser};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A fully resolved constant: numeric value, unit, and declared aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConstant {
    pub name: String,
    pub value: f64,
    pub unit: Unit,
    pub aliases: Vec<String>,
}

impl ResolvedConstant {
    /// The value expressed in SI base units.
    pub fn si_value(&self) -> f64 {
        self.value * self.unit.si_factor()
    }

    /// The value converted into `target`.
    pub fn value_in(&self, target: &Unit) -> ConstantResult<f64> {
        Ok(self.value * self.unit.conversion_factor(target)?)
    }
}

impl fmt::Display for ResolvedConstant {
    /// Renders the constant as a table line, value in exponent notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:e} {}", self.name, self.value, self.unit)?;
        for alias in &self.aliases {
            write!(f, " = {}", alias)?;
        }
        Ok(())
    }
}

/// An immutable mapping from canonical names and aliases to resolved
/// constants.
///
/// Created by [`ConstantRegistry::parse`]. Declaration order is preserved
/// and observable through [`iter`](Self::iter). The registry never changes
/// after construction, so shared references can be used from any number of
/// threads without synchronization.
#[derive(Debug, Clone)]
pub struct ConstantRegistry {
    constants: Vec<ResolvedConstant>,
    canonical: HashMap<String, usize>,
    aliases: HashMap<String, String>,
}

impl ConstantRegistry {
    /// Build a registry from table text.
    ///
    /// Fails on the first malformed line, duplicate name or alias, or
    /// reference to a constant not declared on an earlier line. On failure
    /// no registry is produced.
    pub fn parse(table: &str) -> ConstantResult<Self> {
        let entries = TableParser::new().parse(table)?;
        let mut registry = ConstantRegistry {
            constants: Vec::with_capacity(entries.len()),
            canonical: HashMap::new(),
            aliases: HashMap::new(),
        };
        for entry in entries {
            registry.define(entry)?;
        }
        Ok(registry)
    }

    /// Look up a constant by canonical name or alias.
    ///
    /// Matching is case-sensitive and exact.
    pub fn resolve(&self, name: &str) -> ConstantResult<&ResolvedConstant> {
        self.lookup(name)
            .ok_or_else(|| ConstantError::unknown_constant(name))
    }

    /// The numeric value of `name` converted to `target_unit`.
    ///
    /// ```
    /// use astro_constants::builtin;
    ///
    /// let km = builtin().value("earth_radius", "km").unwrap();
    /// assert!((km - 6378.1).abs() < 1e-9);
    /// ```
    pub fn value(&self, name: &str, target_unit: &str) -> ConstantResult<f64> {
        let constant = self.resolve(name)?;
        let target = Unit::parse(target_unit)?;
        constant.value_in(&target)
    }

    /// `true` if `name` is a canonical name or alias in this registry.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Constants in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedConstant> {
        self.constants.iter()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<&ResolvedConstant> {
        if let Some(&index) = self.canonical.get(name) {
            return Some(&self.constants[index]);
        }
        self.aliases
            .get(name)
            .and_then(|canonical| self.canonical.get(canonical))
            .map(|&index| &self.constants[index])
    }

    fn define(&mut self, entry: RawEntry) -> ConstantResult<()> {
        self.check_fresh(&entry.name, entry.line)?;

        let expr = ValueExpression::parse(entry.line, &entry.expression)?;
        let explicit = match entry.unit.as_deref() {
            Some(text) => Some(
                Unit::parse(text)
                    .map_err(|e| ConstantError::malformed_entry(entry.line, &e.to_string()))?,
            ),
            None => None,
        };

        let (value, unit) = match expr {
            ValueExpression::Literal(value) => {
                (value, explicit.unwrap_or_else(Unit::dimensionless))
            }
            ValueExpression::Chain { first, terms } => {
                self.evaluate_chain(&entry, &first, &terms, explicit)?
            }
        };

        let index = self.constants.len();
        self.canonical.insert(entry.name.clone(), index);
        for alias in &entry.aliases {
            self.check_fresh(alias, entry.line)?;
            self.aliases.insert(alias.clone(), entry.name.clone());
        }

        self.constants.push(ResolvedConstant {
            name: entry.name,
            value,
            unit,
            aliases: entry.aliases,
        });
        Ok(())
    }

    fn check_fresh(&self, name: &str, line: usize) -> ConstantResult<()> {
        if self.canonical.contains_key(name) || self.aliases.contains_key(name) {
            return Err(ConstantError::duplicate_definition(name, line));
        }
        Ok(())
    }

    /// Evaluate a reference chain left to right over already-resolved
    /// constants, carrying values and units together.
    fn evaluate_chain(
        &self,
        entry: &RawEntry,
        first: &str,
        terms: &[(ExprOp, String)],
        explicit: Option<Unit>,
    ) -> ConstantResult<(f64, Unit)> {
        let head = self.lookup(first).ok_or_else(|| {
            ConstantError::unresolved_reference(&entry.name, first, entry.line)
        })?;
        let mut value = head.value;
        let mut unit = head.unit.clone();

        for (op, name) in terms {
            let operand = self.lookup(name).ok_or_else(|| {
                ConstantError::unresolved_reference(&entry.name, name, entry.line)
            })?;
            match op {
                ExprOp::Mul => {
                    value *= operand.value;
                    unit = unit.multiply(&operand.unit);
                }
                ExprOp::Div => {
                    value /= operand.value;
                    unit = unit.divide(&operand.unit);
                }
            }
        }

        match explicit {
            Some(target) => {
                if target.dimension() != unit.dimension() {
                    return Err(ConstantError::malformed_entry(
                        entry.line,
                        &format!(
                            "unit '{}' does not match the derived dimension '{}'",
                            target,
                            unit.dimension()
                        ),
                    ));
                }
                Ok((value * unit.si_factor() / target.si_factor(), target))
            }
            None => Ok((value * unit.si_factor(), Unit::si(unit.dimension()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Dimension;

    const EPSILON: f64 = 1e-12;

    const SMALL_TABLE: &str = "\
# gravitational bits
gravitational_constant = 6.67430e-11 m^3/kg/s^2 = G
solar_mass_parameter = 1.32712440018e20 m^3/s^2 = GM_sun
solar_mass = solar_mass_parameter / gravitational_constant = M_sun = M_solar
";

    #[test]
    fn test_literal_resolution() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        let g = registry.resolve("gravitational_constant").unwrap();
        assert_eq!(g.value, 6.67430e-11);
        assert_eq!(g.unit.symbol(), "m^3/kg/s^2");
    }

    #[test]
    fn test_alias_resolution() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        assert_eq!(
            registry.resolve("G").unwrap(),
            registry.resolve("gravitational_constant").unwrap()
        );
        assert_eq!(
            registry.resolve("M_solar").unwrap(),
            registry.resolve("solar_mass").unwrap()
        );
    }

    #[test]
    fn test_derived_value_and_unit() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        let solar_mass = registry.resolve("solar_mass").unwrap();

        assert_eq!(solar_mass.value, 1.32712440018e20 / 6.67430e-11);
        assert!((solar_mass.value - 1.98841e30).abs() < 1e26);
        assert_eq!(solar_mass.unit.dimension(), Dimension::MASS);
        assert_eq!(solar_mass.unit.symbol(), "kg");
    }

    #[test]
    fn test_multiplication_chain() {
        let table = "\
two = 2.0
three = 3.0
six = two * three
";
        let registry = ConstantRegistry::parse(table).unwrap();
        let six = registry.resolve("six").unwrap();
        assert_eq!(six.value, 6.0);
        assert!(six.unit.is_dimensionless());
    }

    #[test]
    fn test_mixed_operator_chain_left_to_right() {
        let table = "\
a = 12.0
b = 4.0
c = 2.0
r = a / b * c
";
        let registry = ConstantRegistry::parse(table).unwrap();
        assert_eq!(registry.resolve("r").unwrap().value, 6.0);
    }

    #[test]
    fn test_chain_through_alias() {
        let table = "\
gravitational_constant = 6.67430e-11 m^3/kg/s^2 = G
solar_mass_parameter = 1.32712440018e20 m^3/s^2
solar_mass = solar_mass_parameter / G
";
        let registry = ConstantRegistry::parse(table).unwrap();
        let solar_mass = registry.resolve("solar_mass").unwrap();
        assert_eq!(solar_mass.unit.dimension(), Dimension::MASS);
    }

    #[test]
    fn test_derived_with_explicit_unit_converts() {
        let table = "\
speed_of_light = 2.99792458e8 m/s = c
astronomical_unit = 1.495978707e11 m
c_au_per_day = speed_of_light au/day
";
        let registry = ConstantRegistry::parse(table).unwrap();
        let c = registry.resolve("c_au_per_day").unwrap();
        assert!((c.value - 173.14463267424034).abs() < 1e-9);
        assert_eq!(c.unit.symbol(), "au/day");
    }

    #[test]
    fn test_derived_unit_mismatch_fails_build() {
        let table = "\
speed_of_light = 2.99792458e8 m/s
bad = speed_of_light kg
";
        let err = ConstantRegistry::parse(table).unwrap_err();
        assert!(matches!(err, ConstantError::MalformedEntry { line: 2, .. }));
    }

    #[test]
    fn test_forward_reference_fails() {
        let table = "\
solar_mass = solar_mass_parameter / gravitational_constant
gravitational_constant = 6.67430e-11 m^3/kg/s^2
solar_mass_parameter = 1.32712440018e20 m^3/s^2
";
        let err = ConstantRegistry::parse(table).unwrap_err();
        assert!(matches!(
            err,
            ConstantError::UnresolvedReference { line: 1, .. }
        ));
    }

    #[test]
    fn test_self_reference_fails() {
        let err = ConstantRegistry::parse("x = x * x\n").unwrap_err();
        assert!(matches!(err, ConstantError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_duplicate_canonical_fails() {
        let table = "a = 1.0 m\na = 2.0 m\n";
        let err = ConstantRegistry::parse(table).unwrap_err();
        assert!(matches!(
            err,
            ConstantError::DuplicateDefinition { line: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_alias_fails() {
        for table in [
            "a = 1.0 m = x\nb = 2.0 m = x\n",  // alias vs alias
            "a = 1.0 m\nb = 2.0 m = a\n",      // alias vs canonical
            "x = 1.0 m\na = 2.0 m = x\n",      // canonical vs alias
            "a = 1.0 m = a\n",                 // alias shadows its own name
        ] {
            let err = ConstantRegistry::parse(table).unwrap_err();
            assert!(
                matches!(err, ConstantError::DuplicateDefinition { .. }),
                "table: {}",
                table
            );
        }
    }

    #[test]
    fn test_unknown_lookup() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        let err = registry.resolve("nonexistent").unwrap_err();
        assert!(matches!(err, ConstantError::UnknownConstant { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_value_conversion() {
        let registry = ConstantRegistry::parse("earth_radius = 6.3781e6 m\n").unwrap();
        let km = registry.value("earth_radius", "km").unwrap();
        assert!((km - 6378.1).abs() < 1e-9);
    }

    #[test]
    fn test_value_incompatible_unit() {
        let registry = ConstantRegistry::parse("earth_radius = 6.3781e6 m\n").unwrap();
        let err = registry.value("earth_radius", "kg").unwrap_err();
        assert!(matches!(err, ConstantError::IncompatibleUnit { .. }));
    }

    #[test]
    fn test_value_invalid_unit() {
        let registry = ConstantRegistry::parse("earth_radius = 6.3781e6 m\n").unwrap();
        let err = registry.value("earth_radius", "furlong").unwrap_err();
        assert!(matches!(err, ConstantError::InvalidUnit { .. }));
    }

    #[test]
    fn test_dimensionless_literal() {
        let registry = ConstantRegistry::parse("golden_ratio = 1.618033988749894\n").unwrap();
        let phi = registry.resolve("golden_ratio").unwrap();
        assert!(phi.unit.is_dimensionless());
        assert_eq!(phi.si_value(), phi.value);
    }

    #[test]
    fn test_si_value() {
        let registry = ConstantRegistry::parse("d = 1.5 km\n").unwrap();
        let d = registry.resolve("d").unwrap();
        assert!((d.si_value() - 1500.0).abs() < EPSILON);
    }

    #[test]
    fn test_iteration_order() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["gravitational_constant", "solar_mass_parameter", "solar_mass"]
        );
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_contains() {
        let registry = ConstantRegistry::parse(SMALL_TABLE).unwrap();
        assert!(registry.contains("solar_mass"));
        assert!(registry.contains("M_sun"));
        assert!(!registry.contains("m_sun"));
    }

    #[test]
    fn test_empty_table() {
        let registry = ConstantRegistry::parse("# only comments\n\n").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_display_round_trips_as_table_line() {
        let registry = ConstantRegistry::parse("earth_radius = 6.3781e6 m = R_earth\n").unwrap();
        let rendered = registry.resolve("earth_radius").unwrap().to_string();
        assert_eq!(rendered, "earth_radius = 6.3781e6 m = R_earth");

        let reparsed = ConstantRegistry::parse(&rendered).unwrap();
        assert_eq!(reparsed.resolve("R_earth").unwrap().value, 6.3781e6);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<ConstantRegistry>();
        _assert_sync::<ConstantRegistry>();
    }
}
