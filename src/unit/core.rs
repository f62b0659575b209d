//! The [`Unit`] type: a named scale of a physical dimension.
//!
//! A `Unit` pairs a [`Dimension`] with a conversion factor to SI base units
//! and the symbol it was written with. Values tagged with a unit convert to
//! any compatible unit by a single multiplication:
//!
//! ```
//! use astro_constants::Unit;
//!
//! let m = Unit::parse("m").unwrap();
//! let km = Unit::parse("km").unwrap();
//!
//! let factor = m.conversion_factor(&km).unwrap();
//! assert!((6.3781e6 * factor - 6378.1).abs() < 1e-9);
//! ```
//!
//! Units combine with [`multiply`](Unit::multiply) and
//! [`divide`](Unit::divide) following quantity algebra: dimensions add or
//! subtract, SI factors multiply or divide. Incompatible conversions fail
//! with [`IncompatibleUnit`](crate::ConstantError::IncompatibleUnit) rather
//! than producing a silently wrong number.

use super::parse::parse_unit;
use super::Dimension;
use crate::errors::ConstantResult;

/// A named scale of a physical dimension.
///
/// `si_factor` converts a value expressed in this unit into SI base units:
/// a length in `km` times `1000.0` is the same length in `m`. The symbol is
/// kept for display and serialization; it does not participate in
/// compatibility checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    dimension: Dimension,
    si_factor: f64,
    symbol: String,
}

impl Unit {
    /// The dimensionless unit, written `_` in constant tables.
    pub fn dimensionless() -> Unit {
        Unit {
            dimension: Dimension::DIMENSIONLESS,
            si_factor: 1.0,
            symbol: "_".to_string(),
        }
    }

    /// The canonical factor-1 SI unit for a dimension (`kg`, `m/s`, ...).
    ///
    /// Used to normalize derived constants that carry no explicit unit.
    pub fn si(dimension: Dimension) -> Unit {
        Unit {
            dimension,
            si_factor: 1.0,
            symbol: dimension.to_string(),
        }
    }

    pub(crate) fn new(dimension: Dimension, si_factor: f64, symbol: String) -> Unit {
        Unit {
            dimension,
            si_factor,
            symbol,
        }
    }

    /// Parse a unit expression such as `m^3/kg/s^2`.
    ///
    /// See [`parse`](super::parse) for the grammar and the symbol table.
    pub fn parse(text: &str) -> ConstantResult<Unit> {
        parse_unit(text)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn si_factor(&self) -> f64 {
        self.si_factor
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// `true` when values can be converted between `self` and `other`.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// The factor converting a value in `self` to a value in `target`.
    ///
    /// Fails with `IncompatibleUnit` when the dimensions differ.
    pub fn conversion_factor(&self, target: &Unit) -> ConstantResult<f64> {
        if !self.is_compatible(target) {
            return Err(crate::errors::ConstantError::incompatible_unit(
                &self.symbol,
                &target.symbol,
            ));
        }
        Ok(self.si_factor / target.si_factor)
    }

    /// Quantity product: dimensions add, SI factors multiply.
    ///
    /// The composed symbol is display-only and is not guaranteed to re-parse.
    pub fn multiply(&self, other: &Unit) -> Unit {
        Unit {
            dimension: self.dimension.multiply(other.dimension),
            si_factor: self.si_factor * other.si_factor,
            symbol: compose_symbol(&self.symbol, '*', &other.symbol),
        }
    }

    /// Quantity quotient: dimensions subtract, SI factors divide.
    pub fn divide(&self, other: &Unit) -> Unit {
        Unit {
            dimension: self.dimension.divide(other.dimension),
            si_factor: self.si_factor / other.si_factor,
            symbol: compose_symbol(&self.symbol, '/', &other.symbol),
        }
    }
}

fn compose_symbol(lhs: &str, op: char, rhs: &str) -> String {
    if rhs.contains(['*', '/']) {
        format!("{}{}({})", lhs, op, rhs)
    } else {
        format!("{}{}{}", lhs, op, rhs)
    }
}
