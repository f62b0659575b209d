//! Unit-expression parsing.
//!
//! Constant tables and callers write units as compact strings: `m`, `km`,
//! `m/s`, `m^3/kg/s^2`, `W/m^2/K^4`. This module parses that grammar into a
//! [`Unit`] with a resolved [`Dimension`] and SI conversion factor.
//!
//! # Grammar
//!
//! ```text
//! unit    := "_" | factor (("*" | "/") factor)*
//! factor  := symbol | symbol "^" exponent | "1"
//! ```
//!
//! - `*` and `/` bind strictly left to right over single factors:
//!   `m^3/kg/s^2` is m³ · kg⁻¹ · s⁻², and `a/b*c` is `(a/b)·c`. There are no
//!   parentheses; write repeated division instead.
//! - Exponents are integers and may be negative (`s^-2`).
//! - The factor `1` is the dimensionless identity, allowing `1/s`.
//! - `_` (or an empty string) denotes the dimensionless unit.
//!
//! Symbols are case-sensitive exact matches against a fixed table of the
//! units appearing in astronomical constant tables:
//!
//! | Quantity | Symbols |
//! |----------|---------|
//! | Length | `m`, `cm`, `mm`, `km`, `au`, `pc`, `ly` |
//! | Mass | `kg`, `g` |
//! | Time | `s`, `min`, `h`, `day`, `yr` (Julian year) |
//! | Temperature | `K` |
//! | Derived | `N`, `J`, `W`, `Hz` |
//!
//! # Usage
//!
//! Parse either through [`Unit::parse`] or the [`ParseUnit`] extension trait:
//!
//! ```
//! use astro_constants::unit::parse::ParseUnit;
//!
//! let unit = "m^3/kg/s^2".to_unit().unwrap();
//! assert_eq!(unit.si_factor(), 1.0);
//! ```

use super::{Dimension, Unit};
use crate::errors::{ConstantError, ConstantResult};
use once_cell::sync::Lazy;
use regex::Regex;

struct UnitSymbol {
    symbol: &'static str,
    dimension: Dimension,
    si_factor: f64,
}

/// Recognized unit symbols with their SI scale.
///
/// Length scales follow the IAU 2012 definition of the astronomical unit;
/// `yr` is the Julian year of 365.25 days.
static SYMBOLS: &[UnitSymbol] = &[
    // Length
    UnitSymbol { symbol: "m", dimension: Dimension::LENGTH, si_factor: 1.0 },
    UnitSymbol { symbol: "cm", dimension: Dimension::LENGTH, si_factor: 1.0e-2 },
    UnitSymbol { symbol: "mm", dimension: Dimension::LENGTH, si_factor: 1.0e-3 },
    UnitSymbol { symbol: "km", dimension: Dimension::LENGTH, si_factor: 1.0e3 },
    UnitSymbol { symbol: "au", dimension: Dimension::LENGTH, si_factor: 1.495978707e11 },
    UnitSymbol { symbol: "pc", dimension: Dimension::LENGTH, si_factor: 3.0856775814913673e16 },
    UnitSymbol { symbol: "ly", dimension: Dimension::LENGTH, si_factor: 9.4607304725808e15 },
    // Mass
    UnitSymbol { symbol: "kg", dimension: Dimension::MASS, si_factor: 1.0 },
    UnitSymbol { symbol: "g", dimension: Dimension::MASS, si_factor: 1.0e-3 },
    // Time
    UnitSymbol { symbol: "s", dimension: Dimension::TIME, si_factor: 1.0 },
    UnitSymbol { symbol: "min", dimension: Dimension::TIME, si_factor: 60.0 },
    UnitSymbol { symbol: "h", dimension: Dimension::TIME, si_factor: 3600.0 },
    UnitSymbol { symbol: "day", dimension: Dimension::TIME, si_factor: 86400.0 },
    UnitSymbol { symbol: "yr", dimension: Dimension::TIME, si_factor: 3.15576e7 },
    // Temperature
    UnitSymbol { symbol: "K", dimension: Dimension::TEMPERATURE, si_factor: 1.0 },
    // Derived SI units
    UnitSymbol {
        symbol: "N",
        dimension: Dimension { length: 1, mass: 1, time: -2, temperature: 0 },
        si_factor: 1.0,
    },
    UnitSymbol {
        symbol: "J",
        dimension: Dimension { length: 2, mass: 1, time: -2, temperature: 0 },
        si_factor: 1.0,
    },
    UnitSymbol {
        symbol: "W",
        dimension: Dimension { length: 2, mass: 1, time: -3, temperature: 0 },
        si_factor: 1.0,
    },
    UnitSymbol {
        symbol: "Hz",
        dimension: Dimension { length: 0, mass: 0, time: -1, temperature: 0 },
        si_factor: 1.0,
    },
];

static FACTOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+|1)(?:\^(-?\d+))?$").unwrap());

/// Parse strings as units.
///
/// Implemented for `str`. Equivalent to [`Unit::parse`].
pub trait ParseUnit {
    /// Parse a unit expression. See the module docs for the grammar.
    fn to_unit(&self) -> ConstantResult<Unit>;
}

impl ParseUnit for str {
    #[inline]
    fn to_unit(&self) -> ConstantResult<Unit> {
        parse_unit(self)
    }
}

/// Parse a unit expression such as `m^3/kg/s^2` into a [`Unit`].
///
/// Unknown symbols, malformed factors, and dangling operators fail with
/// [`InvalidUnit`](ConstantError::InvalidUnit).
pub fn parse_unit(text: &str) -> ConstantResult<Unit> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "_" {
        return Ok(Unit::dimensionless());
    }

    let mut dimension = Dimension::DIMENSIONLESS;
    let mut si_factor = 1.0_f64;

    for (divide, factor) in split_factors(trimmed) {
        let factor = factor.trim();
        if factor.is_empty() {
            return Err(ConstantError::invalid_unit(
                trimmed,
                "dangling '*' or '/' operator",
            ));
        }

        let caps = FACTOR_REGEX.captures(factor).ok_or_else(|| {
            ConstantError::invalid_unit(trimmed, &format!("malformed factor '{}'", factor))
        })?;

        let exponent: i32 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|_| {
                ConstantError::invalid_unit(trimmed, &format!("exponent out of range in '{}'", factor))
            })?,
            None => 1,
        };

        let (base_dim, base_factor) = lookup_symbol(&caps[1]).ok_or_else(|| {
            ConstantError::invalid_unit(trimmed, &format!("unknown unit symbol '{}'", &caps[1]))
        })?;

        let dim = base_dim.pow(exponent);
        let factor_scaled = base_factor.powi(exponent);

        if divide {
            dimension = dimension.divide(dim);
            si_factor /= factor_scaled;
        } else {
            dimension = dimension.multiply(dim);
            si_factor *= factor_scaled;
        }
    }

    Ok(Unit::new(dimension, si_factor, trimmed.to_string()))
}

fn lookup_symbol(name: &str) -> Option<(Dimension, f64)> {
    if name == "1" {
        return Some((Dimension::DIMENSIONLESS, 1.0));
    }
    SYMBOLS
        .iter()
        .find(|entry| entry.symbol == name)
        .map(|entry| (entry.dimension, entry.si_factor))
}

/// Split on `*` and `/`, tagging each factor with whether it divides.
fn split_factors(text: &str) -> Vec<(bool, &str)> {
    let mut factors = Vec::new();
    let mut divide_next = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '*' || ch == '/' {
            factors.push((divide_next, &text[start..idx]));
            divide_next = ch == '/';
            start = idx + 1;
        }
    }
    factors.push((divide_next, &text[start..]));
    factors
}
