//! Display formatting for units and dimensions.
//!
//! A [`Unit`] displays as the symbol it was written with, so table text
//! round-trips unchanged. A [`Dimension`] displays in canonical SI form:
//! positive exponents first, joined by `*`, then one `/` per negative
//! exponent, base dimensions in the fixed order `m`, `kg`, `s`, `K`:
//!
//! ```
//! use astro_constants::Dimension;
//!
//! let gm = Dimension { length: 3, mass: 0, time: -2, temperature: 0 };
//! assert_eq!(gm.to_string(), "m^3/s^2");
//!
//! assert_eq!(Dimension::MASS.to_string(), "kg");
//! assert_eq!(Dimension::DIMENSIONLESS.to_string(), "_");
//! ```
//!
//! The canonical form is itself valid input to the unit parser, so
//! SI-normalized derived constants render with parseable units.

use super::{Dimension, Unit};
use core::fmt;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bases = [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("K", self.temperature),
        ];

        if self.is_dimensionless() {
            return f.write_str("_");
        }

        let mut wrote_numerator = false;
        for (symbol, exponent) in bases {
            if exponent > 0 {
                if wrote_numerator {
                    f.write_str("*")?;
                }
                write_factor(f, symbol, exponent)?;
                wrote_numerator = true;
            }
        }
        if !wrote_numerator {
            f.write_str("1")?;
        }

        for (symbol, exponent) in bases {
            if exponent < 0 {
                f.write_str("/")?;
                write_factor(f, symbol, -exponent)?;
            }
        }
        Ok(())
    }
}

fn write_factor(f: &mut fmt::Formatter<'_>, symbol: &str, exponent: i32) -> fmt::Result {
    if exponent == 1 {
        f.write_str(symbol)
    } else {
        write!(f, "{}^{}", symbol, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::parse::parse_unit;

    #[test]
    fn test_dimension_rendering() {
        assert_eq!(Dimension::LENGTH.to_string(), "m");
        assert_eq!(Dimension::MASS.to_string(), "kg");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "_");

        let g = Dimension { length: 3, mass: -1, time: -2, temperature: 0 };
        assert_eq!(g.to_string(), "m^3/kg/s^2");

        let speed = Dimension::LENGTH.divide(Dimension::TIME);
        assert_eq!(speed.to_string(), "m/s");

        let hz = Dimension::DIMENSIONLESS.divide(Dimension::TIME);
        assert_eq!(hz.to_string(), "1/s");

        let sigma = Dimension { length: 0, mass: 1, time: -3, temperature: -4 };
        assert_eq!(sigma.to_string(), "kg/s^3/K^4");
    }

    #[test]
    fn test_canonical_form_reparses() {
        for dim in [
            Dimension::LENGTH,
            Dimension { length: 3, mass: -1, time: -2, temperature: 0 },
            Dimension { length: 2, mass: 1, time: -3, temperature: 0 },
            Dimension::DIMENSIONLESS.divide(Dimension::TIME),
        ] {
            let rendered = dim.to_string();
            let reparsed = parse_unit(&rendered).unwrap();
            assert_eq!(reparsed.dimension(), dim, "round-trip of '{}'", rendered);
            assert_eq!(reparsed.si_factor(), 1.0);
        }
    }

    #[test]
    fn test_unit_displays_symbol() {
        let unit = parse_unit("m^3/kg/s^2").unwrap();
        assert_eq!(unit.to_string(), "m^3/kg/s^2");
        assert_eq!(Unit::dimensionless().to_string(), "_");
    }
}
