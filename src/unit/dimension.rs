//! Physical dimensions as integer exponents over the SI base dimensions.
//!
//! A [`Dimension`] records the exponent of each base dimension appearing in a
//! unit expression: `m^3/kg/s^2` is length³ · mass⁻¹ · time⁻². Two units are
//! convertible exactly when their dimensions are equal, so dimension equality
//! is the compatibility check behind every unit conversion in this crate.
//!
//! Only the base dimensions that occur in astronomical constant tables are
//! tracked: length, mass, time, and temperature.

/// Exponents over the SI base dimensions.
///
/// The all-zero dimension is dimensionless. Equality is exact integer
/// comparison, which makes `Dimension` usable as a compatibility key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub length: i32,
    pub mass: i32,
    pub time: i32,
    pub temperature: i32,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 0,
        temperature: 0,
    };

    pub const LENGTH: Dimension = Dimension {
        length: 1,
        mass: 0,
        time: 0,
        temperature: 0,
    };

    pub const MASS: Dimension = Dimension {
        length: 0,
        mass: 1,
        time: 0,
        temperature: 0,
    };

    pub const TIME: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 1,
        temperature: 0,
    };

    pub const TEMPERATURE: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 0,
        temperature: 1,
    };

    /// The dimension of a product: exponents add.
    pub fn multiply(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length + other.length,
            mass: self.mass + other.mass,
            time: self.time + other.time,
            temperature: self.temperature + other.temperature,
        }
    }

    /// The dimension of a quotient: exponents subtract.
    pub fn divide(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length - other.length,
            mass: self.mass - other.mass,
            time: self.time - other.time,
            temperature: self.temperature - other.temperature,
        }
    }

    /// The dimension raised to an integer power: exponents scale.
    pub fn pow(self, n: i32) -> Dimension {
        Dimension {
            length: self.length * n,
            mass: self.mass * n,
            time: self.time * n,
            temperature: self.temperature * n,
        }
    }

    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_adds_exponents() {
        let speed = Dimension::LENGTH.divide(Dimension::TIME);
        let area_per_time = speed.multiply(Dimension::LENGTH);
        assert_eq!(
            area_per_time,
            Dimension {
                length: 2,
                mass: 0,
                time: -1,
                temperature: 0
            }
        );
    }

    #[test]
    fn test_divide_subtracts_exponents() {
        // GM / G leaves plain mass
        let gm = Dimension {
            length: 3,
            mass: 0,
            time: -2,
            temperature: 0,
        };
        let g = Dimension {
            length: 3,
            mass: -1,
            time: -2,
            temperature: 0,
        };
        assert_eq!(gm.divide(g), Dimension::MASS);
    }

    #[test]
    fn test_pow_scales_exponents() {
        assert_eq!(
            Dimension::LENGTH.pow(3),
            Dimension {
                length: 3,
                mass: 0,
                time: 0,
                temperature: 0
            }
        );
        assert_eq!(Dimension::TIME.pow(-2).time, -2);
        assert_eq!(Dimension::MASS.pow(0), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(Dimension::default().is_dimensionless());
        assert!(!Dimension::TEMPERATURE.is_dimensionless());

        let ratio = Dimension::MASS.divide(Dimension::MASS);
        assert!(ratio.is_dimensionless());
    }
}
