//! The builtin table of astronomical and physical constants.
//!
//! The table is embedded as source text in the same declarative format
//! accepted by [`ConstantRegistry::parse`] and resolved once, on first use,
//! into a shared read-only registry. Values follow the IAU 2012 definitions
//! (astronomical unit, speed of light), CODATA 2018 (G, Stefan-Boltzmann),
//! and the DE440 planetary ephemeris (body mass parameters).

use crate::registry::ConstantRegistry;
use once_cell::sync::Lazy;

/// Source text of the builtin constants table.
///
/// `name = value_or_expression [unit] = alias ...`; `_` marks a
/// dimensionless constant; derived entries reference earlier names and
/// evaluate left to right.
pub const BUILTIN_TABLE: &str = "\
# Defining constants (IAU 2012, CODATA 2018)
speed_of_light = 2.99792458e8 m/s = c
gravitational_constant = 6.67430e-11 m^3/kg/s^2 = G
astronomical_unit = 1.49597870700e11 m = au = AU
parsec = 3.0856775814913673e16 m = pc
light_year = 9.4607304725808e15 m = ly
julian_year = 3.15576e7 s
stefan_boltzmann = 5.670374419e-8 W/m^2/K^4 = sigma_sb

# Body mass parameters GM (DE440)
solar_mass_parameter = 1.32712440041e20 m^3/s^2 = GM_sun
earth_mass_parameter = 3.98600435507e14 m^3/s^2 = GM_earth
moon_mass_parameter = 4.902800118e12 m^3/s^2 = GM_moon
jupiter_mass_parameter = 1.267127641e17 m^3/s^2 = GM_jupiter

# Masses derived from GM / G
solar_mass = solar_mass_parameter / gravitational_constant = M_sun = M_solar
earth_mass = earth_mass_parameter / gravitational_constant = M_earth
moon_mass = moon_mass_parameter / gravitational_constant = M_moon
jupiter_mass = jupiter_mass_parameter / gravitational_constant = M_jup = M_jupiter
earth_moon_mass_ratio = earth_mass_parameter / moon_mass_parameter _

# Radii and solar photometry
solar_radius = 6.957e8 m = R_sun
earth_radius = 6.3781e6 m = R_earth
sun_temperature = 5778.0 K = T_sun
solar_flux = 1360.8 W/m^2
golden_ratio = 1.618033988749894 _

# Light travel
light_time_per_au = astronomical_unit / speed_of_light s
speed_of_light_au_day = speed_of_light au/day = c_au_per_day
";

static BUILTIN: Lazy<ConstantRegistry> =
    Lazy::new(|| ConstantRegistry::parse(BUILTIN_TABLE).expect("builtin constant table is valid"));

/// The shared registry built from [`BUILTIN_TABLE`].
///
/// Resolved once on first call; afterwards this is plain read-only state,
/// safe to use from any thread.
pub fn builtin() -> &'static ConstantRegistry {
    &BUILTIN
}
