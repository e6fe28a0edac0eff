//! Air-film properties and dimensionless groups
//!
//! The convective correlations in D(b)5 evaluate the air properties at the
//! film temperature, the average of conductor surface and ambient air
//! temperature. The standard gives linear fits for viscosity, conductivity
//! and Prandtl number over its 0-100°C working range rather than full
//! property tables.
//!
//! # References
//! - ENA D(b)5-1988 section 4 (air film property fits)
//! - Swinbank (1963): clear-sky radiative temperature fit

use crate::core_types::units::{Celsius, Meters, MetersPerSecond};

/// Stefan-Boltzmann constant (W/(m²·K⁴))
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Acceleration due to gravity (m/s²), drives the buoyancy term of the
/// Grashof number
pub const GRAVITY: f64 = 9.81;

/// Albedo (ground reflectance) F for the solar gain term
pub const ALBEDO: f64 = 0.2;

/// Film temperature (°C): average of conductor surface and ambient air
#[inline]
#[must_use]
pub fn film_temperature(conductor_temp: Celsius, air_temp: Celsius) -> f64 {
    (*conductor_temp + *air_temp) / 2.0
}

/// Kinematic viscosity of the air film ν_f (m²/s), linear fit in film
/// temperature
#[inline]
#[must_use]
pub fn kinematic_viscosity(film_temp_c: f64) -> f64 {
    1.32e-5 + 9.5e-8 * film_temp_c
}

/// Thermal conductivity of the air film λ_f (W/(m·K)), linear fit in film
/// temperature
#[inline]
#[must_use]
pub fn thermal_conductivity(film_temp_c: f64) -> f64 {
    2.42e-2 + 7.2e-5 * film_temp_c
}

/// Prandtl number of the air film, linear fit in film temperature
#[inline]
#[must_use]
pub fn prandtl_number(film_temp_c: f64) -> f64 {
    0.715 - 2.5e-4 * film_temp_c
}

/// Grashof number: buoyancy versus viscous forces for natural convection
///
/// Gr = D³ g (t_c - t_a) / ((t_f + 273.15) ν_f²)
///
/// Zero when the conductor is at ambient (no buoyant plume).
#[must_use]
pub fn grashof_number(
    diameter: Meters,
    conductor_temp: Celsius,
    air_temp: Celsius,
    film_viscosity: f64,
) -> f64 {
    let d = *diameter;
    let film_k = *Celsius::new(film_temperature(conductor_temp, air_temp)).to_kelvin();
    d.powi(3) * GRAVITY * (*conductor_temp - *air_temp) / (film_k * film_viscosity.powi(2))
}

/// Reynolds number of the transverse wind over the conductor
#[inline]
#[must_use]
pub fn reynolds_number(wind_speed: MetersPerSecond, diameter: Meters, film_viscosity: f64) -> f64 {
    *wind_speed * *diameter / film_viscosity
}

/// Effective clear-sky radiative temperature (Swinbank fit)
///
/// t_d = 0.0552 (t_a + 273.15)^1.5 - 273.15, in °C. The sky is colder than
/// the air, so a conductor radiates to it even at ambient temperature.
#[must_use]
pub fn sky_temperature(air_temp: Celsius) -> Celsius {
    let air_k = *air_temp.to_kelvin();
    Celsius::new(0.0552 * air_k.powf(1.5) - 273.15)
}
