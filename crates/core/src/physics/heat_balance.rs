//! Heat-balance terms of the steady-state conductor rating
//!
//! Implements the four terms of the D(b)5 balance for a bare conductor in
//! air: convective loss (forced and natural branches with their empirical
//! Nusselt correlations), black-body radiative loss split between ground and
//! sky, solar gain with ground reflection, and I²R heating with
//! temperature-dependent AC resistance.
//!
//! All functions are pure: conductor and ambient values are validated at
//! construction, so every term is total over its inputs. A trial temperature
//! at or below ambient yields a zero convective term (cooling does not
//! reverse; the solver never searches below ambient).
//!
//! # References
//! - ENA D(b)5-1988 section 4 (correlations and regime constants)
//! - IEEE 738-2012 covers the same balance for international practice

use crate::core_types::ambient::AmbientConditions;
use crate::core_types::conductor::ConductorSpec;
use crate::core_types::units::{Amperes, Celsius, WattsPerMeter};
use crate::physics::air;
use std::f64::consts::PI;

/// Natural-convection regime constants A and m, selected on Gr·Pr
///
/// D(b)5: (0.850, 0.188) for Gr·Pr <= 10⁴, else (0.480, 0.250).
fn natural_regime_constants(rayleigh: f64) -> (f64, f64) {
    if rayleigh <= 1.0e4 {
        (0.850, 0.188)
    } else {
        (0.480, 0.250)
    }
}

/// Forced-convection regime constants B and n, selected on Reynolds number
///
/// D(b)5: (0.641, 0.471) for Re <= 2650 (laminar), else (0.048, 0.800)
/// (turbulent).
fn forced_regime_constants(reynolds: f64) -> (f64, f64) {
    if reynolds <= 2650.0 {
        (0.641, 0.471)
    } else {
        (0.048, 0.800)
    }
}

/// Wind-angle constants C and P, selected on the angle of attack ψ
///
/// D(b)5: (0.68, 1.08) for ψ <= 24°, else (0.58, 0.90).
fn angle_constants(wind_angle_deg: f64) -> (f64, f64) {
    if wind_angle_deg <= 24.0 {
        (0.68, 1.08)
    } else {
        (0.58, 0.90)
    }
}

/// Power loss by natural convection P_N (W/m)
///
/// P_N = π λ_f (t_c - t_a) Nu with Nu = A (Gr·Pr)^m. This is the still-air
/// branch; it also competes with forced convection at low wind speeds.
#[must_use]
pub fn natural_convection_loss(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    conductor_temp: Celsius,
) -> WattsPerMeter {
    let delta_t = *conductor_temp - *ambient.air_temperature;
    if delta_t <= 0.0 {
        return WattsPerMeter::new(0.0);
    }
    let t_f = air::film_temperature(conductor_temp, ambient.air_temperature);
    let nu_f = air::kinematic_viscosity(t_f);
    let lambda_f = air::thermal_conductivity(t_f);
    let grashof = air::grashof_number(
        conductor.diameter,
        conductor_temp,
        ambient.air_temperature,
        nu_f,
    );
    let rayleigh = grashof * air::prandtl_number(t_f);
    let (a, m) = natural_regime_constants(rayleigh);
    let nusselt = a * rayleigh.powf(m);
    WattsPerMeter::new(PI * lambda_f * delta_t * nusselt)
}

/// Power loss by forced convection P_F (W/m)
///
/// P_F = π λ_f (t_c - t_a) B Re^n (0.42 + C sin^P ψ). Zero in still air.
#[must_use]
pub fn forced_convection_loss(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    conductor_temp: Celsius,
) -> WattsPerMeter {
    let delta_t = *conductor_temp - *ambient.air_temperature;
    if delta_t <= 0.0 || *ambient.wind_speed <= 0.0 {
        return WattsPerMeter::new(0.0);
    }
    let t_f = air::film_temperature(conductor_temp, ambient.air_temperature);
    let nu_f = air::kinematic_viscosity(t_f);
    let lambda_f = air::thermal_conductivity(t_f);
    let reynolds = air::reynolds_number(ambient.wind_speed, conductor.diameter, nu_f);
    let (b, n) = forced_regime_constants(reynolds);
    let (c, p) = angle_constants(*ambient.wind_angle);
    let sin_psi = ambient.wind_angle.to_radians().sin();
    WattsPerMeter::new(PI * lambda_f * delta_t * b * reynolds.powf(n) * (0.42 + c * sin_psi.powf(p)))
}

/// Convective heat loss (W/m): the dominant of the forced and natural modes
///
/// At low wind speed the laminar forced correlation can predict less cooling
/// than the buoyant plume of still air would provide; taking the larger of
/// the two modes avoids under-predicting cooling across the crossover. In
/// still air the forced term is zero and this reduces to the natural branch.
#[must_use]
pub fn convective_loss(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    conductor_temp: Celsius,
) -> WattsPerMeter {
    let forced = forced_convection_loss(conductor, ambient, conductor_temp);
    let natural = natural_convection_loss(conductor, ambient, conductor_temp);
    forced.max(natural)
}

/// Power loss by radiation P_R (W/m)
///
/// P_R = π D σ e (T_c⁴ - ½ T_g⁴ - ½ T_d⁴)
///
/// The conductor exchanges with two half-views: the ground below (at air
/// temperature plus the solar-period offset) and the sky above (Swinbank
/// effective temperature, well below air). All temperatures in Kelvin.
/// Slightly positive even at ambient because the sky half is cold.
#[must_use]
pub fn radiative_loss(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    conductor_temp: Celsius,
) -> WattsPerMeter {
    let t_c_k = *conductor_temp.to_kelvin();
    let t_g_k = *ambient
        .solar
        .ground_temperature(ambient.air_temperature)
        .to_kelvin();
    let t_d_k = *air::sky_temperature(ambient.air_temperature).to_kelvin();
    WattsPerMeter::new(
        PI * *conductor.diameter
            * air::STEFAN_BOLTZMANN
            * ambient.emissivity()
            * (t_c_k.powi(4) - 0.5 * t_g_k.powi(4) - 0.5 * t_d_k.powi(4)),
    )
}

/// Power gain by solar heat input P_S (W/m)
///
/// P_S = a D (I_dir (1 + (π/2) F) + (π/2) I_diff (1 + F))
///
/// Direct beam on the projected diameter plus ground-reflected and diffuse
/// components over the half-cylinder, with albedo F. Exactly zero at night.
#[must_use]
pub fn solar_gain(conductor: &ConductorSpec, ambient: &AmbientConditions) -> WattsPerMeter {
    let i_dir = ambient.solar.direct_irradiance();
    let i_diff = ambient.solar.diffuse_irradiance();
    WattsPerMeter::new(
        ambient.absorptivity()
            * *conductor.diameter
            * (i_dir * (1.0 + PI / 2.0 * air::ALBEDO) + PI / 2.0 * i_diff * (1.0 + air::ALBEDO)),
    )
}

/// Resistive heat generation P_J = I² r_ac(t_c) (W/m)
///
/// The AC resistance is evaluated at the trial conductor temperature on
/// every call. This coupling (resistance depends on the unknown temperature)
/// is why Mode B needs iteration even though each term is closed-form.
#[must_use]
pub fn resistive_heat(
    conductor: &ConductorSpec,
    current: Amperes,
    conductor_temp: Celsius,
) -> WattsPerMeter {
    let r_ac = *conductor.ac_resistance(conductor_temp);
    WattsPerMeter::new(*current * *current * r_ac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ambient::{Environment, SolarPeriod, SurfaceCondition};
    use crate::core_types::conductor::{ConductorType, LayerConstruction};
    use crate::core_types::units::{Meters, MetersPerSecond, OhmsPerMeter};
    use approx::assert_relative_eq;

    // Worked example conductors from D(b)5 appendix
    fn almond() -> ConductorSpec {
        ConductorSpec::new(
            "Almond",
            ConductorType::AcsrGz,
            Meters::from_millimeters(7.5),
            OhmsPerMeter::from_ohms_per_kilometer(0.975),
            Some(LayerConstruction::SixOneSmall),
        )
        .unwrap()
    }

    fn saturn() -> ConductorSpec {
        ConductorSpec::new(
            "Saturn",
            ConductorType::Aac,
            Meters::from_millimeters(21.0),
            OhmsPerMeter::from_ohms_per_kilometer(0.110),
            None,
        )
        .unwrap()
    }

    fn winter_night_still_air() -> AmbientConditions {
        AmbientConditions::rural_weathered_winter_night(MetersPerSecond::new(0.0)).unwrap()
    }

    fn summer_noon_1ms() -> AmbientConditions {
        AmbientConditions::industrial_weathered_summer_noon(MetersPerSecond::new(1.0)).unwrap()
    }

    #[test]
    fn test_natural_convection_worked_example_1() {
        // Almond at 100°C in 10°C still air: P_N = 29.11 W/m
        let p_n = natural_convection_loss(&almond(), &winter_night_still_air(), Celsius::new(100.0));
        assert_relative_eq!(*p_n, 29.108, max_relative = 1e-3);
    }

    #[test]
    fn test_forced_convection_worked_example_2() {
        // Saturn at 85°C, 35°C air, 1 m/s transverse: P_F = 78.11 W/m
        let p_f = forced_convection_loss(&saturn(), &summer_noon_1ms(), Celsius::new(85.0));
        assert_relative_eq!(*p_f, 78.105, max_relative = 1e-3);
    }

    #[test]
    fn test_forced_convection_zero_in_still_air() {
        let p_f = forced_convection_loss(&almond(), &winter_night_still_air(), Celsius::new(100.0));
        assert_eq!(*p_f, 0.0);
    }

    #[test]
    fn test_convective_loss_takes_dominant_mode() {
        // At 1 m/s on Saturn the forced branch dominates the natural one
        let ambient = summer_noon_1ms();
        let t_c = Celsius::new(85.0);
        let forced = forced_convection_loss(&saturn(), &ambient, t_c);
        let natural = natural_convection_loss(&saturn(), &ambient, t_c);
        assert!(forced > natural);
        assert_eq!(convective_loss(&saturn(), &ambient, t_c), forced);

        // In still air the natural branch is the only contributor
        let still = winter_night_still_air();
        let t_c = Celsius::new(100.0);
        assert_eq!(
            convective_loss(&almond(), &still, t_c),
            natural_convection_loss(&almond(), &still, t_c)
        );
    }

    #[test]
    fn test_convective_loss_zero_at_or_below_ambient() {
        let ambient = summer_noon_1ms();
        assert_eq!(*convective_loss(&saturn(), &ambient, Celsius::new(35.0)), 0.0);
        assert_eq!(*convective_loss(&saturn(), &ambient, Celsius::new(20.0)), 0.0);
    }

    #[test]
    fn test_radiative_loss_worked_examples() {
        // Almond, winter night: P_R = 9.354 W/m; Saturn, summer noon: 24.39 W/m
        let p_r = radiative_loss(&almond(), &winter_night_still_air(), Celsius::new(100.0));
        assert_relative_eq!(*p_r, 9.354, max_relative = 1e-3);
        let p_r = radiative_loss(&saturn(), &summer_noon_1ms(), Celsius::new(85.0));
        assert_relative_eq!(*p_r, 24.390, max_relative = 1e-3);
    }

    #[test]
    fn test_radiative_loss_positive_at_ambient_under_cold_sky() {
        // The sky half-view is below air temperature, so a conductor at
        // ambient still radiates a little
        let night = winter_night_still_air();
        let p_r = radiative_loss(&almond(), &night, night.air_temperature);
        assert!(*p_r > 0.0);
    }

    #[test]
    fn test_solar_gain_worked_example_2() {
        // Saturn, industrial weathered, summer noon: P_S = 26.82 W/m
        let p_s = solar_gain(&saturn(), &summer_noon_1ms());
        assert_relative_eq!(*p_s, 26.822, max_relative = 1e-3);
    }

    #[test]
    fn test_solar_gain_exactly_zero_at_night() {
        assert_eq!(*solar_gain(&almond(), &winter_night_still_air()), 0.0);
        assert_eq!(*solar_gain(&saturn(), &winter_night_still_air()), 0.0);
    }

    #[test]
    fn test_solar_gain_scales_with_absorptivity() {
        let industrial = summer_noon_1ms();
        let rural =
            AmbientConditions::rural_weathered_summer_noon(MetersPerSecond::new(1.0)).unwrap();
        let ratio = *solar_gain(&saturn(), &industrial) / *solar_gain(&saturn(), &rural);
        assert_relative_eq!(ratio, 0.85 / 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_resistive_heat_tracks_trial_temperature() {
        let i = Amperes::new(500.0);
        let p_20 = resistive_heat(&saturn(), i, Celsius::new(20.0));
        let p_85 = resistive_heat(&saturn(), i, Celsius::new(85.0));
        assert_relative_eq!(*p_20, 500.0 * 500.0 * 1.015 * 0.110e-3, max_relative = 1e-12);
        assert_relative_eq!(*p_85 / *p_20, 1.0 + 0.00403 * 65.0, max_relative = 1e-12);
    }

    #[test]
    fn test_oblique_wind_cools_less_than_transverse() {
        let transverse = summer_noon_1ms();
        let oblique = transverse
            .clone()
            .with_wind_angle(crate::core_types::units::Degrees::new(20.0))
            .unwrap();
        let t_c = Celsius::new(85.0);
        let p_transverse = forced_convection_loss(&saturn(), &transverse, t_c);
        let p_oblique = forced_convection_loss(&saturn(), &oblique, t_c);
        assert!(p_oblique < p_transverse);
        assert!(*p_oblique > 0.0);
    }

    #[test]
    fn test_turbulent_regime_for_large_conductor_high_wind() {
        // Re above 2650 switches to the turbulent constants; the correlation
        // must stay continuous enough that more wind still means more cooling
        let big = ConductorSpec::new(
            "big",
            ConductorType::Aac,
            Meters::from_millimeters(45.0),
            OhmsPerMeter::from_ohms_per_kilometer(0.05),
            None,
        )
        .unwrap();
        let slow = AmbientConditions::new(
            Celsius::new(35.0),
            MetersPerSecond::new(1.0),
            SolarPeriod::SummerNoon,
            Environment::Industrial,
            SurfaceCondition::Weathered,
        )
        .unwrap();
        let fast = AmbientConditions::new(
            Celsius::new(35.0),
            MetersPerSecond::new(3.0),
            SolarPeriod::SummerNoon,
            Environment::Industrial,
            SurfaceCondition::Weathered,
        )
        .unwrap();
        let t_c = Celsius::new(85.0);
        let p_slow = forced_convection_loss(&big, &slow, t_c);
        let p_fast = forced_convection_loss(&big, &fast, t_c);
        assert!(p_fast > p_slow);
    }
}
