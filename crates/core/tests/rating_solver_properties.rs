//! Behavioral properties of the rating solvers
//!
//! Beyond the published anchor figures, the model has to behave sensibly as
//! a function: more current runs hotter, more wind runs cooler, Mode A and
//! Mode B agree, and pathological inputs fail with the right error instead
//! of a wrong number.
//!
//! Run with: `cargo test --test rating_solver_properties`

use approx::assert_abs_diff_eq;
use conductor_rating_core::core_types::units::{
    Amperes, Celsius, Degrees, Meters, MetersPerSecond, OhmsPerMeter,
};
use conductor_rating_core::{
    compute_operating_temperature, compute_rated_current, AmbientConditions, ConductorSpec,
    ConductorType, LayerConstruction, RatingError,
};

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

fn summer_noon(wind_m_per_s: f64) -> AmbientConditions {
    AmbientConditions::industrial_weathered_summer_noon(MetersPerSecond::new(wind_m_per_s)).unwrap()
}

fn winter_night(wind_m_per_s: f64) -> AmbientConditions {
    AmbientConditions::rural_weathered_winter_night(MetersPerSecond::new(wind_m_per_s)).unwrap()
}

#[test]
fn test_temperature_rises_monotonically_with_current() {
    let ambient = summer_noon(1.0);
    let conductor = saturn();
    let mut previous = 0.0;
    for amps in [300.0, 400.0, 500.0, 600.0] {
        let result =
            compute_operating_temperature(&conductor, &ambient, Amperes::new(amps)).unwrap();
        assert!(
            *result.conductor_temperature > previous,
            "{amps} A should run hotter than the previous step"
        );
        previous = *result.conductor_temperature;
    }
    // Spot value from the reference evaluation: 600 A lands near 72.3°C
    assert_abs_diff_eq!(previous, 72.26, epsilon = 0.05);
}

#[test]
fn test_temperature_falls_monotonically_with_wind() {
    let conductor = saturn();
    let current = Amperes::new(600.0);
    let mut previous = f64::INFINITY;
    for wind in [0.0, 0.5, 1.0, 2.0, 3.0] {
        let result =
            compute_operating_temperature(&conductor, &summer_noon(wind), current).unwrap();
        assert!(
            *result.conductor_temperature < previous,
            "{wind} m/s should run cooler than the previous step"
        );
        previous = *result.conductor_temperature;
    }
    assert_abs_diff_eq!(previous, 56.83, epsilon = 0.05);
}

#[test]
fn test_zero_current_sits_exactly_at_ambient_at_night() {
    // No resistive heat and no sun leaves nothing to balance
    let result =
        compute_operating_temperature(&almond(), &winter_night(0.0), Amperes::new(0.0)).unwrap();
    assert_eq!(*result.conductor_temperature, 10.0);
    assert_eq!(result.iterations, 0);
    assert_eq!(*result.terms.resistive_heat, 0.0);
}

#[test]
fn test_night_rating_has_no_solar_term() {
    let result =
        compute_operating_temperature(&almond(), &winter_night(0.0), Amperes::new(150.0)).unwrap();
    assert_eq!(*result.terms.solar_gain, 0.0);
    assert_abs_diff_eq!(*result.conductor_temperature, 83.05, epsilon = 0.05);
}

#[test]
fn test_limit_at_or_below_ambient_is_rejected() {
    let ambient = summer_noon(1.0);
    for limit in [35.0, 20.0] {
        let err = compute_rated_current(&saturn(), &ambient, Celsius::new(limit)).unwrap_err();
        assert!(matches!(
            err,
            RatingError::InvalidAmbientCondition { ref field, .. } if field == "max_temp"
        ));
    }
}

#[test]
fn test_sun_soaked_limit_just_above_ambient_rates_zero() {
    // 36°C in full summer sun: solar gain exceeds what 1°C of rise can shed,
    // so the only safe rating is no current at all
    let result = compute_rated_current(&saturn(), &summer_noon(1.0), Celsius::new(36.0)).unwrap();
    assert_eq!(*result.current, 0.0);
}

#[test]
fn test_invalid_conductor_parameters_are_rejected_at_construction() {
    let bad_diameter = ConductorSpec::new(
        "BadDiameter",
        ConductorType::Aac,
        Meters::new(0.0),
        OhmsPerMeter::from_ohms_per_kilometer(0.110),
        None,
    )
    .unwrap_err();
    assert!(matches!(
        bad_diameter,
        RatingError::InvalidConductorParameter { ref field, .. } if field == "diameter"
    ));

    let bad_resistance = ConductorSpec::new(
        "BadResistance",
        ConductorType::Aac,
        Meters::from_millimeters(21.0),
        OhmsPerMeter::from_ohms_per_kilometer(-0.1),
        None,
    )
    .unwrap_err();
    assert!(matches!(
        bad_resistance,
        RatingError::InvalidConductorParameter { ref field, .. } if field == "dc_resistance_20c"
    ));
}

#[test]
fn test_negative_wind_is_rejected_at_construction() {
    let err = AmbientConditions::industrial_weathered_summer_noon(MetersPerSecond::new(-1.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RatingError::InvalidAmbientCondition { ref field, .. } if field == "wind_speed"
    ));
}

#[test]
fn test_negative_current_is_rejected() {
    let err = compute_operating_temperature(&saturn(), &summer_noon(1.0), Amperes::new(-10.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RatingError::InvalidConductorParameter { ref field, .. } if field == "current"
    ));
}

#[test]
fn test_overload_current_reports_no_bracket() {
    // 5 kA through a small ACSR sits far above the search span
    let err = compute_operating_temperature(&almond(), &summer_noon(1.0), Amperes::new(5000.0))
        .unwrap_err();
    match err {
        RatingError::NoSolutionBracket {
            current_a,
            residual_upper,
            ..
        } => {
            assert_eq!(current_a, 5000.0);
            assert!(residual_upper > 0.0);
        }
        other => panic!("expected NoSolutionBracket, got {other:?}"),
    }
}

#[test]
fn test_tiny_night_current_cools_below_ambient_and_reports_no_bracket() {
    // Under a clear winter night sky the radiative sink pulls an almost
    // unloaded conductor below air temperature, outside the search bracket
    let err = compute_operating_temperature(&almond(), &winter_night(0.0), Amperes::new(5.0))
        .unwrap_err();
    match err {
        RatingError::NoSolutionBracket { residual_lower, .. } => {
            assert!(residual_lower < 0.0);
        }
        other => panic!("expected NoSolutionBracket, got {other:?}"),
    }
}

#[test]
fn test_oblique_wind_rates_below_transverse() {
    let transverse = summer_noon(1.0);
    let oblique = summer_noon(1.0)
        .with_wind_angle(Degrees::new(20.0))
        .unwrap();
    let i_transverse = compute_rated_current(&saturn(), &transverse, Celsius::new(85.0)).unwrap();
    let i_oblique = compute_rated_current(&saturn(), &oblique, Celsius::new(85.0)).unwrap();
    assert!(*i_oblique.current < *i_transverse.current);
}

#[test]
fn test_bisection_converges_within_the_iteration_budget() {
    let result =
        compute_operating_temperature(&saturn(), &summer_noon(1.0), Amperes::new(500.0)).unwrap();
    assert!(result.iterations <= 20);
    assert!(*result.conductor_temperature > 35.0);
    assert!(*result.conductor_temperature < 85.0);
}
