//! Ambient rating conditions
//!
//! The ambient side of the heat balance: air temperature, transverse wind,
//! solar period, and the weathering state of the conductor surface. D(b)5
//! rates against a small closed set of named cases ("industrial weathered /
//! summer noon / still air"), so every option here is an enumerated preset
//! with a `FromStr` that rejects unrecognized names; there are no free-form
//! irradiance or absorptivity inputs.

use crate::core_types::error::{CalcResult, RatingError};
use crate::core_types::units::{Celsius, Degrees, MetersPerSecond};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direct solar radiation intensity at summer noon (W/m²)
const SUMMER_NOON_DIRECT_IRRADIANCE: f64 = 1000.0;

/// Diffuse solar radiation intensity at summer noon (W/m²)
const SUMMER_NOON_DIFFUSE_IRRADIANCE: f64 = 100.0;

/// Ground runs hotter than air under summer noon sun, cooler on a winter
/// night (D(b)5 ground temperature offsets, °C)
const GROUND_OFFSET_C: f64 = 5.0;

/// Time-of-day / season preset fixing solar irradiance and ground temperature
///
/// D(b)5 rates two cases: full summer noon sun and a winter night with no
/// solar input at all. Night irradiance is exactly zero, which zeroes the
/// solar gain term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolarPeriod {
    /// Direct 1000 W/m², diffuse 100 W/m², ground at air + 5°C
    SummerNoon,
    /// No solar input, ground at air - 5°C
    WinterNight,
}

impl SolarPeriod {
    /// Direct solar radiation intensity (W/m²)
    #[must_use]
    pub fn direct_irradiance(self) -> f64 {
        match self {
            SolarPeriod::SummerNoon => SUMMER_NOON_DIRECT_IRRADIANCE,
            SolarPeriod::WinterNight => 0.0,
        }
    }

    /// Diffuse solar radiation intensity (W/m²)
    #[must_use]
    pub fn diffuse_irradiance(self) -> f64 {
        match self {
            SolarPeriod::SummerNoon => SUMMER_NOON_DIFFUSE_IRRADIANCE,
            SolarPeriod::WinterNight => 0.0,
        }
    }

    /// Ground temperature for the radiative exchange, relative to air
    #[must_use]
    pub fn ground_temperature(self, air_temperature: Celsius) -> Celsius {
        match self {
            SolarPeriod::SummerNoon => Celsius::new(*air_temperature + GROUND_OFFSET_C),
            SolarPeriod::WinterNight => Celsius::new(*air_temperature - GROUND_OFFSET_C),
        }
    }
}

impl fmt::Display for SolarPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarPeriod::SummerNoon => f.write_str("summer noon"),
            SolarPeriod::WinterNight => f.write_str("winter night"),
        }
    }
}

impl FromStr for SolarPeriod {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summer noon" => Ok(SolarPeriod::SummerNoon),
            "winter night" => Ok(SolarPeriod::WinterNight),
            other => Err(RatingError::InvalidAmbientCondition {
                field: "solar_period".to_string(),
                value: other.to_string(),
                reason: "unrecognized solar period preset".to_string(),
            }),
        }
    }
}

/// Atmospheric environment the line weathers in
///
/// Industrial atmospheres blacken the surface far more than rural ones,
/// raising both solar absorptivity and emissivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Clean rural atmosphere
    Rural,
    /// Polluted industrial atmosphere
    Industrial,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Rural => f.write_str("rural"),
            Environment::Industrial => f.write_str("industrial"),
        }
    }
}

impl FromStr for Environment {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rural" => Ok(Environment::Rural),
            "industrial" => Ok(Environment::Industrial),
            other => Err(RatingError::InvalidAmbientCondition {
                field: "environment".to_string(),
                value: other.to_string(),
                reason: "unrecognized environment preset".to_string(),
            }),
        }
    }
}

/// Weathering state of the conductor surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceCondition {
    /// Freshly strung, still bright
    New,
    /// In service long enough to oxidize/darken
    Weathered,
}

impl fmt::Display for SurfaceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCondition::New => f.write_str("new"),
            SurfaceCondition::Weathered => f.write_str("weathered"),
        }
    }
}

impl FromStr for SurfaceCondition {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(SurfaceCondition::New),
            "weathered" => Ok(SurfaceCondition::Weathered),
            other => Err(RatingError::InvalidAmbientCondition {
                field: "surface_condition".to_string(),
                value: other.to_string(),
                reason: "unrecognized surface condition preset".to_string(),
            }),
        }
    }
}

/// One resolved ambient rating condition
///
/// Constructed once per named case and reused across a whole catalog of
/// conductors. The constructor enforces the physical domain; the standard's
/// stated validity envelope (air 0-50°C, wind 0-3 m/s) is wider advice than
/// a hard limit, so values outside it are accepted with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientConditions {
    /// Ambient air temperature (35°C summer noon, 10°C winter night are the
    /// standard's cases; hotter regions rate at 45°C or above)
    pub air_temperature: Celsius,
    /// Transverse wind velocity; 0 selects the still-air (natural
    /// convection) branch
    pub wind_speed: MetersPerSecond,
    /// Angle of attack of the wind relative to the conductor axis.
    /// D(b)5 section 4.4: "practice tends to indicate that current ratings
    /// based on transverse flow are satisfactory", so 90° is the default.
    pub wind_angle: Degrees,
    /// Solar period preset
    pub solar: SolarPeriod,
    /// Atmospheric environment
    pub environment: Environment,
    /// Conductor surface weathering state
    pub surface: SurfaceCondition,
}

impl AmbientConditions {
    /// Create a validated ambient condition with transverse (90°) wind.
    ///
    /// Fails with `InvalidAmbientCondition` for a negative or non-finite
    /// wind speed or a non-finite air temperature.
    pub fn new(
        air_temperature: Celsius,
        wind_speed: MetersPerSecond,
        solar: SolarPeriod,
        environment: Environment,
        surface: SurfaceCondition,
    ) -> CalcResult<Self> {
        let t_a = *air_temperature;
        if !t_a.is_finite() {
            return Err(RatingError::InvalidAmbientCondition {
                field: "air_temperature".to_string(),
                value: t_a.to_string(),
                reason: "air temperature must be finite".to_string(),
            });
        }
        let v = *wind_speed;
        if !v.is_finite() || v < 0.0 {
            return Err(RatingError::InvalidAmbientCondition {
                field: "wind_speed".to_string(),
                value: v.to_string(),
                reason: "wind speed must be non-negative and finite".to_string(),
            });
        }
        if !(0.0..=50.0).contains(&t_a) {
            tracing::warn!(
                air_temperature = t_a,
                "air temperature outside the 0-50°C envelope of D(b)5"
            );
        }
        if v > 3.0 {
            tracing::warn!(
                wind_speed = v,
                "wind speed above the 3 m/s envelope of D(b)5"
            );
        }
        Ok(AmbientConditions {
            air_temperature,
            wind_speed,
            wind_angle: Degrees::new(90.0),
            solar,
            environment,
            surface,
        })
    }

    /// Override the wind angle of attack (0° = parallel, 90° = transverse).
    ///
    /// Fails with `InvalidAmbientCondition` outside [0, 90].
    pub fn with_wind_angle(mut self, wind_angle: Degrees) -> CalcResult<Self> {
        let psi = *wind_angle;
        if !psi.is_finite() || !(0.0..=90.0).contains(&psi) {
            return Err(RatingError::InvalidAmbientCondition {
                field: "wind_angle".to_string(),
                value: psi.to_string(),
                reason: "wind angle must be within [0, 90] degrees".to_string(),
            });
        }
        self.wind_angle = wind_angle;
        Ok(self)
    }

    /// The standard summer rating case: 35°C air, full sun, industrial
    /// weathered surface (the conservative pairing for solar gain)
    pub fn industrial_weathered_summer_noon(wind_speed: MetersPerSecond) -> CalcResult<Self> {
        Self::new(
            Celsius::new(35.0),
            wind_speed,
            SolarPeriod::SummerNoon,
            Environment::Industrial,
            SurfaceCondition::Weathered,
        )
    }

    /// Summer noon over a rural line
    pub fn rural_weathered_summer_noon(wind_speed: MetersPerSecond) -> CalcResult<Self> {
        Self::new(
            Celsius::new(35.0),
            wind_speed,
            SolarPeriod::SummerNoon,
            Environment::Rural,
            SurfaceCondition::Weathered,
        )
    }

    /// The standard winter rating case: 10°C air, no sun, rural weathered
    pub fn rural_weathered_winter_night(wind_speed: MetersPerSecond) -> CalcResult<Self> {
        Self::new(
            Celsius::new(10.0),
            wind_speed,
            SolarPeriod::WinterNight,
            Environment::Rural,
            SurfaceCondition::Weathered,
        )
    }

    /// Solar absorption coefficient a of the conductor surface
    ///
    /// Weathered surfaces per D(b)5 (0.85 industrial, 0.5 rural); new bright
    /// aluminium takes 0.3 regardless of environment.
    #[must_use]
    pub fn absorptivity(&self) -> f64 {
        match (self.surface, self.environment) {
            (SurfaceCondition::Weathered, Environment::Industrial) => 0.85,
            (SurfaceCondition::Weathered, Environment::Rural) => 0.5,
            (SurfaceCondition::New, _) => 0.3,
        }
    }

    /// Emissivity e of the conductor surface
    ///
    /// D(b)5 takes emissivity equal to absorptivity for each surface state.
    #[must_use]
    pub fn emissivity(&self) -> f64 {
        self.absorptivity()
    }

    /// Whether this condition has any solar input
    #[must_use]
    pub fn has_solar_input(&self) -> bool {
        self.solar.direct_irradiance() > 0.0 || self.solar.diffuse_irradiance() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_factors_in_unit_range() {
        for (surface, environment) in [
            (SurfaceCondition::Weathered, Environment::Industrial),
            (SurfaceCondition::Weathered, Environment::Rural),
            (SurfaceCondition::New, Environment::Industrial),
            (SurfaceCondition::New, Environment::Rural),
        ] {
            let ambient = AmbientConditions::new(
                Celsius::new(35.0),
                MetersPerSecond::new(1.0),
                SolarPeriod::SummerNoon,
                environment,
                surface,
            )
            .unwrap();
            assert!((0.0..=1.0).contains(&ambient.absorptivity()));
            assert_eq!(ambient.absorptivity(), ambient.emissivity());
        }
    }

    #[test]
    fn test_weathered_industrial_absorbs_most() {
        let industrial =
            AmbientConditions::industrial_weathered_summer_noon(MetersPerSecond::new(1.0)).unwrap();
        let rural =
            AmbientConditions::rural_weathered_summer_noon(MetersPerSecond::new(1.0)).unwrap();
        assert_eq!(industrial.absorptivity(), 0.85);
        assert_eq!(rural.absorptivity(), 0.5);
        assert!(industrial.absorptivity() > rural.absorptivity());
    }

    #[test]
    fn test_winter_night_has_no_solar_input() {
        let night =
            AmbientConditions::rural_weathered_winter_night(MetersPerSecond::new(0.0)).unwrap();
        assert!(!night.has_solar_input());
        assert_eq!(night.solar.direct_irradiance(), 0.0);
        assert_eq!(night.solar.diffuse_irradiance(), 0.0);
        // Ground runs below air on a winter night
        assert!(*night.solar.ground_temperature(night.air_temperature) < *night.air_temperature);
    }

    #[test]
    fn test_rejects_negative_wind() {
        let result = AmbientConditions::new(
            Celsius::new(35.0),
            MetersPerSecond::new(-0.5),
            SolarPeriod::SummerNoon,
            Environment::Rural,
            SurfaceCondition::Weathered,
        );
        assert!(matches!(
            result,
            Err(RatingError::InvalidAmbientCondition { ref field, .. }) if field == "wind_speed"
        ));
    }

    #[test]
    fn test_wind_angle_domain() {
        let ambient =
            AmbientConditions::industrial_weathered_summer_noon(MetersPerSecond::new(1.0)).unwrap();
        assert_eq!(*ambient.wind_angle, 90.0);

        let oblique = ambient.clone().with_wind_angle(Degrees::new(30.0)).unwrap();
        assert_eq!(*oblique.wind_angle, 30.0);

        assert!(ambient.clone().with_wind_angle(Degrees::new(120.0)).is_err());
        assert!(ambient.with_wind_angle(Degrees::new(-5.0)).is_err());
    }

    #[test]
    fn test_preset_names_are_a_closed_set() {
        assert_eq!(
            "summer noon".parse::<SolarPeriod>().unwrap(),
            SolarPeriod::SummerNoon
        );
        assert_eq!(
            "winter night".parse::<SolarPeriod>().unwrap(),
            SolarPeriod::WinterNight
        );
        assert!("autumn dusk".parse::<SolarPeriod>().is_err());
        assert!("urban".parse::<Environment>().is_err());
        assert!("polished".parse::<SurfaceCondition>().is_err());
    }
}
