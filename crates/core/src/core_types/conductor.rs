//! Conductor description and temperature-dependent resistance
//!
//! A `ConductorSpec` is the immutable physical/electrical description of one
//! catalog entry: overall diameter, DC resistance at 20°C, and the stranding
//! class that fixes the skin/magnetic resistance factors and the temperature
//! coefficient. Instances are built once per catalog entry by an external
//! loader and passed by reference into repeated rating calls.
//!
//! # References
//! - ENA D(b)5-1988 section 4.6 (skin effect and magnetic effect ratios)
//! - Prysmian/Olex bare overhead conductor catalog data (α per alloy)

use crate::core_types::error::{CalcResult, RatingError};
use crate::core_types::units::{Celsius, Meters, OhmsPerMeter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skin effect ratio k_s
///
/// D(b)5 section 4.6: "the value of k_s is dependent on conductor size. For
/// the purpose of the document the value of 1.015 is considered appropriate."
const SKIN_EFFECT_RATIO: f64 = 1.015;

/// Largest overall diameter in the manufacturer catalogs (49.5 mm). A larger
/// value is almost certainly a data-entry error (ohm/km vs ohm/m, mm vs m).
const MAX_CATALOG_DIAMETER_M: f64 = 0.0495;

/// Bare overhead conductor construction classes recognized by D(b)5
///
/// The class fixes the temperature coefficient of resistance and whether a
/// steel-reinforced layer construction must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductorType {
    /// All Aluminium Conductor
    Aac,
    /// All Aluminium Alloy Conductor, 1120 alloy
    Aaac1120,
    /// Hard Drawn Copper
    Hdcu,
    /// Aluminium Conductor, Steel Reinforced (galvanized steel core)
    AcsrGz,
    /// Aluminium Conductor, Steel Reinforced (aluminium clad core)
    AcsrAc,
    /// Steel Conductor, galvanized
    ScGz,
    /// Steel Conductor, aluminium clad
    ScAc,
    /// Aluminium Alloy Conductor, Steel Reinforced (galvanized core)
    AacsrGz,
    /// Aluminium Alloy Conductor, Steel Reinforced (aluminium clad core)
    AacsrAc,
}

impl ConductorType {
    /// Whether this class carries a steel core and therefore needs a
    /// layer construction for the magnetic effect ratio
    #[must_use]
    pub fn is_steel_reinforced(self) -> bool {
        matches!(
            self,
            ConductorType::AcsrGz
                | ConductorType::AcsrAc
                | ConductorType::AacsrGz
                | ConductorType::AacsrAc
        )
    }

    /// Temperature coefficient of resistance α at 20°C (1/K)
    ///
    /// From the Prysmian catalog. ACSR is taken as per AAC; AACSR as per
    /// AAAC/1120.
    #[must_use]
    pub fn temperature_coefficient(self) -> f64 {
        match self {
            ConductorType::Aac => 0.00403,
            ConductorType::AcsrGz => 0.00403,
            ConductorType::AcsrAc => 0.00403,
            ConductorType::Aaac1120 => 0.00390,
            ConductorType::ScGz => 0.0044,
            ConductorType::ScAc => 0.0036,
            ConductorType::Hdcu => 0.00381,
            ConductorType::AacsrGz => 0.00390,
            ConductorType::AacsrAc => 0.00390,
        }
    }

    /// Catalog notation for this class
    #[must_use]
    pub fn catalog_name(self) -> &'static str {
        match self {
            ConductorType::Aac => "AAC",
            ConductorType::Aaac1120 => "AAAC/1120",
            ConductorType::Hdcu => "HDCU",
            ConductorType::AcsrGz => "ACSR/GZ",
            ConductorType::AcsrAc => "ACSR/AC",
            ConductorType::ScGz => "SC/GZ",
            ConductorType::ScAc => "SC/AC",
            ConductorType::AacsrGz => "AACSR/GZ",
            ConductorType::AacsrAc => "AACSR/AC",
        }
    }
}

impl fmt::Display for ConductorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

impl FromStr for ConductorType {
    type Err = RatingError;

    /// Parse the catalog notation; unrecognized names are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AAC" => Ok(ConductorType::Aac),
            "AAAC/1120" => Ok(ConductorType::Aaac1120),
            "HDCU" => Ok(ConductorType::Hdcu),
            "ACSR/GZ" => Ok(ConductorType::AcsrGz),
            "ACSR/AC" => Ok(ConductorType::AcsrAc),
            "SC/GZ" => Ok(ConductorType::ScGz),
            "SC/AC" => Ok(ConductorType::ScAc),
            "AACSR/GZ" => Ok(ConductorType::AacsrGz),
            "AACSR/AC" => Ok(ConductorType::AacsrAc),
            other => Err(RatingError::InvalidConductorParameter {
                field: "conductor_type".to_string(),
                value: other.to_string(),
                reason: "unrecognized conductor type".to_string(),
            }),
        }
    }
}

/// Layer construction (aluminium strands / steel strands) of a
/// steel-reinforced conductor
///
/// Fixes the magnetic effect ratio k_m of D(b)5 section 4.6: current
/// spiralling around a steel core induces hysteresis and eddy losses that
/// raise the effective AC resistance. Balanced constructions (even aluminium
/// layers, e.g. 30/7) cancel and take k_m = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerConstruction {
    /// 4 aluminium / 3 steel
    FourThree,
    /// 3 aluminium / 4 steel
    ThreeFour,
    /// 6 aluminium / 7 steel
    SixSeven,
    /// 6 aluminium / 1 steel, strand diameter >= 3.0 mm
    SixOneLarge,
    /// 6 aluminium / 1 steel, strand diameter < 3.0 mm
    SixOneSmall,
    /// 30 aluminium / 7 steel
    ThirtySeven,
    /// 54 aluminium / 7 steel
    FiftyFourSeven,
    /// 54 aluminium / 19 steel
    FiftyFourNineteen,
}

impl LayerConstruction {
    /// Magnetic effect ratio k_m (D(b)5 section 4.6 table)
    #[must_use]
    pub fn magnetic_ratio(self) -> f64 {
        match self {
            LayerConstruction::FourThree => 1.10,
            LayerConstruction::ThreeFour => 1.06,
            LayerConstruction::SixSeven => 1.13,
            LayerConstruction::SixOneLarge => 1.10,
            LayerConstruction::SixOneSmall => 1.07,
            LayerConstruction::ThirtySeven => 1.00,
            LayerConstruction::FiftyFourSeven => 1.06,
            LayerConstruction::FiftyFourNineteen => 1.07,
        }
    }

    /// Catalog notation for this construction
    #[must_use]
    pub fn notation(self) -> &'static str {
        match self {
            LayerConstruction::FourThree => "4/3",
            LayerConstruction::ThreeFour => "3/4",
            LayerConstruction::SixSeven => "6/7",
            LayerConstruction::SixOneLarge => "6/1(>=3.0mm)",
            LayerConstruction::SixOneSmall => "6/1(<3.0mm)",
            LayerConstruction::ThirtySeven => "30/7",
            LayerConstruction::FiftyFourSeven => "54/7",
            LayerConstruction::FiftyFourNineteen => "54/19",
        }
    }
}

impl fmt::Display for LayerConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for LayerConstruction {
    type Err = RatingError;

    /// Parse the catalog notation; unrecognized constructions are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4/3" => Ok(LayerConstruction::FourThree),
            "3/4" => Ok(LayerConstruction::ThreeFour),
            "6/7" => Ok(LayerConstruction::SixSeven),
            "6/1(>=3.0mm)" => Ok(LayerConstruction::SixOneLarge),
            "6/1(<3.0mm)" => Ok(LayerConstruction::SixOneSmall),
            "30/7" => Ok(LayerConstruction::ThirtySeven),
            "54/7" => Ok(LayerConstruction::FiftyFourSeven),
            "54/19" => Ok(LayerConstruction::FiftyFourNineteen),
            other => Err(RatingError::InvalidConductorParameter {
                field: "layer_construction".to_string(),
                value: other.to_string(),
                reason: "unrecognized layer construction".to_string(),
            }),
        }
    }
}

/// Immutable description of one bare overhead conductor
///
/// Built once per catalog entry; the constructor enforces the physical
/// domain so every downstream calculation can assume a valid conductor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorSpec {
    /// Catalog codename (e.g. "Saturn", "Hydrogen")
    pub name: String,
    /// Construction class
    pub conductor_type: ConductorType,
    /// Nominal overall diameter (m)
    pub diameter: Meters,
    /// DC resistance at 20°C (ohm/m)
    pub dc_resistance_20c: OhmsPerMeter,
    /// Layer construction; required iff the class is steel reinforced
    pub layer_construction: Option<LayerConstruction>,
}

impl ConductorSpec {
    /// Create a validated conductor description.
    ///
    /// Fails with `InvalidConductorParameter` when the diameter is outside
    /// (0, 49.5 mm], the resistance is non-positive, either is non-finite,
    /// or the layer construction does not match the construction class.
    pub fn new(
        name: impl Into<String>,
        conductor_type: ConductorType,
        diameter: Meters,
        dc_resistance_20c: OhmsPerMeter,
        layer_construction: Option<LayerConstruction>,
    ) -> CalcResult<Self> {
        let d = *diameter;
        if !d.is_finite() || d <= 0.0 {
            return Err(RatingError::InvalidConductorParameter {
                field: "diameter".to_string(),
                value: d.to_string(),
                reason: "diameter must be positive and finite".to_string(),
            });
        }
        if d > MAX_CATALOG_DIAMETER_M {
            return Err(RatingError::InvalidConductorParameter {
                field: "diameter".to_string(),
                value: d.to_string(),
                reason: format!(
                    "diameter exceeds the largest catalog conductor ({MAX_CATALOG_DIAMETER_M} m); \
                     check the units of the source data"
                ),
            });
        }
        let r = *dc_resistance_20c;
        if !r.is_finite() || r <= 0.0 {
            return Err(RatingError::InvalidConductorParameter {
                field: "dc_resistance_20c".to_string(),
                value: r.to_string(),
                reason: "resistance must be positive and finite".to_string(),
            });
        }
        match (conductor_type.is_steel_reinforced(), layer_construction) {
            (true, None) => {
                return Err(RatingError::InvalidConductorParameter {
                    field: "layer_construction".to_string(),
                    value: "None".to_string(),
                    reason: format!(
                        "{conductor_type} is steel reinforced and requires a layer construction"
                    ),
                });
            }
            (false, Some(layers)) => {
                return Err(RatingError::InvalidConductorParameter {
                    field: "layer_construction".to_string(),
                    value: layers.to_string(),
                    reason: format!("{conductor_type} has no steel core"),
                });
            }
            _ => {}
        }

        Ok(ConductorSpec {
            name: name.into(),
            conductor_type,
            diameter,
            dc_resistance_20c,
            layer_construction,
        })
    }

    /// Combined DC-to-AC resistance factor k = k_s * k_m
    #[must_use]
    pub fn resistance_factor(&self) -> f64 {
        let k_m = self
            .layer_construction
            .map_or(1.00, LayerConstruction::magnetic_ratio);
        SKIN_EFFECT_RATIO * k_m
    }

    /// Effective AC resistance at a conductor temperature (ohm/m)
    ///
    /// r_ac = k * R_dc20 * (1 + α (t - 20))
    ///
    /// Resistance rises with the trial temperature, which is what couples the
    /// resistive term to the unknown in the heat balance.
    #[must_use]
    pub fn ac_resistance(&self, conductor_temp: Celsius) -> OhmsPerMeter {
        let alpha = self.conductor_type.temperature_coefficient();
        let r20 = *self.dc_resistance_20c;
        OhmsPerMeter::new(self.resistance_factor() * r20 * (1.0 + alpha * (*conductor_temp - 20.0)))
    }
}
