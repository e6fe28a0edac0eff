//! Batch rating of a conductor catalog
//!
//! Rating a whole manufacturer catalog against the standard's named ambient
//! cases is a cross product of independent, side-effect-free Mode A calls,
//! so the rows parallelize trivially with rayon. Each cell carries its own
//! result: one bad catalog entry must not sink the rest of the table.

use crate::core_types::ambient::AmbientConditions;
use crate::core_types::conductor::ConductorSpec;
use crate::core_types::error::CalcResult;
use crate::core_types::units::Celsius;
use crate::solver::rating::{compute_rated_current, RatingResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One named rating case: an ambient condition plus the mandated maximum
/// conductor temperature for that case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCondition {
    /// Human-readable case description, e.g.
    /// "Industrial weathered / Summer noon / 1 m/s"
    pub description: String,
    /// Resolved ambient condition
    pub ambient: AmbientConditions,
    /// Maximum allowable conductor temperature for this case
    pub max_temperature: Celsius,
}

impl RatingCondition {
    /// Create a named rating case
    pub fn new(
        description: impl Into<String>,
        ambient: AmbientConditions,
        max_temperature: Celsius,
    ) -> Self {
        RatingCondition {
            description: description.into(),
            ambient,
            max_temperature,
        }
    }
}

/// Rate every conductor against every condition in parallel.
///
/// Returns one row per conductor, one cell per condition, in input order.
pub fn rate_catalog(
    conductors: &[ConductorSpec],
    conditions: &[RatingCondition],
) -> Vec<Vec<CalcResult<RatingResult>>> {
    conductors
        .par_iter()
        .map(|conductor| {
            conditions
                .iter()
                .map(|case| compute_rated_current(conductor, &case.ambient, case.max_temperature))
                .collect()
        })
        .collect()
}
