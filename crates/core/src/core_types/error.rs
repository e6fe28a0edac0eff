//! # Error Types
//!
//! Structured error types for the rating calculator. Each variant carries
//! enough context for a caller (or a batch driver walking a whole catalog)
//! to report exactly which input or which case failed.
//!
//! ## Example
//!
//! ```rust
//! use conductor_rating_core::core_types::error::{CalcResult, RatingError};
//!
//! fn validate_diameter(diameter_m: f64) -> CalcResult<()> {
//!     if diameter_m <= 0.0 {
//!         return Err(RatingError::InvalidConductorParameter {
//!             field: "diameter".to_string(),
//!             value: diameter_m.to_string(),
//!             reason: "diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rating operations
pub type CalcResult<T> = Result<T, RatingError>;

/// Structured error type for rating operations.
///
/// The first two variants are caller errors and are surfaced immediately,
/// never recovered internally. The last two are solver outcomes: the heat
/// balance genuinely has no root in the physical search range, or the
/// iteration cap was hit before the tolerance was met. An unconverged value
/// is never returned silently.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RatingError {
    /// A conductor parameter is out of its physical domain
    #[error("invalid conductor parameter '{field}': {value} - {reason}")]
    InvalidConductorParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// An ambient condition is out of its physical domain
    #[error("invalid ambient condition '{field}': {value} - {reason}")]
    InvalidAmbientCondition {
        field: String,
        value: String,
        reason: String,
    },

    /// The heat-balance residual has no sign change over the temperature
    /// search range: no steady-state temperature exists within physical
    /// bounds for this current
    #[error(
        "no steady-state temperature in [{lower_c:.1}, {upper_c:.1}]°C for {current_a:.1} A \
         (residual {residual_lower:.3} W/m at lower bound, {residual_upper:.3} W/m at upper)"
    )]
    NoSolutionBracket {
        current_a: f64,
        lower_c: f64,
        upper_c: f64,
        residual_lower: f64,
        residual_upper: f64,
    },

    /// The iteration cap was exceeded before meeting tolerance
    #[error("heat balance did not converge after {iterations} iterations (residual {residual:.4} W/m)")]
    ConvergenceError { iterations: u32, residual: f64 },
}
