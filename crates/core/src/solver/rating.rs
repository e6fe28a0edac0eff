//! Rating solvers: invert the steady-state heat balance
//!
//! Two entry points over the same physical model:
//!
//! - **Mode A** (`compute_rated_current`): the conductor temperature is fixed
//!   at its allowable maximum, so every loss/gain term is a constant and the
//!   current falls out in closed form, I = sqrt((P_conv + P_R - P_S) / r_ac).
//! - **Mode B** (`compute_operating_temperature`): the current is fixed and
//!   the temperature appears on both sides of the balance (directly in the
//!   resistive term through r_ac(t), and in every loss term), so the root is
//!   found by bisection over a bounded physical range.
//!
//! Both return the converged value together with the decomposed heat terms
//! at the operating point and convergence diagnostics. An unconverged value
//! is never returned: the iteration cap surfaces as `ConvergenceError`.

use crate::core_types::ambient::AmbientConditions;
use crate::core_types::conductor::ConductorSpec;
use crate::core_types::error::{CalcResult, RatingError};
use crate::core_types::units::{Amperes, Celsius, WattsPerMeter};
use crate::physics::heat_balance;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Iteration cap for the Mode B bisection. The bracket halves each step, so
/// the width tolerance is met in ~15 iterations; hitting the cap means the
/// residual is misbehaving and the result must not be trusted.
const MAX_ITERATIONS: u32 = 100;

/// Convergence tolerance on the heat-balance residual (W/m)
const RESIDUAL_TOLERANCE_W_PER_M: f64 = 0.01;

/// Convergence tolerance on the bisection bracket width (°C)
const BRACKET_TOLERANCE_C: f64 = 0.01;

/// Temperature search span above ambient for Mode B (°C). A bare conductor
/// in air does not reach 200°C above ambient at any steady current a line
/// would survive; a residual still positive here means no steady state.
const SEARCH_SPAN_C: f64 = 200.0;

/// Decomposed heat terms at an operating point (all W/m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatTerms {
    /// Convective loss (dominant of forced/natural)
    pub convective_loss: WattsPerMeter,
    /// Radiative loss to ground and sky
    pub radiative_loss: WattsPerMeter,
    /// Solar gain
    pub solar_gain: WattsPerMeter,
    /// I²R heat generation
    pub resistive_heat: WattsPerMeter,
}

impl HeatTerms {
    /// Evaluate all four terms at a trial current and conductor temperature
    #[must_use]
    pub fn evaluate(
        conductor: &ConductorSpec,
        ambient: &AmbientConditions,
        current: Amperes,
        conductor_temp: Celsius,
    ) -> Self {
        HeatTerms {
            convective_loss: heat_balance::convective_loss(conductor, ambient, conductor_temp),
            radiative_loss: heat_balance::radiative_loss(conductor, ambient, conductor_temp),
            solar_gain: heat_balance::solar_gain(conductor, ambient),
            resistive_heat: heat_balance::resistive_heat(conductor, current, conductor_temp),
        }
    }

    /// Heat-balance residual: generation + gain minus losses (W/m).
    /// Positive means the conductor is still heating at this temperature.
    #[must_use]
    pub fn residual(&self) -> f64 {
        *self.resistive_heat + *self.solar_gain - *self.convective_loss - *self.radiative_loss
    }
}

/// Converged rating solution with diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    /// Steady-state current (the unknown in Mode A, the input in Mode B)
    pub current: Amperes,
    /// Conductor temperature (the input in Mode A, the unknown in Mode B)
    pub conductor_temperature: Celsius,
    /// Heat terms decomposed at the operating point
    pub terms: HeatTerms,
    /// Bisection iterations consumed (0 for the closed-form and
    /// short-circuit paths)
    pub iterations: u32,
    /// Final heat-balance residual at the returned point (W/m)
    pub residual: f64,
}

/// Mode A: rated current for a maximum allowable conductor temperature.
///
/// Closed-form: with the temperature fixed, every loss/gain term is a
/// constant and I = sqrt((P_conv + P_R - P_S) / r_ac(t_max)).
///
/// Fails with `InvalidAmbientCondition` when `max_temp` is at or below the
/// ambient air temperature (the boundary policy for this crate; a limit the
/// ambient air already violates has no rating). When solar gain alone
/// exceeds all losses at the limit the rating is 0 A: the conductor runs
/// over its limit even unloaded, and zero is the conservative answer.
pub fn compute_rated_current(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    max_temp: Celsius,
) -> CalcResult<RatingResult> {
    let t_max = *max_temp;
    let t_a = *ambient.air_temperature;
    if !t_max.is_finite() || t_max <= t_a {
        return Err(RatingError::InvalidAmbientCondition {
            field: "max_temp".to_string(),
            value: t_max.to_string(),
            reason: format!("maximum conductor temperature must exceed ambient ({t_a}°C)"),
        });
    }
    if !(50.0..=100.0).contains(&t_max) {
        warn!(
            max_temp = t_max,
            "maximum conductor temperature outside the 50-100°C envelope of D(b)5"
        );
    }

    let mut terms = HeatTerms::evaluate(conductor, ambient, Amperes::new(0.0), max_temp);
    let net_loss = *terms.convective_loss + *terms.radiative_loss - *terms.solar_gain;
    let r_ac = *conductor.ac_resistance(max_temp);

    let current = if net_loss <= 0.0 {
        warn!(
            conductor = %conductor.name,
            net_loss_w_per_m = net_loss,
            "solar gain exceeds heat losses at the temperature limit; rating is 0 A"
        );
        Amperes::new(0.0)
    } else {
        Amperes::new((net_loss / r_ac).sqrt())
    };
    terms.resistive_heat = heat_balance::resistive_heat(conductor, current, max_temp);

    debug!(
        conductor = %conductor.name,
        max_temp = t_max,
        current = *current,
        "rated current computed"
    );
    Ok(RatingResult {
        current,
        conductor_temperature: max_temp,
        residual: terms.residual(),
        terms,
        iterations: 0,
    })
}

/// Mode B: steady-state conductor temperature at a given current.
///
/// Bisection on the heat-balance residual over [t_a, t_a + 200°C]. The
/// residual must be positive at the lower bound and non-positive at the
/// upper bound, otherwise there is no steady state in the physical range
/// and `NoSolutionBracket` is returned (a current no steady temperature can
/// dissipate, or a night case whose equilibrium sits below ambient).
///
/// Converges when |residual| < 0.01 W/m or the bracket is narrower than
/// 0.01°C; fails with `ConvergenceError` at the iteration cap. Zero current
/// short-circuits to the ambient temperature with no search.
pub fn compute_operating_temperature(
    conductor: &ConductorSpec,
    ambient: &AmbientConditions,
    current: Amperes,
) -> CalcResult<RatingResult> {
    let i = *current;
    if !i.is_finite() || i < 0.0 {
        return Err(RatingError::InvalidConductorParameter {
            field: "current".to_string(),
            value: i.to_string(),
            reason: "current must be non-negative and finite".to_string(),
        });
    }

    let t_a = *ambient.air_temperature;
    if i == 0.0 {
        // Unloaded conductor sits at ambient
        let terms = HeatTerms::evaluate(conductor, ambient, current, ambient.air_temperature);
        return Ok(RatingResult {
            current,
            conductor_temperature: ambient.air_temperature,
            residual: terms.residual(),
            terms,
            iterations: 0,
        });
    }

    let mut lower = t_a;
    let mut upper = t_a + SEARCH_SPAN_C;
    let terms_at = |t: f64| HeatTerms::evaluate(conductor, ambient, current, Celsius::new(t));

    let residual_lower = terms_at(lower).residual();
    let residual_upper = terms_at(upper).residual();
    debug!(
        conductor = %conductor.name,
        current = i,
        lower,
        upper,
        residual_lower,
        residual_upper,
        "bisection bracket"
    );
    if residual_lower == 0.0 {
        let terms = terms_at(lower);
        return Ok(RatingResult {
            current,
            conductor_temperature: Celsius::new(lower),
            residual: 0.0,
            terms,
            iterations: 0,
        });
    }
    if residual_lower < 0.0 || residual_upper > 0.0 {
        return Err(RatingError::NoSolutionBracket {
            current_a: i,
            lower_c: lower,
            upper_c: upper,
            residual_lower,
            residual_upper,
        });
    }

    let mut residual = residual_lower;
    for iteration in 1..=MAX_ITERATIONS {
        let mid = 0.5 * (lower + upper);
        let terms = terms_at(mid);
        residual = terms.residual();
        trace!(iteration, lower, upper, mid, residual, "bisection step");

        if residual.abs() < RESIDUAL_TOLERANCE_W_PER_M || (upper - lower) < BRACKET_TOLERANCE_C {
            debug!(
                conductor = %conductor.name,
                current = i,
                conductor_temperature = mid,
                iteration,
                residual,
                "operating temperature converged"
            );
            return Ok(RatingResult {
                current,
                conductor_temperature: Celsius::new(mid),
                residual,
                terms,
                iterations: iteration,
            });
        }
        if residual > 0.0 {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    Err(RatingError::ConvergenceError {
        iterations: MAX_ITERATIONS,
        residual,
    })
}
