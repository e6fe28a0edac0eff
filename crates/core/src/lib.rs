//! Conductor Rating Core Library
//!
//! Steady-state thermal rating of bare overhead line conductors following
//! ENA D(b)5-1988, "Current rating of Bare Overhead Line Conductors"
//! (ESAA, later ENA; withdrawn but still the basis of much Australian
//! distribution practice). The balance at equilibrium is
//!
//! ```text
//! I² r_ac(t_c) + P_solar = P_convective(t_c) + P_radiative(t_c)
//! ```
//!
//! and the crate solves it both ways:
//! - rated current for a maximum conductor temperature (closed form), and
//! - operating temperature for a given current (bisection).
//!
//! The same physics applies to stranded aerial conductors and to rigid
//! tubular busbar in air. A modern equivalent of the withdrawn standard is
//! "TNSP Operational Line Ratings" (2009); the international counterpart is
//! IEEE 738.
//!
//! Catalog CSV ingestion and condition tables are deliberately out of
//! scope: callers construct validated [`ConductorSpec`] and
//! [`AmbientConditions`] values and get back a [`RatingResult`] with the
//! full heat-term breakdown.

// Core types and utilities
pub mod core_types;

// Physical model (heat-balance terms)
pub mod physics;

// Rating solvers (Mode A / Mode B / batch table)
pub mod solver;

// Re-export core types
pub use core_types::{AmbientConditions, Environment, SolarPeriod, SurfaceCondition};
pub use core_types::{CalcResult, RatingError};
pub use core_types::{ConductorSpec, ConductorType, LayerConstruction};

// Re-export solver entry points
pub use solver::{
    compute_operating_temperature, compute_rated_current, rate_catalog, HeatTerms, RatingCondition,
    RatingResult,
};
