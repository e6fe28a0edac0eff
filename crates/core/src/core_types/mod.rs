//! Core types and utilities

pub mod ambient;
pub mod conductor;
pub mod error;
pub mod units;

pub use ambient::{AmbientConditions, Environment, SolarPeriod, SurfaceCondition};
pub use conductor::{ConductorSpec, ConductorType, LayerConstruction};
pub use error::{CalcResult, RatingError};
pub use units::*;
