//! Rating solvers and batch catalog rating

pub mod rating;
pub mod table;

pub use rating::{compute_operating_temperature, compute_rated_current, HeatTerms, RatingResult};
pub use table::{rate_catalog, RatingCondition};
