//! Physical model: air-film properties and heat-balance terms

pub mod air;
pub mod heat_balance;

pub use heat_balance::{
    convective_loss, forced_convection_loss, natural_convection_loss, radiative_loss,
    resistive_heat, solar_gain,
};
