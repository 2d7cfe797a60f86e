pub mod models;

pub use models::{EnergyPrice, EnergyPrices, Fuel};
