pub mod auth;
pub mod energy;
pub mod orders;
pub mod purchase;
