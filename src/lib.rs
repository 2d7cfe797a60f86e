//! ENSEK Energy-Trading API Verification Library
//!
//! Typed client, response schema validation, and order verification helpers
//! for exercising the ENSEK energy-trading HTTP service.

pub mod client;
pub mod config;
pub mod core;
pub mod modules;
pub mod schema;

// Re-export commonly used types
pub use client::{ApiResponse, EnsekClient};
pub use modules::auth;
pub use modules::energy;
pub use modules::orders;
pub use modules::purchase;
