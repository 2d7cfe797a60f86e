use jsonschema::JSONSchema;
use serde_json::Value;

use crate::core::{AppError, Result};

const ENERGY_SCHEMA: &str = include_str!("../../schemas/energy.schema.json");
const ORDERS_SCHEMA: &str = include_str!("../../schemas/orders.schema.json");

/// Compiled JSON Schemas for the two read endpoints.
///
/// The schema documents live under `schemas/` and are embedded at compile
/// time, so validation never depends on the working directory.
pub struct ResponseSchemas {
    energy: JSONSchema,
    orders: JSONSchema,
}

impl ResponseSchemas {
    pub fn load() -> Result<Self> {
        Ok(Self {
            energy: compile(ENERGY_SCHEMA)?,
            orders: compile(ORDERS_SCHEMA)?,
        })
    }

    /// Validate a GET /ENSEK/energy response body
    pub fn validate_energy(&self, body: &Value) -> Result<()> {
        validate(&self.energy, body, "/ENSEK/energy")
    }

    /// Validate a GET /ENSEK/orders response body
    pub fn validate_orders(&self, body: &Value) -> Result<()> {
        validate(&self.orders, body, "/ENSEK/orders")
    }
}

fn compile(raw: &str) -> Result<JSONSchema> {
    let document: Value = serde_json::from_str(raw)?;
    JSONSchema::compile(&document)
        .map_err(|err| AppError::Schema(format!("invalid schema document: {err}")))
}

fn validate(schema: &JSONSchema, body: &Value, endpoint: &str) -> Result<()> {
    if let Err(errors) = schema.validate(body) {
        let mut details = Vec::new();
        for error in errors {
            tracing::error!(
                endpoint,
                instance_path = %error.instance_path,
                "schema violation: {error}"
            );
            details.push(error.to_string());
        }
        return Err(AppError::Schema(format!(
            "{endpoint} response failed schema validation: {}",
            details.join("; ")
        )));
    }
    Ok(())
}
