use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A persisted order as served by GET /ENSEK/orders.
///
/// The remote schema is inconsistent about the casing of the identifier
/// field; both `id` and `Id` spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(alias = "Id")]
    pub id: String,
    pub fuel: String,
    pub quantity: u64,
    pub time: String,
}

impl Order {
    /// Creation timestamp, parsed from the RFC 2822 form the API serves
    /// (e.g. `"Thu, 10 Mar 2022 12:41:00 GMT"`).
    pub fn created_at(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(&self.time)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|err| {
                AppError::Verification(format!(
                    "order {} has unparseable time {:?}: {}",
                    self.id, self.time, err
                ))
            })
    }
}

/// Request body for PUT /ENSEK/orders/{guid}
#[derive(Debug, Clone, Serialize)]
pub struct OrderUpdate {
    pub id: String,
    pub quantity: u64,
    pub energy_id: u32,
}

/// Count the orders created strictly before `cutoff`.
///
/// Orders whose timestamp fails to parse are excluded from the count.
pub fn count_orders_before(orders: &[Order], cutoff: DateTime<Utc>) -> usize {
    orders
        .iter()
        .filter(|order| matches!(order.created_at(), Ok(time) if time < cutoff))
        .count()
}
