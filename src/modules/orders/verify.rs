use crate::client::EnsekClient;
use crate::core::{AppError, Result};

use super::models::Order;

/// Check that a just-purchased order was persisted with the expected fields.
///
/// Fetches the complete order collection and requires exactly one order whose
/// identifier equals `order_id` (matching either spelling of the id field),
/// with the expected fuel name and quantity. Zero matches, duplicate matches,
/// or a field mismatch all fail verification.
///
/// The write is assumed immediately visible to this read; there is no retry.
pub async fn verify_new_order(
    client: &EnsekClient,
    order_id: &str,
    fuel_name: &str,
    quantity: u64,
) -> Result<()> {
    let orders = client.orders_typed().await?;

    let matching: Vec<&Order> = orders.iter().filter(|order| order.id == order_id).collect();
    let order = match matching.as_slice() {
        [order] => *order,
        [] => {
            return Err(AppError::Verification(format!(
                "no order with id {} found among {} orders",
                order_id,
                orders.len()
            )))
        }
        several => {
            return Err(AppError::Verification(format!(
                "{} orders share id {}",
                several.len(),
                order_id
            )))
        }
    };

    if order.fuel != fuel_name {
        return Err(AppError::Verification(format!(
            "order {} has fuel {:?}, expected {:?}",
            order_id, order.fuel, fuel_name
        )));
    }

    if order.quantity != quantity {
        return Err(AppError::Verification(format!(
            "order {} has quantity {}, expected {}",
            order_id, order.quantity, quantity
        )));
    }

    tracing::debug!(order_id, fuel = fuel_name, quantity, "new order verified");
    Ok(())
}
