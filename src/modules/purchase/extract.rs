use super::models::PurchaseReceipt;

/// Recover the order identifier embedded in a purchase confirmation.
///
/// The purchase endpoint reports the new order only inside a human-readable
/// sentence. The identifier is the last whitespace-delimited token of the
/// message with every `.` character removed:
///
/// ```
/// use ensek_verify::purchase::{extract_order_id, PurchaseReceipt};
///
/// let receipt = PurchaseReceipt {
///     message: "Purchase successful! Your order id is 080d9823-e874-4b5b-99ff-2021f2a59b24."
///         .to_string(),
/// };
/// assert_eq!(
///     extract_order_id(&receipt),
///     "080d9823-e874-4b5b-99ff-2021f2a59b24"
/// );
/// ```
///
/// The token is not validated as a GUID: if the remote message format changes,
/// the caller gets whatever the last token happens to be, and an empty message
/// yields an empty string. Downstream verification against the order
/// collection is what catches a bad extraction.
pub fn extract_order_id(receipt: &PurchaseReceipt) -> String {
    receipt
        .message
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .replace('.', "")
}
