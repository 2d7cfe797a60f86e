use serde::Deserialize;

/// Body of a PUT /ENSEK/buy response, both for successful purchases and for
/// rejections (e.g. nuclear fuel being unavailable).
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseReceipt {
    pub message: String,
}
