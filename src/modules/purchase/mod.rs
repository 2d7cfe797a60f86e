pub mod extract;
pub mod models;

pub use extract::extract_order_id;
pub use models::PurchaseReceipt;
