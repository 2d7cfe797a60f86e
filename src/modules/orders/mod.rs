pub mod models;
pub mod verify;

pub use models::{count_orders_before, Order, OrderUpdate};
pub use verify::verify_new_order;
