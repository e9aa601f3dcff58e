pub mod kitchen_ticket;
pub mod receipt;
pub mod service;

pub use kitchen_ticket::render_kitchen_ticket;
pub use receipt::render_customer_receipt;
