pub mod order_type;
pub mod payment_method;
pub mod pizza_size;

pub use order_type::OrderType;
pub use payment_method::PaymentMethod;
pub use pizza_size::PizzaSize;
