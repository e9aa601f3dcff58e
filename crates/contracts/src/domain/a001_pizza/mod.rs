pub mod aggregate;

pub use aggregate::{Pizza, PizzaDto, SizePrices, BASE_INGREDIENTS};
