pub mod aggregate;

pub use aggregate::{catalog, IngredientRule, Promotion};
