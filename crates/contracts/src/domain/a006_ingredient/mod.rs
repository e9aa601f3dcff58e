pub mod aggregate;

pub use aggregate::{
    catalog, custom_base_price, join_ingredients, split_ingredients, validate_ingredient_name,
    Ingredient, PriceTier, INGREDIENT_DELIMITER,
};
