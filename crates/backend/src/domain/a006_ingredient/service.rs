use contracts::domain::a006_ingredient::aggregate::{catalog, custom_base_price, Ingredient};
use contracts::enums::PizzaSize;
use serde::Serialize;

/// Каталог для формы «пицца по вкусу»
#[derive(Debug, Clone, Serialize)]
pub struct IngredientCatalog {
    pub base_medium: f64,
    pub base_large: f64,
    pub ingredients: Vec<Ingredient>,
}

pub fn get_catalog() -> IngredientCatalog {
    IngredientCatalog {
        base_medium: custom_base_price(PizzaSize::Medium),
        base_large: custom_base_price(PizzaSize::Large),
        ingredients: catalog(),
    }
}
