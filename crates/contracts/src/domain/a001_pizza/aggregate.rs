use crate::domain::a006_ingredient::validate_ingredient_name;
use crate::domain::common::same_name;
use crate::enums::PizzaSize;
use serde::{Deserialize, Serialize};

/// Ингредиенты, которые есть в каждой пицце и не хранятся в меню
pub const BASE_INGREDIENTS: [&str; 2] = ["Salsa de tomate", "Queso mozzarella"];

// ============================================================================
// Prices
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePrices {
    pub medium: f64,
    pub large: f64,
}

impl SizePrices {
    pub fn new(medium: f64, large: f64) -> Self {
        Self { medium, large }
    }

    pub fn for_size(&self, size: PizzaSize) -> f64 {
        match size {
            PizzaSize::Medium => self.medium,
            PizzaSize::Large => self.large,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пицца из меню. Название уникально без учёта регистра.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub name: String,
    pub prices: SizePrices,
    /// Ингредиенты сверх базовых (соус и моцарелла), в порядке меню
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Pizza {
    pub fn new(
        name: impl Into<String>,
        prices: SizePrices,
        ingredients: Vec<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            prices,
            ingredients: ingredients
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            image: image
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
        }
    }

    pub fn from_dto(dto: &PizzaDto) -> Self {
        Self::new(
            dto.name.clone(),
            SizePrices::new(dto.medium_price, dto.large_price),
            dto.ingredients.clone(),
            dto.image.clone(),
        )
    }

    pub fn unit_price(&self, size: PizzaSize) -> f64 {
        self.prices.for_size(size)
    }

    /// Цена половины: каждая половина даёт половину своей цены за штуку
    pub fn half_and_half_unit_price(&self, other: &Pizza, size: PizzaSize) -> f64 {
        (self.unit_price(size) + other.unit_price(size)) / 2.0
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre de la pizza no puede estar vacío".into());
        }
        if !(self.prices.medium.is_finite() && self.prices.medium > 0.0) {
            return Err("El precio mediano debe ser mayor que cero".into());
        }
        if !(self.prices.large.is_finite() && self.prices.large > 0.0) {
            return Err("El precio familiar debe ser mayor que cero".into());
        }
        for ingredient in &self.ingredients {
            validate_ingredient_name(ingredient)?;
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PizzaDto {
    pub name: String,
    pub medium_price: f64,
    pub large_price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> Pizza {
        Pizza::new(
            "Margherita",
            SizePrices::new(4000.0, 8000.0),
            vec!["Tomate".into(), "Albahaca".into()],
            None,
        )
    }

    #[test]
    fn test_unit_price_by_size() {
        let pizza = margherita();
        assert_eq!(pizza.unit_price(PizzaSize::Medium), 4000.0);
        assert_eq!(pizza.unit_price(PizzaSize::Large), 8000.0);
    }

    #[test]
    fn test_half_and_half_is_average() {
        let pepperoni = Pizza::new("Pepperoni", SizePrices::new(5000.0, 9000.0), vec![], None);
        assert_eq!(
            margherita().half_and_half_unit_price(&pepperoni, PizzaSize::Medium),
            4500.0
        );
        assert_eq!(
            pepperoni.half_and_half_unit_price(&margherita(), PizzaSize::Large),
            8500.0
        );
    }

    #[test]
    fn test_new_trims_and_drops_blank_values() {
        let pizza = Pizza::new(
            "  Hawaiana ",
            SizePrices::new(1.0, 2.0),
            vec![" Jamón ".into(), "".into(), "Piña".into()],
            Some("   ".into()),
        );
        assert_eq!(pizza.name, "Hawaiana");
        assert_eq!(pizza.ingredients, vec!["Jamón", "Piña"]);
        assert_eq!(pizza.image, None);
        assert!(pizza.is_named("HAWAIANA"));
    }

    #[test]
    fn test_validate() {
        assert!(margherita().validate().is_ok());

        let mut no_name = margherita();
        no_name.name = " ".into();
        assert!(no_name.validate().is_err());

        let mut free = margherita();
        free.prices.large = 0.0;
        assert!(free.validate().is_err());

        let mut bad_ingredient = margherita();
        bad_ingredient.ingredients.push("Jamón, Piña".into());
        assert!(bad_ingredient.validate().is_err());
    }
}
