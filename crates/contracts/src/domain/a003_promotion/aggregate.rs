use crate::domain::a001_pizza::Pizza;
use crate::domain::common::same_name;
use crate::enums::PizzaSize;
use serde::{Deserialize, Serialize};

// ============================================================================
// Eligibility rule
// ============================================================================

/// Условие на количество ингредиентов пиццы, участвующей в акции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum IngredientRule {
    Exactly(usize),
    AtMost(usize),
    AtLeast(usize),
}

impl IngredientRule {
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        match *self {
            IngredientRule::Exactly(n) => count == n,
            IngredientRule::AtMost(n) => count <= n,
            IngredientRule::AtLeast(n) => count >= n,
        }
    }

    /// Максимум ингредиентов, который можно выбрать под эту акцию
    pub fn cap(&self) -> Option<usize> {
        match *self {
            IngredientRule::Exactly(n) | IngredientRule::AtMost(n) => Some(n),
            IngredientRule::AtLeast(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            IngredientRule::Exactly(n) => format!("exactamente {} ingredientes", n),
            IngredientRule::AtMost(n) => format!("como máximo {} ingredientes", n),
            IngredientRule::AtLeast(n) => format!("al menos {} ingredientes", n),
        }
    }
}

// ============================================================================
// Promotion
// ============================================================================

/// Акция: фиксированная цена за пиццу, напиток и гарнир
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub size: PizzaSize,
    pub includes_pizza: bool,
    pub includes_drink: bool,
    pub includes_accompaniment: bool,
    pub ingredient_rule: IngredientRule,
}

impl Promotion {
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// Проверка, что пицца подходит под акцию
    pub fn check_pizza(&self, pizza: &Pizza) -> Result<(), String> {
        let count = pizza.ingredient_count();
        if self.ingredient_rule.is_satisfied_by(count) {
            Ok(())
        } else {
            Err(format!(
                "La {} requiere una pizza con {}; '{}' tiene {}",
                self.name,
                self.ingredient_rule.describe(),
                pizza.name,
                count
            ))
        }
    }
}

/// Действующие акции (статическая конфигурация)
pub fn catalog() -> Vec<Promotion> {
    vec![
        Promotion {
            name: "Promoción M".into(),
            description: "Incluye 1 pizza mediana, 1 bebida y palitos de ajo".into(),
            price: 8500.0,
            size: PizzaSize::Medium,
            includes_pizza: true,
            includes_drink: true,
            includes_accompaniment: true,
            ingredient_rule: IngredientRule::Exactly(3),
        },
        Promotion {
            name: "Promoción L".into(),
            description: "Incluye 1 pizza familiar, 1 bebida y palitos de ajo".into(),
            price: 12000.0,
            size: PizzaSize::Large,
            includes_pizza: true,
            includes_drink: true,
            includes_accompaniment: true,
            ingredient_rule: IngredientRule::Exactly(3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pizza::SizePrices;

    fn pizza_with(count: usize) -> Pizza {
        let ingredients = (0..count).map(|i| format!("Ingrediente {}", i)).collect();
        Pizza::new("Test", SizePrices::new(1000.0, 2000.0), ingredients, None)
    }

    #[test]
    fn test_rules() {
        assert!(IngredientRule::Exactly(3).is_satisfied_by(3));
        assert!(!IngredientRule::Exactly(3).is_satisfied_by(2));
        assert!(IngredientRule::AtMost(3).is_satisfied_by(0));
        assert!(!IngredientRule::AtMost(3).is_satisfied_by(4));
        assert!(IngredientRule::AtLeast(2).is_satisfied_by(5));
        assert_eq!(IngredientRule::AtLeast(2).cap(), None);
        assert_eq!(IngredientRule::Exactly(3).cap(), Some(3));
    }

    #[test]
    fn test_catalog_promotions_check_pizza() {
        let promotions = catalog();
        let promo_m = promotions.iter().find(|p| p.is_named("promoción m")).unwrap();
        assert_eq!(promo_m.price, 8500.0);
        assert_eq!(promo_m.size, PizzaSize::Medium);
        assert!(promo_m.check_pizza(&pizza_with(3)).is_ok());
        assert!(promo_m.check_pizza(&pizza_with(2)).is_err());
        assert!(promo_m.check_pizza(&pizza_with(4)).is_err());
    }

    #[test]
    fn test_rule_serde_shape() {
        let json = serde_json::to_value(IngredientRule::AtMost(3)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "at_most", "count": 3}));
    }
}
