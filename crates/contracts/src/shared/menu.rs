use crate::domain::a001_pizza::Pizza;
use crate::domain::a002_accompaniment::Accompaniment;
use crate::domain::a003_promotion::{self, Promotion};
use crate::domain::a006_ingredient::{self, Ingredient};
use crate::domain::common::same_name;
use serde::{Deserialize, Serialize};

/// Что добавляется в заказ вместе с акцией
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleSettings {
    pub accompaniment: String,
    pub accompaniment_price: f64,
    pub drink: String,
    pub drink_price: f64,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            accompaniment: "Palitos de ajo".into(),
            accompaniment_price: 2500.0,
            drink: "Bebida 1.5L".into(),
            drink_price: 2000.0,
        }
    }
}

/// Снимок меню, с которым работает черновик заказа.
///
/// Собирается один раз при открытии черновика и дальше не меняется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub pizzas: Vec<Pizza>,
    pub accompaniments: Vec<Accompaniment>,
    pub promotions: Vec<Promotion>,
    pub ingredients: Vec<Ingredient>,
    pub bundle: BundleSettings,
}

impl Menu {
    /// Меню с действующими акциями и каталогом ингредиентов
    pub fn new(
        pizzas: Vec<Pizza>,
        accompaniments: Vec<Accompaniment>,
        bundle: BundleSettings,
    ) -> Self {
        Self {
            pizzas,
            accompaniments,
            promotions: a003_promotion::catalog(),
            ingredients: a006_ingredient::catalog(),
            bundle,
        }
    }

    pub fn find_pizza(&self, name: &str) -> Option<&Pizza> {
        self.pizzas.iter().find(|p| p.is_named(name))
    }

    pub fn find_accompaniment(&self, name: &str) -> Option<&Accompaniment> {
        self.accompaniments.iter().find(|a| a.is_named(name))
    }

    pub fn find_promotion(&self, name: &str) -> Option<&Promotion> {
        self.promotions.iter().find(|p| p.is_named(name))
    }

    pub fn find_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| same_name(&i.name, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pizza::SizePrices;

    #[test]
    fn test_lookups_ignore_case() {
        let menu = Menu::new(
            vec![Pizza::new("Margherita", SizePrices::new(4000.0, 8000.0), vec![], None)],
            vec![Accompaniment::new("Papas fritas", 3000.0)],
            BundleSettings::default(),
        );
        assert!(menu.find_pizza("MARGHERITA").is_some());
        assert!(menu.find_accompaniment("papas fritas").is_some());
        assert!(menu.find_promotion("Promoción L").is_some());
        assert!(menu.find_ingredient("camarones").is_some());
        assert!(menu.find_pizza("Calzone").is_none());
    }
}
