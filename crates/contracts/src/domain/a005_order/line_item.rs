use crate::domain::a006_ingredient::join_ingredients;
use crate::enums::PizzaSize;
use serde::{Deserialize, Serialize};

/// Принадлежность позиции к акционному набору.
///
/// Все позиции одного набора вместе не могут стоить больше `bundle_price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleTag {
    pub bundle_id: u32,
    pub bundle_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaLine {
    pub pizza: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_half: Option<String>,
    pub size: PizzaSize,
    pub quantity: u32,
    /// Снимок ингредиентов на момент заказа, через запятую
    #[serde(default)]
    pub ingredients: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccompanimentLine {
    pub accompaniment: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<BundleTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionLine {
    pub promotion: String,
    pub description: String,
    pub pizza: String,
    pub size: PizzaSize,
    pub quantity: u32,
    #[serde(default)]
    pub ingredients: String,
    pub price: f64,
    pub bundle: BundleTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPizzaLine {
    pub name: String,
    pub size: PizzaSize,
    pub ingredients: Vec<String>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkLine {
    pub drink: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<BundleTag>,
}

/// Позиция заказа. Дискриминант хранится в поле `kind`.
///
/// `price` всегда итог по строке (уже умножен на количество).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderLineItem {
    Pizza(PizzaLine),
    Accompaniment(AccompanimentLine),
    Promotion(PromotionLine),
    CustomPizza(CustomPizzaLine),
    Drink(DrinkLine),
}

impl OrderLineItem {
    pub fn kind(&self) -> &'static str {
        match self {
            OrderLineItem::Pizza(_) => "pizza",
            OrderLineItem::Accompaniment(_) => "accompaniment",
            OrderLineItem::Promotion(_) => "promotion",
            OrderLineItem::CustomPizza(_) => "custom_pizza",
            OrderLineItem::Drink(_) => "drink",
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            OrderLineItem::Pizza(l) => l.price,
            OrderLineItem::Accompaniment(l) => l.price,
            OrderLineItem::Promotion(l) => l.price,
            OrderLineItem::CustomPizza(l) => l.price,
            OrderLineItem::Drink(l) => l.price,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            OrderLineItem::Pizza(l) => l.quantity,
            OrderLineItem::Accompaniment(l) => l.quantity,
            OrderLineItem::Promotion(l) => l.quantity,
            OrderLineItem::CustomPizza(_) => 1,
            OrderLineItem::Drink(l) => l.quantity,
        }
    }

    pub fn bundle(&self) -> Option<BundleTag> {
        match self {
            OrderLineItem::Pizza(_) | OrderLineItem::CustomPizza(_) => None,
            OrderLineItem::Accompaniment(l) => l.bundle,
            OrderLineItem::Promotion(l) => Some(l.bundle),
            OrderLineItem::Drink(l) => l.bundle,
        }
    }

    /// Позиция добавлена автоматически как часть акции
    pub fn is_bundle_inclusion(&self) -> bool {
        !matches!(self, OrderLineItem::Promotion(_)) && self.bundle().is_some()
    }

    /// Ключ для отчёта по продажам товаров
    pub fn product_key(&self) -> String {
        match self {
            OrderLineItem::Pizza(l) => match &l.second_half {
                Some(second) => format!("{} / {}", l.pizza, second),
                None => l.pizza.clone(),
            },
            OrderLineItem::Accompaniment(l) => l.accompaniment.clone(),
            OrderLineItem::Promotion(l) => l.description.clone(),
            OrderLineItem::CustomPizza(l) => l.name.clone(),
            OrderLineItem::Drink(l) => l.drink.clone(),
        }
    }

    /// Подпись позиции для чека
    pub fn label(&self) -> String {
        match self {
            OrderLineItem::Pizza(l) => match &l.second_half {
                Some(second) => format!(
                    "Pizza mitad {} / mitad {} ({})",
                    l.pizza,
                    second,
                    l.size.display_name()
                ),
                None => format!("Pizza {} ({})", l.pizza, l.size.display_name()),
            },
            OrderLineItem::Accompaniment(l) => l.accompaniment.clone(),
            OrderLineItem::Promotion(l) => format!("{}: {}", l.promotion, l.pizza),
            OrderLineItem::CustomPizza(l) => l.name.clone(),
            OrderLineItem::Drink(l) => l.drink.clone(),
        }
    }

    pub fn size(&self) -> Option<PizzaSize> {
        match self {
            OrderLineItem::Pizza(l) => Some(l.size),
            OrderLineItem::Promotion(l) => Some(l.size),
            OrderLineItem::CustomPizza(l) => Some(l.size),
            OrderLineItem::Accompaniment(_) | OrderLineItem::Drink(_) => None,
        }
    }

    /// Строка ингредиентов для пицц любого вида; None для прочих позиций
    pub fn ingredient_text(&self) -> Option<String> {
        match self {
            OrderLineItem::Pizza(l) => Some(l.ingredients.clone()),
            OrderLineItem::Promotion(l) => Some(l.ingredients.clone()),
            OrderLineItem::CustomPizza(l) => Some(join_ingredients(&l.ingredients)),
            OrderLineItem::Accompaniment(_) | OrderLineItem::Drink(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_serialized_as_tag() {
        let item = OrderLineItem::Accompaniment(AccompanimentLine {
            accompaniment: "Palitos de ajo".into(),
            quantity: 2,
            price: 5000.0,
            bundle: None,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "accompaniment");
        assert_eq!(json["quantity"], 2);
        assert!(json.get("bundle").is_none());

        let back: OrderLineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_product_key_for_half_and_half() {
        let item = OrderLineItem::Pizza(PizzaLine {
            pizza: "Napolitana".into(),
            second_half: Some("Pepperoni".into()),
            size: PizzaSize::Large,
            quantity: 1,
            ingredients: String::new(),
            price: 9000.0,
        });
        assert_eq!(item.product_key(), "Napolitana / Pepperoni");
        assert!(item.label().contains("mitad Pepperoni"));
        assert!(!item.is_bundle_inclusion());
    }

    #[test]
    fn test_custom_pizza_quantity_and_ingredients() {
        let item = OrderLineItem::CustomPizza(CustomPizzaLine {
            name: "Pizza Personalizada (Mediana)".into(),
            size: PizzaSize::Medium,
            ingredients: vec!["Pollo".into(), "Choclo".into()],
            price: 6400.0,
        });
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.ingredient_text().as_deref(), Some("Pollo, Choclo"));
    }
}
