use super::aggregate::Order;
use super::line_item::OrderLineItem;
use crate::domain::a004_client::ClientRef;
use crate::enums::{OrderType, PaymentMethod, PizzaSize};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Выбор пиццы: целая, пополам или по акции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaSelection {
    pub pizza: String,
    pub size: PizzaSize,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub second_half: Option<String>,
    #[serde(default)]
    pub promotion: Option<String>,
}

impl PizzaSelection {
    pub fn whole(pizza: impl Into<String>, size: PizzaSize, quantity: u32) -> Self {
        Self {
            pizza: pizza.into(),
            size,
            quantity,
            second_half: None,
            promotion: None,
        }
    }

    pub fn half_and_half(
        first: impl Into<String>,
        second: impl Into<String>,
        size: PizzaSize,
        quantity: u32,
    ) -> Self {
        Self {
            second_half: Some(second.into()),
            ..Self::whole(first, size, quantity)
        }
    }

    pub fn promotion(pizza: impl Into<String>, promotion: impl Into<String>) -> Self {
        Self {
            promotion: Some(promotion.into()),
            ..Self::whole(pizza, PizzaSize::Medium, 1)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccompanimentSelection {
    pub accompaniment: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPizzaSelection {
    pub size: PizzaSize,
    pub ingredients: Vec<String>,
    /// Ограничение числа ингредиентов (например, при сборке под акцию)
    #[serde(default)]
    pub ingredient_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub client: ClientRef,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftCreated {
    pub draft_id: Uuid,
}

/// Текущее состояние черновика заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftView {
    pub draft_id: Uuid,
    pub items: Vec<OrderLineItem>,
    pub total: f64,
}

/// Результат оформления: номер заказа в журнале и сам заказ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedOrder {
    pub number: usize,
    pub order: Order,
}

fn default_quantity() -> u32 {
    1
}
