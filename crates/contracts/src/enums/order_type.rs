use serde::{Deserialize, Serialize};
use std::fmt;

/// Способ получения заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    DineIn,
    Pickup,
    Delivery,
}

impl OrderType {
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine_in",
            OrderType::Pickup => "pickup",
            OrderType::Delivery => "delivery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::DineIn => "Consumo en local",
            OrderType::Pickup => "Retiro en local",
            OrderType::Delivery => "Delivery",
        }
    }

    pub fn all() -> Vec<OrderType> {
        vec![OrderType::DineIn, OrderType::Pickup, OrderType::Delivery]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "dine_in" => Some(OrderType::DineIn),
            "pickup" => Some(OrderType::Pickup),
            "delivery" => Some(OrderType::Delivery),
            _ => None,
        }
    }

    /// Доставка требует адрес клиента
    pub fn requires_address(&self) -> bool {
        matches!(self, OrderType::Delivery)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
