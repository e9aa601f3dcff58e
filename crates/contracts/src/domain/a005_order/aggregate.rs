use super::line_item::OrderLineItem;
use super::timestamp::OrderTimestamp;
use crate::domain::a004_client::ClientRef;
use crate::enums::{OrderType, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Итог по списку позиций.
///
/// Позиции без акции суммируются как есть. Позиции одного акционного набора
/// суммируются отдельно, и вклад набора ограничен сверху его ценой.
pub fn compute_total(items: &[OrderLineItem]) -> f64 {
    let mut total = 0.0;
    let mut bundles: BTreeMap<u32, (f64, f64)> = BTreeMap::new();

    for item in items {
        match item.bundle() {
            Some(tag) => {
                let entry = bundles.entry(tag.bundle_id).or_insert((0.0, tag.bundle_price));
                entry.0 += item.price();
            }
            None => total += item.price(),
        }
    }

    for (sum, cap) in bundles.values() {
        total += sum.min(*cap);
    }

    total
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Оформленный заказ. После сохранения не изменяется; идентичность:
/// позиция в журнале заказов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub client: ClientRef,
    pub items: Vec<OrderLineItem>,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub created_at: OrderTimestamp,
    pub total: f64,
}

impl Order {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Итог, пересчитанный по позициям (для сверки с сохранённым `total`)
    pub fn recomputed_total(&self) -> f64 {
        compute_total(&self.items)
    }
}
