use contracts::dashboards::d401_product_sales::ProductSalesResponse;
use contracts::domain::a005_order::Order;
use std::collections::BTreeMap;

use crate::domain::a005_order::repository::OrderLog;
use crate::shared::error::PosError;

pub async fn get_product_sales(log: &dyn OrderLog) -> Result<ProductSalesResponse, PosError> {
    let load = log.load_all().await?;
    let skipped = load.skipped;
    let mut response = group_by_product(&load.into_orders());
    response.skipped = skipped;
    Ok(response)
}

/// Количество проданных единиц по названию товара.
///
/// Пицца пополам учитывается как «A / B», акция по своему описанию.
pub fn group_by_product(orders: &[Order]) -> ProductSalesResponse {
    let mut products: BTreeMap<String, u32> = BTreeMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        *products.entry(item.product_key()).or_insert(0) += item.quantity();
    }

    ProductSalesResponse {
        products,
        total_sales: orders.iter().map(|o| o.total).sum(),
        order_count: orders.len(),
        skipped: 0,
    }
}
