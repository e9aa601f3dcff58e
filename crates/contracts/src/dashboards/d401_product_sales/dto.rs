use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for product sales dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSalesResponse {
    /// Units sold by product name
    pub products: BTreeMap<String, u32>,
    /// Sum of order totals
    pub total_sales: f64,
    pub order_count: usize,
    /// Unreadable rows in the order log
    pub skipped: usize,
}
