use serde::{Deserialize, Serialize};

/// Request for finance dashboard. Expenses are not derivable from orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FinanceRequest {
    #[serde(default)]
    pub expenses: f64,
}

/// Response for finance dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
    /// (income - expenses) / income * 100; None when income is 0
    pub margin_percent: Option<f64>,
    pub order_count: usize,
    /// Order lines that could not be read and are not part of income
    pub skipped: usize,
}
