use contracts::dashboards::d403_finance::{FinanceRequest, FinanceSummary};
use contracts::domain::a005_order::Order;

use crate::domain::a005_order::repository::OrderLog;
use crate::shared::error::PosError;

pub async fn get_finance_summary(
    log: &dyn OrderLog,
    request: FinanceRequest,
) -> Result<FinanceSummary, PosError> {
    if !(request.expenses.is_finite() && request.expenses >= 0.0) {
        return Err(PosError::validation("Los gastos deben ser un número positivo"));
    }
    let load = log.load_all().await?;
    let skipped = load.skipped;
    let orders = load.into_orders();
    Ok(FinanceSummary {
        skipped,
        ..compute_financials(&orders, request.expenses)
    })
}

/// Доход, прибыль и маржа. Маржа не определена при нулевом доходе.
pub fn compute_financials(orders: &[Order], expenses: f64) -> FinanceSummary {
    let income: f64 = orders.iter().map(|o| o.total).sum();
    let profit = income - expenses;
    let margin_percent = if income > 0.0 {
        Some(profit / income * 100.0)
    } else {
        None
    };

    FinanceSummary {
        income,
        expenses,
        profit,
        margin_percent,
        order_count: orders.len(),
        skipped: 0,
    }
}
