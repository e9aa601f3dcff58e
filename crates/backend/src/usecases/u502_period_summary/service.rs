use contracts::dashboards::d402_ingredient_usage::YearMonth;

use crate::domain::a005_order::repository::{JsonlOrderRepository, OrderLog};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

use super::{render_period_summary, select_period};

pub async fn period_summary(year: i32, month: u32) -> Result<String, PosError> {
    let period = YearMonth::new(year, month)
        .ok_or_else(|| PosError::validation(format!("Mes inválido: {}-{}", year, month)))?;

    let load = JsonlOrderRepository::from_storage()?.load_all().await?;
    let log_skipped = load.skipped;
    let (orders, undated) = select_period(&load.into_orders(), period);
    tracing::info!(
        "Period summary {}: {} orders ({} undated, {} unreadable)",
        period.label(),
        orders.len(),
        undated,
        log_skipped
    );

    let business = &get_storage()?.business;
    Ok(render_period_summary(
        &orders,
        period,
        business,
        undated + log_skipped,
    ))
}
