use contracts::dashboards::d402_ingredient_usage::{
    IngredientUsageRequest, IngredientUsageResponse, IngredientUsageRow, YearMonth,
};
use contracts::domain::a005_order::Order;
use contracts::domain::a006_ingredient::split_ingredients;
use std::collections::HashMap;

use crate::domain::a005_order::repository::OrderLog;
use crate::shared::error::PosError;

pub async fn get_ingredient_usage(
    log: &dyn OrderLog,
    request: IngredientUsageRequest,
) -> Result<IngredientUsageResponse, PosError> {
    let month = parse_period(&request)?;
    let load = log.load_all().await?;
    let log_skipped = load.skipped;
    let mut response = group_by_ingredient(&load.into_orders(), month);
    response.skipped += log_skipped;
    Ok(response)
}

/// Год и месяц задаются вместе или не задаются вовсе
pub fn parse_period(request: &IngredientUsageRequest) -> Result<Option<YearMonth>, PosError> {
    match (request.year, request.month) {
        (None, None) => Ok(None),
        (Some(year), Some(month)) => YearMonth::new(year, month)
            .map(Some)
            .ok_or_else(|| PosError::validation(format!("Mes inválido: {}-{}", year, month))),
        _ => Err(PosError::validation(
            "Indica el año y el mes juntos",
        )),
    }
}

/// Сколько раз использован каждый ингредиент (с учётом количества позиций)
pub fn group_by_ingredient(orders: &[Order], month: Option<YearMonth>) -> IngredientUsageResponse {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut skipped = 0;

    for order in orders {
        if let Some(period) = month {
            match order.created_at.date() {
                Ok(date) if period.contains(date) => {}
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("Skipping order with unreadable date: {}", e);
                    skipped += 1;
                    continue;
                }
            }
        }

        for item in &order.items {
            let Some(raw) = item.ingredient_text() else {
                continue;
            };
            match split_ingredients(&raw) {
                Ok(names) => {
                    for name in names {
                        *counts.entry(name).or_insert(0) += item.quantity();
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping line item: {}", e);
                    skipped += 1;
                }
            }
        }
    }

    let mut rows: Vec<IngredientUsageRow> = counts
        .into_iter()
        .map(|(ingredient, count)| IngredientUsageRow { ingredient, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.ingredient.cmp(&b.ingredient)));

    IngredientUsageResponse {
        period: month.map(|m| m.label()),
        rows,
        skipped,
    }
}
