use chrono::{Datelike, Duration, NaiveDate};
use contracts::dashboards::d400_sales_by_date::{
    DateBucket, Granularity, SalesByDateRequest, SalesByDateResponse,
};
use contracts::domain::a005_order::Order;
use std::collections::BTreeMap;

use crate::domain::a005_order::repository::OrderLog;
use crate::shared::error::PosError;

/// Продажи по периодам из журнала заказов
pub async fn get_sales_by_date(
    log: &dyn OrderLog,
    request: SalesByDateRequest,
) -> Result<SalesByDateResponse, PosError> {
    let load = log.load_all().await?;
    let log_skipped = load.skipped;
    let mut response = group_by_date(&load.into_orders(), request.granularity);
    response.skipped += log_skipped;
    Ok(response)
}

/// Первый день интервала, в который попадает дата
pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        Granularity::Monthly => date.with_day(1).unwrap_or(date),
    }
}

fn bucket_label(start: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily | Granularity::Weekly => start.format("%Y-%m-%d").to_string(),
        Granularity::Monthly => start.format("%Y-%m").to_string(),
    }
}

/// Группировка заказов по дню, неделе (с понедельника) или месяцу.
///
/// Заказы с нечитаемой датой пропускаются и учитываются в `skipped`.
pub fn group_by_date(orders: &[Order], granularity: Granularity) -> SalesByDateResponse {
    let mut groups: BTreeMap<NaiveDate, Vec<Order>> = BTreeMap::new();
    let mut skipped = 0;

    for order in orders {
        match order.created_at.date() {
            Ok(date) => groups
                .entry(bucket_start(date, granularity))
                .or_default()
                .push(order.clone()),
            Err(e) => {
                tracing::warn!("Skipping order with unreadable date: {}", e);
                skipped += 1;
            }
        }
    }

    let buckets: Vec<DateBucket> = groups
        .into_iter()
        .map(|(start, orders)| DateBucket {
            label: bucket_label(start, granularity),
            period_start: start,
            order_count: orders.len(),
            total: orders.iter().map(|o| o.total).sum(),
            orders,
        })
        .collect();
    let grand_total = buckets.iter().map(|b| b.total).sum();

    SalesByDateResponse {
        granularity,
        buckets,
        grand_total,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::test_support::order_at;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2024-03-07 is a Thursday
        assert_eq!(
            bucket_start(date(2024, 3, 7), Granularity::Weekly),
            date(2024, 3, 4)
        );
        assert_eq!(
            bucket_start(date(2024, 3, 4), Granularity::Weekly),
            date(2024, 3, 4)
        );
        assert_eq!(
            bucket_start(date(2024, 3, 10), Granularity::Weekly),
            date(2024, 3, 4)
        );
    }

    #[test]
    fn test_daily_groups_mixed_formats() {
        let orders = vec![
            order_at("2024-03-05T12:00:00-03:00", 5000.0),
            order_at("05-03-2024 20:15:00", 3000.0),
            order_at("06/03/2024, 13:00:00", 4000.0),
        ];
        let response = group_by_date(&orders, Granularity::Daily);
        assert_eq!(response.buckets.len(), 2);
        assert_eq!(response.buckets[0].label, "2024-03-05");
        assert_eq!(response.buckets[0].order_count, 2);
        assert_eq!(response.buckets[0].total, 8000.0);
        assert_eq!(response.grand_total, 12000.0);
        assert_eq!(response.skipped, 0);
    }

    #[test]
    fn test_same_month_in_different_years_stays_apart() {
        let orders = vec![
            order_at("2024-01-15T10:00:00-03:00", 100.0),
            order_at("2023-01-20T10:00:00-03:00", 200.0),
            order_at("2024-01-31T10:00:00-03:00", 300.0),
        ];
        let response = group_by_date(&orders, Granularity::Monthly);
        let labels: Vec<&str> = response.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-01", "2024-01"]);
        assert_eq!(response.buckets[1].total, 400.0);
    }

    #[test]
    fn test_unreadable_dates_are_counted() {
        let orders = vec![
            order_at("mañana", 100.0),
            order_at("2024-02-30", 100.0),
            order_at("2024-02-29", 250.0),
        ];
        let response = group_by_date(&orders, Granularity::Weekly);
        assert_eq!(response.skipped, 2);
        assert_eq!(response.buckets.len(), 1);
        assert_eq!(response.buckets[0].label, "2024-02-26");
    }
}
