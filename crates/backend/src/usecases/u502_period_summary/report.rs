use contracts::dashboards::d400_sales_by_date::Granularity;
use contracts::dashboards::d402_ingredient_usage::YearMonth;
use contracts::domain::a005_order::Order;

use crate::dashboards::d400_sales_by_date::service::group_by_date;
use crate::dashboards::d401_product_sales::service::group_by_product;
use crate::dashboards::d402_ingredient_usage::service::group_by_ingredient;
use crate::shared::config::BusinessConfig;
use crate::shared::format::{center, format_money, format_number, line_with_amount, separator};

/// Сколько товаров и ингредиентов выводить в отчёте
const TOP_ROWS: usize = 10;

/// Заказы месяца. Второе значение: сколько заказов без читаемой даты.
pub fn select_period(orders: &[Order], period: YearMonth) -> (Vec<Order>, usize) {
    let mut selected = Vec::new();
    let mut skipped = 0;
    for order in orders {
        match order.created_at.date() {
            Ok(date) if period.contains(date) => selected.push(order.clone()),
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
    }
    (selected, skipped)
}

/// Сводка продаж за месяц в виде текста фиксированной ширины
pub fn render_period_summary(
    orders: &[Order],
    period: YearMonth,
    business: &BusinessConfig,
    skipped: usize,
) -> String {
    let width = business.receipt_width;
    let by_day = group_by_date(orders, Granularity::Daily);
    let products = group_by_product(orders);
    let ingredients = group_by_ingredient(orders, None);

    let mut lines = vec![
        center(&business.name, width),
        center(&format!("Resumen de ventas {}", period.label()), width),
        separator(width, '='),
        line_with_amount("Pedidos", &format_number(orders.len() as u64), width),
        line_with_amount("Total vendido", &format_money(by_day.grand_total), width),
    ];
    if !orders.is_empty() {
        let average = by_day.grand_total / orders.len() as f64;
        lines.push(line_with_amount("Ticket promedio", &format_money(average), width));
    }
    let unreadable = skipped + by_day.skipped + ingredients.skipped;
    if unreadable > 0 {
        lines.push(format!("Registros omitidos: {}", unreadable));
    }

    lines.push(String::new());
    lines.push("Ventas por día".to_string());
    lines.push(separator(width, '-'));
    for bucket in &by_day.buckets {
        let left = format!(
            "{} ({} ped.)",
            bucket.period_start.format("%d-%m-%Y"),
            bucket.order_count
        );
        lines.push(line_with_amount(&left, &format_money(bucket.total), width));
    }

    lines.push(String::new());
    lines.push("Productos más vendidos".to_string());
    lines.push(separator(width, '-'));
    let mut ranked: Vec<(&String, &u32)> = products.products.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (name, units) in ranked.into_iter().take(TOP_ROWS) {
        lines.push(line_with_amount(name, &units.to_string(), width));
    }

    lines.push(String::new());
    lines.push("Ingredientes".to_string());
    lines.push(separator(width, '-'));
    for row in ingredients.rows.iter().take(TOP_ROWS) {
        lines.push(line_with_amount(&row.ingredient, &row.count.to_string(), width));
    }
    lines.push(separator(width, '='));

    lines.join("\n") + "\n"
}
