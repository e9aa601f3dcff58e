use contracts::domain::a005_order::{Order, OrderLineItem};

use crate::shared::config::BusinessConfig;
use crate::shared::format::{
    center, format_money, format_order_date, line_with_amount, separator,
};

/// Чек для клиента: шапка заведения, данные заказа, позиции с ценами, итог
pub fn render_customer_receipt(order: &Order, number: usize, business: &BusinessConfig) -> String {
    let width = business.receipt_width;
    let mut lines = Vec::new();

    lines.push(center(&business.name, width));
    if let Some(address) = &business.address {
        lines.push(center(address, width));
    }
    if let Some(phone) = &business.phone {
        lines.push(center(&format!("Tel: {}", phone), width));
    }
    lines.push(separator(width, '='));

    lines.push(format!("Pedido N° {}", number));
    lines.push(format!("Fecha: {}", format_order_date(&order.created_at)));
    lines.push(format!("Cliente: {}", order.client.display_name()));
    if let (Some(_), Some(phone)) = (&order.client.name, &order.client.phone) {
        lines.push(format!("Teléfono: {}", phone));
    }
    if let Some(address) = &order.client.address {
        lines.push(format!("Dirección: {}", address));
    }
    lines.push(format!("Tipo: {}", order.order_type.display_name()));
    lines.push(format!("Pago: {}", order.payment_method.display_name()));
    lines.push(separator(width, '-'));

    for item in &order.items {
        lines.push(item_line(item, width));
    }

    lines.push(separator(width, '-'));
    lines.push(line_with_amount("TOTAL", &format_money(order.total), width));
    lines.push(separator(width, '='));
    lines.push(center("¡Gracias por su preferencia!", width));

    lines.join("\n") + "\n"
}

fn item_line(item: &OrderLineItem, width: usize) -> String {
    if item.is_bundle_inclusion() {
        return line_with_amount(&format!("  + {}", item.label()), "(incluido)", width);
    }
    line_with_amount(
        &format!("{} x {}", item.quantity(), item.label()),
        &format_money(item.price()),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{business, promo_order};

    #[test]
    fn test_receipt_contents() {
        let text = render_customer_receipt(&promo_order(), 7, &business());

        assert!(text.contains("La Nonna"));
        assert!(text.contains("Pedido N° 7"));
        assert!(text.contains("Fecha: 05-03-2024 19:30"));
        assert!(text.contains("Cliente: Ana"));
        assert!(text.contains("Tipo: Delivery"));
        assert!(text.contains("Pago: Efectivo"));
        assert!(text.contains("  + Palitos de ajo"));
        assert!(text.contains("(incluido)"));
        assert!(text.contains("$8.500"));
        assert!(text.contains("$4.000"));

        let total_line = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
        assert!(total_line.ends_with("$12.500"));
        assert_eq!(total_line.chars().count(), 42);
    }

    #[test]
    fn test_lines_respect_width() {
        let text = render_customer_receipt(&promo_order(), 1, &business());
        for line in text.lines() {
            if line.contains('$') {
                assert!(line.chars().count() <= 42, "too wide: {}", line);
            }
        }
    }
}
