use contracts::domain::a005_order::{Order, OrderLineItem};

use crate::shared::format::{center, format_order_date, separator};

/// Comanda для кухни: без цен, с размерами, половинками и ингредиентами
pub fn render_kitchen_ticket(order: &Order, number: usize, width: usize) -> String {
    let mut lines = vec![
        center("COCINA", width),
        separator(width, '='),
        format!("Pedido N° {} - {}", number, order.order_type.display_name()),
        format_order_date(&order.created_at),
        format!("Cliente: {}", order.client.display_name()),
        separator(width, '-'),
    ];

    for item in &order.items {
        lines.push(format!("{} x {}", item.quantity(), kitchen_label(item)));
        if let Some(ingredients) = item.ingredient_text().filter(|s| !s.trim().is_empty()) {
            lines.push(format!("    {}", ingredients));
        }
    }
    lines.push(separator(width, '='));

    lines.join("\n") + "\n"
}

fn kitchen_label(item: &OrderLineItem) -> String {
    match item {
        OrderLineItem::Promotion(line) => {
            format!("{} ({})", item.label(), line.size.display_name())
        }
        _ => item.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::promo_order;

    #[test]
    fn test_ticket_has_no_prices() {
        let text = render_kitchen_ticket(&promo_order(), 3, 42);
        assert!(!text.contains('$'));
        assert!(text.contains("Pedido N° 3 - Delivery"));
        assert!(text.contains("1 x Promoción M: Hawaiana (Mediana)"));
        assert!(text.contains("    Jamón, Piña, Orégano"));
        assert!(text.contains("1 x Pizza mitad Margherita / mitad Pepperoni (Mediana)"));
        assert!(text.contains("1 x Bebida 1.5L"));
    }
}
