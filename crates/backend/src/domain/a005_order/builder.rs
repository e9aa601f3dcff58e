use contracts::domain::a001_pizza::Pizza;
use contracts::domain::a003_promotion::Promotion;
use contracts::domain::a004_client::ClientRef;
use contracts::domain::a005_order::{
    compute_total, AccompanimentLine, AccompanimentSelection, BundleTag, CustomPizzaLine,
    CustomPizzaSelection, DraftView, DrinkLine, Order, OrderLineItem, OrderTimestamp, PizzaLine,
    PizzaSelection, PromotionLine,
};
use contracts::domain::a006_ingredient::{custom_base_price, join_ingredients};
use contracts::domain::common::normalize_name;
use contracts::enums::{OrderType, PaymentMethod};
use contracts::shared::menu::Menu;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::error::PosError;

/// Черновик заказа одной сессии ввода.
///
/// Меню передаётся снимком при создании. Любая отклонённая операция
/// оставляет черновик без изменений.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    menu: Arc<Menu>,
    items: Vec<OrderLineItem>,
    total: f64,
    next_bundle_id: u32,
}

impl OrderBuilder {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            menu,
            items: Vec::new(),
            total: 0.0,
            next_bundle_id: 1,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view(&self, draft_id: Uuid) -> DraftView {
        DraftView {
            draft_id,
            items: self.items.clone(),
            total: self.total,
        }
    }

    // ========================================================================
    // Pizzas
    // ========================================================================

    /// Добавить пиццу: целую, пополам или по акции.
    ///
    /// Возвращает добавленные позиции (акция добавляет ещё гарнир и напиток).
    pub fn add_pizza(
        &mut self,
        selection: &PizzaSelection,
    ) -> Result<Vec<OrderLineItem>, PosError> {
        let added = match &selection.promotion {
            Some(promotion) => self.promotion_lines(selection, promotion)?,
            None => vec![self.pizza_line(selection)?],
        };

        if selection.promotion.is_some() {
            self.next_bundle_id += 1;
        }
        self.items.extend(added.iter().cloned());
        self.recompute();
        Ok(added)
    }

    fn find_pizza(&self, name: &str) -> Result<&Pizza, PosError> {
        self.menu
            .find_pizza(name)
            .ok_or_else(|| PosError::not_found(format!("pizza '{}'", name.trim())))
    }

    fn pizza_line(&self, selection: &PizzaSelection) -> Result<OrderLineItem, PosError> {
        ensure_quantity(selection.quantity)?;
        let first = self.find_pizza(&selection.pizza)?;
        let quantity = f64::from(selection.quantity);

        let line = match &selection.second_half {
            Some(second_name) => {
                let second = self.find_pizza(second_name)?;
                let mut ingredients = first.ingredients.clone();
                ingredients.extend(second.ingredients.iter().cloned());
                PizzaLine {
                    pizza: first.name.clone(),
                    second_half: Some(second.name.clone()),
                    size: selection.size,
                    quantity: selection.quantity,
                    ingredients: join_ingredients(&ingredients),
                    price: first.half_and_half_unit_price(second, selection.size) * quantity,
                }
            }
            None => PizzaLine {
                pizza: first.name.clone(),
                second_half: None,
                size: selection.size,
                quantity: selection.quantity,
                ingredients: join_ingredients(&first.ingredients),
                price: first.unit_price(selection.size) * quantity,
            },
        };
        Ok(OrderLineItem::Pizza(line))
    }

    fn promotion_lines(
        &self,
        selection: &PizzaSelection,
        promotion_name: &str,
    ) -> Result<Vec<OrderLineItem>, PosError> {
        let promotion: &Promotion = self
            .menu
            .find_promotion(promotion_name)
            .ok_or_else(|| PosError::not_found(format!("promoción '{}'", promotion_name.trim())))?;
        if selection.second_half.is_some() {
            return Err(PosError::validation(format!(
                "La {} no admite pizzas mitad y mitad",
                promotion.name
            )));
        }
        let pizza = self.find_pizza(&selection.pizza)?;
        promotion.check_pizza(pizza).map_err(PosError::Validation)?;
        if selection.quantity != 1 {
            return Err(PosError::validation(format!(
                "La {} se agrega de a una unidad",
                promotion.name
            )));
        }

        let bundle = BundleTag {
            bundle_id: self.next_bundle_id,
            bundle_price: promotion.price,
        };
        let settings = &self.menu.bundle;

        let mut lines = vec![OrderLineItem::Promotion(PromotionLine {
            promotion: promotion.name.clone(),
            description: format!("{} - {}", promotion.name, pizza.name),
            pizza: pizza.name.clone(),
            size: promotion.size,
            quantity: 1,
            ingredients: join_ingredients(&pizza.ingredients),
            price: promotion.price,
            bundle,
        })];
        if promotion.includes_accompaniment {
            lines.push(OrderLineItem::Accompaniment(AccompanimentLine {
                accompaniment: settings.accompaniment.clone(),
                quantity: 1,
                price: settings.accompaniment_price,
                bundle: Some(bundle),
            }));
        }
        if promotion.includes_drink {
            lines.push(OrderLineItem::Drink(DrinkLine {
                drink: settings.drink.clone(),
                quantity: 1,
                price: settings.drink_price,
                bundle: Some(bundle),
            }));
        }
        Ok(lines)
    }

    // ========================================================================
    // Accompaniments
    // ========================================================================

    pub fn add_accompaniment(
        &mut self,
        selection: &AccompanimentSelection,
    ) -> Result<OrderLineItem, PosError> {
        ensure_quantity(selection.quantity)?;
        let accompaniment = self
            .menu
            .find_accompaniment(&selection.accompaniment)
            .ok_or_else(|| {
                PosError::not_found(format!(
                    "acompañamiento '{}'",
                    selection.accompaniment.trim()
                ))
            })?;

        let item = OrderLineItem::Accompaniment(AccompanimentLine {
            accompaniment: accompaniment.name.clone(),
            quantity: selection.quantity,
            price: accompaniment.price * f64::from(selection.quantity),
            bundle: None,
        });
        self.items.push(item.clone());
        self.recompute();
        Ok(item)
    }

    // ========================================================================
    // Custom pizza
    // ========================================================================

    /// Пицца по вкусу: базовая цена по размеру плюс надбавка за каждый ингредиент
    pub fn add_custom_pizza(
        &mut self,
        selection: &CustomPizzaSelection,
    ) -> Result<OrderLineItem, PosError> {
        if selection.ingredients.is_empty() {
            return Err(PosError::validation(
                "Selecciona al menos un ingrediente",
            ));
        }
        if let Some(limit) = selection.ingredient_limit {
            if selection.ingredients.len() > limit {
                return Err(PosError::validation(format!(
                    "Puedes elegir como máximo {} ingredientes",
                    limit
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(selection.ingredients.len());
        let mut price = custom_base_price(selection.size);
        for requested in &selection.ingredients {
            let ingredient = self.menu.find_ingredient(requested).ok_or_else(|| {
                PosError::not_found(format!("ingrediente '{}'", requested.trim()))
            })?;
            if !seen.insert(normalize_name(&ingredient.name)) {
                return Err(PosError::validation(format!(
                    "El ingrediente '{}' ya fue seleccionado",
                    ingredient.name
                )));
            }
            price += ingredient.surcharge();
            names.push(ingredient.name.clone());
        }

        let item = OrderLineItem::CustomPizza(CustomPizzaLine {
            name: format!("Pizza Personalizada ({})", selection.size.display_name()),
            size: selection.size,
            ingredients: names,
            price,
        });
        self.items.push(item.clone());
        self.recompute();
        Ok(item)
    }

    // ========================================================================
    // Removal, total, submission
    // ========================================================================

    /// Удалить ровно одну позицию; итог пересчитывается по оставшимся
    pub fn remove_line_item(&mut self, index: usize) -> Result<OrderLineItem, PosError> {
        if index >= self.items.len() {
            return Err(PosError::validation(format!(
                "La posición {} no existe en el pedido ({} ítems)",
                index,
                self.items.len()
            )));
        }
        let removed = self.items.remove(index);
        self.recompute();
        Ok(removed)
    }

    pub fn compute_total(&self) -> f64 {
        compute_total(&self.items)
    }

    /// Оформить заказ. При успехе черновик очищается.
    pub fn submit(
        &mut self,
        client: ClientRef,
        order_type: OrderType,
        payment_method: PaymentMethod,
    ) -> Result<Order, PosError> {
        if self.items.is_empty() {
            return Err(PosError::validation("El pedido está vacío"));
        }
        let client = client.normalized();
        if client.is_empty() {
            return Err(PosError::validation(
                "Ingresa el nombre o el teléfono del cliente",
            ));
        }
        if order_type.requires_address() && !client.has_address() {
            return Err(PosError::validation(
                "Los pedidos a domicilio requieren una dirección",
            ));
        }

        let items = std::mem::take(&mut self.items);
        let total = compute_total(&items);
        self.total = 0.0;
        self.next_bundle_id = 1;

        Ok(Order {
            client,
            items,
            order_type,
            payment_method,
            created_at: OrderTimestamp::now(),
            total,
        })
    }

    fn recompute(&mut self) {
        self.total = compute_total(&self.items);
    }
}

fn ensure_quantity(quantity: u32) -> Result<(), PosError> {
    if quantity < 1 {
        return Err(PosError::validation("La cantidad debe ser al menos 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pizza::SizePrices;
    use contracts::domain::a002_accompaniment::Accompaniment;
    use contracts::enums::PizzaSize;
    use contracts::shared::menu::BundleSettings;

    fn pizza(name: &str, medium: f64, large: f64, ingredients: &[&str]) -> Pizza {
        Pizza::new(
            name,
            SizePrices::new(medium, large),
            ingredients.iter().map(|s| s.to_string()).collect(),
            None,
        )
    }

    fn menu() -> Arc<Menu> {
        Arc::new(Menu::new(
            vec![
                pizza("Margherita", 4000.0, 7500.0, &["Albahaca"]),
                pizza("Pepperoni", 5000.0, 9000.0, &["Pepperoni"]),
                pizza("Hawaiana", 5500.0, 9500.0, &["Jamón", "Piña", "Orégano"]),
            ],
            vec![
                Accompaniment::new("Palitos de ajo", 2500.0),
                Accompaniment::new("Papas fritas", 3000.0),
            ],
            BundleSettings::default(),
        ))
    }

    fn builder() -> OrderBuilder {
        OrderBuilder::new(menu())
    }

    #[test]
    fn test_whole_pizza_price_is_extended() {
        let mut b = builder();
        let added = b
            .add_pizza(&PizzaSelection::whole("margherita", PizzaSize::Medium, 2))
            .unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].price(), 8000.0);
        assert_eq!(added[0].product_key(), "Margherita");
        assert_eq!(b.total(), 8000.0);
    }

    #[test]
    fn test_half_and_half_averages_unit_prices() {
        let mut b = builder();
        b.add_pizza(&PizzaSelection::half_and_half(
            "Margherita",
            "Pepperoni",
            PizzaSize::Large,
            1,
        ))
        .unwrap();
        assert_eq!(b.total(), (7500.0 + 9000.0) / 2.0);
        assert_eq!(b.items()[0].product_key(), "Margherita / Pepperoni");
        assert_eq!(
            b.items()[0].ingredient_text().unwrap(),
            "Albahaca, Pepperoni"
        );
    }

    #[test]
    fn test_unknown_pizza_is_not_found_and_state_unchanged() {
        let mut b = builder();
        b.add_pizza(&PizzaSelection::whole("Pepperoni", PizzaSize::Medium, 1))
            .unwrap();
        let err = b
            .add_pizza(&PizzaSelection::whole("Cuatro Quesos", PizzaSize::Medium, 1))
            .unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
        let err = b
            .add_pizza(&PizzaSelection::half_and_half(
                "Pepperoni",
                "Cuatro Quesos",
                PizzaSize::Medium,
                1,
            ))
            .unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
        assert_eq!(b.items().len(), 1);
        assert_eq!(b.total(), 5000.0);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut b = builder();
        let err = b
            .add_pizza(&PizzaSelection::whole("Pepperoni", PizzaSize::Medium, 0))
            .unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));
        let err = b
            .add_accompaniment(&AccompanimentSelection {
                accompaniment: "Papas fritas".into(),
                quantity: 0,
            })
            .unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));
        assert!(b.is_empty());
    }

    #[test]
    fn test_valid_promotion_adds_bundle_at_fixed_price() {
        let mut b = builder();
        let added = b
            .add_pizza(&PizzaSelection::promotion("Hawaiana", "Promoción M"))
            .unwrap();

        assert_eq!(added.len(), 3);
        assert_eq!(b.items().len(), 3);
        assert_eq!(b.total(), 8500.0);
        assert_eq!(b.items()[0].kind(), "promotion");
        assert_eq!(b.items()[0].size(), Some(PizzaSize::Medium));
        assert!(b.items()[1].is_bundle_inclusion());
        assert_eq!(b.items()[2].kind(), "drink");
    }

    #[test]
    fn test_promotion_uses_its_own_size() {
        let mut b = builder();
        let mut selection = PizzaSelection::promotion("Hawaiana", "Promoción L");
        selection.size = PizzaSize::Medium;
        b.add_pizza(&selection).unwrap();
        assert_eq!(b.items()[0].size(), Some(PizzaSize::Large));
        assert_eq!(b.total(), 12000.0);
    }

    #[test]
    fn test_promotion_rejects_second_half() {
        let mut b = builder();
        let mut selection = PizzaSelection::promotion("Hawaiana", "Promoción M");
        selection.second_half = Some("Pepperoni".into());

        let err = b.add_pizza(&selection).unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));
        assert!(b.is_empty());
        assert_eq!(b.total(), 0.0);
    }

    #[test]
    fn test_ineligible_promotion_leaves_state_unchanged() {
        let mut b = builder();
        b.add_accompaniment(&AccompanimentSelection {
            accompaniment: "Papas fritas".into(),
            quantity: 1,
        })
        .unwrap();

        let err = b
            .add_pizza(&PizzaSelection::promotion("Pepperoni", "Promoción M"))
            .unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));

        let err = b
            .add_pizza(&PizzaSelection::promotion("Hawaiana", "Promoción XL"))
            .unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));

        let mut twice = PizzaSelection::promotion("Hawaiana", "Promoción M");
        twice.quantity = 2;
        assert!(matches!(
            b.add_pizza(&twice).unwrap_err(),
            PosError::Validation(_)
        ));

        assert_eq!(b.items().len(), 1);
        assert_eq!(b.total(), 3000.0);
    }

    #[test]
    fn test_two_promotions_are_separate_bundles() {
        let mut b = builder();
        b.add_pizza(&PizzaSelection::promotion("Hawaiana", "Promoción M"))
            .unwrap();
        b.add_pizza(&PizzaSelection::promotion("Hawaiana", "Promoción L"))
            .unwrap();
        assert_eq!(b.items().len(), 6);
        assert_eq!(b.total(), 8500.0 + 12000.0);
        assert_ne!(b.items()[0].bundle(), b.items()[3].bundle());
    }

    #[test]
    fn test_accompaniment_price_and_unknown_name() {
        let mut b = builder();
        let item = b
            .add_accompaniment(&AccompanimentSelection {
                accompaniment: "PAPAS FRITAS".into(),
                quantity: 3,
            })
            .unwrap();
        assert_eq!(item.price(), 9000.0);
        assert_eq!(item.product_key(), "Papas fritas");

        let err = b
            .add_accompaniment(&AccompanimentSelection {
                accompaniment: "Empanadas".into(),
                quantity: 1,
            })
            .unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
        assert_eq!(b.total(), 9000.0);
    }

    #[test]
    fn test_custom_pizza_price_by_tiers() {
        let mut b = builder();
        let menu = b.menu().clone();
        let picks: Vec<String> = menu
            .ingredients
            .iter()
            .take(2)
            .map(|i| i.name.clone())
            .collect();
        let expected = custom_base_price(PizzaSize::Large)
            + menu.ingredients[0].surcharge()
            + menu.ingredients[1].surcharge();

        let item = b
            .add_custom_pizza(&CustomPizzaSelection {
                size: PizzaSize::Large,
                ingredients: picks,
                ingredient_limit: None,
            })
            .unwrap();
        assert_eq!(item.price(), expected);
        assert_eq!(item.product_key(), "Pizza Personalizada (Familiar)");
        assert_eq!(b.total(), expected);
    }

    #[test]
    fn test_custom_pizza_rejections() {
        let mut b = builder();
        let first = b.menu().ingredients[0].name.clone();
        let second = b.menu().ingredients[1].name.clone();

        let cases = vec![
            CustomPizzaSelection {
                size: PizzaSize::Medium,
                ingredients: vec![],
                ingredient_limit: None,
            },
            CustomPizzaSelection {
                size: PizzaSize::Medium,
                ingredients: vec![first.clone(), first.to_uppercase()],
                ingredient_limit: None,
            },
            CustomPizzaSelection {
                size: PizzaSize::Medium,
                ingredients: vec![first.clone(), second],
                ingredient_limit: Some(1),
            },
        ];
        for case in &cases {
            assert!(matches!(
                b.add_custom_pizza(case).unwrap_err(),
                PosError::Validation(_)
            ));
        }

        let unknown = CustomPizzaSelection {
            size: PizzaSize::Medium,
            ingredients: vec!["Caviar".into()],
            ingredient_limit: None,
        };
        assert!(matches!(
            b.add_custom_pizza(&unknown).unwrap_err(),
            PosError::NotFound(_)
        ));
        assert!(b.is_empty());
    }

    #[test]
    fn test_remove_recomputes_without_drift() {
        let mut b = builder();
        b.add_pizza(&PizzaSelection::whole("Margherita", PizzaSize::Medium, 2))
            .unwrap();
        b.add_accompaniment(&AccompanimentSelection {
            accompaniment: "Papas fritas".into(),
            quantity: 1,
        })
        .unwrap();
        b.add_pizza(&PizzaSelection::whole("Pepperoni", PizzaSize::Large, 1))
            .unwrap();
        assert_eq!(b.total(), 8000.0 + 3000.0 + 9000.0);

        let removed = b.remove_line_item(1).unwrap();
        assert_eq!(removed.product_key(), "Papas fritas");
        assert_eq!(b.items().len(), 2);
        assert_eq!(b.total(), 17000.0);
        assert_eq!(b.total(), b.compute_total());

        let err = b.remove_line_item(5).unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));
        assert_eq!(b.items().len(), 2);
    }

    #[test]
    fn test_submit_freezes_and_clears_draft() {
        let mut b = builder();
        b.add_pizza(&PizzaSelection::promotion("Hawaiana", "Promoción M"))
            .unwrap();

        let order = b
            .submit(
                ClientRef::named("  Juan "),
                OrderType::Pickup,
                PaymentMethod::Cash,
            )
            .unwrap();
        assert_eq!(order.items.len(), 3);
        assert_eq!(order.total, 8500.0);
        assert_eq!(order.client.name.as_deref(), Some("Juan"));
        assert!(order.created_at.parse().is_ok());

        assert!(b.is_empty());
        assert_eq!(b.total(), 0.0);
    }

    #[test]
    fn test_submit_rejections_keep_draft() {
        let mut b = builder();
        assert!(matches!(
            b.submit(ClientRef::named("Ana"), OrderType::DineIn, PaymentMethod::Debit)
                .unwrap_err(),
            PosError::Validation(_)
        ));

        b.add_pizza(&PizzaSelection::whole("Pepperoni", PizzaSize::Medium, 1))
            .unwrap();
        assert!(matches!(
            b.submit(ClientRef::named("   "), OrderType::DineIn, PaymentMethod::Debit)
                .unwrap_err(),
            PosError::Validation(_)
        ));
        assert!(matches!(
            b.submit(ClientRef::named("Ana"), OrderType::Delivery, PaymentMethod::Debit)
                .unwrap_err(),
            PosError::Validation(_)
        ));
        assert_eq!(b.items().len(), 1);

        let client = ClientRef {
            name: Some("Ana".into()),
            address: Some("Los Aromos 55".into()),
            ..Default::default()
        };
        let order = b
            .submit(client, OrderType::Delivery, PaymentMethod::Transfer)
            .unwrap();
        assert_eq!(order.total, 5000.0);
    }
}
