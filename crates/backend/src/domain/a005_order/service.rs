use super::builder::OrderBuilder;
use super::draft_tracker::DraftTracker;
use super::repository::{JsonlOrderRepository, NumberedOrder, OrderLog};
use contracts::domain::a005_order::{
    AccompanimentSelection, CustomPizzaSelection, DraftView, OrderLineItem, PizzaSelection,
    SubmitOrderRequest, SubmittedOrder,
};
use contracts::shared::menu::Menu;
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{a001_pizza, a002_accompaniment};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

static DRAFTS: Lazy<DraftTracker> = Lazy::new(DraftTracker::new);

/// Текущее меню: файлы каталога плюс акции и ингредиенты
pub async fn load_menu() -> Result<Menu, PosError> {
    let pizzas = a001_pizza::service::list_all().await?;
    let accompaniments = a002_accompaniment::service::list_all().await?;
    let bundle = get_storage()?.bundle.clone();
    Ok(Menu::new(pizzas, accompaniments, bundle))
}

/// Открыть черновик со снимком текущего меню
pub async fn create_draft() -> Result<Uuid, PosError> {
    let menu = load_menu().await?;
    let draft_id = DRAFTS.create(OrderBuilder::new(Arc::new(menu)));
    tracing::info!("Draft {} opened ({} open)", draft_id, DRAFTS.len());
    Ok(draft_id)
}

pub fn get_draft(draft_id: Uuid) -> Result<DraftView, PosError> {
    DRAFTS.inspect(draft_id, |builder| builder.view(draft_id))
}

pub fn add_pizza(draft_id: Uuid, selection: &PizzaSelection) -> Result<DraftView, PosError> {
    DRAFTS.with_draft(draft_id, |builder| {
        builder.add_pizza(selection)?;
        Ok(builder.view(draft_id))
    })
}

pub fn add_accompaniment(
    draft_id: Uuid,
    selection: &AccompanimentSelection,
) -> Result<DraftView, PosError> {
    DRAFTS.with_draft(draft_id, |builder| {
        builder.add_accompaniment(selection)?;
        Ok(builder.view(draft_id))
    })
}

pub fn add_custom_pizza(
    draft_id: Uuid,
    selection: &CustomPizzaSelection,
) -> Result<DraftView, PosError> {
    DRAFTS.with_draft(draft_id, |builder| {
        builder.add_custom_pizza(selection)?;
        Ok(builder.view(draft_id))
    })
}

pub fn remove_line_item(draft_id: Uuid, index: usize) -> Result<DraftView, PosError> {
    DRAFTS.with_draft(draft_id, |builder| {
        let removed: OrderLineItem = builder.remove_line_item(index)?;
        tracing::debug!("Draft {}: removed '{}'", draft_id, removed.label());
        Ok(builder.view(draft_id))
    })
}

pub fn discard_draft(draft_id: Uuid) -> Result<(), PosError> {
    DRAFTS
        .remove(draft_id)
        .map(|_| ())
        .ok_or_else(|| PosError::not_found(format!("borrador {}", draft_id)))
}

/// Оформить черновик и записать заказ в журнал
pub async fn submit(
    draft_id: Uuid,
    request: SubmitOrderRequest,
) -> Result<SubmittedOrder, PosError> {
    let repo = JsonlOrderRepository::from_storage()?;
    submit_draft(&DRAFTS, &repo, draft_id, request).await
}

/// Черновик забирается из трекера на время записи и возвращается,
/// если заказ отклонён или не записан: повторная отправка возможна.
async fn submit_draft(
    drafts: &DraftTracker,
    log: &dyn OrderLog,
    draft_id: Uuid,
    request: SubmitOrderRequest,
) -> Result<SubmittedOrder, PosError> {
    let builder = drafts
        .remove(draft_id)
        .ok_or_else(|| PosError::not_found(format!("borrador {}", draft_id)))?;

    let mut pending = builder.clone();
    let order = match pending.submit(request.client, request.order_type, request.payment_method) {
        Ok(order) => order,
        Err(e) => {
            drafts.restore(draft_id, builder);
            return Err(e);
        }
    };

    let number = match log.append(&order).await {
        Ok(number) => number,
        Err(e) => {
            tracing::error!(
                "Order from draft {} could not be saved: {}. Order: {:?}",
                draft_id,
                e,
                order
            );
            drafts.restore(draft_id, builder);
            return Err(e);
        }
    };

    tracing::info!(
        "Order #{} saved: {} items, total {}",
        number,
        order.item_count(),
        order.total
    );
    Ok(SubmittedOrder { number, order })
}

pub async fn list_orders() -> Result<Vec<SubmittedOrder>, PosError> {
    let load = JsonlOrderRepository::from_storage()?.load_all().await?;
    Ok(load
        .orders
        .into_iter()
        .map(|NumberedOrder { number, order }| SubmittedOrder { number, order })
        .collect())
}

pub async fn get_order(number: usize) -> Result<SubmittedOrder, PosError> {
    list_orders()
        .await?
        .into_iter()
        .find(|o| o.number == number)
        .ok_or_else(|| PosError::not_found(format!("pedido #{}", number)))
}
