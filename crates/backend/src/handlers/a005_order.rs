use axum::extract::Path;
use axum::response::Response;
use axum::Json;
use contracts::domain::a005_order::{
    AccompanimentSelection, CustomPizzaSelection, DraftCreated, DraftView, PizzaSelection,
    SubmitOrderRequest, SubmittedOrder,
};
use contracts::shared::menu::Menu;
use uuid::Uuid;

use super::plain_text;
use crate::domain::a005_order::service;
use crate::shared::error::PosError;
use crate::usecases::u501_print_receipt;

fn parse_draft_id(id: &str) -> Result<Uuid, PosError> {
    Uuid::parse_str(id).map_err(|_| PosError::validation(format!("Identificador inválido: {}", id)))
}

/// GET /api/menu
pub async fn get_menu() -> Result<Json<Menu>, PosError> {
    Ok(Json(service::load_menu().await?))
}

/// POST /api/orders/drafts
pub async fn create_draft() -> Result<Json<DraftCreated>, PosError> {
    let draft_id = service::create_draft().await?;
    Ok(Json(DraftCreated { draft_id }))
}

/// GET /api/orders/drafts/:id
pub async fn get_draft(Path(id): Path<String>) -> Result<Json<DraftView>, PosError> {
    Ok(Json(service::get_draft(parse_draft_id(&id)?)?))
}

/// DELETE /api/orders/drafts/:id
pub async fn discard_draft(Path(id): Path<String>) -> Result<(), PosError> {
    service::discard_draft(parse_draft_id(&id)?)
}

/// POST /api/orders/drafts/:id/pizza
pub async fn add_pizza(
    Path(id): Path<String>,
    Json(selection): Json<PizzaSelection>,
) -> Result<Json<DraftView>, PosError> {
    Ok(Json(service::add_pizza(parse_draft_id(&id)?, &selection)?))
}

/// POST /api/orders/drafts/:id/accompaniment
pub async fn add_accompaniment(
    Path(id): Path<String>,
    Json(selection): Json<AccompanimentSelection>,
) -> Result<Json<DraftView>, PosError> {
    Ok(Json(service::add_accompaniment(
        parse_draft_id(&id)?,
        &selection,
    )?))
}

/// POST /api/orders/drafts/:id/custom-pizza
pub async fn add_custom_pizza(
    Path(id): Path<String>,
    Json(selection): Json<CustomPizzaSelection>,
) -> Result<Json<DraftView>, PosError> {
    Ok(Json(service::add_custom_pizza(
        parse_draft_id(&id)?,
        &selection,
    )?))
}

/// DELETE /api/orders/drafts/:id/items/:index
pub async fn remove_item(
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<DraftView>, PosError> {
    Ok(Json(service::remove_line_item(parse_draft_id(&id)?, index)?))
}

/// POST /api/orders/drafts/:id/submit
pub async fn submit(
    Path(id): Path<String>,
    Json(request): Json<SubmitOrderRequest>,
) -> Result<Json<SubmittedOrder>, PosError> {
    Ok(Json(service::submit(parse_draft_id(&id)?, request).await?))
}

/// GET /api/orders
pub async fn list_orders() -> Result<Json<Vec<SubmittedOrder>>, PosError> {
    Ok(Json(service::list_orders().await?))
}

/// GET /api/orders/:number
pub async fn get_order(Path(number): Path<usize>) -> Result<Json<SubmittedOrder>, PosError> {
    Ok(Json(service::get_order(number).await?))
}

/// GET /api/orders/:number/receipt
pub async fn get_receipt(Path(number): Path<usize>) -> Result<Response, PosError> {
    let text = u501_print_receipt::service::customer_receipt(number).await?;
    Ok(plain_text(text))
}

/// GET /api/orders/:number/kitchen-ticket
pub async fn get_kitchen_ticket(Path(number): Path<usize>) -> Result<Response, PosError> {
    let text = u501_print_receipt::service::kitchen_ticket(number).await?;
    Ok(plain_text(text))
}
