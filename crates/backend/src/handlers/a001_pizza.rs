use axum::Json;
use contracts::domain::a001_pizza::aggregate::{Pizza, PizzaDto};

use crate::domain::a001_pizza;
use crate::shared::error::PosError;

/// GET /api/pizzas
pub async fn list_all() -> Result<Json<Vec<Pizza>>, PosError> {
    Ok(Json(a001_pizza::service::list_all().await?))
}

/// POST /api/pizzas
pub async fn create(Json(dto): Json<PizzaDto>) -> Result<Json<Pizza>, PosError> {
    Ok(Json(a001_pizza::service::create(dto).await?))
}
