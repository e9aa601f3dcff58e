use axum::Json;

use crate::domain::a006_ingredient::service::{get_catalog, IngredientCatalog};

/// GET /api/ingredients
pub async fn list_all() -> Json<IngredientCatalog> {
    Json(get_catalog())
}
