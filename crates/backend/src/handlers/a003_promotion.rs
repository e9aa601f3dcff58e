use axum::Json;
use contracts::domain::a003_promotion::Promotion;

use crate::domain::a003_promotion;

/// GET /api/promotions
pub async fn list_all() -> Json<Vec<Promotion>> {
    Json(a003_promotion::service::list_all())
}
