use axum::Json;
use contracts::domain::a002_accompaniment::aggregate::{Accompaniment, AccompanimentDto};

use crate::domain::a002_accompaniment;
use crate::shared::error::PosError;

/// GET /api/accompaniments
pub async fn list_all() -> Result<Json<Vec<Accompaniment>>, PosError> {
    Ok(Json(a002_accompaniment::service::list_all().await?))
}

/// POST /api/accompaniments
pub async fn create(
    Json(dto): Json<AccompanimentDto>,
) -> Result<Json<Accompaniment>, PosError> {
    Ok(Json(a002_accompaniment::service::create(dto).await?))
}
