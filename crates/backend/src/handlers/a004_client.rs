use axum::extract::Query;
use axum::Json;
use contracts::domain::a004_client::aggregate::{Client, ClientDto};
use serde::Deserialize;

use crate::domain::a004_client;
use crate::shared::error::PosError;

#[derive(Debug, Deserialize)]
pub struct ClientQuery {
    pub phone: Option<String>,
}

/// GET /api/clients[?phone=]
pub async fn list_all(Query(query): Query<ClientQuery>) -> Result<Json<Vec<Client>>, PosError> {
    match query.phone {
        Some(phone) => {
            let found = a004_client::service::find_by_phone(&phone).await?;
            Ok(Json(found.into_iter().collect()))
        }
        None => Ok(Json(a004_client::service::list_all().await?)),
    }
}

/// POST /api/clients
pub async fn create(Json(dto): Json<ClientDto>) -> Result<Json<Client>, PosError> {
    Ok(Json(a004_client::service::create(dto).await?))
}
