use super::repository;
use contracts::domain::a004_client::aggregate::{Client, ClientDto};

use crate::shared::error::PosError;

pub async fn list_all() -> Result<Vec<Client>, PosError> {
    repository::list_all().await
}

/// Регистрация клиента. Уникальность проверяется только по телефону.
pub async fn create(dto: ClientDto) -> Result<Client, PosError> {
    let client = Client::new_for_insert(&dto).map_err(PosError::Validation)?;

    let existing = repository::list_all().await?;
    ensure_phone_unique(&existing, &client)?;

    repository::insert(&client).await?;
    tracing::info!("Client registered: {}", client.to_string_id());
    Ok(client)
}

/// Поиск по телефону в любом допустимом формате
pub async fn find_by_phone(raw_phone: &str) -> Result<Option<Client>, PosError> {
    let phone = contracts::domain::a004_client::normalize_phone(raw_phone)
        .map_err(PosError::Validation)?;
    Ok(repository::list_all()
        .await?
        .into_iter()
        .find(|c| c.phone == phone))
}

fn ensure_phone_unique(existing: &[Client], client: &Client) -> Result<(), PosError> {
    if existing.iter().any(|c| c.phone == client.phone) {
        return Err(PosError::validation(format!(
            "Ya existe un cliente con el número {}",
            client.phone
        )));
    }
    Ok(())
}
