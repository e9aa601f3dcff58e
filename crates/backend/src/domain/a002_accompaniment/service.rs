use super::repository;
use contracts::domain::a002_accompaniment::aggregate::{Accompaniment, AccompanimentDto};

use crate::shared::error::PosError;

pub async fn list_all() -> Result<Vec<Accompaniment>, PosError> {
    repository::list_all().await
}

pub async fn create(dto: AccompanimentDto) -> Result<Accompaniment, PosError> {
    let item = Accompaniment::from_dto(&dto);
    item.validate().map_err(PosError::Validation)?;

    let existing = repository::list_all().await?;
    if existing.iter().any(|a| a.is_named(&item.name)) {
        return Err(PosError::validation(format!(
            "El acompañamiento \"{}\" ya existe",
            item.name
        )));
    }

    repository::insert(&item).await?;
    tracing::info!("Accompaniment added: {} ({})", item.name, item.price);
    Ok(item)
}
