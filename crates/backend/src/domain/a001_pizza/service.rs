use super::repository;
use contracts::domain::a001_pizza::aggregate::{Pizza, PizzaDto};

use crate::shared::error::PosError;

pub async fn list_all() -> Result<Vec<Pizza>, PosError> {
    repository::list_all().await
}

/// Добавление пиццы в меню
pub async fn create(dto: PizzaDto) -> Result<Pizza, PosError> {
    let pizza = Pizza::from_dto(&dto);
    pizza.validate().map_err(PosError::Validation)?;

    let existing = repository::list_all().await?;
    ensure_unique(&existing, &pizza)?;

    repository::insert(&pizza).await?;
    tracing::info!("Pizza added to menu: {}", pizza.name);
    Ok(pizza)
}

fn ensure_unique(existing: &[Pizza], pizza: &Pizza) -> Result<(), PosError> {
    if existing.iter().any(|p| p.is_named(&pizza.name)) {
        return Err(PosError::validation(format!(
            "La pizza \"{}\" ya existe en el menú",
            pizza.name
        )));
    }
    Ok(())
}
