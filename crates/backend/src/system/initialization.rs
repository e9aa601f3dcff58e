use anyhow::Result;

use crate::domain::a005_order::repository::{JsonlOrderRepository, OrderLog};
use crate::domain::{a001_pizza, a002_accompaniment, a004_client};
use crate::shared::config::Config;
use crate::shared::data::storage::initialize_storage;

/// Подготовка хранилища и сводка по данным при старте
pub async fn initialize(config: &Config) -> Result<()> {
    let storage = initialize_storage(config).await?;

    let pizzas = a001_pizza::service::list_all().await?;
    let accompaniments = a002_accompaniment::service::list_all().await?;
    let clients = a004_client::service::list_all().await?;
    let orders = JsonlOrderRepository::from_storage()?.load_all().await?;

    tracing::info!(
        "Storage ready at {}: {} pizzas, {} accompaniments, {} clients, {} orders",
        storage.data_dir().display(),
        pizzas.len(),
        accompaniments.len(),
        clients.len(),
        orders.orders.len()
    );
    if orders.skipped > 0 {
        tracing::warn!("{} unreadable lines in the order log", orders.skipped);
    }
    if pizzas.is_empty() {
        tracing::warn!("Menu is empty: add pizzas via POST /api/pizzas");
    }
    Ok(())
}
