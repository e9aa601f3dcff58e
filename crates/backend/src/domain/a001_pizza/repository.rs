use contracts::domain::a001_pizza::aggregate::{Pizza, SizePrices};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shared::data::csv_file::{append_row, read_rows};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

pub const FILE_NAME: &str = "pizzas.csv";

/// Ingredients inside one CSV cell
const LIST_SEPARATOR: char = ';';

/// Строка pizzas.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaRow {
    pub name: String,
    pub medium: f64,
    pub large: f64,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub image: String,
}

impl From<&Pizza> for PizzaRow {
    fn from(p: &Pizza) -> Self {
        Self {
            name: p.name.clone(),
            medium: p.prices.medium,
            large: p.prices.large,
            ingredients: p.ingredients.join(&LIST_SEPARATOR.to_string()),
            image: p.image.clone().unwrap_or_default(),
        }
    }
}

impl From<PizzaRow> for Pizza {
    fn from(row: PizzaRow) -> Self {
        Pizza::new(
            row.name,
            SizePrices::new(row.medium, row.large),
            row.ingredients
                .split(LIST_SEPARATOR)
                .map(str::to_string)
                .collect(),
            Some(row.image),
        )
    }
}

fn store_path() -> Result<PathBuf, PosError> {
    Ok(get_storage()?.file(FILE_NAME))
}

pub async fn list_all() -> Result<Vec<Pizza>, PosError> {
    Ok(load(&store_path()?).await)
}

pub async fn insert(pizza: &Pizza) -> Result<(), PosError> {
    append(&store_path()?, pizza).await
}

pub(crate) async fn load(path: &Path) -> Vec<Pizza> {
    let load = read_rows::<PizzaRow>(path).await;
    if load.skipped > 0 {
        tracing::warn!("{} malformed pizza rows skipped", load.skipped);
    }
    load.rows.into_iter().map(Pizza::from).collect()
}

pub(crate) async fn append(path: &Path, pizza: &Pizza) -> Result<(), PosError> {
    append_row(path, &PizzaRow::from(pizza)).await
}
