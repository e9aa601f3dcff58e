use contracts::domain::a002_accompaniment::aggregate::Accompaniment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shared::data::csv_file::{append_row, read_rows};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

pub const FILE_NAME: &str = "accompaniments.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AccompanimentRow {
    name: String,
    price: f64,
}

fn store_path() -> Result<PathBuf, PosError> {
    Ok(get_storage()?.file(FILE_NAME))
}

pub async fn list_all() -> Result<Vec<Accompaniment>, PosError> {
    Ok(load(&store_path()?).await)
}

pub async fn insert(item: &Accompaniment) -> Result<(), PosError> {
    append(&store_path()?, item).await
}

pub(crate) async fn load(path: &Path) -> Vec<Accompaniment> {
    let load = read_rows::<AccompanimentRow>(path).await;
    if load.skipped > 0 {
        tracing::warn!("{} malformed accompaniment rows skipped", load.skipped);
    }
    load.rows
        .into_iter()
        .map(|row| Accompaniment::new(row.name, row.price))
        .collect()
}

pub(crate) async fn append(path: &Path, item: &Accompaniment) -> Result<(), PosError> {
    let row = AccompanimentRow {
        name: item.name.clone(),
        price: item.price,
    };
    append_row(path, &row).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::temp_dir;

    #[tokio::test]
    async fn test_accompaniment_round_trip() {
        let dir = temp_dir("accompaniments");
        let path = dir.join(FILE_NAME);
        assert!(load(&path).await.is_empty());

        let papas = Accompaniment::new("Papas fritas", 3000.0);
        append(&path, &papas).await.unwrap();

        assert_eq!(load(&path).await, vec![papas]);
        let _ = std::fs::remove_dir_all(dir);
    }
}
