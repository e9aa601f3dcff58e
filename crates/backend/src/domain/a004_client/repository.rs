use contracts::domain::a004_client::aggregate::{Client, ClientId};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shared::data::csv_file::{append_row, read_rows};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

pub const FILE_NAME: &str = "clients.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClientRow {
    id: String,
    name: String,
    phone: String,
    address: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.to_string_id(),
            name: c.name.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
        }
    }
}

impl ClientRow {
    fn into_aggregate(self) -> Result<Client, String> {
        Ok(Client {
            id: ClientId::from_string(&self.id)?,
            name: self.name,
            phone: self.phone,
            address: self.address,
        })
    }
}

fn store_path() -> Result<PathBuf, PosError> {
    Ok(get_storage()?.file(FILE_NAME))
}

pub async fn list_all() -> Result<Vec<Client>, PosError> {
    Ok(load(&store_path()?).await)
}

pub async fn get_by_id(id: ClientId) -> Result<Option<Client>, PosError> {
    Ok(list_all().await?.into_iter().find(|c| c.id == id))
}

pub async fn insert(client: &Client) -> Result<(), PosError> {
    append(&store_path()?, client).await
}

pub(crate) async fn load(path: &Path) -> Vec<Client> {
    let load = read_rows::<ClientRow>(path).await;
    let mut clients = Vec::with_capacity(load.rows.len());
    let mut skipped = load.skipped;
    for row in load.rows {
        match row.into_aggregate() {
            Ok(client) => clients.push(client),
            Err(e) => {
                tracing::warn!("Skipping client row: {}", e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::warn!("{} malformed client rows skipped", skipped);
    }
    clients
}

pub(crate) async fn append(path: &Path, client: &Client) -> Result<(), PosError> {
    append_row(path, &ClientRow::from(client)).await
}
