use crate::shared::config::{get_data_dir, BusinessConfig, Config};
use crate::shared::error::PosError;
use contracts::shared::menu::BundleSettings;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

static STORAGE: OnceCell<Storage> = OnceCell::new();

/// Файловое хранилище и настройки, нужные репозиториям и чекам
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
    pub bundle: BundleSettings,
    pub business: BusinessConfig,
}

impl Storage {
    pub fn new(data_dir: PathBuf, bundle: BundleSettings, business: BusinessConfig) -> Self {
        Self {
            data_dir,
            bundle,
            business,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Полный путь к файлу хранилища
    pub fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// Создать каталог данных и зарегистрировать хранилище процесса
pub async fn initialize_storage(config: &Config) -> anyhow::Result<&'static Storage> {
    let data_dir = get_data_dir(config);
    tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
        anyhow::anyhow!("Cannot create data directory {}: {}", data_dir.display(), e)
    })?;
    tracing::info!("Data directory: {}", data_dir.display());

    let storage = Storage::new(
        data_dir,
        config.bundle.to_settings(),
        config.business.clone(),
    );
    STORAGE
        .set(storage)
        .map_err(|_| anyhow::anyhow!("Storage already initialized"))?;
    get_storage().map_err(|e| anyhow::anyhow!(e))
}

pub fn get_storage() -> Result<&'static Storage, PosError> {
    STORAGE
        .get()
        .ok_or_else(|| PosError::Storage("Storage has not been initialized".into()))
}
