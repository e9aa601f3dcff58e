pub mod csv_file;
pub mod storage;

use crate::shared::error::PosError;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Дописать байты в конец файла, создавая файл и каталог при необходимости
pub async fn append_bytes(path: &Path, bytes: &[u8]) -> Result<(), PosError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PosError::Storage(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| PosError::Storage(format!("Cannot open {}: {}", path.display(), e)))?;

    file.write_all(bytes)
        .await
        .map_err(|e| PosError::Storage(format!("Cannot write {}: {}", path.display(), e)))?;
    file.flush().await?;
    Ok(())
}

/// Прочитать файл хранилища целиком.
///
/// Отсутствующий или нечитаемый файл означает пустое хранилище: `None`.
pub async fn read_store(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Store {} does not exist yet", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Store {} is unreadable, treating as empty: {}", path.display(), e);
            None
        }
    }
}

/// Прочитать существующий файл хранилища; ошибка чтения не скрывается
pub async fn read_existing_store(path: &Path) -> Result<String, PosError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PosError::Storage(format!("Cannot read {}: {}", path.display(), e)))
}

/// Файл отсутствует или пуст: первая запись должна начинаться с заголовка
pub async fn is_new_store(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Уникальный временный каталог для теста
    pub fn temp_dir(prefix: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()))
    }
}
