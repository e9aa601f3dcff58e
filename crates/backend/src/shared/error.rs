use thiserror::Error;

/// Ошибки предметной области.
///
/// Ни одна из них не фатальна для процесса: отклонённая форма или
/// неполный отчёт.
#[derive(Debug, Error)]
pub enum PosError {
    /// Некорректный ввод пользователя (пустое поле, дубликат, количество < 1, ...)
    #[error("{0}")]
    Validation(String),

    /// Ссылка на пиццу, гарнир, акцию, клиента или заказ не найдена
    #[error("No encontrado: {0}")]
    NotFound(String),

    /// Не удалось записать или прочитать файл хранилища
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PosError {
    pub fn validation(message: impl Into<String>) -> Self {
        PosError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        PosError::NotFound(message.into())
    }
}

impl From<std::io::Error> for PosError {
    fn from(e: std::io::Error) -> Self {
        PosError::Storage(e.to_string())
    }
}

impl From<csv::Error> for PosError {
    fn from(e: csv::Error) -> Self {
        PosError::Storage(e.to_string())
    }
}
