use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Форматы даты-времени, которые писали старые версии (локаль es-CL)
const LEGACY_DATETIME_FORMATS: [&str; 4] = [
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];
const LEGACY_DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Момент создания заказа в том виде, в каком он лежит в хранилище.
///
/// Новые заказы пишутся в RFC 3339 с локальным смещением. Старые записи
/// могут содержать строку в локальном формате; разбор выполняется только
/// при агрегации, и неразборчивая строка не мешает чтению заказа.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTimestamp(String);

impl OrderTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn from_datetime<Tz: chrono::TimeZone>(value: DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(value.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// Обернуть строку как есть (старые записи, тесты)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Локальные дата и время заказа
    pub fn parse(&self) -> Result<NaiveDateTime, String> {
        let raw = self.0.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.naive_local());
        }
        for format in LEGACY_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(dt);
            }
        }
        for format in LEGACY_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                    return Ok(dt);
                }
            }
        }

        Err(format!("Unrecognized order date '{}'", self.0))
    }

    pub fn date(&self) -> Result<NaiveDate, String> {
        self.parse().map(|dt| dt.date())
    }
}

impl fmt::Display for OrderTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
