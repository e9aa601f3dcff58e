use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Код страны и мобильный префикс, которые добавляются к номеру клиента
pub const PHONE_PREFIX: &str = "+569";
const PHONE_LOCAL_DIGITS: usize = 8;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Приведение номера к виду `+569XXXXXXXX`.
///
/// Принимает номер с префиксом или без него, с пробелами и дефисами.
pub fn normalize_phone(raw: &str) -> Result<String, String> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect();

    let local = if let Some(rest) = compact.strip_prefix(PHONE_PREFIX) {
        rest
    } else if let Some(rest) = compact.strip_prefix("569") {
        rest
    } else if compact.len() == PHONE_LOCAL_DIGITS + 1 && compact.starts_with('9') {
        &compact[1..]
    } else {
        compact.as_str()
    };

    if local.len() != PHONE_LOCAL_DIGITS || !local.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "El número debe tener {} dígitos después de {}",
            PHONE_LOCAL_DIGITS, PHONE_PREFIX
        ));
    }

    Ok(format!("{}{}", PHONE_PREFIX, local))
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Client {
    /// Создание нового клиента: номер нормализуется, все поля обязательны
    pub fn new_for_insert(dto: &ClientDto) -> Result<Self, String> {
        let client = Self {
            id: ClientId::new_v4(),
            name: dto.name.trim().to_string(),
            phone: normalize_phone(&dto.phone)?,
            address: dto.address.trim().to_string(),
        };
        client.validate()?;
        Ok(client)
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() || self.phone.is_empty() || self.address.is_empty() {
            return Err("Por favor, completa todos los campos.".into());
        }
        Ok(())
    }

    pub fn to_ref(&self) -> ClientRef {
        ClientRef {
            client_id: Some(self.to_string_id()),
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            address: Some(self.address.clone()),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub name: String,
    pub phone: String,
    pub address: String,
}

// ============================================================================
// Client reference inside an order
// ============================================================================

/// Ссылка на клиента в заказе. Одна структура для всех случаев:
/// от «только имя» до полной карточки из справочника.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ClientRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Пустые строки превращаются в None
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            client_id: clean(self.client_id),
            name: clean(self.name),
            phone: clean(self.phone),
            address: clean(self.address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }

    pub fn display_name(&self) -> String {
        match (&self.name, &self.phone) {
            (Some(name), _) => name.clone(),
            (None, Some(phone)) => phone.clone(),
            (None, None) => "Sin nombre".to_string(),
        }
    }
}
