use serde::{Deserialize, Serialize};
use std::fmt;

/// Размер пиццы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Medium,
    Large,
}

impl PizzaSize {
    /// Код размера (используется в файлах и API)
    pub fn code(&self) -> &'static str {
        match self {
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
        }
    }

    /// Название для чека и интерфейса
    pub fn display_name(&self) -> &'static str {
        match self {
            PizzaSize::Medium => "Mediana",
            PizzaSize::Large => "Familiar",
        }
    }

    pub fn all() -> Vec<PizzaSize> {
        vec![PizzaSize::Medium, PizzaSize::Large]
    }

    /// Парсинг из строки (без учёта регистра)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "medium" | "mediana" | "m" => Some(PizzaSize::Medium),
            "large" | "familiar" | "l" => Some(PizzaSize::Large),
            _ => None,
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_codes_and_labels() {
        assert_eq!(PizzaSize::from_code("medium"), Some(PizzaSize::Medium));
        assert_eq!(PizzaSize::from_code(" Familiar "), Some(PizzaSize::Large));
        assert_eq!(PizzaSize::from_code("xl"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&PizzaSize::Large).unwrap();
        assert_eq!(json, "\"large\"");
        let back: PizzaSize = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, PizzaSize::Medium);
    }
}
