use crate::domain::common::same_name;
use serde::{Deserialize, Serialize};

/// Acompañamiento: фиксированная цена, не зависит от размера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accompaniment {
    pub name: String,
    pub price: f64,
}

impl Accompaniment {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            price,
        }
    }

    pub fn from_dto(dto: &AccompanimentDto) -> Self {
        Self::new(dto.name.clone(), dto.price)
    }

    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Por favor, rellena todos los campos".into());
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err("El precio debe ser mayor que cero".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccompanimentDto {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Accompaniment::new("Palitos de ajo", 2500.0).validate().is_ok());
        assert!(Accompaniment::new("  ", 2500.0).validate().is_err());
        assert!(Accompaniment::new("Papas", -1.0).validate().is_err());
        assert!(Accompaniment::new("Papas", f64::NAN).validate().is_err());
    }
}
