use crate::domain::common::normalize_name;
use crate::enums::PizzaSize;
use serde::{Deserialize, Serialize};

/// Разделитель списка ингредиентов в строке-снимке позиции заказа
pub const INGREDIENT_DELIMITER: char = ',';

/// Базовая цена пиццы «собери сам» по размеру
const CUSTOM_BASE_MEDIUM: f64 = 4000.0;
const CUSTOM_BASE_LARGE: f64 = 8000.0;

// ============================================================================
// Price tier
// ============================================================================

/// Ценовая категория ингредиента (надбавка к базовой цене)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Low,
    Medium,
    High,
    Extra,
}

impl PriceTier {
    pub fn surcharge(&self) -> f64 {
        match self {
            PriceTier::Low => 500.0,
            PriceTier::Medium => 1000.0,
            PriceTier::High => 1900.0,
            PriceTier::Extra => 2500.0,
        }
    }

    pub fn all() -> Vec<PriceTier> {
        vec![
            PriceTier::Low,
            PriceTier::Medium,
            PriceTier::High,
            PriceTier::Extra,
        ]
    }
}

// ============================================================================
// Ingredient
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub tier: PriceTier,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, tier: PriceTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    pub fn surcharge(&self) -> f64 {
        self.tier.surcharge()
    }
}

/// Ингредиенты, доступные для пиццы «собери сам»
pub fn catalog() -> Vec<Ingredient> {
    use PriceTier::*;
    [
        ("Aceitunas", Low),
        ("Cebolla", Low),
        ("Zapallo Italiano", Low),
        ("Pimentón", Low),
        ("Tomate", Low),
        ("Choclo", Low),
        ("Salame", Medium),
        ("Pepperoni", Medium),
        ("Champiñones", Medium),
        ("Palmitos", Medium),
        ("Jamón", Medium),
        ("Tocino", Medium),
        ("Longaniza", Medium),
        ("Espárragos", Medium),
        ("Queso de Cabra", Medium),
        ("Rúcula", Medium),
        ("Piña", Medium),
        ("Jamón Serrano", High),
        ("Pollo", High),
        ("Doble Queso", High),
        ("Camarones", Extra),
    ]
    .into_iter()
    .map(|(name, tier)| Ingredient::new(name, tier))
    .collect()
}

pub fn custom_base_price(size: PizzaSize) -> f64 {
    match size {
        PizzaSize::Medium => CUSTOM_BASE_MEDIUM,
        PizzaSize::Large => CUSTOM_BASE_LARGE,
    }
}

// ============================================================================
// Delimited ingredient lists
// ============================================================================

/// Название ингредиента не должно ломать строку-снимок
pub fn validate_ingredient_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("El nombre del ingrediente no puede estar vacío".into());
    }
    if trimmed.contains(INGREDIENT_DELIMITER) || trimmed.contains(';') {
        return Err(format!(
            "El ingrediente '{}' no puede contener ',' ni ';'",
            trimmed
        ));
    }
    Ok(())
}

pub fn join_ingredients<S: AsRef<str>>(ingredients: &[S]) -> String {
    ingredients
        .iter()
        .map(|s| s.as_ref().trim())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Разбор строки-снимка в нормализованные названия (trim + lowercase).
///
/// Пустая строка означает «без ингредиентов». Пустой элемент внутри
/// списка (например `"jamón,,piña"`) считается повреждённой записью.
pub fn split_ingredients(raw: &str) -> Result<Vec<String>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    for (position, part) in raw.split(INGREDIENT_DELIMITER).enumerate() {
        let name = normalize_name(part);
        if name.is_empty() {
            return Err(format!(
                "Malformed ingredient list '{}': empty entry at position {}",
                raw, position
            ));
        }
        result.push(name);
    }
    Ok(result)
}
